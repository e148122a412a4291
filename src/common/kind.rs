use bitflags::bitflags;
use std::fmt;
use std::fs::FileType;
use std::os::unix::fs::FileTypeExt;

bitflags! {
    /// File type bits of a filesystem entry.
    ///
    /// `DEVICE` is shared by block and character devices; `CHAR_DEVICE` is
    /// only meaningful together with it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TypeBits: u32 {
        const DIRECTORY = 1 << 31;
        const SYMLINK = 1 << 27;
        const DEVICE = 1 << 26;
        const NAMED_PIPE = 1 << 25;
        const SOCKET = 1 << 24;
        const CHAR_DEVICE = 1 << 21;
    }
}

/// Unix `st_mode` file type field.
const S_IFMT: u32 = 0o170000;
const S_IFSOCK: u32 = 0o140000;
const S_IFLNK: u32 = 0o120000;
const S_IFBLK: u32 = 0o060000;
const S_IFDIR: u32 = 0o040000;
const S_IFCHR: u32 = 0o020000;
const S_IFIFO: u32 = 0o010000;

impl TypeBits {
    /// Decodes the file type field of a raw Unix `st_mode`.
    pub fn from_mode(mode: u32) -> Self {
        match mode & S_IFMT {
            S_IFDIR => TypeBits::DIRECTORY,
            S_IFLNK => TypeBits::SYMLINK,
            S_IFCHR => TypeBits::DEVICE | TypeBits::CHAR_DEVICE,
            S_IFBLK => TypeBits::DEVICE,
            S_IFIFO => TypeBits::NAMED_PIPE,
            S_IFSOCK => TypeBits::SOCKET,
            _ => TypeBits::empty(),
        }
    }
}

impl From<FileType> for TypeBits {
    fn from(ft: FileType) -> Self {
        let mut bits = TypeBits::empty();
        bits.set(TypeBits::DIRECTORY, ft.is_dir());
        bits.set(TypeBits::SYMLINK, ft.is_symlink());
        bits.set(TypeBits::DEVICE, ft.is_block_device() || ft.is_char_device());
        bits.set(TypeBits::CHAR_DEVICE, ft.is_char_device());
        bits.set(TypeBits::NAMED_PIPE, ft.is_fifo());
        bits.set(TypeBits::SOCKET, ft.is_socket());
        bits
    }
}

/// Label shown in the `Type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Directory,
    Symlink,
    Character,
    Block,
    Fifo,
    Socket,
    File,
}

impl Kind {
    pub fn label(self) -> &'static str {
        match self {
            Kind::Directory => "Directory",
            Kind::Symlink => "Symlink",
            Kind::Character => "Character",
            Kind::Block => "Block",
            Kind::Fifo => "Fifo",
            Kind::Socket => "Socket",
            Kind::File => "File",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Classifies type bits. Anything unrecognized is a regular `File`.
pub fn classify(bits: TypeBits) -> Kind {
    if bits.contains(TypeBits::DIRECTORY) {
        Kind::Directory
    } else if bits.contains(TypeBits::SYMLINK) {
        Kind::Symlink
    } else if bits.contains(TypeBits::DEVICE) {
        if bits.contains(TypeBits::CHAR_DEVICE) { Kind::Character } else { Kind::Block }
    } else if bits.contains(TypeBits::NAMED_PIPE) {
        Kind::Fifo
    } else if bits.contains(TypeBits::SOCKET) {
        Kind::Socket
    } else {
        Kind::File
    }
}
