use crate::common::kind::TypeBits;
use std::ffi::OsString;
use std::fs::Metadata;
use std::io;
use std::os::unix::fs::MetadataExt;
use std::path::{Component, Path, PathBuf};

/// Raw metadata of a single entry, as fed to the formatters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub name: OsString,
    pub type_bits: TypeBits,
    pub mode: u32,
    /// Only regular files carry a size.
    pub size: Option<u64>,
    pub uid: u32,
}

impl RawEntry {
    pub fn from_metadata(name: OsString, metadata: &Metadata) -> Self {
        RawEntry {
            name,
            type_bits: TypeBits::from_mode(metadata.mode()),
            mode: metadata.mode(),
            size: metadata.is_file().then_some(metadata.len()),
            uid: metadata.uid(),
        }
    }
}

/// Makes `path` absolute against the working directory and drops `.` and
/// `..` components. Symlinks are left untouched.
pub fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    let abs = std::path::absolute(path)?;
    log::debug!("resolved {} to {}", path.display(), abs.display());
    Ok(normalize_path(&abs))
}

/// Removes "." and ".." without checking that anything exists.
#[inline]
fn normalize_path(path: &Path) -> PathBuf {
    let mut comps = Vec::with_capacity(path.components().count());
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                if !matches!(comps.last(), Some(Component::RootDir) | None) {
                    comps.pop();
                }
            }
            other => comps.push(other),
        }
    }
    comps.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(Path::new("/usr/./bin/../lib")), PathBuf::from("/usr/lib"));
        assert_eq!(normalize_path(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(normalize_path(Path::new("/a/b/..")), PathBuf::from("/a"));
    }

    #[test]
    fn test_absolute_path_is_absolute() -> io::Result<()> {
        let path = absolute_path(Path::new("."))?;
        assert!(path.is_absolute());
        assert_eq!(path, normalize_path(&std::env::current_dir()?));
        Ok(())
    }

    #[test]
    fn test_raw_entry_sizes() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let file = dir.path().join("data.bin");
        std::fs::write(&file, vec![0u8; 2048])?;

        let raw = RawEntry::from_metadata("data.bin".into(), &std::fs::metadata(&file)?);
        assert_eq!(raw.size, Some(2048));
        assert_eq!(raw.type_bits, TypeBits::empty());

        let raw = RawEntry::from_metadata("dir".into(), &std::fs::metadata(dir.path())?);
        assert_eq!(raw.size, None);
        assert_eq!(raw.type_bits, TypeBits::DIRECTORY);
        Ok(())
    }
}
