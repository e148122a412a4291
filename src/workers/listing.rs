use crate::common::kind::{self, Kind};
use crate::common::style::{Fragment, Styled, Tag};
use crate::common::{permissions, size};
use crate::error::Failure;
use crate::utils::dir::RawEntry;
use crate::utils::owner::OwnerCache;
use colored::Colorize;
use lscolors::LsColors;
use std::ffi::OsString;
use std::fmt;
use std::fs::{self, Metadata};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const OWNER_MIN_WIDTH: usize = 7;
/// `rwxrwxrwx (777)`
const PERMISSIONS_WIDTH: usize = 15;
const TYPE_WIDTH: usize = 9;

/// One formatted line of the table.
#[derive(Debug, Clone)]
pub struct Row {
    pub owner: String,
    pub size: Styled,
    pub permissions: Styled,
    pub kind: Kind,
    pub name: String,
    pub path: PathBuf,
}

impl Row {
    pub fn from_raw(raw: RawEntry, parent: &Path, owners: &mut OwnerCache) -> Self {
        Row {
            owner: owners.owner_label(raw.uid),
            size: size::format_optional(raw.size),
            permissions: permissions::format(raw.mode).display(),
            kind: kind::classify(raw.type_bits),
            name: raw.name.to_string_lossy().into_owned(),
            path: parent.join(&raw.name),
        }
    }

    /// Lays the row out in columns. Padding is computed from the visible
    /// width, so painted cells line up with plain ones.
    pub fn line(&self, owner_width: usize, name: &dyn fmt::Display, paint: bool) -> String {
        let (size, perms) = if paint {
            (self.size.paint(), self.permissions.paint())
        } else {
            (self.size.to_string(), self.permissions.to_string())
        };
        let size_pad = size::WIDTH.saturating_sub(self.size.width());
        let perms_pad = PERMISSIONS_WIDTH.saturating_sub(self.permissions.width());
        format!(
            "{:<owner_width$}  {:size_pad$}{size}  {perms}{:perms_pad$}  {:>TYPE_WIDTH$}  {name}",
            self.owner, "", "", self.kind
        )
    }
}

/// Every entry of one directory.
#[derive(Debug)]
pub struct Listing {
    pub path: PathBuf,
    pub rows: Vec<Row>,
    /// Entries read from the directory, including skipped ones.
    pub total: usize,
}

impl Listing {
    /// Reads `path`, which must already be known to be a directory.
    pub fn collect(path: &Path, owners: &mut OwnerCache) -> anyhow::Result<Self> {
        let read_dir = fs::read_dir(path).map_err(|err| {
            log::debug!("read_dir {}: {err}", path.display());
            Failure::read_directory()
        })?;

        // DirEntry::metadata does not follow symlinks
        let entries = read_dir.map(|entry| entry.map(|e| (e.file_name(), e.metadata())));
        Ok(Self::from_entries(path, entries, owners))
    }

    /// Builds the listing from `(name, metadata)` pairs.
    ///
    /// An entry that cannot be read, or whose metadata cannot be read, is
    /// skipped. Only the latter still counts towards `total`.
    pub fn from_entries(
        path: &Path,
        entries: impl IntoIterator<Item = io::Result<(OsString, io::Result<Metadata>)>>,
        owners: &mut OwnerCache,
    ) -> Self {
        let mut rows = Vec::new();
        let mut total = 0usize;
        for entry in entries {
            let (name, metadata) = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("skipping unreadable entry in {}: {err}", path.display());
                    continue;
                }
            };
            total += 1;

            let metadata = match metadata {
                Ok(metadata) => metadata,
                Err(err) => {
                    log::warn!("skipping {}: {err}", path.join(&name).display());
                    continue;
                }
            };

            let raw = RawEntry::from_metadata(name, &metadata);
            rows.push(Row::from_raw(raw, path, owners));
        }
        rows.sort_by(|a, b| a.name.cmp(&b.name));

        Listing { path: path.to_path_buf(), rows, total }
    }

    /// Width of the `Owner` column: the longest owner, at least 7.
    pub fn owner_width(&self) -> usize {
        self.rows.iter().map(|row| row.owner.chars().count()).fold(OWNER_MIN_WIDTH, usize::max)
    }

    pub fn header(&self) -> String {
        format!(
            "{:<owner_width$}  {:>size_width$}  {:<PERMISSIONS_WIDTH$}  {:>TYPE_WIDTH$}  Name",
            "Owner",
            "Size",
            "Permissions",
            "Type",
            owner_width = self.owner_width(),
            size_width = size::WIDTH,
        )
    }

    pub fn footer(&self) -> Styled {
        Styled(vec![
            Fragment::tagged("Path:", Tag::Label),
            Fragment::plain(format!(" {}.\n", self.path.display())),
            Fragment::tagged("Total:", Tag::Label),
            Fragment::plain(format!(" {} entries.", self.total)),
        ])
    }
}

/// Reveals the entries of the directory at `path`.
pub fn run(path: &Path, ls_colors: &LsColors) -> anyhow::Result<()> {
    let metadata = fs::metadata(path).map_err(|err| {
        log::debug!("stat {}: {err}", path.display());
        Failure::metadata()
    })?;
    if !metadata.is_dir() {
        return Err(Failure::not_a_directory().into());
    }

    let mut owners = OwnerCache::new();
    let listing = Listing::collect(path, &mut owners)?;
    print_listing(&listing, ls_colors)
}

pub fn print_listing(listing: &Listing, ls_colors: &LsColors) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();

    let owner_width = listing.owner_width();
    writeln!(out, "{}", listing.header().as_str().red().bold())?;
    for row in &listing.rows {
        writeln!(out, "{}", row.line(owner_width, &style_entry_name(row, ls_colors), true))?;
    }
    writeln!(out)?;
    writeln!(out, "{}", listing.footer().paint())?;
    out.flush()?;

    Ok(())
}

#[inline]
fn style_entry_name(row: &Row, ls_colors: &LsColors) -> colored::ColoredString {
    let name = row.name.as_str();

    let mut styled = match row.kind {
        Kind::Directory => name.blue().bold(),
        Kind::Symlink => name.cyan(),
        _ => name.normal(),
    };

    // LS colors always take precedence
    if let Some(ls_style) = ls_colors.style_for_path(&row.path) {
        let mut ls_styled = name.normal();

        if let Some(fg) = ls_style.foreground {
            ls_styled = ls_styled.color(ls_color_to_colored(fg));
        }
        if ls_style.font_style.bold {
            ls_styled = ls_styled.bold();
        }
        if ls_style.font_style.italic {
            ls_styled = ls_styled.italic();
        }
        if ls_style.font_style.underline {
            ls_styled = ls_styled.underline();
        }
        styled = ls_styled;
    }

    styled
}

#[inline]
fn ls_color_to_colored(ls_color: lscolors::Color) -> colored::Color {
    use lscolors::Color as LsColor;
    match ls_color {
        LsColor::Black => colored::Color::Black,
        LsColor::Red => colored::Color::Red,
        LsColor::Green => colored::Color::Green,
        LsColor::Yellow => colored::Color::Yellow,
        LsColor::Blue => colored::Color::Blue,
        LsColor::Magenta => colored::Color::Magenta,
        LsColor::Cyan => colored::Color::Cyan,
        LsColor::White => colored::Color::White,
        LsColor::BrightBlack => colored::Color::BrightBlack,
        LsColor::BrightRed => colored::Color::BrightRed,
        LsColor::BrightGreen => colored::Color::BrightGreen,
        LsColor::BrightYellow => colored::Color::BrightYellow,
        LsColor::BrightBlue => colored::Color::BrightBlue,
        LsColor::BrightMagenta => colored::Color::BrightMagenta,
        LsColor::BrightCyan => colored::Color::BrightCyan,
        LsColor::BrightWhite => colored::Color::BrightWhite,
        LsColor::Fixed(_) => colored::Color::White,
        LsColor::RGB(r, g, b) => colored::Color::TrueColor { r, g, b },
    }
}
