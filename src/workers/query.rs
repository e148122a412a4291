use crate::common::style::{Fragment, Styled};
use crate::common::{kind, permissions, size};
use crate::error::Failure;
use crate::utils::owner::OwnerCache;
use anyhow::Context;
use chrono::{DateTime, Local};
use std::fs::{self, Metadata};
use std::io::{self, Write};
use std::os::unix::fs::MetadataExt;
use std::path::Path;

/// A single datum to reveal about a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    Type,
    Size,
    HumanSize,
    User,
    UserId,
    Group,
    GroupId,
    Permissions,
    HumanPermissions,
    Inode,
    ModifiedDate,
}

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats the datum `query` selects from `metadata`.
pub fn answer(query: Query, metadata: &Metadata, owners: &mut OwnerCache) -> anyhow::Result<Styled> {
    let text = match query {
        Query::Type => kind::classify(metadata.file_type().into()).label().to_string(),
        Query::Size => metadata.size().to_string(),
        Query::HumanSize => return Ok(trim_start(size::format_optional(Some(metadata.size())))),
        Query::User => owners.user(metadata.uid()).ok_or_else(|| Failure::owner("user"))?.to_string(),
        Query::UserId => metadata.uid().to_string(),
        Query::Group => owners.group(metadata.gid()).ok_or_else(|| Failure::owner("group"))?.to_string(),
        Query::GroupId => metadata.gid().to_string(),
        Query::Permissions => format!("{:o}", permissions::format(metadata.mode()).octal),
        Query::HumanPermissions => return Ok(permissions::format(metadata.mode()).display()),
        Query::Inode => metadata.ino().to_string(),
        Query::ModifiedDate => {
            let modified: DateTime<Local> =
                metadata.modified().context("modification time is not available")?.into();
            modified.format(DATE_FORMAT).to_string()
        }
    };
    Ok(Styled(vec![Fragment::plain(text)]))
}

/// Reveals one datum about `path`. Symlinks are only followed with `transpass`.
pub fn run(query: Query, path: &Path, transpass: bool) -> anyhow::Result<()> {
    let stat = if transpass { fs::metadata(path) } else { fs::symlink_metadata(path) };
    let metadata = stat.map_err(|err| {
        log::debug!("stat {}: {err}", path.display());
        Failure::metadata()
    })?;

    let mut owners = OwnerCache::new();
    let styled = answer(query, &metadata, &mut owners)?;
    writeln!(io::stdout(), "{}", styled.paint())?;
    Ok(())
}

/// Drops the alignment padding of a right-justified value.
fn trim_start(mut styled: Styled) -> Styled {
    if let Some(first) = styled.0.first_mut() {
        first.text = first.text.trim_start().to_string();
    }
    styled
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    fn ask(query: Query, metadata: &Metadata) -> String {
        answer(query, metadata, &mut OwnerCache::new()).unwrap().to_string()
    }

    #[test]
    fn test_file_answers() -> anyhow::Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let file = temp_dir.path().join("data");
        fs::write(&file, vec![0u8; 1500])?;
        fs::set_permissions(&file, fs::Permissions::from_mode(0o640))?;
        let metadata = fs::symlink_metadata(&file)?;

        assert_eq!(ask(Query::Type, &metadata), "File");
        assert_eq!(ask(Query::Size, &metadata), "1500");
        assert_eq!(ask(Query::HumanSize, &metadata), "1.5KB");
        assert_eq!(ask(Query::Permissions, &metadata), "640");
        assert_eq!(ask(Query::HumanPermissions, &metadata), "rw-r----- (640)");
        assert_eq!(ask(Query::UserId, &metadata), metadata.uid().to_string());
        assert_eq!(ask(Query::GroupId, &metadata), metadata.gid().to_string());
        assert_eq!(ask(Query::Inode, &metadata), metadata.ino().to_string());
        Ok(())
    }

    #[test]
    fn test_human_size_of_empty_file() -> anyhow::Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let file = temp_dir.path().join("empty");
        fs::File::create(&file)?;
        assert_eq!(ask(Query::HumanSize, &fs::metadata(&file)?), "0B");
        Ok(())
    }

    #[test]
    fn test_modified_date_format() -> anyhow::Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let date = ask(Query::ModifiedDate, &fs::metadata(temp_dir.path())?);
        assert!(chrono::NaiveDateTime::parse_from_str(&date, DATE_FORMAT).is_ok(), "{date}");
        Ok(())
    }

    #[test]
    fn test_symlink_type() -> anyhow::Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let link = temp_dir.path().join("link");
        std::os::unix::fs::symlink(temp_dir.path(), &link)?;
        assert_eq!(ask(Query::Type, &fs::symlink_metadata(&link)?), "Symlink");
        assert_eq!(ask(Query::Type, &fs::metadata(&link)?), "Directory");
        Ok(())
    }

    #[test]
    fn test_missing_path() {
        let err = run(Query::Type, Path::new("/nonexistent/for/testing"), false).unwrap_err();
        assert_eq!(err.downcast_ref::<Failure>(), Some(&Failure::metadata()));
    }
}
