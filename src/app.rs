use crate::common::style;
use crate::error::Failure;
use crate::utils::dir;
use crate::workers::query::Query;
use crate::workers::{listing, manual, query};
use clap::Parser;
use lscolors::LsColors;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(override_usage = "reveal [OPTIONS] [PATH]")]
pub struct Args {
    /// Print the manual and exit.
    #[arg(long)]
    pub manual: bool,

    /// Print plain text without colors.
    #[arg(long)]
    pub no_color: bool,

    /// Resolve symlinks when revealing a single datum.
    #[arg(long)]
    pub transpass: bool,

    #[command(flatten)]
    pub query: QueryFlags,

    /// The path to reveal. Defaults to the current directory.
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

/// Flags that reveal a single datum instead of listing a directory.
#[derive(clap::Args, Debug, Clone, Default)]
#[group(multiple = false)]
pub struct QueryFlags {
    /// Reveal its type.
    #[arg(long = "type")]
    pub kind: bool,

    /// Reveal its size in bytes.
    #[arg(long)]
    pub size: bool,

    /// Reveal its size using the most readable unit.
    #[arg(long)]
    pub human_size: bool,

    /// Reveal the user that owns it.
    #[arg(long)]
    pub user: bool,

    /// Reveal the id of the user that owns it.
    #[arg(long)]
    pub user_id: bool,

    /// Reveal the group that owns it.
    #[arg(long)]
    pub group: bool,

    /// Reveal the id of the group that owns it.
    #[arg(long)]
    pub group_id: bool,

    /// Reveal its permissions in octal base.
    #[arg(long)]
    pub permissions: bool,

    /// Reveal its permissions as read (r), write (w), execute (x) and lack (-).
    #[arg(long)]
    pub human_permissions: bool,

    /// Reveal its inode number.
    #[arg(long)]
    pub inode: bool,

    /// Reveal the date its contents were last modified.
    #[arg(long)]
    pub modified_date: bool,
}

impl QueryFlags {
    pub fn selected(&self) -> Option<Query> {
        [
            (self.kind, Query::Type),
            (self.size, Query::Size),
            (self.human_size, Query::HumanSize),
            (self.user, Query::User),
            (self.user_id, Query::UserId),
            (self.group, Query::Group),
            (self.group_id, Query::GroupId),
            (self.permissions, Query::Permissions),
            (self.human_permissions, Query::HumanPermissions),
            (self.inode, Query::Inode),
            (self.modified_date, Query::ModifiedDate),
        ]
        .into_iter()
        .find_map(|(set, query)| set.then_some(query))
    }
}

/// Runs whatever `args` ask for. The manual wins over everything else.
pub fn run(args: &Args, ls_colors: &LsColors) -> anyhow::Result<()> {
    if args.no_color {
        style::disable_colors();
    }

    if args.manual {
        return manual::run();
    }

    let path = dir::absolute_path(&args.path).map_err(|err| {
        log::debug!("absolute path of {}: {err}", args.path.display());
        Failure::resolve_path()
    })?;

    match args.query.selected() {
        Some(q) => query::run(q, &path, args.transpass),
        None => listing::run(&path, ls_colors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["reveal"]);
        assert_eq!(args.path, PathBuf::from("."));
        assert!(!args.manual);
        assert_eq!(args.query.selected(), None);
    }

    #[test]
    fn test_query_flags() {
        let args = Args::parse_from(["reveal", "--type", "/tmp"]);
        assert_eq!(args.query.selected(), Some(Query::Type));
        assert_eq!(args.path, PathBuf::from("/tmp"));

        let args = Args::parse_from(["reveal", "--human-permissions", "--transpass", "x"]);
        assert_eq!(args.query.selected(), Some(Query::HumanPermissions));
        assert!(args.transpass);
    }

    #[test]
    fn test_query_flags_conflict() {
        assert!(Args::try_parse_from(["reveal", "--size", "--inode"]).is_err());
    }

    #[test]
    fn test_manual_skips_path() {
        let args = Args::parse_from(["reveal", "--manual", "/nonexistent/for/testing"]);
        assert!(args.manual);
    }
}
