use crate::common::style::{Fragment, Styled, Tag};

/// One of read, write or execute, expressed for the "other" class.
#[derive(Debug, Clone, Copy)]
pub struct PermissionRule {
    pub bit: u32,
    pub symbol: char,
    pub tag: Tag,
}

const RULES: [PermissionRule; 3] = [
    PermissionRule { bit: 0o4, symbol: 'r', tag: Tag::Read },
    PermissionRule { bit: 0o2, symbol: 'w', tag: Tag::Write },
    PermissionRule { bit: 0o1, symbol: 'x', tag: Tag::Execute },
];

/// Owner, group, other.
const MULTIPLIERS: [u32; 3] = [0o100, 0o10, 0o1];

const LACK: char = '-';

/// Symbolic permissions plus their octal sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permissions {
    pub symbols: Styled,
    pub octal: u32,
}

impl Permissions {
    /// `rwxr-xr-x (755)` with styled symbols.
    pub fn display(&self) -> Styled {
        let mut out = self.symbols.clone();
        out.push(Fragment::plain(format!(" ({:o})", self.octal)));
        out
    }
}

/// Formats the permission bits of `mode` in `rwxrwxrwx` order.
///
/// Bits above the nine permission bits (file type, setuid, sticky...) are
/// ignored.
pub fn format(mode: u32) -> Permissions {
    let mut symbols = Styled::default();
    let mut octal = 0;
    for multiplier in MULTIPLIERS {
        for rule in RULES {
            let value = rule.bit * multiplier;
            if mode & value != 0 {
                symbols.push(Fragment::tagged(rule.symbol.to_string(), rule.tag));
                octal += value;
            } else {
                symbols.push(Fragment::plain(LACK.to_string()));
            }
        }
    }
    Permissions { symbols, octal }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_permissions() {
        let perms = format(0o755);
        assert_eq!(perms.symbols.to_string(), "rwxr-xr-x");
        assert_eq!(perms.octal, 0o755);
        assert_eq!(perms.display().to_string(), "rwxr-xr-x (755)");

        assert_eq!(format(0o644).display().to_string(), "rw-r--r-- (644)");
        assert_eq!(format(0o700).display().to_string(), "rwx------ (700)");
        assert_eq!(format(0o777).display().to_string(), "rwxrwxrwx (777)");
    }

    #[test]
    fn test_no_permissions() {
        let perms = format(0);
        assert_eq!(perms.octal, 0);
        assert_eq!(perms.display().to_string(), "--------- (0)");
    }

    #[test]
    fn test_octal_drops_leading_zeros() {
        assert_eq!(format(0o007).display().to_string(), "------rwx (7)");
        assert_eq!(format(0o050).display().to_string(), "---r-x--- (50)");
    }

    #[test]
    fn test_type_bits_are_ignored() {
        assert_eq!(format(0o100644).display().to_string(), "rw-r--r-- (644)");
        assert_eq!(format(0o4755).octal, 0o755);
    }

    #[test]
    fn test_symbols_are_tagged() {
        let perms = format(0o421);
        let tags: Vec<Option<Tag>> = perms.symbols.fragments().iter().map(|f| f.tag).collect();
        assert_eq!(
            tags,
            vec![
                Some(Tag::Read),
                None,
                None,
                None,
                Some(Tag::Write),
                None,
                None,
                None,
                Some(Tag::Execute)
            ]
        );
        assert_eq!(perms.symbols.width(), 9);
    }

    #[test]
    fn test_is_pure() {
        assert_eq!(format(0o640), format(0o640));
    }
}
