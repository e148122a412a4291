use crate::common::style::{Fragment, Styled, Tag};

/// Decimal unit used by `format`.
#[derive(Debug, Clone, Copy)]
pub struct SizeUnit {
    pub bytes: f64,
    pub letter: char,
}

const UNITS: [SizeUnit; 3] = [
    SizeUnit { bytes: 1e9, letter: 'G' },
    SizeUnit { bytes: 1e6, letter: 'M' },
    SizeUnit { bytes: 1e3, letter: 'K' },
];

/// Visible width of every `format` result below 10,000 GB. Larger counts
/// grow the numeric part past six characters.
pub const WIDTH: usize = 8;

/// Formats a byte count into a right-aligned, `WIDTH` wide string using
/// decimal units (KB = 1000 bytes).
///
/// Zero renders as a lone `-`.
pub fn format(bytes: u64) -> Styled {
    if bytes == 0 {
        return placeholder();
    }

    for unit in UNITS {
        let scaled = bytes as f64 / unit.bytes;
        if scaled.trunc() > 0.0 {
            return Styled(vec![
                Fragment::plain(format!("{scaled:>6.1}")),
                Fragment::tagged(format!("{}B", unit.letter), Tag::Unit),
            ]);
        }
    }

    Styled(vec![Fragment::plain(format!("{bytes:>7}")), Fragment::tagged("B", Tag::Unit)])
}

/// Like `format`, but tells "no size" (`None`) apart from an empty file.
pub fn format_optional(bytes: Option<u64>) -> Styled {
    match bytes {
        None => placeholder(),
        Some(0) => Styled(vec![Fragment::plain(format!("{:>7}", 0)), Fragment::tagged("B", Tag::Unit)]),
        Some(bytes) => format(bytes),
    }
}

#[inline]
fn placeholder() -> Styled {
    Styled(vec![Fragment::plain(format!("{:>WIDTH$}", "-"))])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(bytes: u64) -> String {
        format(bytes).to_string()
    }

    #[test]
    fn test_format_size() {
        assert_eq!(text(0), "       -");
        assert_eq!(text(512), "    512B");
        assert_eq!(text(1500), "   1.5KB");
        assert_eq!(text(2_500_000), "   2.5MB");
        assert_eq!(text(3_200_000_000), "   3.2GB");
    }

    #[test]
    fn test_unit_boundaries() {
        assert_eq!(text(999), "    999B");
        assert_eq!(text(1000), "   1.0KB");
        assert_eq!(text(999_999), "1000.0KB");
        assert_eq!(text(1_000_000), "   1.0MB");
        assert_eq!(text(999_999_999), "1000.0MB");
        assert_eq!(text(1_000_000_000), "   1.0GB");
    }

    #[test]
    fn test_fixed_width() {
        for bytes in [0, 1, 42, 999, 1000, 12_345, 2_048_000, 87_000_000_000] {
            assert_eq!(format(bytes).width(), WIDTH, "width of {bytes}");
        }
    }

    #[test]
    fn test_huge_sizes_overflow_width() {
        assert_eq!(text(9_999_000_000_000), "9999.0GB");
        assert_eq!(text(12_000_000_000_000), "12000.0GB");
        assert_eq!(format(12_000_000_000_000).width(), WIDTH + 1);
    }

    #[test]
    fn test_unit_is_tagged() {
        let styled = format(2048);
        assert_eq!(styled.fragments()[1], Fragment::tagged("KB", Tag::Unit));
        assert_eq!(format(0).fragments()[0].tag, None);
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(None).to_string(), "       -");
        assert_eq!(format_optional(Some(0)).to_string(), "      0B");
        assert_eq!(format_optional(Some(2048)).to_string(), "   2.0KB");
    }
}
