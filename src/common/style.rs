use colored::{ColoredString, Colorize};
use std::fmt;

/// Semantic meaning attached to a piece of formatted text.
///
/// Formatters only say *what* a fragment is; `paint` decides how it looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Read,
    Write,
    Execute,
    Unit,
    Heading,
    Label,
    Command,
    Argument,
    Link,
}

/// A run of text with an optional tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub tag: Option<Tag>,
}

impl Fragment {
    pub fn plain(text: impl Into<String>) -> Self {
        Fragment { text: text.into(), tag: None }
    }

    pub fn tagged(text: impl Into<String>, tag: Tag) -> Self {
        Fragment { text: text.into(), tag: Some(tag) }
    }
}

/// Ordered fragments. `Display` yields the unstyled text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Styled(pub Vec<Fragment>);

impl Styled {
    pub fn push(&mut self, fragment: Fragment) {
        self.0.push(fragment);
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.0
    }

    /// Number of visible characters, escapes excluded.
    pub fn width(&self) -> usize {
        self.0.iter().map(|f| f.text.chars().count()).sum()
    }

    /// Renders the fragments for the terminal.
    pub fn paint(&self) -> String {
        self.fragments().iter().map(|f| paint_fragment(f).to_string()).collect()
    }
}

impl fmt::Display for Styled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.0 {
            f.write_str(&fragment.text)?;
        }
        Ok(())
    }
}

#[inline]
fn paint_fragment(fragment: &Fragment) -> ColoredString {
    let text = fragment.text.as_str();
    match fragment.tag {
        None => text.normal(),
        Some(Tag::Read) => text.green(),
        Some(Tag::Write) => text.yellow(),
        Some(Tag::Execute) | Some(Tag::Unit) | Some(Tag::Command) => text.red(),
        Some(Tag::Argument) | Some(Tag::Link) => text.green(),
        Some(Tag::Heading) => text.red().bold(),
        Some(Tag::Label) => text.bold(),
    }
}

/// Turns terminal styling off for the rest of the process.
pub fn disable_colors() {
    colored::control::set_override(false);
}
