use crate::common::style::{Fragment, Styled, Tag};
use std::fmt;

pub const EXIT_FAILURE: u8 = 1;

const ISSUES_URL: &str = "https://github.com/skippyr/reveal/issues";

/// A failure the user can act on: what went wrong and what to try next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub description: String,
    pub suggestion: String,
}

impl Failure {
    pub fn new(description: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Failure { description: description.into(), suggestion: suggestion.into() }
    }

    pub fn read_directory() -> Self {
        Self::new(
            "Could not reveal directory.",
            "Ensure that you have enough permissions to read it.",
        )
    }

    pub fn resolve_path() -> Self {
        Self::new(
            "Could not resolve the absolute path of given path.",
            "Ensure that it uses a valid convention for your system.",
        )
    }

    pub fn metadata() -> Self {
        Self::new("Could not get metadata of given path.", "Ensure that you have not misspelled it.")
    }

    pub fn not_a_directory() -> Self {
        Self::new(
            "Could not reveal the given path type.",
            "Use the flag --manual to see what types can be revealed.",
        )
    }

    pub fn owner(what: &str) -> Self {
        Self::new(
            format!("Could not resolve the {what} that owns the given path."),
            "Use the matching id flag to reveal the numeric id instead.",
        )
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.description, self.suggestion)
    }
}

impl std::error::Error for Failure {}

/// Builds the error report printed to stderr before exiting.
///
/// Errors that are not a `Failure` are described by their cause chain.
pub fn report(error: &anyhow::Error) -> Styled {
    let failure = match error.downcast_ref::<Failure>() {
        Some(failure) => failure.clone(),
        None => Failure::new(
            format!("{error:#}"),
            "Run it again with RUST_LOG=debug for more details.",
        ),
    };

    let mut out = Styled::default();
    let mut line = |fragments: Vec<Fragment>| {
        for fragment in fragments {
            out.push(fragment);
        }
        out.push(Fragment::plain("\n"));
    };

    line(vec![Fragment::tagged("Reveal - Error Report", Tag::Heading)]);
    line(vec![Fragment::tagged("    Description", Tag::Label)]);
    line(vec![Fragment::plain(format!("        {}", failure.description))]);
    line(vec![]);
    line(vec![Fragment::tagged("    Suggestion", Tag::Label)]);
    line(vec![Fragment::plain(format!("        {}", failure.suggestion))]);
    line(vec![]);
    line(vec![Fragment::tagged("    Help", Tag::Label)]);
    line(vec![Fragment::plain("        You can report issues at:")]);
    line(vec![Fragment::tagged(format!("        {ISSUES_URL}"), Tag::Link)]);
    line(vec![]);
    line(vec![Fragment::plain(format!("Program exited with exit code {EXIT_FAILURE}."))]);
    out
}
