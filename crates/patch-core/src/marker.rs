//! Search anchors.
//!
//! A [`Marker`] is either a literal substring or a compiled regular
//! expression. Both answer the same two questions: where is the first match at
//! or after a byte offset, and does a given line match at all.

use std::fmt;
use std::ops::Range;

use regex::Regex;

use crate::Result;

#[derive(Debug, Clone)]
pub enum Marker {
    Literal(String),
    Pattern(Regex),
}

impl Marker {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Compile `pattern` as a regex marker.
    ///
    /// # Errors
    /// Returns `Error::InvalidPattern` if the pattern does not compile.
    pub fn pattern(pattern: &str) -> Result<Self> {
        Ok(Self::Pattern(Regex::new(pattern)?))
    }

    /// Build a literal or regex marker depending on `regex`.
    pub fn parse(text: &str, regex: bool) -> Result<Self> {
        if regex {
            Self::pattern(text)
        } else {
            Ok(Self::literal(text))
        }
    }

    /// The marker as written, literal text or regex source.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(text) => text.as_str(),
            Self::Pattern(re) => re.as_str(),
        }
    }

    /// Byte range of the first match in `text` starting at or after `from`.
    ///
    /// `from` must lie on a char boundary.
    pub fn find_from(&self, text: &str, from: usize) -> Option<Range<usize>> {
        match self {
            Self::Literal(needle) => text[from..]
                .find(needle.as_str())
                .map(|pos| from + pos..from + pos + needle.len()),
            Self::Pattern(re) => re.find_at(text, from).map(|m| m.range()),
        }
    }

    pub fn find(&self, text: &str) -> Option<Range<usize>> {
        self.find_from(text, 0)
    }

    pub fn matches_line(&self, line: &str) -> bool {
        match self {
            Self::Literal(needle) => line.contains(needle.as_str()),
            Self::Pattern(re) => re.is_match(line),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.write_str(text),
            Self::Pattern(re) => write!(f, "/{}/", re.as_str()),
        }
    }
}

impl From<&str> for Marker {
    fn from(text: &str) -> Self {
        Self::literal(text)
    }
}

impl From<String> for Marker {
    fn from(text: String) -> Self {
        Self::Literal(text)
    }
}

impl From<Regex> for Marker {
    fn from(re: Regex) -> Self {
        Self::Pattern(re)
    }
}
