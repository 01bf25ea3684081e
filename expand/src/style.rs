use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A CSS pixel length, rendered as `"<n>px"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Px(pub u32);

impl From<u32> for Px {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Errors produced when reading a pixel length back from a style string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePxError {
    #[error("length '{0}' has no 'px' unit")]
    MissingUnit(String),

    #[error("invalid pixel value '{value}': {source}")]
    InvalidNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

impl FromStr for Px {
    type Err = ParsePxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed
            .strip_suffix("px")
            .ok_or_else(|| ParsePxError::MissingUnit(trimmed.to_string()))?;
        number
            .trim()
            .parse()
            .map(Px)
            .map_err(|source| ParsePxError::InvalidNumber {
                value: number.to_string(),
                source,
            })
    }
}

/// Inline style of an in-memory [`Node`](crate::Node).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    pub max_height: Option<Px>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_height(mut self, value: Px) -> Self {
        self.max_height = Some(value);
        self
    }

    /// The `max-height` value as the style string a browser would report.
    pub fn max_height_css(&self) -> Option<String> {
        self.max_height.map(|px| px.to_string())
    }
}
