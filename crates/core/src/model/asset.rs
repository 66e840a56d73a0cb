use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssetError {
    #[error("asset reference cannot be empty")]
    Empty,

    #[error("invalid asset url: {0}")]
    InvalidUrl(String),
}

/// Reference to an image, avatar or video.
///
/// Absolute URLs are parsed; anything without a scheme is kept as a
/// relative path resolved by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AssetUri {
    Url(Url),
    Path(PathBuf),
}

impl AssetUri {
    /// Parse a reference, preferring URLs.
    ///
    /// # Errors
    ///
    /// Returns `AssetError::Empty` for blank input, or `AssetError::InvalidUrl`
    /// when the input has a scheme separator but does not parse as a URL.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, AssetError> {
        let s = raw.as_ref().trim();
        if s.is_empty() {
            return Err(AssetError::Empty);
        }
        if s.contains("://") {
            return Url::parse(s)
                .map(AssetUri::Url)
                .map_err(|e| AssetError::InvalidUrl(format!("{s}: {e}")));
        }
        Ok(AssetUri::Path(PathBuf::from(s)))
    }

    #[must_use]
    pub fn as_url(&self) -> Option<&Url> {
        match self {
            AssetUri::Url(u) => Some(u),
            AssetUri::Path(_) => None,
        }
    }

    #[must_use]
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            AssetUri::Path(p) => Some(p.as_path()),
            AssetUri::Url(_) => None,
        }
    }
}

impl fmt::Display for AssetUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetUri::Url(u) => f.write_str(u.as_str()),
            AssetUri::Path(p) => write!(f, "{}", p.display()),
        }
    }
}

impl TryFrom<String> for AssetUri {
    type Error = AssetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        AssetUri::parse(value)
    }
}

impl From<AssetUri> for String {
    fn from(value: AssetUri) -> Self {
        value.to_string()
    }
}
