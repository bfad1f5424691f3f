use serde::{Deserialize, Serialize};
use std::path::Path;

/// One file in object storage that should get a media record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDescriptor {
    pub filename: String,
    pub alt: String,
}

impl AssetDescriptor {
    pub fn new(filename: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            alt: alt.into(),
        }
    }

    pub fn extension(&self) -> Option<&str> {
        Path::new(&self.filename)
            .extension()
            .and_then(|e| e.to_str())
            .filter(|e| !e.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MimeType {
    #[serde(rename = "image/png")]
    Png,
    #[default]
    #[serde(rename = "image/jpeg")]
    Jpeg,
}

impl MimeType {
    /// `.png` (any case) is PNG; everything else, extensionless names
    /// included, is treated as JPEG.
    pub fn from_filename(filename: &str) -> Self {
        match filename.rsplit_once('.') {
            Some((_, ext)) if ext.eq_ignore_ascii_case("png") => Self::Png,
            _ => Self::Jpeg,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }
}

impl std::fmt::Display for MimeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
