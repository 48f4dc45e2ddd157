//! Image asset lookup with an explicit default-image fallback

use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::AssetConfig;

/// Why a card shows the default image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The row names no image
    NoName,
    NotFound,
    Unreadable(ErrorKind),
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::NoName => f.write_str("no image named"),
            FallbackReason::NotFound => f.write_str("not found"),
            FallbackReason::Unreadable(kind) => write!(f, "unreadable ({})", kind),
        }
    }
}

/// Result of resolving a row's image
#[derive(Debug, Clone, PartialEq)]
pub enum AssetLookup {
    Found(PathBuf),
    Fallback {
        requested: Option<String>,
        fallback: PathBuf,
        reason: FallbackReason,
    },
}

impl AssetLookup {
    /// Path to display, whichever way the lookup went
    pub fn path(&self) -> &Path {
        match self {
            AssetLookup::Found(path) => path,
            AssetLookup::Fallback { fallback, .. } => fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, AssetLookup::Fallback { .. })
    }

    /// `file://` URI understood by the image loaders
    pub fn uri(&self) -> String {
        format!("file://{}", self.path().display())
    }
}

/// Resolves image names against the asset directory
#[derive(Debug, Clone)]
pub struct AssetResolver {
    directory: PathBuf,
    default_image: PathBuf,
}

impl AssetResolver {
    pub fn new(config: &AssetConfig) -> Self {
        Self {
            directory: config.directory.clone(),
            default_image: config.directory.join(&config.default_image),
        }
    }

    pub fn default_image(&self) -> &Path {
        &self.default_image
    }

    /// Resolve an image name from a row. Never fails: anything that
    /// cannot be opened as a file falls back to the default image.
    pub fn resolve(&self, name: Option<&str>) -> AssetLookup {
        let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
            return self.fallback(None, FallbackReason::NoName);
        };

        let path = self.directory.join(name);
        match File::open(&path).and_then(|file| file.metadata()) {
            Ok(meta) if meta.is_file() => AssetLookup::Found(path),
            Ok(_) => self.fallback(Some(name), FallbackReason::NotFound),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.fallback(Some(name), FallbackReason::NotFound)
            }
            Err(e) => self.fallback(Some(name), FallbackReason::Unreadable(e.kind())),
        }
    }

    fn fallback(&self, requested: Option<&str>, reason: FallbackReason) -> AssetLookup {
        AssetLookup::Fallback {
            requested: requested.map(str::to_string),
            fallback: self.default_image.clone(),
            reason,
        }
    }
}
