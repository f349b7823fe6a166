//! Extension sets for archives and disc images.
//!
//! Matching is an exact, case-sensitive suffix comparison on the file or
//! entry name: `GAME.ISO` is not a disc, `game.iso` is.

use std::path::Path;

/// Archive suffixes, in the order they are checked.
pub const SUPPORTED_ARCHIVE_EXTENSIONS: [&str; 4] = [".7z", ".gz", ".rar", ".zip"];

pub const SUPPORTED_DISC_EXTENSIONS: [&str; 6] = [".iso", ".bin", ".cue", ".gdi", ".raw", ".chd"];

/// Returns the disc suffix `name` ends with, if any.
pub fn disc_extension(name: &str) -> Option<&'static str> {
    SUPPORTED_DISC_EXTENSIONS
        .iter()
        .copied()
        .find(|ext| name.ends_with(ext))
}

pub fn is_disc_name(name: &str) -> bool {
    disc_extension(name).is_some()
}

/// Supported archive format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveFormat {
    SevenZip,
    Gzip,
    Rar,
    Zip,
}

impl ArchiveFormat {
    /// Detect format from the file name suffix.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        Self::from_name(name)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let ext = SUPPORTED_ARCHIVE_EXTENSIONS
            .iter()
            .find(|ext| name.ends_with(*ext))?;
        match *ext {
            ".7z" => Some(Self::SevenZip),
            ".gz" => Some(Self::Gzip),
            ".rar" => Some(Self::Rar),
            ".zip" => Some(Self::Zip),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::SevenZip => ".7z",
            Self::Gzip => ".gz",
            Self::Rar => ".rar",
            Self::Zip => ".zip",
        }
    }
}
