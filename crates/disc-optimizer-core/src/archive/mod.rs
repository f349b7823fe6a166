//! Archive backends behind a single list/extract contract.
//!
//! Each backend reports failures as plain strings; they are wrapped here into
//! [`Error::ArchiveList`] / [`Error::Extract`] so every message names the
//! archive it came from.

mod gzip;
mod rar_archive;
mod seven_zip;
mod zip_archive;

use crate::error::Error;
use crate::formats::ArchiveFormat;
use std::fs;
use std::path::{Component, Path};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// List member names in archive order, skipping directory entries.
/// Nothing is written under the caller's directories.
pub fn list_entries(path: &Path) -> Result<Vec<String>, Error> {
    let format = ArchiveFormat::from_path(path)
        .ok_or_else(|| Error::UnsupportedArchive(path.to_path_buf()))?;

    let listed = match format {
        ArchiveFormat::SevenZip => seven_zip::list(path),
        ArchiveFormat::Gzip => gzip::list(path),
        ArchiveFormat::Rar => rar_archive::list(path),
        ArchiveFormat::Zip => zip_archive::list(path),
    };

    let entries = listed.map_err(|reason| Error::ArchiveList {
        path: path.to_path_buf(),
        reason,
    })?;
    debug!("{} lists {} entries", path.display(), entries.len());
    Ok(entries)
}

/// Extract every member under `dest`, keeping the archive's folder layout.
/// Returns the number of files written.
///
/// Members are unpacked into a hidden staging directory inside `dest` and only
/// moved into place once the whole archive decoded, so a failure leaves `dest`
/// as it was.
pub fn extract_all(path: &Path, dest: &Path) -> Result<usize, Error> {
    let format = ArchiveFormat::from_path(path)
        .ok_or_else(|| Error::UnsupportedArchive(path.to_path_buf()))?;
    let fail = |reason: String| Error::Extract {
        path: path.to_path_buf(),
        reason,
    };

    let staging = tempfile::Builder::new()
        .prefix(".extract-")
        .tempdir_in(dest)
        .map_err(|e| fail(format!("Failed to create staging dir: {e}")))?;

    let extracted = match format {
        ArchiveFormat::SevenZip => seven_zip::extract(path, staging.path()),
        ArchiveFormat::Gzip => gzip::extract(path, staging.path()),
        ArchiveFormat::Rar => rar_archive::extract(path, staging.path()),
        ArchiveFormat::Zip => zip_archive::extract(path, staging.path()),
    }
    .map_err(fail)?;

    move_into_place(staging.path(), dest).map_err(fail)?;
    debug!("{} unpacked {} files", path.display(), extracted);
    Ok(extracted)
}

/// Move the staged tree under `dest`, replacing files that already exist.
fn move_into_place(staging: &Path, dest: &Path) -> Result<(), String> {
    let entries: Vec<DirEntry> = WalkDir::new(staging)
        .min_depth(1)
        .into_iter()
        .collect::<Result<_, _>>()
        .map_err(|e| format!("Failed to read staged files: {e}"))?;

    for entry in entries {
        let relative = entry
            .path()
            .strip_prefix(staging)
            .map_err(|e| format!("Failed to place {}: {e}", entry.path().display()))?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .map_err(|e| format!("Failed to create dir {}: {e}", target.display()))?;
        } else {
            if target.is_file() {
                fs::remove_file(&target)
                    .map_err(|e| format!("Failed to replace {}: {e}", target.display()))?;
            }
            fs::rename(entry.path(), &target)
                .map_err(|e| format!("Failed to write {}: {e}", target.display()))?;
        }
    }
    Ok(())
}

/// True when `name` stays inside the extraction directory.
fn is_enclosed(name: &str) -> bool {
    let normalized = name.replace('\\', "/");
    !normalized.is_empty()
        && Path::new(&normalized)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
