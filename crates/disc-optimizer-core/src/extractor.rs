use crate::archive;
use crate::error::Error;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{error, info};

#[derive(Debug)]
pub struct ExtractResult {
    pub archive: PathBuf,
    pub dest: PathBuf,
    pub files_extracted: usize,
    pub duration: Duration,
}

/// Extract every entry of `archive` into the current working directory.
pub fn extract_archive(archive: &Path) -> Result<ExtractResult, Error> {
    match env::current_dir() {
        Ok(dest) => extract_archive_to(archive, &dest),
        Err(e) => {
            let err = Error::Extract {
                path: archive.to_path_buf(),
                reason: format!("Failed to read current directory: {e}"),
            };
            error!("{}", err);
            Err(err)
        }
    }
}

/// Extract every entry of `archive` under `dest`, keeping the archive's
/// folder layout. Existing files at the destination are overwritten.
///
/// Failures are logged with the archive path and returned to the caller.
pub fn extract_archive_to(archive: &Path, dest: &Path) -> Result<ExtractResult, Error> {
    let start = Instant::now();

    let outcome = fs::create_dir_all(dest)
        .map_err(|e| Error::Extract {
            path: archive.to_path_buf(),
            reason: format!("Failed to create destination {}: {e}", dest.display()),
        })
        .and_then(|_| archive::extract_all(archive, dest));

    match outcome {
        Ok(files_extracted) => {
            let duration = start.elapsed();
            info!(
                "Extracted {} files from {} into {} in {:.2}s",
                files_extracted,
                archive.display(),
                dest.display(),
                duration.as_secs_f64()
            );
            Ok(ExtractResult {
                archive: archive.to_path_buf(),
                dest: dest.to_path_buf(),
                files_extracted,
                duration,
            })
        }
        Err(err) => {
            error!("{}", err);
            Err(err)
        }
    }
}
