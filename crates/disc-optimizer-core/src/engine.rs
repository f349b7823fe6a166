use crate::archive;
use crate::config::AppConfig;
use crate::error::Error;
use crate::formats::{is_disc_name, ArchiveFormat};
use crate::progress::ProgressReporter;
use crate::scanner;
use glob::Pattern;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How a scan path was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Directory,
    Archive(ArchiveFormat),
    /// Missing path, or a file that is not a supported archive.
    Unsupported,
}

pub fn classify_path(path: &Path) -> PathKind {
    if path.is_dir() {
        PathKind::Directory
    } else if path.is_file() {
        match ArchiveFormat::from_path(path) {
            Some(format) => PathKind::Archive(format),
            None => PathKind::Unsupported,
        }
    } else {
        PathKind::Unsupported
    }
}

#[derive(Debug)]
pub struct ScanResult {
    pub kind: PathKind,
    /// File paths for a directory scan, entry names for an archive scan.
    pub discs: Vec<String>,
    pub duration: Duration,
}

impl ScanResult {
    pub fn len(&self) -> usize {
        self.discs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discs.is_empty()
    }
}

pub struct DiscFinder {
    config: AppConfig,
    ignore_patterns: Vec<Pattern>,
}

impl DiscFinder {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            ignore_patterns: scanner::compile_ignore_patterns(&config.ignore_patterns),
            config: config.clone(),
        }
    }

    /// Find disc images at `path`:
    /// 1. Directory: every disc file in the full subtree
    /// 2. Supported archive: disc entries from its listing, without extracting
    /// 3. Anything else: nothing
    ///
    /// An archive that cannot be listed is an error, not an empty result.
    pub fn search(&self, path: &Path, reporter: &dyn ProgressReporter) -> Result<ScanResult, Error> {
        let kind = classify_path(path);
        debug!("{} classified as {:?}", path.display(), kind);

        let start = Instant::now();
        reporter.on_scan_start(path);

        let mut discs = match self.collect(path, kind, reporter) {
            Ok(discs) => discs,
            Err(err) => {
                reporter.on_scan_failed(&err);
                return Err(err);
            }
        };

        if self.config.sort_results {
            discs.sort();
        }

        let duration = start.elapsed();
        reporter.on_scan_complete(discs.len(), duration.as_secs_f64());
        info!(
            "Scanned {} in {:.2}s: {} discs",
            path.display(),
            duration.as_secs_f64(),
            discs.len()
        );

        Ok(ScanResult {
            kind,
            discs,
            duration,
        })
    }

    fn collect(
        &self,
        path: &Path,
        kind: PathKind,
        reporter: &dyn ProgressReporter,
    ) -> Result<Vec<String>, Error> {
        match kind {
            PathKind::Directory => scanner::walk_for_discs(
                path,
                self.config.follow_symlinks,
                &self.ignore_patterns,
                |count, current| reporter.on_scan_progress(count, current),
            ),
            PathKind::Archive(_) => {
                let mut discs = Vec::new();
                for entry in archive::list_entries(path)? {
                    if is_disc_name(&entry) {
                        reporter.on_scan_progress(discs.len() + 1, &entry);
                        discs.push(entry);
                    }
                }
                Ok(discs)
            }
            PathKind::Unsupported => Ok(Vec::new()),
        }
    }
}
