pub mod archive;
pub mod config;
pub mod engine;
pub mod error;
pub mod extractor;
pub mod formats;
pub mod progress;
pub mod scanner;

pub use config::AppConfig;
pub use engine::{classify_path, DiscFinder, PathKind, ScanResult};
pub use error::Error;
pub use extractor::{extract_archive, extract_archive_to, ExtractResult};
pub use progress::{ProgressReporter, SilentReporter};

use std::path::Path;

/// Scan `path` with the default configuration and no progress output.
pub fn search_path_for_discs(path: &Path) -> Result<Vec<String>, Error> {
    let finder = DiscFinder::new(&AppConfig::default());
    Ok(finder.search(path, &SilentReporter)?.discs)
}
