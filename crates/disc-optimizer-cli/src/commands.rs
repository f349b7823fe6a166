use clap::Parser;
use disc_optimizer_core::formats::disc_extension;
use std::collections::BTreeMap;

#[derive(Debug, Parser)]
#[command(name = "optimize-disc", version)]
#[command(
    about = "Find disc images (.iso .bin .cue .gdi .raw .chd) in a directory tree or archive",
    long_about = None
)]
pub struct Cli {
    /// Directory or archive (.7z .gz .rar .zip) to scan; defaults to the current directory
    pub path: Option<String>,
}

/// The single line reported after a scan.
pub fn summary_line(count: usize, description: &str) -> String {
    if count == 0 {
        format!("No supported disc files found in {}", description)
    } else {
        format!("Found {} supported disc files in {}", count, description)
    }
}

/// One "<count> <ext> files" line per disc extension, in extension order.
pub fn extension_breakdown(discs: &[String]) -> Vec<String> {
    let mut by_extension: BTreeMap<&str, usize> = BTreeMap::new();
    for disc in discs {
        if let Some(ext) = disc_extension(disc) {
            *by_extension.entry(ext).or_default() += 1;
        }
    }
    by_extension
        .into_iter()
        .map(|(ext, count)| format!("{} {} files", count, ext))
        .collect()
}
