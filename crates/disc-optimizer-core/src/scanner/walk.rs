use crate::error::Error;
use crate::formats::is_disc_name;
use glob::Pattern;
use std::io;
use std::path::Path;
use tracing::{error, trace, warn};
use walkdir::{DirEntry, WalkDir};

/// Compile glob ignore patterns, dropping (and logging) invalid ones.
pub fn compile_ignore_patterns(ignore_globs: &[String]) -> Vec<Pattern> {
    ignore_globs
        .iter()
        .filter_map(|glob| match Pattern::new(glob) {
            Ok(p) => Some(p),
            Err(e) => {
                error!("Invalid glob pattern '{}': {}", glob, e);
                None
            }
        })
        .collect()
}

/// Recursive walk of `root`, returning the full path of every file whose name
/// carries a disc extension. Order is the walk order.
///
/// Without `follow_links`, linked directories are not entered but a link to a
/// regular file is still reported. With it, walkdir's loop detection applies
/// and cycles are skipped.
pub fn walk_for_discs(
    root: &Path,
    follow_links: bool,
    ignore_patterns: &[Pattern],
    mut on_found: impl FnMut(usize, &str),
) -> Result<Vec<String>, Error> {
    let mut found: Vec<String> = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(follow_links)
        .into_iter()
        .filter_entry(|entry| !is_ignored(entry, ignore_patterns));

    for entry_result in walker {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(err) => {
                skip_or_fail(err)?;
                continue;
            }
        };

        if !is_file_like(&entry) {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if is_disc_name(&name) {
            let path = entry.path().to_string_lossy().into_owned();
            trace!("Found disc {}", path);
            on_found(found.len() + 1, &path);
            found.push(path);
        }
    }

    Ok(found)
}

fn is_ignored(entry: &DirEntry, ignore_patterns: &[Pattern]) -> bool {
    entry.depth() > 0
        && ignore_patterns
            .iter()
            .any(|pattern| pattern.matches_path(entry.path()))
}

fn is_file_like(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    // Unfollowed symlink: report it when it resolves to a regular file.
    file_type.is_symlink() && entry.path().is_file()
}

/// Unreadable entries, vanished files and link cycles are logged and skipped;
/// anything else aborts the walk.
fn skip_or_fail(err: walkdir::Error) -> Result<(), Error> {
    if let Some(ancestor) = err.loop_ancestor() {
        warn!(
            "Skipping symlink loop at {} (points back to {})",
            err.path().map(|p| p.display().to_string()).unwrap_or_default(),
            ancestor.display()
        );
        return Ok(());
    }

    let kind = err.io_error().map(|e| e.kind());
    match kind {
        Some(io::ErrorKind::PermissionDenied) | Some(io::ErrorKind::NotFound) => {
            error!(
                "Access error reading {}: {}",
                err.path().map(|p| p.display().to_string()).unwrap_or_default(),
                err
            );
            Ok(())
        }
        _ => Err(Error::Walk(err)),
    }
}
