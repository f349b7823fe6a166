use std::fs;
use std::path::Path;

pub(super) fn list(archive_path: &Path) -> Result<Vec<String>, String> {
    let file = fs::File::open(archive_path).map_err(|e| format!("Failed to open 7z: {e}"))?;

    let mut names = Vec::new();
    // The extract callback never reads the entry stream, so nothing lands in ".".
    sevenz_rust::decompress_with_extract_fn(file, ".", |entry, _, _| {
        if !entry.is_directory() {
            names.push(entry.name().to_string());
        }
        Ok(true)
    })
    .map_err(|e| format!("Failed to read 7z: {e}"))?;

    Ok(names)
}

pub(super) fn extract(archive_path: &Path, dest_path: &Path) -> Result<usize, String> {
    let mut count: usize = 0;

    sevenz_rust::decompress_file_with_extract_fn(archive_path, dest_path, |entry, reader, out| {
        if !super::is_enclosed(entry.name()) {
            tracing::warn!("Skipping unsafe entry path: {}", entry.name());
            return Ok(true);
        }
        if !entry.is_directory() {
            count += 1;
        }
        sevenz_rust::default_entry_extract_fn(entry, reader, out)
    })
    .map_err(|e| {
        let msg = e.to_string();
        if msg.contains("password") || msg.contains("Password") || msg.contains("decrypt") {
            "Password required to extract this archive".to_string()
        } else {
            format!("Failed to extract 7z: {e}")
        }
    })?;

    Ok(count)
}
