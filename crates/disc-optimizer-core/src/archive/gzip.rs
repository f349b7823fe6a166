//! A gzip stream holds exactly one member. Its name comes from the header's
//! original-filename field, falling back to the archive name minus `.gz`.

use flate2::read::GzDecoder;
use flate2::GzHeader;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

pub(super) fn list(archive_path: &Path) -> Result<Vec<String>, String> {
    let file = fs::File::open(archive_path).map_err(|e| format!("Failed to open gzip: {e}"))?;
    let mut decoder = GzDecoder::new(file);

    // Pull one byte so a bad stream surfaces here instead of being listed.
    io::copy(&mut decoder.by_ref().take(1), &mut io::sink())
        .map_err(|e| format!("Invalid or corrupt gzip: {e}"))?;

    Ok(vec![member_name(archive_path, decoder.header())])
}

pub(super) fn extract(archive_path: &Path, dest_path: &Path) -> Result<usize, String> {
    let file = fs::File::open(archive_path).map_err(|e| format!("Failed to open gzip: {e}"))?;
    let mut decoder = GzDecoder::new(file);

    let name = member_name(archive_path, decoder.header());
    fs::create_dir_all(dest_path).map_err(|e| format!("Failed to create destination: {e}"))?;
    let output_path = dest_path.join(&name);

    let mut outfile =
        fs::File::create(&output_path).map_err(|e| format!("Failed to create file: {e}"))?;
    io::copy(&mut decoder, &mut outfile).map_err(|e| format!("Invalid or corrupt gzip: {e}"))?;
    Ok(1)
}

fn member_name(archive_path: &Path, header: Option<&GzHeader>) -> String {
    let from_header = header
        .and_then(|h| h.filename())
        .map(|raw| String::from_utf8_lossy(raw).into_owned())
        .and_then(|name| {
            // Header names may carry a directory; only the last component is trusted.
            Path::new(&name.replace('\\', "/"))
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
        });

    from_header.unwrap_or_else(|| {
        let file_name = archive_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        file_name
            .strip_suffix(".gz")
            .unwrap_or(&file_name)
            .to_string()
    })
}
