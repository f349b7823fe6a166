#![allow(dead_code)]
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn count_files_recursive(dir: &Path) -> usize {
    let mut count = 0;
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                count += count_files_recursive(&path);
            } else if path.is_file() {
                count += 1;
            }
        }
    }
    count
}

/// Create a minimal ZIP with stored entries. Names ending in '/' become
/// directory entries.
pub fn create_test_zip(dir: &Path, name: &str, files: &[(&str, &[u8])]) -> PathBuf {
    let zip_path = dir.join(name);
    let file = fs::File::create(&zip_path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options =
        zip::write::SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    for (entry_name, content) in files {
        if entry_name.ends_with('/') {
            writer.add_directory(entry_name.to_string(), options).unwrap();
        } else {
            writer.start_file(entry_name.to_string(), options).unwrap();
            writer.write_all(content).unwrap();
        }
    }
    writer.finish().unwrap();
    zip_path
}

pub fn create_test_gz(dir: &Path, name: &str, member: Option<&str>, content: &[u8]) -> PathBuf {
    let gz_path = dir.join(name);
    let file = fs::File::create(&gz_path).unwrap();
    let mut builder = flate2::GzBuilder::new();
    if let Some(member) = member {
        builder = builder.filename(member);
    }
    let mut encoder = builder.write(file, flate2::Compression::default());
    encoder.write_all(content).unwrap();
    encoder.finish().unwrap();
    gz_path
}

/// Build a 7z from `files` laid out under a scratch dir next to the archive.
pub fn create_test_7z(dir: &Path, name: &str, files: &[(&str, &[u8])]) -> PathBuf {
    let src = dir.join(format!("{name}.src"));
    for (entry_name, content) in files {
        let path = src.join(entry_name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    let archive_path = dir.join(name);
    sevenz_rust::compress_to_path(&src, &archive_path).unwrap();
    fs::remove_dir_all(&src).unwrap();
    archive_path
}

/// Layout:
///   root/
///     game.iso
///     readme.txt
///     ps1/
///       track01.bin
///       track01.cue
///       cover.jpg
///       deep/er/still/
///         dreamcast.gdi
///         dump.raw
///         arcade.chd
///         notes.md
///     empty/
pub fn create_disc_tree(root: &Path) {
    let ps1 = root.join("ps1");
    let deep = ps1.join("deep").join("er").join("still");
    fs::create_dir_all(&deep).unwrap();
    fs::create_dir_all(root.join("empty")).unwrap();

    fs::write(root.join("game.iso"), b"iso").unwrap();
    fs::write(root.join("readme.txt"), b"text").unwrap();
    fs::write(ps1.join("track01.bin"), b"bin").unwrap();
    fs::write(ps1.join("track01.cue"), b"cue").unwrap();
    fs::write(ps1.join("cover.jpg"), b"jpg").unwrap();
    fs::write(deep.join("dreamcast.gdi"), b"gdi").unwrap();
    fs::write(deep.join("dump.raw"), b"raw").unwrap();
    fs::write(deep.join("arcade.chd"), b"chd").unwrap();
    fs::write(deep.join("notes.md"), b"md").unwrap();
}

pub fn expected_tree_discs(root: &Path) -> Vec<String> {
    let ps1 = root.join("ps1");
    let deep = ps1.join("deep").join("er").join("still");
    let mut expected: Vec<String> = vec![
        root.join("game.iso"),
        ps1.join("track01.bin"),
        ps1.join("track01.cue"),
        deep.join("dreamcast.gdi"),
        deep.join("dump.raw"),
        deep.join("arcade.chd"),
    ]
    .into_iter()
    .map(|p| p.to_string_lossy().into_owned())
    .collect();
    expected.sort();
    expected
}
