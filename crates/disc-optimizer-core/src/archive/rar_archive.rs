//! RAR5 backend. The rar crate only exposes extract-all and writes entry
//! names verbatim under the destination, so names are read from the block
//! headers first: listing never unpacks anything, and extraction refuses an
//! archive holding a name that would land outside the destination.

use std::fs;
use std::io::{self, BufReader, Read};
use std::path::Path;

const RAR5_SIGNATURE: &[u8; 8] = b"Rar!\x1a\x07\x01\x00";
const RAR4_SIGNATURE: &[u8; 7] = b"Rar!\x1a\x07\x00";

const HEAD_FILE: u64 = 2;
const HEAD_ENCRYPTION: u64 = 4;
const HEAD_END: u64 = 5;

const HFL_EXTRA: u64 = 0x01;
const HFL_DATA: u64 = 0x02;

const FHFL_DIRECTORY: u64 = 0x01;
const FHFL_UTIME: u64 = 0x02;
const FHFL_CRC32: u64 = 0x04;

/// RAR5 caps the header size field at three vint bytes.
const MAX_HEADER_SIZE: u64 = 2 * 1024 * 1024;

#[derive(Debug, PartialEq)]
struct RarEntry {
    name: String,
    is_dir: bool,
}

pub(super) fn list(archive_path: &Path) -> Result<Vec<String>, String> {
    let names = read_entries(archive_path)?
        .into_iter()
        .filter(|entry| !entry.is_dir)
        .map(|entry| entry.name)
        .collect();
    Ok(names)
}

pub(super) fn extract(archive_path: &Path, dest_path: &Path) -> Result<usize, String> {
    if let Some(entry) = read_entries(archive_path)?
        .iter()
        .find(|entry| !super::is_enclosed(&entry.name))
    {
        return Err(format!(
            "Refusing archive with entry outside the destination: {}",
            entry.name
        ));
    }

    let path_str = archive_path
        .to_str()
        .ok_or("RAR path contains invalid UTF-8")?;
    let dest_str = dest_path
        .to_str()
        .ok_or("Dest path contains invalid UTF-8")?;

    let archive = rar::Archive::extract_all(path_str, dest_str, "")
        .map_err(|e| format!("Failed to extract RAR: {e:?}"))?;

    let count = archive
        .files
        .iter()
        .filter(|entry| dest_path.join(&entry.name).is_file())
        .count();
    Ok(count)
}

/// Walk the block headers, skipping every data area.
fn read_entries(archive_path: &Path) -> Result<Vec<RarEntry>, String> {
    let file = fs::File::open(archive_path).map_err(|e| format!("Failed to open RAR: {e}"))?;
    let archive_len = file
        .metadata()
        .map_err(|e| format!("Failed to open RAR: {e}"))?
        .len();
    let mut reader = BufReader::new(file);

    let mut signature = [0u8; 8];
    reader
        .read_exact(&mut signature)
        .map_err(|e| format!("Invalid or corrupt RAR: {e}"))?;
    if signature[..7] == RAR4_SIGNATURE[..] {
        return Err("RAR 4.x archives are not supported".to_string());
    }
    if &signature != RAR5_SIGNATURE {
        return Err("Invalid or corrupt RAR: bad signature".to_string());
    }

    let mut entries = Vec::new();
    loop {
        let mut crc = [0u8; 4];
        match reader.read_exact(&mut crc) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(format!("Failed to read RAR header: {e}")),
        }

        let header_size = read_stream_vint(&mut reader)?;
        if header_size == 0 || header_size > MAX_HEADER_SIZE {
            return Err(format!("Invalid or corrupt RAR: header size {header_size}"));
        }
        let mut header = vec![0u8; header_size as usize];
        reader
            .read_exact(&mut header)
            .map_err(|e| format!("Invalid or corrupt RAR: truncated header: {e}"))?;

        let mut fields = &header[..];
        let typ = take_vint(&mut fields)?;
        let flags = take_vint(&mut fields)?;
        if flags & HFL_EXTRA != 0 {
            take_vint(&mut fields)?;
        }
        let data_size = if flags & HFL_DATA != 0 {
            take_vint(&mut fields)?
        } else {
            0
        };

        match typ {
            HEAD_FILE => entries.push(parse_file_header(fields)?),
            HEAD_ENCRYPTION => return Err("Encrypted RAR headers cannot be listed".to_string()),
            HEAD_END => break,
            _ => {}
        }

        if data_size > archive_len {
            return Err(format!("Invalid or corrupt RAR: data size {data_size}"));
        }
        reader
            .seek_relative(data_size as i64)
            .map_err(|e| format!("Failed to skip RAR data: {e}"))?;
    }

    Ok(entries)
}

fn parse_file_header(mut fields: &[u8]) -> Result<RarEntry, String> {
    let file_flags = take_vint(&mut fields)?;
    let _unpacked_size = take_vint(&mut fields)?;
    let _attributes = take_vint(&mut fields)?;
    if file_flags & FHFL_UTIME != 0 {
        skip(&mut fields, 4)?;
    }
    if file_flags & FHFL_CRC32 != 0 {
        skip(&mut fields, 4)?;
    }
    let _compression = take_vint(&mut fields)?;
    let _host_os = take_vint(&mut fields)?;
    let name_len = take_vint(&mut fields)? as usize;
    let name = fields
        .get(..name_len)
        .ok_or("Invalid or corrupt RAR: truncated file name")?;

    Ok(RarEntry {
        name: String::from_utf8_lossy(name).into_owned(),
        is_dir: file_flags & FHFL_DIRECTORY != 0,
    })
}

fn skip(fields: &mut &[u8], n: usize) -> Result<(), String> {
    let bytes: &[u8] = *fields;
    *fields = bytes
        .get(n..)
        .ok_or("Invalid or corrupt RAR: truncated file header")?;
    Ok(())
}

/// Little-endian base-128 integer, high bit set on every byte but the last.
fn take_vint(fields: &mut &[u8]) -> Result<u64, String> {
    let bytes = *fields;
    let mut value = 0u64;
    for (i, &byte) in bytes.iter().enumerate().take(10) {
        value |= u64::from(byte & 0x7f) << (7 * i);
        if byte & 0x80 == 0 {
            *fields = &bytes[i + 1..];
            return Ok(value);
        }
    }
    Err("Invalid or corrupt RAR: bad vint".to_string())
}

fn read_stream_vint(reader: &mut impl Read) -> Result<u64, String> {
    let mut buf = Vec::with_capacity(3);
    loop {
        let mut byte = [0u8; 1];
        reader
            .read_exact(&mut byte)
            .map_err(|e| format!("Invalid or corrupt RAR: truncated header: {e}"))?;
        buf.push(byte[0]);
        if byte[0] & 0x80 == 0 || buf.len() == 3 {
            break;
        }
    }
    take_vint(&mut &buf[..])
}
