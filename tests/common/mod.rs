#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Assembles archive bytes the way the game tools lay them out: header,
/// directory, then entry data in directory order.
pub struct ArchiveBuilder {
    entries: Vec<(Vec<u8>, Vec<u8>)>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn file(mut self, name: &[u8], data: &[u8]) -> Self {
        self.entries.push((name.to_vec(), data.to_vec()));
        self
    }

    pub fn marker(self, name: &[u8]) -> Self {
        self.file(name, &[])
    }

    pub fn build(&self) -> Vec<u8> {
        let mut data_offset = 16 + 28 * self.entries.len();
        let mut out = b"GLB2.0\0\0".to_vec();
        out.extend_from_slice(&(self.entries.len() as u64).to_le_bytes());

        for (name, data) in &self.entries {
            let offset = if data.is_empty() { 0 } else { data_offset };
            out.extend_from_slice(&(offset as u32).to_le_bytes());
            out.extend_from_slice(&(data.len() as u32).to_le_bytes());
            let mut filename = [0u8; 20];
            filename[..name.len()].copy_from_slice(name);
            out.extend_from_slice(&filename);
            data_offset += data.len();
        }
        for (_, data) in &self.entries {
            out.extend_from_slice(data);
        }
        out
    }
}

/// Header `GLB2.0`, one 4 byte `data.bin` entry and an `ENDXXX:` marker.
pub fn deadbeef_archive() -> Vec<u8> {
    let mut raw = b"GLB2.0\0\0".to_vec();
    raw.extend_from_slice(&2u64.to_le_bytes());
    raw.extend_from_slice(&72u32.to_le_bytes());
    raw.extend_from_slice(&4u32.to_le_bytes());
    raw.extend_from_slice(b"data.bin\0\0\0\0\0\0\0\0\0\0\0\0");
    raw.extend_from_slice(&0u32.to_le_bytes());
    raw.extend_from_slice(&0u32.to_le_bytes());
    raw.extend_from_slice(b"ENDXXX:\0\0\0\0\0\0\0\0\0\0\0\0\0");
    raw.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
    raw
}

pub fn write_archive(dir: &Path, bytes: &[u8]) -> PathBuf {
    let path = dir.join("TEST.GLB");
    fs::write(&path, bytes).unwrap();
    path
}

/// Names of everything in `dir`, sorted.
pub fn list_dir(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
