//! Low-level GLB archive parser.
//!
//! Reads the fixed header at the start of the archive and the flat
//! directory that immediately follows it, from any source implementing
//! [`ReadAt`].

use crate::error::{GlbError, Result};
use crate::io::ReadAt;

use super::structures::{GlbEntry, GlbHeader};

/// Low-level GLB archive parser.
///
/// Typically used through [`GlbExtractor`](super::GlbExtractor)
/// rather than directly.
pub struct GlbParser<R: ReadAt> {
    /// The underlying data source
    reader: R,
    /// Total size of the archive in bytes
    size: u64,
}

impl<R: ReadAt> GlbParser<R> {
    pub fn new(reader: R) -> Self {
        let size = reader.size();
        Self { reader, size }
    }

    /// Read and validate the archive header.
    ///
    /// # Errors
    ///
    /// [`GlbError::TruncatedInput`] if the archive is shorter than a header,
    /// [`GlbError::BadMagic`] if the signature does not match.
    pub fn read_header(&self) -> Result<GlbHeader> {
        let mut buf = [0u8; GlbHeader::SIZE];
        self.reader.read_exact_at(0, &mut buf)?;
        GlbHeader::from_bytes(&buf)
    }

    /// Read the directory described by `header`.
    ///
    /// The directory length is checked against what is left of the archive
    /// before anything is allocated, so a corrupt `file_count` fails as
    /// truncated input instead of attempting a huge allocation.
    pub fn read_directory(&self, header: &GlbHeader) -> Result<Vec<GlbEntry>> {
        let dir_size = header.directory_size().ok_or(GlbError::TruncatedInput)?;
        let available = self.size.saturating_sub(GlbHeader::SIZE as u64);
        if dir_size > available {
            return Err(GlbError::TruncatedInput);
        }

        let alloc_err = || GlbError::Allocation { bytes: dir_size };
        let len = usize::try_from(dir_size).map_err(|_| alloc_err())?;
        let count = usize::try_from(header.file_count).map_err(|_| alloc_err())?;

        let mut raw = Vec::new();
        raw.try_reserve_exact(len).map_err(|_| alloc_err())?;
        raw.resize(len, 0);
        self.reader.read_exact_at(GlbHeader::SIZE as u64, &mut raw)?;

        let mut entries = Vec::new();
        entries.try_reserve_exact(count).map_err(|_| alloc_err())?;
        for chunk in raw.chunks_exact(GlbEntry::SIZE) {
            entries.push(GlbEntry::from_bytes(chunk)?);
        }

        Ok(entries)
    }

    /// Read the header and the whole directory.
    pub fn list_entries(&self) -> Result<Vec<GlbEntry>> {
        let header = self.read_header()?;
        self.read_directory(&header)
    }

    /// Get a reference to the underlying reader.
    pub fn reader(&self) -> &R {
        &self.reader
    }
}
