use byteorder::{LittleEndian, ReadBytesExt};
use std::borrow::Cow;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use crate::error::{GlbError, Result};

/// Archive header - 16 bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlbHeader {
    pub magic: [u8; 8],
    pub file_count: u64,
}

impl GlbHeader {
    /// Compared like `strncmp("GLB2.0", magic, 8)`, so the terminator is
    /// significant and the final byte is padding.
    pub const MAGIC: &'static [u8] = b"GLB2.0\0";
    pub const SIZE: usize = 16;

    /// Decode the header and check its magic.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < Self::SIZE {
            return Err(GlbError::TruncatedInput);
        }

        let mut cursor = Cursor::new(data);
        let mut magic = [0u8; 8];
        cursor.read_exact(&mut magic)?;
        let file_count = cursor.read_u64::<LittleEndian>()?;

        let header = Self { magic, file_count };
        if !header.has_valid_magic() {
            return Err(GlbError::BadMagic);
        }
        Ok(header)
    }

    pub fn has_valid_magic(&self) -> bool {
        self.magic.starts_with(Self::MAGIC)
    }

    /// Byte length of the directory that follows the header, if it is
    /// representable at all.
    pub fn directory_size(&self) -> Option<u64> {
        self.file_count.checked_mul(GlbEntry::SIZE as u64)
    }
}

/// Directory entry - 28 bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlbEntry {
    pub offset: u32,
    pub size: u32,
    pub filename: [u8; 20],
}

impl GlbEntry {
    pub const SIZE: usize = 28;

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < Self::SIZE {
            return Err(GlbError::TruncatedInput);
        }

        let mut cursor = Cursor::new(data);
        let offset = cursor.read_u32::<LittleEndian>()?;
        let size = cursor.read_u32::<LittleEndian>()?;
        let mut filename = [0u8; 20];
        cursor.read_exact(&mut filename)?;

        Ok(Self {
            offset,
            size,
            filename,
        })
    }

    /// Filename up to the first NUL, or all 20 bytes if there is none.
    pub fn name_bytes(&self) -> &[u8] {
        let len = self
            .filename
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(self.filename.len());
        &self.filename[..len]
    }

    /// Filename for display; non-UTF8 bytes are replaced.
    pub fn name(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.name_bytes())
    }

    /// `STARTXXX:` / `ENDXXX:` style section markers.
    pub fn is_marker(&self) -> bool {
        self.name_bytes().last() == Some(&b':')
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Whether this entry produces an output file.
    pub fn should_extract(&self) -> bool {
        !self.is_empty() && !self.is_marker() && !self.name_bytes().is_empty()
    }

    /// Where this entry lands when extracted into `dir`.
    pub fn output_path(&self, dir: &Path) -> PathBuf {
        #[cfg(unix)]
        {
            use std::ffi::OsStr;
            use std::os::unix::ffi::OsStrExt;
            dir.join(OsStr::from_bytes(self.name_bytes()))
        }

        #[cfg(not(unix))]
        {
            dir.join(self.name().as_ref())
        }
    }
}
