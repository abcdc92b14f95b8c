use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::{GlbError, Result};
use crate::io::ReadAt;

use super::parser::GlbParser;
use super::structures::GlbEntry;

/// GLB archive extractor
pub struct GlbExtractor<R: ReadAt> {
    parser: GlbParser<R>,
}

impl<R: ReadAt> GlbExtractor<R> {
    pub fn new(reader: R) -> Self {
        Self {
            parser: GlbParser::new(reader),
        }
    }

    /// List all entries in the archive, markers included
    pub fn list_entries(&self) -> Result<Vec<GlbEntry>> {
        self.parser.list_entries()
    }

    /// Read an entry's data into memory
    pub fn extract_to_memory(&self, entry: &GlbEntry) -> Result<Vec<u8>> {
        let mut buf = alloc_buffer(entry.size)?;
        self.parser
            .reader()
            .read_exact_at(entry.offset as u64, &mut buf)?;
        Ok(buf)
    }

    /// Extract a single entry to `output_path`.
    ///
    /// The output file is created before the data is read, so a failed read
    /// leaves an empty file behind. Any failure is reported as
    /// [`GlbError::Extract`] naming the entry.
    pub fn extract_to_file(&self, entry: &GlbEntry, output_path: &Path) -> Result<()> {
        self.copy_entry(entry, output_path)
            .map_err(|cause| GlbError::Extract {
                name: entry.name().into_owned(),
                cause: Box::new(cause),
            })
    }

    fn copy_entry(&self, entry: &GlbEntry, output_path: &Path) -> Result<()> {
        let mut buf = alloc_buffer(entry.size)?;
        let mut file = File::create(output_path)?;

        self.parser
            .reader()
            .read_exact_at(entry.offset as u64, &mut buf)?;
        file.write_all(&buf)?;

        Ok(())
    }

    /// Extract every qualifying entry into `dir`, in directory order.
    ///
    /// Stops at the first failure; files already written stay on disk.
    /// Returns the number of files written.
    pub fn extract_all(&self, dir: &Path) -> Result<usize> {
        let entries = self.list_entries()?;
        prepare_output_dir(dir)?;
        self.extract_entries(&entries, dir, |_| {})
    }

    /// Extract the qualifying subset of `entries` into an existing `dir`.
    ///
    /// `on_extract` is called with each entry just before it is written.
    /// Markers, empty entries and unnamed entries are passed over silently.
    /// Returns the number of files written.
    pub fn extract_entries<F>(
        &self,
        entries: &[GlbEntry],
        dir: &Path,
        mut on_extract: F,
    ) -> Result<usize>
    where
        F: FnMut(&GlbEntry),
    {
        let mut written = 0;
        for entry in entries.iter().filter(|e| e.should_extract()) {
            on_extract(entry);
            self.extract_to_file(entry, &entry.output_path(dir))?;
            written += 1;
        }

        Ok(written)
    }
}

/// Create `dir` if it is missing. The current directory is left alone.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

fn alloc_buffer(size: u32) -> Result<Vec<u8>> {
    let alloc_err = || GlbError::Allocation { bytes: size as u64 };
    let len = usize::try_from(size).map_err(|_| alloc_err())?;

    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|_| alloc_err())?;
    buf.resize(len, 0);
    Ok(buf)
}
