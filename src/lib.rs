//! # extract-glb
//!
//! Extracts the files packed inside DemonStar `GLB2.0` archives.
//!
//! The archive header and directory are read once, then each entry's byte
//! range is copied out to a file named after the entry. Section markers
//! (`STARTXXX:`, `ENDXXX:`) and empty entries are skipped.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use extract_glb::{GlbExtractor, LocalFileReader};
//!
//! fn main() -> anyhow::Result<()> {
//!     let reader = LocalFileReader::new(Path::new("DEMONSTAR.GLB"))?;
//!     let extractor = GlbExtractor::new(reader);
//!
//!     for entry in extractor.list_entries()? {
//!         println!("{} ({} bytes)", entry.name(), entry.size);
//!     }
//!
//!     let written = extractor.extract_all(Path::new("out"))?;
//!     println!("{written} files extracted");
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod glb;
pub mod io;

pub use cli::Cli;
pub use error::{GlbError, Result};
pub use glb::{GlbEntry, GlbExtractor, GlbHeader, GlbParser};
pub use io::{LocalFileReader, ReadAt};
