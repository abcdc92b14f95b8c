//! GLB2.0 archive parsing and extraction.
//!
//! ## Format Overview
//!
//! A GLB archive is laid out as:
//! 1. A 16 byte header: the `GLB2.0` magic padded to 8 bytes, then a
//!    little-endian `u64` entry count
//! 2. A directory of that many 28 byte entries: `u32` offset, `u32` size and
//!    a 20 byte filename that is only NUL-terminated when shorter than the
//!    field
//! 3. Entry data, at absolute offsets anywhere in the file
//!
//! Everything is byte-packed. Entries named like `STARTXXX:` or `ENDXXX:`
//! only delimit sections and carry no data; they are never extracted, and
//! neither are entries of size zero.

mod extractor;
mod parser;
mod structures;

pub use extractor::{GlbExtractor, prepare_output_dir};
pub use parser::GlbParser;
pub use structures::*;
