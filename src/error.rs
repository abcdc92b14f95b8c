//! Error types for GLB archive reading and extraction.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlbError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Hit premature EOF")]
    TruncatedInput,

    #[error("Unknown file magic, expected \"GLB2.0\"")]
    BadMagic,

    #[error("unable to allocate {bytes} bytes")]
    Allocation { bytes: u64 },

    #[error("Error extracting {name}")]
    Extract {
        name: String,
        #[source]
        cause: Box<GlbError>,
    },
}

impl GlbError {
    /// The error underneath any [`GlbError::Extract`] wrapping.
    pub fn root(&self) -> &GlbError {
        match self {
            GlbError::Extract { cause, .. } => cause.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, GlbError>;
