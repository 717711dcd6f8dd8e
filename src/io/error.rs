use super::Format;
use crate::model;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// A `key=value` token or standalone value could not be parsed.
    #[error("failed to parse {format} data: {details} (at line {line})")]
    Parse {
        format: Format,
        line: usize,
        details: String,
    },

    /// An edge description omitted a key the record cannot be built without.
    #[error("missing required key '{key}' (at line {line})")]
    MissingKey { line: usize, key: &'static str },

    /// A section declared more records than the input actually contains.
    #[error("{section} section ended at line {line}: expected {declared} records, found {found}")]
    SectionTooShort {
        section: &'static str,
        declared: u32,
        found: u32,
        line: usize,
    },

    /// A molecule without a lead designation cannot be written out.
    #[error("molecule has no {0} lead designated")]
    MissingLead(&'static str),

    /// The molecule violated a graph invariant while being rebuilt.
    #[error("molecule integrity violation: {0}")]
    Model(#[from] model::error::Error),

    /// The destination buffer cannot hold the encoded molecule.
    #[error("buffer too small: need {required} bytes, have {actual}")]
    BufferTooSmall { required: usize, actual: usize },

    /// The input does not begin with the MMB magic bytes.
    #[error("bad magic: expected {expected:?}, found {found:?}")]
    BadMagic { expected: [u8; 4], found: [u8; 4] },

    /// The input declares an MMB format version this reader cannot decode.
    #[error("unsupported MMB format version {found} (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The input ended before the declared record counts were satisfied.
    #[error("truncated MMB data: need {required} bytes, have {actual}")]
    Truncated { required: usize, actual: usize },

    /// The input carries bytes beyond the encoded molecule.
    #[error("trailing data after MMB payload: expected {expected} bytes, found {actual}")]
    TrailingData { expected: usize, actual: usize },
}

impl Error {
    pub fn parse(format: Format, line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            format,
            line,
            details: details.into(),
        }
    }
}
