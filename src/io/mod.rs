//! Reading and writing molecule descriptions.
//!
//! Two formats are supported:
//!
//! - [`mmt`] – the line-oriented text format a device is authored in.
//! - [`mmb`] – the fixed-layout binary artifact consumed by the
//!   spin-dynamics engine.
//!
//! Both are symmetric: each module pairs a reader with a writer, and a
//! molecule survives a round trip through either format unchanged.

use std::fmt;

pub mod error;
pub mod mmb;
pub mod mmt;

pub use error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Mmt,
    Mmb,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Mmt => write!(f, "MMT"),
            Format::Mmb => write!(f, "MMB"),
        }
    }
}

/// Options controlling how MMT text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Trailing delimiter stripped (at most once) from each `key=value`
    /// token's value before it is parsed. `None` disables stripping.
    pub value_terminator: Option<char>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            value_terminator: Some(';'),
        }
    }
}
