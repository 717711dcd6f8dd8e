//! The MMT text format: the line-oriented source language a device
//! description is authored in.
//!
//! An MMT file is a fixed sequence of sections:
//!
//! ```text
//! <nodeCount>
//! <key=value key=value ...>     x nodeCount
//! <blank line>
//! <edgeCount>
//! <key=value ...>               x edgeCount
//! <blank line>
//! <leftLeadIndex>
//! <rightLeadIndex>
//! ```
//!
//! Node lines accept the keys `Sm`, `Fm`, `Je0m`, `Am`; edge lines accept
//! `Jm`, `Je1m`, `Jeem`, `bm`, `Dm`, `srcNode`, `destNode`. Every key not
//! named on a line keeps its zero default. Unrecognized keys are skipped
//! and reported as [`Warning`]s.

pub mod line;
pub mod reader;
pub mod writer;

pub use line::Warning;
pub use reader::{read, read_with};
pub use writer::write;
