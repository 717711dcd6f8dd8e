//! Error types for molecule graph construction.
//!
//! Integrity violations are reported at mutation time and leave the
//! molecule in its last valid state.

use thiserror::Error;

/// Errors that can occur while building a [`MolProto`](super::molecule::MolProto).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An edge endpoint referenced a node index that has not been created.
    #[error("node index {index} is out of range (molecule has {node_count} nodes)")]
    NodeIndexOutOfRange {
        /// The offending node index.
        index: u32,
        /// Number of nodes in the molecule at the time of the call.
        node_count: u32,
    },

    /// A lead designation referenced a node index that has not been created.
    #[error("lead index {index} is out of range (molecule has {node_count} nodes)")]
    LeadIndexOutOfRange {
        /// The offending lead index.
        index: u32,
        /// Number of nodes in the molecule at the time of the call.
        node_count: u32,
    },
}
