//! Core data structures representing molecular spin-transport devices.
//!
//! This module provides the foundational types that flow through `molspin`:
//!
//! - [`params`] – Per-site and per-coupling physical parameter records.
//! - [`molecule`] – The append-only device graph of spin sites, couplings,
//!   and lead contacts.
//! - [`error`] – Integrity errors raised while building a graph.
//!
//! The data model intentionally knows nothing about file formats: a
//! [`MolProto`] is produced by the [`crate::io`] readers and consumed by the
//! writers, but carries no trace of the text or binary layout it came from.
//!
//! [`MolProto`]: molecule::MolProto

pub mod error;
pub mod molecule;
pub mod params;
