//! A pure Rust compiler for molecular spin-transport device descriptions.
//! It parses the MMT text format into an in-memory device graph and
//! serializes that graph as the MMB binary artifact consumed by the
//! downstream spin-dynamics engine.
//!
//! # Features
//!
//! - **MMT parsing** — Line-oriented `key=value` device descriptions with
//!   per-line diagnostics and warnings for unrecognized parameter keys
//! - **Device graph** — Append-only [`MolProto`] with dense node indices,
//!   referential integrity checks, and lead contact designation
//! - **MMB codec** — Fixed-layout little-endian binary encoding with an
//!   exact size contract and a checked, symmetric decoder
//!
//! # Quick Start
//!
//! A device can be built directly against the graph API and encoded
//! without going through MMT text:
//!
//! ```
//! use molspin::{MolProto, NodeParameters, EdgeParameters};
//! use molspin::io::mmb;
//!
//! // A two-site device: spins coupled ferromagnetically, one lead on
//! // each site.
//! let mut mol = MolProto::new();
//! let a = mol.create_node(NodeParameters { sm: 1.0, fm: 0.1, ..Default::default() });
//! let b = mol.create_node(NodeParameters { sm: 1.0, fm: 0.1, ..Default::default() });
//! mol.connect_nodes(a, b, EdgeParameters { jm: 1.0, bm: 1.0, ..Default::default() })?;
//! mol.set_leads(a, b)?;
//!
//! // Encode: 24-byte header + 2 node records + 1 edge record.
//! let bytes = mmb::encode(&mol);
//! assert_eq!(bytes.len(), mmb::encoded_len(&mol));
//! assert_eq!(bytes.len(), 24 + 2 * 32 + 64);
//!
//! // The decoder reconstructs the same graph bit-exactly.
//! let decoded = mmb::decode(&bytes)?;
//! assert_eq!(decoded, mol);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Text input goes through [`io::mmt::read`], which returns the parsed
//! graph together with any warnings:
//!
//! ```
//! use molspin::io::mmt;
//!
//! let source = "\
//! 2
//! Sm=1.0; Fm=0.1;
//! Sm=1.0; Fm=0.1;
//!
//! 1
//! srcNode=0; destNode=1; Jm=1.0; bm=1.0; Dm=0,0,0;
//!
//! 0
//! 1
//! ";
//! let (mol, warnings) = mmt::read(source.as_bytes())?;
//! assert!(warnings.is_empty());
//! assert_eq!(mol.node_count(), 2);
//! assert_eq!((mol.left_lead(), mol.right_lead()), (Some(0), Some(1)));
//! # Ok::<(), molspin::io::error::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — MMT text reading/writing and the MMB binary codec
//!
//! # Data Types
//!
//! - [`MolProto`] — The device graph: nodes, edges, lead contacts
//! - [`Node`] / [`Edge`] — Graph records with dense `u32` indices
//! - [`NodeParameters`] — Per-site spin, flux, and anisotropy constants
//! - [`EdgeParameters`] — Coupling constants, including the directional
//!   Dzyaloshinskii-Moriya vector
//! - [`ModelError`] — Graph integrity violations

mod model;

pub mod io;

pub use model::error::Error as ModelError;
pub use model::molecule::{Edge, MolProto, Node};
pub use model::params::{EdgeParameters, NodeParameters};
