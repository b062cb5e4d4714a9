//! # PAW-XML Decoder Module
//!
//! This module decodes PAW-XML, the XML exchange format for Projector
//! Augmented-Wave atomic datasets, usually distributed gzip-compressed
//! (`Si.PBE.xml.gz`).
//!
//! ## Pipeline
//!
//! 1. Decompress the whole file into memory
//! 2. Fold the quick-xml event stream into an element tree
//! 3. Locate each schema element under `paw_dataset`
//! 4. Coerce attributes and numeric payloads into a typed [`PawDataset`]
//!
//! ## PAW-XML Structure
//!
//! ```text
//! paw_dataset
//! ├── atom (symbol, Z, core, valence)
//! ├── xc_functional (type, name)
//! ├── generator (type, name)
//! ├── ae_energy (kinetic, xc, electrostatic, total)
//! ├── core_energy (kinetic)
//! ├── paw_radius (rc)
//! ├── valence_states
//! │   └── state* (id, l, e, rc, n?, f?)
//! ├── radial_grid (eq, a, d, istart, iend, id)
//! │   ├── values
//! │   └── derivatives
//! ├── shape_function (type, rc)
//! ├── ae_core_density, pseudo_core_density, pseudo_valence_density,
//! │   zero_potential, blochl_local_ionic_potential (grid, rc)
//! ├── ae_partial_wave*, pseudo_partial_wave*, projector_function* (state, grid)
//! ├── kinetic_energy_differences
//! └── exact_exchange_X_matrix
//! ```
//!
//! Every lookup is "first descendant with this name"; only `state` and the
//! three per-state function kinds are read in full.

mod decoder;
mod document;
mod error;
mod helpers;
mod models;
mod state_map;


pub use decoder::decode;
pub use document::{parse_document, Descendants, XmlElement, MAX_DEPTH};
pub use error::{ErrorKind, PawError};
pub use helpers::parse_float_array;
pub use models::*;
pub use state_map::StateMap;
