//! # pawxml - PAW-XML Atomic Dataset Decoder
//!
//! `pawxml` reads Projector Augmented-Wave (PAW) atomic datasets stored in the
//! PAW-XML exchange format, usually distributed gzip-compressed
//! (`Si.PBE.xml.gz`), and materializes them as a single typed record.
//!
//! ## Key Features
//!
//! - **Typed Record**: one named field per schema element and attribute; the
//!   per-state tables are insertion-ordered maps keyed by state id.
//!
//! - **Strict Coercion**: required attributes are never defaulted. A missing
//!   element, a missing attribute, or a value that does not parse fails the
//!   whole decode with an error naming the culprit.
//!
//! - **Optional State Attributes**: `n` and `f` on `<state>` are recorded only
//!   when non-blank, following the PAW-XML convention for unbound states.
//!
//! - **Diagnostic Dump**: a read-only `name = value` rendering of every field,
//!   plus JSON export through serde.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! let dataset = pawxml::decode("Si.PBE.xml.gz")?;
//!
//! println!("{} (Z = {})", dataset.atom.symbol, dataset.atom.z);
//! for id in dataset.valence_states.ids() {
//!     let occupation = dataset.valence_states.f.get(id);
//!     println!("  {id}: f = {occupation:?}");
//! }
//!
//! let grid_points = dataset.radial_grid.values.len();
//! println!("radial grid '{}' has {} points", dataset.radial_grid.id, grid_points);
//! # Ok::<(), pawxml::PawError>(())
//! ```
//!
//! ## Error Classes
//!
//! Every [`PawError`] maps to one [`ErrorKind`]:
//!
//! | Kind | Cause |
//! |------|-------|
//! | `Io` | file missing, unreadable, or not gzip |
//! | `Parse` | decompressed content is not well-formed XML |
//! | `Schema` | a required element is absent |
//! | `Type` | a required attribute is absent or fails numeric coercion |
//!
//! ## Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`paw`]: element tree, attribute helpers, record model and decoder
//! - [`dump`]: diagnostic `name = value` rendering and JSON export

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod dump;
pub mod paw;

pub use paw::{decode, ErrorKind, PawDataset, PawError};

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::dump::{dump_to_string, to_json, write_dump, DumpOptions};
    pub use crate::paw::{
        decode, AeEnergy, Atom, CoreEnergy, ErrorKind, Generator, GridFunction, PawDataset,
        PawError, PawRadius, RadialFunction, RadialGrid, ShapeFunction, StateMap, ValenceStates,
        XcFunctional,
    };
}
