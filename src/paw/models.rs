//! Data models for PAW-XML datasets
//!
//! One struct per schema element; attribute names map to fields except where
//! they collide with Rust keywords (`type` becomes `functional_type`,
//! `generator_type` or `shape_type`).

use serde::Serialize;

use super::state_map::StateMap;

/// Complete decoded PAW dataset
///
/// Built once by the decoder and never modified by this crate afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PawDataset {
    /// `<atom>`
    pub atom: Atom,

    /// `<xc_functional>`
    pub xc_functional: XcFunctional,

    /// `<generator>`
    pub generator: Generator,

    /// `<ae_energy>`
    pub ae_energy: AeEnergy,

    /// `<core_energy>`
    pub core_energy: CoreEnergy,

    /// `<paw_radius>`
    pub paw_radius: PawRadius,

    /// `<valence_states>` and its `<state>` children
    pub valence_states: ValenceStates,

    /// `<radial_grid>` with its `<values>` and `<derivatives>`
    pub radial_grid: RadialGrid,

    /// `<shape_function>`
    pub shape_function: ShapeFunction,

    /// All-electron core density
    pub ae_core_density: RadialFunction,

    /// Pseudo core density
    pub pseudo_core_density: RadialFunction,

    /// Pseudo valence density
    pub pseudo_valence_density: RadialFunction,

    /// Zero potential
    pub zero_potential: RadialFunction,

    /// Blöchl local ionic pseudopotential
    pub blochl_local_ionic_potential: RadialFunction,

    /// All-electron partial waves, keyed by state id
    pub ae_partial_wave: StateMap<GridFunction>,

    /// Pseudo partial waves, keyed by state id
    pub pseudo_partial_wave: StateMap<GridFunction>,

    /// Projector functions, keyed by state id
    pub projector_function: StateMap<GridFunction>,

    /// Kinetic energy differences, flat as stored in the file
    pub kinetic_energy_differences: Vec<f64>,

    /// Exact-exchange X matrix, flat as stored in the file
    #[serde(rename = "exact_exchange_X_matrix")]
    pub exact_exchange_x_matrix: Vec<f64>,
}

/// Atom identity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Atom {
    /// Chemical symbol
    pub symbol: String,
    /// Atomic number
    #[serde(rename = "Z")]
    pub z: f64,
    /// Number of core electrons
    pub core: f64,
    /// Number of valence electrons
    pub valence: f64,
}

/// Exchange-correlation functional used to generate the dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XcFunctional {
    /// Functional family (`LDA`, `GGA`, ...)
    #[serde(rename = "type")]
    pub functional_type: String,
    /// Functional name (`PBE`, `PW`, ...)
    pub name: String,
}

/// Program that generated the dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Generator {
    /// Relativistic treatment (`scalar-relativistic`, ...)
    #[serde(rename = "type")]
    pub generator_type: String,
    /// Generator program name
    pub name: String,
}

/// All-electron reference energies
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AeEnergy {
    /// Kinetic energy
    pub kinetic: f64,
    /// Exchange-correlation energy
    pub xc: f64,
    /// Electrostatic energy
    pub electrostatic: f64,
    /// Total energy
    pub total: f64,
}

/// Core kinetic energy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoreEnergy {
    /// Kinetic energy of the core electrons
    pub kinetic: f64,
}

/// Radius of the PAW augmentation sphere
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PawRadius {
    /// Augmentation sphere radius
    pub rc: f64,
}

/// Per-state attribute tables, one entry per `<state>` element
///
/// `n` and `f` only hold states whose attribute is present and non-blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValenceStates {
    /// Angular momentum quantum number
    pub l: StateMap<f64>,
    /// Eigenvalue
    pub e: StateMap<f64>,
    /// Cutoff radius
    pub rc: StateMap<f64>,
    /// Principal quantum number (bound states only)
    pub n: StateMap<i64>,
    /// Occupation (bound states only)
    pub f: StateMap<f64>,
}

impl ValenceStates {
    /// State ids in document order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.l.keys()
    }

    /// Number of distinct state ids
    pub fn len(&self) -> usize {
        self.l.len()
    }

    /// True when the dataset declares no valence states
    pub fn is_empty(&self) -> bool {
        self.l.is_empty()
    }
}

/// Radial grid definition and sampled points
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadialGrid {
    /// Grid equation, e.g. `r=a*i/(n-i)`
    pub eq: String,
    /// Grid parameter `a`
    pub a: f64,
    /// Grid parameter `d`
    pub d: f64,
    /// First grid index
    pub istart: i64,
    /// Last grid index
    pub iend: i64,
    /// Grid id referenced by the radial functions
    pub id: String,
    /// r values
    pub values: Vec<f64>,
    /// dr/di values
    pub derivatives: Vec<f64>,
}

/// Compensation charge shape function
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeFunction {
    /// Shape kind (`gauss`, `sinc`, `bessel`)
    #[serde(rename = "type")]
    pub shape_type: String,
    /// Shape function radius
    pub rc: f64,
}

/// A density or potential sampled on a radial grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadialFunction {
    /// Id of the radial grid the values are sampled on
    pub grid: String,
    /// Cutoff radius
    pub rc: f64,
    /// Sampled values
    pub values: Vec<f64>,
}

/// A per-state radial function (partial wave or projector)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridFunction {
    /// Id of the radial grid the values are sampled on
    pub grid: String,
    /// Sampled values
    pub values: Vec<f64>,
}
