//! Diagnostic dump of a decoded dataset
//!
//! Renders every field of a [`PawDataset`] as one `name = value` line, in a
//! fixed order. Field names follow the flat naming used by PAW tooling
//! (`atom_Z`, `state_f`, `radial_grid_values`, ...). Nothing here is needed to
//! decode a dataset; it only reads the record.

use std::fmt::{self, Display, Write as _};
use std::io;

use crate::paw::{GridFunction, PawDataset, RadialFunction, StateMap};

/// Default array length above which output is summarized
pub const DEFAULT_THRESHOLD: usize = 1000;

/// Default number of values shown at each end of a summarized array
pub const DEFAULT_EDGE_ITEMS: usize = 3;

/// Options controlling how arrays are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpOptions {
    /// Arrays longer than this are summarized
    pub threshold: usize,
    /// Values kept at each end of a summarized array
    pub edge_items: usize,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            edge_items: DEFAULT_EDGE_ITEMS,
        }
    }
}

impl DumpOptions {
    /// Never summarize, print every value
    pub fn full() -> Self {
        Self {
            threshold: usize::MAX,
            edge_items: DEFAULT_EDGE_ITEMS,
        }
    }
}

/// Write the dump to any `io::Write` sink
pub fn write_dump<W: io::Write>(
    dataset: &PawDataset,
    out: &mut W,
    options: &DumpOptions,
) -> io::Result<()> {
    for (name, value) in dump_lines(dataset, options) {
        writeln!(out, "{} = {}", name, value)?;
    }
    Ok(())
}

/// Render the dump into a string
pub fn dump_to_string(dataset: &PawDataset, options: &DumpOptions) -> String {
    let mut output = String::new();
    for (name, value) in dump_lines(dataset, options) {
        // writing into a String cannot fail
        let _ = writeln!(output, "{} = {}", name, value);
    }
    output
}

/// Serialize the whole dataset as JSON
pub fn to_json(dataset: &PawDataset, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(dataset)
    } else {
        serde_json::to_string(dataset)
    }
}

/// `(field_name, rendered_value)` pairs in dump order
pub fn dump_lines(dataset: &PawDataset, options: &DumpOptions) -> Vec<(&'static str, String)> {
    let array = |values: &[f64]| format_array(values, options);
    let mut lines = vec![
        ("atom_symbol", quoted(&dataset.atom.symbol)),
        ("atom_Z", float(dataset.atom.z)),
        ("atom_core", float(dataset.atom.core)),
        ("atom_valence", float(dataset.atom.valence)),
        ("xc_functional_type", quoted(&dataset.xc_functional.functional_type)),
        ("xc_functional_name", quoted(&dataset.xc_functional.name)),
        ("generator_type", quoted(&dataset.generator.generator_type)),
        ("generator_name", quoted(&dataset.generator.name)),
        ("ae_energy_kinetic", float(dataset.ae_energy.kinetic)),
        ("ae_energy_xc", float(dataset.ae_energy.xc)),
        ("ae_energy_electrostatic", float(dataset.ae_energy.electrostatic)),
        ("ae_energy_total", float(dataset.ae_energy.total)),
        ("core_energy_kinetic", float(dataset.core_energy.kinetic)),
        ("paw_radius_rc", float(dataset.paw_radius.rc)),
        ("state_l", format_map(&dataset.valence_states.l, |v| float(*v))),
        ("state_e", format_map(&dataset.valence_states.e, |v| float(*v))),
        ("state_rc", format_map(&dataset.valence_states.rc, |v| float(*v))),
        ("state_n", format_map(&dataset.valence_states.n, |v| v.to_string())),
        ("state_f", format_map(&dataset.valence_states.f, |v| float(*v))),
        ("radial_grid_eq", quoted(&dataset.radial_grid.eq)),
        ("radial_grid_a", float(dataset.radial_grid.a)),
        ("radial_grid_d", float(dataset.radial_grid.d)),
        ("radial_grid_istart", dataset.radial_grid.istart.to_string()),
        ("radial_grid_iend", dataset.radial_grid.iend.to_string()),
        ("radial_grid_id", quoted(&dataset.radial_grid.id)),
        ("radial_grid_values", array(&dataset.radial_grid.values)),
        ("radial_grid_derivatives", array(&dataset.radial_grid.derivatives)),
        ("shape_function_type", quoted(&dataset.shape_function.shape_type)),
        ("shape_function_rc", float(dataset.shape_function.rc)),
    ];

    let radial_functions: [(&'static str, &'static str, &'static str, &RadialFunction); 5] = [
        (
            "ae_core_density_grid",
            "ae_core_density_rc",
            "ae_core_density",
            &dataset.ae_core_density,
        ),
        (
            "pseudo_core_density_grid",
            "pseudo_core_density_rc",
            "pseudo_core_density",
            &dataset.pseudo_core_density,
        ),
        (
            "pseudo_valence_density_grid",
            "pseudo_valence_density_rc",
            "pseudo_valence_density",
            &dataset.pseudo_valence_density,
        ),
        (
            "zero_potential_grid",
            "zero_potential_rc",
            "zero_potential",
            &dataset.zero_potential,
        ),
        (
            "blochl_local_ionic_potential_grid",
            "blochl_local_ionic_potential_rc",
            "blochl_local_ionic_potential",
            &dataset.blochl_local_ionic_potential,
        ),
    ];
    for (grid_name, rc_name, values_name, function) in radial_functions {
        lines.push((grid_name, quoted(&function.grid)));
        lines.push((rc_name, float(function.rc)));
        lines.push((values_name, array(&function.values)));
    }

    let grid_functions: [(&'static str, &'static str, &StateMap<GridFunction>); 3] = [
        ("ae_partial_wave_grid", "ae_partial_wave", &dataset.ae_partial_wave),
        (
            "pseudo_partial_wave_grid",
            "pseudo_partial_wave",
            &dataset.pseudo_partial_wave,
        ),
        (
            "projector_function_grid",
            "projector_function",
            &dataset.projector_function,
        ),
    ];
    for (grid_name, values_name, functions) in grid_functions {
        lines.push((grid_name, format_map(functions, |f| quoted(&f.grid))));
        lines.push((values_name, format_map(functions, |f| array(&f.values))));
    }

    lines.push((
        "kinetic_energy_differences",
        array(&dataset.kinetic_energy_differences),
    ));
    lines.push((
        "exact_exchange_X_matrix",
        array(&dataset.exact_exchange_x_matrix),
    ));

    lines
}

impl Display for PawDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in dump_lines(self, &DumpOptions::default()) {
            writeln!(f, "{} = {}", name, value)?;
        }
        Ok(())
    }
}

fn float(value: f64) -> String {
    format!("{:?}", value)
}

fn quoted(value: &str) -> String {
    format!("{:?}", value)
}

fn format_map<T>(map: &StateMap<T>, render: impl Fn(&T) -> String) -> String {
    let entries: Vec<String> = map
        .iter()
        .map(|(id, value)| format!("{:?}: {}", id, render(value)))
        .collect();
    format!("{{{}}}", entries.join(", "))
}

/// Render an array, summarizing it when longer than the threshold
pub fn format_array(values: &[f64], options: &DumpOptions) -> String {
    let join = |slice: &[f64]| {
        slice
            .iter()
            .map(|v| float(*v))
            .collect::<Vec<_>>()
            .join(", ")
    };

    if values.len() > options.threshold && values.len() > 2 * options.edge_items {
        let head = &values[..options.edge_items];
        let tail = &values[values.len() - options.edge_items..];
        format!("[{}, ..., {}]", join(head), join(tail))
    } else {
        format!("[{}]", join(values))
    }
}
