//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

/// One `<state>` line; `None` leaves the attribute out
pub struct StateSpec {
    pub id: &'static str,
    pub n: Option<&'static str>,
    pub l: u32,
    pub f: Option<&'static str>,
}

/// Build a complete silicon-like PAW-XML document
pub fn synthetic_paw_xml(states: &[StateSpec], grid_points: usize) -> String {
    let grid: Vec<String> = (0..grid_points)
        .map(|i| format!("{:.6e}", 1e-4 * ((0.01 * i as f64).exp() - 1.0)))
        .collect();
    let grid = grid.join(" ");
    let density: Vec<String> = (0..grid_points)
        .map(|i| format!("{:.6}", (-(i as f64) / 50.0).exp()))
        .collect();
    let density = density.join(" ");

    let mut xml = String::from(
        r#"<?xml version="1.0"?>
<paw_dataset version="0.6">
  <atom symbol="Si" Z="14" core="10" valence="4"/>
  <xc_functional type="LDA" name="PW"/>
  <generator type="scalar-relativistic" name="atompaw">generated for testing</generator>
  <ae_energy kinetic="288.248" xc="-21.3265" electrostatic="-666.806" total="-399.884"/>
  <core_energy kinetic="284.614"/>
  <valence_states>
"#,
    );
    for state in states {
        xml.push_str("    <state");
        if let Some(n) = state.n {
            write!(xml, r#" n="{}""#, n).unwrap();
        }
        write!(xml, r#" l="{}""#, state.l).unwrap();
        if let Some(f) = state.f {
            write!(xml, r#" f="{}""#, f).unwrap();
        }
        writeln!(xml, r#" rc="1.8" e="-0.3" id="{}"/>"#, state.id).unwrap();
    }
    writeln!(
        xml,
        r#"  </valence_states>
  <radial_grid eq="r=a*(exp(d*i)-1)" a="1e-4" d="0.01" istart="0" iend="{iend}" id="g1">
    <values>{grid}</values>
    <derivatives>{grid}</derivatives>
  </radial_grid>
  <shape_function type="sinc" rc="1.5"/>
  <paw_radius rc="1.9"/>
  <ae_core_density grid="g1" rc="1.5">{density}</ae_core_density>
  <pseudo_core_density grid="g1" rc="1.5">{density}</pseudo_core_density>
  <pseudo_valence_density grid="g1" rc="1.9">{density}</pseudo_valence_density>
  <zero_potential grid="g1" rc="1.6">{density}</zero_potential>
  <blochl_local_ionic_potential grid="g1" rc="1.6">{density}</blochl_local_ionic_potential>"#,
        iend = grid_points.saturating_sub(1),
    )
    .unwrap();
    for element in ["ae_partial_wave", "pseudo_partial_wave", "projector_function"] {
        for state in states {
            writeln!(
                xml,
                r#"  <{element} state="{id}" grid="g1">{density}</{element}>"#,
                id = state.id
            )
            .unwrap();
        }
    }
    let size = states.len() * states.len();
    let matrix: Vec<String> = (0..size).map(|i| format!("{}.5", i)).collect();
    writeln!(
        xml,
        "  <kinetic_energy_differences>{}</kinetic_energy_differences>",
        matrix.join(" ")
    )
    .unwrap();
    writeln!(
        xml,
        "  <exact_exchange_X_matrix>{}</exact_exchange_X_matrix>",
        matrix.join("\n")
    )
    .unwrap();
    xml.push_str("</paw_dataset>\n");
    xml
}

/// Standard four-state silicon valence configuration
pub fn silicon_states() -> Vec<StateSpec> {
    vec![
        StateSpec { id: "Si-3s", n: Some("3"), l: 0, f: Some("2") },
        StateSpec { id: "Si-3p", n: Some("3"), l: 1, f: Some("2") },
        StateSpec { id: "Si-s1", n: None, l: 0, f: None },
        StateSpec { id: "Si-p1", n: Some(""), l: 1, f: Some("") },
    ]
}

/// Gzip `contents` into `dir/name`
pub fn write_gzip(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(contents).unwrap();
    encoder.finish().unwrap();
    path
}
