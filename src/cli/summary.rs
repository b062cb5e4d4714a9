use anyhow::{Context, Result};
use std::path::PathBuf;

use pawxml::PawDataset;

/// Display a short overview of a PAW dataset
pub fn run(file: PathBuf) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let dataset = pawxml::decode(&file)
        .with_context(|| format!("Failed to decode PAW dataset: {}", file.display()))?;

    print!("{}", format_summary(&file, &dataset));
    Ok(())
}

fn format_summary(file: &std::path::Path, dataset: &PawDataset) -> String {
    let mut lines = Vec::new();

    lines.push(heading("PAW Dataset Summary"));
    lines.push(heading("==================="));
    lines.push(format!("File: {}", file.display()));
    lines.push(String::new());

    lines.push(heading("Atom:"));
    lines.push(format!(
        "  {} (Z = {}, core = {}, valence = {})",
        dataset.atom.symbol, dataset.atom.z, dataset.atom.core, dataset.atom.valence
    ));
    lines.push(format!(
        "  XC functional: {} {}",
        dataset.xc_functional.functional_type, dataset.xc_functional.name
    ));
    lines.push(format!(
        "  Generator: {} ({})",
        dataset.generator.name, dataset.generator.generator_type
    ));
    lines.push(format!("  PAW radius: {}", dataset.paw_radius.rc));
    lines.push(String::new());

    lines.push(heading("Valence states:"));
    for id in dataset.valence_states.ids() {
        let states = &dataset.valence_states;
        let n = states
            .n
            .get(id)
            .map_or_else(|| "-".to_string(), |n| n.to_string());
        let f = states
            .f
            .get(id)
            .map_or_else(|| "-".to_string(), |f| f.to_string());
        lines.push(format!(
            "  {:<10} n = {:<3} l = {:<3} f = {:<5} e = {}",
            id,
            n,
            states.l.get(id).copied().unwrap_or_default(),
            f,
            states.e.get(id).copied().unwrap_or_default()
        ));
    }
    lines.push(String::new());

    lines.push(heading("Radial grid:"));
    lines.push(format!(
        "  {} [{}..{}] '{}' with {} points",
        dataset.radial_grid.eq,
        dataset.radial_grid.istart,
        dataset.radial_grid.iend,
        dataset.radial_grid.id,
        dataset.radial_grid.values.len()
    ));
    lines.push(String::new());

    lines.push(heading("Radial functions:"));
    lines.push(format!(
        "  ae_partial_wave: {}",
        dataset.ae_partial_wave.len()
    ));
    lines.push(format!(
        "  pseudo_partial_wave: {}",
        dataset.pseudo_partial_wave.len()
    ));
    lines.push(format!(
        "  projector_function: {}",
        dataset.projector_function.len()
    ));
    lines.push(format!(
        "  kinetic_energy_differences: {} values",
        dataset.kinetic_energy_differences.len()
    ));
    lines.push(format!(
        "  exact_exchange_X_matrix: {} values",
        dataset.exact_exchange_x_matrix.len()
    ));

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

#[cfg(feature = "colorized_output")]
fn heading(text: &str) -> String {
    console::style(text).bold().cyan().to_string()
}

#[cfg(not(feature = "colorized_output"))]
fn heading(text: &str) -> String {
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const CARBON_XML: &str = r#"<paw_dataset version="0.6">
  <atom symbol="C" Z="6" core="2" valence="4"/>
  <xc_functional type="LDA" name="PW"/>
  <generator type="scalar-relativistic" name="atompaw"/>
  <ae_energy kinetic="37.7" xc="-4.5" electrostatic="-85.6" total="-52.4"/>
  <core_energy kinetic="30.1"/>
  <valence_states>
    <state n="2" l="0" f="2" rc="1.3" e="-0.5" id="C-2s"/>
    <state l="1" rc="1.3" e="0.2" id="C-p1"/>
  </valence_states>
  <radial_grid eq="r=a*i/(n-i)" a="0.4" d="3" istart="0" iend="2" id="g1">
    <values>0.0 0.1 0.2</values>
    <derivatives>0.1 0.1 0.1</derivatives>
  </radial_grid>
  <shape_function type="gauss" rc="0.3"/>
  <paw_radius rc="1.5"/>
  <ae_core_density grid="g1" rc="1.0">1 2 3</ae_core_density>
  <pseudo_core_density grid="g1" rc="1.0">1 2 3</pseudo_core_density>
  <pseudo_valence_density grid="g1" rc="1.0">1 2 3</pseudo_valence_density>
  <zero_potential grid="g1" rc="1.0">1 2 3</zero_potential>
  <blochl_local_ionic_potential grid="g1" rc="1.0">1 2 3</blochl_local_ionic_potential>
  <ae_partial_wave state="C-2s" grid="g1">1 2 3</ae_partial_wave>
  <pseudo_partial_wave state="C-2s" grid="g1">1 2 3</pseudo_partial_wave>
  <projector_function state="C-2s" grid="g1">1 2 3</projector_function>
  <kinetic_energy_differences>0.5</kinetic_energy_differences>
  <exact_exchange_X_matrix>0.25</exact_exchange_X_matrix>
</paw_dataset>"#;

    #[test]
    fn test_format_summary() {
        let dataset = PawDataset::from_xml_str(CARBON_XML).unwrap();
        let summary = format_summary(Path::new("C.LDA.xml.gz"), &dataset);

        assert!(summary.contains("File: C.LDA.xml.gz"));
        assert!(summary.contains("C (Z = 6, core = 2, valence = 4)"));
        assert!(summary.contains("XC functional: LDA PW"));
        assert!(summary.contains("'g1' with 3 points"));
        assert!(summary.contains("projector_function: 1"));
        assert!(summary.contains("exact_exchange_X_matrix: 1 values"));

        let states: Vec<_> = summary
            .lines()
            .filter(|line| line.starts_with("  C-"))
            .collect();
        assert_eq!(states.len(), 2);
        assert!(states[0].contains("n = 2"));
        // unbound state has neither n nor f
        assert!(states[1].contains("n = -"));
        assert!(states[1].contains("f = -"));
    }
}
