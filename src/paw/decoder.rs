use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use log::{debug, info, warn};

use super::document::{parse_document, XmlElement};
use super::helpers::{
    float_attribute, float_payload, integer_attribute, optional_attribute, required_element,
    string_attribute,
};
use super::models::{
    AeEnergy, Atom, CoreEnergy, Generator, GridFunction, PawDataset, PawRadius, RadialFunction,
    RadialGrid, ShapeFunction, ValenceStates, XcFunctional,
};
use super::state_map::StateMap;
use super::PawError;

/// Decode a gzip-compressed PAW-XML file
///
/// Shorthand for [`PawDataset::from_file`].
pub fn decode<P: AsRef<Path>>(path: P) -> Result<PawDataset, PawError> {
    PawDataset::from_file(path)
}

impl PawDataset {
    /// Decode a gzip-compressed PAW-XML file
    ///
    /// The whole file is decompressed into memory and the handle is closed
    /// before XML parsing starts.
    ///
    /// # Errors
    /// - [`ErrorKind::Io`](super::ErrorKind::Io) if the file is missing, unreadable or not gzip
    /// - [`ErrorKind::Parse`](super::ErrorKind::Parse) if the content is not well-formed XML
    /// - [`ErrorKind::Schema`](super::ErrorKind::Schema) if a required element is absent
    /// - [`ErrorKind::Type`](super::ErrorKind::Type) if an attribute or payload cannot be coerced
    ///
    /// # Example
    /// ```rust,no_run
    /// use pawxml::PawDataset;
    ///
    /// let dataset = PawDataset::from_file("Si.PBE.xml.gz")?;
    /// println!("{} valence states", dataset.valence_states.len());
    /// # Ok::<(), pawxml::PawError>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PawError> {
        let path = path.as_ref();
        let io_error = |source: std::io::Error| PawError::Io {
            path: path.to_path_buf(),
            source,
        };

        let xml = {
            let file = File::open(path).map_err(io_error)?;
            gunzip(BufReader::new(file)).map_err(io_error)?
        };
        info!("Read {} ({} bytes decompressed)", path.display(), xml.len());

        Self::from_xml_bytes(&xml)
    }

    /// Decode gzip-compressed PAW-XML from any reader
    pub fn from_gzip_reader<R: Read>(reader: R) -> Result<Self, PawError> {
        let xml = gunzip(reader)?;
        debug!("Decompressed {} bytes", xml.len());
        Self::from_xml_bytes(&xml)
    }

    /// Decode an uncompressed PAW-XML document held in memory
    pub fn from_xml_str(xml: &str) -> Result<Self, PawError> {
        Self::from_xml_bytes(xml.as_bytes())
    }

    /// Decode uncompressed PAW-XML bytes
    ///
    /// The character encoding is detected from the byte order mark or the XML
    /// declaration.
    pub fn from_xml_bytes(xml: &[u8]) -> Result<Self, PawError> {
        let document = parse_document(xml)?;
        let root = if document.name() == "paw_dataset" {
            &document
        } else {
            document
                .find("paw_dataset")
                .ok_or_else(|| PawError::missing_element("paw_dataset"))?
        };

        let dataset = Self {
            atom: decode_atom(required_element(root, "atom")?)?,
            xc_functional: decode_xc_functional(required_element(root, "xc_functional")?)?,
            generator: decode_generator(required_element(root, "generator")?)?,
            ae_energy: decode_ae_energy(required_element(root, "ae_energy")?)?,
            core_energy: CoreEnergy {
                kinetic: float_attribute(required_element(root, "core_energy")?, "kinetic")?,
            },
            paw_radius: PawRadius {
                rc: float_attribute(required_element(root, "paw_radius")?, "rc")?,
            },
            valence_states: decode_valence_states(required_element(root, "valence_states")?)?,
            radial_grid: decode_radial_grid(required_element(root, "radial_grid")?)?,
            shape_function: decode_shape_function(required_element(root, "shape_function")?)?,
            ae_core_density: decode_radial_function(root, "ae_core_density")?,
            pseudo_core_density: decode_radial_function(root, "pseudo_core_density")?,
            pseudo_valence_density: decode_radial_function(root, "pseudo_valence_density")?,
            zero_potential: decode_radial_function(root, "zero_potential")?,
            blochl_local_ionic_potential: decode_radial_function(
                root,
                "blochl_local_ionic_potential",
            )?,
            ae_partial_wave: decode_grid_functions(root, "ae_partial_wave")?,
            pseudo_partial_wave: decode_grid_functions(root, "pseudo_partial_wave")?,
            projector_function: decode_grid_functions(root, "projector_function")?,
            kinetic_energy_differences: float_payload(required_element(
                root,
                "kinetic_energy_differences",
            )?)?,
            exact_exchange_x_matrix: float_payload(required_element(
                root,
                "exact_exchange_X_matrix",
            )?)?,
        };

        debug!(
            "Decoded PAW dataset for {} with {} valence states on a {}-point grid",
            dataset.atom.symbol,
            dataset.valence_states.len(),
            dataset.radial_grid.values.len()
        );

        Ok(dataset)
    }
}

fn gunzip<R: Read>(reader: R) -> std::io::Result<Vec<u8>> {
    let mut decoder = MultiGzDecoder::new(reader);
    let mut xml = Vec::new();
    decoder.read_to_end(&mut xml)?;
    Ok(xml)
}

fn decode_atom(atom: &XmlElement) -> Result<Atom, PawError> {
    Ok(Atom {
        symbol: string_attribute(atom, "symbol")?,
        z: float_attribute(atom, "Z")?,
        core: float_attribute(atom, "core")?,
        valence: float_attribute(atom, "valence")?,
    })
}

fn decode_xc_functional(xc: &XmlElement) -> Result<XcFunctional, PawError> {
    Ok(XcFunctional {
        functional_type: string_attribute(xc, "type")?,
        name: string_attribute(xc, "name")?,
    })
}

fn decode_generator(generator: &XmlElement) -> Result<Generator, PawError> {
    Ok(Generator {
        generator_type: string_attribute(generator, "type")?,
        name: string_attribute(generator, "name")?,
    })
}

fn decode_ae_energy(energy: &XmlElement) -> Result<AeEnergy, PawError> {
    Ok(AeEnergy {
        kinetic: float_attribute(energy, "kinetic")?,
        xc: float_attribute(energy, "xc")?,
        electrostatic: float_attribute(energy, "electrostatic")?,
        total: float_attribute(energy, "total")?,
    })
}

fn decode_valence_states(valence_states: &XmlElement) -> Result<ValenceStates, PawError> {
    let mut states = ValenceStates::default();

    for state in valence_states.find_all("state") {
        let id = string_attribute(state, "id")?;
        let l = float_attribute(state, "l")?;
        let e = float_attribute(state, "e")?;
        let rc = float_attribute(state, "rc")?;
        let n = optional_attribute::<i64>(state, "n", "integer")?;
        let f = optional_attribute::<f64>(state, "f", "float")?;

        if states.l.insert(id.as_str(), l).is_some() {
            warn!("Duplicate valence state '{}': later entry overwrites", id);
        }
        states.e.insert(id.as_str(), e);
        states.rc.insert(id.as_str(), rc);
        if let Some(n) = n {
            states.n.insert(id.as_str(), n);
        }
        if let Some(f) = f {
            states.f.insert(id.as_str(), f);
        }
    }

    Ok(states)
}

fn decode_radial_grid(grid: &XmlElement) -> Result<RadialGrid, PawError> {
    Ok(RadialGrid {
        eq: string_attribute(grid, "eq")?,
        a: float_attribute(grid, "a")?,
        d: float_attribute(grid, "d")?,
        istart: integer_attribute(grid, "istart")?,
        iend: integer_attribute(grid, "iend")?,
        id: string_attribute(grid, "id")?,
        values: float_payload(required_element(grid, "values")?)?,
        derivatives: float_payload(required_element(grid, "derivatives")?)?,
    })
}

fn decode_shape_function(shape: &XmlElement) -> Result<ShapeFunction, PawError> {
    Ok(ShapeFunction {
        shape_type: string_attribute(shape, "type")?,
        rc: float_attribute(shape, "rc")?,
    })
}

fn decode_radial_function(root: &XmlElement, name: &str) -> Result<RadialFunction, PawError> {
    let element = required_element(root, name)?;
    Ok(RadialFunction {
        grid: string_attribute(element, "grid")?,
        rc: float_attribute(element, "rc")?,
        values: float_payload(element)?,
    })
}

fn decode_grid_functions(
    root: &XmlElement,
    name: &str,
) -> Result<StateMap<GridFunction>, PawError> {
    let mut functions = StateMap::new();

    for element in root.find_all(name) {
        let state = string_attribute(element, "state")?;
        let function = GridFunction {
            grid: string_attribute(element, "grid")?,
            values: float_payload(element)?,
        };
        if functions.insert(state.as_str(), function).is_some() {
            warn!("Duplicate <{}> for state '{}': later entry overwrites", name, state);
        }
    }

    debug!("Decoded {} <{}> element(s)", functions.len(), name);
    Ok(functions)
}
