use std::str::FromStr;

use super::document::XmlElement;
use super::PawError;

/// First descendant of `parent` named `name`, or a schema error naming it
pub(super) fn required_element<'a>(
    parent: &'a XmlElement,
    name: &str,
) -> Result<&'a XmlElement, PawError> {
    let mut matches = parent.descendants().filter(|e| e.name() == name);
    let first = matches
        .next()
        .ok_or_else(|| PawError::missing_element(name))?;
    let extra = matches.count();
    if extra > 0 {
        log::debug!("Ignoring {} additional <{}> element(s)", extra, name);
    }
    Ok(first)
}

/// Raw attribute text; absence is an error, an empty string is a value
pub(super) fn required_attribute<'a>(
    element: &'a XmlElement,
    name: &str,
) -> Result<&'a str, PawError> {
    element
        .attribute(name)
        .ok_or_else(|| PawError::MissingAttribute {
            element: element.name().to_string(),
            attribute: name.to_string(),
        })
}

pub(super) fn string_attribute(element: &XmlElement, name: &str) -> Result<String, PawError> {
    required_attribute(element, name).map(str::to_string)
}

pub(super) fn float_attribute(element: &XmlElement, name: &str) -> Result<f64, PawError> {
    let raw = required_attribute(element, name)?;
    coerce(element, name, raw, "float")
}

pub(super) fn integer_attribute(element: &XmlElement, name: &str) -> Result<i64, PawError> {
    let raw = required_attribute(element, name)?;
    coerce(element, name, raw, "integer")
}

/// Optional attribute: present only when its trimmed text is non-empty
pub(super) fn optional_attribute<T: FromStr>(
    element: &XmlElement,
    name: &str,
    expected: &'static str,
) -> Result<Option<T>, PawError> {
    match element.attribute(name) {
        Some(raw) if !raw.trim().is_empty() => coerce(element, name, raw, expected).map(Some),
        _ => Ok(None),
    }
}

fn coerce<T: FromStr>(
    element: &XmlElement,
    name: &str,
    raw: &str,
    expected: &'static str,
) -> Result<T, PawError> {
    raw.trim()
        .parse()
        .map_err(|_| PawError::InvalidAttribute {
            element: element.name().to_string(),
            attribute: name.to_string(),
            value: raw.to_string(),
            expected,
        })
}

/// Numeric text payload of an element
pub(super) fn float_payload(element: &XmlElement) -> Result<Vec<f64>, PawError> {
    parse_float_array(element.text()).map_err(|token| PawError::InvalidNumber {
        element: element.name().to_string(),
        token,
    })
}

/// Parse whitespace-separated decimal text into floats, preserving order
///
/// Any mix of spaces, tabs and newlines separates values. Empty or
/// whitespace-only input yields an empty vector. On failure the offending
/// token is returned.
///
/// # Example
/// ```
/// let values = pawxml::paw::parse_float_array("1.0 2.5  -3.25\n4.0").unwrap();
/// assert_eq!(values, vec![1.0, 2.5, -3.25, 4.0]);
/// ```
pub fn parse_float_array(text: &str) -> Result<Vec<f64>, String> {
    text.split_whitespace()
        .map(|token| token.parse::<f64>().map_err(|_| token.to_string()))
        .collect()
}
