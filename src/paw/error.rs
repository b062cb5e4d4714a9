use std::path::PathBuf;

/// Errors that can occur while decoding a PAW-XML dataset
#[derive(Debug, thiserror::Error)]
pub enum PawError {
    /// File could not be opened, read or gunzipped
    #[error("I/O error at path '{path}': {source}")]
    Io {
        /// Path of the dataset file
        path: PathBuf,
        /// Underlying I/O (or gzip) error
        #[source]
        source: std::io::Error,
    },

    /// Compressed stream from a caller-supplied reader could not be read
    #[error("I/O error: {0}")]
    Stream(#[from] std::io::Error),

    /// Error reported by the XML tokenizer
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Document is not a well-formed element tree
    #[error("Malformed XML document: {0}")]
    Malformed(String),

    /// A required element does not occur in the dataset
    #[error("Missing required element <{element}>")]
    MissingElement {
        /// Tag name of the missing element
        element: String,
    },

    /// A required attribute is absent
    #[error("Missing required attribute '{attribute}' on <{element}>")]
    MissingAttribute {
        /// Tag name of the element
        element: String,
        /// Name of the missing attribute
        attribute: String,
    },

    /// An attribute value cannot be coerced to its declared type
    #[error("Invalid value {value:?} for attribute '{attribute}' on <{element}>: expected {expected}")]
    InvalidAttribute {
        /// Tag name of the element
        element: String,
        /// Name of the offending attribute
        attribute: String,
        /// Raw attribute text
        value: String,
        /// Declared type ("float" or "integer")
        expected: &'static str,
    },

    /// A numeric payload contains a token that is not a float
    #[error("Invalid number {token:?} in <{element}> payload")]
    InvalidNumber {
        /// Tag name of the element carrying the payload
        element: String,
        /// The token that failed to parse
        token: String,
    },
}

/// Coarse failure classes of a decode call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// File missing, unreadable, or not valid gzip
    Io,
    /// Content is not well-formed XML
    Parse,
    /// A required element is absent
    Schema,
    /// A required attribute is absent or fails coercion, or a payload is not numeric
    Type,
}

impl PawError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PawError::Io { .. } | PawError::Stream(_) => ErrorKind::Io,
            PawError::Xml(_) | PawError::Malformed(_) => ErrorKind::Parse,
            PawError::MissingElement { .. } => ErrorKind::Schema,
            PawError::MissingAttribute { .. }
            | PawError::InvalidAttribute { .. }
            | PawError::InvalidNumber { .. } => ErrorKind::Type,
        }
    }

    pub(crate) fn missing_element(element: &str) -> Self {
        PawError::MissingElement {
            element: element.to_string(),
        }
    }
}
