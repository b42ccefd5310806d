//! Error types for the CAOM2 object model.

/// Result type for CAOM2 model operations
pub type Caom2Result<T> = Result<T, Caom2Error>;

/// Error type for CAOM2 model operations.
///
/// Every variant is raised at the point of the offending call. Operations
/// that fail leave their container or entity untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Caom2Error {
    /// A value's type is not among the permitted types.
    ///
    /// `alternative` is the rendered override (`" or None"`, `" or 0"`) or
    /// empty when the override was disabled.
    #[error("Expected {expected}{alternative} for {field}, received {received}")]
    TypeMismatch {
        expected: String,
        alternative: String,
        field: String,
        received: String,
    },

    /// The key supplied for a keyed mapping differs from the value's own key.
    #[error("Key mismatch, key in object: {found}, supplied key: {supplied}")]
    KeyMismatch { supplied: String, found: String },

    /// A value falls outside an inclusive range.
    #[error("Expected {min} <= {field} <= {max}{alternative}, received {received}")]
    RangeViolation {
        min: String,
        max: String,
        alternative: String,
        field: String,
        received: String,
    },

    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{caller}: invalid {name}: may not contain space ( ), slash (/), escape (\\), or percent (%)")]
    InvalidPathComponent { caller: String, name: String },

    #[error("Lossy conversion from UUID to long: {0}")]
    LossyConversion(uuid::Uuid),

    #[error("Invalid IVOA date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_mismatch_message_names_field_and_types() {
        let err = Caom2Error::TypeMismatch {
            expected: "{str}".to_string(),
            alternative: String::new(),
            field: "keywords".to_string(),
            received: "int".to_string(),
        };
        assert_eq!(err.to_string(), "Expected {str} for keywords, received int");
    }

    #[test]
    fn index_error_message() {
        let err = Caom2Error::IndexOutOfRange { index: 3, len: 2 };
        assert_eq!(err.to_string(), "Index 3 out of range for length 2");
    }
}
