//! Error types for descriptor construction and value conversion.

use std::fmt;

/// The primary error type for all descriptor operations.
#[derive(Debug)]
pub enum Error {
    /// Descriptor construction errors (fail fast, at field declaration time)
    Config(ConfigError),
    /// Value conversion errors during `create_instance`/`to_model_data`
    Conversion(ConversionError),
    /// Named dependency resolution errors (models, related instances)
    Lookup(LookupError),
    /// Caller contract violation when reading an attribute off an instance
    Attribute(AttributeError),
    /// Custom error with message, for loader implementations
    Custom(String),
}

#[derive(Debug)]
pub struct ConfigError {
    pub kind: ConfigErrorKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    /// Field declared non-null without a default value
    MissingDefault,
    /// Default value type does not match the field's native type
    DefaultMismatch,
    /// Model name not present in the registry
    UnknownModel,
    /// No hash provider has been registered
    NoHashProvider,
}

#[derive(Debug)]
pub struct ConversionError {
    pub expected: &'static str,
    pub actual: String,
    pub field: Option<String>,
}

#[derive(Debug)]
pub struct LookupError {
    pub kind: LookupErrorKind,
    pub name: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupErrorKind {
    /// Model name not found in the registry
    ModelNotRegistered,
    /// Related instance not found by the loader
    InstanceNotFound,
}

#[derive(Debug)]
pub struct AttributeError {
    pub model: String,
    pub attribute: String,
}

impl ConfigError {
    /// Build a `MissingDefault` error for the given native type name.
    pub fn missing_default(type_name: &str) -> Self {
        Self {
            kind: ConfigErrorKind::MissingDefault,
            message: format!(
                "field of type {} is declared non-null but has no default value",
                type_name
            ),
        }
    }

    /// Build a `DefaultMismatch` error describing both sides.
    pub fn default_mismatch(type_name: &str, actual: &str) -> Self {
        Self {
            kind: ConfigErrorKind::DefaultMismatch,
            message: format!(
                "default value of type {} is not compatible with field type {}",
                actual, type_name
            ),
        }
    }

    /// Build an `UnknownModel` error for an unresolved model name.
    pub fn unknown_model(name: &str) -> Self {
        Self {
            kind: ConfigErrorKind::UnknownModel,
            message: format!("no model named '{}' is registered", name),
        }
    }
}

impl LookupError {
    /// Build an `InstanceNotFound` error for a failed load.
    pub fn instance_not_found(model: &str, key: &str, value: impl fmt::Display) -> Self {
        Self {
            kind: LookupErrorKind::InstanceNotFound,
            name: model.to_string(),
            message: format!("no {} instance with {} = {}", model, key, value),
        }
    }

    /// Build a `ModelNotRegistered` error.
    pub fn model_not_registered(name: &str) -> Self {
        Self {
            kind: LookupErrorKind::ModelNotRegistered,
            name: name.to_string(),
            message: format!("no model named '{}' is registered", name),
        }
    }
}

impl Error {
    /// Is this a construction-time configuration error?
    ///
    /// Configuration errors are meant to be fatal at model definition time,
    /// before any instance exists.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Is this a conversion error raised while interpreting a raw value?
    pub fn is_conversion(&self) -> bool {
        matches!(self, Error::Conversion(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e.message),
            Error::Conversion(e) => {
                if let Some(field) = &e.field {
                    write!(
                        f,
                        "Conversion error in field '{}': expected {}, found {}",
                        field, e.expected, e.actual
                    )
                } else {
                    write!(
                        f,
                        "Conversion error: expected {}, found {}",
                        e.expected, e.actual
                    )
                }
            }
            Error::Lookup(e) => write!(f, "Lookup error: {}", e.message),
            Error::Attribute(e) => write!(
                f,
                "Attribute error: instance of '{}' has no attribute '{}'",
                e.model, e.attribute
            ),
            Error::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {}, found {}", self.expected, self.actual)
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for AttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' has no attribute '{}'", self.model, self.attribute)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}

impl From<ConversionError> for Error {
    fn from(err: ConversionError) -> Self {
        Error::Conversion(err)
    }
}

impl From<LookupError> for Error {
    fn from(err: LookupError) -> Self {
        Error::Lookup(err)
    }
}

impl From<AttributeError> for Error {
    fn from(err: AttributeError) -> Self {
        Error::Attribute(err)
    }
}

/// Result type alias for descriptor operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_messages() {
        let err = Error::from(ConfigError::missing_default("TEXT"));
        assert!(err.is_config());
        assert!(err.to_string().contains("non-null"));

        let err = Error::from(ConfigError::default_mismatch("INTEGER", "TEXT"));
        assert!(err.to_string().contains("not compatible"));
    }

    #[test]
    fn conversion_error_with_field() {
        let err = Error::Conversion(ConversionError {
            expected: "UUID",
            actual: "TEXT".to_string(),
            field: Some("owner_id".to_string()),
        });
        assert!(err.is_conversion());
        let msg = err.to_string();
        assert!(msg.contains("owner_id"));
        assert!(msg.contains("UUID"));
    }

    #[test]
    fn lookup_error_kinds() {
        let missing = LookupError::model_not_registered("Order");
        assert_eq!(missing.kind, LookupErrorKind::ModelNotRegistered);
        assert_eq!(missing.name, "Order");

        let not_found = LookupError::instance_not_found("Order", "id", 7);
        assert_eq!(not_found.kind, LookupErrorKind::InstanceNotFound);
        assert!(not_found.message.contains("id = 7"));
    }

    #[test]
    fn attribute_error_display() {
        let err = Error::Attribute(AttributeError {
            model: "Order".to_string(),
            attribute: "id".to_string(),
        });
        assert!(err.to_string().contains("no attribute 'id'"));
    }
}
