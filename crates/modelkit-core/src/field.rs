//! Field descriptor contract, constraints, and the scalar descriptors.

use std::fmt;

use uuid::Uuid;

use crate::error::{ConfigError, ConversionError, Error, Result};
use crate::types::NativeType;
use crate::value::Value;

/// Per-field constraint flags and default value, as passed to a descriptor
/// constructor. Validated into [`Constraints`] against the descriptor's
/// native type.
#[derive(Debug, Clone, Default)]
pub struct FieldOptions {
    primary: bool,
    non_null: bool,
    unique: bool,
    default: Option<Value>,
}

impl FieldOptions {
    /// Create options with all constraints off.
    pub fn new() -> Self {
        Self {
            primary: false,
            non_null: false,
            unique: false,
            default: None,
        }
    }

    /// Mark the field as the model's primary key.
    #[must_use]
    pub fn primary(mut self, value: bool) -> Self {
        self.primary = value;
        self
    }

    /// Require the field to always carry a value.
    #[must_use]
    pub fn non_null(mut self, value: bool) -> Self {
        self.non_null = value;
        self
    }

    /// Require the field value to be unique across instances.
    #[must_use]
    pub fn unique(mut self, value: bool) -> Self {
        self.unique = value;
        self
    }

    /// Set the default native value.
    #[must_use]
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Validate these options against a native type.
    ///
    /// Fails fast with a [`ConfigError`] when a non-null field lacks a
    /// default, or when the default's type does not match `native_type`.
    /// `primary` forces `unique` and `non_null` regardless of the passed
    /// flags; the missing-default check applies to the flag as passed, so a
    /// primary key without a default remains valid.
    pub fn build(self, native_type: &NativeType) -> Result<Constraints> {
        if self.non_null && self.default.is_none() {
            return Err(ConfigError::missing_default(&native_type.name()).into());
        }

        let mut non_null = self.non_null;
        let mut unique = self.unique;
        if self.primary {
            non_null = true;
            unique = true;
        }

        if let Some(default) = &self.default {
            if !native_type.matches(default) {
                return Err(
                    ConfigError::default_mismatch(&native_type.name(), default.type_name()).into(),
                );
            }
        }

        Ok(Constraints {
            primary: self.primary,
            non_null,
            unique,
            default: self.default,
        })
    }
}

/// Validated, immutable per-field constraints.
#[derive(Debug, Clone)]
pub struct Constraints {
    primary: bool,
    non_null: bool,
    unique: bool,
    default: Option<Value>,
}

impl Constraints {
    /// Constraints with every flag off and no default.
    pub fn none() -> Self {
        Self {
            primary: false,
            non_null: false,
            unique: false,
            default: None,
        }
    }

    /// Whether the field is the model's primary key.
    pub fn primary(&self) -> bool {
        self.primary
    }

    /// Whether the field must always carry a value.
    pub fn non_null(&self) -> bool {
        self.non_null
    }

    /// Whether the field value must be unique across instances.
    ///
    /// Enforcement belongs to the persistence layer; the descriptor only
    /// records the flag.
    pub fn unique(&self) -> bool {
        self.unique
    }

    /// The default native value, if any.
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

/// The contract every field descriptor implements.
///
/// A descriptor is constructed once, at field declaration time, and is
/// immutable thereafter; it declares the field's semantic type and
/// constraints and converts between the model-data and native forms of the
/// field's value. Both conversions default to identity.
pub trait FieldType: fmt::Debug + Send + Sync {
    /// The semantic value type this descriptor represents.
    fn native_type(&self) -> NativeType;

    /// The validated constraints fixed at construction.
    fn constraints(&self) -> &Constraints;

    /// Whether the field is the model's primary key.
    fn primary(&self) -> bool {
        self.constraints().primary()
    }

    /// Whether the field must always carry a value.
    fn non_null(&self) -> bool {
        self.constraints().non_null()
    }

    /// Whether the field value must be unique across instances.
    fn unique(&self) -> bool {
        self.constraints().unique()
    }

    /// The default native value, if any.
    fn default(&self) -> Option<&Value> {
        self.constraints().default()
    }

    /// Convert a value arriving in model-data form into native form.
    fn create_instance(&self, value: Value) -> Result<Value> {
        Ok(value)
    }

    /// Convert a native value back into model-data form.
    fn to_model_data(&self, value: Value) -> Result<Value> {
        Ok(value)
    }
}

pub(crate) fn conversion_error(expected: &'static str, actual: &Value) -> Error {
    ConversionError {
        expected,
        actual: actual.type_name().to_string(),
        field: None,
    }
    .into()
}

/// String field descriptor. Identity conversions.
#[derive(Debug)]
pub struct StringField {
    constraints: Constraints,
}

impl StringField {
    /// Create a string field with no constraints.
    pub fn new() -> Self {
        Self {
            constraints: Constraints::none(),
        }
    }

    /// Create a string field with the given constraints.
    pub fn with_options(options: FieldOptions) -> Result<Self> {
        Ok(Self {
            constraints: options.build(&NativeType::Text)?,
        })
    }
}

impl Default for StringField {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldType for StringField {
    fn native_type(&self) -> NativeType {
        NativeType::Text
    }

    fn constraints(&self) -> &Constraints {
        &self.constraints
    }
}

/// Integer field descriptor. Identity conversions.
#[derive(Debug)]
pub struct IntField {
    constraints: Constraints,
}

impl IntField {
    /// Create an integer field with no constraints.
    pub fn new() -> Self {
        Self {
            constraints: Constraints::none(),
        }
    }

    /// Create an integer field with the given constraints.
    pub fn with_options(options: FieldOptions) -> Result<Self> {
        Ok(Self {
            constraints: options.build(&NativeType::Integer)?,
        })
    }
}

impl Default for IntField {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldType for IntField {
    fn native_type(&self) -> NativeType {
        NativeType::Integer
    }

    fn constraints(&self) -> &Constraints {
        &self.constraints
    }
}

/// Float field descriptor. Identity conversions.
#[derive(Debug)]
pub struct FloatField {
    constraints: Constraints,
}

impl FloatField {
    /// Create a float field with no constraints.
    pub fn new() -> Self {
        Self {
            constraints: Constraints::none(),
        }
    }

    /// Create a float field with the given constraints.
    pub fn with_options(options: FieldOptions) -> Result<Self> {
        Ok(Self {
            constraints: options.build(&NativeType::Float)?,
        })
    }
}

impl Default for FloatField {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldType for FloatField {
    fn native_type(&self) -> NativeType {
        NativeType::Float
    }

    fn constraints(&self) -> &Constraints {
        &self.constraints
    }
}

/// Boolean field descriptor. Identity conversions.
#[derive(Debug)]
pub struct BoolField {
    constraints: Constraints,
}

impl BoolField {
    /// Create a boolean field with no constraints.
    pub fn new() -> Self {
        Self {
            constraints: Constraints::none(),
        }
    }

    /// Create a boolean field with the given constraints.
    pub fn with_options(options: FieldOptions) -> Result<Self> {
        Ok(Self {
            constraints: options.build(&NativeType::Boolean)?,
        })
    }
}

impl Default for BoolField {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldType for BoolField {
    fn native_type(&self) -> NativeType {
        NativeType::Boolean
    }

    fn constraints(&self) -> &Constraints {
        &self.constraints
    }
}

/// Datetime field descriptor. Identity conversions.
#[derive(Debug)]
pub struct DatetimeField {
    constraints: Constraints,
}

impl DatetimeField {
    /// Create a datetime field with no constraints.
    pub fn new() -> Self {
        Self {
            constraints: Constraints::none(),
        }
    }

    /// Create a datetime field with the given constraints.
    pub fn with_options(options: FieldOptions) -> Result<Self> {
        Ok(Self {
            constraints: options.build(&NativeType::Datetime)?,
        })
    }
}

impl Default for DatetimeField {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldType for DatetimeField {
    fn native_type(&self) -> NativeType {
        NativeType::Datetime
    }

    fn constraints(&self) -> &Constraints {
        &self.constraints
    }
}

/// Unique-identifier field descriptor.
///
/// Converts canonical UUID text into a structured [`Uuid`] on input and
/// renders it back to hyphenated lowercase text on output. Mixed-case input
/// is accepted and normalized to lowercase, so the round-trip law holds up
/// to case-folding.
///
/// No default is ever generated implicitly: a generated-at-declaration
/// default would be shared by every instance that omits the field, which
/// defeats uniqueness. Supply an explicit default, or generate identifiers
/// per-instance in the model layer.
#[derive(Debug)]
pub struct UuidField {
    constraints: Constraints,
}

impl UuidField {
    /// Create a unique-identifier field with no constraints.
    pub fn new() -> Self {
        Self {
            constraints: Constraints::none(),
        }
    }

    /// Create a unique-identifier field with the given constraints.
    pub fn with_options(options: FieldOptions) -> Result<Self> {
        Ok(Self {
            constraints: options.build(&NativeType::Uuid)?,
        })
    }
}

impl Default for UuidField {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldType for UuidField {
    fn native_type(&self) -> NativeType {
        NativeType::Uuid
    }

    fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    fn create_instance(&self, value: Value) -> Result<Value> {
        match value {
            Value::Text(text) => match Uuid::parse_str(&text) {
                Ok(uuid) => Ok(Value::Uuid(uuid)),
                Err(_) => Err(ConversionError {
                    expected: "canonical UUID text",
                    actual: format!("unparsable text '{}'", text),
                    field: None,
                }
                .into()),
            },
            other => Err(conversion_error("UUID text", &other)),
        }
    }

    fn to_model_data(&self, value: Value) -> Result<Value> {
        match value {
            Value::Uuid(uuid) => Ok(Value::Text(uuid.hyphenated().to_string())),
            other => Err(conversion_error("UUID", &other)),
        }
    }
}
