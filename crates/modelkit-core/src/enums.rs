//! Enumeration type metadata, member handles, and the enum descriptor.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{ConversionError, Result};
use crate::field::{Constraints, FieldOptions, FieldType, conversion_error};
use crate::types::NativeType;
use crate::value::Value;

/// One member of an enumeration type.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    /// Member name (e.g. `"RED"`)
    pub name: String,
    /// Underlying stored value (e.g. `Value::Int(1)`)
    pub value: Value,
}

/// Runtime description of an enumeration type.
///
/// Built once when the owning model is defined and shared via `Arc`, the
/// same way model definitions are.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDef {
    /// Enumeration type name, used for member identity
    pub name: String,
    /// Members in declaration order
    pub members: Vec<EnumMember>,
}

impl EnumDef {
    /// Create an enumeration definition from `(name, value)` pairs.
    pub fn new(
        name: impl Into<String>,
        members: impl IntoIterator<Item = (&'static str, Value)>,
    ) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            members: members
                .into_iter()
                .map(|(name, value)| EnumMember {
                    name: name.to_string(),
                    value,
                })
                .collect(),
        })
    }

    /// Find the member whose underlying value equals `value`.
    pub fn member_by_value(&self, value: &Value) -> Option<&EnumMember> {
        self.members.iter().find(|m| &m.value == value)
    }

    /// Find a member by name.
    pub fn member_by_name(&self, name: &str) -> Option<&EnumMember> {
        self.members.iter().find(|m| m.name == name)
    }
}

/// A self-contained handle to an enumeration member.
///
/// Identity is the enumeration name plus the member name; the underlying
/// value is recovered through the owning descriptor's `EnumDef`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
    /// Name of the enumeration type this member belongs to
    pub enum_name: String,
    /// Member name
    pub member: String,
}

impl EnumValue {
    /// Create a member handle.
    pub fn new(enum_name: impl Into<String>, member: impl Into<String>) -> Self {
        Self {
            enum_name: enum_name.into(),
            member: member.into(),
        }
    }
}

/// Enumeration field descriptor.
///
/// `create_instance` maps a raw stored value to the member whose underlying
/// value equals it; `to_model_data` maps a member handle back to its
/// underlying value. Both directions fail with a conversion error when
/// nothing matches.
#[derive(Debug)]
pub struct EnumField {
    def: Arc<EnumDef>,
    constraints: Constraints,
}

impl EnumField {
    /// Create an enum field with no constraints.
    pub fn new(def: Arc<EnumDef>) -> Self {
        Self {
            def,
            constraints: Constraints::none(),
        }
    }

    /// Create an enum field with the given constraints.
    pub fn with_options(def: Arc<EnumDef>, options: FieldOptions) -> Result<Self> {
        let constraints = options.build(&NativeType::Enum(Arc::clone(&def)))?;
        Ok(Self { def, constraints })
    }

    /// The enumeration definition this field wraps.
    pub fn def(&self) -> &Arc<EnumDef> {
        &self.def
    }
}

impl FieldType for EnumField {
    fn native_type(&self) -> NativeType {
        NativeType::Enum(Arc::clone(&self.def))
    }

    fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    fn create_instance(&self, value: Value) -> Result<Value> {
        match self.def.member_by_value(&value) {
            Some(member) => Ok(Value::Enum(EnumValue::new(
                self.def.name.clone(),
                member.name.clone(),
            ))),
            None => Err(ConversionError {
                expected: "enumeration member value",
                actual: format!("{:?} not in enum {}", value, self.def.name),
                field: None,
            }
            .into()),
        }
    }

    fn to_model_data(&self, value: Value) -> Result<Value> {
        match value {
            Value::Enum(member) if member.enum_name == self.def.name => self
                .def
                .member_by_name(&member.member)
                .map(|m| m.value.clone())
                .ok_or_else(|| {
                    ConversionError {
                        expected: "known enumeration member",
                        actual: format!("{}.{}", member.enum_name, member.member),
                        field: None,
                    }
                    .into()
                }),
            Value::Enum(member) => Err(ConversionError {
                expected: "member of this enumeration",
                actual: format!("member of enum {}", member.enum_name),
                field: None,
            }
            .into()),
            other => Err(conversion_error("ENUM", &other)),
        }
    }
}
