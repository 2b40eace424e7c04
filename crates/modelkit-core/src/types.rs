//! Native type definitions.

use std::sync::Arc;

use crate::enums::EnumDef;
use crate::model::ModelDef;
use crate::value::Value;

/// The semantic in-memory types a descriptor can represent.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeType {
    /// Text string
    Text,
    /// 64-bit signed integer
    Integer,
    /// 64-bit floating point
    Float,
    /// Boolean
    Boolean,
    /// UTC datetime
    Datetime,
    /// Structured unique identifier
    Uuid,
    /// Opaque hashed value
    Hashed,
    /// Ordered sequence (the container type, not element-typed)
    List,
    /// Member of a specific enumeration type
    Enum(Arc<EnumDef>),
    /// Instance of a specific model type
    Model(Arc<ModelDef>),
}

impl NativeType {
    /// Get the display name of this type.
    pub fn name(&self) -> String {
        match self {
            NativeType::Text => "TEXT".to_string(),
            NativeType::Integer => "INTEGER".to_string(),
            NativeType::Float => "FLOAT".to_string(),
            NativeType::Boolean => "BOOLEAN".to_string(),
            NativeType::Datetime => "DATETIME".to_string(),
            NativeType::Uuid => "UUID".to_string(),
            NativeType::Hashed => "HASHED".to_string(),
            NativeType::List => "LIST".to_string(),
            NativeType::Enum(def) => format!("ENUM({})", def.name),
            NativeType::Model(def) => format!("MODEL({})", def.name),
        }
    }

    /// Check whether a native value belongs to this type.
    ///
    /// Used for default-value validation at descriptor construction time;
    /// enum and model values must match the specific definition, not just
    /// the variant.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (NativeType::Text, Value::Text(_))
            | (NativeType::Integer, Value::Int(_))
            | (NativeType::Float, Value::Float(_))
            | (NativeType::Boolean, Value::Bool(_))
            | (NativeType::Datetime, Value::Datetime(_))
            | (NativeType::Uuid, Value::Uuid(_))
            | (NativeType::Hashed, Value::Hashed(_))
            | (NativeType::List, Value::List(_)) => true,
            (NativeType::Enum(def), Value::Enum(v)) => def.name == v.enum_name,
            (NativeType::Model(def), Value::Instance(inst)) => def.name == inst.model,
            _ => false,
        }
    }
}
