//! Core types and traits for ModelKit.
//!
//! This crate provides the field descriptor system a model framework builds
//! on:
//!
//! - `FieldType` trait: the per-field contract (native type, constraints,
//!   and the `create_instance` / `to_model_data` conversion pair)
//! - Scalar, unique-identifier, enum, foreign-reference, list, and
//!   hashed-value descriptors
//! - `Value` dynamic field values and `Instance` dynamic records
//! - `ModelRegistry` / `ModelLoader` / `HashProvider` collaborator seams

pub mod enums;
pub mod error;
pub mod field;
pub mod hash;
pub mod list;
pub mod model;
pub mod relation;
pub mod types;
pub mod value;

pub use enums::{EnumDef, EnumField, EnumMember, EnumValue};
pub use error::{
    AttributeError, ConfigError, ConfigErrorKind, ConversionError, Error, LookupError,
    LookupErrorKind, Result,
};
pub use field::{
    BoolField, Constraints, DatetimeField, FieldOptions, FieldType, FloatField, IntField,
    StringField, UuidField,
};
pub use hash::{HashProvider, Hashed, HashedField, hash_provider, register_hash_provider};
pub use list::{Element, ListField};
pub use model::{Instance, ModelDef, ModelRegistry};
pub use relation::{ForeignField, ModelLoader, ModelTarget};
pub use types::NativeType;
pub use value::Value;
