//! ModelKit - declarative field type descriptors for model frameworks.
//!
//! ModelKit provides the type layer of a model/ORM framework: per-field
//! descriptors declaring a field's semantic type, its constraints (primary
//! key, non-null, unique, default), and the bidirectional conversion between
//! the in-memory native form and the model-data form used for persistence
//! or transport.
//!
//! # Quick Start
//!
//! ```
//! use modelkit::prelude::*;
//!
//! // Declared once, at field declaration time; immutable afterwards.
//! let name = StringField::with_options(
//!     FieldOptions::new().non_null(true).default("anonymous"),
//! )
//! .unwrap();
//! assert!(name.non_null());
//!
//! let id = UuidField::with_options(FieldOptions::new().primary(true)).unwrap();
//! assert!(id.unique() && id.non_null());
//!
//! // Conversion pair: model data in, native value out, and back.
//! let native = id
//!     .create_instance(Value::Text(
//!         "123e4567-e89b-12d3-a456-426614174000".into(),
//!     ))
//!     .unwrap();
//! let data = id.to_model_data(native).unwrap();
//! assert_eq!(
//!     data,
//!     Value::Text("123e4567-e89b-12d3-a456-426614174000".into())
//! );
//! ```
//!
//! Foreign references resolve through an explicit [`ModelRegistry`] and an
//! injected [`ModelLoader`]; hashed values go through the process-wide
//! [`HashProvider`] registration. Persistence, query construction, and hash
//! computation live in collaborating crates, behind those seams.

pub use modelkit_core::{
    AttributeError, BoolField, ConfigError, ConfigErrorKind, Constraints, ConversionError,
    DatetimeField, Element, EnumDef, EnumField, EnumMember, EnumValue, Error, FieldOptions,
    FieldType, FloatField, ForeignField, HashProvider, Hashed, HashedField, Instance, IntField,
    ListField, LookupError, LookupErrorKind, ModelDef, ModelLoader, ModelRegistry, ModelTarget,
    NativeType, Result, StringField, UuidField, Value, hash_provider, register_hash_provider,
};

/// Convenience re-exports for the common surface.
pub mod prelude {
    pub use modelkit_core::{
        BoolField, DatetimeField, EnumDef, EnumField, EnumValue, Error, FieldOptions, FieldType,
        FloatField, ForeignField, HashedField, Instance, IntField, ListField, ModelDef,
        ModelLoader, ModelRegistry, NativeType, Result, StringField, UuidField, Value,
    };
}
