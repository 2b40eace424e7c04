//! Hashed-value descriptor and the hashing collaborator seam.
//!
//! Hash computation belongs to an external collaborator. It is late-bound
//! through a process-wide registration populated at startup, which keeps this
//! crate free of a load-order cycle with the hashing module: descriptors can
//! be declared before the provider crate finishes initializing, as long as
//! registration happens before the first conversion.

use std::fmt;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigErrorKind, Result};
use crate::field::{Constraints, FieldOptions, FieldType, conversion_error};
use crate::types::NativeType;
use crate::value::Value;

/// An opaque, already-computed hash digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hashed(String);

impl Hashed {
    /// Wrap a rendered digest.
    pub fn new(digest: impl Into<String>) -> Self {
        Self(digest.into())
    }

    /// The rendered digest text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Hashed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The hashing collaborator contract: turn raw text into a rendered digest.
pub trait HashProvider: Send + Sync {
    /// Compute the digest of `raw`. Failures propagate to the caller of the
    /// conversion that triggered them.
    fn digest(&self, raw: &str) -> Result<String>;
}

static HASH_PROVIDER: OnceLock<Arc<dyn HashProvider>> = OnceLock::new();

/// Register the process-wide hash provider.
///
/// The first registration wins; returns `false` if a provider was already
/// registered. Must happen before any hashed-field conversion runs.
pub fn register_hash_provider(provider: Arc<dyn HashProvider>) -> bool {
    HASH_PROVIDER.set(provider).is_ok()
}

/// Get the registered hash provider.
pub fn hash_provider() -> Result<&'static Arc<dyn HashProvider>> {
    HASH_PROVIDER.get().ok_or_else(|| {
        ConfigError {
            kind: ConfigErrorKind::NoHashProvider,
            message: "no hash provider registered".to_string(),
        }
        .into()
    })
}

/// Hashed-value field descriptor.
///
/// `create_instance` digests raw text through the registered provider;
/// `to_model_data` renders the digest back to text.
#[derive(Debug)]
pub struct HashedField {
    constraints: Constraints,
}

impl HashedField {
    /// Create a hashed field with no constraints.
    pub fn new() -> Self {
        Self {
            constraints: Constraints::none(),
        }
    }

    /// Create a hashed field with the given constraints.
    pub fn with_options(options: FieldOptions) -> Result<Self> {
        Ok(Self {
            constraints: options.build(&NativeType::Hashed)?,
        })
    }
}

impl Default for HashedField {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldType for HashedField {
    fn native_type(&self) -> NativeType {
        NativeType::Hashed
    }

    fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    fn create_instance(&self, value: Value) -> Result<Value> {
        match value {
            Value::Text(raw) => {
                let digest = hash_provider()?.digest(&raw)?;
                Ok(Value::Hashed(Hashed::new(digest)))
            }
            other => Err(conversion_error("TEXT", &other)),
        }
    }

    fn to_model_data(&self, value: Value) -> Result<Value> {
        match value {
            Value::Hashed(hashed) => Ok(Value::Text(hashed.to_string())),
            other => Err(conversion_error("HASHED", &other)),
        }
    }
}
