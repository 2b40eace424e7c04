//! Model metadata, the model registry, and dynamic instances.
//!
//! This layer only consumes a narrow slice of model metadata: a model's name
//! and the name of its primary-key field. Full model behavior (persistence,
//! field sets, lifecycle) belongs to the surrounding framework.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{AttributeError, LookupError, Result};
use crate::value::Value;

/// Metadata about a model type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDef {
    /// Model name, unique within a registry
    pub name: String,
    /// Name of the primary-key field
    pub primary_key: String,
}

impl ModelDef {
    /// Create a new model definition.
    pub fn new(name: impl Into<String>, primary_key: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            primary_key: primary_key.into(),
        })
    }
}

/// An explicit name-to-model mapping.
///
/// The registry is populated by the framework's model-loading layer before
/// any descriptor referencing it is constructed, and is read-only afterwards.
/// It is passed to descriptor constructors rather than reached through a
/// global, so tests can use isolated stub registries.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    models: BTreeMap<String, Arc<ModelDef>>,
}

impl ModelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model definition under its name.
    ///
    /// Re-registering a name replaces the previous definition.
    pub fn register(&mut self, def: Arc<ModelDef>) {
        tracing::debug!(model = %def.name, "registering model");
        self.models.insert(def.name.clone(), def);
    }

    /// Resolve a model definition by name.
    pub fn resolve(&self, name: &str) -> Result<Arc<ModelDef>> {
        self.models
            .get(name)
            .cloned()
            .ok_or_else(|| LookupError::model_not_registered(name).into())
    }

    /// Get the primary-key field name of a registered model.
    pub fn primary_key_name(&self, name: &str) -> Result<String> {
        Ok(self.resolve(name)?.primary_key.clone())
    }

    /// Number of registered models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// A dynamic record standing in for a loaded model instance.
///
/// Loaders return instances as field-name to value mappings; the descriptor
/// layer only ever reads the primary-key field back off them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    /// Name of the model this instance belongs to
    pub model: String,
    /// Field values by field name
    values: BTreeMap<String, Value>,
}

impl Instance {
    /// Create an empty instance of the named model.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            values: BTreeMap::new(),
        }
    }

    /// Set a field value, chaining.
    #[must_use]
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }

    /// Get a field value by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Read the given attribute, failing if the instance does not carry it.
    pub fn attribute(&self, field: &str) -> Result<Value> {
        self.values.get(field).cloned().ok_or_else(|| {
            AttributeError {
                model: self.model.clone(),
                attribute: field.to_string(),
            }
            .into()
        })
    }
}
