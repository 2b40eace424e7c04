//! Foreign-reference descriptor and the model loader seam.

use std::sync::Arc;

use crate::error::{AttributeError, ConfigError, Result};
use crate::field::{Constraints, FieldOptions, FieldType, conversion_error};
use crate::model::{Instance, ModelDef, ModelRegistry};
use crate::types::NativeType;
use crate::value::Value;

/// The loader collaborator contract.
///
/// `load` fetches the instance of `model` whose `key` field equals `value`.
/// This is the one operation in the descriptor layer that may perform I/O;
/// timeouts, retries, and cancellation belong to the implementation, not to
/// the descriptors that call it.
pub trait ModelLoader: Send + Sync {
    /// Load the matching instance, or fail (typically with a lookup error
    /// of kind `InstanceNotFound`).
    fn load(&self, model: &ModelDef, key: &str, value: &Value) -> Result<Instance>;
}

/// The target of a foreign reference: either a resolved model definition or
/// a model name to be resolved through a registry at construction time.
#[derive(Debug, Clone)]
pub enum ModelTarget {
    /// Already-resolved model definition
    Def(Arc<ModelDef>),
    /// Model name, resolved through the registry
    Name(String),
}

impl From<Arc<ModelDef>> for ModelTarget {
    fn from(def: Arc<ModelDef>) -> Self {
        ModelTarget::Def(def)
    }
}

impl From<&str> for ModelTarget {
    fn from(name: &str) -> Self {
        ModelTarget::Name(name.to_string())
    }
}

impl From<String> for ModelTarget {
    fn from(name: String) -> Self {
        ModelTarget::Name(name)
    }
}

/// Foreign-reference field descriptor, modeling a foreign-key relationship.
///
/// On input, resolves a primary-key value into the loaded related instance
/// through the injected loader; on output, extracts the primary-key value
/// back off the instance.
pub struct ForeignField {
    model: Arc<ModelDef>,
    model_primary_key: String,
    loader: Arc<dyn ModelLoader>,
    constraints: Constraints,
}

impl std::fmt::Debug for ForeignField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForeignField")
            .field("model", &self.model.name)
            .field("model_primary_key", &self.model_primary_key)
            .field("constraints", &self.constraints)
            .finish_non_exhaustive()
    }
}

impl ForeignField {
    /// Create a foreign-reference field with no constraints.
    ///
    /// A [`ModelTarget::Name`] target is resolved through `registry`
    /// eagerly; an unresolved name is a configuration error, fatal at model
    /// definition time. The foreign primary-key field name is taken from the
    /// target model's own metadata.
    pub fn new(
        target: impl Into<ModelTarget>,
        registry: &ModelRegistry,
        loader: Arc<dyn ModelLoader>,
    ) -> Result<Self> {
        Self::with_options(target, registry, loader, FieldOptions::new(), None)
    }

    /// Create a foreign-reference field with constraints and an optional
    /// explicit foreign primary-key field name.
    pub fn with_options(
        target: impl Into<ModelTarget>,
        registry: &ModelRegistry,
        loader: Arc<dyn ModelLoader>,
        options: FieldOptions,
        model_primary_key: Option<String>,
    ) -> Result<Self> {
        let model = match target.into() {
            ModelTarget::Def(def) => def,
            ModelTarget::Name(name) => registry
                .resolve(&name)
                .map_err(|_| ConfigError::unknown_model(&name))?,
        };
        let model_primary_key = model_primary_key.unwrap_or_else(|| model.primary_key.clone());
        let constraints = options.build(&NativeType::Model(Arc::clone(&model)))?;

        Ok(Self {
            model,
            model_primary_key,
            loader,
            constraints,
        })
    }

    /// The target model definition.
    pub fn model(&self) -> &Arc<ModelDef> {
        &self.model
    }

    /// The foreign primary-key field name used for loads and extraction.
    pub fn model_primary_key(&self) -> &str {
        &self.model_primary_key
    }
}

impl FieldType for ForeignField {
    fn native_type(&self) -> NativeType {
        NativeType::Model(Arc::clone(&self.model))
    }

    fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Resolve a primary-key value into the loaded related instance.
    ///
    /// Delegates to the loader collaborator; loader errors propagate
    /// unchanged.
    fn create_instance(&self, value: Value) -> Result<Value> {
        tracing::debug!(
            model = %self.model.name,
            key = %self.model_primary_key,
            "loading foreign reference"
        );
        let instance = self
            .loader
            .load(&self.model, &self.model_primary_key, &value)?;
        Ok(Value::Instance(instance))
    }

    /// Extract the primary-key value off a loaded instance.
    ///
    /// An instance of a different model, or one missing the primary-key
    /// field, is a caller contract violation.
    fn to_model_data(&self, value: Value) -> Result<Value> {
        match value {
            Value::Instance(instance) => {
                if instance.model != self.model.name {
                    return Err(AttributeError {
                        model: instance.model,
                        attribute: self.model_primary_key.clone(),
                    }
                    .into());
                }
                instance.attribute(&self.model_primary_key)
            }
            other => Err(conversion_error("INSTANCE", &other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigErrorKind, Error, LookupError};
    use std::sync::Mutex;

    /// In-memory loader that records the lookups it receives.
    struct StubLoader {
        instances: Vec<Instance>,
        calls: Mutex<Vec<(String, String, Value)>>,
    }

    impl StubLoader {
        fn with(instances: Vec<Instance>) -> Arc<Self> {
            Arc::new(Self {
                instances,
                calls: Mutex::new(Vec::new()),
            })
        }
    }

    impl ModelLoader for StubLoader {
        fn load(&self, model: &ModelDef, key: &str, value: &Value) -> Result<Instance> {
            self.calls
                .lock()
                .unwrap()
                .push((model.name.clone(), key.to_string(), value.clone()));
            self.instances
                .iter()
                .find(|inst| inst.model == model.name && inst.get(key) == Some(value))
                .cloned()
                .ok_or_else(|| {
                    LookupError::instance_not_found(&model.name, key, format!("{:?}", value)).into()
                })
        }
    }

    fn order_registry() -> ModelRegistry {
        let mut registry = ModelRegistry::new();
        registry.register(ModelDef::new("Order", "id"));
        registry
    }

    #[test]
    fn resolves_target_by_name() {
        let registry = order_registry();
        let loader = StubLoader::with(vec![]);
        let field = ForeignField::new("Order", &registry, loader).unwrap();
        assert_eq!(field.model().name, "Order");
        assert_eq!(field.model_primary_key(), "id");
    }

    #[test]
    fn unresolved_name_is_config_error() {
        let registry = ModelRegistry::new();
        let loader = StubLoader::with(vec![]);
        match ForeignField::new("Order", &registry, loader) {
            Err(Error::Config(e)) => assert_eq!(e.kind, ConfigErrorKind::UnknownModel),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn explicit_primary_key_overrides_model_metadata() {
        let registry = order_registry();
        let loader = StubLoader::with(vec![]);
        let field = ForeignField::with_options(
            "Order",
            &registry,
            loader,
            FieldOptions::new(),
            Some("number".to_string()),
        )
        .unwrap();
        assert_eq!(field.model_primary_key(), "number");
    }

    #[test]
    fn create_instance_invokes_loader_with_pk() {
        let registry = order_registry();
        let order = Instance::new("Order").set("id", 7i64).set("total", 10.0);
        let loader = StubLoader::with(vec![order.clone()]);
        let loader_obj: Arc<dyn ModelLoader> = loader.clone();
        let field = ForeignField::new("Order", &registry, loader_obj).unwrap();

        let native = field.create_instance(Value::Int(7)).unwrap();
        assert_eq!(native, Value::Instance(order));

        let calls = loader.calls.lock().unwrap();
        assert_eq!(
            calls.as_slice(),
            &[("Order".to_string(), "id".to_string(), Value::Int(7))]
        );
    }

    #[test]
    fn missing_instance_propagates_loader_error() {
        let registry = order_registry();
        let loader = StubLoader::with(vec![]);
        let field = ForeignField::new("Order", &registry, loader).unwrap();

        match field.create_instance(Value::Int(7)) {
            Err(Error::Lookup(e)) => assert_eq!(e.name, "Order"),
            other => panic!("expected lookup error, got {:?}", other),
        }
    }

    #[test]
    fn to_model_data_extracts_primary_key() {
        let registry = order_registry();
        let loader = StubLoader::with(vec![]);
        let field = ForeignField::new("Order", &registry, loader).unwrap();

        let order = Instance::new("Order").set("id", 7i64);
        assert_eq!(
            field.to_model_data(Value::Instance(order)).unwrap(),
            Value::Int(7)
        );
    }

    #[test]
    fn to_model_data_rejects_wrong_model_and_missing_pk() {
        let registry = order_registry();
        let loader = StubLoader::with(vec![]);
        let field = ForeignField::new("Order", &registry, loader).unwrap();

        let user = Instance::new("User").set("id", 7i64);
        assert!(matches!(
            field.to_model_data(Value::Instance(user)),
            Err(Error::Attribute(_))
        ));

        let bare = Instance::new("Order");
        assert!(matches!(
            field.to_model_data(Value::Instance(bare)),
            Err(Error::Attribute(_))
        ));

        assert!(
            field
                .to_model_data(Value::Int(7))
                .unwrap_err()
                .is_conversion()
        );
    }
}
