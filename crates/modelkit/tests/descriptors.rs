//! End-to-end descriptor behavior over stub collaborators.

use std::sync::Arc;

use modelkit::prelude::*;
use modelkit::{HashProvider, Hashed, register_hash_provider};

/// Loader over a fixed set of in-memory instances.
struct MemoryLoader {
    instances: Vec<Instance>,
}

impl ModelLoader for MemoryLoader {
    fn load(&self, model: &ModelDef, key: &str, value: &Value) -> Result<Instance> {
        self.instances
            .iter()
            .find(|inst| inst.model == model.name && inst.get(key) == Some(value))
            .cloned()
            .ok_or_else(|| Error::Custom(format!("{} not found", model.name)))
    }
}

struct IdentityHasher;

impl HashProvider for IdentityHasher {
    fn digest(&self, raw: &str) -> Result<String> {
        Ok(format!("digest:{raw}"))
    }
}

fn setup() -> (ModelRegistry, Arc<MemoryLoader>) {
    let mut registry = ModelRegistry::new();
    registry.register(ModelDef::new("Order", "id"));
    registry.register(ModelDef::new("User", "user_id"));

    let loader = Arc::new(MemoryLoader {
        instances: vec![
            Instance::new("Order").set("id", 7i64).set("total", 100.0),
            Instance::new("Order").set("id", 8i64).set("total", 15.5),
            Instance::new("User")
                .set("user_id", "u-1")
                .set("name", "ada"),
        ],
    });
    (registry, loader)
}

#[test]
fn scalar_round_trip_law() {
    let fields: Vec<Box<dyn FieldType>> = vec![
        Box::new(StringField::new()),
        Box::new(IntField::new()),
        Box::new(FloatField::new()),
        Box::new(BoolField::new()),
        Box::new(DatetimeField::new()),
    ];
    let samples = [
        Value::Text("hello".to_string()),
        Value::Int(42),
        Value::Float(2.5),
        Value::Bool(true),
        Value::Datetime(chrono::Utc::now()),
    ];

    for (field, raw) in fields.iter().zip(samples) {
        let native = field.create_instance(raw.clone()).unwrap();
        assert_eq!(field.to_model_data(native).unwrap(), raw);
    }
}

#[test]
fn foreign_reference_loads_and_extracts() {
    let (registry, loader) = setup();
    let field = ForeignField::new("Order", &registry, loader).unwrap();

    let native = field.create_instance(Value::Int(7)).unwrap();
    let instance = match &native {
        Value::Instance(inst) => inst.clone(),
        other => panic!("expected instance, got {other:?}"),
    };
    assert_eq!(instance.get("total"), Some(&Value::Float(100.0)));

    assert_eq!(field.to_model_data(native).unwrap(), Value::Int(7));
}

#[test]
fn foreign_reference_miss_propagates_loader_error() {
    let (registry, loader) = setup();
    let field = ForeignField::new("Order", &registry, loader).unwrap();
    assert!(field.create_instance(Value::Int(999)).is_err());
}

#[test]
fn list_of_foreign_references_round_trip() {
    let (registry, loader) = setup();
    let field = ListField::of_model("Order", &registry, loader).unwrap();

    let raw = Value::List(vec![Value::Int(8), Value::Int(7)]);
    let native = field.create_instance(raw.clone()).unwrap();

    let items = native.as_list().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(
        items[0].as_instance().unwrap().get("total"),
        Some(&Value::Float(15.5))
    );

    assert_eq!(field.to_model_data(native).unwrap(), raw);
}

#[test]
fn enum_list_round_trip_and_failure() {
    let color = EnumDef::new(
        "Color",
        [
            ("RED", Value::Int(1)),
            ("GREEN", Value::Int(2)),
            ("BLUE", Value::Int(3)),
        ],
    );
    let field = ListField::of_enum(Arc::clone(&color));

    let raw = Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    let native = field.create_instance(raw.clone()).unwrap();
    assert_eq!(field.to_model_data(native).unwrap(), raw);

    let bad = Value::List(vec![Value::Int(1), Value::Int(99)]);
    assert!(field.create_instance(bad).is_err());
}

#[test]
fn hashed_field_uses_registered_provider() {
    register_hash_provider(Arc::new(IdentityHasher));
    let field = HashedField::new();

    let native = field
        .create_instance(Value::Text("secret".to_string()))
        .unwrap();
    assert_eq!(native, Value::Hashed(Hashed::new("digest:secret")));
    assert_eq!(
        field.to_model_data(native).unwrap(),
        Value::Text("digest:secret".to_string())
    );
}

#[test]
fn constraint_invariants_across_variants() {
    // primary forces unique and non_null on every variant
    let uuid = UuidField::with_options(FieldOptions::new().primary(true)).unwrap();
    assert!(uuid.unique() && uuid.non_null());

    let (registry, loader) = setup();
    let foreign = ForeignField::with_options(
        "User",
        &registry,
        loader,
        FieldOptions::new().primary(true),
        None,
    )
    .unwrap();
    assert!(foreign.unique() && foreign.non_null());
    assert_eq!(foreign.model_primary_key(), "user_id");

    // non_null without default fails everywhere
    assert!(IntField::with_options(FieldOptions::new().non_null(true)).is_err());
    assert!(StringField::with_options(FieldOptions::new().non_null(true)).is_err());

    // default type mismatch fails fast
    assert!(FloatField::with_options(FieldOptions::new().default("oops")).is_err());
}

#[test]
fn instance_serializes_for_transport() {
    let order = Instance::new("Order").set("id", 7i64).set("total", 100.0);
    let json = serde_json::to_value(&order).unwrap();
    assert_eq!(json["model"], "Order");

    let back: Instance = serde_json::from_value(json).unwrap();
    assert_eq!(back, order);
}
