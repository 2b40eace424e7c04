//! List descriptor: element-wise recursive conversion over a sequence.

use std::sync::Arc;

use crate::enums::{EnumDef, EnumField};
use crate::error::Result;
use crate::field::{Constraints, FieldOptions, FieldType, conversion_error};
use crate::model::ModelRegistry;
use crate::relation::{ForeignField, ModelLoader, ModelTarget};
use crate::types::NativeType;
use crate::value::Value;

/// The element specification a list field wraps.
#[derive(Debug)]
pub enum Element {
    /// Plain scalar elements, no conversion applied
    Plain,
    /// Elements converted through a nested descriptor
    Typed(Box<dyn FieldType>),
}

/// List field descriptor.
///
/// Applies the nested element descriptor's conversions element-wise,
/// preserving order and length; a plain element kind passes the sequence
/// through unchanged. A failing element conversion fails the whole
/// operation with the element's own error, leaving no partial result.
#[derive(Debug)]
pub struct ListField {
    element: Element,
    constraints: Constraints,
}

impl ListField {
    /// Create a list of plain scalar elements (identity conversions).
    pub fn plain() -> Self {
        Self {
            element: Element::Plain,
            constraints: Constraints::none(),
        }
    }

    /// Create a list whose elements convert through `field`.
    pub fn of(field: impl FieldType + 'static) -> Self {
        Self {
            element: Element::Typed(Box::new(field)),
            constraints: Constraints::none(),
        }
    }

    /// Create a list of enumeration members.
    pub fn of_enum(def: Arc<EnumDef>) -> Self {
        Self::of(EnumField::new(def))
    }

    /// Create a list of foreign references to the given model.
    pub fn of_model(
        target: impl Into<ModelTarget>,
        registry: &ModelRegistry,
        loader: Arc<dyn ModelLoader>,
    ) -> Result<Self> {
        Ok(Self::of(ForeignField::new(target, registry, loader)?))
    }

    /// Create a list field with the given element kind and constraints.
    pub fn with_options(element: Element, options: FieldOptions) -> Result<Self> {
        Ok(Self {
            element,
            constraints: options.build(&NativeType::List)?,
        })
    }

    fn convert(
        &self,
        value: Value,
        apply: impl Fn(&dyn FieldType, Value) -> Result<Value>,
    ) -> Result<Value> {
        match value {
            Value::List(items) => match &self.element {
                Element::Plain => Ok(Value::List(items)),
                Element::Typed(field) => items
                    .into_iter()
                    .map(|item| apply(field.as_ref(), item))
                    .collect::<Result<Vec<_>>>()
                    .map(Value::List),
            },
            other => Err(conversion_error("LIST", &other)),
        }
    }
}

impl FieldType for ListField {
    fn native_type(&self) -> NativeType {
        NativeType::List
    }

    fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    fn create_instance(&self, value: Value) -> Result<Value> {
        self.convert(value, |field, item| field.create_instance(item))
    }

    fn to_model_data(&self, value: Value) -> Result<Value> {
        self.convert(value, |field, item| field.to_model_data(item))
    }
}
