//! Field outputs stored on a frame

use serde::{Deserialize, Serialize};

use crate::fields::{
    ComponentField, ComponentLabel, DerivedScalarField, Position, SnapshotProvider,
};

/// A named field output, e.g. `NE` (nominal strain) or `U` (displacement)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOutput {
    /// Field name
    pub name: String,
    /// Description of the field
    #[serde(default)]
    pub description: String,
    /// Where the values live
    #[serde(default)]
    pub position: Position,
    /// Component arrays, all sharing the same entity order
    pub components: Vec<ComponentField>,
}

impl FieldOutput {
    /// Create an empty field output
    pub fn new(name: &str, description: &str, position: Position) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            position,
            components: Vec::new(),
        }
    }

    /// Add a component array
    pub fn with_component(mut self, component: ComponentField) -> Self {
        self.components.push(component);
        self
    }

    /// Wrap a derived scalar field as a single-component field output
    pub fn from_derived(field: &DerivedScalarField) -> Self {
        Self::new(&field.name, &field.description, field.position).with_component(field.to_component())
    }

    /// First component as a scalar field, e.g. a stored `ESTRN`
    pub fn to_scalar_field(&self) -> Option<DerivedScalarField> {
        self.components.first().map(|c| DerivedScalarField {
            name: self.name.clone(),
            description: self.description.clone(),
            position: self.position,
            entities: c.entities.clone(),
            values: c.values.clone(),
        })
    }

    /// Component labels in storage order
    pub fn component_labels(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.label.as_str()).collect()
    }

    /// Component by its stored label, ignoring ASCII case
    pub fn get(&self, label: &str) -> Option<&ComponentField> {
        self.components
            .iter()
            .find(|c| c.label.eq_ignore_ascii_case(label))
    }

    /// Number of entities
    pub fn len(&self) -> usize {
        self.components.first().map_or(0, ComponentField::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SnapshotProvider for FieldOutput {
    fn position(&self) -> Position {
        self.position
    }

    fn component(&self, label: ComponentLabel) -> Option<&ComponentField> {
        self.components
            .iter()
            .find(|c| c.strain_label() == Some(label))
    }
}
