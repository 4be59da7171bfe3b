//! Component arrays and the derived scalar field

use serde::{Deserialize, Serialize};

use super::{ComponentLabel, Position};
use crate::error::{EstrnError, EstrnResult};

/// A named scalar array indexed by entity (node or element) labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawComponentField")]
pub struct ComponentField {
    /// Component label, e.g. `NE11` or `U2`
    pub label: String,
    /// Entity labels, aligned 1:1 with `values`
    pub entities: Vec<u64>,
    /// Component values
    pub values: Vec<f64>,
}

#[derive(Deserialize)]
struct RawComponentField {
    label: String,
    entities: Vec<u64>,
    values: Vec<f64>,
}

impl TryFrom<RawComponentField> for ComponentField {
    type Error = EstrnError;

    fn try_from(raw: RawComponentField) -> EstrnResult<Self> {
        Self::new(&raw.label, raw.entities, raw.values)
    }
}

impl ComponentField {
    /// Create a component, checking that entities and values line up
    pub fn new(label: &str, entities: Vec<u64>, values: Vec<f64>) -> EstrnResult<Self> {
        if entities.len() != values.len() {
            return Err(EstrnError::InvalidInput(format!(
                "component '{}' has {} entities but {} values",
                label,
                entities.len(),
                values.len()
            )));
        }
        Ok(Self {
            label: label.to_string(),
            entities,
            values,
        })
    }

    /// Create a component with entities numbered 1..=n
    pub fn from_values(label: &str, values: Vec<f64>) -> Self {
        Self {
            label: label.to_string(),
            entities: (1..=values.len() as u64).collect(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Strain vocabulary label, if this component is a strain component
    pub fn strain_label(&self) -> Option<ComponentLabel> {
        ComponentLabel::parse(&self.label)
    }

    /// Value at an entity label
    pub fn value(&self, entity: u64) -> Option<f64> {
        self.entities
            .iter()
            .position(|&e| e == entity)
            .and_then(|i| self.values.get(i).copied())
    }
}

/// The scalar field produced from one strain snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedScalarField {
    /// Field name, `ESTRN` unless renamed
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Position of the source snapshot
    pub position: Position,
    /// Entity labels, same order as the source snapshot
    pub entities: Vec<u64>,
    /// Derived values
    pub values: Vec<f64>,
}

impl DerivedScalarField {
    pub const DEFAULT_NAME: &'static str = "ESTRN";
    pub const DEFAULT_DESCRIPTION: &'static str = "Solidworks equivalent strain";

    /// Rename the field
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Replace the description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at an entity label
    pub fn value(&self, entity: u64) -> Option<f64> {
        self.entities
            .iter()
            .position(|&e| e == entity)
            .and_then(|i| self.values.get(i).copied())
    }

    /// Iterate over `(entity, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.entities.iter().copied().zip(self.values.iter().copied())
    }

    /// View the field as a single-component array labelled with its name
    pub fn to_component(&self) -> ComponentField {
        ComponentField {
            label: self.name.clone(),
            entities: self.entities.clone(),
            values: self.values.clone(),
        }
    }
}
