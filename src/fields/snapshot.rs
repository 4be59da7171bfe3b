//! Strain snapshots and the provider interface the computer reads from

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ComponentField, ComponentLabel, Position};

/// Source of strain component arrays for one (step, frame) pair
pub trait SnapshotProvider {
    /// Position of every component in this snapshot
    fn position(&self) -> Position;

    /// Aligned array for a component, or `None` when the solver did not write it
    fn component(&self, label: ComponentLabel) -> Option<&ComponentField>;

    /// Capability query used for 2D/3D detection
    fn has_component(&self, label: ComponentLabel) -> bool {
        self.component(label).is_some()
    }
}

/// An in-memory set of strain components for one (step, frame) pair
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrainTensorSnapshot {
    /// Position of the components
    #[serde(default)]
    pub position: Position,
    /// Components keyed by strain label
    pub components: BTreeMap<ComponentLabel, ComponentField>,
}

impl StrainTensorSnapshot {
    /// Create an empty snapshot
    pub fn new(position: Position) -> Self {
        Self {
            position,
            components: BTreeMap::new(),
        }
    }

    /// Add a component from raw values, numbering entities 1..=n
    pub fn with_values(mut self, label: ComponentLabel, values: Vec<f64>) -> Self {
        self.insert(label, ComponentField::from_values(label.abaqus_label(), values));
        self
    }

    /// Add a component field
    pub fn with_component(mut self, label: ComponentLabel, field: ComponentField) -> Self {
        self.insert(label, field);
        self
    }

    /// Insert or replace a component
    pub fn insert(&mut self, label: ComponentLabel, field: ComponentField) {
        self.components.insert(label, field);
    }

    /// Labels present in this snapshot
    pub fn labels(&self) -> impl Iterator<Item = ComponentLabel> + '_ {
        self.components.keys().copied()
    }

    /// Copy the strain components of any provider into an owned snapshot
    pub fn from_provider<P: SnapshotProvider + ?Sized>(provider: &P) -> Self {
        let mut snapshot = Self::new(provider.position());
        for label in ComponentLabel::ALL {
            if let Some(field) = provider.component(label) {
                snapshot.insert(label, field.clone());
            }
        }
        snapshot
    }
}

impl SnapshotProvider for StrainTensorSnapshot {
    fn position(&self) -> Position {
        self.position
    }

    fn component(&self, label: ComponentLabel) -> Option<&ComponentField> {
        self.components.get(&label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_component_reflects_contents() {
        let snapshot = StrainTensorSnapshot::new(Position::Nodal)
            .with_values(ComponentLabel::Epsx, vec![0.1])
            .with_values(ComponentLabel::Epsy, vec![0.2]);
        assert!(snapshot.has_component(ComponentLabel::Epsx));
        assert!(!snapshot.has_component(ComponentLabel::Epsz));
        assert_eq!(snapshot.labels().count(), 2);
    }

    #[test]
    fn from_provider_keeps_only_strain_components() {
        let output = crate::odb::FieldOutput::new("NE", "", Position::Element)
            .with_component(ComponentField::from_values("NE11", vec![0.1]))
            .with_component(ComponentField::from_values("NE33", vec![0.3]))
            .with_component(ComponentField::from_values("MAGNITUDE", vec![1.0]));
        let snapshot = StrainTensorSnapshot::from_provider(&output);
        assert_eq!(snapshot.position, Position::Element);
        assert_eq!(
            snapshot.labels().collect::<Vec<_>>(),
            vec![ComponentLabel::Epsx, ComponentLabel::Epsz]
        );
    }
}
