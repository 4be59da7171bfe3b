//! Summaries of derived fields

use serde::{Deserialize, Serialize};

use crate::error::{EstrnError, EstrnResult};
use crate::fields::DerivedScalarField;

/// Extremes and mean of a derived scalar field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSummary {
    /// Minimum value
    pub min: f64,
    /// Entity holding the minimum
    pub min_entity: u64,
    /// Maximum value
    pub max: f64,
    /// Entity holding the maximum
    pub max_entity: u64,
    /// Arithmetic mean over all entities
    pub mean: f64,
    /// Number of entities
    pub count: usize,
}

impl FieldSummary {
    /// Summarize a field; fails on an empty field
    pub fn from_field(field: &DerivedScalarField) -> EstrnResult<Self> {
        let mut iter = field.iter();
        let (first_entity, first_value) = iter.next().ok_or_else(|| {
            EstrnError::InvalidInput(format!("field '{}' has no values", field.name))
        })?;

        let mut summary = Self {
            min: first_value,
            min_entity: first_entity,
            max: first_value,
            max_entity: first_entity,
            mean: 0.0,
            count: field.len(),
        };
        let mut sum = first_value;

        for (entity, value) in iter {
            if value < summary.min {
                summary.min = value;
                summary.min_entity = entity;
            }
            if value > summary.max {
                summary.max = value;
                summary.max_entity = entity;
            }
            sum += value;
        }
        summary.mean = sum / summary.count as f64;

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Position;
    use approx::assert_relative_eq;

    #[test]
    fn extremes_and_mean() {
        let field = DerivedScalarField {
            name: "ESTRN".to_string(),
            description: String::new(),
            position: Position::Nodal,
            entities: vec![4, 5, 6],
            values: vec![0.2, 0.1, 0.6],
        };
        let s = FieldSummary::from_field(&field).unwrap();
        assert_eq!((s.min, s.min_entity), (0.1, 5));
        assert_eq!((s.max, s.max_entity), (0.6, 6));
        assert_relative_eq!(s.mean, 0.3, max_relative = 1e-12);
        assert_eq!(s.count, 3);
    }

    #[test]
    fn empty_field_is_rejected() {
        let field = DerivedScalarField {
            name: "ESTRN".to_string(),
            description: String::new(),
            position: Position::Nodal,
            entities: vec![],
            values: vec![],
        };
        assert!(matches!(
            FieldSummary::from_field(&field),
            Err(EstrnError::InvalidInput(_))
        ));
    }
}
