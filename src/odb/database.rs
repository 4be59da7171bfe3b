//! Steps and frames of a results database

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::FieldOutput;
use crate::error::{EstrnError, EstrnResult};
use crate::fields::{DerivedScalarField, FieldSink};

/// Domain of an analysis step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StepDomain {
    #[default]
    Time,
    Frequency,
    Modal,
    ArcLength,
}

/// One output frame (increment) of a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Frame id, unique within its step
    pub frame_id: usize,
    /// Solver increment number
    pub increment_number: usize,
    /// Step time, frequency or arc length
    pub frame_value: f64,
    #[serde(default)]
    pub description: String,
    /// Field outputs by name
    #[serde(default)]
    pub field_outputs: BTreeMap<String, FieldOutput>,
}

impl Frame {
    /// Add a field output
    pub fn add_field_output(&mut self, field: FieldOutput) -> EstrnResult<()> {
        if self.field_outputs.contains_key(&field.name) {
            return Err(EstrnError::DuplicateName(field.name));
        }
        self.field_outputs.insert(field.name.clone(), field);
        Ok(())
    }

    /// Get a field output by name
    pub fn field_output(&self, name: &str) -> Option<&FieldOutput> {
        self.field_outputs.get(name)
    }

    pub fn has_field_output(&self, name: &str) -> bool {
        self.field_outputs.contains_key(name)
    }
}

impl FieldSink for Frame {
    fn put_field(
        &mut self,
        name: &str,
        description: &str,
        field: DerivedScalarField,
    ) -> EstrnResult<()> {
        let field = field.with_name(name).with_description(description);
        self.add_field_output(FieldOutput::from_derived(&field))
    }
}

/// An analysis step and its frames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub domain: StepDomain,
    #[serde(default)]
    pub time_period: f64,
    #[serde(default)]
    pub frames: Vec<Frame>,
}

impl Step {
    /// Create an empty time-domain step
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
            domain: StepDomain::Time,
            time_period: 0.0,
            frames: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_domain(mut self, domain: StepDomain) -> Self {
        self.domain = domain;
        self
    }

    pub fn with_time_period(mut self, time_period: f64) -> Self {
        self.time_period = time_period;
        self
    }

    /// Append a frame with the next free id
    pub fn add_frame(&mut self, increment_number: usize, frame_value: f64, description: &str) -> &mut Frame {
        let frame_id = self.frames.iter().map(|f| f.frame_id + 1).max().unwrap_or(0);
        self.push_frame(frame_id, increment_number, frame_value, description)
    }

    /// Frame carrying the same id as `source`, appended without field outputs if absent
    pub fn mirror_frame(&mut self, source: &Frame) -> &mut Frame {
        match self.frames.iter().position(|f| f.frame_id == source.frame_id) {
            Some(index) => &mut self.frames[index],
            None => self.push_frame(
                source.frame_id,
                source.increment_number,
                source.frame_value,
                &source.description,
            ),
        }
    }

    /// Frame by id
    pub fn frame(&self, frame_id: usize) -> Option<&Frame> {
        self.frames.iter().find(|f| f.frame_id == frame_id)
    }

    fn push_frame(
        &mut self,
        frame_id: usize,
        increment_number: usize,
        frame_value: f64,
        description: &str,
    ) -> &mut Frame {
        let index = self.frames.len();
        self.frames.push(Frame {
            frame_id,
            increment_number,
            frame_value,
            description: description.to_string(),
            field_outputs: BTreeMap::new(),
        });
        &mut self.frames[index]
    }
}

/// Solver output organised as ordered steps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultsDatabase {
    pub name: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl ResultsDatabase {
    /// Create an empty database
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            steps: Vec::new(),
        }
    }

    /// Add a step, rejecting duplicate names
    pub fn add_step(&mut self, step: Step) -> EstrnResult<&mut Step> {
        if self.contains_step(&step.name) {
            return Err(EstrnError::DuplicateName(step.name));
        }
        let index = self.steps.len();
        self.steps.push(step);
        Ok(&mut self.steps[index])
    }

    /// Get a step by name
    pub fn step(&self, name: &str) -> EstrnResult<&Step> {
        self.steps
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| EstrnError::StepNotFound(name.to_string()))
    }

    pub fn contains_step(&self, name: &str) -> bool {
        self.steps.iter().any(|s| s.name == name)
    }

    /// Existing step by name, or a new one built by `make`
    pub fn step_or_insert_with(&mut self, name: &str, make: impl FnOnce() -> Step) -> &mut Step {
        let index = match self.steps.iter().position(|s| s.name == name) {
            Some(index) => index,
            None => {
                self.steps.push(make());
                self.steps.len() - 1
            }
        };
        &mut self.steps[index]
    }

    /// Total number of frames over all steps
    pub fn frame_count(&self) -> usize {
        self.steps.iter().map(|s| s.frames.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{ComponentField, Position};

    #[test]
    fn frame_ids_follow_insertion_order() {
        let mut step = Step::new("Load");
        step.add_frame(0, 0.0, "Increment 0");
        let frame = step.add_frame(1, 1.0, "Increment 1");
        assert_eq!(frame.frame_id, 1);
        assert_eq!(step.frame(1).map(|f| f.increment_number), Some(1));
    }

    #[test]
    fn frames_keep_sparse_ids() {
        let mut source = Step::new("Load");
        source.frames.push(Frame {
            frame_id: 4,
            increment_number: 2,
            frame_value: 0.5,
            description: "Increment 2".to_string(),
            field_outputs: BTreeMap::new(),
        });
        assert_eq!(source.add_frame(3, 1.0, "").frame_id, 5);
        assert!(source.frame(0).is_none());

        let mut mirror = Step::new("Scratch Load");
        mirror.mirror_frame(&source.frames[1]);
        mirror.mirror_frame(&source.frames[0]);
        mirror.mirror_frame(&source.frames[1]);
        assert_eq!(mirror.frames.iter().map(|f| f.frame_id).collect::<Vec<_>>(), vec![5, 4]);
        assert_eq!(mirror.frame(4).map(|f| f.description.as_str()), Some("Increment 2"));
    }

    #[test]
    fn duplicate_step_is_rejected() {
        let mut db = ResultsDatabase::new("job");
        db.add_step(Step::new("Load")).unwrap();
        assert!(matches!(
            db.add_step(Step::new("Load")),
            Err(EstrnError::DuplicateName(_))
        ));
        assert!(matches!(db.step("Unload"), Err(EstrnError::StepNotFound(_))));
    }

    #[test]
    fn sink_refuses_to_overwrite() {
        let mut step = Step::new("Load");
        let frame = step.add_frame(1, 1.0, "");
        let field = DerivedScalarField {
            name: "ESTRN".to_string(),
            description: String::new(),
            position: Position::Nodal,
            entities: vec![1],
            values: vec![0.5],
        };
        frame.put_field("ESTRN", "Equivalent strain", field.clone()).unwrap();
        assert!(frame.put_field("ESTRN", "Equivalent strain", field).is_err());

        let stored = frame.field_output("ESTRN").unwrap();
        assert_eq!(stored.description, "Equivalent strain");
        assert_eq!(stored.components, vec![ComponentField::from_values("ESTRN", vec![0.5])]);
    }
}
