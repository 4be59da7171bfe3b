//! Options for the equivalent strain pass and progress reporting

use serde::{Deserialize, Serialize};

use crate::fields::DerivedScalarField;

/// Options for building a scratch database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstrnOptions {
    /// Field output holding nominal strain
    pub source_field: String,
    /// Name of the derived field
    pub output_field: String,
    /// Description stored with the derived field
    pub description: String,
    /// Copy displacement into scratch frames for deformed plots
    pub copy_displacement: bool,
    /// Field output holding displacement
    pub displacement_field: String,
    /// Enable per-frame logging
    pub log: bool,
}

impl Default for EstrnOptions {
    fn default() -> Self {
        Self {
            source_field: "NE".to_string(),
            output_field: DerivedScalarField::DEFAULT_NAME.to_string(),
            description: DerivedScalarField::DEFAULT_DESCRIPTION.to_string(),
            copy_displacement: true,
            displacement_field: "U".to_string(),
            log: false,
        }
    }
}

impl EstrnOptions {
    /// Read the source field from a different field output, e.g. `LE`
    pub fn with_source_field(mut self, name: &str) -> Self {
        self.source_field = name.to_string();
        self
    }

    /// Store the derived field under a different name
    pub fn with_output_field(mut self, name: &str) -> Self {
        self.output_field = name.to_string();
        self
    }

    /// Skip copying displacement
    pub fn without_displacement(mut self) -> Self {
        self.copy_displacement = false;
        self
    }

    /// Enable logging
    pub fn with_logging(mut self) -> Self {
        self.log = true;
        self
    }
}

/// A progress milestone, reported once per step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub message: String,
    pub done: usize,
    pub total: usize,
}

/// Receives milestones while a pass runs
pub trait Progress {
    fn milestone(&mut self, milestone: &Milestone);
}

/// Writes milestones to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl Progress for LogProgress {
    fn milestone(&mut self, milestone: &Milestone) {
        log::info!(
            "{}: {}/{} steps",
            milestone.message,
            milestone.done,
            milestone.total
        );
    }
}

/// Collects milestones, mostly useful in tests
impl Progress for Vec<Milestone> {
    fn milestone(&mut self, milestone: &Milestone) {
        self.push(milestone.clone());
    }
}
