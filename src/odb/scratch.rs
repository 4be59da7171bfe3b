//! Scratch database holding derived fields for every step and frame

use serde::{Deserialize, Serialize};

use super::{ResultsDatabase, Step};
use crate::error::{EstrnError, EstrnResult};
use crate::fields::FieldSink;
use crate::options::{EstrnOptions, Milestone, Progress};
use crate::strain::EquivalentStrainComputer;

const MILESTONE_MESSAGE: &str = "Calculating equivalent strain";

/// A frame whose strain snapshot could not be reduced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameFailure {
    pub step: String,
    pub frame_id: usize,
    pub reason: String,
}

/// What one pass over a results database did
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PassReport {
    /// Frames that received a new derived field
    pub frames_computed: usize,
    /// Frames that already held the derived field
    pub frames_reused: usize,
    /// Steps cut short because a frame lacked the source field
    pub steps_incomplete: Vec<String>,
    /// Frames skipped because the strain snapshot was incomplete or misaligned
    pub frames_failed: Vec<FrameFailure>,
}

/// Derived results kept apart from the solver output
///
/// Each source step `S` maps to a scratch step named `Scratch S` whose frames
/// mirror the source frames by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScratchDatabase {
    /// Name of the source database
    pub source: String,
    /// Scratch steps and frames
    pub database: ResultsDatabase,
}

impl ScratchDatabase {
    /// Create an empty scratch database for `source`
    pub fn new(source: &ResultsDatabase) -> Self {
        Self {
            source: source.name.clone(),
            database: ResultsDatabase::new(&format!("{} (scratch)", source.name)),
        }
    }

    /// Build a scratch database and run one pass over `source`
    pub fn from_database(
        source: &ResultsDatabase,
        options: &EstrnOptions,
        progress: &mut dyn Progress,
    ) -> EstrnResult<(Self, PassReport)> {
        let mut scratch = Self::new(source);
        let report = scratch.populate(source, &EquivalentStrainComputer::new(), options, progress)?;
        Ok((scratch, report))
    }

    /// Scratch step name for a source step
    pub fn scratch_step_name(step_name: &str) -> String {
        format!("Scratch {}", step_name)
    }

    /// Scratch step mirroring `step_name`
    pub fn step(&self, step_name: &str) -> EstrnResult<&Step> {
        self.database.step(&Self::scratch_step_name(step_name))
    }

    /// Compute the derived field for every frame that does not have it yet
    ///
    /// A frame without the source field ends the pass over its step. A frame
    /// whose snapshot is incomplete or misaligned is skipped and reported.
    /// Running the pass again only fills in what is missing.
    pub fn populate(
        &mut self,
        source: &ResultsDatabase,
        computer: &EquivalentStrainComputer,
        options: &EstrnOptions,
        progress: &mut dyn Progress,
    ) -> EstrnResult<PassReport> {
        let mut report = PassReport::default();
        let total = source.steps.len();

        for (n, step) in source.steps.iter().enumerate() {
            let scratch_name = Self::scratch_step_name(&step.name);
            let scratch_step = self.database.step_or_insert_with(&scratch_name, || {
                Step::new(&scratch_name)
                    .with_description(&step.description)
                    .with_domain(step.domain)
                    .with_time_period(step.time_period)
            });

            for frame in &step.frames {
                let Some(strain) = frame.field_output(&options.source_field) else {
                    log::warn!(
                        "Step \"{}\" is missing \"{}\" field output",
                        step.name,
                        options.source_field
                    );
                    report.steps_incomplete.push(step.name.clone());
                    break;
                };

                let scratch_frame = scratch_step.mirror_frame(frame);

                if options.copy_displacement {
                    if let Some(displacement) = frame.field_output(&options.displacement_field) {
                        if !scratch_frame.has_field_output(&displacement.name) {
                            scratch_frame.add_field_output(displacement.clone())?;
                        }
                    }
                }

                if scratch_frame.has_field_output(&options.output_field) {
                    report.frames_reused += 1;
                    continue;
                }

                match computer.compute(strain) {
                    Ok(field) => {
                        scratch_frame.put_field(&options.output_field, &options.description, field)?;
                        report.frames_computed += 1;
                        if options.log {
                            log::debug!(
                                "{} frame {}: stored {}",
                                step.name,
                                frame.frame_id,
                                options.output_field
                            );
                        }
                    }
                    Err(
                        e @ (EstrnError::MissingComponent { .. }
                        | EstrnError::ShapeMismatch { .. }
                        | EstrnError::EntityOrderMismatch { .. }),
                    ) => {
                        log::warn!("{} frame {}: skipped, {}", step.name, frame.frame_id, e);
                        report.frames_failed.push(FrameFailure {
                            step: step.name.clone(),
                            frame_id: frame.frame_id,
                            reason: e.to_string(),
                        });
                    }
                    Err(e) => return Err(e),
                }
            }

            progress.milestone(&Milestone {
                message: MILESTONE_MESSAGE.to_string(),
                done: n + 1,
                total,
            });
        }

        Ok(report)
    }
}
