//! Results database model: steps, frames and field outputs
//!
//! The scratch pass reads a [`ResultsDatabase`] and writes derived fields into
//! a separate [`ScratchDatabase`], leaving the solver output untouched.

mod database;
mod field_output;
mod scratch;

pub use database::{Frame, ResultsDatabase, Step, StepDomain};
pub use field_output::FieldOutput;
pub use scratch::{FrameFailure, PassReport, ScratchDatabase};
