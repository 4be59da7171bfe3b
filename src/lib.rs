//! Equivalent strain post-processing for finite element results
//!
//! Reduces a nominal (engineering) strain field output to the scalar
//! Solidworks equivalent strain `ESTRN` and stores it in a scratch database
//! for contour plotting:
//! - Array-wise reduction with 2D/3D detection from the components present
//! - Results database model (steps, frames, field outputs)
//! - Scratch pass over every step and frame with progress milestones
//! - JSON and CalculiX `.dat` readers
//!
//! ## Example
//! ```rust
//! use equivalent_strain::prelude::*;
//!
//! let snapshot = StrainTensorSnapshot::new(Position::Nodal)
//!     .with_values(ComponentLabel::Epsx, vec![0.01])
//!     .with_values(ComponentLabel::Epsy, vec![-0.005])
//!     .with_values(ComponentLabel::Epsz, vec![-0.005])
//!     .with_values(ComponentLabel::Gmxy, vec![0.02])
//!     .with_values(ComponentLabel::Gmxz, vec![0.0])
//!     .with_values(ComponentLabel::Gmyz, vec![0.0]);
//!
//! let estrn = EquivalentStrainComputer::new().compute(&snapshot).unwrap();
//! assert!((estrn.values[0] - 0.01527).abs() < 1e-5);
//! ```

pub mod api;
pub mod error;
pub mod fields;
pub mod io;
pub mod math;
pub mod odb;
pub mod options;
pub mod results;
pub mod strain;

// Re-export common types
pub mod prelude {
    pub use crate::error::{EstrnError, EstrnResult};
    pub use crate::fields::{
        ComponentField, ComponentLabel, DerivedScalarField, FieldSink, Position, SnapshotProvider,
        StrainTensorSnapshot,
    };
    pub use crate::io::{read_calculix_dat, read_calculix_dat_file, ShearConvention};
    pub use crate::odb::{FieldOutput, Frame, PassReport, ResultsDatabase, ScratchDatabase, Step, StepDomain};
    pub use crate::options::{EstrnOptions, LogProgress, Milestone, Progress};
    pub use crate::results::FieldSummary;
    pub use crate::strain::{Dimensionality, EquivalentStrainComputer, StrainState};
}

#[cfg(feature = "wasm")]
pub mod wasm;
