//! Field data: component labels, component arrays and strain snapshots

mod component;
mod field;
mod sink;
mod snapshot;

pub use component::{ComponentLabel, Position};
pub use field::{ComponentField, DerivedScalarField};
pub use sink::FieldSink;
pub use snapshot::{SnapshotProvider, StrainTensorSnapshot};
