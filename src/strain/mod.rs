//! Equivalent strain computation

mod computer;
mod state;

pub use computer::{equivalent_strain_array, Dimensionality, EquivalentStrainComputer};
pub use state::{equivalent_strain, StrainState};
