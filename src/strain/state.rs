//! Strain state at a single point

use serde::{Deserialize, Serialize};

/// Equivalent strain from the six engineering strain components at one point
///
/// Uses the same operation order as [`super::equivalent_strain_array`], so a
/// point evaluated here matches the array result bit for bit.
pub fn equivalent_strain(epsx: f64, epsy: f64, epsz: f64, gmxy: f64, gmxz: f64, gmyz: f64) -> f64 {
    let mean = (epsx + epsy + epsz) / 3.0;
    let dev = ((epsx - mean).powi(2) + (epsy - mean).powi(2) + (epsz - mean).powi(2)) * 0.5;
    let shear = (gmxy.powi(2) + gmxz.powi(2) + gmyz.powi(2)) / 4.0;

    let radicand = (dev + shear) / 3.0;
    let radicand = if radicand <= 0.0 { 0.0 } else { radicand };
    radicand.sqrt() * 2.0
}

/// Engineering strain components at a point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrainState {
    /// Normal strain in X direction
    pub epsx: f64,
    /// Normal strain in Y direction
    pub epsy: f64,
    /// Normal strain in Z direction
    pub epsz: f64,
    /// Engineering shear strain XY
    pub gmxy: f64,
    /// Engineering shear strain XZ
    pub gmxz: f64,
    /// Engineering shear strain YZ
    pub gmyz: f64,
    /// Solidworks equivalent strain
    pub equivalent: f64,
}

impl StrainState {
    /// Create from all six components
    pub fn from_components(epsx: f64, epsy: f64, epsz: f64, gmxy: f64, gmxz: f64, gmyz: f64) -> Self {
        Self {
            epsx,
            epsy,
            epsz,
            gmxy,
            gmxz,
            gmyz,
            equivalent: equivalent_strain(epsx, epsy, epsz, gmxy, gmxz, gmyz),
        }
    }

    /// Create from array [EPSX, EPSY, EPSZ, GMXY, GMXZ, GMYZ]
    pub fn from_array(arr: [f64; 6]) -> Self {
        Self::from_components(arr[0], arr[1], arr[2], arr[3], arr[4], arr[5])
    }

    /// In-plane state; out-of-plane components are zero
    pub fn planar(epsx: f64, epsy: f64, gmxy: f64) -> Self {
        Self::from_components(epsx, epsy, 0.0, gmxy, 0.0, 0.0)
    }

    /// Mean normal (volumetric) strain
    pub fn mean_normal(&self) -> f64 {
        (self.epsx + self.epsy + self.epsz) / 3.0
    }
}
