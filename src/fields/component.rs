//! Strain component vocabulary and output positions

use serde::{Deserialize, Serialize};
use std::fmt;

/// One independent component of a symmetric strain tensor
///
/// Shear components follow the engineering convention (total angular change).
/// Each label also accepts the Abaqus `NEij` spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComponentLabel {
    /// Normal strain along axis 1
    #[serde(alias = "NE11")]
    Epsx,
    /// Normal strain along axis 2
    #[serde(alias = "NE22")]
    Epsy,
    /// Normal strain along axis 3 (out-of-plane)
    #[serde(alias = "NE33")]
    Epsz,
    /// Engineering shear strain in the 1-2 plane
    #[serde(alias = "NE12")]
    Gmxy,
    /// Engineering shear strain in the 1-3 plane
    #[serde(alias = "NE13")]
    Gmxz,
    /// Engineering shear strain in the 2-3 plane
    #[serde(alias = "NE23")]
    Gmyz,
}

impl ComponentLabel {
    /// All six labels in tensor order
    pub const ALL: [ComponentLabel; 6] = [
        Self::Epsx,
        Self::Epsy,
        Self::Epsz,
        Self::Gmxy,
        Self::Gmxz,
        Self::Gmyz,
    ];

    /// Canonical label, e.g. `EPSX`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Epsx => "EPSX",
            Self::Epsy => "EPSY",
            Self::Epsz => "EPSZ",
            Self::Gmxy => "GMXY",
            Self::Gmxz => "GMXZ",
            Self::Gmyz => "GMYZ",
        }
    }

    /// Abaqus nominal strain label, e.g. `NE11`
    pub fn abaqus_label(&self) -> &'static str {
        match self {
            Self::Epsx => "NE11",
            Self::Epsy => "NE22",
            Self::Epsz => "NE33",
            Self::Gmxy => "NE12",
            Self::Gmxz => "NE13",
            Self::Gmyz => "NE23",
        }
    }

    /// Parse either spelling, ignoring ASCII case
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|c| {
            label.eq_ignore_ascii_case(c.as_str()) || label.eq_ignore_ascii_case(c.abaqus_label())
        })
    }
}

impl fmt::Display for ComponentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.as_str(), self.abaqus_label())
    }
}

/// Where the values of a field live on the mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    #[default]
    Nodal,
    /// Element centroid
    Element,
    IntegrationPoint,
}
