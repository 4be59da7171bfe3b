//! Array-wise equivalent strain reduction over a strain snapshot

use serde::{Deserialize, Serialize};

use crate::error::{EstrnError, EstrnResult};
use crate::fields::{ComponentField, ComponentLabel, DerivedScalarField, SnapshotProvider};
use crate::math::{self, Array};

/// Whether a snapshot carries the out-of-plane components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimensionality {
    /// In-plane components only; EPSZ, GMXZ and GMYZ are taken as zero
    Planar,
    /// All six independent components
    Full,
}

impl Dimensionality {
    /// Full when the out-of-plane normal strain is present, planar otherwise
    pub fn detect<S: SnapshotProvider + ?Sized>(snapshot: &S) -> Self {
        if snapshot.has_component(ComponentLabel::Epsz) {
            Self::Full
        } else {
            Self::Planar
        }
    }
}

/// Computes the Solidworks equivalent strain field from nominal strain components
///
/// For engineering shear strains the reduction per entity is
///
/// ```text
/// mean  = (EPSX + EPSY + EPSZ) / 3
/// dev   = 0.5 * ((EPSX - mean)^2 + (EPSY - mean)^2 + (EPSZ - mean)^2)
/// shear = (GMXY^2 + GMXZ^2 + GMYZ^2) / 4
/// ESTRN = 2 * sqrt((dev + shear) / 3)
/// ```
///
/// The computer holds no state and never logs; it either returns a complete
/// field or an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EquivalentStrainComputer;

impl EquivalentStrainComputer {
    pub fn new() -> Self {
        Self
    }

    /// Compute `ESTRN` for one snapshot
    ///
    /// # Errors
    /// * `MissingComponent` if EPSX, EPSY or GMXY is absent, or if EPSZ is
    ///   present without both GMXZ and GMYZ
    /// * `ShapeMismatch` / `EntityOrderMismatch` if the components are not aligned
    pub fn compute<S: SnapshotProvider + ?Sized>(
        &self,
        snapshot: &S,
    ) -> EstrnResult<DerivedScalarField> {
        let epsx = required(snapshot, ComponentLabel::Epsx)?;
        let epsy = required(snapshot, ComponentLabel::Epsy)?;
        let gmxy = required(snapshot, ComponentLabel::Gmxy)?;

        let out_of_plane = match Dimensionality::detect(snapshot) {
            Dimensionality::Full => Some((
                required(snapshot, ComponentLabel::Epsz)?,
                required(snapshot, ComponentLabel::Gmxz)?,
                required(snapshot, ComponentLabel::Gmyz)?,
            )),
            Dimensionality::Planar => None,
        };

        check_consistent(epsx, ComponentLabel::Epsx)?;
        check_aligned(epsx, epsy, ComponentLabel::Epsy)?;
        check_aligned(epsx, gmxy, ComponentLabel::Gmxy)?;
        if let Some((epsz, gmxz, gmyz)) = out_of_plane {
            check_aligned(epsx, epsz, ComponentLabel::Epsz)?;
            check_aligned(epsx, gmxz, ComponentLabel::Gmxz)?;
            check_aligned(epsx, gmyz, ComponentLabel::Gmyz)?;
        }

        let x = math::from_slice(&epsx.values);
        let y = math::from_slice(&epsy.values);
        let xy = math::from_slice(&gmxy.values);
        let (z, xz, yz) = match out_of_plane {
            Some((epsz, gmxz, gmyz)) => (
                math::from_slice(&epsz.values),
                math::from_slice(&gmxz.values),
                math::from_slice(&gmyz.values),
            ),
            None => (math::zeros_like(&x), math::zeros_like(&x), math::zeros_like(&x)),
        };

        let result = equivalent_strain_array(&x, &y, &z, &xy, &xz, &yz);

        Ok(DerivedScalarField {
            name: DerivedScalarField::DEFAULT_NAME.to_string(),
            description: DerivedScalarField::DEFAULT_DESCRIPTION.to_string(),
            position: snapshot.position(),
            entities: epsx.entities.clone(),
            values: result.iter().copied().collect(),
        })
    }
}

/// The equivalent strain reduction over already aligned arrays
pub fn equivalent_strain_array(
    epsx: &Array,
    epsy: &Array,
    epsz: &Array,
    gmxy: &Array,
    gmxz: &Array,
    gmyz: &Array,
) -> Array {
    let mean = (epsx + epsy + epsz) / 3.0;
    let dev = (math::power(&(epsx - &mean), 2)
        + math::power(&(epsy - &mean), 2)
        + math::power(&(epsz - &mean), 2))
        * 0.5;
    let shear = (math::power(gmxy, 2) + math::power(gmxz, 2) + math::power(gmyz, 2)) / 4.0;

    let radicand = math::clamp_non_negative(&((dev + shear) / 3.0));
    math::sqrt(&radicand) * 2.0
}

fn required<S: SnapshotProvider + ?Sized>(
    snapshot: &S,
    label: ComponentLabel,
) -> EstrnResult<&ComponentField> {
    snapshot
        .component(label)
        .ok_or(EstrnError::MissingComponent { label })
}

fn check_consistent(field: &ComponentField, label: ComponentLabel) -> EstrnResult<()> {
    if field.entities.len() != field.values.len() {
        return Err(EstrnError::ShapeMismatch {
            label,
            expected: field.entities.len(),
            found: field.values.len(),
        });
    }
    Ok(())
}

fn check_aligned(
    reference: &ComponentField,
    other: &ComponentField,
    label: ComponentLabel,
) -> EstrnResult<()> {
    check_consistent(other, label)?;
    if other.values.len() != reference.values.len() {
        return Err(EstrnError::ShapeMismatch {
            label,
            expected: reference.values.len(),
            found: other.values.len(),
        });
    }
    if other.entities.len() != reference.entities.len() {
        return Err(EstrnError::ShapeMismatch {
            label,
            expected: reference.entities.len(),
            found: other.entities.len(),
        });
    }
    if let Some(index) = reference
        .entities
        .iter()
        .zip(&other.entities)
        .position(|(a, b)| a != b)
    {
        return Err(EstrnError::EntityOrderMismatch { label, index });
    }
    Ok(())
}
