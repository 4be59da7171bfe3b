//! CalculiX `.dat` reader
//!
//! Reads `*NODE PRINT` displacement blocks and `*EL PRINT` strain blocks:
//!
//! ```text
//!  displacements (vx,vy,vz) for set NALL and time  0.1000000E+01
//!
//!          1  1.000000E-03  0.000000E+00  0.000000E+00
//!
//!  strains (elem, integ.pnt.,exx,eyy,ezz,exy,exz,eyz) for set EALL and time  0.1000000E+01
//!
//!          1   1  1.0E-03 -3.0E-04 -3.0E-04  0.0E+00  0.0E+00  0.0E+00
//! ```
//!
//! Blocks that share a time value become one frame of a single step. Strain
//! values land in an `NE` field output at integration points, labelled
//! `element * 1000 + point`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{EstrnError, EstrnResult};
use crate::fields::{ComponentField, ComponentLabel, Position};
use crate::odb::{FieldOutput, ResultsDatabase, Step};

/// How shear strains are written in the source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShearConvention {
    /// Tensor shear strain (half the angular change), as CalculiX prints it
    #[default]
    Tensor,
    /// Engineering shear strain
    Engineering,
}

impl ShearConvention {
    fn engineering_factor(&self) -> f64 {
        match self {
            Self::Tensor => 2.0,
            Self::Engineering => 1.0,
        }
    }
}

/// Entity label for an integration point
pub(crate) fn integration_point_label(element: u64, point: u64) -> u64 {
    element * 1000 + point
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Displacement,
    Strain,
    Other,
}

#[derive(Debug, Default)]
struct FrameData {
    time: f64,
    nodes: Vec<u64>,
    seen_nodes: HashSet<u64>,
    displacement: [Vec<f64>; 3],
    points: Vec<u64>,
    seen_points: HashSet<u64>,
    strain: [Vec<f64>; 6],
}

/// Parse the text of a CalculiX `.dat` file
pub fn read_calculix_dat(
    content: &str,
    name: &str,
    shear: ShearConvention,
) -> EstrnResult<ResultsDatabase> {
    let mut frames: Vec<FrameData> = Vec::new();
    let mut block = Block::Other;
    let mut current = 0;

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if trimmed.starts_with(|c: char| c.is_ascii_alphabetic()) {
            let header = trimmed.to_lowercase();
            block = if header.starts_with("displacements") && header.contains("vx") {
                Block::Displacement
            } else if header.starts_with("strains") && header.contains("exx") {
                Block::Strain
            } else {
                Block::Other
            };
            if block != Block::Other {
                let time = header_time(&header, line_no)?;
                current = match frames.iter().position(|f| f.time == time) {
                    Some(i) => i,
                    None => {
                        frames.push(FrameData {
                            time,
                            ..FrameData::default()
                        });
                        frames.len() - 1
                    }
                };
                log::debug!("line {}: {:?} block at time {}", line_no, block, time);
            }
            continue;
        }

        let frame = match block {
            Block::Other => continue,
            _ => &mut frames[current],
        };
        let parts: Vec<&str> = trimmed.split_whitespace().collect();

        match block {
            Block::Displacement => {
                let (node, values) = parse_row::<3>(&parts, 1, line_no)?;
                if !frame.seen_nodes.insert(node[0]) {
                    continue;
                }
                frame.nodes.push(node[0]);
                for (column, value) in frame.displacement.iter_mut().zip(values) {
                    column.push(value);
                }
            }
            Block::Strain => {
                let (ids, values) = parse_row::<6>(&parts, 2, line_no)?;
                let point = integration_point_label(ids[0], ids[1]);
                if !frame.seen_points.insert(point) {
                    continue;
                }
                frame.points.push(point);
                // exx eyy ezz exy exz eyz
                for (i, (column, value)) in frame.strain.iter_mut().zip(values).enumerate() {
                    let factor = if i >= 3 { shear.engineering_factor() } else { 1.0 };
                    column.push(value * factor);
                }
            }
            Block::Other => {}
        }
    }

    build_database(name, frames)
}

/// Read a CalculiX `.dat` file; the database is named after the file stem
pub fn read_calculix_dat_file<P: AsRef<Path>>(
    path: P,
    shear: ShearConvention,
) -> EstrnResult<ResultsDatabase> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "calculix".to_string());
    read_calculix_dat(&content, &name, shear)
}

fn header_time(header: &str, line_no: usize) -> EstrnResult<f64> {
    match header.rsplit_once("time") {
        Some((_, time)) => time.trim().parse::<f64>().map_err(|e| EstrnError::Parse {
            line: line_no,
            message: format!("invalid time '{}': {}", time.trim(), e),
        }),
        None => Ok(0.0),
    }
}

fn parse_row<const N: usize>(
    parts: &[&str],
    id_columns: usize,
    line_no: usize,
) -> EstrnResult<(Vec<u64>, [f64; N])> {
    if parts.len() < id_columns + N {
        return Err(EstrnError::Parse {
            line: line_no,
            message: format!("expected {} columns, found {}", id_columns + N, parts.len()),
        });
    }

    let ids = parts[..id_columns]
        .iter()
        .map(|p| {
            p.parse::<u64>().map_err(|e| EstrnError::Parse {
                line: line_no,
                message: format!("invalid label '{}': {}", p, e),
            })
        })
        .collect::<EstrnResult<Vec<u64>>>()?;

    let mut values = [0.0; N];
    for (value, part) in values.iter_mut().zip(&parts[id_columns..id_columns + N]) {
        *value = part.parse::<f64>().map_err(|e| EstrnError::Parse {
            line: line_no,
            message: format!("invalid value '{}': {}", part, e),
        })?;
    }
    Ok((ids, values))
}

fn build_database(name: &str, frames: Vec<FrameData>) -> EstrnResult<ResultsDatabase> {
    let mut db = ResultsDatabase::new(name);
    let time_period = frames.iter().map(|f| f.time).fold(0.0, f64::max);
    let step = db.add_step(
        Step::new("Step-1")
            .with_description("CalculiX results")
            .with_time_period(time_period),
    )?;

    for (i, data) in frames.into_iter().enumerate() {
        let frame = step.add_frame(i + 1, data.time, &format!("Time {}", data.time));

        if !data.points.is_empty() {
            let mut ne = FieldOutput::new("NE", "Nominal strain components", Position::IntegrationPoint);
            for (label, values) in ComponentLabel::ALL.into_iter().zip(data.strain) {
                ne = ne.with_component(ComponentField::new(
                    label.abaqus_label(),
                    data.points.clone(),
                    values,
                )?);
            }
            frame.add_field_output(ne)?;
        }

        if !data.nodes.is_empty() {
            let mut u = FieldOutput::new("U", "Spatial displacement", Position::Nodal);
            for (label, values) in ["U1", "U2", "U3"].into_iter().zip(data.displacement) {
                u = u.with_component(ComponentField::new(label, data.nodes.clone(), values)?);
            }
            frame.add_field_output(u)?;
        }
    }

    log::info!("Read {} frames from CalculiX output '{}'", db.frame_count(), name);
    Ok(db)
}
