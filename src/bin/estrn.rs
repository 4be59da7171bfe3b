//! Equivalent strain CLI
//!
//! Reads a results database (JSON, or a CalculiX `.dat` file), computes ESTRN
//! for every step and frame and writes the scratch database as JSON.
//!
//! Usage: `estrn <input.json|input.dat> [output.json]`
//!
//! Environment:
//! - `ESTRN_SOURCE_FIELD`     strain field output to read (default `NE`)
//! - `ESTRN_NO_DISPLACEMENT`  skip copying `U` into scratch frames
//! - `ESTRN_ENGINEERING_SHEAR` treat `.dat` shear strains as engineering strains
//! - `RUST_LOG`               log filter (default `info`)

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use equivalent_strain::prelude::*;

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| !v.is_empty() && v != "0")
        .unwrap_or(false)
}

fn options_from_env() -> EstrnOptions {
    let mut options = EstrnOptions::default();
    if let Ok(field) = std::env::var("ESTRN_SOURCE_FIELD") {
        if !field.is_empty() {
            options = options.with_source_field(&field);
        }
    }
    if env_flag("ESTRN_NO_DISPLACEMENT") {
        options = options.without_displacement();
    }
    options
}

fn load_database(path: &Path) -> Result<ResultsDatabase> {
    let is_dat = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("dat"))
        .unwrap_or(false);

    let db = if is_dat {
        let shear = if env_flag("ESTRN_ENGINEERING_SHEAR") {
            ShearConvention::Engineering
        } else {
            ShearConvention::Tensor
        };
        read_calculix_dat_file(path, shear)
    } else {
        ResultsDatabase::from_json_file(path)
    };
    db.with_context(|| format!("failed to read results from {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let Some(input) = args.next() else {
        bail!("usage: estrn <input.json|input.dat> [output.json]");
    };
    let input = PathBuf::from(input);
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| input.with_extension("scratch.json"));

    let options = options_from_env();
    let db = load_database(&input)?;
    log::info!(
        "Loaded '{}': {} steps, {} frames",
        db.name,
        db.steps.len(),
        db.frame_count()
    );

    let (scratch, report) = ScratchDatabase::from_database(&db, &options, &mut LogProgress)?;

    println!("=== Equivalent strain: {} ===\n", db.name);
    for step in &scratch.database.steps {
        println!("{}", step.name);
        for frame in &step.frames {
            let Some(estrn) = frame.field_output(&options.output_field) else {
                continue;
            };
            let Some(field) = estrn.to_scalar_field() else {
                continue;
            };
            match FieldSummary::from_field(&field) {
                Ok(s) => println!(
                    "  frame {:>3} (value {:.4}): max {:.6e} @ {}, mean {:.6e}, {} entities",
                    frame.frame_id, frame.frame_value, s.max, s.max_entity, s.mean, s.count
                ),
                Err(_) => println!("  frame {:>3}: empty", frame.frame_id),
            }
        }
    }

    println!(
        "\nComputed {} frames, reused {}, failed {}",
        report.frames_computed,
        report.frames_reused,
        report.frames_failed.len()
    );
    for step in &report.steps_incomplete {
        println!("  step '{}' is missing '{}' output", step, options.source_field);
    }

    scratch
        .to_json_file(&output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!("Scratch results written to {}", output.display());

    Ok(())
}
