//! Benchmarks for the equivalent strain reduction and scratch pass

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use equivalent_strain::prelude::*;

fn create_snapshot(entities: usize, full: bool) -> StrainTensorSnapshot {
    let ramp = |scale: f64| -> Vec<f64> {
        (0..entities)
            .map(|i| scale * ((i % 97) as f64 - 48.0) / 48.0)
            .collect()
    };

    let snapshot = StrainTensorSnapshot::new(Position::Nodal)
        .with_values(ComponentLabel::Epsx, ramp(1e-3))
        .with_values(ComponentLabel::Epsy, ramp(-4e-4))
        .with_values(ComponentLabel::Gmxy, ramp(2e-4));
    if full {
        snapshot
            .with_values(ComponentLabel::Epsz, ramp(-3e-4))
            .with_values(ComponentLabel::Gmxz, ramp(1e-4))
            .with_values(ComponentLabel::Gmyz, ramp(5e-5))
    } else {
        snapshot
    }
}

fn create_database(steps: usize, frames: usize, entities: usize) -> ResultsDatabase {
    let snapshot = create_snapshot(entities, true);
    let mut db = ResultsDatabase::new("bench");

    for s in 0..steps {
        let step = db.add_step(Step::new(&format!("Step-{}", s + 1))).unwrap();
        for f in 0..frames {
            let mut ne = FieldOutput::new("NE", "Nominal strain components", Position::Nodal);
            for field in snapshot.components.values() {
                ne = ne.with_component(field.clone());
            }
            step.add_frame(f, f as f64 / frames as f64, "")
                .add_field_output(ne)
                .unwrap();
        }
    }
    db
}

fn benchmark_planar(c: &mut Criterion) {
    let snapshot = create_snapshot(100_000, false);
    let computer = EquivalentStrainComputer::new();
    c.bench_function("estrn_planar_100k", |b| {
        b.iter(|| black_box(computer.compute(black_box(&snapshot)).unwrap()))
    });
}

fn benchmark_full(c: &mut Criterion) {
    let snapshot = create_snapshot(100_000, true);
    let computer = EquivalentStrainComputer::new();
    c.bench_function("estrn_full_100k", |b| {
        b.iter(|| black_box(computer.compute(black_box(&snapshot)).unwrap()))
    });
}

fn benchmark_scratch_pass(c: &mut Criterion) {
    let db = create_database(3, 10, 10_000);
    let options = EstrnOptions::default();
    c.bench_function("scratch_3step_10frame_10k", |b| {
        b.iter(|| {
            let mut progress: Vec<Milestone> = Vec::new();
            let result = ScratchDatabase::from_database(&db, &options, &mut progress).unwrap();
            black_box(result);
        })
    });
}

criterion_group!(benches, benchmark_planar, benchmark_full, benchmark_scratch_pass);

criterion_main!(benches);
