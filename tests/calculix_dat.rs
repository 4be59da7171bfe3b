use approx::assert_relative_eq;

use equivalent_strain::prelude::*;

const DAT: &str = "
                        S T E P       1


                                INCREMENT     1


 displacements (vx,vy,vz) for set NALL and time  0.5000000E+00

         1  0.000000E+00  0.000000E+00  0.000000E+00
         2  5.000000E-04  0.000000E+00  0.000000E+00

 strains (elem, integ.pnt.,exx,eyy,ezz,exy,exz,eyz) for set EALL and time  0.5000000E+00

         1   1  5.000000E-03 -2.500000E-03 -2.500000E-03  5.000000E-03  0.000000E+00  0.000000E+00
         1   2  5.000000E-03 -2.500000E-03 -2.500000E-03  5.000000E-03  0.000000E+00  0.000000E+00

                                INCREMENT     2


 displacements (vx,vy,vz) for set NALL and time  0.1000000E+01

         1  0.000000E+00  0.000000E+00  0.000000E+00
         2  1.000000E-03  0.000000E+00  0.000000E+00
         2  1.000000E-03  0.000000E+00  0.000000E+00

 strains (elem, integ.pnt.,exx,eyy,ezz,exy,exz,eyz) for set EALL and time  0.1000000E+01

         1   1  1.000000E-02 -5.000000E-03 -5.000000E-03  1.000000E-02  0.000000E+00  0.000000E+00
         1   2  1.000000E-02 -5.000000E-03 -5.000000E-03  1.000000E-02  0.000000E+00  0.000000E+00

 stresses (elem, integ.pnt.,sxx,syy,szz,sxy,sxz,syz) for set EALL and time  0.1000000E+01

         1   1  2.000000E+09  0.000000E+00  0.000000E+00  0.000000E+00  0.000000E+00  0.000000E+00
";

#[test]
fn frames_follow_output_times() {
    let db = read_calculix_dat(DAT, "tension", ShearConvention::Tensor).unwrap();
    assert_eq!(db.name, "tension");
    assert_eq!(db.steps.len(), 1);

    let step = &db.steps[0];
    assert_eq!(step.frames.len(), 2);
    assert_eq!(step.time_period, 1.0);
    assert_eq!(step.frames[0].frame_value, 0.5);
    assert_eq!(step.frames[1].frame_value, 1.0);
}

#[test]
fn strain_block_becomes_nominal_strain_output() {
    let db = read_calculix_dat(DAT, "tension", ShearConvention::Tensor).unwrap();
    let ne = db.steps[0].frames[1].field_output("NE").unwrap();

    assert_eq!(ne.position, Position::IntegrationPoint);
    assert_eq!(
        ne.component_labels(),
        vec!["NE11", "NE22", "NE33", "NE12", "NE13", "NE23"]
    );
    assert_eq!(ne.get("NE11").unwrap().entities, vec![1001, 1002]);
    // tensor shear 0.01 is stored as engineering shear 0.02
    assert_eq!(ne.get("NE12").unwrap().values, vec![0.02, 0.02]);
}

#[test]
fn engineering_shear_is_kept_as_is() {
    let db = read_calculix_dat(DAT, "tension", ShearConvention::Engineering).unwrap();
    let ne = db.steps[0].frames[1].field_output("NE").unwrap();
    assert_eq!(ne.get("NE12").unwrap().values, vec![0.01, 0.01]);
}

#[test]
fn duplicate_displacement_rows_are_skipped() {
    let db = read_calculix_dat(DAT, "tension", ShearConvention::Tensor).unwrap();
    let u = db.steps[0].frames[1].field_output("U").unwrap();
    assert_eq!(u.get("U1").unwrap().entities, vec![1, 2]);
    assert_eq!(u.get("U1").unwrap().values, vec![0.0, 1e-3]);
}

#[test]
fn overlapping_strain_sets_keep_first_row() {
    let dat = "
 strains (elem, integ.pnt.,exx,eyy,ezz,exy,exz,eyz) for set EALL and time  0.1000000E+01

         1   1  1.000000E-02  0.000000E+00  0.000000E+00  0.000000E+00  0.000000E+00  0.000000E+00
         2   1  2.000000E-02  0.000000E+00  0.000000E+00  0.000000E+00  0.000000E+00  0.000000E+00

 strains (elem, integ.pnt.,exx,eyy,ezz,exy,exz,eyz) for set ETOP and time  0.1000000E+01

         2   1  9.000000E-02  0.000000E+00  0.000000E+00  0.000000E+00  0.000000E+00  0.000000E+00
         3   1  3.000000E-02  0.000000E+00  0.000000E+00  0.000000E+00  0.000000E+00  0.000000E+00
";
    let db = read_calculix_dat(dat, "overlap", ShearConvention::Tensor).unwrap();
    assert_eq!(db.steps[0].frames.len(), 1);
    let ne = db.steps[0].frames[0].field_output("NE").unwrap();
    let exx = ne.get("NE11").unwrap();
    assert_eq!(exx.entities, vec![1001, 2001, 3001]);
    assert_eq!(exx.values, vec![1e-2, 2e-2, 3e-2]);
    assert_eq!(ne.get("NE12").unwrap().entities.len(), 3);
}

#[test]
fn scratch_pass_over_calculix_results() {
    let db = read_calculix_dat(DAT, "tension", ShearConvention::Tensor).unwrap();
    let (scratch, report) =
        ScratchDatabase::from_database(&db, &EstrnOptions::default(), &mut LogProgress).unwrap();
    assert_eq!(report.frames_computed, 2);

    let frame = scratch.step("Step-1").unwrap().frame(1).unwrap();
    let estrn = frame.field_output("ESTRN").unwrap().to_scalar_field().unwrap();
    assert_eq!(estrn.position, Position::IntegrationPoint);
    for value in &estrn.values {
        assert_relative_eq!(*value, 2.0 * (0.000175_f64 / 3.0).sqrt(), max_relative = 1e-12);
    }
    assert!(frame.has_field_output("U"));
}

#[test]
fn malformed_row_reports_line_number() {
    let text = "
 strains (elem, integ.pnt.,exx,eyy,ezz,exy,exz,eyz) for set EALL and time  0.1000000E+01

         1   1  1.0E-02  oops  0.0  0.0  0.0  0.0
";
    match read_calculix_dat(text, "bad", ShearConvention::Tensor) {
        Err(EstrnError::Parse { line, .. }) => assert_eq!(line, 4),
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn reads_file_and_names_database_after_stem() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plate_run.dat");
    std::fs::write(&path, DAT).unwrap();

    let db = read_calculix_dat_file(&path, ShearConvention::Tensor).unwrap();
    assert_eq!(db.name, "plate_run");
    assert_eq!(db.frame_count(), 2);

    let missing = read_calculix_dat_file(dir.path().join("missing.dat"), ShearConvention::Tensor);
    assert!(matches!(missing, Err(EstrnError::IoError(_))));
}
