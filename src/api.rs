//! Request and response envelopes shared by the HTTP server and WASM bindings

use serde::{Deserialize, Serialize};

use crate::error::EstrnResult;
use crate::fields::DerivedScalarField;
use crate::odb::{FieldOutput, PassReport, ResultsDatabase, ScratchDatabase};
use crate::options::{EstrnOptions, LogProgress};
use crate::results::FieldSummary;
use crate::strain::{Dimensionality, EquivalentStrainComputer};

/// Body of a scratch request: a database plus optional pass options
#[derive(Debug, Deserialize)]
pub struct ScratchRequest {
    pub database: ResultsDatabase,
    #[serde(default)]
    pub options: Option<EstrnOptions>,
}

/// Derived field for a single snapshot
#[derive(Debug, Serialize)]
pub struct EstrnData {
    pub dimensionality: Dimensionality,
    pub field: DerivedScalarField,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<FieldSummary>,
}

/// Scratch database and what the pass did
#[derive(Debug, Serialize)]
pub struct ScratchData {
    pub scratch: ScratchDatabase,
    pub report: PassReport,
}

/// Response envelope: either `results` or `error` is set
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ms_elapsed: Option<u64>,
}

impl<T> ApiResponse<T> {
    pub fn from_result(result: EstrnResult<T>) -> Self {
        match result {
            Ok(results) => Self {
                success: true,
                error: None,
                results: Some(results),
                ms_elapsed: None,
            },
            Err(e) => Self {
                success: false,
                error: Some(e.to_string()),
                results: None,
                ms_elapsed: None,
            },
        }
    }

    pub fn with_elapsed(mut self, ms: u64) -> Self {
        self.ms_elapsed = Some(ms);
        self
    }
}

/// Compute `ESTRN` for one posted field output
pub fn run_estrn(snapshot: &FieldOutput) -> EstrnResult<EstrnData> {
    let field = EquivalentStrainComputer::new().compute(snapshot)?;
    let summary = if field.is_empty() {
        None
    } else {
        Some(FieldSummary::from_field(&field)?)
    };
    Ok(EstrnData {
        dimensionality: Dimensionality::detect(snapshot),
        field,
        summary,
    })
}

/// Run the scratch pass over a posted database
pub fn run_scratch(request: ScratchRequest) -> EstrnResult<ScratchData> {
    let options = request.options.unwrap_or_default();
    let (scratch, report) =
        ScratchDatabase::from_database(&request.database, &options, &mut LogProgress)?;
    Ok(ScratchData { scratch, report })
}
