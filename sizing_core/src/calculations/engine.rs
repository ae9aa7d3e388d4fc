//! # Sizing Engine
//!
//! Orchestrates the span filter and both estimators into one ranked
//! candidate list: one [`SizingResult`] per material whose span range
//! covers the project, in catalog order.
//!
//! The engine is a stateless, synchronous, pure computation: no
//! shared state, no I/O, and identical inputs always produce
//! identical output. Results are recomputed on demand and never
//! stored; persisting a chosen material is [`crate::store`]'s job.
//!
//! ## Example
//!
//! ```rust
//! use sizing_core::calculations::engine;
//! use sizing_core::materials::MaterialCatalog;
//! use sizing_core::project::{FunctionClass, ProjectInput};
//!
//! let catalog = MaterialCatalog::builtin();
//! let project = ProjectInput::new("Studio", 9.0, 6.0, FunctionClass::Residential);
//!
//! let results = engine::evaluate(&project, &catalog).unwrap();
//! for r in &results {
//!     println!(
//!         "{}: beam {:.0}-{:.0} cm, column {:.0} cm²",
//!         r.material.name,
//!         r.beam.beam_depth_min.value(),
//!         r.beam.beam_depth_max.value(),
//!         r.column.column_area.value(),
//!     );
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::beam_depth::{self, BeamDepthResult};
use crate::calculations::column_size::{self, ColumnSizeResult};
use crate::calculations::span_filter;
use crate::errors::CalcResult;
use crate::materials::{Material, MaterialCatalog};
use crate::project::ProjectInput;

/// One sizing candidate: a material plus its member estimates.
///
/// Carries the full material record so presentation can render the
/// descriptive fields without a second catalog lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingResult {
    /// The material this candidate was computed for
    pub material: Material,

    /// Beam depth band estimate
    pub beam: BeamDepthResult,

    /// Column cross-section estimate
    pub column: ColumnSizeResult,
}

/// Evaluate the full catalog for one project.
///
/// Validates the project once, filters the catalog by span
/// applicability, and runs both estimators per surviving material.
/// Output order is the stable catalog order from the filter. An empty
/// vector is the valid "no recommendation" outcome.
///
/// # Errors
///
/// Returns [`crate::errors::CalcError::InvalidInput`] when the
/// project parameters are non-physical; catalog geometry gaps never
/// fail (the estimators fall back to generic ratios).
pub fn evaluate(project: &ProjectInput, catalog: &MaterialCatalog) -> CalcResult<Vec<SizingResult>> {
    project.validate()?;

    span_filter::applicable(project.span_m, catalog.all())
        .into_iter()
        .map(|material| {
            Ok(SizingResult {
                material: material.clone(),
                beam: beam_depth::estimate(material, project)?,
                column: column_size::estimate(material, project)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::FunctionClass;

    fn nine_meter_project() -> ProjectInput {
        ProjectInput::new("Test", 9.0, 6.0, FunctionClass::Residential)
    }

    #[test]
    fn test_one_result_per_applicable_material() {
        let catalog = MaterialCatalog::builtin();
        let results = evaluate(&nine_meter_project(), &catalog).unwrap();

        let expected: Vec<&str> = catalog
            .all()
            .iter()
            .filter(|m| m.covers_span(9.0))
            .map(|m| m.id.as_str())
            .collect();
        let got: Vec<&str> = results.iter().map(|r| r.material.id.as_str()).collect();
        assert_eq!(got, expected);
        assert!(!results.is_empty());
    }

    #[test]
    fn test_empty_catalog_match_is_not_an_error() {
        let catalog = MaterialCatalog::builtin();
        let mut project = nine_meter_project();
        project.span_m = 1.0;
        let results = evaluate(&project, &catalog).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_invalid_input_rejected_before_computation() {
        let catalog = MaterialCatalog::builtin();
        let mut project = nine_meter_project();
        project.spacing_m = -6.0;
        let err = evaluate(&project, &catalog).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_idempotent() {
        let catalog = MaterialCatalog::builtin();
        let project = nine_meter_project().with_floors(3, 4.2);

        let first = evaluate(&project, &catalog).unwrap();
        let second = evaluate(&project, &catalog).unwrap();
        assert_eq!(first, second);

        // Bit-identical through serialization as well
        let a = serde_json::to_string(&first).unwrap();
        let b = serde_json::to_string(&second).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_estimates_attached_per_material() {
        let catalog = MaterialCatalog::builtin();
        let results = evaluate(&nine_meter_project(), &catalog).unwrap();

        for r in &results {
            assert!(r.beam.beam_depth_min.value() > 0.0);
            assert!(r.column.column_area.value() > 0.0);
            assert!(
                (r.column.column_side.value() - r.column.column_area.value().sqrt()).abs()
                    < 1e-9
            );
        }
    }

    #[test]
    fn test_result_serialization() {
        let catalog = MaterialCatalog::builtin();
        let results = evaluate(&nine_meter_project(), &catalog).unwrap();
        let json = serde_json::to_string_pretty(&results).unwrap();
        let roundtrip: Vec<SizingResult> = serde_json::from_str(&json).unwrap();
        assert_eq!(results, roundtrip);
    }
}
