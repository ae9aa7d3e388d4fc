//! # Beam Depth Estimator
//!
//! Derives a preliminary [min, max] beam depth band for one material
//! and one project. The band scales linearly with span, using the
//! material's own catalog geometry as its depth/span ratio and the
//! generic L/20 ratio when the catalog is silent.
//!
//! ## Band Inversion
//!
//! Some catalog entries carry a shallower ratio at their long-span
//! end than at their short-span end, which makes the computed "max"
//! fall below the "min". The estimator does not reorder or clamp:
//! both raw values are reported and [`BeamDepthResult::is_inverted`]
//! flags the inconsistent entry for the presentation layer.
//!
//! ## Example
//!
//! ```rust
//! use sizing_core::calculations::beam_depth;
//! use sizing_core::materials::{Material, MaterialType};
//! use sizing_core::project::{FunctionClass, ProjectInput};
//!
//! let glulam = Material::new("glulam", "Glulam", MaterialType::Timber)
//!     .with_span_range(6.0, 30.0)
//!     .with_depth_range(40.0, 150.0);
//! let project = ProjectInput::new("Hall", 12.0, 6.0, FunctionClass::Residential);
//!
//! let band = beam_depth::estimate(&glulam, &project).unwrap();
//! assert!(band.beam_depth_min.value() > 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::materials::Material;
use crate::project::ProjectInput;
use crate::units::Centimeters;

/// Preliminary beam depth band for one material.
///
/// ## JSON Example
///
/// ```json
/// {
///   "beam_depth_min": 37.5,
///   "beam_depth_max": 22.5,
///   "efficiency_ratio_min": 0.0417,
///   "efficiency_ratio_max": 0.025,
///   "depth_multiplier": 1.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamDepthResult {
    /// Depth at the material's efficient end of the band (cm)
    pub beam_depth_min: Centimeters,

    /// Depth at the material's deep end of the band (cm)
    pub beam_depth_max: Centimeters,

    /// Depth/span ratio used for the minimum bound
    pub efficiency_ratio_min: f64,

    /// Depth/span ratio used for the maximum bound
    pub efficiency_ratio_max: f64,

    /// Function-class multiplier applied to both bounds
    pub depth_multiplier: f64,
}

impl BeamDepthResult {
    /// Whether the catalog ratios inverted the band (`max < min`).
    ///
    /// An inverted band signals an inconsistent catalog entry; the
    /// raw values are preserved rather than silently reordered.
    pub fn is_inverted(&self) -> bool {
        self.beam_depth_max < self.beam_depth_min
    }
}

/// Estimate the beam depth band for `material` under `project`.
///
/// Both bounds are `span * ratio`, expressed in centimeters, with the
/// ratios taken from the material's catalog geometry
/// ([`Material::depth_span_ratio_min`] / [`Material::depth_span_ratio_max`])
/// and a function-class multiplier applied for non-residential use
/// (Office 1.15, School/Public 1.25).
///
/// # Errors
///
/// Returns [`crate::errors::CalcError::InvalidInput`] when the
/// project parameters are non-physical.
pub fn estimate(material: &Material, project: &ProjectInput) -> CalcResult<BeamDepthResult> {
    project.validate()?;

    let efficiency_ratio_min = material.depth_span_ratio_min();
    let efficiency_ratio_max = material.depth_span_ratio_max();
    let depth_multiplier = project.function_class.depth_multiplier();

    // Ratios are depth(m)/span(m); scale to centimeters for reporting.
    let beam_depth_min_cm = project.span_m * efficiency_ratio_min * 100.0 * depth_multiplier;
    let beam_depth_max_cm = project.span_m * efficiency_ratio_max * 100.0 * depth_multiplier;

    Ok(BeamDepthResult {
        beam_depth_min: Centimeters(beam_depth_min_cm),
        beam_depth_max: Centimeters(beam_depth_max_cm),
        efficiency_ratio_min,
        efficiency_ratio_max,
        depth_multiplier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::MaterialType;
    use crate::project::FunctionClass;

    fn catalog_concrete() -> Material {
        Material::new("test-concrete", "Test Concrete", MaterialType::Concrete)
            .with_span_range(6.0, 12.0)
            .with_depth_range(25.0, 30.0)
    }

    fn residential_project(span_m: f64) -> ProjectInput {
        ProjectInput::new("Test", span_m, 6.0, FunctionClass::Residential)
    }

    #[test]
    fn test_reference_scenario_exposes_inverted_band() {
        // Concrete 6-12 m with depths 25-30 cm: ratio 1/24 at the
        // short end but 1/40 at the long end. At span 9 the raw band
        // comes out inverted and must stay that way.
        let material = catalog_concrete();
        let result = estimate(&material, &residential_project(9.0)).unwrap();

        // 9 * (0.25/6) * 100 = 37.5 cm
        assert!((result.beam_depth_min.value() - 37.5).abs() < 1e-9);
        // 9 * (0.30/12) * 100 = 22.5 cm
        assert!((result.beam_depth_max.value() - 22.5).abs() < 1e-9);
        assert!(result.is_inverted());
    }

    #[test]
    fn test_residential_applies_no_multiplier() {
        let material = catalog_concrete();
        let result = estimate(&material, &residential_project(9.0)).unwrap();
        assert_eq!(result.depth_multiplier, 1.0);
    }

    #[test]
    fn test_office_multiplier_exact() {
        let material = catalog_concrete();
        let mut project = residential_project(9.0);
        project.function_class = FunctionClass::Office;
        let result = estimate(&material, &project).unwrap();

        assert_eq!(result.depth_multiplier, 1.15);
        assert!((result.beam_depth_min.value() - 37.5 * 1.15).abs() < 1e-9);
        assert!((result.beam_depth_max.value() - 22.5 * 1.15).abs() < 1e-9);
    }

    #[test]
    fn test_school_and_public_multiplier_exact() {
        let material = catalog_concrete();
        for class in [FunctionClass::School, FunctionClass::Public] {
            let mut project = residential_project(9.0);
            project.function_class = class;
            let result = estimate(&material, &project).unwrap();
            assert_eq!(result.depth_multiplier, 1.25);
            assert!((result.beam_depth_min.value() - 37.5 * 1.25).abs() < 1e-9);
        }
    }

    #[test]
    fn test_linear_in_span() {
        let material = catalog_concrete();
        let at_6 = estimate(&material, &residential_project(6.0)).unwrap();
        let at_12 = estimate(&material, &residential_project(12.0)).unwrap();

        assert!(
            (at_12.beam_depth_min.value() - 2.0 * at_6.beam_depth_min.value()).abs() < 1e-9
        );
        assert!(
            (at_12.beam_depth_max.value() - 2.0 * at_6.beam_depth_max.value()).abs() < 1e-9
        );
    }

    #[test]
    fn test_missing_geometry_uses_generic_ratios() {
        let material = Material::new("bare", "Bare", MaterialType::Masonry);
        let result = estimate(&material, &residential_project(9.0)).unwrap();

        // 9 * (1/20) * 100 = 45 cm, widened by 1.2 for the max
        assert!((result.beam_depth_min.value() - 45.0).abs() < 1e-9);
        assert!((result.beam_depth_max.value() - 54.0).abs() < 1e-9);
        assert!(!result.is_inverted());
    }

    #[test]
    fn test_zero_span_min_never_divides() {
        let mut material = catalog_concrete();
        material.span_min = Some(0.0);
        let result = estimate(&material, &residential_project(9.0)).unwrap();
        assert!(result.beam_depth_min.value().is_finite());
        assert!(result.beam_depth_max.value().is_finite());
    }

    #[test]
    fn test_invalid_project_rejected() {
        let material = catalog_concrete();
        let mut project = residential_project(9.0);
        project.span_m = -1.0;
        assert!(estimate(&material, &project).is_err());
    }

    #[test]
    fn test_result_serialization() {
        let material = catalog_concrete();
        let result = estimate(&material, &residential_project(9.0)).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"beam_depth_min\":"));
        assert!(json.contains("\"depth_multiplier\":1.0"));

        let roundtrip: BeamDepthResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
