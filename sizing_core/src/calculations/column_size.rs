//! # Column Size Estimator
//!
//! Derives a preliminary column cross-section for one material and
//! one project. The area grows with tributary area, use-class load
//! factor, floor count (cumulative load), and floor height (buckling
//! sensitivity), and is modulated per material by how its actual
//! depth/span ratio compares to its family's standard ratio: a
//! material performing better than its family norm gets a
//! proportionally smaller column.
//!
//! The type factors and standard ratios form a calibrated constant
//! set that maps m²-scale tributary areas directly to cm²-scale
//! column areas; they are kept exactly as calibrated rather than
//! re-derived from unit algebra.
//!
//! ## Example
//!
//! ```rust
//! use sizing_core::calculations::column_size;
//! use sizing_core::materials::{Material, MaterialType};
//! use sizing_core::project::{FunctionClass, ProjectInput};
//!
//! let steel = Material::new("w-section", "W-Section", MaterialType::Steel)
//!     .with_span_range(8.0, 15.0)
//!     .with_depth_range(40.0, 60.0);
//! let project = ProjectInput::new("Depot", 9.0, 6.0, FunctionClass::Office)
//!     .with_floors(3, 4.0);
//!
//! let column = column_size::estimate(&steel, &project).unwrap();
//! assert!(column.column_side.value() > 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::materials::{Material, MaterialType};
use crate::project::ProjectInput;
use crate::units::{Centimeters, SquareCentimeters, SquareMeters};

/// Floor-to-floor height (m) at which no slenderness penalty applies
pub const REFERENCE_FLOOR_HEIGHT_M: f64 = 3.5;

/// Area increase per 0.5 m of floor height above the reference
const SLENDERNESS_PENALTY_PER_HALF_METER: f64 = 0.05;

/// Calibrated per-family sizing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypeParameters {
    /// Base column factor mapping tributary area to column area
    pub base_type_factor: f64,
    /// Standard depth/span ratio for the family (efficiency baseline)
    pub standard_ratio: f64,
}

/// Calibrated parameters by material family.
///
/// Concrete doubles as the fallback for material records whose family
/// could not be classified (lenient catalog ingestion maps unknown
/// labels to Concrete).
pub fn type_parameters(material_type: MaterialType) -> TypeParameters {
    match material_type {
        MaterialType::Concrete => TypeParameters {
            base_type_factor: 15.0,
            standard_ratio: 0.05, // L/20
        },
        MaterialType::Steel => TypeParameters {
            base_type_factor: 4.0,
            standard_ratio: 0.04, // L/25
        },
        MaterialType::Timber => TypeParameters {
            base_type_factor: 22.0,
            standard_ratio: 0.06, // L/16 approx
        },
        MaterialType::Masonry => TypeParameters {
            base_type_factor: 35.0,
            standard_ratio: 0.10, // L/10
        },
    }
}

/// Slenderness factor for a floor-to-floor height.
///
/// 5% area increase per 0.5 m above the 3.5 m reference; no bonus
/// below it.
pub fn slenderness_factor(floor_height_m: f64) -> f64 {
    if floor_height_m > REFERENCE_FLOOR_HEIGHT_M {
        1.0 + ((floor_height_m - REFERENCE_FLOOR_HEIGHT_M) / 0.5) * SLENDERNESS_PENALTY_PER_HALF_METER
    } else {
        1.0
    }
}

/// Preliminary column cross-section for one material.
///
/// Intermediate factors are exposed so presentation can explain how
/// the area was built up.
///
/// ## JSON Example
///
/// ```json
/// {
///   "column_area": 675.0,
///   "column_side": 25.98,
///   "tributary_area": 54.0,
///   "load_factor": 1.0,
///   "base_type_factor": 15.0,
///   "standard_ratio": 0.05,
///   "efficiency_adjustment": 0.833,
///   "slenderness_factor": 1.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSizeResult {
    /// Required column cross-sectional area (cm²)
    pub column_area: SquareCentimeters,

    /// Side of an equivalent square column (cm)
    pub column_side: Centimeters,

    /// Tributary floor area per column (m²)
    pub tributary_area: SquareMeters,

    /// Use-class load factor
    pub load_factor: f64,

    /// Calibrated base factor for the material family
    pub base_type_factor: f64,

    /// Standard depth/span ratio for the material family
    pub standard_ratio: f64,

    /// Per-material efficiency adjustment: actual ratio over standard
    pub efficiency_adjustment: f64,

    /// Floor height slenderness factor
    pub slenderness_factor: f64,
}

/// Estimate the required column cross-section for `material` under
/// `project`.
///
/// `area = tributary * load_factor * base_type_factor * adjustment *
/// floors * slenderness`, with `adjustment` the material's own
/// minimum depth/span ratio over its family standard — the same ratio
/// the beam estimator uses, so column sizing tracks each material's
/// actual catalog geometry, not just its family.
///
/// # Errors
///
/// Returns [`crate::errors::CalcError::InvalidInput`] when the
/// project parameters are non-physical.
pub fn estimate(material: &Material, project: &ProjectInput) -> CalcResult<ColumnSizeResult> {
    project.validate()?;

    let tributary_area_m2 = project.tributary_area_m2();
    let load_factor = project.function_class.load_factor();
    let params = type_parameters(material.material_type);

    // Reuse the beam estimator's minimum ratio (guarded against
    // missing geometry and zero spans).
    let efficiency_adjustment = material.depth_span_ratio_min() / params.standard_ratio;
    let slenderness = slenderness_factor(project.floor_height_m);

    let column_area_cm2 = tributary_area_m2
        * load_factor
        * params.base_type_factor
        * efficiency_adjustment
        * project.floors as f64
        * slenderness;
    let column_side_cm = column_area_cm2.sqrt();

    Ok(ColumnSizeResult {
        column_area: SquareCentimeters(column_area_cm2),
        column_side: Centimeters(column_side_cm),
        tributary_area: SquareMeters(tributary_area_m2),
        load_factor,
        base_type_factor: params.base_type_factor,
        standard_ratio: params.standard_ratio,
        efficiency_adjustment,
        slenderness_factor: slenderness,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::FunctionClass;

    fn catalog_concrete() -> Material {
        Material::new("test-concrete", "Test Concrete", MaterialType::Concrete)
            .with_span_range(6.0, 12.0)
            .with_depth_range(25.0, 30.0)
    }

    fn residential_project() -> ProjectInput {
        ProjectInput::new("Test", 9.0, 6.0, FunctionClass::Residential)
    }

    #[test]
    fn test_reference_scenario() {
        // Tributary 54 m², load 1.0, base 15, adjustment
        // (0.25/6)/0.05 = 0.8333, 1 floor, slenderness 1.0:
        // area = 54 * 15 * 0.8333 = 675 cm²
        let result = estimate(&catalog_concrete(), &residential_project()).unwrap();

        assert!((result.column_area.value() - 675.0).abs() < 1e-9);
        assert!((result.column_side.value() - 675.0_f64.sqrt()).abs() < 1e-9);
        assert_eq!(result.load_factor, 1.0);
        assert_eq!(result.slenderness_factor, 1.0);
    }

    #[test]
    fn test_slenderness_factor_values() {
        assert!((slenderness_factor(3.5) - 1.0).abs() < 1e-12);
        assert!((slenderness_factor(4.0) - 1.05).abs() < 1e-12);
        assert!((slenderness_factor(4.5) - 1.10).abs() < 1e-12);
        // No bonus for short floors
        assert!((slenderness_factor(2.8) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_area_linear_in_floors() {
        let material = catalog_concrete();
        let one = estimate(&material, &residential_project()).unwrap();
        let four =
            estimate(&material, &residential_project().with_floors(4, 3.5)).unwrap();
        assert!((four.column_area.value() - 4.0 * one.column_area.value()).abs() < 1e-9);
    }

    #[test]
    fn test_area_linear_in_tributary_area() {
        let material = catalog_concrete();
        let base = estimate(&material, &residential_project()).unwrap();

        let mut wide = residential_project();
        wide.spacing_m = 12.0;
        let doubled = estimate(&material, &wide).unwrap();
        assert!((doubled.column_area.value() - 2.0 * base.column_area.value()).abs() < 1e-9);
    }

    #[test]
    fn test_load_factor_by_class() {
        let material = catalog_concrete();
        let mut project = residential_project();

        project.function_class = FunctionClass::Office;
        assert_eq!(estimate(&material, &project).unwrap().load_factor, 1.3);

        project.function_class = FunctionClass::School;
        assert_eq!(estimate(&material, &project).unwrap().load_factor, 1.6);

        project.function_class = FunctionClass::Public;
        assert_eq!(estimate(&material, &project).unwrap().load_factor, 1.6);
    }

    #[test]
    fn test_type_parameters_table() {
        let concrete = type_parameters(MaterialType::Concrete);
        assert_eq!(concrete.base_type_factor, 15.0);
        assert_eq!(concrete.standard_ratio, 0.05);

        let steel = type_parameters(MaterialType::Steel);
        assert_eq!(steel.base_type_factor, 4.0);
        assert_eq!(steel.standard_ratio, 0.04);

        let timber = type_parameters(MaterialType::Timber);
        assert_eq!(timber.base_type_factor, 22.0);
        assert_eq!(timber.standard_ratio, 0.06);

        let masonry = type_parameters(MaterialType::Masonry);
        assert_eq!(masonry.base_type_factor, 35.0);
        assert_eq!(masonry.standard_ratio, 0.10);
    }

    #[test]
    fn test_efficient_material_gets_smaller_column() {
        // Same family, same span range; the slimmer catalog geometry
        // must yield the smaller column.
        let project = residential_project();
        let stocky = Material::new("stocky", "Stocky", MaterialType::Concrete)
            .with_span_range(6.0, 12.0)
            .with_depth_range(36.0, 60.0); // L/16.7 at the short end
        let slim = catalog_concrete(); // L/24 at the short end

        let stocky_result = estimate(&stocky, &project).unwrap();
        let slim_result = estimate(&slim, &project).unwrap();
        assert!(slim_result.column_area < stocky_result.column_area);
    }

    #[test]
    fn test_missing_geometry_uses_generic_ratio() {
        let material = Material::new("bare", "Bare", MaterialType::Masonry);
        let result = estimate(&material, &residential_project()).unwrap();
        // (1/20) / 0.10 = 0.5
        assert!((result.efficiency_adjustment - 0.5).abs() < 1e-12);
        assert!(result.column_area.value().is_finite());
    }

    #[test]
    fn test_invalid_project_rejected() {
        let mut project = residential_project();
        project.floor_height_m = 0.0;
        assert!(estimate(&catalog_concrete(), &project).is_err());
    }

    #[test]
    fn test_result_serialization() {
        let result = estimate(&catalog_concrete(), &residential_project()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"column_area\":"));
        assert!(json.contains("\"slenderness_factor\":1.0"));

        let roundtrip: ColumnSizeResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
