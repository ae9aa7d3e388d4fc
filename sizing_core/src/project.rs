//! # Project Input Types
//!
//! The transient description of a building a user wants sized: use
//! class, primary span, column grid spacing, and the floor stack.
//! Built from user entry, validated once, then handed to the engine.
//! Nothing here is persisted by the engine itself; see [`crate::store`]
//! for the history of saved selections.
//!
//! ## Example
//!
//! ```rust
//! use sizing_core::project::{FunctionClass, ProjectInput};
//!
//! let input = ProjectInput::new("Community Hall", 9.0, 6.0, FunctionClass::Public);
//! assert_eq!(input.floors, 1);
//! assert_eq!(input.floor_height_m, 3.5);
//! assert!(input.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default floor-to-floor height (m) when the user does not specify one
pub const DEFAULT_FLOOR_HEIGHT_M: f64 = 3.5;

/// Building use classes, ordered by live-load intensity.
///
/// Locale-specific labels (e.g., "Hunian", "Kantor") map onto these
/// four classes via [`FunctionClass::from_label_lenient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionClass {
    /// Dwellings; the lightest load class and the neutral baseline
    Residential,
    /// Office space
    Office,
    /// Educational buildings
    School,
    /// Assembly and other public buildings
    Public,
}

impl FunctionClass {
    /// All function class variants for UI selection
    pub const ALL: [FunctionClass; 4] = [
        FunctionClass::Residential,
        FunctionClass::Office,
        FunctionClass::School,
        FunctionClass::Public,
    ];

    /// Relative live-load intensity multiplier for column sizing
    pub fn load_factor(&self) -> f64 {
        match self {
            FunctionClass::Residential => 1.0,
            FunctionClass::Office => 1.3,
            FunctionClass::School | FunctionClass::Public => 1.6,
        }
    }

    /// Beam depth multiplier for the heavier use classes.
    ///
    /// Residential is the unadjusted baseline.
    pub fn depth_multiplier(&self) -> f64 {
        match self {
            FunctionClass::Residential => 1.0,
            FunctionClass::Office => 1.15,
            FunctionClass::School | FunctionClass::Public => 1.25,
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "residential" | "housing" | "hunian" => Ok(FunctionClass::Residential),
            "office" | "kantor" => Ok(FunctionClass::Office),
            "school" | "sekolah" => Ok(FunctionClass::School),
            "public" | "assembly" | "publik" => Ok(FunctionClass::Public),
            _ => Err(CalcError::invalid_input(
                "function_class",
                s,
                "Unknown building function class",
            )),
        }
    }

    /// Parse leniently, degrading unknown labels to the conservative
    /// default of [`FunctionClass::Residential`] (load factor 1.0).
    pub fn from_label_lenient(s: &str) -> Self {
        Self::from_str_flexible(s).unwrap_or(FunctionClass::Residential)
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            FunctionClass::Residential => "Residential",
            FunctionClass::Office => "Office",
            FunctionClass::School => "School",
            FunctionClass::Public => "Public",
        }
    }
}

impl std::fmt::Display for FunctionClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Project parameters for one sizing query.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Riverside Office Block",
///   "span_m": 9.0,
///   "spacing_m": 6.0,
///   "function_class": "Office",
///   "floors": 4,
///   "floor_height_m": 4.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInput {
    /// User label for this project (e.g., "Riverside Office Block")
    pub label: String,

    /// Primary bay span (m)
    pub span_m: f64,

    /// Column grid spacing transverse to the span (m)
    pub spacing_m: f64,

    /// Building use class
    pub function_class: FunctionClass,

    /// Number of floors the columns carry
    pub floors: u32,

    /// Floor-to-floor height (m)
    pub floor_height_m: f64,
}

impl ProjectInput {
    /// Create a single-storey project with the default floor height.
    pub fn new(
        label: impl Into<String>,
        span_m: f64,
        spacing_m: f64,
        function_class: FunctionClass,
    ) -> Self {
        ProjectInput {
            label: label.into(),
            span_m,
            spacing_m,
            function_class,
            floors: 1,
            floor_height_m: DEFAULT_FLOOR_HEIGHT_M,
        }
    }

    /// Set the floor stack (count and floor-to-floor height).
    pub fn with_floors(mut self, floors: u32, floor_height_m: f64) -> Self {
        self.floors = floors;
        self.floor_height_m = floor_height_m;
        self
    }

    /// Validate input parameters.
    ///
    /// The engine refuses to compute with non-physical values; a
    /// negative span would silently produce a negative depth.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.span_m.is_finite() || self.span_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "span_m",
                self.span_m.to_string(),
                "Span must be a positive number",
            ));
        }
        if !self.spacing_m.is_finite() || self.spacing_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "spacing_m",
                self.spacing_m.to_string(),
                "Column spacing must be a positive number",
            ));
        }
        if self.floors == 0 {
            return Err(CalcError::invalid_input(
                "floors",
                self.floors.to_string(),
                "At least one floor is required",
            ));
        }
        if !self.floor_height_m.is_finite() || self.floor_height_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "floor_height_m",
                self.floor_height_m.to_string(),
                "Floor height must be a positive number",
            ));
        }
        Ok(())
    }

    /// Tributary floor area supported by one column: span x spacing (m²).
    pub fn tributary_area_m2(&self) -> f64 {
        self.span_m * self.spacing_m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let input = ProjectInput::new("Test", 9.0, 6.0, FunctionClass::Residential);
        assert_eq!(input.floors, 1);
        assert_eq!(input.floor_height_m, DEFAULT_FLOOR_HEIGHT_M);
    }

    #[test]
    fn test_load_factors() {
        assert_eq!(FunctionClass::Residential.load_factor(), 1.0);
        assert_eq!(FunctionClass::Office.load_factor(), 1.3);
        assert_eq!(FunctionClass::School.load_factor(), 1.6);
        assert_eq!(FunctionClass::Public.load_factor(), 1.6);
    }

    #[test]
    fn test_depth_multipliers() {
        assert_eq!(FunctionClass::Residential.depth_multiplier(), 1.0);
        assert_eq!(FunctionClass::Office.depth_multiplier(), 1.15);
        assert_eq!(FunctionClass::School.depth_multiplier(), 1.25);
        assert_eq!(FunctionClass::Public.depth_multiplier(), 1.25);
    }

    #[test]
    fn test_lenient_class_parsing() {
        assert_eq!(
            FunctionClass::from_label_lenient("Kantor"),
            FunctionClass::Office
        );
        assert_eq!(
            FunctionClass::from_label_lenient("warehouse"),
            FunctionClass::Residential
        );
    }

    #[test]
    fn test_validation_rejects_non_physical_values() {
        let mut input = ProjectInput::new("Test", 9.0, 6.0, FunctionClass::Office);
        assert!(input.validate().is_ok());

        input.span_m = -9.0;
        assert!(input.validate().is_err());
        input.span_m = f64::NAN;
        assert!(input.validate().is_err());
        input.span_m = 9.0;

        input.spacing_m = 0.0;
        assert!(input.validate().is_err());
        input.spacing_m = 6.0;

        input.floors = 0;
        assert!(input.validate().is_err());
        input.floors = 1;

        input.floor_height_m = f64::INFINITY;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_tributary_area() {
        let input = ProjectInput::new("Test", 9.0, 6.0, FunctionClass::Residential);
        assert_eq!(input.tributary_area_m2(), 54.0);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = ProjectInput::new("Test", 9.0, 6.0, FunctionClass::Public)
            .with_floors(4, 4.0);
        let json = serde_json::to_string(&input).unwrap();
        let roundtrip: ProjectInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
