//! # Material Catalog Types
//!
//! Typed material records for the sizing engine. Each record carries
//! a span applicability range (meters) and a reference depth range
//! (centimeters) tied to that span range: `depth_min` is the typical
//! member depth at `span_min`, `depth_max` at `span_max`.
//!
//! Geometry fields are explicit `Option`s: catalog sources are not
//! guaranteed to populate every field, and a missing bound means
//! "unconstrained", never "excluded".
//!
//! ## Span Sentinel
//!
//! A `span_max` of 999 is the catalog convention for "no practical
//! upper span limit". Any value of 900 or above is treated as the
//! sentinel when selecting ratio formulas.
//!
//! ## Example
//!
//! ```rust
//! use sizing_core::materials::{Material, MaterialType};
//!
//! let rc = Material::new("reinforced-concrete", "Reinforced Concrete", MaterialType::Concrete)
//!     .with_span_range(6.0, 12.0)
//!     .with_depth_range(30.0, 50.0);
//!
//! assert!(rc.covers_span(9.0));
//! assert!(!rc.covers_span(13.0));
//! ```

pub mod catalog;

pub use catalog::MaterialCatalog;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Catalog convention for "no practical upper span limit"
pub const SPAN_MAX_SENTINEL: f64 = 999.0;

/// Threshold above which `span_max` is treated as the open-ended sentinel
pub const SENTINEL_THRESHOLD: f64 = 900.0;

/// Generic span-to-depth ratio (L/20) used when catalog geometry is missing
pub const DEFAULT_DEPTH_SPAN_RATIO: f64 = 1.0 / 20.0;

/// Spread applied to the minimum ratio when no upper-bound geometry exists
const FALLBACK_MAX_RATIO_FACTOR: f64 = 1.2;

/// Structural material families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialType {
    /// Cast-in-place or precast concrete
    Concrete,
    /// Rolled or hollow steel sections
    Steel,
    /// Sawn or engineered timber
    Timber,
    /// Brick or block masonry
    Masonry,
}

impl MaterialType {
    /// All material type variants for UI selection
    pub const ALL: [MaterialType; 4] = [
        MaterialType::Concrete,
        MaterialType::Steel,
        MaterialType::Timber,
        MaterialType::Masonry,
    ];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "concrete" | "beton" | "rc" => Ok(MaterialType::Concrete),
            "steel" | "baja" => Ok(MaterialType::Steel),
            "timber" | "wood" | "kayu" => Ok(MaterialType::Timber),
            "masonry" | "brick" | "bata" => Ok(MaterialType::Masonry),
            _ => Err(CalcError::material_not_found(s)),
        }
    }

    /// Parse leniently, degrading unknown labels to [`MaterialType::Concrete`].
    ///
    /// Catalog sources occasionally carry free-form type strings; an
    /// unrecognized label gets the most common family rather than
    /// failing the whole catalog load.
    pub fn from_label_lenient(s: &str) -> Self {
        Self::from_str_flexible(s).unwrap_or(MaterialType::Concrete)
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialType::Concrete => "Concrete",
            MaterialType::Steel => "Steel",
            MaterialType::Timber => "Timber",
            MaterialType::Masonry => "Masonry",
        }
    }
}

impl std::fmt::Display for MaterialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Immutable material reference record.
///
/// ## JSON Example
///
/// ```json
/// {
///   "id": "reinforced-concrete",
///   "name": "Reinforced Concrete",
///   "material_type": "Concrete",
///   "span_min": 6.0,
///   "span_max": 12.0,
///   "depth_min": 30.0,
///   "depth_max": 50.0,
///   "description": "Concrete reinforced with steel bars.",
///   "characteristics": ["High compressive strength"],
///   "suitable_for": ["Multi-storey columns"],
///   "limitations": ["High self-weight"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Opaque identifier (stable across catalog versions)
    pub id: String,

    /// Display name
    pub name: String,

    /// Material family
    pub material_type: MaterialType,

    /// Lower span applicability bound (m); `None` = unconstrained
    pub span_min: Option<f64>,

    /// Upper span applicability bound (m); `None` = unconstrained,
    /// 999 = open-ended sentinel
    pub span_max: Option<f64>,

    /// Reference member depth at `span_min` (cm)
    pub depth_min: Option<f64>,

    /// Reference member depth at `span_max` (cm)
    pub depth_max: Option<f64>,

    /// Free-text description, passed through to presentation unchanged
    #[serde(default)]
    pub description: String,

    /// Descriptive bullet points, opaque to the engine
    #[serde(default)]
    pub characteristics: Vec<String>,

    /// Typical applications, opaque to the engine
    #[serde(default)]
    pub suitable_for: Vec<String>,

    /// Known limitations, opaque to the engine
    #[serde(default)]
    pub limitations: Vec<String>,
}

impl Material {
    /// Create a material with no geometry; add ranges with the builder methods.
    pub fn new(id: impl Into<String>, name: impl Into<String>, material_type: MaterialType) -> Self {
        Material {
            id: id.into(),
            name: name.into(),
            material_type,
            span_min: None,
            span_max: None,
            depth_min: None,
            depth_max: None,
            description: String::new(),
            characteristics: Vec::new(),
            suitable_for: Vec::new(),
            limitations: Vec::new(),
        }
    }

    /// Set the span applicability range (m)
    pub fn with_span_range(mut self, span_min: f64, span_max: f64) -> Self {
        self.span_min = Some(span_min);
        self.span_max = Some(span_max);
        self
    }

    /// Set the reference depth range (cm)
    pub fn with_depth_range(mut self, depth_min: f64, depth_max: f64) -> Self {
        self.depth_min = Some(depth_min);
        self.depth_max = Some(depth_max);
        self
    }

    /// Set the description text
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Effective lower span bound: `span_min`, or 0 when absent.
    pub fn effective_span_min(&self) -> f64 {
        self.span_min.unwrap_or(0.0)
    }

    /// Effective upper span bound: `span_max`, or +inf when absent or
    /// at the open-ended sentinel.
    pub fn effective_span_max(&self) -> f64 {
        match self.span_max {
            Some(max) if max < SENTINEL_THRESHOLD => max,
            _ => f64::INFINITY,
        }
    }

    /// Whether this material's declared span range covers `span_m`.
    ///
    /// Bounds are inclusive; a missing bound never excludes.
    pub fn covers_span(&self, span_m: f64) -> bool {
        span_m >= self.effective_span_min() && span_m <= self.effective_span_max()
    }

    /// Intrinsic efficiency ratio at the low end of the span range:
    /// reference depth (m) over reference span (m).
    ///
    /// Falls back to the generic L/20 ratio when geometry is missing
    /// or `span_min` is zero (no divide-by-zero).
    pub fn depth_span_ratio_min(&self) -> f64 {
        match (self.depth_min, self.span_min) {
            (Some(depth_cm), Some(span_m)) if span_m > 0.0 => (depth_cm / 100.0) / span_m,
            _ => DEFAULT_DEPTH_SPAN_RATIO,
        }
    }

    /// Efficiency ratio at the high end of the span range.
    ///
    /// Preference order:
    /// 1. `depth_max / span_max` when both exist and `span_max` is a
    ///    real bound (positive, below the sentinel threshold)
    /// 2. `depth_max / span_min` when the range is open-ended
    /// 3. the minimum ratio widened by 20%
    pub fn depth_span_ratio_max(&self) -> f64 {
        match (self.depth_max, self.span_max) {
            (Some(depth_cm), Some(span_m)) if span_m > 0.0 && span_m < SENTINEL_THRESHOLD => {
                return (depth_cm / 100.0) / span_m;
            }
            _ => {}
        }
        match (self.depth_max, self.span_min) {
            (Some(depth_cm), Some(span_m)) if span_m > 0.0 => (depth_cm / 100.0) / span_m,
            _ => self.depth_span_ratio_min() * FALLBACK_MAX_RATIO_FACTOR,
        }
    }
}
