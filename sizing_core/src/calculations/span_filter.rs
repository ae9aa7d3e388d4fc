//! # Span Recommendation Filter
//!
//! Selects the materials whose declared span applicability covers a
//! project's primary span. This is a stable filter: output preserves
//! catalog order and applies no ranking of its own, so callers are
//! free to re-sort.
//!
//! An empty result is a valid "no recommendation" outcome, not an
//! error; the presentation layer decides how to report it.
//!
//! ## Example
//!
//! ```rust
//! use sizing_core::calculations::span_filter::applicable;
//! use sizing_core::materials::MaterialCatalog;
//!
//! let catalog = MaterialCatalog::builtin();
//! let candidates = applicable(9.0, catalog.all());
//! assert!(candidates.iter().all(|m| m.covers_span(9.0)));
//! ```

use crate::materials::Material;

/// Filter `materials` down to those applicable at `span_m`.
///
/// Inclusion rule per material:
/// - effective lower bound = `span_min`, or 0 when absent
/// - effective upper bound = `span_max`, or +inf when absent or at
///   the open-ended sentinel (999)
/// - included iff `lower <= span_m <= upper` (bounds inclusive)
///
/// Missing bounds never exclude a material. Callers are expected to
/// validate `span_m` beforehand (see [`crate::project::ProjectInput::validate`]);
/// a non-positive span simply matches nothing with bounded ranges.
pub fn applicable(span_m: f64, materials: &[Material]) -> Vec<&Material> {
    materials.iter().filter(|m| m.covers_span(span_m)).collect()
}
