//! # Sizing Calculations
//!
//! The preliminary sizing pipeline, leaf-first:
//!
//! - [`span_filter`] - selects materials whose span range covers the project
//! - [`beam_depth`] - [min, max] beam depth band per material
//! - [`column_size`] - column area and equivalent square side per material
//! - [`engine`] - orchestrates the above into a candidate list
//!
//! Every step is a pure function of its arguments: no shared state,
//! no I/O, safe to call repeatedly or evaluate candidates in any
//! order. Inputs and results are JSON-serializable throughout.

pub mod beam_depth;
pub mod column_size;
pub mod engine;
pub mod span_filter;

pub use beam_depth::BeamDepthResult;
pub use column_size::ColumnSizeResult;
pub use engine::SizingResult;
