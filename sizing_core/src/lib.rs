//! # sizing_core - Preliminary Structural Sizing Engine
//!
//! `sizing_core` answers one question: given a building description
//! (use class, primary span, column grid, floor stack), which
//! structural materials are worth considering, and roughly how big do
//! their members come out? It filters a material catalog by span
//! applicability and derives beam-depth and column-section estimates
//! from each material's own depth/span geometry.
//!
//! This is a rule-based engineering heuristic for early design, not a
//! structural analysis: no load paths, no code compliance, indicative
//! geometry only.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Forgiving Catalog**: Missing geometry degrades to generic
//!   ratios; only non-physical project input is an error
//!
//! ## Quick Start
//!
//! ```rust
//! use sizing_core::calculations::engine;
//! use sizing_core::materials::MaterialCatalog;
//! use sizing_core::project::{FunctionClass, ProjectInput};
//!
//! let catalog = MaterialCatalog::builtin();
//! let project = ProjectInput::new("Studio", 9.0, 6.0, FunctionClass::Residential);
//!
//! let candidates = engine::evaluate(&project, &catalog).unwrap();
//! assert!(!candidates.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Span filter, estimators, and the sizing engine
//! - [`materials`] - Typed material records and the built-in catalog
//! - [`project`] - Project input and building function classes
//! - [`store`] - History of saved project/material selections
//! - [`file_io`] - History file operations with atomic saves and locking
//! - [`units`] - Type-safe metric unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod materials;
pub mod project;
pub mod store;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::engine::{evaluate, SizingResult};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_history, save_history, FileLock};
pub use materials::{Material, MaterialCatalog, MaterialType};
pub use project::{FunctionClass, ProjectInput};
