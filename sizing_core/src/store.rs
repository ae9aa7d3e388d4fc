//! # Project History Store
//!
//! Persists the user's saved sizing decisions: each record ties a
//! project input to the material the user selected for it. The
//! history serializes to a `.siz` file as human-readable JSON (see
//! [`crate::file_io`] for atomic saves and locking).
//!
//! The engine itself never touches this store; results are recomputed
//! on demand from (ProjectInput, Material) and only the user's final
//! choice is persisted.
//!
//! ## Example
//!
//! ```rust
//! use sizing_core::project::{FunctionClass, ProjectInput};
//! use sizing_core::store::{ProjectHistory, ProjectRecord};
//!
//! let mut history = ProjectHistory::new();
//! let input = ProjectInput::new("Studio", 9.0, 6.0, FunctionClass::Residential);
//! let id = history.add(ProjectRecord::new(input, "reinforced-concrete"));
//! assert!(history.get(&id).is_some());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::project::ProjectInput;

/// Current schema version for .siz history files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// One saved sizing decision.
///
/// ## JSON Example
///
/// ```json
/// {
///   "id": "7f8c9e2a-0b1d-4e5f-8a9b-0c1d2e3f4a5b",
///   "input": {
///     "label": "Studio",
///     "span_m": 9.0,
///     "spacing_m": 6.0,
///     "function_class": "Residential",
///     "floors": 1,
///     "floor_height_m": 3.5
///   },
///   "selected_material_id": "reinforced-concrete",
///   "saved_at": "2026-08-25T10:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Record identity
    pub id: Uuid,

    /// The project parameters as entered
    pub input: ProjectInput,

    /// Catalog id of the material the user selected
    pub selected_material_id: String,

    /// When the selection was saved
    pub saved_at: DateTime<Utc>,
}

impl ProjectRecord {
    /// Create a record for a selection made now.
    pub fn new(input: ProjectInput, selected_material_id: impl Into<String>) -> Self {
        ProjectRecord {
            id: Uuid::new_v4(),
            input,
            selected_material_id: selected_material_id.into(),
            saved_at: Utc::now(),
        }
    }
}

/// Ordered history of saved sizing decisions, newest last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectHistory {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Saved records in insertion order
    pub records: Vec<ProjectRecord>,
}

impl ProjectHistory {
    /// Create an empty history at the current schema version.
    pub fn new() -> Self {
        ProjectHistory {
            version: SCHEMA_VERSION.to_string(),
            records: Vec::new(),
        }
    }

    /// Append a record, returning its id.
    pub fn add(&mut self, record: ProjectRecord) -> Uuid {
        let id = record.id;
        self.records.push(record);
        id
    }

    /// Look up a record by id.
    pub fn get(&self, id: &Uuid) -> Option<&ProjectRecord> {
        self.records.iter().find(|r| r.id == *id)
    }

    /// Remove a record by id, returning it if present.
    pub fn remove(&mut self, id: &Uuid) -> Option<ProjectRecord> {
        let idx = self.records.iter().position(|r| r.id == *id)?;
        Some(self.records.remove(idx))
    }

    /// The most recent records, newest first.
    pub fn recents(&self, count: usize) -> Vec<&ProjectRecord> {
        self.records.iter().rev().take(count).collect()
    }

    /// Number of saved records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the history has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for ProjectHistory {
    fn default() -> Self {
        ProjectHistory::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::FunctionClass;

    fn sample_input(label: &str) -> ProjectInput {
        ProjectInput::new(label, 9.0, 6.0, FunctionClass::Residential)
    }

    #[test]
    fn test_add_and_get() {
        let mut history = ProjectHistory::new();
        let id = history.add(ProjectRecord::new(sample_input("A"), "glulam"));

        let record = history.get(&id).unwrap();
        assert_eq!(record.selected_material_id, "glulam");
        assert_eq!(record.input.label, "A");
    }

    #[test]
    fn test_recents_newest_first() {
        let mut history = ProjectHistory::new();
        history.add(ProjectRecord::new(sample_input("first"), "clt"));
        history.add(ProjectRecord::new(sample_input("second"), "glulam"));
        history.add(ProjectRecord::new(sample_input("third"), "solid-brick"));

        let recents = history.recents(2);
        assert_eq!(recents.len(), 2);
        assert_eq!(recents[0].input.label, "third");
        assert_eq!(recents[1].input.label, "second");
    }

    #[test]
    fn test_remove() {
        let mut history = ProjectHistory::new();
        let id = history.add(ProjectRecord::new(sample_input("A"), "clt"));
        assert_eq!(history.len(), 1);

        let removed = history.remove(&id).unwrap();
        assert_eq!(removed.id, id);
        assert!(history.is_empty());
        assert!(history.remove(&id).is_none());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut history = ProjectHistory::new();
        history.add(ProjectRecord::new(sample_input("A"), "glulam"));

        let json = serde_json::to_string_pretty(&history).unwrap();
        let roundtrip: ProjectHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(history, roundtrip);
    }
}
