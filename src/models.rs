//! Board Models
//!
//! Task data structures and the persisted wire record.

use serde::{Deserialize, Serialize};

/// The three fixed workflow columns, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Column {
    #[default]
    #[serde(rename = "Not started")]
    NotStarted,
    #[serde(rename = "In progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
}

/// Fixed column order, also the flattened order of the persisted snapshot
pub const COLUMNS: [Column; 3] = [Column::NotStarted, Column::InProgress, Column::Completed];

impl Column {
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::NotStarted => "Not started",
            Column::InProgress => "In progress",
            Column::Completed => "Completed",
        }
    }

    /// Position in the fixed column order
    pub fn index(&self) -> usize {
        match self {
            Column::NotStarted => 0,
            Column::InProgress => 1,
            Column::Completed => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Column> {
        COLUMNS.get(index).copied()
    }
}

/// One task on the board. The id is assigned per session and never
/// persisted; the snapshot format stays positional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub column: Column,
}

/// Persisted record, one snapshot entry per task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTask {
    #[serde(rename = "taskTitle")]
    pub task_title: String,
    pub status: Column,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_task_wire_format() {
        let record = StoredTask {
            task_title: "Write report".to_string(),
            status: Column::InProgress,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"taskTitle":"Write report","status":"In progress"}"#);

        let back: StoredTask = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = r#"{"taskTitle":"x","status":"Archived"}"#;
        assert!(serde_json::from_str::<StoredTask>(json).is_err());
    }

    #[test]
    fn test_column_order() {
        for (i, column) in COLUMNS.iter().enumerate() {
            assert_eq!(column.index(), i);
            assert_eq!(Column::from_index(i), Some(*column));
        }
        assert_eq!(Column::from_index(3), None);
    }
}
