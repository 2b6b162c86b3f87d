use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dataset::columns::suggest_selection;

/// A loaded job-posting table. Cells are never absent: missing values are
/// stored as empty strings and every row has exactly one cell per column.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub id: Uuid,
    pub source: String,
    pub loaded_at: DateTime<Utc>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            id: self.id,
            source: self.source.clone(),
            loaded_at: self.loaded_at,
            row_count: self.row_count(),
            columns: self.columns.clone(),
            suggested_mapping: suggest_selection(&self.columns),
        }
    }
}

/// A single posting projected onto the four semantic roles.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Posting {
    pub company: String,
    pub position: String,
    pub rating: String,
    pub description: String,
}

/// Column names chosen by the user for each role. Unset roles fall back to
/// the Indeed export defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ColumnSelection {
    pub description: Option<String>,
    pub company: Option<String>,
    pub rating: Option<String>,
    pub position: Option<String>,
}

/// Role -> column index, validated against a dataset header.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMapping {
    pub description: usize,
    pub company: usize,
    pub rating: Option<usize>,
    pub position: Option<usize>,
}

/// Resolved column names, echoed back to the client.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResolvedColumns {
    pub description: String,
    pub company: String,
    pub rating: Option<String>,
    pub position: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub id: Uuid,
    pub source: String,
    pub loaded_at: DateTime<Utc>,
    pub row_count: usize,
    pub columns: Vec<String>,
    pub suggested_mapping: ColumnSelection,
}
