//! Report configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::error::{FacingError, Result};

/// Report shaping settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Keep points that matched no road (as `Unknown`).
    /// When false they are left out of the report entirely.
    #[serde(default = "defaults::enabled")]
    pub include_unmatched: bool,

    /// Header of the orientation column
    #[serde(default = "defaults::orientation_column")]
    pub orientation_column: String,

    /// Header for a leading point-id column; no id column when unset
    #[serde(default)]
    pub id_column: Option<String>,
}

impl ReportConfig {
    /// Column headers the report writes itself: the id column (when set),
    /// then the orientation column.
    pub fn reserved_columns(&self) -> impl Iterator<Item = &str> {
        self.id_column
            .as_deref()
            .into_iter()
            .chain(std::iter::once(self.orientation_column.as_str()))
    }

    /// Reject blank headers and an id column that shares the orientation
    /// column's header.
    pub fn validate(&self) -> Result<()> {
        if self.orientation_column.trim().is_empty() {
            return Err(FacingError::InvalidConfig(
                "report.orientation_column must not be empty".to_string(),
            ));
        }
        if let Some(id_column) = &self.id_column {
            if id_column.trim().is_empty() {
                return Err(FacingError::InvalidConfig(
                    "report.id_column must not be empty when set".to_string(),
                ));
            }
            if *id_column == self.orientation_column {
                return Err(FacingError::InvalidConfig(format!(
                    "report.id_column and report.orientation_column are both {:?}",
                    id_column
                )));
            }
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            include_unmatched: true,
            orientation_column: defaults::orientation_column(),
            id_column: None,
        }
    }
}
