//! View configuration

use serde::{Deserialize, Serialize};

/// Pagination and banner settings for the list view
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Rows per page
    pub entry_limit: usize,
    /// Maximum number of page buttons shown at once
    pub max_size: usize,
    /// How long a flash banner stays visible
    pub flash_duration_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            entry_limit: 10,
            max_size: 5,
            flash_duration_ms: 3000,
        }
    }
}
