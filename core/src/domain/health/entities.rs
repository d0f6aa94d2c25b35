use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TableHealthStatus {
    pub rows: usize,
    pub dishes: usize,
    pub source: Option<String>,
    pub loaded_at: DateTime<Utc>,
    /// True when the source failed to load or had no rows.
    pub is_empty: bool,
}
