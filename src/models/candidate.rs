use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A job seeker profile. `file_id == 0` means no resume is attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Candidate {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub creation_date: DateTime<Utc>,
    pub city_id: i32,
    pub file_id: i32,
}
