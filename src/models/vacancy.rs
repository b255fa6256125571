use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An open position. `file_id == 0` means the vacancy has no attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Vacancy {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub creation_date: DateTime<Utc>,
    pub visible: bool,
    pub city_id: i32,
    pub file_id: i32,
}
