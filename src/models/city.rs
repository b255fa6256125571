use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Immutable reference data, seeded once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct City {
    pub id: i32,
    pub name: String,
}
