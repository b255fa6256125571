use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored binary blob, owned by at most one vacancy or candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct FileRecord {
    pub id: i32,
    pub name: String,
    pub content: Vec<u8>,
}
