use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx;

// `likes` and `is_active` have no endpoint of their own; the draw honors
// `is_active` and everything else leaves them alone.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct KindWord {
    pub kind_word_id: i64,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub likes: i64,
    pub is_active: bool,
}
