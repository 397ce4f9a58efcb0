use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// One mood record per calendar date. `emoji` and `label` are derived from
/// `mood_score` on every write; clients never set them directly.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MoodEntry {
    pub id: Uuid,
    pub entry_date: NaiveDate,
    pub mood_score: i16,
    pub emoji: String,
    pub label: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// POST /api/moods
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMoodRequest {
    pub entry_date: NaiveDate,

    #[validate(range(min = 1, max = 5, message = "Mood score must be between 1 and 5"))]
    pub mood_score: i16,

    #[validate(length(max = 2000, message = "Notes must be under 2000 characters"))]
    pub notes: Option<String>,
}

/// PUT /api/moods/{date} — partial update, all fields optional
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMoodRequest {
    #[validate(range(min = 1, max = 5, message = "Mood score must be between 1 and 5"))]
    pub mood_score: Option<i16>,

    #[validate(length(max = 2000, message = "Notes must be under 2000 characters"))]
    pub notes: Option<String>,
}

/// GET /api/moods query params
#[derive(Debug, Deserialize)]
pub struct MoodListQuery {
    pub limit: Option<i64>,
}
