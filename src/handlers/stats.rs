use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::models::mood::MoodEntry;
use crate::stats::{summarize, MoodStats};
use crate::AppState;

pub async fn mood_summary(State(state): State<AppState>) -> AppResult<Json<MoodStats>> {
    let entries = sqlx::query_as::<_, MoodEntry>(
        "SELECT * FROM mood_entries ORDER BY entry_date DESC",
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(summarize(&entries)))
}
