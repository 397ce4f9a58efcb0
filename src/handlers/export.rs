use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::error::AppResult;
use crate::export::entries_to_csv;
use crate::models::mood::MoodEntry;
use crate::AppState;

pub async fn export_csv(State(state): State<AppState>) -> AppResult<Response> {
    let entries = sqlx::query_as::<_, MoodEntry>(
        "SELECT * FROM mood_entries ORDER BY entry_date DESC",
    )
    .fetch_all(&state.db)
    .await?;

    let csv = entries_to_csv(&entries);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"mood_entries.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}
