use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use uuid::Uuid;
use validator::Validate;

use crate::catalog;
use crate::error::{AppError, AppResult};
use crate::models::mood::{CreateMoodRequest, MoodEntry, MoodListQuery, UpdateMoodRequest};
use crate::AppState;

const DEFAULT_LIST_LIMIT: i64 = 100;

/// Emoji/label binds for a partial update: both `None` when no score was
/// supplied, so COALESCE keeps the stored pair.
fn derived_mood_fields(
    score: Option<i16>,
) -> AppResult<(Option<&'static str>, Option<&'static str>)> {
    match score {
        Some(score) => {
            let info = catalog::lookup(score).ok_or_else(|| {
                AppError::Validation("Mood score must be between 1 and 5".into())
            })?;
            Ok((Some(info.emoji), Some(info.label)))
        }
        None => Ok((None, None)),
    }
}

/// No row back from `ON CONFLICT DO NOTHING RETURNING *` means another
/// entry already holds the date.
fn require_inserted(row: Option<MoodEntry>) -> AppResult<MoodEntry> {
    row.ok_or_else(|| AppError::Conflict("Mood entry already exists for this date".into()))
}

fn effective_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIST_LIMIT).max(0)
}

pub async fn create_mood(
    State(state): State<AppState>,
    Json(body): Json<CreateMoodRequest>,
) -> AppResult<(StatusCode, Json<MoodEntry>)> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let info = catalog::lookup(body.mood_score)
        .ok_or_else(|| AppError::Validation("Mood score must be between 1 and 5".into()))?;

    // The unique constraint on entry_date makes check-then-insert atomic.
    let row = sqlx::query_as::<_, MoodEntry>(
        r#"
        INSERT INTO mood_entries (id, entry_date, mood_score, emoji, label, notes)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (entry_date) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(body.entry_date)
    .bind(body.mood_score)
    .bind(info.emoji)
    .bind(info.label)
    .bind(&body.notes)
    .fetch_optional(&state.db)
    .await?;

    let entry = require_inserted(row)?;

    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn list_moods(
    State(state): State<AppState>,
    Query(query): Query<MoodListQuery>,
) -> AppResult<Json<Vec<MoodEntry>>> {
    let limit = effective_limit(query.limit);

    let entries = sqlx::query_as::<_, MoodEntry>(
        r#"
        SELECT * FROM mood_entries
        ORDER BY entry_date DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(entries))
}

pub async fn get_mood(
    State(state): State<AppState>,
    Path(entry_date): Path<NaiveDate>,
) -> AppResult<Json<MoodEntry>> {
    let entry = sqlx::query_as::<_, MoodEntry>(
        "SELECT * FROM mood_entries WHERE entry_date = $1",
    )
    .bind(entry_date)
    .fetch_optional(&state.db)
    .await?
    .ok_or(AppError::NotFound("Mood entry not found for this date".into()))?;

    Ok(Json(entry))
}

pub async fn update_mood(
    State(state): State<AppState>,
    Path(entry_date): Path<NaiveDate>,
    Json(body): Json<UpdateMoodRequest>,
) -> AppResult<Json<MoodEntry>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let (emoji, label) = derived_mood_fields(body.mood_score)?;

    // Single-statement partial update: COALESCE keeps the stored value for
    // every omitted field, so concurrent updates against the same date
    // cannot clobber each other's fields, and a concurrent delete simply
    // yields no row. A supplied score carries its derived emoji/label;
    // supplied notes replace the old ones (empty string clears).
    let entry = sqlx::query_as::<_, MoodEntry>(
        r#"
        UPDATE mood_entries SET
            mood_score = COALESCE($2, mood_score),
            emoji = COALESCE($3, emoji),
            label = COALESCE($4, label),
            notes = COALESCE($5, notes),
            updated_at = NOW()
        WHERE entry_date = $1
        RETURNING *
        "#,
    )
    .bind(entry_date)
    .bind(body.mood_score)
    .bind(emoji)
    .bind(label)
    .bind(&body.notes)
    .fetch_optional(&state.db)
    .await?
    .ok_or(AppError::NotFound("Mood entry not found".into()))?;

    Ok(Json(entry))
}

pub async fn delete_mood(
    State(state): State<AppState>,
    Path(entry_date): Path<NaiveDate>,
) -> AppResult<Json<serde_json::Value>> {
    let result = sqlx::query("DELETE FROM mood_entries WHERE entry_date = $1")
        .bind(entry_date)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Mood entry not found".into()));
    }

    Ok(Json(serde_json::json!({ "deleted": true })))
}

/// Score → emoji/label table for the client's mood picker.
pub async fn mood_options() -> Json<serde_json::Value> {
    let moods: serde_json::Map<String, serde_json::Value> = catalog::all()
        .map(|(score, info)| {
            (
                score.to_string(),
                serde_json::json!({ "emoji": info.emoji, "label": info.label }),
            )
        })
        .collect();

    Json(serde_json::json!({ "moods": moods }))
}
