//! CSV serialization of the full entry set.

use crate::models::mood::MoodEntry;

pub const CSV_HEADER: &str = "Date,Mood Score,Emoji,Mood Label,Notes";

/// Renders one row per entry in the order given (List() order, newest
/// first). Emoji, label and notes are always quoted so embedded commas,
/// quotes and newlines survive any conformant CSV parser; absent notes
/// become an empty quoted field.
pub fn entries_to_csv(entries: &[MoodEntry]) -> String {
    let mut out = String::with_capacity(64 * (entries.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');

    for entry in entries {
        out.push_str(&entry.entry_date.to_string());
        out.push(',');
        out.push_str(&entry.mood_score.to_string());
        out.push(',');
        push_quoted(&mut out, &entry.emoji);
        out.push(',');
        push_quoted(&mut out, &entry.label);
        out.push(',');
        push_quoted(&mut out, entry.notes.as_deref().unwrap_or(""));
        out.push('\n');
    }

    out
}

fn push_quoted(out: &mut String, field: &str) {
    out.push('"');
    for ch in field.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use chrono::Utc;
    use uuid::Uuid;

    fn entry(date: &str, score: i16, notes: Option<&str>) -> MoodEntry {
        let info = catalog::lookup(score).unwrap();
        MoodEntry {
            id: Uuid::new_v4(),
            entry_date: date.parse().unwrap(),
            mood_score: score,
            emoji: info.emoji.to_string(),
            label: info.label.to_string(),
            notes: notes.map(String::from),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_export_is_header_only() {
        assert_eq!(entries_to_csv(&[]), "Date,Mood Score,Emoji,Mood Label,Notes\n");
    }

    #[test]
    fn test_row_format() {
        let csv = entries_to_csv(&[entry("2024-01-01", 4, Some("Good day"))]);
        assert_eq!(
            csv,
            "Date,Mood Score,Emoji,Mood Label,Notes\n2024-01-01,4,\"🙂\",\"Happy\",\"Good day\"\n"
        );
    }

    #[test]
    fn test_missing_notes_render_empty_field() {
        let csv = entries_to_csv(&[entry("2024-01-01", 3, None)]);
        assert!(csv.ends_with(",\"😐\",\"Neutral\",\"\"\n"));
        assert!(!csv.contains("null"));
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let csv = entries_to_csv(&[entry(
            "2024-01-01",
            5,
            Some(r#"Great, "really" great day"#),
        )]);
        assert!(csv.contains(r#""Great, ""really"" great day""#));
    }

    #[test]
    fn test_quoted_field_round_trips() {
        let original = "line one\nline two, with comma and \"quotes\"";
        let csv = entries_to_csv(&[entry("2024-01-01", 2, Some(original))]);
        let row = csv.split_once('\n').unwrap().1;
        // Parse the final quoted field back out per RFC 4180 rules
        let start = row.rfind(",\"").unwrap() + 2;
        let quoted = &row[start..row.len() - 2]; // strip closing quote + newline
        assert_eq!(quoted.replace("\"\"", "\""), original);
    }

    #[test]
    fn test_rows_preserve_input_order() {
        let csv = entries_to_csv(&[
            entry("2024-01-02", 5, None),
            entry("2024-01-01", 1, None),
        ]);
        let lines: Vec<&str> = csv.lines().collect();
        assert!(lines[1].starts_with("2024-01-02"));
        assert!(lines[2].starts_with("2024-01-01"));
    }
}
