//! Static score → {emoji, label} table for the five mood levels.

pub const MIN_SCORE: i16 = 1;
pub const MAX_SCORE: i16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodInfo {
    pub emoji: &'static str,
    pub label: &'static str,
}

const MOODS: [MoodInfo; 5] = [
    MoodInfo { emoji: "😢", label: "Very Sad" },
    MoodInfo { emoji: "😕", label: "Sad" },
    MoodInfo { emoji: "😐", label: "Neutral" },
    MoodInfo { emoji: "🙂", label: "Happy" },
    MoodInfo { emoji: "😄", label: "Very Happy" },
];

/// Returns `None` for scores outside 1..=5; the caller decides how to
/// surface that (handlers map it to a validation error).
pub fn lookup(score: i16) -> Option<&'static MoodInfo> {
    if (MIN_SCORE..=MAX_SCORE).contains(&score) {
        Some(&MOODS[(score - MIN_SCORE) as usize])
    } else {
        None
    }
}

/// All five levels with their scores, lowest first.
pub fn all() -> impl Iterator<Item = (i16, &'static MoodInfo)> {
    MOODS
        .iter()
        .enumerate()
        .map(|(i, info)| (i as i16 + MIN_SCORE, info))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_all_valid_scores() {
        for score in MIN_SCORE..=MAX_SCORE {
            assert!(lookup(score).is_some(), "Score {} should resolve", score);
        }
    }

    #[test]
    fn test_lookup_labels() {
        assert_eq!(lookup(1).unwrap().label, "Very Sad");
        assert_eq!(lookup(2).unwrap().label, "Sad");
        assert_eq!(lookup(3).unwrap().label, "Neutral");
        assert_eq!(lookup(4).unwrap().label, "Happy");
        assert_eq!(lookup(5).unwrap().label, "Very Happy");
    }

    #[test]
    fn test_lookup_emoji() {
        assert_eq!(lookup(1).unwrap().emoji, "😢");
        assert_eq!(lookup(5).unwrap().emoji, "😄");
    }

    #[test]
    fn test_lookup_out_of_range() {
        assert!(lookup(0).is_none());
        assert!(lookup(6).is_none());
        assert!(lookup(-1).is_none());
    }

    #[test]
    fn test_all_yields_five_levels_ascending() {
        let scores: Vec<i16> = all().map(|(s, _)| s).collect();
        assert_eq!(scores, vec![1, 2, 3, 4, 5]);
    }
}
