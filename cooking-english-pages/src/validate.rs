//! Content checks the parser does not enforce.
//!
//! Rendering never depends on these; they exist so authoring mistakes such
//! as an out-of-range quiz answer surface at build time instead of as a
//! quiz nobody can pass.

use cooking_english_core::{LessonContent, ValidationIssue};

/// Highest star rating the review card is designed for.
pub const MAX_STARS: i64 = 5;

/// Validate one day's content. An empty list means valid.
#[must_use]
pub fn validate_lesson(content: &LessonContent, day: u32) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if content.meta.day != day {
        issues.push(ValidationIssue::new(
            "meta.day",
            format!("document says day {}, built as day {day}", content.meta.day),
        ));
    }

    for (id, quiz) in content.quizzes() {
        if quiz.options.is_empty() {
            issues.push(ValidationIssue::new(
                format!("{id}.options"),
                "quiz has no options",
            ));
            continue;
        }

        let in_range = usize::try_from(quiz.correct).is_ok_and(|i| i < quiz.options.len());
        if !in_range {
            issues.push(ValidationIssue::new(
                format!("{id}.correct"),
                format!(
                    "index {} is outside 0..{}",
                    quiz.correct,
                    quiz.options.len()
                ),
            ));
        }
    }

    if !(0..=MAX_STARS).contains(&content.review.stars) {
        issues.push(ValidationIssue::new(
            "review.stars",
            format!("{} is outside 0..={MAX_STARS}", content.review.stars),
        ));
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use cooking_english_core::{DayMeta, parse_lesson};

    fn lesson(raw: &str) -> LessonContent {
        parse_lesson(raw, &DayMeta::new(2, "Shumai", "シュウマイ", "🟡")).unwrap()
    }

    const VALID: &str = r#"{
        "quiz1": {"options": ["a", "b"], "correct": 1},
        "quiz2": {"options": ["a"], "correct": 0},
        "quiz3": {"options": ["a", "b", "c"], "correct": 2}
    }"#;

    #[test]
    fn test_valid_lesson() {
        assert!(validate_lesson(&lesson(VALID), 2).is_empty());
    }

    #[test]
    fn test_correct_out_of_range() {
        let content = lesson(r#"{
            "quiz1": {"options": ["a", "b"], "correct": 2},
            "quiz2": {"options": ["a"], "correct": -1},
            "quiz3": {"options": ["a"], "correct": 0}
        }"#);
        let issues = validate_lesson(&content, 2);
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, ["quiz1.correct", "quiz2.correct"]);
        assert_eq!(issues[0].message, "index 2 is outside 0..2");
    }

    #[test]
    fn test_missing_options() {
        let issues = validate_lesson(&lesson("{}"), 2);
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, ["quiz1.options", "quiz2.options", "quiz3.options"]);
    }

    #[test]
    fn test_meta_day_mismatch() {
        let issues = validate_lesson(&lesson(VALID), 3);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "meta.day");
    }

    #[test]
    fn test_stars_outside_scale() {
        let raw = VALID.replacen('{', r#"{"review": {"stars": 9},"#, 1);
        let issues = validate_lesson(&lesson(&raw), 2);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].to_string(), "review.stars: 9 is outside 0..=5");
    }
}
