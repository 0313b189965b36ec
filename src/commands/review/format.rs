//! Table rendering for review listings.
//!
//! Column widths are measured in display cells so CJK names and the
//! pending-assignment label stay aligned.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::models::Review;
use crate::shared::datetime::format_timestamp;

const COLUMNS: [(&str, usize); 7] = [
    ("ID", 12),
    ("ACTIVITY", 20),
    ("OWNER", 12),
    ("INSTRUCTOR", 12),
    ("COMMITTEE", 12),
    ("STATE", 19),
    ("UPDATED", 16),
];

/// Render reviews as a fixed-width table, or a short notice when empty.
pub fn render_reviews(reviews: &[Review]) -> String {
    if reviews.is_empty() {
        return "No reviews found.\n".to_string();
    }

    let mut lines = Vec::with_capacity(reviews.len() + 1);
    lines.push(render_row(COLUMNS.map(|(title, _)| title.to_string())));
    for review in reviews {
        lines.push(render_row([
            review.id.clone(),
            review.activity_id.clone(),
            review.owner.clone(),
            review.instructor.clone(),
            review.committee.clone(),
            review.state.as_str().to_string(),
            review
                .updated_at
                .as_ref()
                .map(format_timestamp)
                .unwrap_or_else(|| "-".to_string()),
        ]));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_row(cells: [String; 7]) -> String {
    let row: Vec<String> = cells
        .iter()
        .zip(COLUMNS)
        .map(|(cell, (_, width))| fit(cell, width))
        .collect();
    row.join("  ").trim_end().to_string()
}

/// Pad to `width` display cells, or cut and end with "…" when too wide.
fn fit(s: &str, width: usize) -> String {
    let current = s.width();
    if current <= width {
        return format!("{s}{}", " ".repeat(width - current));
    }

    let mut cut = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        cut.push(c);
        used += w;
    }
    cut.push('…');
    used += 1;
    format!("{cut}{}", " ".repeat(width.saturating_sub(used)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PENDING_ASSIGNMENT, ReviewState};
    use chrono::{TimeZone, Utc};
    use indoc::indoc;
    use rstest::rstest;

    #[rstest]
    #[case::pad("abc", 5, "abc  ")]
    #[case::exact("abcde", 5, "abcde")]
    #[case::cut("abcdefg", 5, "abcd…")]
    #[case::cjk_pad(PENDING_ASSIGNMENT, 8, "待分配  ")]
    #[case::cjk_cut("活动名称很长", 6, "活动… ")]
    #[case::empty("", 2, "  ")]
    fn test_fit(#[case] input: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(fit(input, width), expected);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_reviews(&[]), "No reviews found.\n");
    }

    #[test]
    fn test_render_reviews() {
        let review = Review {
            id: "a1".to_string(),
            activity_id: "Act1".to_string(),
            owner: "u1".to_string(),
            instructor: PENDING_ASSIGNMENT.to_string(),
            committee: PENDING_ASSIGNMENT.to_string(),
            state: ReviewState::CommitteePending,
            updated_at: Some(Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap()),
            ..Review::template()
        };

        let expected = indoc! {"
            ID            ACTIVITY              OWNER         INSTRUCTOR    COMMITTEE     STATE                UPDATED
            a1            Act1                  u1            待分配        待分配        committee_pending    2024-05-01 08:30
        "};
        assert_eq!(render_reviews(&[review]), expected);
    }

    #[test]
    fn test_render_missing_timestamp() {
        let output = render_reviews(&[Review::template()]);
        let last_line = output.lines().last().unwrap();
        assert!(last_line.ends_with("instructor_pending   -"), "{last_line}");
    }
}
