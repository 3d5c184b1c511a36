//! Helper utilities for feed painting.

use chrono::{DateTime, Utc};
use eframe::egui::Rect;

use crate::model::ThreadSummary;
use crate::time_label;

/// Emoji offered by the row toolbar.
pub(crate) const QUICK_REACTIONS: [&str; 5] = ["👍", "❤", "😂", "🎉", "👀"];

/// Fraction of `rect`'s height inside `clip`.
///
/// A zero-height rect counts as fully visible when its edge lies inside
/// the clip and invisible otherwise.
pub(crate) fn visible_ratio(rect: Rect, clip: Rect) -> f32 {
    let height = rect.height();
    if height <= 0.0 {
        let inside = rect.top() >= clip.top() && rect.top() <= clip.bottom();
        return if inside { 1.0 } else { 0.0 };
    }
    let overlap = rect.bottom().min(clip.bottom()) - rect.top().max(clip.top());
    (overlap / height).clamp(0.0, 1.0)
}

/// Hover text for a reaction chip.
pub(crate) fn reaction_hint(count: usize, value: &str) -> String {
    let who = if count == 1 { "person" } else { "people" };
    format!("{} {} reacted with {}", count, who, value)
}

/// Label of the thread footer under a message.
pub(crate) fn thread_footer_text(summary: &ThreadSummary, now: DateTime<Utc>) -> String {
    let replies = if summary.count == 1 { "reply" } else { "replies" };
    format!(
        "{} {} · Last reply {}",
        summary.count,
        replies,
        time_label::time_ago(&summary.last_reply_at, &now)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::at;
    use eframe::egui::{pos2, Rect};

    fn rect(top: f32, bottom: f32) -> Rect {
        Rect::from_min_max(pos2(0.0, top), pos2(100.0, bottom))
    }

    #[test]
    fn test_visible_ratio() {
        let clip = rect(100.0, 200.0);
        assert_eq!(visible_ratio(rect(120.0, 130.0), clip), 1.0);
        assert_eq!(visible_ratio(rect(95.0, 105.0), clip), 0.5);
        assert_eq!(visible_ratio(rect(0.0, 50.0), clip), 0.0);
        assert_eq!(visible_ratio(rect(150.0, 150.0), clip), 1.0);
        assert_eq!(visible_ratio(rect(250.0, 250.0), clip), 0.0);
    }

    #[test]
    fn test_reaction_hint() {
        assert_eq!(reaction_hint(1, "👍"), "1 person reacted with 👍");
        assert_eq!(reaction_hint(3, "🎉"), "3 people reacted with 🎉");
    }

    #[test]
    fn test_thread_footer_text() {
        let summary = ThreadSummary {
            count: 2,
            name: Some("bob".into()),
            image: None,
            last_reply_at: at(2024, 3, 4, 10, 0),
        };
        let text = thread_footer_text(&summary, at(2024, 3, 4, 10, 30));
        assert!(text.starts_with("2 replies · Last reply "));
    }
}
