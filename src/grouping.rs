//! Date grouping and compact-row decisions for message feeds.
//!
//! The backend delivers feeds newest-first. Groups come out in order of
//! first encounter (so the most recent date leads) while messages inside a
//! group are oldest-first, because each message is pushed to the front of
//! its day's sequence. Both orders are observable in the UI and must not be
//! "fixed" by sorting.

use std::collections::{HashMap, VecDeque};

use chrono::{NaiveDate, TimeDelta, TimeZone};

use crate::model::Message;
use crate::time_label;

/// Same-author messages closer together than this are drawn compactly.
pub const COMPACT_THRESHOLD_MINUTES: i64 = 5;

/// All messages of one calendar day, oldest-first.
#[derive(Debug, Clone, PartialEq)]
pub struct DateGroup<'a> {
    pub date: NaiveDate,
    pub messages: Vec<&'a Message>,
}

/// A message with its compaction decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupedRow<'a> {
    pub message: &'a Message,
    pub compact: bool,
}

impl<'a> DateGroup<'a> {
    /// Group key in `yyyy-MM-dd` form.
    pub fn key(&self) -> String {
        time_label::date_key(self.date)
    }

    /// Rows of this group with compaction decided against the previous
    /// message of the same day only.
    pub fn rows(&self) -> impl Iterator<Item = GroupedRow<'a>> + '_ {
        self.messages.iter().enumerate().map(move |(i, &message)| {
            let previous = i.checked_sub(1).map(|p| self.messages[p]);
            GroupedRow {
                message,
                compact: is_compact(previous, message),
            }
        })
    }
}

/// Partition a newest-first feed into date groups.
///
/// `None` means the feed has not loaded yet and yields no groups.
pub fn group_by_date<'a, Tz: TimeZone>(
    messages: Option<&'a [Message]>,
    tz: &Tz,
) -> Vec<DateGroup<'a>> {
    let Some(messages) = messages else {
        return Vec::new();
    };

    let mut groups: Vec<(NaiveDate, VecDeque<&'a Message>)> = Vec::new();
    let mut slots: HashMap<NaiveDate, usize> = HashMap::new();

    for message in messages {
        let date = time_label::local_date(&message.created_at, tz);
        let slot = *slots.entry(date).or_insert_with(|| {
            groups.push((date, VecDeque::new()));
            groups.len() - 1
        });
        groups[slot].1.push_front(message);
    }

    groups
        .into_iter()
        .map(|(date, messages)| DateGroup {
            date,
            messages: messages.into(),
        })
        .collect()
}

/// Whether `message` continues the run started by `previous`.
pub fn is_compact(previous: Option<&Message>, message: &Message) -> bool {
    previous.is_some_and(|prev| {
        prev.member_id == message.member_id
            && message.created_at - prev.created_at
                < TimeDelta::minutes(COMPACT_THRESHOLD_MINUTES)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{at, ids, msg};
    use chrono::{FixedOffset, Utc};
    use proptest::prelude::*;

    fn compact_flags(group: &DateGroup<'_>) -> Vec<(String, bool)> {
        group
            .rows()
            .map(|r| (r.message.id.to_string(), r.compact))
            .collect()
    }

    #[test]
    fn test_single_day_is_oldest_first_with_compaction() {
        let feed = vec![
            msg("3", "A", at(2024, 3, 4, 10, 4)),
            msg("2", "A", at(2024, 3, 4, 10, 1)),
            msg("1", "A", at(2024, 3, 4, 9, 50)),
        ];
        let groups = group_by_date(Some(feed.as_slice()), &Utc);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key(), "2024-03-04");
        assert_eq!(ids(groups[0].messages.iter().copied()), vec!["1", "2", "3"]);
        assert_eq!(
            compact_flags(&groups[0]),
            vec![
                ("1".to_string(), false),
                ("2".to_string(), true),
                ("3".to_string(), true),
            ]
        );
    }

    #[test]
    fn test_two_days_most_recent_group_first() {
        let feed = vec![
            msg("4", "A", at(2024, 3, 5, 8, 0)),
            msg("3", "B", at(2024, 3, 5, 7, 0)),
            msg("2", "A", at(2024, 3, 4, 22, 0)),
            msg("1", "A", at(2024, 3, 4, 21, 0)),
        ];
        let groups = group_by_date(Some(feed.as_slice()), &Utc);

        let keys: Vec<String> = groups.iter().map(|g| g.key()).collect();
        assert_eq!(keys, vec!["2024-03-05", "2024-03-04"]);
        assert_eq!(ids(groups[0].messages.iter().copied()), vec!["3", "4"]);
        assert_eq!(ids(groups[1].messages.iter().copied()), vec!["1", "2"]);
    }

    #[test]
    fn test_undefined_feed_yields_no_groups() {
        assert!(group_by_date(None, &Utc).is_empty());
        assert!(group_by_date(Some(&[][..]), &Utc).is_empty());
    }

    #[test]
    fn test_author_change_resets_compaction() {
        let feed = vec![
            msg("3", "A", at(2024, 3, 4, 10, 2)),
            msg("2", "B", at(2024, 3, 4, 10, 1)),
            msg("1", "A", at(2024, 3, 4, 10, 0)),
        ];
        let groups = group_by_date(Some(feed.as_slice()), &Utc);
        assert!(groups[0].rows().all(|r| !r.compact));
    }

    #[test]
    fn test_threshold_is_strict() {
        let base = at(2024, 3, 4, 10, 0);
        let first = msg("1", "A", base);
        let just_under = msg("2", "A", base + TimeDelta::seconds(299));
        let exactly = msg("3", "A", base + TimeDelta::minutes(5));

        assert!(is_compact(Some(&first), &just_under));
        assert!(!is_compact(Some(&first), &exactly));
        assert!(!is_compact(None, &first));
    }

    #[test]
    fn test_midnight_boundary_never_compacts_across_days() {
        // Two minutes apart but on different calendar days
        let feed = vec![
            msg("2", "A", at(2024, 3, 5, 0, 1)),
            msg("1", "A", at(2024, 3, 4, 23, 59)),
        ];
        let groups = group_by_date(Some(feed.as_slice()), &Utc);
        assert_eq!(groups.len(), 2);
        assert!(groups.iter().flat_map(|g| g.rows()).all(|r| !r.compact));
    }

    #[test]
    fn test_grouping_follows_given_zone() {
        // 23:30 and 00:30 UTC are the same day at UTC-2
        let feed = vec![
            msg("2", "A", at(2024, 3, 5, 0, 30)),
            msg("1", "A", at(2024, 3, 4, 23, 30)),
        ];
        let minus_two = FixedOffset::west_opt(2 * 3600).unwrap();
        assert_eq!(group_by_date(Some(feed.as_slice()), &Utc).len(), 2);
        let groups = group_by_date(Some(feed.as_slice()), &minus_two);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key(), "2024-03-04");
    }

    fn newest_first_feed() -> impl Strategy<Value = Vec<Message>> {
        prop::collection::vec((0usize..3, 0i64..20_000), 0..40).prop_map(|steps| {
            let mut ts = at(2024, 3, 10, 23, 0);
            let mut feed = Vec::with_capacity(steps.len());
            for (i, (author, gap_secs)) in steps.into_iter().enumerate() {
                ts -= TimeDelta::seconds(gap_secs);
                let author = ["A", "B", "C"][author];
                feed.push(msg(&format!("m{}", i), author, ts));
            }
            feed
        })
    }

    proptest! {
        #[test]
        fn prop_round_trip_reproduces_input(feed in newest_first_feed()) {
            let groups = group_by_date(Some(feed.as_slice()), &Utc);
            let flattened: Vec<&str> = groups
                .iter()
                .flat_map(|g| g.messages.iter().rev().map(|m| m.id.as_str()))
                .collect();
            prop_assert_eq!(flattened, ids(&feed));
        }

        #[test]
        fn prop_grouping_is_idempotent(feed in newest_first_feed()) {
            let first = group_by_date(Some(feed.as_slice()), &Utc);
            let second = group_by_date(Some(feed.as_slice()), &Utc);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_compaction_rules_hold(feed in newest_first_feed()) {
            for group in group_by_date(Some(feed.as_slice()), &Utc) {
                let rows: Vec<GroupedRow<'_>> = group.rows().collect();
                if let Some(first) = rows.first() {
                    prop_assert!(!first.compact);
                }
                for pair in rows.windows(2) {
                    let (prev, cur) = (pair[0].message, pair[1].message);
                    let close = cur.created_at - prev.created_at
                        < TimeDelta::minutes(COMPACT_THRESHOLD_MINUTES);
                    if prev.member_id != cur.member_id || !close {
                        prop_assert!(!pair[1].compact);
                    } else {
                        prop_assert!(pair[1].compact);
                    }
                }
            }
        }
    }
}
