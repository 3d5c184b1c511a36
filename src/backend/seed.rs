//! Demo workspace loaded into the reference backend at startup.

use chrono::{DateTime, TimeDelta, Utc};

use super::store::ChatStore;
use crate::error::ChatResult;
use crate::model::MessageId;
use crate::protocol::MessageTarget;
use crate::rich_text;

const LINES: &[&str] = &[
    "morning all",
    "has anyone looked at the release checklist?",
    "yep, two items left",
    "I'll take the changelog",
    "thanks!",
    "build is green again",
    "nice",
    "lunch?",
    "in 10",
    "pushed the fix for the flaky test",
    "can you link the ticket?",
    "https://example.com/tickets/482",
    "reviewing now",
    "looks good to me",
    "merged",
];

const AUTHORS: &[&str] = &["alice", "alice", "bob", "carol", "carol", "bob"];

/// Gaps between consecutive messages, in minutes. Short gaps from the same
/// author produce compact rows.
const GAPS: &[i64] = &[2, 1, 14, 3, 45, 1, 2, 90];

pub const MESSAGES_PER_CHANNEL: usize = 60;

/// Populate `store` with members, two channels and a few days of history
/// ending shortly before `now`.
pub fn seed(store: &mut ChatStore, now: DateTime<Utc>) -> ChatResult<()> {
    let start = now - TimeDelta::days(4);
    let members: Vec<_> = ["alice", "bob", "carol"]
        .into_iter()
        .map(|name| store.ensure_member(name, Some(format!("{}.png", name))))
        .collect();

    let general = store.create_channel("general", start - TimeDelta::days(30))?;
    let random = store.create_channel("random", start - TimeDelta::days(2))?;

    // Spread the history over the four days before `now`, leaving the
    // last few hours quiet
    let total_gap: i64 = (0..MESSAGES_PER_CHANNEL).map(|i| GAPS[i % GAPS.len()]).sum();
    let scale = (TimeDelta::days(4) - TimeDelta::hours(12)).num_minutes() as f64 / total_gap as f64;

    // Lay out each channel's timeline, then insert everything in
    // chronological order since the store keeps creation times increasing
    let mut timeline = Vec::with_capacity(2 * MESSAGES_PER_CHANNEL);
    for (offset, channel) in [&general, &random].into_iter().enumerate() {
        let mut at = start;
        for i in 0..MESSAGES_PER_CHANNEL {
            let gap = GAPS[(i + offset) % GAPS.len()];
            let minutes = if gap <= 3 { gap } else { (gap as f64 * scale) as i64 };
            at += TimeDelta::minutes(minutes) + TimeDelta::seconds(offset as i64 * 20);
            timeline.push((at, offset, i, channel.id.clone()));
        }
    }
    timeline.sort_by_key(|(at, ..)| *at);

    let mut thread_parents: Vec<MessageId> = Vec::new();
    for (at, offset, i, channel) in timeline {
        let author = &members[member_index(AUTHORS[(i + offset) % AUTHORS.len()])];
        let line = LINES[(i * 7 + offset) % LINES.len()];
        let id = store.send_message(
            &author.id,
            &MessageTarget::Channel(channel),
            &rich_text::encode_plain(line),
            None,
            at,
        )?;

        if i % 9 == 4 {
            let reactor = &members[(i + 1) % members.len()];
            store.toggle_reaction(&reactor.id, &id, "👍")?;
        }
        if i % 13 == 6 {
            store.toggle_reaction(&author.id, &id, "🎉")?;
        }
        if i == MESSAGES_PER_CHANNEL - 8 {
            thread_parents.push(id);
        }
    }

    // A short thread on a recent message of each channel
    for parent in thread_parents {
        let thread = MessageTarget::Thread { parent };
        for (n, member) in members.iter().enumerate() {
            let body = rich_text::encode_plain(LINES[(n + 2) % LINES.len()]);
            store.send_message(&member.id, &thread, &body, None, now - TimeDelta::minutes(30))?;
        }
    }

    Ok(())
}

fn member_index(name: &str) -> usize {
    match name {
        "alice" => 0,
        "bob" => 1,
        _ => 2,
    }
}
