//! Feed view composition: grouped, compaction-annotated rows plus the
//! pagination edge, ready for painting.
//!
//! Sections are kept in rendered order (most recent date first, as they come
//! out of [`group_by_date`]). Feeds flow in reverse, so the painter walks
//! [`FeedLayout::visual_order`] top to bottom: oldest edge first, then the
//! sections from the oldest date down to today.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::grouping::group_by_date;
use crate::model::{FeedPage, FeedStatus, MemberId, Message, MessageId};
use crate::pagination::SentinelKey;
use crate::time_label;

/// Which kind of feed is being shown.
#[derive(Clone, Debug, PartialEq)]
pub enum FeedVariant<'a> {
    Channel {
        name: &'a str,
        created_at: DateTime<Utc>,
    },
    Thread,
    Conversation {
        member_name: &'a str,
    },
}

impl FeedVariant<'_> {
    pub fn is_thread(&self) -> bool {
        matches!(self, FeedVariant::Thread)
    }
}

/// Viewer-dependent inputs, supplied by the host.
#[derive(Clone, Copy, Debug)]
pub struct FeedContext<'a> {
    pub viewer: Option<&'a MemberId>,
    pub editing: Option<&'a MessageId>,
    pub today: NaiveDate,
}

/// Everything the row painter needs for one message.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageRow<'a> {
    pub message: &'a Message,
    pub is_author: bool,
    pub is_compact: bool,
    pub hide_thread_button: bool,
    pub is_editing: bool,
}

/// One date group with its separator label.
#[derive(Clone, Debug, PartialEq)]
pub struct DateSection<'a> {
    pub key: String,
    pub label: String,
    pub rows: Vec<MessageRow<'a>>,
}

/// What sits at the oldest edge of the feed.
#[derive(Clone, Debug, PartialEq)]
pub enum FeedEdge<'a> {
    Sentinel(SentinelKey),
    ChannelHero {
        name: &'a str,
        created_at: DateTime<Utc>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct FeedLayout<'a> {
    pub edge: Option<FeedEdge<'a>>,
    pub loading_more: bool,
    /// Rendered order: most recent date first.
    pub sections: Vec<DateSection<'a>>,
}

/// Top-to-bottom paint order of a [`FeedLayout`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FeedItem<'r, 'a> {
    Edge(&'r FeedEdge<'a>),
    LoadingMore,
    Separator(&'r DateSection<'a>),
    Row(&'r MessageRow<'a>),
}

impl<'a> FeedLayout<'a> {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &MessageRow<'a>> {
        self.sections.iter().flat_map(|s| s.rows.iter())
    }

    pub fn sentinel(&self) -> Option<&SentinelKey> {
        match &self.edge {
            Some(FeedEdge::Sentinel(key)) => Some(key),
            _ => None,
        }
    }

    pub fn visual_order(&self) -> Vec<FeedItem<'_, 'a>> {
        let mut items = Vec::with_capacity(self.rows().count() + self.sections.len() + 2);
        if let Some(edge) = &self.edge {
            items.push(FeedItem::Edge(edge));
        }
        if self.loading_more {
            items.push(FeedItem::LoadingMore);
        }
        for section in self.sections.iter().rev() {
            items.push(FeedItem::Separator(section));
            items.extend(section.rows.iter().map(FeedItem::Row));
        }
        items
    }
}

/// Build the layout for one feed page.
///
/// `scope` names the feed (for example `channel:<id>`) and becomes part of
/// the sentinel key.
pub fn compose<'a, Tz: TimeZone>(
    page: &'a FeedPage,
    variant: &FeedVariant<'a>,
    scope: &str,
    ctx: &FeedContext<'_>,
    tz: &Tz,
) -> FeedLayout<'a> {
    let hide_thread_button = variant.is_thread();

    let sections = group_by_date(page.messages(), tz)
        .into_iter()
        .map(|group| DateSection {
            key: group.key(),
            label: time_label::date_label(group.date, ctx.today),
            rows: group
                .rows()
                .map(|row| MessageRow {
                    message: row.message,
                    is_author: ctx.viewer.is_some_and(|v| *v == row.message.member_id),
                    is_compact: row.compact,
                    hide_thread_button,
                    is_editing: ctx.editing.is_some_and(|e| *e == row.message.id),
                })
                .collect(),
        })
        .collect();

    let edge = match (page.status, variant) {
        (FeedStatus::LoadingFirstPage, _) => None,
        (FeedStatus::Exhausted, FeedVariant::Channel { name, created_at }) => {
            Some(FeedEdge::ChannelHero {
                name: *name,
                created_at: *created_at,
            })
        }
        _ => Some(FeedEdge::Sentinel(SentinelKey::new(
            scope,
            page.oldest().map(|m| &m.id),
        ))),
    };

    FeedLayout {
        edge,
        loading_more: page.status.is_loading_more(),
        sections,
    }
}

/// Text under the channel hero, e.g. "This channel was created on
/// March 4th, 2024. This is the very beginning of the #general channel."
pub fn channel_hero_text<Tz: TimeZone>(name: &str, created_at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let local = created_at.with_timezone(tz);
    let day = chrono::Datelike::day(&local);
    let suffix = match (day % 10, day % 100) {
        (1, n) if n != 11 => "st",
        (2, n) if n != 12 => "nd",
        (3, n) if n != 13 => "rd",
        _ => "th",
    };
    format!(
        "This channel was created on {} {}{}, {}. This is the very beginning of the #{} channel.",
        local.format("%B"),
        day,
        suffix,
        local.format("%Y"),
        name
    )
}
