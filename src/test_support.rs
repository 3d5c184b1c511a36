//! Message builders shared by unit tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::model::{FeedPage, FeedStatus, MemberId, Message, MessageId};

pub fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

pub fn msg(id: &str, author: &str, created_at: DateTime<Utc>) -> Message {
    Message {
        id: MessageId::new(id),
        member_id: MemberId::new(author),
        author_name: Some(author.to_string()),
        author_image: None,
        created_at,
        updated_at: None,
        body: format!("body of {}", id),
        image: None,
        reactions: Vec::new(),
        thread: None,
    }
}

pub fn page(messages: Vec<Message>, status: FeedStatus) -> FeedPage {
    FeedPage {
        results: Some(messages),
        status,
    }
}

pub fn ids<'a>(messages: impl IntoIterator<Item = &'a Message>) -> Vec<&'a str> {
    messages.into_iter().map(|m| m.id.as_str()).collect()
}
