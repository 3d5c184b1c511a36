//! In-memory document store behind the reference backend.
//!
//! Documents are stored flat (messages, reactions, conversations) and
//! joined on read: author profiles, reaction summaries and thread
//! summaries are computed every time a feed page is built.

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::{ChatError, ChatResult};
use crate::model::{
    Channel, ChannelId, ConversationId, Member, MemberId, Message, MessageId, ReactionSummary,
    ThreadSummary, Workspace, WorkspaceId,
};
use crate::protocol::{FeedQuery, MessageTarget};
use crate::validation;

#[derive(Debug, Clone)]
struct MessageDoc {
    id: MessageId,
    member_id: MemberId,
    channel_id: Option<ChannelId>,
    conversation_id: Option<ConversationId>,
    parent: Option<MessageId>,
    body: String,
    image: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
struct ReactionDoc {
    message_id: MessageId,
    member_id: MemberId,
    value: String,
}

#[derive(Debug, Clone)]
struct ConversationDoc {
    id: ConversationId,
    members: [MemberId; 2],
}

/// Which slice of a feed a query returns.
///
/// Feeds only ever grow: everything created at or after `since` is kept, and
/// `older` more messages are added below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedWindow {
    pub since: Option<DateTime<Utc>>,
    pub older: usize,
}

impl FeedWindow {
    /// The newest `count` messages.
    pub fn newest(count: usize) -> Self {
        Self {
            since: None,
            older: count,
        }
    }
}

/// One page of a feed query, newest-first.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPage {
    pub messages: Vec<Message>,
    pub has_more: bool,
}

#[derive(Debug)]
pub struct ChatStore {
    workspace: Workspace,
    members: Vec<Member>,
    channels: Vec<Channel>,
    conversations: Vec<ConversationDoc>,
    /// Creation order, which is also `created_at` order.
    messages: Vec<MessageDoc>,
    reactions: Vec<ReactionDoc>,
    next_id: u64,
}

impl ChatStore {
    pub fn new(workspace_name: &str) -> Self {
        Self {
            workspace: Workspace {
                id: WorkspaceId::new("w1"),
                name: workspace_name.to_string(),
            },
            members: Vec::new(),
            channels: Vec::new(),
            conversations: Vec::new(),
            messages: Vec::new(),
            reactions: Vec::new(),
            next_id: 1,
        }
    }

    fn fresh_id(&mut self, prefix: &str) -> String {
        let id = format!("{}{}", prefix, self.next_id);
        self.next_id += 1;
        id
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn member(&self, id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|m| &m.id == id)
    }

    /// Find a member by display name, creating the membership if needed.
    pub fn ensure_member(&mut self, name: &str, image: Option<String>) -> Member {
        if let Some(member) = self.members.iter().find(|m| m.name == name) {
            return member.clone();
        }
        let member = Member {
            id: MemberId::new(self.fresh_id("u")),
            name: name.to_string(),
            image,
        };
        self.members.push(member.clone());
        member
    }

    pub fn create_channel(&mut self, name: &str, now: DateTime<Utc>) -> ChatResult<Channel> {
        let name = validation::validate_channel_name(name).map_err(ChatError::Invalid)?;
        if self.channels.iter().any(|c| c.name == name) {
            return Err(ChatError::DuplicateChannel(name));
        }
        let channel = Channel {
            id: ChannelId::new(self.fresh_id("c")),
            workspace_id: self.workspace.id.clone(),
            name,
            created_at: now,
        };
        self.channels.push(channel.clone());
        Ok(channel)
    }

    /// Rename a channel, applying the same normalization as creation.
    pub fn rename_channel(&mut self, id: &ChannelId, name: &str) -> ChatResult<Channel> {
        let name = validation::validate_channel_name(name).map_err(ChatError::Invalid)?;
        if self.channels.iter().any(|c| c.name == name && &c.id != id) {
            return Err(ChatError::DuplicateChannel(name));
        }
        let channel = self
            .channels
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| ChatError::ChannelNotFound(id.clone()))?;
        channel.name = name;
        Ok(channel.clone())
    }

    /// Remove a channel with every message posted in it, replies and
    /// reactions included.
    pub fn delete_channel(&mut self, id: &ChannelId) -> ChatResult<Channel> {
        let index = self
            .channels
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| ChatError::ChannelNotFound(id.clone()))?;
        let channel = self.channels.remove(index);

        // Replies carry their parent's channel
        self.messages.retain(|m| m.channel_id.as_ref() != Some(id));
        let live: Vec<MessageId> = self.messages.iter().map(|m| m.id.clone()).collect();
        self.reactions.retain(|r| live.contains(&r.message_id));
        Ok(channel)
    }

    pub fn rename_workspace(&mut self, name: &str) -> ChatResult<Workspace> {
        let name = validation::validate_workspace_name(name).map_err(ChatError::Invalid)?;
        self.workspace.name = name;
        Ok(self.workspace.clone())
    }

    pub fn conversation_with(&mut self, a: &MemberId, b: &MemberId) -> ChatResult<ConversationId> {
        for id in [a, b] {
            if self.member(id).is_none() {
                return Err(ChatError::MemberNotFound(id.clone()));
            }
        }
        if let Some(existing) = self
            .conversations
            .iter()
            .find(|c| c.members.contains(a) && c.members.contains(b))
        {
            return Ok(existing.id.clone());
        }
        let id = ConversationId::new(self.fresh_id("d"));
        self.conversations.push(ConversationDoc {
            id: id.clone(),
            members: [a.clone(), b.clone()],
        });
        Ok(id)
    }

    /// Insert a message. Creation times are kept strictly increasing so each
    /// feed stays ordered even when the clock repeats.
    pub fn send_message(
        &mut self,
        author: &MemberId,
        target: &MessageTarget,
        body: &str,
        image: Option<String>,
        now: DateTime<Utc>,
    ) -> ChatResult<MessageId> {
        validation::validate_message_body(body, image.is_some()).map_err(ChatError::Invalid)?;
        if self.member(author).is_none() {
            return Err(ChatError::MemberNotFound(author.clone()));
        }

        let (channel_id, conversation_id, parent) = match target {
            MessageTarget::Channel(id) => {
                self.channel(id)?;
                (Some(id.clone()), None, None)
            }
            MessageTarget::Conversation(id) => {
                if !self.conversations.iter().any(|c| &c.id == id) {
                    return Err(ChatError::ConversationNotFound(id.clone()));
                }
                (None, Some(id.clone()), None)
            }
            MessageTarget::Thread { parent } => {
                let doc = self.doc(parent)?;
                if doc.parent.is_some() {
                    return Err(ChatError::NestedThread);
                }
                (
                    doc.channel_id.clone(),
                    doc.conversation_id.clone(),
                    Some(parent.clone()),
                )
            }
        };

        let created_at = match self.messages.last() {
            Some(last) if now <= last.created_at => last.created_at + TimeDelta::milliseconds(1),
            _ => now,
        };
        let id = MessageId::new(self.fresh_id("m"));
        self.messages.push(MessageDoc {
            id: id.clone(),
            member_id: author.clone(),
            channel_id,
            conversation_id,
            parent,
            body: body.to_string(),
            image,
            created_at,
            updated_at: None,
        });
        Ok(id)
    }

    pub fn edit_message(
        &mut self,
        author: &MemberId,
        id: &MessageId,
        body: &str,
        now: DateTime<Utc>,
    ) -> ChatResult<()> {
        validation::validate_message_body(body, false).map_err(ChatError::Invalid)?;
        let doc = self
            .messages
            .iter_mut()
            .find(|m| &m.id == id)
            .ok_or_else(|| ChatError::MessageNotFound(id.clone()))?;
        if &doc.member_id != author {
            return Err(ChatError::NotAuthor(id.clone()));
        }
        doc.body = body.to_string();
        doc.updated_at = Some(now);
        Ok(())
    }

    /// Delete a message together with its replies and reactions.
    pub fn delete_message(&mut self, author: &MemberId, id: &MessageId) -> ChatResult<()> {
        let doc = self.doc(id)?;
        if &doc.member_id != author {
            return Err(ChatError::NotAuthor(id.clone()));
        }
        self.messages
            .retain(|m| &m.id != id && m.parent.as_ref() != Some(id));
        let live: Vec<MessageId> = self.messages.iter().map(|m| m.id.clone()).collect();
        self.reactions.retain(|r| live.contains(&r.message_id));
        Ok(())
    }

    /// Add the member's reaction, or remove it if already present.
    pub fn toggle_reaction(
        &mut self,
        member: &MemberId,
        message: &MessageId,
        value: &str,
    ) -> ChatResult<()> {
        self.doc(message)?;
        let existing = self.reactions.iter().position(|r| {
            &r.message_id == message && &r.member_id == member && r.value == value
        });
        match existing {
            Some(idx) => {
                self.reactions.remove(idx);
            }
            None => self.reactions.push(ReactionDoc {
                message_id: message.clone(),
                member_id: member.clone(),
                value: value.to_string(),
            }),
        }
        Ok(())
    }

    /// Newest-first slice of a feed described by `window`.
    pub fn query(&self, query: &FeedQuery, window: FeedWindow) -> ChatResult<QueryPage> {
        match query {
            FeedQuery::Channel(id) => {
                self.channel(id)?;
            }
            FeedQuery::Conversation(id) => {
                if !self.conversations.iter().any(|c| &c.id == id) {
                    return Err(ChatError::ConversationNotFound(id.clone()));
                }
            }
            FeedQuery::Thread { parent } => {
                self.doc(parent)?;
            }
        }

        let mut matching = self
            .messages
            .iter()
            .rev()
            .filter(|m| matches_query(m, query))
            .peekable();
        let mut messages: Vec<Message> = Vec::new();
        if let Some(since) = window.since {
            while let Some(doc) = matching.next_if(|m| m.created_at >= since) {
                messages.push(self.hydrate(doc));
            }
        }
        messages.extend(
            matching
                .by_ref()
                .take(window.older)
                .map(|doc| self.hydrate(doc)),
        );
        let has_more = matching.next().is_some();
        Ok(QueryPage { messages, has_more })
    }

    /// A single hydrated message.
    pub fn message(&self, id: &MessageId) -> Option<Message> {
        self.messages
            .iter()
            .find(|m| &m.id == id)
            .map(|doc| self.hydrate(doc))
    }

    fn channel(&self, id: &ChannelId) -> ChatResult<&Channel> {
        self.channels
            .iter()
            .find(|c| &c.id == id)
            .ok_or_else(|| ChatError::ChannelNotFound(id.clone()))
    }

    fn doc(&self, id: &MessageId) -> ChatResult<&MessageDoc> {
        self.messages
            .iter()
            .find(|m| &m.id == id)
            .ok_or_else(|| ChatError::MessageNotFound(id.clone()))
    }

    fn hydrate(&self, doc: &MessageDoc) -> Message {
        let author = self.member(&doc.member_id);
        Message {
            id: doc.id.clone(),
            member_id: doc.member_id.clone(),
            author_name: author.map(|a| a.name.clone()),
            author_image: author.and_then(|a| a.image.clone()),
            created_at: doc.created_at,
            updated_at: doc.updated_at,
            body: doc.body.clone(),
            image: doc.image.clone(),
            reactions: self.reaction_summaries(&doc.id),
            thread: self.thread_summary(&doc.id),
        }
    }

    fn reaction_summaries(&self, message: &MessageId) -> Vec<ReactionSummary> {
        let mut summaries: Vec<ReactionSummary> = Vec::new();
        for reaction in self.reactions.iter().filter(|r| &r.message_id == message) {
            match summaries.iter_mut().find(|s| s.value == reaction.value) {
                Some(summary) => {
                    summary.count += 1;
                    summary.member_ids.push(reaction.member_id.clone());
                }
                None => summaries.push(ReactionSummary {
                    value: reaction.value.clone(),
                    count: 1,
                    member_ids: vec![reaction.member_id.clone()],
                }),
            }
        }
        summaries
    }

    fn thread_summary(&self, message: &MessageId) -> Option<ThreadSummary> {
        let replies: Vec<&MessageDoc> = self
            .messages
            .iter()
            .filter(|m| m.parent.as_ref() == Some(message))
            .collect();
        let last = replies.last()?;
        let replier = self.member(&last.member_id);
        Some(ThreadSummary {
            count: replies.len(),
            name: replier.map(|m| m.name.clone()),
            image: replier.and_then(|m| m.image.clone()),
            last_reply_at: last.created_at,
        })
    }
}

fn matches_query(doc: &MessageDoc, query: &FeedQuery) -> bool {
    match query {
        FeedQuery::Channel(id) => doc.parent.is_none() && doc.channel_id.as_ref() == Some(id),
        FeedQuery::Conversation(id) => {
            doc.parent.is_none() && doc.conversation_id.as_ref() == Some(id)
        }
        FeedQuery::Thread { parent } => doc.parent.as_ref() == Some(parent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::at;

    struct Fixture {
        store: ChatStore,
        alice: MemberId,
        bob: MemberId,
        general: ChannelId,
    }

    fn fixture() -> Fixture {
        let mut store = ChatStore::new("Acme");
        let alice = store.ensure_member("alice", None).id;
        let bob = store.ensure_member("bob", Some("bob.png".into())).id;
        let general = store.create_channel("general", at(2024, 1, 1, 9, 0)).unwrap().id;
        Fixture {
            store,
            alice,
            bob,
            general,
        }
    }

    fn send(f: &mut Fixture, author: &MemberId, body: &str, min: u32) -> MessageId {
        let target = MessageTarget::Channel(f.general.clone());
        f.store
            .send_message(author, &target, body, None, at(2024, 3, 4, 10, min))
            .unwrap()
    }

    #[test]
    fn test_query_pages_newest_first() {
        let mut f = fixture();
        let (alice, bob) = (f.alice.clone(), f.bob.clone());
        for min in 0..5 {
            let author = if min % 2 == 0 { &alice } else { &bob };
            send(&mut f, author, &format!("msg {}", min), min);
        }

        let query = FeedQuery::Channel(f.general.clone());
        let first = f.store.query(&query, FeedWindow::newest(3)).unwrap();
        let bodies: Vec<&str> = first.messages.iter().map(|m| m.body.as_str()).collect();
        assert_eq!(bodies, vec!["msg 4", "msg 3", "msg 2"]);
        assert!(first.has_more);
        assert_eq!(first.messages[1].author_name.as_deref(), Some("bob"));

        let all = f.store.query(&query, FeedWindow::newest(5)).unwrap();
        assert_eq!(all.messages.len(), 5);
        assert!(!all.has_more);
    }

    #[test]
    fn test_window_keeps_everything_since_its_anchor() {
        let mut f = fixture();
        let alice = f.alice.clone();
        for min in 0..6 {
            send(&mut f, &alice, &format!("msg {}", min), min);
        }
        let query = FeedQuery::Channel(f.general.clone());
        let first = f.store.query(&query, FeedWindow::newest(3)).unwrap();
        let since = first.messages.last().map(|m| m.created_at);

        // New messages arrive on top; the anchored window grows instead of
        // sliding
        send(&mut f, &alice, "late 1", 30);
        send(&mut f, &alice, "late 2", 31);
        let live = f.store.query(&query, FeedWindow { since, older: 0 }).unwrap();
        let bodies: Vec<&str> = live.messages.iter().map(|m| m.body.as_str()).collect();
        assert_eq!(bodies, vec!["late 2", "late 1", "msg 5", "msg 4", "msg 3"]);
        assert!(live.has_more);

        // One more page below the anchor
        let grown = f.store.query(&query, FeedWindow { since, older: 2 }).unwrap();
        assert_eq!(grown.messages.len(), 7);
        assert_eq!(grown.messages[6].body, "msg 1");
        assert!(grown.has_more);
    }

    #[test]
    fn test_creation_times_stay_strictly_increasing() {
        let mut f = fixture();
        let alice = f.alice.clone();
        send(&mut f, &alice, "a", 7);
        send(&mut f, &alice, "b", 7);
        send(&mut f, &alice, "c", 3);
        let page = f
            .store
            .query(&FeedQuery::Channel(f.general.clone()), FeedWindow::newest(10))
            .unwrap();
        let times: Vec<_> = page.messages.iter().map(|m| m.created_at).collect();
        assert!(times.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_thread_replies_are_separate_feed_with_summary() {
        let mut f = fixture();
        let (alice, bob) = (f.alice.clone(), f.bob.clone());
        let parent = send(&mut f, &alice, "question", 0);
        let thread = MessageTarget::Thread {
            parent: parent.clone(),
        };
        f.store
            .send_message(&bob, &thread, "answer", None, at(2024, 3, 4, 10, 5))
            .unwrap();
        let reply = f
            .store
            .send_message(&bob, &thread, "more", None, at(2024, 3, 4, 10, 6))
            .unwrap();

        let channel = f
            .store
            .query(&FeedQuery::Channel(f.general.clone()), FeedWindow::newest(10))
            .unwrap();
        assert_eq!(channel.messages.len(), 1);
        let summary = channel.messages[0].thread.clone().unwrap();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.name.as_deref(), Some("bob"));
        assert_eq!(summary.image.as_deref(), Some("bob.png"));
        assert_eq!(summary.last_reply_at, at(2024, 3, 4, 10, 6));

        let replies = f
            .store
            .query(&FeedQuery::Thread { parent: parent.clone() }, FeedWindow::newest(10))
            .unwrap();
        assert_eq!(replies.messages.len(), 2);

        let nested = MessageTarget::Thread { parent: reply };
        assert_eq!(
            f.store.send_message(&alice, &nested, "x", None, at(2024, 3, 4, 11, 0)),
            Err(ChatError::NestedThread)
        );
    }

    #[test]
    fn test_reactions_toggle_and_aggregate() {
        let mut f = fixture();
        let (alice, bob) = (f.alice.clone(), f.bob.clone());
        let id = send(&mut f, &alice, "hi", 0);
        f.store.toggle_reaction(&alice, &id, "👍").unwrap();
        f.store.toggle_reaction(&bob, &id, "👍").unwrap();
        f.store.toggle_reaction(&bob, &id, "🎉").unwrap();

        let msg = f.store.message(&id).unwrap();
        assert_eq!(msg.reactions.len(), 2);
        assert_eq!(msg.reactions[0].value, "👍");
        assert_eq!(msg.reactions[0].count, 2);
        assert!(msg.reactions[0].reacted_by(&bob));

        f.store.toggle_reaction(&bob, &id, "👍").unwrap();
        let msg = f.store.message(&id).unwrap();
        assert_eq!(msg.reactions[0].count, 1);
        assert!(!msg.reactions[0].reacted_by(&bob));
    }

    #[test]
    fn test_only_author_edits_and_deletes() {
        let mut f = fixture();
        let (alice, bob) = (f.alice.clone(), f.bob.clone());
        let id = send(&mut f, &alice, "draft", 0);
        let later = at(2024, 3, 4, 12, 0);

        assert_eq!(
            f.store.edit_message(&bob, &id, "hijack", later),
            Err(ChatError::NotAuthor(id.clone()))
        );
        f.store.edit_message(&alice, &id, "final", later).unwrap();
        let msg = f.store.message(&id).unwrap();
        assert_eq!(msg.body, "final");
        assert_eq!(msg.updated_at, Some(later));

        assert!(f.store.delete_message(&bob, &id).is_err());
        f.store.toggle_reaction(&bob, &id, "👍").unwrap();
        f.store.delete_message(&alice, &id).unwrap();
        assert!(f.store.message(&id).is_none());
        assert!(f.store.reactions.is_empty());
    }

    #[test]
    fn test_channel_creation_rules() {
        let mut f = fixture();
        let now = at(2024, 3, 4, 9, 0);
        let created = f.store.create_channel("Plan Budget", now).unwrap();
        assert_eq!(created.name, "plan-budget");
        assert_eq!(
            f.store.create_channel("plan budget", now),
            Err(ChatError::DuplicateChannel("plan-budget".into()))
        );
        assert!(matches!(f.store.create_channel("ab", now), Err(ChatError::Invalid(_))));
    }

    #[test]
    fn test_rename_channel_normalizes_and_keeps_names_unique() {
        let mut f = fixture();
        let now = at(2024, 3, 4, 9, 0);
        let random = f.store.create_channel("random", now).unwrap().id;

        let renamed = f.store.rename_channel(&random, "Off Topic").unwrap();
        assert_eq!(renamed.name, "off-topic");
        assert_eq!(renamed.id, random);
        // Keeping its own name is not a clash
        assert!(f.store.rename_channel(&random, "off-topic").is_ok());
        assert_eq!(
            f.store.rename_channel(&random, "General"),
            Err(ChatError::DuplicateChannel("general".into()))
        );
        assert!(matches!(
            f.store.rename_channel(&random, "x"),
            Err(ChatError::Invalid(_))
        ));
        assert_eq!(
            f.store.rename_channel(&ChannelId::new("nope"), "valid-name"),
            Err(ChatError::ChannelNotFound(ChannelId::new("nope")))
        );
    }

    #[test]
    fn test_delete_channel_removes_its_messages() {
        let mut f = fixture();
        let (alice, bob) = (f.alice.clone(), f.bob.clone());
        let random = f.store.create_channel("random", at(2024, 3, 4, 9, 0)).unwrap().id;
        let parent = send(&mut f, &alice, "root", 0);
        f.store
            .send_message(
                &bob,
                &MessageTarget::Thread { parent: parent.clone() },
                "reply",
                None,
                at(2024, 3, 4, 10, 1),
            )
            .unwrap();
        f.store.toggle_reaction(&bob, &parent, "👍").unwrap();
        let kept = f
            .store
            .send_message(
                &alice,
                &MessageTarget::Channel(random.clone()),
                "elsewhere",
                None,
                at(2024, 3, 4, 10, 2),
            )
            .unwrap();

        let general = f.general.clone();
        let deleted = f.store.delete_channel(&general).unwrap();
        assert_eq!(deleted.name, "general");
        assert!(f.store.channels().iter().all(|c| c.id != general));
        assert_eq!(f.store.messages.len(), 1);
        assert_eq!(f.store.messages[0].id, kept);
        assert!(f.store.reactions.is_empty());
        assert_eq!(
            f.store.query(&FeedQuery::Channel(general.clone()), FeedWindow::newest(10)),
            Err(ChatError::ChannelNotFound(general.clone()))
        );
        assert!(f.store.delete_channel(&general).is_err());
    }

    #[test]
    fn test_rename_workspace() {
        let mut f = fixture();
        assert_eq!(f.store.rename_workspace("  Acme Labs ").unwrap().name, "Acme Labs");
        assert!(f.store.rename_workspace("ab").is_err());
        assert_eq!(f.store.workspace().name, "Acme Labs");
    }

    #[test]
    fn test_conversations_are_shared_per_pair() {
        let mut f = fixture();
        let (alice, bob) = (f.alice.clone(), f.bob.clone());
        let one = f.store.conversation_with(&alice, &bob).unwrap();
        let two = f.store.conversation_with(&bob, &alice).unwrap();
        assert_eq!(one, two);

        let target = MessageTarget::Conversation(one.clone());
        f.store
            .send_message(&alice, &target, "psst", None, at(2024, 3, 4, 10, 0))
            .unwrap();
        let page = f
            .store
            .query(&FeedQuery::Conversation(one), FeedWindow::newest(10))
            .unwrap();
        assert_eq!(page.messages.len(), 1);
        let channel = f
            .store
            .query(&FeedQuery::Channel(f.general.clone()), FeedWindow::newest(10))
            .unwrap();
        assert!(channel.messages.is_empty());
    }

    #[test]
    fn test_unknown_targets_are_errors() {
        let f = fixture();
        assert_eq!(
            f.store
                .query(&FeedQuery::Channel(ChannelId::new("nope")), FeedWindow::newest(10)),
            Err(ChatError::ChannelNotFound(ChannelId::new("nope")))
        );
        assert!(f
            .store
            .query(&FeedQuery::Thread { parent: MessageId::new("nope") }, FeedWindow::newest(10))
            .is_err());
    }
}
