//! Local peer chat controller.
//!
//! # Invariants
//! - Messages never leave the device; the log is one local slot.
//! - The selected room is persisted separately from the message log.
//! - Blank sends are ignored without touching storage.
//! - "Self" means `author == nickname`; there is no other identity check.

use crate::model::chat::{seed_messages, ChatMessage, ChatRoom};
use crate::model::profile::Session;
use crate::repo::kv_repo::KvRepository;
use crate::store::keys;
use crate::store::kv_store::KeyValueStore;
use log::{debug, info};

/// Author label used for the local user's own bubbles.
pub const SELF_LABEL: &str = "You";

/// Render-ready view of one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBubble<'a> {
    /// `You` for self-authored messages, otherwise the stored author.
    pub author_label: &'a str,
    pub text: &'a str,
    pub is_self: bool,
}

pub struct ChatController<'s, R: KvRepository> {
    store: &'s KeyValueStore<R>,
    nickname: String,
    current_room: ChatRoom,
    messages: Vec<ChatMessage>,
    draft: String,
}

impl<'s, R: KvRepository> ChatController<'s, R> {
    /// Loads the room selection and message log; seeds the log when absent.
    pub fn new(store: &'s KeyValueStore<R>, session: &Session) -> Self {
        let current_room = store.load(keys::CHAT_ROOM, ChatRoom::General);
        let messages = store.load_or_else(keys::MESSAGES, seed_messages);

        Self {
            store,
            nickname: session.display_name().to_string(),
            current_room,
            messages,
            draft: String::new(),
        }
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn current_room(&self) -> ChatRoom {
        self.current_room
    }

    /// Full log in insertion order, all rooms.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn switch_room(&mut self, room: ChatRoom) {
        self.current_room = room;
        self.store.save(keys::CHAT_ROOM, &room);
        debug!("event=chat_switch_room module=chat status=ok room={room}");
    }

    /// Sends the drafted text.
    pub fn send_draft(&mut self) -> bool {
        let text = self.draft.clone();
        self.send_message(&text)
    }

    /// Appends `text` (trimmed) to the current room and persists the log.
    ///
    /// Returns `false` and changes nothing when `text` is blank.
    pub fn send_message(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }

        self.messages.push(ChatMessage::new(
            self.current_room,
            self.nickname.as_str(),
            trimmed,
        ));
        self.store.save(keys::MESSAGES, &self.messages);
        self.draft.clear();
        info!(
            "event=chat_send module=chat status=ok room={} messages={}",
            self.current_room,
            self.messages.len()
        );
        true
    }

    /// Messages tagged with `room`, oldest first.
    pub fn messages_in(&self, room: ChatRoom) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter().filter(move |message| message.is_in(room))
    }

    pub fn render(&self, room: ChatRoom) -> Vec<MessageBubble<'_>> {
        self.messages_in(room)
            .map(|message| {
                let is_self = message.author == self.nickname;
                MessageBubble {
                    author_label: if is_self {
                        SELF_LABEL
                    } else {
                        message.author.as_str()
                    },
                    text: message.msg.as_str(),
                    is_self,
                }
            })
            .collect()
    }

    /// Bubbles for the selected room.
    pub fn render_current(&self) -> Vec<MessageBubble<'_>> {
        self.render(self.current_room)
    }
}
