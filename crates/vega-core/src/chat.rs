//! Chat records backing the chat-list rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ChatKind {
    /// One-to-one chat with a single user.
    Private { user_id: String },
    Group,
    Forum,
}

/// Delivery state of the newest outgoing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutgoingStatus {
    Pending,
    Sent,
    Read,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub sender_id: String,
    pub text: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub is_outgoing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outgoing_status: Option<OutgoingStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: String,
    pub title: String,
    pub kind: ChatKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message: Option<ChatMessage>,
    #[serde(default)]
    pub unread_count: u32,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub is_muted: bool,
    #[serde(default)]
    pub is_call_active: bool,
}

impl Chat {
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: ChatKind) -> Self {
        Chat {
            id: id.into(),
            title: title.into(),
            kind,
            last_message: None,
            unread_count: 0,
            is_pinned: false,
            is_muted: false,
            is_call_active: false,
        }
    }

    /// User id of the other side, for private chats only.
    pub fn private_chat_user_id(&self) -> Option<&str> {
        match &self.kind {
            ChatKind::Private { user_id } => Some(user_id),
            _ => None,
        }
    }

    pub fn is_forum(&self) -> bool {
        matches!(self.kind, ChatKind::Forum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_chat_user_id() {
        let chat = Chat::new(
            "c1",
            "Ana",
            ChatKind::Private {
                user_id: "u42".into(),
            },
        );
        assert_eq!(chat.private_chat_user_id(), Some("u42"));

        let group = Chat::new("c2", "Lounge", ChatKind::Group);
        assert_eq!(group.private_chat_user_id(), None);
        assert!(!group.is_forum());
    }
}
