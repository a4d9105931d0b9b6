//! Chat-list row state.
//!
//! A row composes the chat record with the private peer behind it (when
//! there is one) and derives everything the list needs: title, subtitle,
//! badge, and the identity enrichment for private chats.

use serde::{Deserialize, Serialize};

use vega_core::{Chat, ChatKind, Peer};
use vega_directory::DirectoryApi;

use crate::resolver::{IdentityResolver, PeerView};

/// Unread/pinned indicator shown at the end of the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ChatBadge {
    Unread { count: u32, muted: bool },
    Pinned,
    None,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowInputs {
    /// Unsent draft text, shown over the last message.
    pub draft: Option<String>,
    /// The other side is typing.
    pub is_typing: bool,
    /// Service-message text for the last action (e.g. "Ana pinned a message").
    pub action: Option<String>,
    pub is_selected: bool,
}

pub struct ChatListEntry {
    chat: Chat,
    peer_view: Option<PeerView>,
    inputs: RowInputs,
}

impl ChatListEntry {
    /// Mount a row. `peer` is the private-chat user when the chat is
    /// private and the store has it.
    pub fn mount(chat: Chat, peer: Option<Peer>) -> Self {
        let peer_view = match (&chat.kind, peer) {
            (ChatKind::Private { .. }, Some(peer)) => Some(PeerView::mount(peer)),
            _ => None,
        };
        ChatListEntry {
            chat,
            peer_view,
            inputs: RowInputs::default(),
        }
    }

    pub fn unmount(&self) {
        if let Some(view) = &self.peer_view {
            view.unmount();
        }
    }

    pub fn chat(&self) -> &Chat {
        &self.chat
    }

    pub fn peer_view(&self) -> Option<&PeerView> {
        self.peer_view.as_ref()
    }

    pub fn set_inputs(&mut self, inputs: RowInputs) {
        self.inputs = inputs;
    }

    /// Run the identity enrichment for the private peer, if any. The row
    /// renders immediately with the unresolved record; the resolver
    /// publishes the merged peer when the lookup lands.
    pub fn spawn_enrich<D: DirectoryApi>(&self, resolver: &IdentityResolver<D>) {
        if let Some(view) = &self.peer_view {
            resolver.spawn_enrich(view);
        }
    }

    /// Row title: the (possibly enriched) peer name for private chats,
    /// the chat title otherwise.
    pub fn title(&self) -> String {
        match &self.peer_view {
            Some(view) => {
                let peer = view.peer();
                let name = peer.full_name();
                if name.is_empty() {
                    self.chat.title.clone()
                } else {
                    name
                }
            }
            None => self.chat.title.clone(),
        }
    }

    /// Avatar URL for the row, enriched for private chats.
    pub fn avatar_url(&self) -> Option<String> {
        self.peer_view.as_ref().and_then(|v| v.peer().profile_photo)
    }

    /// Subtitle precedence: draft > typing > action > last message.
    pub fn subtitle(&self) -> String {
        if let Some(draft) = &self.inputs.draft {
            if !draft.is_empty() {
                return format!("Draft: {}", draft);
            }
        }
        if self.inputs.is_typing {
            return "typing...".to_string();
        }
        if let Some(action) = &self.inputs.action {
            if !action.is_empty() {
                return action.clone();
            }
        }
        match &self.chat.last_message {
            Some(message) if message.is_outgoing => format!("You: {}", message.text),
            Some(message) => message.text.clone(),
            None => String::new(),
        }
    }

    pub fn badge(&self) -> ChatBadge {
        if self.chat.unread_count > 0 {
            ChatBadge::Unread {
                count: self.chat.unread_count,
                muted: self.chat.is_muted,
            }
        } else if self.chat.is_pinned {
            ChatBadge::Pinned
        } else {
            ChatBadge::None
        }
    }

    pub fn is_private(&self) -> bool {
        matches!(self.chat.kind, ChatKind::Private { .. })
    }

    /// Whether the row shows the ongoing-call indicator.
    pub fn has_active_call(&self) -> bool {
        self.chat.is_call_active
    }

    pub fn is_selected(&self) -> bool {
        self.inputs.is_selected
    }

    /// The class list the row renders with, in upstream order.
    pub fn css_classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["Chat", "chat-item-clickable"];
        classes.push(if self.is_private() { "private" } else { "group" });
        if self.chat.is_forum() {
            classes.push("forum");
        }
        if self.inputs.is_selected {
            classes.push("selected");
        }
        classes
    }
}
