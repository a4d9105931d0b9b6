//! Contact info panel state: the name title and the status line under it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vega_core::{is_user_online, user_status_label, Peer, UserStatus};
use vega_directory::DirectoryApi;

use crate::resolver::{IdentityResolver, PeerView};

/// Admin attribution shown next to the name in member lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminMember {
    pub custom_title: Option<String>,
    pub is_owner: bool,
}

impl AdminMember {
    /// The label rendered after the name: the custom title when set,
    /// otherwise the generic role.
    pub fn label(&self) -> String {
        match &self.custom_title {
            Some(title) if !title.is_empty() => title.clone(),
            _ => {
                if self.is_owner {
                    "Owner".to_string()
                } else {
                    "Admin".to_string()
                }
            }
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelInputs {
    /// Explicit status string, overriding presence (e.g. "5 members").
    pub status_override: Option<String>,
    /// Show "Updating" until the chat's messages have loaded.
    pub with_updating_status: bool,
    pub are_messages_loaded: bool,
    pub is_typing: bool,
    pub user_status: Option<UserStatus>,
    pub admin: Option<AdminMember>,
    /// Show the peer's main username in front of the presence label.
    pub with_username: bool,
}

pub struct PeerInfoPanel {
    view: PeerView,
    inputs: PanelInputs,
}

impl PeerInfoPanel {
    pub fn mount(peer: Peer) -> Self {
        PeerInfoPanel {
            view: PeerView::mount(peer),
            inputs: PanelInputs::default(),
        }
    }

    pub fn unmount(&self) {
        self.view.unmount();
    }

    pub fn view(&self) -> &PeerView {
        &self.view
    }

    pub fn set_inputs(&mut self, inputs: PanelInputs) {
        self.inputs = inputs;
    }

    /// Kick off identity enrichment without blocking the panel render.
    pub fn spawn_enrich<D: DirectoryApi>(&self, resolver: &IdentityResolver<D>) {
        resolver.spawn_enrich(&self.view);
    }

    /// The name title, with the admin label when present.
    pub fn title(&self) -> String {
        let peer = self.view.peer();
        let name = peer.full_name();
        match &self.inputs.admin {
            Some(admin) => format!("{} ({})", name, admin.label()),
            None => name,
        }
    }

    pub fn is_online(&self, now: DateTime<Utc>) -> bool {
        match &self.inputs.user_status {
            Some(status) => is_user_online(&self.view.peer(), status, now),
            None => false,
        }
    }

    /// Status line precedence: explicit override > "Updating" while
    /// messages load > typing > presence (optionally prefixed with the
    /// main username). Saved Messages shows nothing.
    pub fn status_line(&self, now: DateTime<Utc>) -> Option<String> {
        if let Some(status) = &self.inputs.status_override {
            return Some(status.clone());
        }
        if self.inputs.with_updating_status && !self.inputs.are_messages_loaded {
            return Some("Updating".to_string());
        }
        if self.inputs.is_typing {
            return Some("typing...".to_string());
        }

        let peer = self.view.peer();
        if peer.is_self {
            return None;
        }

        let presence = self
            .inputs
            .user_status
            .as_ref()
            .map(|status| user_status_label(status, now));

        match (self.inputs.with_username.then(|| peer.main_username()).flatten(), presence) {
            (Some(username), Some(presence)) => Some(format!("@{} {}", username, presence)),
            (Some(username), None) => Some(format!("@{}", username)),
            (None, presence) => presence,
        }
    }
}
