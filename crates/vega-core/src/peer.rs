//! Peer records and the identity enrichment merge.

use serde::{Deserialize, Serialize};

/// A user or chat entity as displayed in the UI.
///
/// Field names follow the upstream API objects (camelCase on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Peer {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    #[serde(default)]
    pub usernames: Vec<String>,
    #[serde(default)]
    pub is_self: bool,
}

/// The result of a directory lookup: what the view layer merges into a peer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedIdentity {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo_url: Option<String>,
}

impl Peer {
    pub fn new(id: impl Into<String>) -> Self {
        Peer {
            id: id.into(),
            phone_number: None,
            first_name: String::new(),
            last_name: String::new(),
            profile_photo: None,
            usernames: Vec::new(),
            is_self: false,
        }
    }

    /// Display name: "first last", trimmed down to whichever parts exist.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// The primary handle shown next to the status line, if any.
    pub fn main_username(&self) -> Option<&str> {
        self.usernames.first().map(String::as_str)
    }

    /// Enrichment merge: a shallow-merged copy with the resolved identity
    /// applied. The receiver is never mutated; callers publish the returned
    /// record to the view layer.
    ///
    /// `first_name` becomes the directory username and `last_name` is
    /// cleared. The profile photo is only replaced when the identity
    /// carries one; every other field is unchanged. Applying the same
    /// identity twice yields the same record.
    pub fn with_identity(&self, identity: &ResolvedIdentity) -> Peer {
        let mut merged = self.clone();
        merged.first_name = identity.username.clone();
        merged.last_name = String::new();
        if let Some(url) = &identity.profile_photo_url {
            merged.profile_photo = Some(url.clone());
        }
        merged
    }
}
