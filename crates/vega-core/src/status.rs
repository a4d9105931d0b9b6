//! Presence helpers: online checks and the "last seen" status line.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::peer::Peer;

/// Presence state of a user, as reported by the upstream client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum UserStatus {
    /// Online until `expires` (unix seconds).
    Online { expires: i64 },
    /// Offline; `was_online` is the last-seen unix timestamp when known.
    Offline {
        #[serde(skip_serializing_if = "Option::is_none")]
        was_online: Option<i64>,
    },
    /// Hidden behind privacy settings, seen within the last few days.
    Recently,
    Empty,
}

/// Whether the peer should show the online indicator. Self never does.
pub fn is_user_online(peer: &Peer, status: &UserStatus, now: DateTime<Utc>) -> bool {
    if peer.is_self {
        return false;
    }
    matches!(status, UserStatus::Online { expires } if *expires > now.timestamp())
}

/// The translated status line under the peer name.
pub fn user_status_label(status: &UserStatus, now: DateTime<Utc>) -> String {
    match status {
        UserStatus::Online { expires } if *expires > now.timestamp() => "online".to_string(),
        UserStatus::Online { .. } => "last seen recently".to_string(),
        UserStatus::Recently => "last seen recently".to_string(),
        UserStatus::Empty => "last seen a long time ago".to_string(),
        UserStatus::Offline { was_online } => match was_online
            .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0))
        {
            Some(seen) if now.signed_duration_since(seen).num_seconds() < 60 => {
                "last seen just now".to_string()
            }
            Some(seen) => format!("last seen {}", seen.format("%b %-d at %H:%M")),
            None => "last seen recently".to_string(),
        },
    }
}
