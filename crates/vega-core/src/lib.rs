//! Domain model shared by the VEGA chat client crates.
//!
//! Holds the peer and chat records the view layer renders, the user-status
//! helpers, and the phone-number country table / formatting utilities.
//! No I/O lives here.

pub mod chat;
pub mod peer;
pub mod phone;
pub mod status;

pub use chat::{Chat, ChatKind, ChatMessage, OutgoingStatus};
pub use peer::{Peer, ResolvedIdentity};
pub use phone::{
    builtin_countries, countries_by_iso, country_from_phone_number, format_phone_number,
    strip_non_digits, CountryCode,
};
pub use status::{is_user_online, user_status_label, UserStatus};
