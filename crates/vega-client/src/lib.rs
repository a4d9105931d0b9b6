//! Headless client state for the VEGA chat UI.
//!
//! The rendering framework and the global store are external collaborators;
//! this crate holds the pieces that sat inside the components: the auth
//! phone screen state machine, chat-list rows, the contact info panel, and
//! the identity-enrichment side effect that used to be duplicated across
//! them.

pub mod app;
pub mod auth;
pub mod chat_list;
pub mod config;
pub mod info_panel;
pub mod resolver;
pub mod telemetry;

pub use app::VegaClient;
pub use auth::{AuthPhoneScreen, MIN_NUMBER_LENGTH};
pub use chat_list::{ChatBadge, ChatListEntry};
pub use config::AppConfig;
pub use info_panel::{AdminMember, PeerInfoPanel};
pub use resolver::{IdentityResolver, PeerView};
