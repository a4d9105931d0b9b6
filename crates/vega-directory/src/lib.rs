//! Client for the VEGA directory service.
//!
//! The directory maps phone numbers to usernames and avatars via a single
//! batch endpoint (`POST /v1/users/phones`). [`DirectoryClient`] exposes the
//! raw batch call plus [`resolve_identity`](client::DirectoryClient::resolve_identity),
//! the degrade-and-log single lookup the view layer runs as a side effect.

pub mod client;
pub mod error;
pub mod traits;
pub mod types;

pub use client::{ClientConfig, DirectoryClient};
pub use error::{DirectoryError, Result};
pub use traits::DirectoryApi;
pub use types::{PhoneLookupRequest, PhoneLookupResponse, ProfilePhoto, VegaUser};
