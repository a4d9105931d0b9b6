//! Wire types for the directory service.

use serde::{Deserialize, Serialize};
use vega_core::ResolvedIdentity;

/// Body of `POST /v1/users/phones`. Always a batch on the wire, even when
/// callers look up a single number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneLookupRequest {
    pub phone_numbers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneLookupResponse {
    pub users: Vec<VegaUser>,
}

/// A directory entry as the service returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VegaUser {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<ProfilePhoto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePhoto {
    pub url: String,
}

impl From<VegaUser> for ResolvedIdentity {
    fn from(user: VegaUser) -> Self {
        ResolvedIdentity {
            username: user.username,
            profile_photo_url: user.profile_photo.map(|p| p.url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_camel_case() {
        let req = PhoneLookupRequest {
            phone_numbers: vec!["+639178944123".into()],
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"phoneNumbers":["+639178944123"]}"#
        );
    }

    #[test]
    fn response_parses_with_and_without_photo() {
        let body = r#"{"users":[
            {"username":"vega_ana","profilePhoto":{"url":"https://cdn/a.png"}},
            {"username":"no_photo"}
        ]}"#;
        let parsed: PhoneLookupResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.users.len(), 2);
        assert_eq!(parsed.users[0].username, "vega_ana");
        assert_eq!(
            parsed.users[0].profile_photo.as_ref().map(|p| p.url.as_str()),
            Some("https://cdn/a.png")
        );
        assert!(parsed.users[1].profile_photo.is_none());

        let identity: ResolvedIdentity = parsed.users[1].clone().into();
        assert_eq!(identity.username, "no_photo");
        assert_eq!(identity.profile_photo_url, None);
    }
}
