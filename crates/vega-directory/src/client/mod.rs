//! Directory client implementation.

pub mod config;

pub use config::ClientConfig;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{DirectoryError, Result};
use crate::traits::DirectoryApi;
use crate::types::{PhoneLookupRequest, PhoneLookupResponse, VegaUser};
use vega_core::ResolvedIdentity;

/// Client for the VEGA directory service.
#[derive(Clone)]
pub struct DirectoryClient {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl DirectoryClient {
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::from_env())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        url::Url::parse(&config.base_url)
            .map_err(|e| DirectoryError::Config(format!("invalid base URL: {}", e)))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .connect_timeout(Duration::from_secs(config.connection_timeout_secs))
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .build()
            .map_err(|e| DirectoryError::Config(e.to_string()))?;

        Ok(DirectoryClient {
            http,
            config: Arc::new(config),
        })
    }

    /// Wrap an existing `reqwest::Client`, keeping its pool.
    pub fn with_client(http: reqwest::Client, config: ClientConfig) -> Self {
        DirectoryClient {
            http,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Batch lookup: `POST {base}/v1/users/phones`.
    ///
    /// Numbers are sent as given; callers are responsible for the leading
    /// `+`. One request per call, no retry.
    pub async fn lookup_phones(&self, phone_numbers: &[String]) -> Result<Vec<VegaUser>> {
        let url = format!(
            "{}/v1/users/phones",
            self.config.base_url.trim_end_matches('/')
        );
        let request = PhoneLookupRequest {
            phone_numbers: phone_numbers.to_vec(),
        };

        if self.config.enable_logging {
            tracing::debug!("[Directory-Out] POST {} ({} numbers)", url, phone_numbers.len());
        }

        let response = self
            .http
            .post(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| DirectoryError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Service {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DirectoryError::Http(e.to_string()))?;
        let body: PhoneLookupResponse = serde_json::from_slice(&bytes)?;

        if self.config.enable_logging {
            tracing::debug!("[Directory-In] {} match(es) for {} number(s)", body.users.len(), phone_numbers.len());
        }

        Ok(body.users)
    }

    /// Single lookup with the degrade-and-log policy: transport failures,
    /// non-success statuses, and empty result sets all resolve to `None`;
    /// failures are logged once, empty results are not an error. When the
    /// service returns several matches the first one wins.
    pub async fn resolve_identity(&self, phone: &str) -> Option<ResolvedIdentity> {
        let normalized = normalize_phone(phone);
        match self.lookup_phones(std::slice::from_ref(&normalized)).await {
            Ok(users) => users.into_iter().next().map(ResolvedIdentity::from),
            Err(e) => {
                tracing::error!("Error fetching VEGA user for phone number: {}", e);
                None
            }
        }
    }
}

#[async_trait]
impl DirectoryApi for DirectoryClient {
    async fn resolve_identity(&self, phone: &str) -> Option<ResolvedIdentity> {
        DirectoryClient::resolve_identity(self, phone).await
    }
}

/// The service expects E.164-ish numbers with a leading `+`. Peer records
/// store bare digits, so prepend one unless it is already there.
fn normalize_phone(phone: &str) -> String {
    let trimmed = phone.trim();
    if trimmed.starts_with('+') {
        trimmed.to_string()
    } else {
        format!("+{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::instrument::WithSubscriber;

    fn client_for(server: &mockito::Server) -> DirectoryClient {
        DirectoryClient::with_config(ClientConfig::with_base_url(server.url())).unwrap()
    }

    /// Counts ERROR events emitted while a wrapped future runs.
    #[derive(Clone)]
    struct ErrorCounter(Arc<AtomicUsize>);

    impl ErrorCounter {
        fn new() -> Self {
            ErrorCounter(Arc::new(AtomicUsize::new(0)))
        }

        fn errors(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    impl tracing::Subscriber for ErrorCounter {
        fn enabled(&self, _metadata: &tracing::Metadata<'_>) -> bool {
            true
        }
        fn new_span(&self, _attrs: &tracing::span::Attributes<'_>) -> tracing::span::Id {
            tracing::span::Id::from_u64(1)
        }
        fn record(&self, _id: &tracing::span::Id, _values: &tracing::span::Record<'_>) {}
        fn record_follows_from(&self, _id: &tracing::span::Id, _follows: &tracing::span::Id) {}
        fn event(&self, event: &tracing::Event<'_>) {
            if *event.metadata().level() == tracing::Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
        fn enter(&self, _id: &tracing::span::Id) {}
        fn exit(&self, _id: &tracing::span::Id) {}
    }

    #[test]
    fn normalizes_leading_plus() {
        assert_eq!(normalize_phone("639178944123"), "+639178944123");
        assert_eq!(normalize_phone("+639178944123"), "+639178944123");
        assert_eq!(normalize_phone(" 639178944123 "), "+639178944123");
    }

    #[test]
    fn rejects_invalid_base_url() {
        let config = ClientConfig::with_base_url("not a url");
        assert!(matches!(
            DirectoryClient::with_config(config),
            Err(DirectoryError::Config(_))
        ));
    }

    #[tokio::test]
    async fn resolves_first_match() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/users/phones")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!({
                "phoneNumbers": ["+639178944123"]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"users":[
                    {"username":"vega_ana","profilePhoto":{"url":"https://cdn/a.png"}},
                    {"username":"ignored_second","profilePhoto":{"url":"https://cdn/b.png"}}
                ]}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server);
        let identity = client.resolve_identity("639178944123").await.unwrap();
        assert_eq!(identity.username, "vega_ana");
        assert_eq!(identity.profile_photo_url.as_deref(), Some("https://cdn/a.png"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn empty_result_resolves_to_none() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/users/phones")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"users":[]}"#)
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server);
        let counter = ErrorCounter::new();
        let identity = client
            .resolve_identity("+15550100")
            .with_subscriber(counter.clone())
            .await;
        assert!(identity.is_none());
        // An empty result is not a failure; nothing gets logged.
        assert_eq!(counter.errors(), 0);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn service_error_degrades_and_logs_once() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/users/phones")
            .with_status(500)
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server);
        let counter = ErrorCounter::new();
        let identity = client
            .resolve_identity("+15550100")
            .with_subscriber(counter.clone())
            .await;
        assert!(identity.is_none());
        assert_eq!(counter.errors(), 1);
        // expect(1) also proves there was no retry.
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn transport_failure_degrades_and_logs_once() {
        // Nothing listens here; connect fails.
        let config = ClientConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            connection_timeout_secs: 1,
            ..Default::default()
        };
        let client = DirectoryClient::with_config(config).unwrap();
        let counter = ErrorCounter::new();
        let identity = client
            .resolve_identity("+15550100")
            .with_subscriber(counter.clone())
            .await;
        assert!(identity.is_none());
        assert_eq!(counter.errors(), 1);
    }

    #[tokio::test]
    async fn malformed_body_is_a_json_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/users/phones")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .lookup_phones(&["+15550100".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, DirectoryError::Json(_)));
        // The single-lookup path degrades the same way as other failures.
        assert!(client.resolve_identity("+15550100").await.is_none());
    }

    #[tokio::test]
    async fn lookup_phones_surfaces_service_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/users/phones")
            .with_status(503)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .lookup_phones(&["+15550100".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, DirectoryError::Service { status: 503 }));
    }

    #[tokio::test]
    async fn lookup_phones_sends_batch_in_order() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/users/phones")
            .match_body(Matcher::Json(serde_json::json!({
                "phoneNumbers": ["+15550100", "+447911123456"]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"users":[{"username":"a"},{"username":"b"}]}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let users = client
            .lookup_phones(&["+15550100".to_string(), "+447911123456".to_string()])
            .await
            .unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "a");
        mock.assert_async().await;
    }
}
