use async_trait::async_trait;
use vega_core::ResolvedIdentity;

/// Abstraction over the directory lookup, the seam the view layer is
/// written against so tests can script resolutions without a server.
///
/// Implementations must follow the degrade-and-log contract: failures are
/// logged and surface as `None`, never as a panic or an error the caller
/// has to handle.
#[async_trait]
pub trait DirectoryApi: Send + Sync + 'static {
    async fn resolve_identity(&self, phone: &str) -> Option<ResolvedIdentity>;
}
