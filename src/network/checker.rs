//! Seam between the action menu and the network

use async_trait::async_trait;

use crate::network::CheckError;

/// Fetches the version string advertised by a homeserver.
///
/// One call means one outbound request: no caching, no retries.
#[async_trait]
pub trait VersionChecker: Send + Sync {
    async fn check(&self, hostname: &str) -> Result<String, CheckError>;
}
