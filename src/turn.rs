//! TURN Credential Provider
//!
//! Fetches transient relay credentials and assembles the ICE server list for
//! the gateway connection. The fetch is strictly best-effort: any failure
//! falls back to the statically configured relay URLs, and a public STUN
//! server is always appended so a session can still connect with no relay
//! configuration at all.

use serde::Deserialize;

use crate::gateway::IceServer;
use crate::CallError;

/// Public STUN fallback appended to every ICE server list
pub const STUN_FALLBACK: &str = "stun:stun.l.google.com:19302";

/// Transient relay credentials returned by the credential API
#[derive(Debug, Clone, Deserialize)]
pub struct TurnCredentials {
    pub username: String,
    pub credential: String,
    /// Relay URLs, when the API issues its own instead of relying on the
    /// configured ones
    #[serde(default)]
    pub urls: Vec<String>,
}

/// HTTP client for the TURN credential API
#[derive(Clone)]
pub struct TurnCredentialProvider {
    client: reqwest::Client,
    url: Option<String>,
}

impl TurnCredentialProvider {
    pub fn new(url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    /// Fetch credentials, returning `None` on any failure
    ///
    /// An unset endpoint skips the request entirely.
    pub async fn fetch(&self) -> Option<TurnCredentials> {
        let url = self.url.as_deref()?;

        tracing::debug!("Fetching TURN credentials from {}", url);
        match self.try_fetch(url).await {
            Ok(creds) => Some(creds),
            Err(e) => {
                tracing::error!("Failed to fetch TURN credentials: {}", e);
                None
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<TurnCredentials, CallError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| CallError::CredentialFetch(e.to_string()))?;
        response
            .json()
            .await
            .map_err(|e| CallError::CredentialFetch(e.to_string()))
    }
}

/// Assemble the ICE server list for a connection attempt
///
/// Preference order: dynamic credentials paired with the configured relay
/// URLs, then URLs issued by the credential API itself, then configured URLs
/// without credentials. The STUN fallback always comes last.
pub fn assemble_ice_servers(
    configured_urls: &[String],
    creds: Option<&TurnCredentials>,
) -> Vec<IceServer> {
    let mut servers = Vec::new();

    match creds {
        Some(creds) if !configured_urls.is_empty() => {
            tracing::debug!("Using dynamic TURN credentials for {:?}", configured_urls);
            servers.push(IceServer {
                urls: configured_urls.to_vec(),
                username: Some(creds.username.clone()),
                credential: Some(creds.credential.clone()),
            });
        }
        Some(creds) if !creds.urls.is_empty() => {
            tracing::debug!("Using TURN servers issued by the API: {:?}", creds.urls);
            servers.push(IceServer {
                urls: creds.urls.clone(),
                username: Some(creds.username.clone()),
                credential: Some(creds.credential.clone()),
            });
        }
        _ if !configured_urls.is_empty() => {
            servers.push(IceServer {
                urls: configured_urls.to_vec(),
                username: None,
                credential: None,
            });
        }
        _ => {}
    }

    servers.push(IceServer {
        urls: vec![STUN_FALLBACK.to_string()],
        username: None,
        credential: None,
    });

    servers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(urls: &[&str]) -> TurnCredentials {
        TurnCredentials {
            username: "u".to_string(),
            credential: "c".to_string(),
            urls: urls.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn dynamic_credentials_pair_with_configured_urls() {
        let configured = vec!["turn:relay.example.com:3478?transport=udp".to_string()];
        let servers = assemble_ice_servers(&configured, Some(&creds(&["turn:ignored"])));

        assert_eq!(servers.len(), 2);
        assert_eq!(servers[0].urls, configured);
        assert_eq!(servers[0].username.as_deref(), Some("u"));
        assert_eq!(servers[1].urls, vec![STUN_FALLBACK.to_string()]);
    }

    #[test]
    fn api_issued_urls_used_without_configured_ones() {
        let servers = assemble_ice_servers(&[], Some(&creds(&["turn:api.example.com:3478"])));

        assert_eq!(servers.len(), 2);
        assert_eq!(servers[0].urls, vec!["turn:api.example.com:3478".to_string()]);
        assert_eq!(servers[0].credential.as_deref(), Some("c"));
    }

    #[test]
    fn fetch_failure_falls_back_to_configured_urls_without_credentials() {
        let configured = vec!["turn:relay.example.com:3478?transport=tcp".to_string()];
        let servers = assemble_ice_servers(&configured, None);

        assert_eq!(servers.len(), 2);
        assert_eq!(servers[0].urls, configured);
        assert!(servers[0].username.is_none());
        assert!(servers[0].credential.is_none());
        assert_eq!(servers[1].urls, vec![STUN_FALLBACK.to_string()]);
    }

    #[test]
    fn bare_setup_still_gets_stun() {
        let servers = assemble_ice_servers(&[], None);
        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].urls, vec![STUN_FALLBACK.to_string()]);
    }

    #[test]
    fn credentials_deserialize_without_urls() {
        let creds: TurnCredentials =
            serde_json::from_str(r#"{"username":"u","credential":"c"}"#).unwrap();
        assert!(creds.urls.is_empty());
    }

    #[tokio::test]
    async fn fetch_skipped_without_endpoint() {
        let provider = TurnCredentialProvider::new(None);
        assert!(provider.fetch().await.is_none());
    }

    #[tokio::test]
    async fn unreachable_endpoint_collapses_to_none() {
        // Port 9 (discard) refuses connections; the error is logged and
        // swallowed so the session can fall back to configured relays.
        let provider = TurnCredentialProvider::new(Some("http://127.0.0.1:9/turn".to_string()));
        assert!(provider.fetch().await.is_none());
    }
}
