//! Proxy Registrar Client
//!
//! Maps the local user identity to a routed SIP identity and destination by
//! POSTing to the call-routing proxy. Unlike the TURN fetch, a failure here
//! is fatal to the session attempt.

use serde::{Deserialize, Serialize};

use crate::CallError;

#[derive(Debug, Serialize)]
struct ProxyRegisterRequest<'a> {
    #[serde(rename = "userID")]
    user_id: &'a str,
    sip_server: &'a str,
    #[serde(rename = "sessionID")]
    session_id: u64,
    #[serde(rename = "handleID")]
    handle_id: u64,
}

#[derive(Debug, Deserialize)]
struct ProxyRegisterResponse {
    success: bool,
    callee: Option<String>,
    sip_identity: Option<String>,
    sip_username: Option<String>,
    sip_displayname: Option<String>,
    error: Option<String>,
}

/// Routed identity returned by the proxy, valid for one session attempt
#[derive(Debug, Clone, Default)]
pub struct RoutedIdentity {
    /// Destination to dial instead of the configured callee
    pub callee: Option<String>,
    /// Full SIP identity (e.g. "sip:1001@pbx.example.com")
    pub identity: Option<String>,
    pub username: Option<String>,
    pub display_name: Option<String>,
}

/// HTTP client for the proxy-register API
#[derive(Clone)]
pub struct ProxyRegistrar {
    client: reqwest::Client,
    url: String,
}

impl ProxyRegistrar {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Register this user with the routing proxy for the given gateway
    /// session/handle pair
    pub async fn register(
        &self,
        user_id: &str,
        sip_server: &str,
        session_id: u64,
        handle_id: u64,
    ) -> Result<RoutedIdentity, CallError> {
        tracing::info!(
            "Requesting proxy registration for {} (session {}, handle {})",
            user_id,
            session_id,
            handle_id
        );

        let body = ProxyRegisterRequest {
            user_id,
            sip_server,
            session_id,
            handle_id,
        };

        let response: ProxyRegisterResponse = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if !response.success {
            let reason = response
                .error
                .unwrap_or_else(|| "proxy registration rejected".to_string());
            return Err(CallError::ProxyRegistration(reason));
        }

        tracing::info!(
            "Proxy registration succeeded, dialer: {:?}, display name: {:?}",
            response.sip_username,
            response.sip_displayname
        );

        Ok(RoutedIdentity {
            callee: response.callee,
            identity: response.sip_identity,
            username: response.sip_username,
            display_name: response.sip_displayname,
        })
    }
}
