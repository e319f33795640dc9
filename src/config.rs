//! Session Configuration
//!
//! Flat configuration record for one softphone session: gateway address,
//! SIP account, the two brokering APIs and the ICE relay setup. Hosts are
//! free to persist it however they like; this module only defines the shape,
//! defaults and validation.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Softphone session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Signaling gateway address (e.g. "https://gw.example.com/janus")
    pub gateway_url: String,

    /// Local user id sent to the routing proxy
    pub user_id: String,

    /// SIP registrar URI (e.g. "sip:pbx.example.com")
    pub sip_registrar: String,

    /// SIP identity used in the `register` request
    pub sip_identity: String,

    /// Authentication username, when different from the identity
    pub auth_user: String,

    /// SIP secret
    pub sip_password: String,

    /// Display name offered to the remote party
    pub display_name: String,

    /// Statically configured callee, used when the proxy returns none
    pub callee: String,

    /// TURN credential API endpoint; `None` skips the fetch entirely
    pub turn_api_url: Option<String>,

    /// Proxy-register API endpoint
    pub proxy_api_url: String,

    /// Statically configured TURN relay URLs
    pub turn_urls: Vec<String>,

    /// Restrict ICE candidate gathering to relay transport
    pub force_relay: bool,

    /// How long to wait for the peer to acknowledge a hangup before forcing
    /// cleanup
    pub hangup_timeout: Duration,

    /// Idle interval enforced after full teardown before the next call
    pub cooldown: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            gateway_url: String::new(),
            user_id: "user".to_string(),
            sip_registrar: String::new(),
            sip_identity: String::new(),
            auth_user: String::new(),
            sip_password: String::new(),
            display_name: String::new(),
            callee: String::new(),
            turn_api_url: None,
            proxy_api_url: String::new(),
            turn_urls: Vec::new(),
            force_relay: false,
            hangup_timeout: Duration::from_secs(2),
            cooldown: Duration::from_secs(3),
        }
    }
}

impl SessionConfig {
    /// Create config from environment variables
    pub fn from_env() -> Option<Self> {
        let gateway_url = std::env::var("SOFTPHONE_GATEWAY_URL").ok()?;

        let turn_urls = std::env::var("SOFTPHONE_TURN_URLS")
            .ok()
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            gateway_url,
            user_id: std::env::var("SOFTPHONE_USER_ID").unwrap_or_else(|_| "user".to_string()),
            sip_registrar: std::env::var("SOFTPHONE_SIP_REGISTRAR").unwrap_or_default(),
            sip_identity: std::env::var("SOFTPHONE_SIP_IDENTITY").unwrap_or_default(),
            auth_user: std::env::var("SOFTPHONE_AUTH_USER").unwrap_or_default(),
            sip_password: std::env::var("SOFTPHONE_SIP_PASSWORD").unwrap_or_default(),
            display_name: std::env::var("SOFTPHONE_DISPLAY_NAME").unwrap_or_default(),
            callee: std::env::var("SOFTPHONE_CALLEE").unwrap_or_default(),
            turn_api_url: std::env::var("SOFTPHONE_TURN_API_URL").ok(),
            proxy_api_url: std::env::var("SOFTPHONE_PROXY_API_URL").unwrap_or_default(),
            turn_urls,
            force_relay: std::env::var("SOFTPHONE_FORCE_RELAY")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            hangup_timeout: Duration::from_secs(2),
            cooldown: Duration::from_secs(3),
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.gateway_url.is_empty() {
            return Err("Gateway address is required".to_string());
        }
        if self.proxy_api_url.is_empty() {
            return Err("Proxy-register API URL is required".to_string());
        }
        Ok(())
    }

    /// SIP registrar with the scheme stripped, as the proxy API expects it
    pub fn registrar_domain(&self) -> String {
        self.sip_registrar
            .strip_prefix("sip:")
            .unwrap_or(&self.sip_registrar)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_fails_validation() {
        let config = SessionConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn registrar_domain_strips_scheme() {
        let config = SessionConfig {
            sip_registrar: "sip:pbx.example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(config.registrar_domain(), "pbx.example.com");

        let bare = SessionConfig {
            sip_registrar: "pbx.example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(bare.registrar_domain(), "pbx.example.com");
    }

    #[test]
    fn validate_accepts_complete_config() {
        let config = SessionConfig {
            gateway_url: "https://gw.example.com/janus".to_string(),
            proxy_api_url: "https://gw.example.com/api/sip-register".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
