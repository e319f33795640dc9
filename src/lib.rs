//! SIP-over-WebRTC softphone session core
//!
//! This crate owns the call session state machine for a single-line web
//! softphone: it fetches transient TURN credentials, registers the caller
//! with a routing proxy, drives a SIP-capable signaling gateway through
//! connect/attach/register/call, and tears everything down with a bounded
//! hangup timeout and a transport-reuse cooldown.
//!
//! The gateway itself is a consumed capability (see [`SignalingGateway`]); rendering,
//! settings persistence and audio playout are the host application's concern.

mod config;
mod dtmf;
mod gateway;
mod proxy;
mod session;
mod turn;


pub use config::SessionConfig;
pub use session::{
    CallSession, Notification, SessionHandle, SessionState, Severity, ToneBuffer,
};

// Public API re-exports for gateway implementors and hosts
pub use gateway::{
    ConnectParams, GatewayConnection, GatewayEvent, GatewayEvents, IceServer, IceState,
    MediaConstraints, MediaStream, SessionDescription, SignalingGateway, SipEventKind, SipHandle,
    SipRequest,
};
pub use proxy::{ProxyRegistrar, RoutedIdentity};
pub use turn::{TurnCredentialProvider, TurnCredentials};

pub use dtmf::{tone, tone_frequencies};

use thiserror::Error;

/// Call-session errors
///
/// None of these cross the session boundary: the state machine translates
/// every fatal condition into a status notification plus a cleanup
/// transition. The enum exists so the external-service clients and gateway
/// implementations have a shared vocabulary.
#[derive(Error, Debug)]
pub enum CallError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("TURN credential fetch failed: {0}")]
    CredentialFetch(String),

    #[error("Gateway connection failed: {0}")]
    Connection(String),

    #[error("Plugin attach failed: {0}")]
    PluginAttach(String),

    #[error("Proxy registration failed: {0}")]
    ProxyRegistration(String),

    /// Offer/answer handling failed; produced by gateway implementations
    #[error("Media negotiation failed: {0}")]
    MediaNegotiation(String),

    #[error("SIP error: {0}")]
    Protocol(String),

    #[error("Gateway teardown failed: {0}")]
    Teardown(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
