//! Signaling Gateway Capability
//!
//! The WebRTC/SIP gateway is consumed, not implemented: the session drives it
//! through these traits and receives everything it emits as [`GatewayEvent`]
//! values on a single inbound channel. A production implementation wraps the
//! actual gateway client library; tests substitute a scripted mock.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::CallError;

/// One ICE server entry handed to the gateway at connect time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IceServer {
    pub urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,
}

/// Parameters for establishing the gateway connection
#[derive(Debug, Clone)]
pub struct ConnectParams {
    pub server: String,
    pub ice_servers: Vec<IceServer>,
    /// Restrict candidate gathering to relay transport
    pub relay_only: bool,
}

/// Offer/answer session description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDescription {
    #[serde(rename = "type")]
    pub kind: String,
    pub sdp: String,
}

impl SessionDescription {
    pub fn offer(sdp: impl Into<String>) -> Self {
        Self {
            kind: "offer".to_string(),
            sdp: sdp.into(),
        }
    }

    pub fn answer(sdp: impl Into<String>) -> Self {
        Self {
            kind: "answer".to_string(),
            sdp: sdp.into(),
        }
    }
}

/// Media requested when creating an offer
#[derive(Debug, Clone, Copy)]
pub struct MediaConstraints {
    pub audio: bool,
    pub video: bool,
}

impl MediaConstraints {
    pub fn audio_only() -> Self {
        Self {
            audio: true,
            video: false,
        }
    }
}

/// Opaque handle to a set of captured or received media tracks
///
/// The session owns the local stream and must stop its tracks during
/// cleanup; the remote stream is a borrowed reference rendered by the host.
#[derive(Debug, Clone)]
pub struct MediaStream {
    id: String,
    stopped: Arc<AtomicBool>,
}

impl MediaStream {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            stopped: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Stop all tracks, releasing the underlying capture resources
    pub fn stop_tracks(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

/// ICE connectivity states reported by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IceState {
    New,
    Checking,
    Connected,
    Completed,
    Disconnected,
    Failed,
    Closed,
}

/// SIP protocol events delivered over the gateway message channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SipEventKind {
    Registered,
    Calling,
    Progress,
    Accepted,
    Unregistered,
    Hangup,
}

/// Requests sent to the SIP plugin, serialized to the gateway wire shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "request", rename_all = "lowercase")]
pub enum SipRequest {
    Register {
        username: String,
        authuser: String,
        secret: String,
        display_name: String,
        proxy: String,
    },
    Call {
        uri: String,
        display_name: String,
    },
    Hangup,
}

/// Everything the gateway can tell us, as one tagged event type
#[derive(Debug, Clone)]
pub enum GatewayEvent {
    /// A SIP protocol event, optionally carrying a remote session description
    /// and/or a reason string
    Sip {
        event: SipEventKind,
        reason: Option<String>,
        jsep: Option<SessionDescription>,
    },
    /// An explicit SIP-level error result
    SipError(String),
    /// ICE connectivity transition
    IceState(IceState),
    /// Local capture started
    LocalStream(MediaStream),
    /// Remote media is flowing
    RemoteStream(MediaStream),
    /// The plugin asked for a cleanup
    Cleanup,
    /// The gateway connection was destroyed
    Destroyed,
}

/// Sender half of the gateway's inbound event channel
pub type GatewayEvents = mpsc::UnboundedSender<GatewayEvent>;

/// Entry point of the gateway capability
#[async_trait]
pub trait SignalingGateway: Send + Sync {
    /// Connect to the gateway; events for the life of the connection are
    /// delivered on `events`
    async fn connect(
        &self,
        params: ConnectParams,
        events: GatewayEvents,
    ) -> Result<Arc<dyn GatewayConnection>, CallError>;
}

/// An established gateway connection
#[async_trait]
pub trait GatewayConnection: Send + Sync {
    fn session_id(&self) -> u64;

    /// Attach the SIP-capable plugin
    async fn attach_sip(&self, opaque_id: &str) -> Result<Arc<dyn SipHandle>, CallError>;

    /// Graceful teardown
    async fn destroy(&self) -> Result<(), CallError>;
}

/// The attached SIP plugin handle
#[async_trait]
pub trait SipHandle: Send + Sync {
    fn handle_id(&self) -> u64;

    /// Send a protocol request, optionally with a local offer
    async fn send(
        &self,
        request: SipRequest,
        offer: Option<SessionDescription>,
    ) -> Result<(), CallError>;

    /// Create a local media offer
    async fn create_offer(
        &self,
        media: MediaConstraints,
    ) -> Result<SessionDescription, CallError>;

    /// Apply the remote answer/early-media description
    async fn handle_remote_answer(&self, answer: SessionDescription) -> Result<(), CallError>;

    /// Send protocol-level DTMF tones
    async fn send_digits(&self, tones: &str) -> Result<(), CallError>;
}
