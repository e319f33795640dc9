//! Call Session State Machine
//!
//! One `CallSession` per process, constructed at startup and never destroyed;
//! it cycles through `Idle -> Initializing -> InCall -> Cleaning -> Idle`.
//! All mutation happens on the session's own event loop: user commands,
//! gateway events and the results of spawned network steps arrive as
//! variants of one inbound event type, so state is never touched
//! concurrently, only interleaved.
//!
//! Because a user action can land between a suspension point and its
//! resumption, every spawned continuation carries a [`Fence`] captured when
//! it was spawned. A fence that no longer matches means the session moved on
//! (hangup, failure, new attempt) and the continuation is dropped without
//! side effects.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::gateway::{
    ConnectParams, GatewayConnection, GatewayEvent, IceState, MediaConstraints, MediaStream,
    SessionDescription, SignalingGateway, SipEventKind, SipHandle, SipRequest,
};
use crate::proxy::{ProxyRegistrar, RoutedIdentity};
use crate::turn::{self, TurnCredentialProvider, TurnCredentials};
use crate::{dtmf, CallError};

/// Call session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No call; the only state that accepts `start()`
    Idle,
    /// Call setup in flight (credentials, connect, attach, register, dial)
    Initializing,
    /// Media flowing; DTMF permitted
    InCall,
    /// Teardown in progress; new calls rejected until the cooldown elapses
    Cleaning,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Idle => write!(f, "Idle"),
            SessionState::Initializing => write!(f, "Initializing"),
            SessionState::InCall => write!(f, "InCall"),
            SessionState::Cleaning => write!(f, "Cleaning"),
        }
    }
}

/// Severity tag on a status update, for the host's status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Calling,
    Registered,
    InCall,
    Danger,
}

/// Outbound notification to the UI sink
///
/// Delivered synchronously relative to the triggering transition; the
/// channel is unbounded so the session never blocks on a slow consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Status { text: String, severity: Severity },
    CallState { in_call: bool },
}

/// Rendered local DTMF tone, handed to the optional tone sink
pub type ToneBuffer = Vec<i16>;

/// Guard for resumed continuations
///
/// `cycle` identifies the call attempt (bumped on every accepted `start()`),
/// `epoch` the state transition within it. A spawned step is admitted only
/// when both still match; a gateway event only needs the cycle to match,
/// since SIP traffic legitimately spans state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fence {
    cycle: u64,
    epoch: u64,
}

enum Command {
    Start,
    Hangup,
    SendDigit(char),
}

/// Result of a spawned continuation, fenced on delivery
enum Step {
    TurnFetched(Option<TurnCredentials>),
    Connected(Result<Arc<dyn GatewayConnection>, CallError>),
    Attached(Result<Arc<dyn SipHandle>, CallError>),
    ProxyRegistered(Result<RoutedIdentity, CallError>),
    RegisterSent(Result<(), CallError>),
    CallPlaced(Result<(), CallError>),
    AnswerApplied(Result<(), CallError>),
    HangupSent(Result<(), CallError>),
    HangupTimeout,
    Destroyed(Result<(), CallError>),
    CooldownElapsed,
}

enum SessionEvent {
    Command(Command),
    Gateway(u64, GatewayEvent),
    Step(Fence, Step),
}

/// Cloneable, non-blocking front of a running session
#[derive(Clone)]
pub struct SessionHandle {
    tx: mpsc::UnboundedSender<SessionEvent>,
    state_rx: watch::Receiver<SessionState>,
}

impl SessionHandle {
    /// Start a call, or toggle into hangup if one is already in flight
    pub fn start(&self) {
        let _ = self.tx.send(SessionEvent::Command(Command::Start));
    }

    /// Hang up the current call attempt
    pub fn hangup(&self) {
        let _ = self.tx.send(SessionEvent::Command(Command::Hangup));
    }

    /// Send a DTMF digit; ignored unless a call is active
    pub fn send_digit(&self, digit: char) {
        let _ = self.tx.send(SessionEvent::Command(Command::SendDigit(digit)));
    }

    /// Current session state
    pub fn state(&self) -> SessionState {
        *self.state_rx.borrow()
    }

    /// Watch receiver for awaiting state transitions
    pub fn state_changes(&self) -> watch::Receiver<SessionState> {
        self.state_rx.clone()
    }
}

/// The call session actor
pub struct CallSession {
    config: SessionConfig,
    gateway: Arc<dyn SignalingGateway>,
    turn: TurnCredentialProvider,
    proxy: ProxyRegistrar,

    state: SessionState,
    cycle: u64,
    epoch: u64,

    connection: Option<Arc<dyn GatewayConnection>>,
    handle: Option<Arc<dyn SipHandle>>,
    local_stream: Option<MediaStream>,
    /// Borrowed reference; rendering it is the host's concern
    #[allow(dead_code)]
    remote_stream: Option<MediaStream>,
    registered: bool,
    routed: Option<RoutedIdentity>,

    hangup_timer: Option<CancellationToken>,
    cooldown_timer: Option<CancellationToken>,

    tx: mpsc::UnboundedSender<SessionEvent>,
    rx: mpsc::UnboundedReceiver<SessionEvent>,
    state_tx: watch::Sender<SessionState>,
    notify_tx: mpsc::UnboundedSender<Notification>,
    tone_tx: Option<mpsc::UnboundedSender<ToneBuffer>>,
}

impl CallSession {
    /// Create a session over the given gateway capability
    pub fn new(
        config: SessionConfig,
        gateway: Arc<dyn SignalingGateway>,
    ) -> (Self, SessionHandle, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(SessionState::Idle);
        let (notify_tx, notify_rx) = mpsc::unbounded_channel();

        let turn = TurnCredentialProvider::new(config.turn_api_url.clone());
        let proxy = ProxyRegistrar::new(config.proxy_api_url.clone());

        let session = Self {
            config,
            gateway,
            turn,
            proxy,
            state: SessionState::Idle,
            cycle: 0,
            epoch: 0,
            connection: None,
            handle: None,
            local_stream: None,
            remote_stream: None,
            registered: false,
            routed: None,
            hangup_timer: None,
            cooldown_timer: None,
            tx: tx.clone(),
            rx,
            state_tx,
            notify_tx,
            tone_tx: None,
        };

        (session, SessionHandle { tx, state_rx }, notify_rx)
    }

    /// Attach a sink for locally rendered DTMF tones
    pub fn with_tone_sink(mut self, tone_tx: mpsc::UnboundedSender<ToneBuffer>) -> Self {
        self.tone_tx = Some(tone_tx);
        self
    }

    /// Drive the session until every handle is dropped
    pub async fn run(mut self) {
        while let Some(event) = self.rx.recv().await {
            self.handle_event(event);
        }
        tracing::debug!("Session event loop finished");
    }

    fn fence(&self) -> Fence {
        Fence {
            cycle: self.cycle,
            epoch: self.epoch,
        }
    }

    /// Spawn an async step whose result is fenced on delivery
    fn spawn_step<F>(&self, fut: F)
    where
        F: Future<Output = Step> + Send + 'static,
    {
        let tx = self.tx.clone();
        let fence = self.fence();
        tokio::spawn(async move {
            let _ = tx.send(SessionEvent::Step(fence, fut.await));
        });
    }

    fn set_state(&mut self, state: SessionState) {
        if self.state != state {
            tracing::debug!("Session state {} -> {}", self.state, state);
        }
        self.state = state;
        self.epoch += 1;
        let _ = self.state_tx.send(state);
    }

    fn notify_status(&self, text: &str, severity: Severity) {
        tracing::info!("[status] {}", text);
        let _ = self.notify_tx.send(Notification::Status {
            text: text.to_string(),
            severity,
        });
    }

    fn notify_call_state(&self, in_call: bool) {
        let _ = self.notify_tx.send(Notification::CallState { in_call });
    }

    fn handle_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Command(Command::Start) => self.start(),
            SessionEvent::Command(Command::Hangup) => self.hangup(),
            SessionEvent::Command(Command::SendDigit(d)) => self.send_digit(d),
            SessionEvent::Gateway(cycle, ev) => {
                if cycle != self.cycle {
                    tracing::debug!("Dropping gateway event from a previous session cycle");
                    return;
                }
                self.on_gateway_event(ev);
            }
            SessionEvent::Step(fence, step) => {
                if fence != self.fence() {
                    // The session moved on while this step was in flight
                    if let Step::Connected(Ok(conn)) = step {
                        tracing::debug!("Dropping connection established after cancellation");
                        tokio::spawn(async move {
                            let _ = conn.destroy().await;
                        });
                    } else {
                        tracing::debug!("Dropping stale continuation");
                    }
                    return;
                }
                self.on_step(step);
            }
        }
    }

    // --- User actions ---

    fn start(&mut self) {
        match self.state {
            SessionState::Cleaning => {
                tracing::warn!("Still cleaning up previous session");
                self.notify_status("Still cleaning up, please wait", Severity::Info);
            }
            SessionState::Initializing | SessionState::InCall => {
                tracing::info!("Call in progress, hanging up");
                self.hangup();
            }
            SessionState::Idle => self.begin_call(),
        }
    }

    fn begin_call(&mut self) {
        self.cycle += 1;
        self.set_state(SessionState::Initializing);
        self.notify_call_state(true);

        if let Err(e) = self.config.validate() {
            // Nothing was contacted yet, so a soft reset is enough
            self.notify_status(&format!("Configuration error: {}", e), Severity::Danger);
            self.cleanup(true);
            return;
        }

        self.notify_status("Fetching credentials...", Severity::Calling);
        let turn = self.turn.clone();
        self.spawn_step(async move { Step::TurnFetched(turn.fetch().await) });
    }

    fn hangup(&mut self) {
        if matches!(self.state, SessionState::Idle | SessionState::Cleaning) {
            return;
        }

        self.notify_status("Hanging up", Severity::Info);
        match self.handle.clone() {
            Some(handle) => {
                self.spawn_step(async move {
                    Step::HangupSent(handle.send(SipRequest::Hangup, None).await)
                });
                self.arm_hangup_timer();
            }
            // Nothing attached yet: cancel the attempt on the spot. Flipping
            // the state here is what makes in-flight setup steps stale.
            None => self.cleanup(false),
        }
    }

    fn send_digit(&mut self, digit: char) {
        let handle = match (self.state, self.handle.clone()) {
            (SessionState::InCall, Some(handle)) => handle,
            _ => {
                tracing::warn!("DTMF ignored: not in a call");
                return;
            }
        };

        // Local tone and protocol DTMF are independent; either may fail
        // without affecting the other.
        if let Some(tone_tx) = &self.tone_tx {
            match dtmf::tone(digit) {
                Some(samples) => {
                    let _ = tone_tx.send(samples);
                }
                None => tracing::warn!("Unknown DTMF digit: {}", digit),
            }
        }

        tracing::debug!("Sending DTMF: {}", digit);
        tokio::spawn(async move {
            if let Err(e) = handle.send_digits(&digit.to_string()).await {
                tracing::warn!("Protocol DTMF send failed: {}", e);
            }
        });
    }

    // --- Setup sequence steps ---

    fn on_step(&mut self, step: Step) {
        match step {
            Step::TurnFetched(creds) => self.on_turn_fetched(creds),
            Step::Connected(result) => self.on_connected(result),
            Step::Attached(result) => self.on_attached(result),
            Step::ProxyRegistered(result) => self.on_proxy_registered(result),
            Step::RegisterSent(result) => {
                if let Err(e) = result {
                    self.notify_status(&format!("SIP register failed: {}", e), Severity::Danger);
                    self.cleanup(false);
                }
            }
            Step::CallPlaced(result) => {
                if let Err(e) = result {
                    self.notify_status(&format!("Call setup failed: {}", e), Severity::Danger);
                    self.hangup();
                }
            }
            Step::AnswerApplied(result) => {
                if let Err(e) = result {
                    tracing::warn!("Applying remote description failed: {}", e);
                    self.hangup();
                }
            }
            Step::HangupSent(result) => {
                if let Err(e) = result {
                    // Treat a failed send as "peer already gone"
                    tracing::warn!("Hangup send failed (session might be gone): {}", e);
                    self.cleanup(false);
                }
            }
            Step::HangupTimeout => {
                tracing::warn!("Hangup timeout, forcing cleanup");
                self.cleanup(false);
            }
            Step::Destroyed(result) => {
                if let Err(e) = result {
                    // Teardown failure must never strand the session
                    tracing::error!("Error destroying gateway session: {}", e);
                }
                self.start_cooldown();
            }
            Step::CooldownElapsed => {
                self.set_state(SessionState::Idle);
                self.notify_call_state(false);
                tracing::info!("Cooldown finished, ready for next call");
            }
        }
    }

    fn on_turn_fetched(&mut self, creds: Option<TurnCredentials>) {
        let ice_servers = turn::assemble_ice_servers(&self.config.turn_urls, creds.as_ref());
        tracing::info!(
            "Connecting to gateway {} with {} ICE servers",
            self.config.gateway_url,
            ice_servers.len()
        );
        self.notify_status("Connecting to gateway...", Severity::Calling);

        let params = ConnectParams {
            server: self.config.gateway_url.clone(),
            ice_servers,
            relay_only: self.config.force_relay,
        };

        // Gateway events for this connection are tagged with the current
        // cycle so a stale connection cannot feed a newer attempt.
        let (gw_tx, mut gw_rx) = mpsc::unbounded_channel();
        let cycle = self.cycle;
        let tx = self.tx.clone();
        tokio::spawn(async move {
            while let Some(ev) = gw_rx.recv().await {
                if tx.send(SessionEvent::Gateway(cycle, ev)).is_err() {
                    break;
                }
            }
        });

        let gateway = self.gateway.clone();
        self.spawn_step(async move { Step::Connected(gateway.connect(params, gw_tx).await) });
    }

    fn on_connected(&mut self, result: Result<Arc<dyn GatewayConnection>, CallError>) {
        let connection = match result {
            Ok(connection) => connection,
            Err(e) => {
                self.notify_status(&format!("Gateway error: {}", e), Severity::Danger);
                self.cleanup(false);
                return;
            }
        };

        self.notify_status("Connected to gateway", Severity::Registered);
        self.connection = Some(connection.clone());

        let opaque_id = format!("softphone-{}", Uuid::new_v4().simple());
        self.spawn_step(async move { Step::Attached(connection.attach_sip(&opaque_id).await) });
    }

    fn on_attached(&mut self, result: Result<Arc<dyn SipHandle>, CallError>) {
        let handle = match result {
            Ok(handle) => handle,
            Err(e) => {
                self.notify_status(&format!("Plugin error: {}", e), Severity::Danger);
                self.cleanup(false);
                return;
            }
        };

        self.notify_status("Plugin attached", Severity::Registered);
        let session_id = match &self.connection {
            Some(connection) => connection.session_id(),
            None => {
                self.cleanup(false);
                return;
            }
        };
        let handle_id = handle.handle_id();
        self.handle = Some(handle);

        self.notify_status("Requesting proxy registration...", Severity::Calling);
        let proxy = self.proxy.clone();
        let user_id = self.config.user_id.clone();
        let sip_server = self.config.registrar_domain();
        self.spawn_step(async move {
            Step::ProxyRegistered(
                proxy
                    .register(&user_id, &sip_server, session_id, handle_id)
                    .await,
            )
        });
    }

    fn on_proxy_registered(&mut self, result: Result<RoutedIdentity, CallError>) {
        let routed = match result {
            Ok(routed) => routed,
            Err(e) => {
                tracing::error!("Proxy register error: {}", e);
                self.notify_status("Proxy registration failed", Severity::Danger);
                self.cleanup(false);
                return;
            }
        };
        self.routed = Some(routed);

        let handle = match self.handle.clone() {
            Some(handle) => handle,
            None => {
                self.cleanup(false);
                return;
            }
        };

        tracing::info!("Registering SIP identity {}", self.config.sip_identity);
        let request = SipRequest::Register {
            username: self.config.sip_identity.clone(),
            authuser: self.config.auth_user.clone(),
            secret: self.config.sip_password.clone(),
            display_name: self.config.display_name.clone(),
            proxy: self.config.sip_registrar.clone(),
        };
        self.spawn_step(async move { Step::RegisterSent(handle.send(request, None).await) });
    }

    fn place_call(&mut self) {
        let routed = self.routed.clone().unwrap_or_default();
        let target = routed
            .callee
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| self.config.callee.clone());
        if target.is_empty() {
            self.notify_status("No callee configured", Severity::Danger);
            self.hangup();
            return;
        }

        let domain = routed
            .identity
            .as_deref()
            .and_then(|id| id.split_once('@'))
            .map(|(_, domain)| domain.to_string())
            .unwrap_or_else(|| self.config.registrar_domain());

        let name = routed
            .display_name
            .or(routed.username)
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "Web".to_string());
        let display_name = format!("\"{}\"sip:{}", name, domain);

        let handle = match self.handle.clone() {
            Some(handle) => handle,
            None => {
                self.cleanup(false);
                return;
            }
        };

        tracing::info!("Dialing {} as {}", target, display_name);
        self.spawn_step(async move {
            match handle.create_offer(MediaConstraints::audio_only()).await {
                Ok(offer) => Step::CallPlaced(
                    handle
                        .send(
                            SipRequest::Call {
                                uri: target,
                                display_name,
                            },
                            Some(offer),
                        )
                        .await,
                ),
                Err(e) => Step::CallPlaced(Err(e)),
            }
        });
    }

    // --- Gateway events ---

    fn on_gateway_event(&mut self, event: GatewayEvent) {
        let quiescent = matches!(self.state, SessionState::Cleaning | SessionState::Idle);
        match event {
            GatewayEvent::LocalStream(stream) => {
                if quiescent {
                    // Capture that raced the teardown; release it right away
                    stream.stop_tracks();
                    return;
                }
                tracing::debug!("Got local stream {}", stream.id());
                self.local_stream = Some(stream);
            }
            GatewayEvent::RemoteStream(stream) => {
                if quiescent {
                    return;
                }
                tracing::debug!("Remote media flowing on stream {}", stream.id());
                self.remote_stream = Some(stream);
                self.enter_in_call();
            }
            GatewayEvent::IceState(state) => {
                if quiescent {
                    tracing::debug!("ICE state {:?} (ignored during cleanup)", state);
                    return;
                }
                match state {
                    IceState::Failed => {
                        self.notify_status("ICE connection failed", Severity::Danger);
                        self.cleanup(true);
                    }
                    IceState::Disconnected => {
                        if self.state == SessionState::InCall {
                            tracing::warn!("ICE disconnected, waiting for reconnection");
                        }
                    }
                    _ => tracing::debug!("ICE state {:?}", state),
                }
            }
            GatewayEvent::Sip {
                event,
                reason,
                jsep,
            } => {
                if quiescent {
                    return;
                }
                self.on_sip_event(event, reason, jsep);
            }
            GatewayEvent::SipError(e) => {
                if quiescent {
                    return;
                }
                self.notify_status(&format!("SIP error: {}", e), Severity::Danger);
                self.cleanup(false);
            }
            GatewayEvent::Cleanup => {
                tracing::debug!("Cleanup notification from plugin");
                self.cleanup(false);
            }
            GatewayEvent::Destroyed => {
                tracing::debug!("Gateway destroyed event");
                if !quiescent {
                    self.cleanup(false);
                }
            }
        }
    }

    fn on_sip_event(
        &mut self,
        event: SipEventKind,
        reason: Option<String>,
        jsep: Option<SessionDescription>,
    ) {
        tracing::info!("[SIP event] {:?}", event);
        match event {
            SipEventKind::Registered => {
                self.registered = true;
                self.notify_status("SIP registered", Severity::Registered);
                self.place_call();
            }
            SipEventKind::Calling => {
                self.notify_status("Calling...", Severity::Calling);
            }
            SipEventKind::Progress | SipEventKind::Accepted => {
                let text = if event == SipEventKind::Progress {
                    "Early media"
                } else {
                    "In call"
                };
                self.notify_status(text, Severity::InCall);

                if let Some(jsep) = jsep {
                    if let Some(handle) = self.handle.clone() {
                        self.spawn_step(async move {
                            Step::AnswerApplied(handle.handle_remote_answer(jsep).await)
                        });
                    }
                }

                if event == SipEventKind::Accepted {
                    self.enter_in_call();
                }
            }
            SipEventKind::Unregistered | SipEventKind::Hangup => {
                let reason = reason.unwrap_or_else(|| "normal".to_string());
                self.notify_status(&format!("Hung up: {}", reason), Severity::Info);
                self.cleanup(false);
            }
        }
    }

    /// Enter `InCall`, from either the `accepted` event or remote media
    /// arrival, whichever lands first. Re-entry is a no-op.
    fn enter_in_call(&mut self) {
        if self.state != SessionState::Initializing {
            return;
        }
        self.set_state(SessionState::InCall);
        let text = if self.registered { "In call" } else { "Answered" };
        self.notify_status(text, Severity::InCall);
        self.notify_call_state(true);
    }

    // --- Teardown ---

    /// Release the current attempt's resources and head back to `Idle`
    ///
    /// Idempotent while already cleaning, unless `soft` forces an immediate
    /// reset. The soft path is for attempts whose connection never fully
    /// came up (ICE failure, configuration error): it skips the teardown
    /// handshake and the cooldown.
    fn cleanup(&mut self, soft: bool) {
        if self.state == SessionState::Cleaning && !soft {
            tracing::debug!("Cleanup already in progress");
            return;
        }
        if self.state == SessionState::Idle && self.connection.is_none() {
            return;
        }

        tracing::info!("Cleaning up (soft: {})", soft);
        if !soft {
            self.set_state(SessionState::Cleaning);
        }

        if let Some(timer) = self.hangup_timer.take() {
            timer.cancel();
        }

        if let Some(stream) = self.local_stream.take() {
            tracing::debug!("Stopping local stream tracks");
            stream.stop_tracks();
        }
        self.remote_stream = None;
        self.registered = false;
        self.routed = None;

        // Show the idle call affordance immediately; the session itself
        // stays busy until the cooldown elapses so a new call cannot race
        // the teardown.
        self.notify_call_state(false);

        let connection = self.connection.take();
        self.handle = None;

        if soft {
            if let Some(connection) = connection {
                tokio::spawn(async move {
                    if let Err(e) = connection.destroy().await {
                        tracing::warn!("Teardown after soft reset failed: {}", e);
                    }
                });
            }
            if let Some(timer) = self.cooldown_timer.take() {
                timer.cancel();
            }
            self.set_state(SessionState::Idle);
        } else if let Some(connection) = connection {
            self.spawn_step(async move { Step::Destroyed(connection.destroy().await) });
        } else {
            self.start_cooldown();
        }
    }

    fn arm_hangup_timer(&mut self) {
        if let Some(timer) = self.hangup_timer.take() {
            timer.cancel();
        }
        let token = CancellationToken::new();
        self.hangup_timer = Some(token.clone());

        let delay = self.config.hangup_timeout;
        let tx = self.tx.clone();
        let fence = self.fence();
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    let _ = tx.send(SessionEvent::Step(fence, Step::HangupTimeout));
                }
            }
        });
    }

    fn start_cooldown(&mut self) {
        if let Some(timer) = self.cooldown_timer.take() {
            timer.cancel();
        }
        let token = CancellationToken::new();
        self.cooldown_timer = Some(token.clone());

        let delay = self.config.cooldown;
        tracing::info!("Starting {:?} cooldown before the next call", delay);
        let tx = self.tx.clone();
        let fence = self.fence();
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    let _ = tx.send(SessionEvent::Step(fence, Step::CooldownElapsed));
                }
            }
        });
    }
}
