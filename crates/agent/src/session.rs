//! Chat Session Handler
//!
//! Owns one conversation end to end: transcript, intent matching, typing
//! delay, suggestion refresh, calculator and contact-form commands, export
//! and analytics. The API is command/query shaped; UI side effects such as
//! opening a panel come back as [`FollowUp`] tags for the caller to act on,
//! and observers can follow the conversation through the broadcast event
//! stream.

use std::sync::Arc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tokio::sync::broadcast;
use tokio::time::{sleep, Duration};
use uuid::Uuid;

use solarbot_config::constants::{brand, links, timing};
use solarbot_core::{compute_savings, ChatMessage, SavingsError, SavingsEstimate, SavingsInput};

use crate::analytics::{AnalyticsCounters, AnalyticsEvent, AnalyticsSnapshot};
use crate::export::{render_transcript, ChatExport, ExportError};
use crate::intent::{FollowUp, IntentKind, IntentMatcher};
use crate::suggestions::{default_suggestions, suggestions_for, QuickReply};
use crate::transcript::Transcript;
use crate::voice::{CaptureEvent, SpeechRecognizer, VoiceCapture, VoiceError};

/// Chat session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Base typing delay before a reply lands (ms)
    pub reply_delay_ms: u64,
    /// Random extra typing delay, drawn per reply (ms)
    pub reply_jitter_ms: u64,
    /// Pacing hint for the caller before acting on a follow-up (ms)
    pub follow_up_delay_ms: u64,
    /// Pacing hint for the caller before showing the contact-form ack (ms)
    pub contact_ack_delay_ms: u64,
    /// Broadcast event buffer size
    pub event_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: timing::REPLY_DELAY_MS,
            reply_jitter_ms: timing::REPLY_JITTER_MS,
            follow_up_delay_ms: timing::FOLLOW_UP_DELAY_MS,
            contact_ack_delay_ms: timing::CONTACT_ACK_DELAY_MS,
            event_capacity: 100,
        }
    }
}

/// Chat session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Ready for input
    Idle,
    /// A reply is being composed (typing indicator shown)
    AwaitingReply,
}

/// Chat session events
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// User message accepted into the transcript
    UserMessage(ChatMessage),
    /// Typing indicator turned on
    TypingStarted,
    /// Bot reply appended to the transcript
    BotReply(ChatMessage),
    /// Quick-reply chips replaced
    SuggestionsRefreshed(&'static [QuickReply]),
    /// Transcript cleared back to the welcome message
    TranscriptCleared,
    /// State changed
    StateChanged { old: SessionState, new: SessionState },
}

/// Chat session errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("message is empty")]
    EmptyInput,
}

/// Result of a clear request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// User declined the confirmation prompt
    Cancelled,
    /// Transcript reset and reseeded with the welcome message
    Cleared,
}

/// Everything one user turn produced
#[derive(Debug, Clone)]
pub struct BotTurn {
    /// The reply appended to the transcript
    pub reply: ChatMessage,
    /// Which rule produced the reply
    pub intent: IntentKind,
    /// Panel the caller should open after its pacing delay, if any
    pub follow_up: Option<FollowUp>,
    /// Quick-reply chips now on offer
    pub suggestions: &'static [QuickReply],
}

/// A single conversation with the assistant
pub struct ChatSession {
    session_id: String,
    config: SessionConfig,
    state: SessionState,
    matcher: IntentMatcher,
    transcript: Transcript,
    suggestions: &'static [QuickReply],
    analytics: Arc<AnalyticsCounters>,
    voice: VoiceCapture,
    rng: StdRng,
    started_at: Instant,
    event_tx: broadcast::Sender<SessionEvent>,
}

impl ChatSession {
    /// Create a session with a fresh id and entropy-seeded reply picks
    pub fn new(config: SessionConfig) -> Self {
        Self::with_parts(Uuid::new_v4().to_string(), config, StdRng::from_entropy())
    }

    /// Create a session with a caller-chosen id
    pub fn with_id(session_id: impl Into<String>, config: SessionConfig) -> Self {
        Self::with_parts(session_id.into(), config, StdRng::from_entropy())
    }

    /// Create a session whose reply picks are deterministic
    pub fn with_rng_seed(config: SessionConfig, seed: u64) -> Self {
        Self::with_parts(
            Uuid::new_v4().to_string(),
            config,
            StdRng::seed_from_u64(seed),
        )
    }

    /// Attach a platform speech recognizer
    pub fn with_recognizer(mut self, recognizer: Arc<dyn SpeechRecognizer>) -> Self {
        self.voice = VoiceCapture::with_recognizer(recognizer);
        self
    }

    fn with_parts(session_id: String, config: SessionConfig, rng: StdRng) -> Self {
        let (event_tx, _) = broadcast::channel(config.event_capacity.max(1));

        let analytics = Arc::new(AnalyticsCounters::new());
        analytics.record(AnalyticsEvent::SessionStarted);

        tracing::info!(session_id = %session_id, "chat session started");

        Self {
            session_id,
            config,
            state: SessionState::Idle,
            matcher: IntentMatcher::new(),
            transcript: Transcript::new(),
            suggestions: default_suggestions(),
            analytics,
            voice: VoiceCapture::new(),
            rng,
            started_at: Instant::now(),
            event_tx,
        }
    }

    /// Submit a user message and produce the bot's turn.
    ///
    /// Runs the whole exchange: transcript append, typing delay, intent
    /// match, reply append, suggestion refresh. Any panel the reply should
    /// open comes back as a [`FollowUp`] tag rather than being performed
    /// here.
    pub async fn submit(&mut self, text: &str) -> Result<BotTurn, SessionError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SessionError::EmptyInput);
        }

        let message = ChatMessage::user(trimmed);
        self.transcript.push(message.clone());
        self.analytics.record(AnalyticsEvent::MessageSent {
            length: trimmed.len(),
        });
        let _ = self.event_tx.send(SessionEvent::UserMessage(message));

        self.set_state(SessionState::AwaitingReply);
        let _ = self.event_tx.send(SessionEvent::TypingStarted);
        sleep(Duration::from_millis(self.typing_delay())).await;

        let classification = self.matcher.classify(trimmed, &mut self.rng);
        let reply = ChatMessage::assistant(classification.response);
        self.transcript.push(reply.clone());
        self.set_state(SessionState::Idle);
        let _ = self.event_tx.send(SessionEvent::BotReply(reply.clone()));

        self.suggestions = suggestions_for(classification.response);
        let _ = self
            .event_tx
            .send(SessionEvent::SuggestionsRefreshed(self.suggestions));

        tracing::debug!(
            session_id = %self.session_id,
            intent = ?classification.kind,
            "turn completed"
        );

        Ok(BotTurn {
            reply,
            intent: classification.kind,
            follow_up: classification.follow_up,
            suggestions: self.suggestions,
        })
    }

    /// Clear the transcript, guarded by a confirmation flag.
    ///
    /// An unconfirmed request changes nothing. A confirmed one resets the
    /// transcript to just the welcome message and restores the default
    /// suggestions; the analytics counters are left as they were.
    pub fn clear(&mut self, confirmed: bool) -> ClearOutcome {
        if !confirmed {
            return ClearOutcome::Cancelled;
        }

        self.transcript.clear_and_seed(brand::WELCOME_MESSAGE);
        self.suggestions = default_suggestions();
        self.analytics.record(AnalyticsEvent::ChatCleared);
        let _ = self.event_tx.send(SessionEvent::TranscriptCleared);

        ClearOutcome::Cleared
    }

    /// Surface the savings calculator, pre-filled with the default inputs
    pub fn open_calculator(&self) -> SavingsInput {
        self.analytics.record(AnalyticsEvent::CalculatorUsed);
        SavingsInput::default()
    }

    /// Run the savings calculator on the given inputs
    pub fn calculate(&self, input: &SavingsInput) -> Result<SavingsEstimate, SavingsError> {
        let estimate = compute_savings(input)?;
        self.analytics.record(AnalyticsEvent::CalculationCompleted {
            system_size_kw: input.system_size.kilowatts(),
            payback_years: estimate.payback_years,
            lifetime_savings: estimate.lifetime_savings,
        });
        Ok(estimate)
    }

    /// Open the external contact form.
    ///
    /// Appends the acknowledgement reply to the transcript and returns the
    /// form URL for the caller to open.
    pub fn open_contact_form(&mut self) -> &'static str {
        self.analytics.record(AnalyticsEvent::ContactFormOpened);

        let ack = ChatMessage::assistant(brand::CONTACT_FORM_ACK);
        self.transcript.push(ack.clone());
        let _ = self.event_tx.send(SessionEvent::BotReply(ack));

        self.suggestions = suggestions_for(brand::CONTACT_FORM_ACK);
        let _ = self
            .event_tx
            .send(SessionEvent::SuggestionsRefreshed(self.suggestions));

        links::CONTACT_FORM_URL
    }

    /// Render the transcript into the downloadable text artifact
    pub fn export_transcript(&self) -> Result<ChatExport, ExportError> {
        let export = render_transcript(self.transcript.messages())?;
        self.analytics.record(AnalyticsEvent::ChatExported {
            message_count: self.transcript.len(),
        });
        Ok(export)
    }

    /// Whether voice capture is available on this platform
    pub fn voice_available(&self) -> bool {
        self.voice.is_available()
    }

    /// Whether a voice capture is in flight
    pub fn voice_listening(&self) -> bool {
        self.voice.is_listening()
    }

    /// Toggle voice capture (the microphone button)
    pub fn toggle_voice(&mut self) -> Result<(), VoiceError> {
        self.voice.toggle()
    }

    /// Feed a terminal recognizer event; a recognized transcript is
    /// returned for the caller to place into its input box.
    pub fn handle_voice_event(&mut self, event: CaptureEvent) -> Option<String> {
        let transcript = self.voice.handle_event(event);
        if transcript.is_some() {
            self.analytics.record(AnalyticsEvent::VoiceUsed);
        }
        transcript
    }

    /// Point-in-time analytics view for this session
    pub fn analytics_snapshot(&self) -> AnalyticsSnapshot {
        self.analytics.snapshot(
            self.transcript.len(),
            self.started_at.elapsed().as_millis() as u64,
        )
    }

    /// Shared handle to the session's counters
    pub fn analytics(&self) -> Arc<AnalyticsCounters> {
        Arc::clone(&self.analytics)
    }

    /// Subscribe to session events
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.event_tx.subscribe()
    }

    /// Get session ID
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Get current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Session configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Message history, oldest first
    pub fn transcript(&self) -> &[ChatMessage] {
        self.transcript.messages()
    }

    /// Live transcript length
    pub fn message_count(&self) -> usize {
        self.transcript.len()
    }

    /// Messages exchanged since the session began (welcome excluded)
    pub fn exchanged_messages(&self) -> u64 {
        self.transcript.exchanged()
    }

    /// Quick-reply chips currently on offer
    pub fn suggestions(&self) -> &'static [QuickReply] {
        self.suggestions
    }

    /// Set state and emit event
    fn set_state(&mut self, new_state: SessionState) {
        let old_state = self.state;
        self.state = new_state;

        if old_state != new_state {
            let _ = self.event_tx.send(SessionEvent::StateChanged {
                old: old_state,
                new: new_state,
            });
        }
    }

    fn typing_delay(&mut self) -> u64 {
        let jitter = if self.config.reply_jitter_ms == 0 {
            0
        } else {
            self.rng.gen_range(0..self.config.reply_jitter_ms)
        };
        self.config.reply_delay_ms + jitter
    }
}
