//! Session Analytics
//!
//! In-memory event counters with a serializable snapshot for external
//! collaborators. Every event is also emitted through `tracing`; there is
//! no analytics backend wired in, and counters reset only when the session
//! is dropped.

use parking_lot::RwLock;
use serde::Serialize;

/// Trackable engine events
///
/// Counted events map one-to-one onto [`AnalyticsSnapshot`] fields;
/// `SessionStarted`, `CalculationCompleted`, and `ChatCleared` are emitted
/// to the log only, which keeps a transcript clear from touching the
/// counters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnalyticsEvent {
    /// Session object created
    SessionStarted,
    /// User message accepted into the transcript
    MessageSent { length: usize },
    /// Calculator surfaced to the user
    CalculatorUsed,
    /// A savings estimate was produced
    CalculationCompleted {
        system_size_kw: f64,
        payback_years: f64,
        lifetime_savings: f64,
    },
    /// External contact form opened
    ContactFormOpened,
    /// Transcript exported as a text artifact
    ChatExported { message_count: usize },
    /// Transcript cleared after confirmation
    ChatCleared,
    /// Voice capture produced a transcript
    VoiceUsed,
}

#[derive(Debug, Default)]
struct Counters {
    message_sent: u64,
    calculator_used: u64,
    contact_form_opened: u64,
    chat_exported: u64,
    voice_used: u64,
}

/// Monotonic event counters for one session
///
/// Interior mutability lets the session record through `&self` while the
/// same counters are shared (`Arc`) with an external collaborator.
#[derive(Debug, Default)]
pub struct AnalyticsCounters {
    counters: RwLock<Counters>,
}

impl AnalyticsCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one event: emit the tracing event and bump its counter
    pub fn record(&self, event: AnalyticsEvent) {
        let mut counters = self.counters.write();
        match event {
            AnalyticsEvent::SessionStarted => {
                tracing::info!(event = "session_started", "analytics event");
            }
            AnalyticsEvent::MessageSent { length } => {
                counters.message_sent += 1;
                tracing::info!(event = "message_sent", message_length = length, "analytics event");
            }
            AnalyticsEvent::CalculatorUsed => {
                counters.calculator_used += 1;
                tracing::info!(event = "calculator_used", "analytics event");
            }
            AnalyticsEvent::CalculationCompleted {
                system_size_kw,
                payback_years,
                lifetime_savings,
            } => {
                tracing::info!(
                    event = "calculation_completed",
                    system_size_kw,
                    payback_years,
                    lifetime_savings,
                    "analytics event"
                );
            }
            AnalyticsEvent::ContactFormOpened => {
                counters.contact_form_opened += 1;
                tracing::info!(event = "contact_form_opened", "analytics event");
            }
            AnalyticsEvent::ChatExported { message_count } => {
                counters.chat_exported += 1;
                tracing::info!(event = "chat_exported", message_count, "analytics event");
            }
            AnalyticsEvent::ChatCleared => {
                tracing::info!(event = "chat_cleared", "analytics event");
            }
            AnalyticsEvent::VoiceUsed => {
                counters.voice_used += 1;
                tracing::info!(event = "voice_used", "analytics event");
            }
        }
    }

    /// Build a snapshot, merging in the session-level figures
    pub fn snapshot(&self, total_messages: usize, session_duration_ms: u64) -> AnalyticsSnapshot {
        let counters = self.counters.read();
        AnalyticsSnapshot {
            message_sent: counters.message_sent,
            calculator_used: counters.calculator_used,
            contact_form_opened: counters.contact_form_opened,
            chat_exported: counters.chat_exported,
            voice_used: counters.voice_used,
            total_messages,
            session_duration_ms,
        }
    }
}

/// Point-in-time, read-only analytics view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsSnapshot {
    pub message_sent: u64,
    pub calculator_used: u64,
    pub contact_form_opened: u64,
    pub chat_exported: u64,
    pub voice_used: u64,
    /// Live transcript length
    pub total_messages: usize,
    /// Elapsed time since the session was created
    pub session_duration_ms: u64,
}

impl AnalyticsSnapshot {
    /// JSON form handed to external analytics collaborators
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
