//! Conversation engine for solarbot
//!
//! Provides everything one chat session needs:
//! - Intent matching over an ordered rule list
//! - Transcript and quick-reply suggestion state
//! - Typing-delay reply flow with a broadcast event stream
//! - Savings calculator and contact-form commands
//! - Plain-text transcript export
//! - Voice capture and per-session analytics

pub mod analytics;
pub mod export;
pub mod intent;
pub mod session;
pub mod suggestions;
pub mod transcript;
pub mod voice;

pub use solarbot_core::{
    compute_savings, ChatMessage, ChatRole, SavingsError, SavingsEstimate, SavingsInput,
    StateIncentive, SystemSize,
};

pub use analytics::{AnalyticsCounters, AnalyticsEvent, AnalyticsSnapshot};
pub use export::{render_transcript, ChatExport, ExportError};
pub use intent::{Classification, FollowUp, IntentKind, IntentMatcher};
pub use session::{
    BotTurn, ChatSession, ClearOutcome, SessionConfig, SessionError, SessionEvent, SessionState,
};
pub use suggestions::{default_suggestions, suggestions_for, QuickReply, SuggestionAction};
pub use transcript::Transcript;
pub use voice::{CaptureEvent, SpeechRecognizer, VoiceCapture, VoiceError};
