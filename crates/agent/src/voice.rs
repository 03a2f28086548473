//! Voice Capture
//!
//! Models the platform speech-to-text capability as an injected
//! collaborator with a single in-flight listen per session. When no
//! recognizer is provided the affordance is simply absent; callers check
//! [`VoiceCapture::is_available`] and hide the microphone.

use std::sync::Arc;

use thiserror::Error;

/// Platform speech-to-text capability
pub trait SpeechRecognizer: Send + Sync {
    /// Begin a single capture
    fn begin_capture(&self);
    /// Abort the capture in progress, if any
    fn end_capture(&self);
}

/// Terminal events reported back by the recognizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureEvent {
    /// Recognized text
    Transcript(String),
    /// Recognition failed
    Error(String),
    /// Capture ended without a result
    End,
}

/// Voice capture errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoiceError {
    #[error("speech recognition is not available on this platform")]
    CaptureUnavailable,
}

/// Single-in-flight voice capture state
pub struct VoiceCapture {
    recognizer: Option<Arc<dyn SpeechRecognizer>>,
    listening: bool,
}

impl VoiceCapture {
    /// Capture without a platform recognizer (affordance hidden)
    pub fn new() -> Self {
        Self {
            recognizer: None,
            listening: false,
        }
    }

    /// Capture backed by a platform recognizer
    pub fn with_recognizer(recognizer: Arc<dyn SpeechRecognizer>) -> Self {
        Self {
            recognizer: Some(recognizer),
            listening: false,
        }
    }

    /// Whether the platform offers speech recognition
    pub fn is_available(&self) -> bool {
        self.recognizer.is_some()
    }

    /// Whether a capture is in flight
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Begin listening. A no-op when a capture is already in flight.
    pub fn start(&mut self) -> Result<(), VoiceError> {
        let recognizer = self
            .recognizer
            .as_ref()
            .ok_or(VoiceError::CaptureUnavailable)?;
        if self.listening {
            return Ok(());
        }
        self.listening = true;
        recognizer.begin_capture();
        tracing::debug!("voice capture started");
        Ok(())
    }

    /// Stop listening without waiting for a result
    pub fn stop(&mut self) {
        if !self.listening {
            return;
        }
        self.listening = false;
        if let Some(recognizer) = &self.recognizer {
            recognizer.end_capture();
        }
    }

    /// Toggle the capture (the microphone button behavior)
    pub fn toggle(&mut self) -> Result<(), VoiceError> {
        if self.listening {
            self.stop();
            Ok(())
        } else {
            self.start()
        }
    }

    /// Feed a terminal recognizer event.
    ///
    /// Any terminal event ends the in-flight listen. A recognized
    /// transcript is returned for the caller to place into its input box;
    /// capture failures are logged and swallowed.
    pub fn handle_event(&mut self, event: CaptureEvent) -> Option<String> {
        self.stop();
        match event {
            CaptureEvent::Transcript(text) => Some(text),
            CaptureEvent::Error(reason) => {
                tracing::warn!(%reason, "voice capture failed");
                None
            }
            CaptureEvent::End => None,
        }
    }
}

impl Default for VoiceCapture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct MockRecognizer {
        begins: AtomicUsize,
        ends: AtomicUsize,
    }

    impl SpeechRecognizer for MockRecognizer {
        fn begin_capture(&self) {
            self.begins.fetch_add(1, Ordering::SeqCst);
        }
        fn end_capture(&self) {
            self.ends.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_unavailable_without_recognizer() {
        let mut capture = VoiceCapture::new();
        assert!(!capture.is_available());
        assert_eq!(capture.start(), Err(VoiceError::CaptureUnavailable));
        assert!(!capture.is_listening());
    }

    #[test]
    fn test_start_is_idempotent_while_listening() {
        let recognizer = Arc::new(MockRecognizer::default());
        let mut capture = VoiceCapture::with_recognizer(recognizer.clone());

        capture.start().unwrap();
        capture.start().unwrap();

        assert!(capture.is_listening());
        assert_eq!(recognizer.begins.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_transcript_ends_the_listen() {
        let recognizer = Arc::new(MockRecognizer::default());
        let mut capture = VoiceCapture::with_recognizer(recognizer.clone());

        capture.start().unwrap();
        let text = capture.handle_event(CaptureEvent::Transcript("hello solar".into()));

        assert_eq!(text.as_deref(), Some("hello solar"));
        assert!(!capture.is_listening());
        assert_eq!(recognizer.ends.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_error_resets_state_without_result() {
        let recognizer = Arc::new(MockRecognizer::default());
        let mut capture = VoiceCapture::with_recognizer(recognizer);

        capture.start().unwrap();
        let text = capture.handle_event(CaptureEvent::Error("no-speech".into()));

        assert_eq!(text, None);
        assert!(!capture.is_listening());
    }

    #[test]
    fn test_toggle_round_trip() {
        let recognizer = Arc::new(MockRecognizer::default());
        let mut capture = VoiceCapture::with_recognizer(recognizer.clone());

        capture.toggle().unwrap();
        assert!(capture.is_listening());
        capture.toggle().unwrap();
        assert!(!capture.is_listening());
        assert_eq!(recognizer.ends.load(Ordering::SeqCst), 1);
    }
}
