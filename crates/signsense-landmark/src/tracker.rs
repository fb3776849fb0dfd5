//! Landmark provider capability
//!
//! The recognition loop treats hand tracking as an opaque capability: submit
//! one frame, get back zero or more 21-point hands. Any conforming
//! implementation (on-device model, remote service, scripted test source) is
//! substitutable.

use async_trait::async_trait;

use signsense_foundation::RecognizerError;

use crate::types::HandLandmarks;

/// An opaque handle to one video frame. The tracker implementation decides
/// how to reach the pixel data; the pipeline only carries dimensions and a
/// timestamp through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoFrame {
    pub width: u32,
    pub height: u32,
    pub timestamp_ms: u64,
}

/// Per-frame tracker output: zero or more detected hands, first hand is the
/// primary one fed to the classifier.
#[derive(Debug, Clone, Default)]
pub struct TrackedHands {
    pub hands: Vec<HandLandmarks>,
}

impl TrackedHands {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn one(hand: HandLandmarks) -> Self {
        Self { hands: vec![hand] }
    }

    pub fn primary(&self) -> Option<&HandLandmarks> {
        self.hands.first()
    }
}

/// Capability contract for landmark providers.
///
/// `detect` is the only suspension point in the frame loop; the loop awaits
/// completion before scheduling the next frame, so there is never more than
/// one frame in flight.
#[async_trait]
pub trait HandTracker: Send {
    async fn detect(&mut self, frame: &VideoFrame) -> Result<TrackedHands, RecognizerError>;

    /// Release any resources held by the provider. Called once on session
    /// stop; must be safe to call on an already-closed tracker.
    fn close(&mut self) {}
}
