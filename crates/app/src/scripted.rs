//! Scripted landmark scenes for the demo binary
//!
//! Without a camera and tracking model on hand, the demo replays synthetic
//! landmark streams through the same provider trait a real tracker would
//! implement. Each scene is a timed sequence of held poses.

use std::time::Duration;

use async_trait::async_trait;

use signsense_foundation::RecognizerError;
use signsense_landmark::{synth, HandTracker, TrackedHands, VideoFrame, VideoSource};

type PoseFn = fn() -> TrackedHands;

fn hand(pose: fn() -> signsense_landmark::HandLandmarks) -> TrackedHands {
    TrackedHands::one(pose())
}

/// A timed sequence of poses. Durations are wall-scene time; the tracker
/// converts them to frame counts at the configured frame interval.
pub struct Scene {
    pub name: &'static str,
    steps: Vec<(Duration, PoseFn)>,
}

impl Scene {
    /// One held open hand, then the hand leaves the frame.
    pub fn hello() -> Self {
        Self {
            name: "hello",
            steps: vec![
                (Duration::from_millis(1000), || hand(synth::open_hand)),
                (Duration::from_millis(500), TrackedHands::none),
            ],
        }
    }

    /// Fingerspelled H then I, then silence long enough to finalize "hi".
    pub fn spell_hi() -> Self {
        Self {
            name: "spell-hi",
            steps: vec![
                (Duration::from_millis(600), || {
                    hand(synth::two_sideways_together)
                }),
                (Duration::from_millis(900), || hand(synth::pinky_up)),
                (Duration::from_millis(2000), TrackedHands::none),
            ],
        }
    }

    /// Thumbs up held, then a thank-you flick.
    pub fn conversation() -> Self {
        Self {
            name: "conversation",
            steps: vec![
                (Duration::from_millis(900), || hand(synth::thumbs_up)),
                (Duration::from_millis(300), TrackedHands::none),
                (Duration::from_millis(1200), || hand(synth::raised_flat_hand)),
                (Duration::from_millis(500), TrackedHands::none),
            ],
        }
    }

    /// No hands at all; useful when only the typed fallback is exercised.
    pub fn idle() -> Self {
        Self {
            name: "idle",
            steps: vec![(Duration::from_millis(100), TrackedHands::none)],
        }
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|(d, _)| *d).sum()
    }
}

/// Landmark provider that replays a scene frame by frame, then reports an
/// empty frame forever.
pub struct SceneTracker {
    frames: Vec<PoseFn>,
    cursor: usize,
}

impl SceneTracker {
    pub fn new(scene: &Scene, frame_interval: Duration) -> Self {
        let per_frame = frame_interval.as_millis().max(1);
        let mut frames = Vec::new();
        for (duration, pose) in &scene.steps {
            let count = (duration.as_millis() / per_frame).max(1) as usize;
            frames.extend(std::iter::repeat(*pose).take(count));
        }
        Self { frames, cursor: 0 }
    }

    pub fn finished(&self) -> bool {
        self.cursor >= self.frames.len()
    }
}

#[async_trait]
impl HandTracker for SceneTracker {
    async fn detect(&mut self, _frame: &VideoFrame) -> Result<TrackedHands, RecognizerError> {
        let hands = match self.frames.get(self.cursor) {
            Some(pose) => pose(),
            None => TrackedHands::none(),
        };
        self.cursor += 1;
        Ok(hands)
    }
}

/// Always-ready stand-in for a live camera feed.
pub struct StaticVideoSource {
    width: u32,
    height: u32,
    frame_counter: u64,
}

impl StaticVideoSource {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            frame_counter: 0,
        }
    }
}

impl VideoSource for StaticVideoSource {
    fn dimensions(&self) -> Option<(u32, u32)> {
        Some((self.width, self.height))
    }

    fn is_ready(&self) -> bool {
        true
    }

    fn grab_frame(&mut self) -> VideoFrame {
        self.frame_counter += 1;
        VideoFrame {
            width: self.width,
            height: self.height,
            timestamp_ms: self.frame_counter * 33,
        }
    }
}
