//! End-to-end pipeline scenarios driven frame by frame with a virtual clock:
//! synthetic landmark streams in, detections out.

use std::time::Duration;

use signsense_foundation::{Clock, TestClock};
use signsense_landmark::{synth, TrackedHands};
use signsense_recognizer::{Detection, FramePipeline, PipelineConfig};

const FRAME: Duration = Duration::from_millis(33);

struct Harness {
    pipeline: FramePipeline,
    clock: TestClock,
}

impl Harness {
    fn new() -> Self {
        Self {
            pipeline: FramePipeline::new(PipelineConfig::default()),
            clock: TestClock::new(),
        }
    }

    /// Advance one frame period and process the given hands.
    fn frame(&mut self, hands: TrackedHands) -> Vec<Detection> {
        self.clock.advance(FRAME);
        self.pipeline.process(&hands, self.clock.now()).detections
    }

    fn run(&mut self, hands: impl Fn() -> TrackedHands, frames: usize) -> Vec<Detection> {
        let mut out = Vec::new();
        for _ in 0..frames {
            out.extend(self.frame(hands()));
        }
        out
    }
}

#[test]
fn held_hello_pose_emits_exactly_one_detection() {
    let mut h = Harness::new();

    // 20 frames (~0.66 s) of an open hand.
    let detections = h.run(|| TrackedHands::one(synth::open_hand()), 20);

    assert_eq!(
        detections,
        vec![Detection::new("hello", 0.85)],
        "a held pose must emit once, not per frame"
    );
}

#[test]
fn hello_fires_within_the_first_half_second() {
    let mut h = Harness::new();
    let mut fired_at = None;
    for i in 0..20 {
        if !h.frame(TrackedHands::one(synth::open_hand())).is_empty() {
            fired_at = Some(i);
            break;
        }
    }
    let frame = fired_at.expect("hello never stabilized");
    assert!(
        frame < 15,
        "stability should be reached inside the vote window, fired at frame {frame}"
    );
}

#[test]
fn spelled_h_i_finalizes_to_hi() {
    let mut h = Harness::new();
    let mut detections = Vec::new();

    // ~0.6 s of the H pose, ~0.9 s of the I pose (the second letter must
    // outlast the stabilizer cooldown), then 2 s of empty frames.
    detections.extend(h.run(|| TrackedHands::one(synth::two_sideways_together()), 18));
    detections.extend(h.run(|| TrackedHands::one(synth::pinky_up()), 27));
    detections.extend(h.run(TrackedHands::none, 61));

    // Interim spellings then the dictionary-resolved word.
    assert_eq!(
        detections,
        vec![
            Detection::new("H", 0.6),
            Detection::new("HI", 0.6),
            Detection::new("hi", 0.75),
        ]
    );
}

#[test]
fn finalized_word_clears_the_accumulator() {
    let mut h = Harness::new();
    h.run(|| TrackedHands::one(synth::two_sideways_together()), 18);
    h.run(|| TrackedHands::one(synth::pinky_up()), 27);
    h.run(TrackedHands::none, 61);
    assert_eq!(h.pipeline.current_word(), "");

    // Silence after finalize emits nothing further.
    let after = h.run(TrackedHands::none, 30);
    assert!(after.is_empty());
}

#[test]
fn word_gesture_interrupts_spelling() {
    let mut h = Harness::new();
    let mut detections = Vec::new();

    detections.extend(h.run(|| TrackedHands::one(synth::two_sideways_together()), 18));
    // A thumbs-up lands before the inactivity timeout; needs to outlast the
    // cooldown from the H event.
    detections.extend(h.run(|| TrackedHands::one(synth::thumbs_up()), 27));

    assert_eq!(detections[0], Detection::new("H", 0.6));
    assert!(
        detections.contains(&Detection::new("yes", 0.85)),
        "word gesture missing from {detections:?}"
    );
    // The in-progress spelling was dropped in favor of the word gesture.
    assert_eq!(h.pipeline.current_word(), "");
}

#[test]
fn occlusion_does_not_lose_the_word() {
    let mut h = Harness::new();
    let mut detections = Vec::new();

    detections.extend(h.run(|| TrackedHands::one(synth::two_sideways_together()), 18));
    // Hand briefly leaves the frame (well under the inactivity timeout).
    detections.extend(h.run(TrackedHands::none, 10));
    assert_eq!(h.pipeline.current_word(), "H");

    detections.extend(h.run(|| TrackedHands::one(synth::pinky_up()), 27));
    assert_eq!(h.pipeline.current_word(), "HI");
}
