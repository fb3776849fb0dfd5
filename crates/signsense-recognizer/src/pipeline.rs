//! Synchronous per-frame pipeline: classify → stabilize → assemble
//!
//! One call per frame, no I/O, no suspension. The async session drives this
//! from its single await point, and tests drive it directly with fabricated
//! timestamps.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use signsense_gesture::{
    ClassifierConfig, GestureClassifier, StabilizerConfig, Symbol, TemporalStabilizer,
};
use signsense_landmark::TrackedHands;

use crate::assembler::{AssemblerConfig, WordAssembler};
use crate::detection::Detection;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub classifier: ClassifierConfig,
    pub stabilizer: StabilizerConfig,
    pub assembler: AssemblerConfig,
}

/// What one frame produced, for telemetry and tests.
#[derive(Debug, Clone, Default)]
pub struct FrameOutcome {
    /// Raw per-frame classification of the primary hand.
    pub symbol: Option<Symbol>,
    /// Symbol that cleared the stability gate this frame, if any.
    pub stable: Option<Symbol>,
    /// Whether the inactivity timeout finalized a word this frame.
    pub finalized: bool,
    /// Detections to push to the consumer, in emission order.
    pub detections: Vec<Detection>,
}

pub struct FramePipeline {
    classifier: GestureClassifier,
    stabilizer: TemporalStabilizer,
    assembler: WordAssembler,
}

impl FramePipeline {
    pub fn new(cfg: PipelineConfig) -> Self {
        Self {
            classifier: GestureClassifier::new(cfg.classifier),
            stabilizer: TemporalStabilizer::new(cfg.stabilizer),
            assembler: WordAssembler::new(cfg.assembler),
        }
    }

    /// Process one frame's tracked hands at the given wall-clock time.
    /// Only the primary (first) hand is classified.
    pub fn process(&mut self, hands: &TrackedHands, now: Instant) -> FrameOutcome {
        let mut outcome = FrameOutcome::default();

        outcome.symbol = hands.primary().and_then(|hand| self.classifier.classify(hand));

        if let Some(event) = self.stabilizer.observe(outcome.symbol, now) {
            outcome.stable = Some(event.symbol);
            if let Some(detection) = self.assembler.on_stable(event.symbol, now) {
                outcome.detections.push(detection);
            }
        }

        // Inactivity finalization is evaluated every frame, events or not.
        if let Some(detection) = self.assembler.tick(now) {
            outcome.finalized = true;
            outcome.detections.push(detection);
        }

        outcome
    }

    pub fn current_word(&self) -> &str {
        self.assembler.current_word()
    }

    pub fn reset(&mut self) {
        self.stabilizer.reset();
        self.assembler.reset();
    }
}

impl Default for FramePipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}
