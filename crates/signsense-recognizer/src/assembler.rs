//! Word assembly from stable symbols
//!
//! Stable letters accumulate into a candidate word; whole-word gestures
//! bypass accumulation entirely. The inactivity timeout ("the user stopped
//! signing") is a longer horizon than the stabilizer cooldown and finalizes
//! the in-progress word through the dictionary.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use signsense_gesture::Symbol;

use crate::detection::Detection;
use crate::dictionary;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblerConfig {
    /// No new stable letters for this long finalizes the in-progress word.
    pub inactivity_timeout: Duration,
    /// Confidence on work-in-progress word detections.
    pub interim_confidence: f32,
    /// Confidence on whole-word gesture detections.
    pub word_confidence: f32,
    /// Confidence on finalized (dictionary-resolved or spelled) words.
    pub final_confidence: f32,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            inactivity_timeout: Duration::from_millis(1500),
            interim_confidence: 0.6,
            word_confidence: 0.85,
            final_confidence: 0.75,
        }
    }
}

pub struct WordAssembler {
    current: String,
    last_stable_at: Option<Instant>,
    cfg: AssemblerConfig,
}

impl WordAssembler {
    pub fn new(cfg: AssemblerConfig) -> Self {
        Self {
            current: String::new(),
            last_stable_at: None,
            cfg,
        }
    }

    pub fn current_word(&self) -> &str {
        &self.current
    }

    /// Handle one stable symbol from the stabilizer.
    pub fn on_stable(&mut self, symbol: Symbol, now: Instant) -> Option<Detection> {
        self.last_stable_at = Some(now);

        match symbol {
            Symbol::Letter(letter) => {
                // A held letter re-stabilizes every cooldown window; only
                // append when it differs from the word's last character.
                if self.current.chars().last() == Some(letter) {
                    return None;
                }
                self.current.push(letter);
                debug!(word = %self.current, "letter appended");
                Some(Detection::new(
                    self.current.clone(),
                    self.cfg.interim_confidence,
                ))
            }
            Symbol::Word(sign) => {
                self.current.clear();
                Some(Detection::new(
                    sign.token().to_lowercase(),
                    self.cfg.word_confidence,
                ))
            }
        }
    }

    /// Frame-driven timeout check; called every frame regardless of new
    /// events.
    pub fn tick(&mut self, now: Instant) -> Option<Detection> {
        if self.current.is_empty() {
            return None;
        }
        let last = self.last_stable_at?;
        if now.saturating_duration_since(last) <= self.cfg.inactivity_timeout {
            return None;
        }

        let resolved = dictionary::resolve(&self.current);
        debug!(word = %self.current, resolved = %resolved, "word finalized");
        self.current.clear();
        self.last_stable_at = None;
        Some(Detection::new(resolved, self.cfg.final_confidence))
    }

    pub fn reset(&mut self) {
        self.current.clear();
        self.last_stable_at = None;
    }
}

impl Default for WordAssembler {
    fn default() -> Self {
        Self::new(AssemblerConfig::default())
    }
}
