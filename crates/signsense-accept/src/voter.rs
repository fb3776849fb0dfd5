use std::collections::HashMap;
use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use signsense_recognizer::Detection;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoterConfig {
    /// Rolling buffer capacity.
    pub window: usize,
    /// Minimum votes for the winning candidate to be accepted.
    pub min_votes: usize,
    /// Detections below this confidence are discarded before entering the
    /// buffer, not merely down-weighted.
    pub min_confidence: f32,
    /// A single detection at or above this confidence is accepted
    /// immediately, without waiting for the window to fill.
    pub accept_confidence: f32,
}

impl Default for VoterConfig {
    fn default() -> Self {
        Self {
            window: 7,
            min_votes: 3,
            min_confidence: 0.5,
            accept_confidence: 0.6,
        }
    }
}

/// Outcome of offering one detection to the voter.
#[derive(Debug, Clone, PartialEq)]
pub enum Acceptance {
    /// A new text was accepted; trigger downstream side effects.
    Accepted(String),
    /// The winning candidate equals the last accepted text; refresh the
    /// displayed detection without re-triggering side effects.
    Unchanged(String),
    /// Not enough evidence yet.
    Pending,
}

struct VoteEntry {
    count: usize,
    avg_confidence: f32,
}

/// Mode-vote smoothing over recent detections.
pub struct StabilityVoter {
    buffer: VecDeque<Detection>,
    last_accepted: Option<String>,
    cfg: VoterConfig,
}

impl StabilityVoter {
    pub fn new(cfg: VoterConfig) -> Self {
        Self {
            buffer: VecDeque::with_capacity(cfg.window),
            last_accepted: None,
            cfg,
        }
    }

    /// Offer one detection from any source.
    pub fn offer(&mut self, detection: &Detection) -> Acceptance {
        let text = normalize(&detection.text);
        if text.is_empty() {
            return Acceptance::Pending;
        }

        if detection.confidence >= self.cfg.min_confidence {
            self.buffer.push_back(detection.clone());
            while self.buffer.len() > self.cfg.window {
                self.buffer.pop_front();
            }
        }

        // A very confident single frame does not wait for the window.
        if detection.confidence >= self.cfg.accept_confidence {
            return if self.last_accepted.as_deref() != Some(text.as_str()) {
                self.accept(text)
            } else {
                Acceptance::Unchanged(text)
            };
        }

        match self.tally() {
            Some((winner, entry)) if entry.count >= self.cfg.min_votes => {
                if self.last_accepted.as_deref() != Some(winner.as_str()) {
                    self.accept(winner)
                } else {
                    Acceptance::Unchanged(winner)
                }
            }
            _ => Acceptance::Pending,
        }
    }

    /// Typed-text fallback channel: raw user input enters the same
    /// acceptance path as camera-derived detections, at maximal confidence.
    pub fn offer_typed(&mut self, text: &str) -> Acceptance {
        self.offer(&Detection::new(text, 1.0))
    }

    pub fn last_accepted(&self) -> Option<&str> {
        self.last_accepted.as_deref()
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
        self.last_accepted = None;
    }

    fn accept(&mut self, text: String) -> Acceptance {
        debug!(text = %text, "detection accepted");
        self.last_accepted = Some(text.clone());
        Acceptance::Accepted(text)
    }

    /// Mode of the buffer: group by normalized text with a running average
    /// confidence per group, highest count wins, ties broken by higher
    /// average confidence.
    fn tally(&self) -> Option<(String, VoteEntry)> {
        let mut counts: HashMap<String, VoteEntry> = HashMap::new();
        for d in &self.buffer {
            let key = normalize(&d.text);
            if key.is_empty() {
                continue;
            }
            let entry = counts.entry(key).or_insert(VoteEntry {
                count: 0,
                avg_confidence: 0.0,
            });
            entry.count += 1;
            entry.avg_confidence +=
                (d.confidence - entry.avg_confidence) / entry.count as f32;
        }

        counts.into_iter().reduce(|best, candidate| {
            let (_, ref best_entry) = best;
            let (_, ref entry) = candidate;
            if entry.count > best_entry.count
                || (entry.count == best_entry.count
                    && entry.avg_confidence > best_entry.avg_confidence)
            {
                candidate
            } else {
                best
            }
        })
    }
}

impl Default for StabilityVoter {
    fn default() -> Self {
        Self::new(VoterConfig::default())
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
