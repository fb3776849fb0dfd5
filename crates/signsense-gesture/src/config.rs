use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Classifier tunables. Every distance threshold is a fraction of the
/// per-hand palm width, so classification is robust to hand size and
/// distance from the camera. The defaults are the empirically tuned values;
/// none of them is load-bearing beyond "relative behavior holds".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Thumb extended when tip-to-IP exceeds this fraction of IP-to-MCP.
    /// The thumb bends sideways, not up, so it gets its own heuristic.
    pub thumb_extension_ratio: f32,
    /// Finger tip must be this factor farther from the wrist than its PIP.
    pub wrist_distance_ratio: f32,
    /// Tip-to-PIP must exceed this fraction of the finger's own PIP-to-MCP
    /// segment length.
    pub segment_extension_ratio: f32,
    /// Tolerance (in palm widths) for the "tip at or above PIP" check.
    pub up_epsilon_scale: f32,
    /// How far above its IP (in palm widths) the thumb tip must sit to
    /// count as "thumb up".
    pub thumb_up_margin_scale: f32,
    /// "Touch": two tips within this fraction of the palm width.
    pub touch_scale: f32,
    /// Lower bound for the O ring so a fully collapsed thumb does not pass.
    pub touch_floor_scale: f32,
    /// Adjacent extended tips closer than this (in palm widths) count as
    /// held together (U/H); farther than `pair_apart_scale` counts as
    /// spread (V).
    pub pair_together_scale: f32,
    pub pair_apart_scale: f32,
    /// Wrist above this frame line reads as "near the face" (THANKYOU cue).
    pub face_line_y: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            thumb_extension_ratio: 0.6,
            wrist_distance_ratio: 1.05,
            segment_extension_ratio: 0.4,
            up_epsilon_scale: 0.15,
            thumb_up_margin_scale: 0.3,
            touch_scale: 0.5,
            touch_floor_scale: 0.15,
            pair_together_scale: 0.4,
            pair_apart_scale: 0.5,
            face_line_y: 0.5,
        }
    }
}

/// Stabilizer tunables: a symbol must dominate the recent vote window and
/// clear the cooldown before it becomes a stable event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StabilizerConfig {
    /// Buffer capacity; ~2 seconds at ~30 fps.
    pub buffer_capacity: usize,
    /// Vote window over the most recent buffered symbols (~0.5 s).
    pub vote_window: usize,
    /// Minimum occurrences of the current frame's symbol inside the window.
    pub min_votes: usize,
    /// Minimum gap between stable events for any symbol.
    pub cooldown: Duration,
}

impl Default for StabilizerConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: 60,
            vote_window: 15,
            min_votes: 6,
            cooldown: Duration::from_millis(800),
        }
    }
}

impl StabilizerConfig {
    /// Faster profile for interactive demos: shorter window, same shape.
    pub fn responsive() -> Self {
        Self {
            vote_window: 8,
            min_votes: 4,
            cooldown: Duration::from_millis(500),
            ..Default::default()
        }
    }
}
