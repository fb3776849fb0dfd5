use serde::{Deserialize, Serialize};

/// The unit exchanged between the recognition loop and its consumers.
/// Pushed, not polled: multiple per second are expected during active
/// signing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub text: String,
    /// Heuristic confidence in [0, 1]; interim words are lower than whole
    /// word gestures.
    pub confidence: f32,
}

impl Detection {
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}
