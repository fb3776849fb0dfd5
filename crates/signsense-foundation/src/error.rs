use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Recognizer error: {0}")]
    Recognizer(#[from] RecognizerError),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[derive(Error, Debug)]
pub enum RecognizerError {
    /// The landmark provider could not be constructed. This is the one
    /// failure surfaced to the caller of session start; without a tracker
    /// no recognition can proceed.
    #[error("Tracker initialization failed: {0}")]
    TrackerInit(String),

    /// A single frame failed inside the provider. Absorbed by the frame
    /// loop; never crosses the frame boundary.
    #[error("Tracker failed on frame: {0}")]
    TrackerFrame(String),

    #[error("Detection channel closed by consumer")]
    ChannelClosed,
}

#[derive(Debug, Clone)]
pub enum RecoveryStrategy {
    /// Keep the frame loop running; the next frame may succeed.
    Continue,
    /// Stop the session; the caller decides on a fallback (e.g. text-only
    /// input).
    Stop,
}

impl RecognizerError {
    pub fn recovery_strategy(&self) -> RecoveryStrategy {
        match self {
            RecognizerError::TrackerFrame(_) => RecoveryStrategy::Continue,
            RecognizerError::TrackerInit(_) | RecognizerError::ChannelClosed => {
                RecoveryStrategy::Stop
            }
        }
    }
}
