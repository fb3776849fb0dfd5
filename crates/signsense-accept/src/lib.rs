//! Acceptance layer between the recognizer's raw detection stream and the
//! application
//!
//! A second, independent smoothing stage: the recognizer's stabilizer smooths
//! classifier noise at the symbol level, this voter smooths at the whole-text
//! level, because any live text stream (camera pipeline, typed fallback,
//! multiple device sources) must be filtered identically regardless of
//! origin.

pub mod voter;

pub use voter::{Acceptance, StabilityVoter, VoterConfig};
