//! Gesture classification and temporal stabilization
//!
//! The classifier is a pure function from one 21-point hand to at most one
//! symbol, evaluated against an ordered table of pose rules. The stabilizer
//! filters the resulting per-frame symbol stream through a sliding vote
//! window and a cooldown so transient misclassifications never reach the
//! word assembler.

pub mod classifier;
pub mod config;
pub mod features;
pub mod stabilizer;
pub mod symbol;

pub use classifier::GestureClassifier;
pub use config::{ClassifierConfig, StabilizerConfig};
pub use features::HandFeatures;
pub use stabilizer::{StableEvent, TemporalStabilizer};
pub use symbol::{Symbol, WordSign};
