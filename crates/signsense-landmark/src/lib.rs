//! Hand landmark data model and provider abstraction for SignSense
//!
//! This crate defines the 21-point hand representation shared by the whole
//! pipeline, the `HandTracker` capability trait that any landmark provider
//! (on-device model, remote service) implements, and the host-side traits for
//! the video source and landmark overlay.

pub mod constants;
pub mod host;
pub mod synth;
pub mod tracker;
pub mod types;

pub use constants::*;
pub use host::{NullOverlay, OverlayTarget, VideoSource};
pub use tracker::{HandTracker, TrackedHands, VideoFrame};
pub use types::{HandLandmarks, LandmarkError, LandmarkPoint};
