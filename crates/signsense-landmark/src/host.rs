//! Host-side traits: the live video source and the landmark overlay
//!
//! Video acquisition and pixel rendering are external collaborators. The
//! session only needs readiness/dimension queries from the source and a
//! resize + per-frame hand handoff to the overlay.

use crate::tracker::VideoFrame;
use crate::types::HandLandmarks;

/// A live video source. Dimensions become available asynchronously once the
/// source has decoded metadata; until then the frame loop reschedules
/// without processing.
pub trait VideoSource: Send {
    /// Actual decoded dimensions, or None until metadata is available.
    fn dimensions(&self) -> Option<(u32, u32)>;

    /// Whether enough data has been decoded to sample a frame.
    fn is_ready(&self) -> bool;

    /// Handle to the current frame. Only called after `is_ready` and
    /// `dimensions` both report a usable source.
    fn grab_frame(&mut self) -> VideoFrame;
}

/// Render target for the landmark overlay. The session keeps it sized to the
/// source's actual decoded dimensions and hands it each frame's detections;
/// drawing is the host's business.
pub trait OverlayTarget: Send {
    fn resize(&mut self, width: u32, height: u32);

    /// Called once per processed frame, with zero or more hands. An empty
    /// slice means "clear".
    fn render_hands(&mut self, hands: &[HandLandmarks]);
}

/// No-op overlay for headless use and tests.
#[derive(Debug, Default)]
pub struct NullOverlay;

impl OverlayTarget for NullOverlay {
    fn resize(&mut self, _width: u32, _height: u32) {}

    fn render_hands(&mut self, _hands: &[HandLandmarks]) {}
}
