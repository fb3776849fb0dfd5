//! Synthetic hand poses
//!
//! Geometrically plausible 21-point hands for tests and demos, built around a
//! fixed palm (width ~0.12 in normalized coordinates, wrist low in the
//! frame). Fingers are either curled onto the palm or extended along a
//! direction; the thumb has tucked/out/up/curled-to-index variants.
//!
//! Shipped in the library rather than under `#[cfg(test)]` so integration
//! tests and the demo binary can share one source of truth for what each
//! pose looks like.

use crate::constants::*;
use crate::types::{HandLandmarks, LandmarkPoint};

const WRIST_POS: (f32, f32) = (0.50, 0.80);
const THUMB_CMC_POS: (f32, f32) = (0.44, 0.74);
const THUMB_MCP_POS: (f32, f32) = (0.40, 0.68);
const INDEX_MCP_POS: (f32, f32) = (0.44, 0.55);
const MIDDLE_MCP_POS: (f32, f32) = (0.48, 0.54);
const RING_MCP_POS: (f32, f32) = (0.52, 0.55);
const PINKY_MCP_POS: (f32, f32) = (0.56, 0.57);

#[derive(Debug, Clone, Copy)]
enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    fn mcp(self) -> (f32, f32) {
        match self {
            Finger::Index => INDEX_MCP_POS,
            Finger::Middle => MIDDLE_MCP_POS,
            Finger::Ring => RING_MCP_POS,
            Finger::Pinky => PINKY_MCP_POS,
        }
    }

    fn indices(self) -> (usize, usize, usize, usize) {
        match self {
            Finger::Index => (INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP),
            Finger::Middle => (MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP),
            Finger::Ring => (RING_MCP, RING_PIP, RING_DIP, RING_TIP),
            Finger::Pinky => (PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP),
        }
    }
}

struct PoseBuilder {
    points: [LandmarkPoint; LANDMARK_COUNT],
}

impl PoseBuilder {
    /// Base pose: all four fingers curled, thumb tucked across the palm.
    fn new() -> Self {
        let mut points = [LandmarkPoint::new(0.0, 0.0, 0.0); LANDMARK_COUNT];
        points[WRIST] = pt(WRIST_POS);
        points[THUMB_CMC] = pt(THUMB_CMC_POS);
        points[THUMB_MCP] = pt(THUMB_MCP_POS);
        let mut builder = Self { points };
        builder.thumb_tucked();
        for finger in [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky] {
            builder.curl(finger);
        }
        builder
    }

    fn curl(&mut self, finger: Finger) {
        let (mx, my) = finger.mcp();
        let (mcp, pip, dip, tip) = finger.indices();
        self.points[mcp] = LandmarkPoint::new(mx, my, 0.0);
        self.points[pip] = LandmarkPoint::new(mx, my - 0.03, 0.0);
        self.points[dip] = LandmarkPoint::new(mx, my - 0.01, 0.0);
        // Tip folds back level with the palm.
        self.points[tip] = LandmarkPoint::new(mx, my + 0.02, 0.0);
    }

    /// Extend a finger from its MCP along a unit direction.
    fn extend_toward(&mut self, finger: Finger, dir: (f32, f32)) {
        let (mx, my) = finger.mcp();
        let len = (dir.0 * dir.0 + dir.1 * dir.1).sqrt();
        let (dx, dy) = (dir.0 / len, dir.1 / len);
        let (mcp, pip, dip, tip) = finger.indices();
        self.points[mcp] = LandmarkPoint::new(mx, my, 0.0);
        self.points[pip] = LandmarkPoint::new(mx + dx * 0.05, my + dy * 0.05, 0.0);
        self.points[dip] = LandmarkPoint::new(mx + dx * 0.09, my + dy * 0.09, 0.0);
        self.points[tip] = LandmarkPoint::new(mx + dx * 0.13, my + dy * 0.13, 0.0);
    }

    fn extend_up(&mut self, finger: Finger) {
        self.extend_toward(finger, (0.0, -1.0));
    }

    fn thumb_tucked(&mut self) {
        self.points[THUMB_IP] = LandmarkPoint::new(0.42, 0.64, 0.0);
        self.points[THUMB_TIP] = LandmarkPoint::new(0.44, 0.63, 0.0);
    }

    /// Thumb extended sideways, away from the palm.
    fn thumb_out(&mut self) {
        self.points[THUMB_IP] = LandmarkPoint::new(0.33, 0.645, 0.0);
        self.points[THUMB_TIP] = LandmarkPoint::new(0.27, 0.62, 0.0);
    }

    /// Thumb extended straight up.
    fn thumb_up(&mut self) {
        self.points[THUMB_IP] = LandmarkPoint::new(0.40, 0.62, 0.0);
        self.points[THUMB_TIP] = LandmarkPoint::new(0.40, 0.55, 0.0);
    }

    /// Thumb curved over to touch the curled index fingertip.
    fn thumb_to_index(&mut self) {
        self.points[THUMB_IP] = LandmarkPoint::new(0.37, 0.61, 0.0);
        self.points[THUMB_TIP] = LandmarkPoint::new(0.42, 0.58, 0.0);
    }

    fn shift(&mut self, dx: f32, dy: f32) {
        for p in self.points.iter_mut() {
            p.x += dx;
            p.y += dy;
        }
    }

    fn build(self) -> HandLandmarks {
        HandLandmarks::from_points(self.points.to_vec())
            .expect("builder always produces 21 points")
    }
}

fn pt((x, y): (f32, f32)) -> LandmarkPoint {
    LandmarkPoint::new(x, y, 0.0)
}

/// Closed fist, thumb tucked: letter A.
pub fn fist() -> HandLandmarks {
    PoseBuilder::new().build()
}

/// All five fingers extended: HELLO.
pub fn open_hand() -> HandLandmarks {
    let mut b = PoseBuilder::new();
    for finger in [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky] {
        b.extend_up(finger);
    }
    b.thumb_out();
    b.build()
}

/// Four fingers extended, thumb tucked, hand low in the frame: letter B.
pub fn flat_hand() -> HandLandmarks {
    let mut b = PoseBuilder::new();
    for finger in [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky] {
        b.extend_up(finger);
    }
    b.build()
}

/// Flat hand raised near the face (wrist in the upper half): THANKYOU.
pub fn raised_flat_hand() -> HandLandmarks {
    let mut b = PoseBuilder::new();
    for finger in [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky] {
        b.extend_up(finger);
    }
    b.shift(0.0, -0.45);
    b.build()
}

/// Thumb up, all other fingers closed: YES.
pub fn thumbs_up() -> HandLandmarks {
    let mut b = PoseBuilder::new();
    b.thumb_up();
    b.build()
}

/// Index finger only, thumb tucked: letter D.
pub fn point() -> HandLandmarks {
    let mut b = PoseBuilder::new();
    b.extend_up(Finger::Index);
    b.build()
}

/// Index up, thumb out sideways: letter L.
pub fn l_shape() -> HandLandmarks {
    let mut b = PoseBuilder::new();
    b.extend_up(Finger::Index);
    b.thumb_out();
    b.build()
}

/// Index and middle extended and spread apart: letter V.
pub fn peace() -> HandLandmarks {
    let mut b = PoseBuilder::new();
    b.extend_up(Finger::Index);
    b.extend_toward(Finger::Middle, (0.45, -0.9));
    b.build()
}

/// Index and middle extended together, pointing up: letter U.
pub fn two_up_together() -> HandLandmarks {
    let mut b = PoseBuilder::new();
    b.extend_up(Finger::Index);
    b.extend_up(Finger::Middle);
    b.build()
}

/// Index and middle extended together, pointing sideways: letter H.
pub fn two_sideways_together() -> HandLandmarks {
    let mut b = PoseBuilder::new();
    b.extend_toward(Finger::Index, (-1.0, 0.0));
    b.extend_toward(Finger::Middle, (-1.0, 0.0));
    b.build()
}

/// Index, middle and ring extended with the thumb out: letter W.
pub fn three_up() -> HandLandmarks {
    let mut b = PoseBuilder::new();
    b.extend_up(Finger::Index);
    b.extend_up(Finger::Middle);
    b.extend_up(Finger::Ring);
    b.thumb_out();
    b.build()
}

/// Pinky only, thumb tucked: letter I.
pub fn pinky_up() -> HandLandmarks {
    let mut b = PoseBuilder::new();
    b.extend_up(Finger::Pinky);
    b.build()
}

/// Thumb and pinky extended: letter Y.
pub fn hang_loose() -> HandLandmarks {
    let mut b = PoseBuilder::new();
    b.extend_up(Finger::Pinky);
    b.thumb_out();
    b.build()
}

/// Thumb curved onto the curled index fingertip: letter O.
pub fn ring_pose() -> HandLandmarks {
    let mut b = PoseBuilder::new();
    b.thumb_to_index();
    b.build()
}

/// A hand with every coordinate NaN. Structurally valid (21 points) but
/// geometrically meaningless; the classifier must return no symbol.
pub fn nan_hand() -> HandLandmarks {
    let points = vec![LandmarkPoint::new(f32::NAN, f32::NAN, f32::NAN); LANDMARK_COUNT];
    HandLandmarks::from_points(points).expect("21 points")
}

/// Raw point list with too few entries, for construction-failure tests.
pub fn short_point_list() -> Vec<LandmarkPoint> {
    vec![LandmarkPoint::new(0.5, 0.5, 0.0); LANDMARK_COUNT - 1]
}
