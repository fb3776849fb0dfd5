use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// A single tracked anatomical point on a hand.
///
/// `x`/`y` are normalized to [0, 1] relative to the frame, with `y`
/// increasing downward. `z` is relative depth; more negative is closer to
/// the camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandmarkPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl LandmarkPoint {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance in normalized 3D space.
    ///
    /// NaN coordinates propagate into a NaN distance; all threshold
    /// comparisons against NaN are false, so malformed points behave as
    /// "not extended" rather than panicking.
    pub fn distance(&self, other: &LandmarkPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LandmarkError {
    #[error("Hand requires {LANDMARK_COUNT} landmarks, got {0}")]
    WrongPointCount(usize),
}

/// One detected hand in a single frame: exactly 21 points in the fixed
/// anatomical order (wrist=0, thumb 1-4, index 5-8, middle 9-12, ring 13-16,
/// pinky 17-20).
///
/// Construction validates the point count, so downstream code never indexes
/// past the available array. Point *values* are not validated here; the
/// classifier treats non-finite coordinates defensively.
#[derive(Debug, Clone, PartialEq)]
pub struct HandLandmarks {
    points: [LandmarkPoint; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn from_points(points: Vec<LandmarkPoint>) -> Result<Self, LandmarkError> {
        let len = points.len();
        let points: [LandmarkPoint; LANDMARK_COUNT] = points
            .try_into()
            .map_err(|_| LandmarkError::WrongPointCount(len))?;
        Ok(Self { points })
    }

    pub fn points(&self) -> &[LandmarkPoint; LANDMARK_COUNT] {
        &self.points
    }

    pub fn wrist(&self) -> &LandmarkPoint {
        &self.points[WRIST]
    }

    pub fn thumb_mcp(&self) -> &LandmarkPoint {
        &self.points[THUMB_MCP]
    }

    pub fn thumb_ip(&self) -> &LandmarkPoint {
        &self.points[THUMB_IP]
    }

    pub fn thumb_tip(&self) -> &LandmarkPoint {
        &self.points[THUMB_TIP]
    }

    pub fn index_mcp(&self) -> &LandmarkPoint {
        &self.points[INDEX_MCP]
    }

    pub fn index_pip(&self) -> &LandmarkPoint {
        &self.points[INDEX_PIP]
    }

    pub fn index_tip(&self) -> &LandmarkPoint {
        &self.points[INDEX_TIP]
    }

    pub fn middle_mcp(&self) -> &LandmarkPoint {
        &self.points[MIDDLE_MCP]
    }

    pub fn middle_pip(&self) -> &LandmarkPoint {
        &self.points[MIDDLE_PIP]
    }

    pub fn middle_tip(&self) -> &LandmarkPoint {
        &self.points[MIDDLE_TIP]
    }

    pub fn ring_mcp(&self) -> &LandmarkPoint {
        &self.points[RING_MCP]
    }

    pub fn ring_pip(&self) -> &LandmarkPoint {
        &self.points[RING_PIP]
    }

    pub fn ring_tip(&self) -> &LandmarkPoint {
        &self.points[RING_TIP]
    }

    pub fn pinky_mcp(&self) -> &LandmarkPoint {
        &self.points[PINKY_MCP]
    }

    pub fn pinky_pip(&self) -> &LandmarkPoint {
        &self.points[PINKY_PIP]
    }

    pub fn pinky_tip(&self) -> &LandmarkPoint {
        &self.points[PINKY_TIP]
    }

    /// Palm width: index-MCP to pinky-MCP distance. The per-hand scale
    /// reference every classifier threshold is expressed against.
    pub fn palm_width(&self) -> f32 {
        self.index_mcp().distance(self.pinky_mcp())
    }

    /// Scale all x/y coordinates by `factor` around the palm center,
    /// leaving `z` untouched. Used to verify scale invariance of the
    /// classifier.
    pub fn scaled_around_palm(&self, factor: f32) -> Self {
        let cx = (self.index_mcp().x + self.pinky_mcp().x + self.wrist().x) / 3.0;
        let cy = (self.index_mcp().y + self.pinky_mcp().y + self.wrist().y) / 3.0;
        let mut points = self.points;
        for p in points.iter_mut() {
            p.x = cx + (p.x - cx) * factor;
            p.y = cy + (p.y - cy) * factor;
        }
        Self { points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_point_lists() {
        let points = vec![LandmarkPoint::new(0.5, 0.5, 0.0); 20];
        assert_eq!(
            HandLandmarks::from_points(points),
            Err(LandmarkError::WrongPointCount(20))
        );
    }

    #[test]
    fn rejects_long_point_lists() {
        let points = vec![LandmarkPoint::new(0.5, 0.5, 0.0); 22];
        assert_eq!(
            HandLandmarks::from_points(points),
            Err(LandmarkError::WrongPointCount(22))
        );
    }

    #[test]
    fn accepts_exactly_21_points() {
        let points = vec![LandmarkPoint::new(0.5, 0.5, 0.0); 21];
        let hand = HandLandmarks::from_points(points).unwrap();
        assert_eq!(hand.points().len(), LANDMARK_COUNT);
    }

    #[test]
    fn nan_distances_compare_false() {
        let good = LandmarkPoint::new(0.5, 0.5, 0.0);
        let bad = LandmarkPoint::new(f32::NAN, 0.5, 0.0);
        let d = good.distance(&bad);
        assert!(d.is_nan());
        assert!(!(d > 0.0));
        assert!(!(d < 1.0));
    }

    #[test]
    fn scaling_preserves_palm_relative_ratios() {
        let mut points = vec![LandmarkPoint::new(0.5, 0.5, 0.0); 21];
        points[INDEX_MCP] = LandmarkPoint::new(0.44, 0.55, 0.0);
        points[PINKY_MCP] = LandmarkPoint::new(0.56, 0.57, 0.0);
        points[INDEX_TIP] = LandmarkPoint::new(0.44, 0.40, 0.0);
        let hand = HandLandmarks::from_points(points).unwrap();

        let scaled = hand.scaled_around_palm(2.0);
        let ratio = hand.index_tip().distance(hand.index_mcp()) / hand.palm_width();
        let scaled_ratio =
            scaled.index_tip().distance(scaled.index_mcp()) / scaled.palm_width();
        assert!((ratio - scaled_ratio).abs() < 1e-5);
    }
}
