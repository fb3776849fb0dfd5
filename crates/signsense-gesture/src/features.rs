//! Per-hand geometric features
//!
//! Extracts the palm-width scale and the five finger-extension flags once
//! per frame; the pose rules work entirely on this struct.

use signsense_landmark::{HandLandmarks, LandmarkPoint};

use crate::config::ClassifierConfig;

#[derive(Debug, Clone)]
pub struct HandFeatures {
    /// Index-MCP to pinky-MCP distance; the scale every threshold is
    /// expressed against.
    pub palm_width: f32,

    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,

    pub wrist: LandmarkPoint,
    pub thumb_ip: LandmarkPoint,
    pub thumb_tip: LandmarkPoint,
    pub index_pip: LandmarkPoint,
    pub index_tip: LandmarkPoint,
    pub middle_pip: LandmarkPoint,
    pub middle_tip: LandmarkPoint,
    pub ring_tip: LandmarkPoint,
    pub pinky_tip: LandmarkPoint,
}

impl HandFeatures {
    /// Returns None when the palm scale is degenerate (coincident or
    /// non-finite knuckle landmarks); nothing can be classified without a
    /// scale reference.
    pub fn extract(hand: &HandLandmarks, cfg: &ClassifierConfig) -> Option<Self> {
        let palm_width = hand.palm_width();
        if !palm_width.is_finite() || palm_width < 1e-4 {
            return None;
        }

        let wrist = *hand.wrist();
        let thumb = thumb_extended(hand, cfg);
        let index = finger_extended(
            hand.index_tip(),
            hand.index_pip(),
            hand.index_mcp(),
            &wrist,
            palm_width,
            cfg,
        );
        let middle = finger_extended(
            hand.middle_tip(),
            hand.middle_pip(),
            hand.middle_mcp(),
            &wrist,
            palm_width,
            cfg,
        );
        let ring = finger_extended(
            hand.ring_tip(),
            hand.ring_pip(),
            hand.ring_mcp(),
            &wrist,
            palm_width,
            cfg,
        );
        let pinky = finger_extended(
            hand.pinky_tip(),
            hand.pinky_pip(),
            hand.pinky_mcp(),
            &wrist,
            palm_width,
            cfg,
        );

        Some(Self {
            palm_width,
            thumb,
            index,
            middle,
            ring,
            pinky,
            wrist,
            thumb_ip: *hand.thumb_ip(),
            thumb_tip: *hand.thumb_tip(),
            index_pip: *hand.index_pip(),
            index_tip: *hand.index_tip(),
            middle_pip: *hand.middle_pip(),
            middle_tip: *hand.middle_tip(),
            ring_tip: *hand.ring_tip(),
            pinky_tip: *hand.pinky_tip(),
        })
    }

    pub fn extended_count(&self) -> usize {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
            .iter()
            .filter(|&&f| f)
            .count()
    }

    /// Horizontal separation of the index and middle fingertips, as used by
    /// the U/H/V disambiguation.
    pub fn index_middle_spread(&self) -> f32 {
        (self.index_tip.x - self.middle_tip.x).abs()
    }
}

/// The thumb bends sideways rather than up, so its extension test is a pure
/// segment-length ratio: tip clearly away from the IP joint relative to the
/// IP-MCP segment.
fn thumb_extended(hand: &HandLandmarks, cfg: &ClassifierConfig) -> bool {
    let extension = hand.thumb_tip().distance(hand.thumb_ip());
    let base = hand.thumb_ip().distance(hand.thumb_mcp());
    extension > base * cfg.thumb_extension_ratio
}

/// 2-of-3 extension vote, tolerant of per-frame landmark jitter:
/// (a) tip at or above the PIP in image space,
/// (b) tip farther from the wrist than the PIP,
/// (c) tip sufficiently separated from the PIP relative to the finger's own
///     segment length.
///
/// NaN coordinates fail every comparison, so malformed fingers read as not
/// extended.
fn finger_extended(
    tip: &LandmarkPoint,
    pip: &LandmarkPoint,
    mcp: &LandmarkPoint,
    wrist: &LandmarkPoint,
    palm_width: f32,
    cfg: &ClassifierConfig,
) -> bool {
    let tip_to_wrist = tip.distance(wrist);
    let pip_to_wrist = pip.distance(wrist);
    let tip_to_pip = tip.distance(pip);
    let pip_to_mcp = pip.distance(mcp);

    let extended_up = tip.y < pip.y + cfg.up_epsilon_scale * palm_width;
    let extended_out = tip_to_wrist > pip_to_wrist * cfg.wrist_distance_ratio;
    let sufficient_extension = tip_to_pip > pip_to_mcp * cfg.segment_extension_ratio;

    let criteria_met = [extended_up, extended_out, sufficient_extension]
        .iter()
        .filter(|&&c| c)
        .count();
    criteria_met >= 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use signsense_landmark::synth;

    #[test]
    fn fist_has_no_extended_fingers() {
        let cfg = ClassifierConfig::default();
        let features = HandFeatures::extract(&synth::fist(), &cfg).unwrap();
        assert_eq!(features.extended_count(), 0);
    }

    #[test]
    fn open_hand_extends_all_five() {
        let cfg = ClassifierConfig::default();
        let features = HandFeatures::extract(&synth::open_hand(), &cfg).unwrap();
        assert!(features.thumb);
        assert!(features.index);
        assert!(features.middle);
        assert!(features.ring);
        assert!(features.pinky);
    }

    #[test]
    fn flat_hand_keeps_thumb_tucked() {
        let cfg = ClassifierConfig::default();
        let features = HandFeatures::extract(&synth::flat_hand(), &cfg).unwrap();
        assert!(!features.thumb);
        assert_eq!(features.extended_count(), 4);
    }

    #[test]
    fn nan_hand_yields_no_features() {
        let cfg = ClassifierConfig::default();
        assert!(HandFeatures::extract(&synth::nan_hand(), &cfg).is_none());
    }

    #[test]
    fn sideways_fingers_still_read_extended() {
        let cfg = ClassifierConfig::default();
        let features =
            HandFeatures::extract(&synth::two_sideways_together(), &cfg).unwrap();
        assert!(features.index);
        assert!(features.middle);
        assert!(!features.ring);
    }
}
