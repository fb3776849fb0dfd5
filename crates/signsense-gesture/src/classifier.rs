//! Ordered pose-rule classification
//!
//! Each pose is a named predicate over `HandFeatures`; the table is evaluated
//! first-match-wins. Whole-word poses come before letter poses so a partially
//! extended open hand cannot be misread as a fist, and within letters the
//! more specific shapes (thumb-ring O) precede the general ones (fist A).
//! There is no confidence scoring at this layer.

use signsense_landmark::HandLandmarks;
use tracing::trace;

use crate::config::ClassifierConfig;
use crate::features::HandFeatures;
use crate::symbol::{Symbol, WordSign};

type PosePredicate = fn(&HandFeatures, &ClassifierConfig) -> bool;

struct PoseRule {
    symbol: Symbol,
    matches: PosePredicate,
}

/// Evaluation order is the priority order; do not sort.
static POSE_RULES: &[PoseRule] = &[
    PoseRule {
        symbol: Symbol::Word(WordSign::Yes),
        matches: yes,
    },
    PoseRule {
        symbol: Symbol::Word(WordSign::Hello),
        matches: hello,
    },
    PoseRule {
        symbol: Symbol::Word(WordSign::ThankYou),
        matches: thank_you,
    },
    PoseRule {
        symbol: Symbol::Letter('O'),
        matches: letter_o,
    },
    PoseRule {
        symbol: Symbol::Letter('A'),
        matches: letter_a,
    },
    PoseRule {
        symbol: Symbol::Letter('B'),
        matches: letter_b,
    },
    PoseRule {
        symbol: Symbol::Letter('D'),
        matches: letter_d,
    },
    PoseRule {
        symbol: Symbol::Letter('L'),
        matches: letter_l,
    },
    PoseRule {
        symbol: Symbol::Letter('U'),
        matches: letter_u,
    },
    PoseRule {
        symbol: Symbol::Letter('H'),
        matches: letter_h,
    },
    PoseRule {
        symbol: Symbol::Letter('V'),
        matches: letter_v,
    },
    PoseRule {
        symbol: Symbol::Letter('W'),
        matches: letter_w,
    },
    PoseRule {
        symbol: Symbol::Letter('I'),
        matches: letter_i,
    },
    PoseRule {
        symbol: Symbol::Letter('Y'),
        matches: letter_y,
    },
];

/// Thumb up, everything else closed.
fn yes(f: &HandFeatures, c: &ClassifierConfig) -> bool {
    f.thumb
        && !f.index
        && !f.middle
        && !f.ring
        && !f.pinky
        && f.thumb_tip.y < f.thumb_ip.y - c.thumb_up_margin_scale * f.palm_width
}

/// Open hand, all five fingers extended.
fn hello(f: &HandFeatures, _c: &ClassifierConfig) -> bool {
    f.thumb && f.index && f.middle && f.ring && f.pinky
}

/// Flat hand (no thumb) held near the face.
fn thank_you(f: &HandFeatures, c: &ClassifierConfig) -> bool {
    !f.thumb && f.index && f.middle && f.ring && f.pinky && f.wrist.y < c.face_line_y
}

/// Thumb and index tip form a ring; other fingers curled.
fn letter_o(f: &HandFeatures, c: &ClassifierConfig) -> bool {
    if f.index || f.middle || f.ring || f.pinky || !f.thumb {
        return false;
    }
    let d = f.thumb_tip.distance(&f.index_tip);
    d > c.touch_floor_scale * f.palm_width && d < c.touch_scale * f.palm_width
}

/// Closed fist.
fn letter_a(f: &HandFeatures, _c: &ClassifierConfig) -> bool {
    f.extended_count() == 0
}

/// Four fingers up, thumb tucked across the palm.
fn letter_b(f: &HandFeatures, _c: &ClassifierConfig) -> bool {
    !f.thumb && f.index && f.middle && f.ring && f.pinky
}

/// Index only, thumb tucked.
fn letter_d(f: &HandFeatures, _c: &ClassifierConfig) -> bool {
    f.index && !f.thumb && !f.middle && !f.ring && !f.pinky
}

/// Index and thumb extended at a clear angle.
fn letter_l(f: &HandFeatures, c: &ClassifierConfig) -> bool {
    f.index
        && f.thumb
        && !f.middle
        && !f.ring
        && !f.pinky
        && f.thumb_tip.distance(&f.index_tip) > c.touch_scale * f.palm_width
}

/// Index and middle together, pointing up.
fn letter_u(f: &HandFeatures, c: &ClassifierConfig) -> bool {
    two_front_fingers(f)
        && f.index_middle_spread() < c.pair_together_scale * f.palm_width
        && f.index_tip.y < f.index_pip.y - c.up_epsilon_scale * f.palm_width
        && f.middle_tip.y < f.middle_pip.y - c.up_epsilon_scale * f.palm_width
}

/// Index and middle together, any direction (checked after U).
fn letter_h(f: &HandFeatures, c: &ClassifierConfig) -> bool {
    two_front_fingers(f) && f.index_middle_spread() < c.pair_together_scale * f.palm_width
}

/// Index and middle spread apart (peace sign).
fn letter_v(f: &HandFeatures, c: &ClassifierConfig) -> bool {
    two_front_fingers(f) && f.index_middle_spread() > c.pair_apart_scale * f.palm_width
}

/// Index, middle and ring up with the thumb out.
fn letter_w(f: &HandFeatures, _c: &ClassifierConfig) -> bool {
    f.thumb && f.index && f.middle && f.ring && !f.pinky
}

/// Pinky only.
fn letter_i(f: &HandFeatures, _c: &ClassifierConfig) -> bool {
    f.pinky && !f.thumb && !f.index && !f.middle && !f.ring
}

/// Thumb and pinky out, middle three curled.
fn letter_y(f: &HandFeatures, _c: &ClassifierConfig) -> bool {
    f.thumb && f.pinky && !f.index && !f.middle && !f.ring
}

fn two_front_fingers(f: &HandFeatures) -> bool {
    f.index && f.middle && !f.ring && !f.pinky && !f.thumb
}

/// Pure, deterministic hand-pose classifier.
#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    cfg: ClassifierConfig,
}

impl GestureClassifier {
    pub fn new(cfg: ClassifierConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.cfg
    }

    /// Map one hand to at most one symbol. Returns None on degenerate input
    /// or when no rule matches (ambiguous or transitional pose); never
    /// panics.
    pub fn classify(&self, hand: &HandLandmarks) -> Option<Symbol> {
        let features = HandFeatures::extract(hand, &self.cfg)?;
        let symbol = POSE_RULES
            .iter()
            .find(|rule| (rule.matches)(&features, &self.cfg))
            .map(|rule| rule.symbol);
        if let Some(s) = symbol {
            trace!(symbol = %s, extended = features.extended_count(), "pose matched");
        }
        symbol
    }
}
