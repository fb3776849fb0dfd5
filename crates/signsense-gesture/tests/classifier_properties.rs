//! Property-style tests for the classifier and stabilizer: scale invariance,
//! malformed-input safety, and debounce behavior under noisy frame streams.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use signsense_gesture::{
    GestureClassifier, StabilizerConfig, Symbol, TemporalStabilizer, WordSign,
};
use signsense_landmark::synth;
use signsense_landmark::{HandLandmarks, LandmarkPoint, LANDMARK_COUNT};

fn all_poses() -> Vec<(&'static str, HandLandmarks)> {
    vec![
        ("fist", synth::fist()),
        ("open_hand", synth::open_hand()),
        ("flat_hand", synth::flat_hand()),
        ("raised_flat_hand", synth::raised_flat_hand()),
        ("thumbs_up", synth::thumbs_up()),
        ("point", synth::point()),
        ("l_shape", synth::l_shape()),
        ("peace", synth::peace()),
        ("two_up_together", synth::two_up_together()),
        ("two_sideways_together", synth::two_sideways_together()),
        ("three_up", synth::three_up()),
        ("pinky_up", synth::pinky_up()),
        ("hang_loose", synth::hang_loose()),
        ("ring_pose", synth::ring_pose()),
    ]
}

#[test]
fn classification_is_scale_invariant() {
    let classifier = GestureClassifier::default();
    for (name, hand) in all_poses() {
        let baseline = classifier.classify(&hand);
        assert!(baseline.is_some(), "pose {name} should classify");
        for factor in [0.6_f32, 0.8, 1.25, 1.5] {
            let scaled = hand.scaled_around_palm(factor);
            assert_eq!(
                classifier.classify(&scaled),
                baseline,
                "pose {name} changed classification at scale {factor}"
            );
        }
    }
}

#[test]
fn classification_is_deterministic() {
    let classifier = GestureClassifier::default();
    for (name, hand) in all_poses() {
        let a = classifier.classify(&hand);
        let b = classifier.classify(&hand);
        assert_eq!(a, b, "pose {name} classified differently on repeat");
    }
}

#[test]
fn malformed_hands_never_panic() {
    let classifier = GestureClassifier::default();

    assert_eq!(classifier.classify(&synth::nan_hand()), None);

    // One NaN coordinate anywhere must degrade to "no gesture" at worst,
    // never panic.
    let open = synth::open_hand();
    for i in 0..LANDMARK_COUNT {
        let mut points = open.points().to_vec();
        points[i] = LandmarkPoint::new(f32::NAN, points[i].y, points[i].z);
        let hand = HandLandmarks::from_points(points).unwrap();
        let _ = classifier.classify(&hand);
    }

    // Infinite coordinates likewise.
    let mut points = synth::fist().points().to_vec();
    points[8] = LandmarkPoint::new(f32::INFINITY, f32::NEG_INFINITY, 0.0);
    let hand = HandLandmarks::from_points(points).unwrap();
    let _ = classifier.classify(&hand);
}

#[test]
fn short_point_lists_fail_construction() {
    assert!(HandLandmarks::from_points(synth::short_point_list()).is_err());
}

#[test]
fn landmark_jitter_does_not_flip_classification() {
    // The 2-of-3 extension vote exists to tolerate provider jitter. A small
    // perturbation of every landmark must keep the symbol for clearly held
    // poses.
    let classifier = GestureClassifier::default();
    let mut rng = StdRng::seed_from_u64(42);
    for (name, hand) in [
        ("open_hand", synth::open_hand()),
        ("fist", synth::fist()),
        ("point", synth::point()),
    ] {
        let expected = classifier.classify(&hand);
        for _ in 0..50 {
            let points: Vec<LandmarkPoint> = hand
                .points()
                .iter()
                .map(|p| {
                    LandmarkPoint::new(
                        p.x + rng.gen_range(-0.004..0.004),
                        p.y + rng.gen_range(-0.004..0.004),
                        p.z,
                    )
                })
                .collect();
            let jittered = HandLandmarks::from_points(points).unwrap();
            assert_eq!(
                classifier.classify(&jittered),
                expected,
                "jitter flipped pose {name}"
            );
        }
    }
}

#[test]
fn stabilizer_filters_minority_noise() {
    // A noisy stream that is mostly HELLO with occasional misreads must
    // stabilize to HELLO and never emit the minority symbol.
    let mut stab = TemporalStabilizer::new(StabilizerConfig::default());
    let mut rng = StdRng::seed_from_u64(7);
    let start = Instant::now();

    let hello = Symbol::Word(WordSign::Hello);
    let noise = Symbol::Letter('A');
    let mut events = Vec::new();
    for i in 0..120u64 {
        let symbol = if rng.gen_bool(0.1) { noise } else { hello };
        let now = start + Duration::from_millis(33 * i);
        if let Some(ev) = stab.observe(Some(symbol), now) {
            events.push(ev.symbol);
        }
    }

    assert!(!events.is_empty(), "majority symbol should stabilize");
    assert!(
        events.iter().all(|&s| s == hello),
        "noise symbol leaked through: {events:?}"
    );
}

#[test]
fn stabilizer_tracks_pose_changes() {
    // Half a second of one pose followed by half a second of another should
    // produce stable events for both, in order.
    let mut stab = TemporalStabilizer::new(StabilizerConfig::default());
    let start = Instant::now();
    let mut events = Vec::new();

    for i in 0..30u64 {
        let now = start + Duration::from_millis(33 * i);
        if let Some(ev) = stab.observe(Some(Symbol::Letter('H')), now) {
            events.push(ev.symbol);
        }
    }
    for i in 30..60u64 {
        let now = start + Duration::from_millis(33 * i);
        if let Some(ev) = stab.observe(Some(Symbol::Letter('I')), now) {
            events.push(ev.symbol);
        }
    }

    assert_eq!(events.first(), Some(&Symbol::Letter('H')));
    assert!(events.contains(&Symbol::Letter('I')));
    let first_i = events.iter().position(|&s| s == Symbol::Letter('I')).unwrap();
    assert!(
        events[..first_i].iter().all(|&s| s == Symbol::Letter('H')),
        "events out of order: {events:?}"
    );
}
