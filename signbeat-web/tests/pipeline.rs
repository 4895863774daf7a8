//! End-to-end recognition scenarios: frames in, debounced decisions out

use signbeat_web::geometry::{flatten, HandFrame, Landmark, THUMB_TIP};
use signbeat_web::recognition::{
    classify_pose, detect_fist, find_best_match, match_sign_template, Clock, ManualClock,
    MatchOptions, Pose, RecognitionResult, RecognitionSession, SignTemplate, TimeWindowMatcher,
};
use signbeat_web::store::{MemoryTemplateStore, TemplateRecorder, TemplateStore};
use signbeat_web::RecognitionConfig;

const WRIST_POS: (f32, f32) = (0.5, 0.9);

/// Upright hand in the image plane. `curled[k]` folds finger k (index..pinky)
/// back toward the wrist; `thumb_out` swings the thumb tip outward.
fn hand(curled: [bool; 4], thumb_out: bool) -> Vec<Landmark> {
    let mut pts = vec![Landmark::new(WRIST_POS.0, WRIST_POS.1, 0.0)];
    pts.push(Landmark::new(0.45, 0.85, 0.0));
    pts.push(Landmark::new(0.40, 0.80, 0.0));
    pts.push(Landmark::new(0.35, 0.75, 0.0));
    pts.push(Landmark::new(if thumb_out { 0.38 } else { 0.25 }, 0.70, 0.0));
    for (k, &c) in curled.iter().enumerate() {
        let x = 0.42 + 0.05 * k as f32;
        let ys = if c { [0.70, 0.62, 0.68, 0.72] } else { [0.70, 0.60, 0.55, 0.50] };
        pts.extend(ys.iter().map(|&y| Landmark::new(x, y, 0.0)));
    }
    pts
}

fn moved(points: &[Landmark], scale: f32, dx: f32, dy: f32) -> Vec<Landmark> {
    points
        .iter()
        .map(|p| Landmark::new(p.x * scale + dx, p.y * scale + dy, p.z * scale))
        .collect()
}

fn frame_of(points: &[Landmark]) -> HandFrame {
    HandFrame::from_flat(&flatten(points), 1, "Right").unwrap()
}

fn recorded_library() -> Vec<SignTemplate> {
    let mut recorder = TemplateRecorder::new(MemoryTemplateStore::new());
    let poses = [
        ("open", hand([false; 4], true)),
        ("fist", hand([true; 4], false)),
        ("v", hand([false, false, true, true], false)),
    ];
    for (name, points) in &poses {
        recorder.record(&frame_of(points), name, name, 0.8).unwrap();
    }
    recorder.store().load_all().unwrap()
}

#[test]
fn test_stability_window_scenario() {
    let clock = ManualClock::new(0.0);
    let mut window = TimeWindowMatcher::with_clock(500.0, 10, clock.clone());

    for _ in 0..9 {
        window.add_result(RecognitionResult::new("open_hand", 0.9, 0.8, clock.now_ms()));
        clock.advance(10.0);
    }
    assert!(!window.is_stable_match("open_hand"));

    window.add_result(RecognitionResult::new("open_hand", 0.9, 0.8, clock.now_ms()));
    assert!(window.is_stable_match("open_hand"));

    clock.advance(600.0);
    assert!(!window.is_stable_match("open_hand"));

    for _ in 0..10 {
        window.add_result(RecognitionResult::new("open_hand", 0.9, 0.8, clock.now_ms()));
    }
    assert!(window.is_stable_match("open_hand"));
    window.reset();
    assert!(!window.is_stable_match("open_hand"));
}

#[test]
fn test_threshold_is_inclusive() {
    assert!(!RecognitionResult::new("fist", 0.79, 0.80, 0.0).matched);
    assert!(RecognitionResult::new("fist", 0.80, 0.80, 0.0).matched);
}

#[test]
fn test_fist_ignores_thumb() {
    assert!(detect_fist(&hand([true; 4], false)));
    assert!(detect_fist(&hand([true; 4], true)));
    assert!(!detect_fist(&hand([true, true, true, false], true)));
}

#[test]
fn test_pose_classification() {
    assert_eq!(classify_pose(&hand([false; 4], true)), Some(Pose::OpenHand));
    assert_eq!(classify_pose(&hand([true; 4], false)), Some(Pose::Fist));
    assert_eq!(classify_pose(&hand([false, false, true, true], true)), Some(Pose::VSign));
    assert_eq!(classify_pose(&hand([true, false, true, false], true)), None);
}

#[test]
fn test_recorded_templates_match_moved_hand() {
    let library = recorded_library();
    assert_eq!(library.len(), 3);

    // same pose, different position and distance from the camera
    let frame = frame_of(&moved(&hand([true; 4], false), 1.7, -0.3, 0.2));
    let best = find_best_match(frame.primary_landmarks().unwrap(), &library, None).unwrap();
    assert_eq!(best.sign_name, "fist");
    assert!(best.confidence > 0.99);
    assert!(best.matched);
}

#[test]
fn test_threshold_override_takes_precedence() {
    let library = recorded_library();
    let open = library.iter().find(|t| t.name == "open").unwrap();
    let fist = hand([true; 4], false);

    let default = match_sign_template(&fist, open, None);
    let strict = match_sign_template(&fist, open, Some(&MatchOptions::with_threshold(1.0)));
    let lenient = match_sign_template(&fist, open, Some(&MatchOptions::with_threshold(0.0)));
    assert_eq!(default.confidence, strict.confidence);
    assert!(!strict.matched);
    assert!(lenient.matched);
}

#[test]
fn test_no_detection_scores_zero() {
    let library = recorded_library();
    let result = match_sign_template(&[], &library[0], None);
    assert_eq!(result.confidence, 0.0);
    assert!(!result.matched);
    assert!(find_best_match(&[], &library, None).is_none());
    assert!(find_best_match(&hand([true; 4], false), &[], None).is_none());
}

#[test]
fn test_session_holds_and_loses_target() {
    let library = recorded_library();
    let clock = ManualClock::new(1_000.0);
    let mut session = RecognitionSession::with_clock(&RecognitionConfig::default(), clock.clone());
    session.set_target(library.iter().find(|t| t.name == "v").cloned());

    let v = moved(&hand([false, false, true, true], false), 0.8, 0.1, 0.0);
    for _ in 0..10 {
        let result = session.process(Some(v.as_slice())).unwrap();
        assert!(result.matched);
        clock.advance(30.0);
    }
    assert!(session.is_matched());
    assert!(session.average_confidence() > 0.99);

    // hand leaves the camera: nothing is fed and the window ages out
    assert!(session.process(None).is_none());
    clock.advance(600.0);
    assert!(!session.is_matched());
}

#[test]
fn test_thumb_position_changes_open_hand_score() {
    let library = recorded_library();
    let open = library.iter().find(|t| t.name == "open").unwrap();
    let mut tucked = hand([false; 4], true);
    tucked[THUMB_TIP] = Landmark::new(0.55, 0.75, 0.0);

    let exact = match_sign_template(&hand([false; 4], true), open, None);
    let changed = match_sign_template(&tucked, open, None);
    assert!(changed.confidence < exact.confidence);
}
