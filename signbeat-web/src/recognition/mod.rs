//! Recognition module - similarity scoring, template matching, stability
//!
//! Re-exports only. All logic in submodules.

mod clock;
mod matcher;
mod pose;
mod session;
mod similarity;
mod template;
mod time_window;

pub use clock::{Clock, ManualClock, SystemClock};
pub use matcher::{find_best_match, match_sign_template, SignMatcher};
pub use pose::{
    classify_pose, detect_finger_states, detect_fist, detect_open_hand, detect_palm_direction,
    detect_thumbs_up, detect_v_sign, is_finger_curled, is_thumb_curled, FingerState,
    PalmDirection, Pose, CURL_RATIO, PALM_AXIS_THRESHOLD, THUMB_CURL_MARGIN,
};
pub use session::RecognitionSession;
pub use similarity::{
    cosine_similarity, dtw_distance, euclidean_similarity, hybrid_similarity, SimilarityWeights,
};
pub use template::{Handedness, MatchOptions, PreparedTemplate, RecognitionResult, SignTemplate};
pub use time_window::{TimeWindowMatcher, DEFAULT_MIN_FRAMES, DEFAULT_WINDOW_MS};
