//! Time-window stability gate
//!
//! Per-frame confidence flickers even while a pose is held still. This gate
//! keeps the results of the last `window_ms` milliseconds and only reports a
//! sign as matched once `min_frames` matched results fall inside the window.
//!
//! One instance per judged target. Call `reset()` when the target changes.

use std::collections::VecDeque;

use super::clock::{Clock, SystemClock};
use super::template::RecognitionResult;

/// Default window length (ms)
pub const DEFAULT_WINDOW_MS: f64 = 500.0;

/// Default number of matched frames required inside the window
pub const DEFAULT_MIN_FRAMES: usize = 10;

/// Sliding time-window debouncer over recognition results
#[derive(Clone, Debug)]
pub struct TimeWindowMatcher<C: Clock = SystemClock> {
    /// Results in arrival order, oldest first
    recent: VecDeque<RecognitionResult>,
    window_ms: f64,
    min_frames: usize,
    clock: C,
}

impl TimeWindowMatcher<SystemClock> {
    pub fn new(window_ms: f64, min_frames: usize) -> Self {
        Self::with_clock(window_ms, min_frames, SystemClock)
    }
}

impl Default for TimeWindowMatcher<SystemClock> {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_MS, DEFAULT_MIN_FRAMES)
    }
}

impl<C: Clock> TimeWindowMatcher<C> {
    pub fn with_clock(window_ms: f64, min_frames: usize, clock: C) -> Self {
        Self {
            recent: VecDeque::new(),
            window_ms,
            min_frames,
            clock,
        }
    }

    pub fn window_ms(&self) -> f64 {
        self.window_ms
    }

    pub fn min_frames(&self) -> usize {
        self.min_frames
    }

    /// Change the window parameters; queued results are kept
    pub fn configure(&mut self, window_ms: f64, min_frames: usize) {
        self.window_ms = window_ms;
        self.min_frames = min_frames;
    }

    /// Evict everything older than the window, then append `result`.
    ///
    /// Call once per live frame.
    pub fn add_result(&mut self, result: RecognitionResult) {
        let now = self.clock.now_ms();
        let window = self.window_ms;
        self.recent.retain(|r| now - r.timestamp <= window);
        self.recent.push_back(result);
    }

    /// True when at least `min_frames` matched results for `sign_name` are
    /// still inside the window. An empty window is never stable.
    pub fn is_stable_match(&self, sign_name: &str) -> bool {
        let matched = self
            .live_results(sign_name)
            .filter(|r| r.matched)
            .count();
        matched > 0 && matched >= self.min_frames
    }

    /// Mean confidence of queued results for `sign_name`, matched or not.
    ///
    /// Diagnostic only; 0 when there are none.
    pub fn average_confidence(&self, sign_name: &str) -> f32 {
        let (sum, count) = self
            .recent
            .iter()
            .filter(|r| r.sign_name == sign_name)
            .fold((0.0f32, 0usize), |(sum, count), r| (sum + r.confidence, count + 1));
        if count == 0 {
            return 0.0;
        }
        sum / count as f32
    }

    /// Number of queued results (all signs)
    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    pub fn reset(&mut self) {
        self.recent.clear();
    }

    fn live_results<'a>(&'a self, sign_name: &'a str) -> impl Iterator<Item = &'a RecognitionResult> + 'a {
        let now = self.clock.now_ms();
        let window = self.window_ms;
        self.recent
            .iter()
            .filter(move |r| r.sign_name == sign_name && now - r.timestamp <= window)
    }
}
