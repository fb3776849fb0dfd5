use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shared metrics for cross-task pipeline monitoring
#[derive(Clone, Default)]
pub struct PipelineMetrics {
    // Frame loop
    pub frames_in: Arc<AtomicU64>,      // Frames submitted to the tracker
    pub frames_skipped: Arc<AtomicU64>, // Source not ready, rescheduled
    pub tracker_errors: Arc<AtomicU64>, // Per-frame tracker failures (absorbed)

    // Recognition stages
    pub hands_seen: Arc<AtomicU64>,         // Frames with at least one hand
    pub symbols_classified: Arc<AtomicU64>, // Frames producing a symbol
    pub stable_events: Arc<AtomicU64>,      // Symbols that cleared the vote window
    pub words_finalized: Arc<AtomicU64>,    // Inactivity-timeout finalizations

    // Output
    pub detections_emitted: Arc<AtomicU64>,
    pub last_detection_time: Arc<RwLock<Option<Instant>>>,

    // Frame rate tracking
    pub frame_fps: Arc<AtomicU64>, // Frames per second * 10
}

impl PipelineMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_frame(&self) {
        self.frames_in.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_skip(&self) {
        self.frames_skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_tracker_error(&self) {
        self.tracker_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_detection(&self) {
        self.detections_emitted.fetch_add(1, Ordering::Relaxed);
        *self.last_detection_time.write() = Some(Instant::now());
    }

    pub fn set_frame_fps(&self, fps: f64) {
        self.frame_fps
            .store((fps * 10.0).round() as u64, Ordering::Relaxed);
    }

    pub fn frame_fps(&self) -> f64 {
        self.frame_fps.load(Ordering::Relaxed) as f64 / 10.0
    }

    pub fn time_since_last_detection(&self) -> Option<Duration> {
        self.last_detection_time.read().map(|t| t.elapsed())
    }
}

#[derive(Debug)]
pub struct FpsTracker {
    last_update: Instant,
    frame_count: u64,
}

impl FpsTracker {
    pub fn new() -> Self {
        Self {
            last_update: Instant::now(),
            frame_count: 0,
        }
    }

    pub fn tick(&mut self) -> Option<f64> {
        self.frame_count += 1;
        let elapsed = self.last_update.elapsed();

        if elapsed >= Duration::from_secs(1) {
            let fps = self.frame_count as f64 / elapsed.as_secs_f64();
            self.last_update = Instant::now();
            self.frame_count = 0;
            Some(fps)
        } else {
            None
        }
    }
}

impl Default for FpsTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_start_at_zero() {
        let metrics = PipelineMetrics::new();
        assert_eq!(metrics.frames_in.load(Ordering::Relaxed), 0);
        assert_eq!(metrics.detections_emitted.load(Ordering::Relaxed), 0);
        assert!(metrics.time_since_last_detection().is_none());
    }

    #[test]
    fn detection_updates_timestamp() {
        let metrics = PipelineMetrics::new();
        metrics.record_detection();
        assert_eq!(metrics.detections_emitted.load(Ordering::Relaxed), 1);
        assert!(metrics.time_since_last_detection().is_some());
    }

    #[test]
    fn fps_fixed_point_round_trip() {
        let metrics = PipelineMetrics::new();
        metrics.set_frame_fps(29.7);
        assert!((metrics.frame_fps() - 29.7).abs() < 0.11);
    }

    #[test]
    fn fps_tracker_reports_after_window() {
        let mut tracker = FpsTracker::new();
        // Within the first second no report is produced.
        assert!(tracker.tick().is_none());
    }
}
