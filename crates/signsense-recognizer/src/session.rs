//! The recognition session: frame scheduling, lifecycle, and output
//!
//! An explicit session object rather than module state: each session owns
//! its provider handle, buffers, and timers, so independent sessions (tests,
//! re-initialization) never cross-contaminate. Re-initializing against the
//! same video source requires stopping the prior session first; the session
//! takes exclusive ownership of the source and overlay to make concurrent
//! drawing impossible.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use serde::{Deserialize, Serialize};

use signsense_foundation::{Clock, RealClock, RecognizerError, RecoveryStrategy};
use signsense_landmark::{HandTracker, OverlayTarget, VideoSource};
use signsense_telemetry::{FpsTracker, PipelineMetrics};

use crate::detection::Detection;
use crate::pipeline::{FramePipeline, PipelineConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub pipeline: PipelineConfig,
    /// Frame tick period; stands in for the host's display-refresh signal.
    pub frame_interval: Duration,
    /// Returned by capture-on-demand when no word is in progress.
    pub idle_prompt: String,
    /// Detection channel depth; the loop backpressures when full.
    pub channel_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            pipeline: PipelineConfig::default(),
            frame_interval: Duration::from_millis(33),
            idle_prompt: "Hello, how can I help you?".to_string(),
            channel_capacity: 32,
        }
    }
}

/// Non-serializable session collaborators.
pub struct SessionOptions {
    pub config: SessionConfig,
    pub clock: Arc<dyn Clock>,
    pub metrics: PipelineMetrics,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            config: SessionConfig::default(),
            clock: Arc::new(RealClock::new()),
            metrics: PipelineMetrics::new(),
        }
    }
}

struct SessionShared {
    alive: AtomicBool,
    current_word: Mutex<String>,
    idle_prompt: String,
}

/// Handle to a running recognition session.
pub struct SessionHandle {
    shared: Arc<SessionShared>,
    task: JoinHandle<()>,
    pub metrics: PipelineMetrics,
}

impl SessionHandle {
    /// Request the loop to stop. Idempotent: safe to call repeatedly and on
    /// an already-stopped session. The liveness flag is checked at the top
    /// of the loop body and again after the provider await, so no frame is
    /// processed after this returns.
    pub fn stop(&self) {
        if self.shared.alive.swap(false, Ordering::AcqRel) {
            info!(target: "recognizer", "session stop requested");
        }
    }

    pub fn is_alive(&self) -> bool {
        self.shared.alive.load(Ordering::Acquire)
    }

    /// Capture-on-demand: best currently-known candidate without waiting
    /// for a stable event. Never blocks, never errors; callers get the
    /// in-progress word or the idle prompt.
    pub fn capture_now(&self) -> Detection {
        let word = self.shared.current_word.lock().clone();
        if word.is_empty() {
            Detection::new(self.shared.idle_prompt.clone(), 0.5)
        } else {
            Detection::new(word, 0.6)
        }
    }

    /// Stop and wait for the loop task to finish its cleanup.
    pub async fn shutdown(self) {
        self.stop();
        if let Err(e) = self.task.await {
            if !e.is_cancelled() {
                warn!(target: "recognizer", error = %e, "session task ended abnormally");
            }
        }
    }
}

/// Factory for recognition sessions.
pub struct RecognizerSession;

impl RecognizerSession {
    /// Start the frame loop. The tracker is constructed by the caller, so
    /// provider construction failures surface there; once a session starts,
    /// per-frame failures are absorbed.
    pub fn start(
        tracker: Box<dyn HandTracker>,
        video: Box<dyn VideoSource>,
        overlay: Box<dyn OverlayTarget>,
        options: SessionOptions,
    ) -> (SessionHandle, mpsc::Receiver<Detection>) {
        let SessionOptions {
            config,
            clock,
            metrics,
        } = options;

        let (event_tx, event_rx) = mpsc::channel(config.channel_capacity);
        let shared = Arc::new(SessionShared {
            alive: AtomicBool::new(true),
            current_word: Mutex::new(String::new()),
            idle_prompt: config.idle_prompt.clone(),
        });

        let task = tokio::spawn(run_loop(
            tracker,
            video,
            overlay,
            config,
            clock,
            metrics.clone(),
            Arc::clone(&shared),
            event_tx,
        ));

        info!(target: "recognizer", "recognition session started");
        (
            SessionHandle {
                shared,
                task,
                metrics,
            },
            event_rx,
        )
    }
}

#[allow(clippy::too_many_arguments)]
async fn run_loop(
    mut tracker: Box<dyn HandTracker>,
    mut video: Box<dyn VideoSource>,
    mut overlay: Box<dyn OverlayTarget>,
    config: SessionConfig,
    clock: Arc<dyn Clock>,
    metrics: PipelineMetrics,
    shared: Arc<SessionShared>,
    event_tx: mpsc::Sender<Detection>,
) {
    let mut pipeline = FramePipeline::new(config.pipeline);
    let mut fps = FpsTracker::new();
    let mut overlay_dims: Option<(u32, u32)> = None;

    let mut interval = tokio::time::interval(config.frame_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    'frames: loop {
        interval.tick().await;
        if !shared.alive.load(Ordering::Acquire) {
            break;
        }

        // Source-not-ready is a wait state, not an error.
        let dims = video.dimensions();
        let ready = video.is_ready();
        let (width, height) = match dims {
            Some((w, h)) if w > 0 && h > 0 && ready => (w, h),
            _ => {
                metrics.record_skip();
                continue;
            }
        };

        // Overlay tracks the source's actual decoded dimensions, which can
        // change after start (metadata arriving late, source switch).
        if overlay_dims != Some((width, height)) {
            overlay.resize(width, height);
            overlay_dims = Some((width, height));
            debug!(target: "recognizer", width, height, "overlay sized to source");
        }

        let frame = video.grab_frame();
        metrics.record_frame();

        // The one suspension point: a single in-flight frame, awaited to
        // completion before the next is scheduled.
        let tracked = match tracker.detect(&frame).await {
            Ok(tracked) => tracked,
            Err(e) => {
                warn!(target: "recognizer", error = %e, "tracker failed on frame");
                metrics.record_tracker_error();
                match e.recovery_strategy() {
                    RecoveryStrategy::Continue => continue,
                    RecoveryStrategy::Stop => {
                        shared.alive.store(false, Ordering::Release);
                        break;
                    }
                }
            }
        };

        // stop() may have been called while the provider was running.
        if !shared.alive.load(Ordering::Acquire) {
            break;
        }

        overlay.render_hands(&tracked.hands);
        if !tracked.hands.is_empty() {
            metrics.hands_seen.fetch_add(1, Ordering::Relaxed);
        }

        let outcome = pipeline.process(&tracked, clock.now());
        if outcome.symbol.is_some() {
            metrics.symbols_classified.fetch_add(1, Ordering::Relaxed);
        }
        if outcome.stable.is_some() {
            metrics.stable_events.fetch_add(1, Ordering::Relaxed);
        }
        if outcome.finalized {
            metrics.words_finalized.fetch_add(1, Ordering::Relaxed);
        }

        *shared.current_word.lock() = pipeline.current_word().to_string();

        for detection in outcome.detections {
            metrics.record_detection();
            if event_tx.send(detection).await.is_err() {
                info!(target: "recognizer", error = %RecognizerError::ChannelClosed, "stopping session");
                shared.alive.store(false, Ordering::Release);
                break 'frames;
            }
        }

        if let Some(f) = fps.tick() {
            metrics.set_frame_fps(f);
        }
    }

    // Cleanup runs whether stop() was called or the consumer went away.
    tracker.close();
    pipeline.reset();
    shared.current_word.lock().clear();
    shared.alive.store(false, Ordering::Release);
    debug!(target: "recognizer", "session loop exited");
}
