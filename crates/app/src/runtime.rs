//! Application runtime: recognition session plus the acceptance voter
//!
//! The session pushes raw detections; the voter smooths them at the text
//! level and only accepted text reaches the application. Typed fallback
//! enters through the same voter so both input paths behave identically.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use signsense_accept::{Acceptance, StabilityVoter, VoterConfig};
use signsense_landmark::{HandTracker, OverlayTarget, VideoSource};
use signsense_recognizer::{
    Detection, RecognizerSession, SessionConfig, SessionHandle, SessionOptions,
};
use signsense_telemetry::PipelineMetrics;

#[derive(Clone, Default)]
pub struct AppRuntimeOptions {
    pub session: SessionConfig,
    pub voter: VoterConfig,
}

/// Handle to the running recognition stack.
pub struct AppHandle {
    pub session: SessionHandle,
    /// Text that cleared the acceptance voter, in arrival order.
    pub accepted_rx: mpsc::Receiver<String>,
    voter_handle: JoinHandle<()>,
    typed_tx: mpsc::Sender<String>,
}

impl AppHandle {
    pub fn metrics(&self) -> &PipelineMetrics {
        &self.session.metrics
    }

    /// Best currently-known candidate, without waiting for stability.
    pub fn capture_now(&self) -> Detection {
        self.session.capture_now()
    }

    /// Feed typed text through the same acceptance path as detections.
    pub async fn submit_typed(&self, text: &str) -> anyhow::Result<()> {
        self.typed_tx
            .send(text.to_string())
            .await
            .map_err(|_| anyhow::anyhow!("voter task is gone"))
    }

    /// Gracefully stop the session and drain the voter task.
    pub async fn shutdown(self) {
        info!("shutting down recognition runtime");
        self.session.shutdown().await;
        // The voter ends once the detection channel closes.
        let _ = self.voter_handle.await;
    }
}

/// Wire tracker, video source and overlay into a session and attach the
/// acceptance voter to its detection stream.
pub fn start(
    tracker: Box<dyn HandTracker>,
    video: Box<dyn VideoSource>,
    overlay: Box<dyn OverlayTarget>,
    options: AppRuntimeOptions,
) -> AppHandle {
    let (session, detections) = RecognizerSession::start(
        tracker,
        video,
        overlay,
        SessionOptions {
            config: options.session,
            ..SessionOptions::default()
        },
    );

    let (accepted_tx, accepted_rx) = mpsc::channel(32);
    let (typed_tx, typed_rx) = mpsc::channel(8);
    let voter_handle = tokio::spawn(run_voter(
        StabilityVoter::new(options.voter),
        detections,
        typed_rx,
        accepted_tx,
    ));

    AppHandle {
        session,
        accepted_rx,
        voter_handle,
        typed_tx,
    }
}

async fn run_voter(
    mut voter: StabilityVoter,
    mut detections: mpsc::Receiver<Detection>,
    mut typed: mpsc::Receiver<String>,
    accepted_tx: mpsc::Sender<String>,
) {
    loop {
        let acceptance = tokio::select! {
            detection = detections.recv() => match detection {
                Some(d) => {
                    debug!(text = %d.text, confidence = d.confidence, "detection offered");
                    voter.offer(&d)
                }
                None => break,
            },
            Some(text) = typed.recv() => voter.offer_typed(&text),
        };

        match acceptance {
            Acceptance::Accepted(text) => {
                info!(%text, "accepted");
                if accepted_tx.send(text).await.is_err() {
                    break;
                }
            }
            Acceptance::Unchanged(text) => {
                debug!(%text, "still current");
            }
            Acceptance::Pending => {}
        }
    }
    debug!("voter task exited");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use signsense_landmark::NullOverlay;

    use crate::scripted::{Scene, SceneTracker, StaticVideoSource};

    fn fast_session() -> SessionConfig {
        SessionConfig {
            frame_interval: Duration::from_millis(2),
            ..SessionConfig::default()
        }
    }

    #[tokio::test]
    async fn hello_scene_produces_accepted_text() {
        let scene = Scene::hello();
        let mut handle = start(
            Box::new(SceneTracker::new(&scene, Duration::from_millis(2))),
            Box::new(StaticVideoSource::new(640, 480)),
            Box::new(NullOverlay),
            AppRuntimeOptions {
                session: fast_session(),
                ..AppRuntimeOptions::default()
            },
        );

        let accepted = tokio::time::timeout(Duration::from_secs(5), handle.accepted_rx.recv())
            .await
            .expect("no accepted text within deadline")
            .expect("voter channel closed early");
        assert_eq!(accepted, "hello");

        handle.shutdown().await;
    }

    #[tokio::test]
    async fn responsive_stabilizer_profile_still_recognizes() {
        let scene = Scene::hello();
        let mut session = fast_session();
        session.pipeline.stabilizer = signsense_gesture::StabilizerConfig::responsive();

        let mut handle = start(
            Box::new(SceneTracker::new(&scene, Duration::from_millis(2))),
            Box::new(StaticVideoSource::new(640, 480)),
            Box::new(NullOverlay),
            AppRuntimeOptions {
                session,
                ..AppRuntimeOptions::default()
            },
        );

        let accepted = tokio::time::timeout(Duration::from_secs(5), handle.accepted_rx.recv())
            .await
            .expect("no accepted text within deadline")
            .expect("voter channel closed early");
        assert_eq!(accepted, "hello");

        handle.shutdown().await;
    }

    #[tokio::test]
    async fn typed_fallback_is_accepted_immediately() {
        let mut handle = start(
            Box::new(SceneTracker::new(&Scene::idle(), Duration::from_millis(2))),
            Box::new(StaticVideoSource::new(640, 480)),
            Box::new(NullOverlay),
            AppRuntimeOptions {
                session: fast_session(),
                ..AppRuntimeOptions::default()
            },
        );

        handle.submit_typed("meeting at noon").await.unwrap();
        let accepted = tokio::time::timeout(Duration::from_secs(5), handle.accepted_rx.recv())
            .await
            .expect("no accepted text within deadline")
            .expect("voter channel closed early");
        assert_eq!(accepted, "meeting at noon");

        handle.shutdown().await;
    }
}
