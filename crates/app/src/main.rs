use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

use signsense_app::runtime::{self, AppRuntimeOptions};
use signsense_foundation::AppError;
use signsense_gesture::StabilizerConfig;
use signsense_app::scripted::{Scene, SceneTracker, StaticVideoSource};
use signsense_landmark::NullOverlay;
use signsense_recognizer::SessionConfig;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SceneArg {
    Hello,
    SpellHi,
    Conversation,
}

#[derive(Parser, Debug)]
#[command(name = "signsense", about = "Run a scripted sign scene through the recognition pipeline")]
struct Cli {
    /// Which scripted scene to replay
    #[arg(long, value_enum, default_value = "hello")]
    scene: SceneArg,

    /// Frame interval in milliseconds
    #[arg(long, default_value_t = 33)]
    frame_ms: u64,

    /// Use the faster stabilizer profile (shorter vote window and cooldown)
    #[arg(long)]
    responsive: bool,

    /// Directory for rolling log files
    #[arg(long, env = "SIGNSENSE_LOG_DIR", default_value = "logs")]
    log_dir: String,
}

fn init_logging(log_dir: &str) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;
    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "signsense.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout.and(non_blocking_file))
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    std::mem::forget(guard);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.frame_ms == 0 {
        return Err(AppError::Config("frame interval must be at least 1 ms".into()).into());
    }
    init_logging(&cli.log_dir)?;

    let scene = match cli.scene {
        SceneArg::Hello => Scene::hello(),
        SceneArg::SpellHi => Scene::spell_hi(),
        SceneArg::Conversation => Scene::conversation(),
    };
    let frame_interval = Duration::from_millis(cli.frame_ms);
    info!(scene = scene.name, frame_ms = cli.frame_ms, "starting scripted recognition");

    let mut session = SessionConfig {
        frame_interval,
        ..SessionConfig::default()
    };
    if cli.responsive {
        session.pipeline.stabilizer = StabilizerConfig::responsive();
    }

    let mut handle = runtime::start(
        Box::new(SceneTracker::new(&scene, frame_interval)),
        Box::new(StaticVideoSource::new(640, 480)),
        Box::new(NullOverlay),
        AppRuntimeOptions {
            session,
            ..AppRuntimeOptions::default()
        },
    );

    // The scene has a fixed length; stop shortly after it has fully played
    // out, or earlier on Ctrl-C.
    let deadline = tokio::time::sleep(scene.total_duration() + Duration::from_secs(1));
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            accepted = handle.accepted_rx.recv() => match accepted {
                Some(text) => println!("> {text}"),
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                break;
            }
            _ = &mut deadline => {
                info!("scene finished");
                break;
            }
        }
    }

    let metrics = handle.metrics();
    info!(
        frames = metrics.frames_in.load(std::sync::atomic::Ordering::Relaxed),
        detections = metrics
            .detections_emitted
            .load(std::sync::atomic::Ordering::Relaxed),
        "session summary"
    );

    handle.shutdown().await;
    Ok(())
}
