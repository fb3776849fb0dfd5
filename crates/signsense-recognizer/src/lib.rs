//! Word assembly and the recognition session
//!
//! Ties the pipeline together: stable symbols from the gesture layer are
//! accumulated into words, resolved against a dictionary of common ASL
//! words, and pushed to the consumer as `Detection`s. The session owns the
//! per-frame scheduling, the landmark provider handle, and the lifecycle.

pub mod assembler;
pub mod detection;
pub mod dictionary;
pub mod pipeline;
pub mod session;

pub use assembler::{AssemblerConfig, WordAssembler};
pub use detection::Detection;
pub use pipeline::{FrameOutcome, FramePipeline, PipelineConfig};
pub use session::{RecognizerSession, SessionConfig, SessionHandle, SessionOptions};
