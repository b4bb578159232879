//! Motion acquisition pipeline
//!
//! Interrupt → latch → burst read → smoothing filter → event encode →
//! dispatch gate. The interrupt service routine touches nothing but the
//! latch; everything else runs in the single polling context that owns the
//! pipeline.

pub mod filter;
pub mod latch;
pub mod mode;
pub mod pipeline;
pub mod state;

pub use filter::{SmoothingFilter, SMOOTHING_ALPHA};
pub use latch::DataReadyLatch;
pub use mode::{ModeChangeOrigin, MotionMode};
pub use pipeline::{MotionPipeline, PipelineError, PipelineStats};
pub use state::MotionState;
