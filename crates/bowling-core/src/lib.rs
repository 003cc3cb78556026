pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod frame;
pub mod scorecard;

pub use config::GameConfig;
pub use engine::{FrameRecord, PendingStrike, PendingStrikes, ScoreEngine};
pub use error::{Error, Result};
pub use export::{format_frame_summary, format_scorecard_console};
pub use frame::{Frame, FrameKind, Mark};
pub use scorecard::{FrameRow, Scorecard};
