//! Scoring engine.
//!
//! - `ScoreEngine` - running score for one game
//! - `PendingStrikes` - outstanding strikes awaiting bonus rolls

mod pending;
mod score_engine;

pub use pending::*;
pub use score_engine::*;
