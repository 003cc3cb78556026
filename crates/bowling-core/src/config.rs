//! Game configuration and scoring constants.
//!
//! - `pins` - rack size and per-roll limits
//! - `frames` - frame count defaults and bounds
//! - `GameConfig` - validated per-game settings

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Rack configuration.
pub mod pins {
    /// Pins standing at the start of every rack.
    pub const RACK_SIZE: u8 = 10;

    /// Highest pin count a single notation digit can express.
    pub const MAX_DIGIT: u8 = 9;
}

/// Frame count configuration.
pub mod frames {
    /// Frames in a standard game.
    pub const DEFAULT_MAX_FRAMES: usize = 10;

    /// Smallest accepted frame limit (a game of only the final frame).
    pub const MIN_FRAMES: usize = 1;

    /// Largest accepted frame limit.
    pub const MAX_FRAMES: usize = 100;
}

/// Per-game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    max_frames: usize,
}

impl GameConfig {
    /// Build a config, rejecting frame limits outside `frames::MIN_FRAMES..=frames::MAX_FRAMES`
    pub fn new(max_frames: usize) -> Result<Self> {
        if !(frames::MIN_FRAMES..=frames::MAX_FRAMES).contains(&max_frames) {
            return Err(Error::InvalidFrameLimit {
                min: frames::MIN_FRAMES,
                max: frames::MAX_FRAMES,
                actual: max_frames,
            });
        }
        Ok(Self { max_frames })
    }

    pub fn max_frames(&self) -> usize {
        self.max_frames
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_frames: frames::DEFAULT_MAX_FRAMES,
        }
    }
}
