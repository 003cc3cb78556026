use tracing::debug;

use crate::config::GameConfig;
use crate::config::pins::RACK_SIZE;
use crate::error::{Error, Result};
use crate::frame::Frame;
use crate::scorecard::Scorecard;

use super::pending::{PendingStrike, PendingStrikes, Resolved};

/// A completed frame and, once known, its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRecord {
    pub frame: Frame,
    pub score: Option<u32>,
}

/// Running score for one game
///
/// ## Scoring Rules
///
/// Every roll is credited, in the order it was bowled, to the outstanding
/// obligations before the frame it belongs to is recorded:
/// - a pending spare takes the next single roll
/// - each pending strike takes the next two rolls, wherever they fall
///
/// Open frames and the final frame are scored from their own pins as soon
/// as they are completed. The final frame never leaves anything pending.
///
/// `complete_frame` validates the notation and the frame position before
/// touching any state, so a rejected frame leaves the engine unchanged.
#[derive(Debug, Clone)]
pub struct ScoreEngine {
    config: GameConfig,
    pending_strikes: PendingStrikes,
    pending_spare: Option<usize>,
    total_score: u32,
    current_frame: usize,
    frames: Vec<FrameRecord>,
}

impl ScoreEngine {
    /// Create an engine for a standard ten frame game
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            config,
            pending_strikes: PendingStrikes::new(),
            pending_spare: None,
            total_score: 0,
            current_frame: 0,
            frames: Vec::with_capacity(config.max_frames()),
        }
    }

    pub fn with_max_frames(max_frames: usize) -> Result<Self> {
        Ok(Self::with_config(GameConfig::new(max_frames)?))
    }

    /// Score one frame and advance to the next.
    ///
    /// On error nothing changes and the same frame must be submitted again.
    pub fn complete_frame(&mut self, notation: &str) -> Result<()> {
        if self.is_complete() {
            return Err(Error::GameComplete);
        }

        let frame = Frame::parse(notation)
            .and_then(|frame| self.check_position(frame))
            .inspect_err(|e| {
                debug!(
                    "Rejected frame {} notation {:?}: {}",
                    self.current_frame + 1,
                    notation,
                    e
                )
            })?;

        self.apply(frame);
        self.current_frame += 1;

        debug!(
            "Completed frame {} ({}), total {}",
            self.current_frame, frame, self.total_score
        );
        Ok(())
    }

    fn check_position(&self, frame: Frame) -> Result<Frame> {
        let is_final = self.is_final_frame();
        match frame {
            Frame::Fill { .. } if !is_final => Err(Error::FrameLimitExceeded),
            _ if is_final && frame.kind().awaits_bonus() => Err(Error::MissingBonusRolls),
            _ => Ok(frame),
        }
    }

    fn apply(&mut self, frame: Frame) {
        let index = self.current_frame;

        for pins in frame.rolls() {
            self.credit_roll(pins);
        }

        self.frames.push(FrameRecord { frame, score: None });

        match frame {
            Frame::Strike => self.pending_strikes.push(index),
            Frame::Spare { .. } => self.pending_spare = Some(index),
            Frame::Open { .. } | Frame::Fill { .. } => self.resolve(index, frame.pins()),
        }
    }

    /// Hand one roll to whatever is still waiting on bonus pins
    fn credit_roll(&mut self, pins: u8) {
        if let Some(spare_frame) = self.pending_spare.take() {
            self.resolve(spare_frame, u32::from(RACK_SIZE) + u32::from(pins));
        }

        for Resolved { frame, score } in self.pending_strikes.credit(pins) {
            self.resolve(frame, score);
        }
    }

    fn resolve(&mut self, frame: usize, score: u32) {
        self.total_score += score;
        if let Some(record) = self.frames.get_mut(frame) {
            record.score = Some(score);
        }
        debug!("Frame {} scored {}", frame + 1, score);
    }

    /// Start a new game with the same frame limit
    pub fn reset(&mut self) {
        *self = Self::with_config(self.config);
    }

    /// 0-based index of the next frame to be completed
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn max_frames(&self) -> usize {
        self.config.max_frames()
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Whether the next frame to be completed is the last one
    pub fn is_final_frame(&self) -> bool {
        self.current_frame + 1 == self.max_frames()
    }

    pub fn is_complete(&self) -> bool {
        self.current_frame >= self.max_frames()
    }

    /// Outstanding strikes, oldest first
    pub fn pending_strikes(&self) -> Vec<PendingStrike> {
        self.pending_strikes.iter().copied().collect()
    }

    pub fn has_pending_spare(&self) -> bool {
        self.pending_spare.is_some()
    }

    /// Completed frames in order
    pub fn frames(&self) -> &[FrameRecord] {
        &self.frames
    }

    /// Score of each completed frame, `None` while it still awaits bonus rolls
    pub fn frame_scores(&self) -> Vec<Option<u32>> {
        self.frames.iter().map(|record| record.score).collect()
    }

    pub fn scorecard(&self) -> Scorecard {
        Scorecard::from_engine(self)
    }
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new()
    }
}
