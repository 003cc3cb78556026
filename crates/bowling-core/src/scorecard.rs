//! Serializable snapshot of a game in progress.

use serde::{Deserialize, Serialize};

use crate::engine::ScoreEngine;
use crate::frame::FrameKind;

/// One completed frame on the scorecard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRow {
    /// 1-based frame number
    pub frame: usize,
    /// Canonical notation, e.g. `X,7,/`
    pub notation: String,
    pub kind: FrameKind,
    /// `None` while the frame still awaits bonus rolls
    pub score: Option<u32>,
    /// Running total through this frame, `None` until every frame up to it is scored
    pub cumulative: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    pub max_frames: usize,
    /// 0-based index of the next frame to be completed
    pub current_frame: usize,
    pub total_score: u32,
    pub complete: bool,
    pub frames: Vec<FrameRow>,
}

impl Scorecard {
    pub fn from_engine(engine: &ScoreEngine) -> Self {
        let mut running = Some(0u32);
        let frames = engine
            .frames()
            .iter()
            .enumerate()
            .map(|(index, record)| {
                running = running.zip(record.score).map(|(total, score)| total + score);
                FrameRow {
                    frame: index + 1,
                    notation: record.frame.to_string(),
                    kind: record.frame.kind(),
                    score: record.score,
                    cumulative: running,
                }
            })
            .collect();

        Self {
            max_frames: engine.max_frames(),
            current_frame: engine.current_frame(),
            total_score: engine.total_score(),
            complete: engine.is_complete(),
            frames,
        }
    }

    /// Number of completed frames still waiting on bonus rolls
    pub fn pending_count(&self) -> usize {
        self.frames.iter().filter(|row| row.score.is_none()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cumulative_stops_at_first_pending_frame() {
        let mut engine = ScoreEngine::new();
        for notation in ["X", "7,/", "3,4", "X"] {
            engine.complete_frame(notation).unwrap();
        }

        let card = engine.scorecard();
        let cumulative: Vec<Option<u32>> = card.frames.iter().map(|r| r.cumulative).collect();
        assert_eq!(cumulative, vec![Some(20), Some(33), Some(40), None]);
        assert_eq!(card.pending_count(), 1);
        assert_eq!(card.total_score, 40);
        assert_eq!(card.current_frame, 4);
        assert!(!card.complete);
    }

    #[test]
    fn test_rows_use_canonical_notation() {
        let mut engine = ScoreEngine::with_max_frames(2).unwrap();
        engine.complete_frame("x").unwrap();
        engine.complete_frame("x,5,5").unwrap();

        let card = engine.scorecard();
        assert_eq!(card.frames[0].notation, "X");
        assert_eq!(card.frames[0].kind, FrameKind::Strike);
        assert_eq!(card.frames[1].notation, "X,5,/");
        assert_eq!(card.frames[1].kind, FrameKind::Fill);
        assert_eq!(card.frames[0].score, Some(25));
        assert_eq!(card.frames[1].cumulative, Some(45));
        assert!(card.complete);
    }
}
