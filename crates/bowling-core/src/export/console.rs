//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::frame::FrameKind;
use crate::scorecard::{FrameRow, Scorecard};

const PENDING: &str = "…";

/// Format a scorecard for console display with colored output
///
/// Returns a multi-line string with a boxed format, one line per completed
/// frame. Frames still waiting on bonus rolls show `…` for their score.
pub fn format_scorecard_console(card: &Scorecard) -> String {
    let mut output = String::new();

    let border: String = "━".repeat(40);
    let border_dim = border.dimmed();

    let status = if card.complete {
        "FINAL".green().to_string()
    } else {
        format!("FRAME {}/{}", card.current_frame + 1, card.max_frames)
            .yellow()
            .to_string()
    };

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "  {} [{}]", "SCORECARD".bold(), status);
    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "  FRAME  ROLLS    KIND    SCORE  TOTAL");

    for row in &card.frames {
        let notation = format_colored_notation(&format!("{:<8}", row.notation), row.kind);
        let kind = format!("{:<6}", row.kind.short_name());
        let _ = writeln!(
            output,
            "  {:>5}  {} {}  {:>5}  {:>5}",
            row.frame,
            notation,
            kind,
            format_optional(row.score),
            format_optional(row.cumulative),
        );
    }

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "  TOTAL  : {}", card.total_score.bold());
    let pending = card.pending_count();
    if pending > 0 {
        let _ = writeln!(output, "  PENDING: {} frame(s) awaiting bonus rolls", pending);
    }
    let _ = write!(output, "{}", border_dim);

    output
}

/// Format notation with a color for its frame kind
fn format_colored_notation(notation: &str, kind: FrameKind) -> String {
    match kind {
        FrameKind::Strike => notation.red().bold().to_string(),
        FrameKind::Spare => notation.yellow().to_string(),
        FrameKind::Fill => notation.cyan().to_string(),
        FrameKind::Open => notation.to_string(),
    }
}

fn format_optional(value: Option<u32>) -> String {
    value.map_or_else(|| PENDING.to_string(), |v| v.to_string())
}

/// Simple frame summary for logging
pub fn format_frame_summary(row: &FrameRow) -> String {
    format!(
        "Frame {} {} {} score:{} total:{}",
        row.frame,
        row.notation,
        row.kind.short_name(),
        format_optional(row.score),
        format_optional(row.cumulative),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ScoreEngine;

    fn card_for(notations: &[&str]) -> Scorecard {
        let mut engine = ScoreEngine::new();
        for notation in notations {
            engine.complete_frame(notation).unwrap();
        }
        engine.scorecard()
    }

    #[test]
    fn test_format_frame_summary() {
        let card = card_for(&["X", "3,4"]);
        assert_eq!(
            format_frame_summary(&card.frames[0]),
            "Frame 1 X STRIKE score:17 total:17"
        );
        assert_eq!(
            format_frame_summary(&card.frames[1]),
            "Frame 2 3,4 OPEN score:7 total:24"
        );
    }

    #[test]
    fn test_format_frame_summary_pending() {
        let card = card_for(&["6,/"]);
        assert_eq!(
            format_frame_summary(&card.frames[0]),
            "Frame 1 6,/ SPARE score:… total:…"
        );
    }

    #[test]
    fn test_format_scorecard_console() {
        let card = card_for(&["X", "X"]);
        let output = format_scorecard_console(&card);
        assert!(output.contains("SCORECARD"));
        assert!(output.contains("FRAME 3/10"));
        assert!(output.contains("PENDING: 2 frame(s)"));
        assert_eq!(output.lines().count(), 10);
    }
}
