//! Batch scoring command.

use std::io::{self, Write};

use anyhow::{Context, Result};
use bowling_core::{GameConfig, ScoreEngine, format_frame_summary, format_scorecard_console};
use tracing::{Level, debug};

/// Score every notation given on the command line
pub fn run(
    config: GameConfig,
    notations: &[String],
    json: bool,
    show_scorecard: bool,
) -> Result<()> {
    let mut engine = ScoreEngine::with_config(config);
    let mut stdout = io::stdout().lock();
    score_frames(&mut engine, notations, json, &mut stdout)?;

    if show_scorecard {
        writeln!(stdout, "{}", format_scorecard_console(&engine.scorecard()))?;
    }
    Ok(())
}

/// Feed notations to the engine in order, stopping at the first rejected frame
pub fn score_frames<W: Write>(
    engine: &mut ScoreEngine,
    notations: &[String],
    json: bool,
    output: &mut W,
) -> Result<()> {
    for notation in notations {
        let frame_number = engine.current_frame() + 1;
        engine
            .complete_frame(notation)
            .with_context(|| format!("frame {} ({:?}) rejected", frame_number, notation))?;

        if tracing::enabled!(Level::DEBUG)
            && let Some(row) = engine.scorecard().frames.last()
        {
            debug!("{}", format_frame_summary(row));
        }

        if !json && !engine.is_complete() {
            writeln!(
                output,
                "Next Frame: {}, Total: {}",
                engine.current_frame() + 1,
                engine.total_score()
            )?;
        }
    }

    if json {
        writeln!(output, "{}", serde_json::to_string_pretty(&engine.scorecard())?)?;
    } else if engine.is_complete() {
        writeln!(output, "Your final score is: {}", engine.total_score())?;
    } else {
        writeln!(
            output,
            "Game incomplete after {} of {} frames, Total: {}",
            engine.current_frame(),
            engine.max_frames(),
            engine.total_score()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(frames: usize, notations: &[&str], json: bool) -> (Result<()>, String) {
        let mut engine = ScoreEngine::with_max_frames(frames).unwrap();
        let notations: Vec<String> = notations.iter().map(|n| n.to_string()).collect();
        let mut output = Vec::new();
        let result = score_frames(&mut engine, &notations, json, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_complete_game() {
        let (result, output) = score(3, &["X", "X", "X,X,X"], false);
        assert!(result.is_ok());
        assert_eq!(
            output,
            "Next Frame: 2, Total: 0\nNext Frame: 3, Total: 0\nYour final score is: 90\n"
        );
    }

    #[test]
    fn test_debug_logging_leaves_output_unchanged() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_test_writer()
            .finish();
        let (result, output) =
            tracing::subscriber::with_default(subscriber, || score(2, &["X", "3,4"], false));

        assert!(result.is_ok());
        assert_eq!(output, "Next Frame: 2, Total: 0\nYour final score is: 24\n");
    }

    #[test]
    fn test_incomplete_game() {
        let (result, output) = score(10, &["3,/", "1,2"], false);
        assert!(result.is_ok());
        assert!(output.ends_with("Game incomplete after 2 of 10 frames, Total: 14\n"));
    }

    #[test]
    fn test_rejected_frame_names_position() {
        let (result, _) = score(10, &["X", "foo"], false);
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "frame 2 (\"foo\") rejected");
        assert_eq!(err.root_cause().to_string(), "invalid frame format");
    }

    #[test]
    fn test_too_many_frames() {
        let (result, _) = score(1, &["1,1", "1,1"], false);
        assert_eq!(
            result.unwrap_err().root_cause().to_string(),
            "game is already complete"
        );
    }

    #[test]
    fn test_json_output() {
        let (result, output) = score(2, &["X", "1,2"], true);
        assert!(result.is_ok());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["total_score"], 16);
        assert_eq!(value["complete"], true);
        assert_eq!(value["frames"][1]["notation"], "1,2");
    }
}
