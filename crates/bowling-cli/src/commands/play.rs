//! Interactive mode command.

use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use bowling_core::{GameConfig, ScoreEngine, format_scorecard_console};
use tracing::info;

/// Run the interactive prompt loop on stdin/stdout
pub fn run(config: GameConfig, show_scorecard: bool) -> Result<()> {
    let mut engine = ScoreEngine::with_config(config);
    play_game(&mut engine, io::stdin().lock(), io::stdout().lock())?;

    if show_scorecard {
        println!("{}", format_scorecard_console(&engine.scorecard()));
    }
    Ok(())
}

/// Prompt for frames until the game is complete.
///
/// Rejected frames are reported and asked for again. Running out of input
/// before the last frame is an error.
pub fn play_game<R, W>(engine: &mut ScoreEngine, mut input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    info!("Starting game with {} frames", engine.max_frames());

    while !engine.is_complete() {
        let frame_number = engine.current_frame() + 1;
        write!(output, "Enter result for Frame {}: ", frame_number)?;
        output.flush()?;

        // Bytes that are not UTF-8 become replacement characters and fail to parse
        let mut buf = Vec::new();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            bail!("input ended before frame {} was completed", frame_number);
        }
        let line = String::from_utf8_lossy(&buf);

        match engine.complete_frame(&line) {
            Ok(()) => {
                if !engine.is_complete() {
                    writeln!(
                        output,
                        "Next Frame: {}, Total: {}\n",
                        engine.current_frame() + 1,
                        engine.total_score()
                    )?;
                }
            }
            Err(e) if e.is_recoverable() => {
                writeln!(output, "ERROR: {}. Please try again.\n", e)?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    writeln!(output, "Your final score is: {}", engine.total_score())?;
    info!("Game finished with {}", engine.total_score());
    Ok(())
}
