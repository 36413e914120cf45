use std::io::{BufRead, Write};

use rand::Rng;
use tracing::info;

use crate::{play_game, ConsoleObserver, GameSettings, History, Recorder};

/// Decides whether another game follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Replay {
    /// Always play the first game, then ask the player.
    Ask,
    /// Play exactly this many games, possibly none.
    Fixed { num_games: usize },
}

impl Replay {
    pub fn play_another<I: BufRead, O: Write>(
        self,
        history: &History,
        console: &mut ConsoleObserver<I, O>,
    ) -> anyhow::Result<bool> {
        match self {
            Replay::Ask if history.games_played == 0 => Ok(true),
            Replay::Ask => console.ask_yes_no("Would you like to play another round?"),
            Replay::Fixed { num_games } => Ok(history.games_played < num_games),
        }
    }
}

/// Plays games until `replay` says to stop, and returns their history.
pub fn play_session<R: Rng + ?Sized, I: BufRead, O: Write>(
    settings: GameSettings,
    replay: Replay,
    rng: &mut R,
    console: &mut ConsoleObserver<I, O>,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<History> {
    let mut history = History::default();

    while replay.play_another(&history, console)? {
        let game_idx = history.games_played + 1;
        if game_idx > 1 {
            writeln!(console.output(), "\n{}", history)?;
            writeln!(
                console.output(),
                "\nStarting match number {}.\nGood luck!",
                game_idx
            )?;
        }

        let result = play_game(settings, rng, console)?;
        info!(
            game_idx,
            rounds_played = result.rounds_played,
            lines = result.lines.len(),
            bingo = result.bingo,
            "Game finished"
        );
        writeln!(
            console.output(),
            "\nGame summary:\n- Rounds played: {}\n- Numbers drawn: {} of {}\n- Lines: {}\n- Bingo: {}",
            result.rounds_played,
            result.drawn.len(),
            result.max_number,
            result.lines.len(),
            if result.bingo { "Yes" } else { "No" }
        )?;
        history.record(&result);
        if let Some(rec) = recorder {
            rec.write_game_recording(&result)?;
        }
    }

    Ok(history)
}
