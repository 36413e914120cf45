use serde::{Deserialize, Serialize};

use crate::GameResult;

/// Results of all games played in one session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    pub games_played: usize,
    pub wins: usize,
    pub lines_completed: usize,
}

impl History {
    pub fn record(&mut self, result: &GameResult) {
        self.games_played += 1;
        if result.won() {
            self.wins += 1;
        }
        self.lines_completed += result.lines.len();
    }

    pub fn losses(&self) -> usize {
        self.games_played.saturating_sub(self.wins)
    }
}

impl std::fmt::Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Session summary:\n- Games played: {}\n- Wins: {}\n- Losses: {}\n- Lines completed: {}",
            self.games_played,
            self.wins,
            self.losses(),
            self.lines_completed
        )
    }
}
