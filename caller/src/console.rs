use std::io::{BufRead, Write};

use bingo::{visualize_card, visualize_drawn_numbers};

use crate::{Game, Observer, RoundOutcome};

/// Shows a game on a terminal. When interactive, waits for Enter before every draw.
pub struct ConsoleObserver<I, O> {
    input: I,
    output: O,
    interactive: bool,
    // A re-usable buffer for reading lines.
    buf: String,
}

impl<I: BufRead, O: Write> ConsoleObserver<I, O> {
    pub fn new(input: I, output: O, interactive: bool) -> Self {
        Self {
            input,
            output,
            interactive,
            buf: String::new(),
        }
    }

    /// Asks until the answer is "yes" or "no". End of input counts as "no".
    pub fn ask_yes_no(&mut self, question: &str) -> anyhow::Result<bool> {
        loop {
            write!(self.output, "\n{} (yes/no): ", question)?;
            self.output.flush()?;
            self.buf.clear();
            if self.input.read_line(&mut self.buf)? == 0 {
                return Ok(false);
            }
            match self.buf.trim().to_lowercase().as_str() {
                "yes" | "y" => return Ok(true),
                "no" | "n" => return Ok(false),
                _ => writeln!(self.output, "Invalid input. Please type 'yes' or 'no'.")?,
            }
        }
    }

    pub fn output(&mut self) -> &mut O {
        &mut self.output
    }
}

impl<I: BufRead, O: Write> Observer for ConsoleObserver<I, O> {
    fn game_started(&mut self, game: &Game) -> anyhow::Result<()> {
        writeln!(self.output, "\nYour bingo card:")?;
        writeln!(self.output, "{}", visualize_card(game.card()))?;
        Ok(())
    }

    fn before_draw(&mut self, round: usize) -> anyhow::Result<()> {
        if self.interactive {
            write!(self.output, "\nPress Enter to start round {}...", round)?;
            self.output.flush()?;
            self.buf.clear();
            self.input.read_line(&mut self.buf)?;
        }
        Ok(())
    }

    fn round_played(&mut self, game: &Game, outcome: &RoundOutcome) -> anyhow::Result<()> {
        writeln!(
            self.output,
            "\nRound {}: drawn number {}",
            outcome.round, outcome.number
        )?;
        if outcome.on_card {
            writeln!(self.output, "{}", visualize_card(game.card()))?;
        }
        for line in &outcome.new_lines {
            writeln!(self.output, "LINE! You completed {}.", line)?;
        }
        if outcome.bingo {
            writeln!(self.output, "BINGO! Every number on your card is marked.")?;
        }
        writeln!(
            self.output,
            "{}",
            visualize_drawn_numbers(game.drawer().drawn_so_far())
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::{play_game, GameSettings, Mode};

    #[test]
    fn asks_again_on_invalid_answers() {
        let input = Cursor::new("maybe\n YES \n");
        let mut console = ConsoleObserver::new(input, Vec::new(), false);
        assert!(console.ask_yes_no("Play again?").unwrap());
        let text = String::from_utf8(console.output().clone()).unwrap();
        assert_eq!(text.matches("Play again? (yes/no)").count(), 2);
        assert!(text.contains("Invalid input"));
    }

    #[test]
    fn end_of_input_means_no() {
        let mut console = ConsoleObserver::new(Cursor::new(""), Vec::new(), false);
        assert!(!console.ask_yes_no("Play again?").unwrap());
    }

    #[test]
    fn prints_every_round() {
        let mut rng = StdRng::seed_from_u64(8);
        let settings = GameSettings {
            mode: Mode::Competitive,
            ..GameSettings::default()
        };
        // One empty line per draw
        let input = Cursor::new("\n".repeat(Mode::Competitive.rounds()));
        let mut console = ConsoleObserver::new(input, Vec::new(), true);
        let result = play_game(settings, &mut rng, &mut console).unwrap();

        let text = String::from_utf8(console.output().clone()).unwrap();
        assert!(text.starts_with("\nYour bingo card:"));
        assert_eq!(text.matches("Press Enter").count(), result.rounds_played);
        for (idx, number) in result.drawn.iter().enumerate() {
            assert!(text.contains(&format!("Round {}: drawn number {}\n", idx + 1, number)));
        }
        assert_eq!(text.matches("LINE!").count(), result.lines.len());
    }
}
