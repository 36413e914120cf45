use bingo::{
    Card, Drawer, DrawerState, Line, DEFAULT_MAX_NUMBER, DEFAULT_NUMBER_RANGE, DEFAULT_SIZE,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Mode;

#[derive(Clone, Copy, Debug)]
pub struct GameSettings {
    pub mode: Mode,
    pub size: usize,
    pub number_range: u32,
    /// The drawer yields numbers from `1..=max_number`.
    pub max_number: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            mode: Mode::Normal,
            size: DEFAULT_SIZE,
            number_range: DEFAULT_NUMBER_RANGE,
            max_number: DEFAULT_MAX_NUMBER,
        }
    }
}

/// What happened in a single draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Starts at 1.
    pub round: usize,
    pub number: u32,
    pub on_card: bool,
    /// All lines completed by this draw, rows first.
    pub new_lines: Vec<Line>,
    pub bingo: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameResult {
    pub mode: Mode,
    pub card: Vec<Vec<u32>>,
    /// In draw order.
    pub drawn: Vec<u32>,
    /// Numbers were drawn from `1..=max_number`.
    pub max_number: u32,
    pub lines: Vec<Line>,
    pub rounds_played: usize,
    pub bingo: bool,
}

impl GameResult {
    /// A game is only won with a full card.
    pub fn won(&self) -> bool {
        self.bingo
    }
}

/// One card and one drawer, played for at most [`Mode::rounds()`] draws.
#[derive(Clone, Debug)]
pub struct Game {
    mode: Mode,
    card: Card,
    drawer: Drawer,
    rounds_played: usize,
}

impl Game {
    pub fn new<R: Rng + ?Sized>(settings: GameSettings, rng: &mut R) -> anyhow::Result<Self> {
        let card = Card::generate(settings.size, settings.number_range, rng)?;
        Ok(Self {
            mode: settings.mode,
            card,
            drawer: Drawer::new(settings.max_number),
            rounds_played: 0,
        })
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn drawer(&self) -> &Drawer {
        &self.drawer
    }

    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    pub fn is_over(&self) -> bool {
        self.card.check_bingo()
            || self.rounds_played >= self.mode.rounds()
            || self.drawer.state() == DrawerState::Exhausted
    }

    /// Draws the next number and marks it on the card.
    ///
    /// Returns `None` without drawing when the game is over.
    pub fn play_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<RoundOutcome> {
        if self.is_over() {
            return None;
        }
        let number = self.drawer.draw_number(rng)?;
        self.rounds_played += 1;

        let on_card = self.card.mark_number(number);
        // The card reports one new line per call
        let new_lines: Vec<Line> = std::iter::from_fn(|| self.card.next_line()).collect();
        let bingo = self.card.check_bingo();
        debug!(
            round = self.rounds_played,
            number,
            on_card,
            new_lines = new_lines.len(),
            bingo,
            "Drew number"
        );

        Some(RoundOutcome {
            round: self.rounds_played,
            number,
            on_card,
            new_lines,
            bingo,
        })
    }

    pub fn result(&self) -> GameResult {
        GameResult {
            mode: self.mode,
            card: self.card.rows().to_vec(),
            drawn: self.drawer.drawn_so_far().to_vec(),
            max_number: self.drawer.max_number(),
            lines: self.card.announced_lines().collect(),
            rounds_played: self.rounds_played,
            bingo: self.card.check_bingo(),
        }
    }
}

/// Follows the progress of a game, e.g. to show it to a player.
pub trait Observer {
    fn game_started(&mut self, game: &Game) -> anyhow::Result<()>;
    /// Called right before each draw, which makes it the place to pace the game.
    fn before_draw(&mut self, _round: usize) -> anyhow::Result<()> {
        Ok(())
    }
    fn round_played(&mut self, game: &Game, outcome: &RoundOutcome) -> anyhow::Result<()>;
}

/// Plays a whole game with a fresh card and drawer.
///
/// Returns an error for invalid settings or when the observer fails.
pub fn play_game<R: Rng + ?Sized, O: Observer + ?Sized>(
    settings: GameSettings,
    rng: &mut R,
    observer: &mut O,
) -> anyhow::Result<GameResult> {
    let mut game = Game::new(settings, rng)?;
    observer.game_started(&game)?;

    while !game.is_over() {
        observer.before_draw(game.rounds_played() + 1)?;
        let Some(outcome) = game.play_round(rng) else {
            break;
        };
        observer.round_played(&game, &outcome)?;
    }

    Ok(game.result())
}
