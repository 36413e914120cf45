use std::collections::BTreeSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ConfigurationError;

pub const DEFAULT_SIZE: usize = 4;
pub const DEFAULT_NUMBER_RANGE: u32 = 99;

/// A row or column of a [`Card`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Line {
    Row(usize),
    Column(usize),
}

impl Line {
    /// The identifier of this line on a card of the given size.
    ///
    /// Rows use `0..size`, columns use `size..2 * size`, so both kinds
    /// of line can share one set of identifiers.
    pub fn id(self, size: usize) -> usize {
        match self {
            Line::Row(i) => i,
            Line::Column(j) => size + j,
        }
    }

    /// The inverse of [`Self::id()`].
    pub fn from_id(id: usize, size: usize) -> Option<Line> {
        if id < size {
            Some(Line::Row(id))
        } else if id < 2 * size {
            Some(Line::Column(id - size))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // One-based, for humans
        match self {
            Line::Row(i) => write!(f, "row {}", i + 1),
            Line::Column(j) => write!(f, "column {}", j + 1),
        }
    }
}

/// A square bingo card of distinct numbers, together with the marks made on it.
///
/// The numbers are fixed when the card is generated. Only [`Self::mark_number()`]
/// changes which cells are marked, and only [`Self::next_line()`] (or
/// [`Self::check_line()`]) changes which lines have been announced.
///
/// ```
/// use bingo::{Card, Line};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut card = Card::generate(4, 99, &mut rng).unwrap();
/// let first_row = card.rows()[0].clone();
/// for number in first_row {
///     assert!(card.mark_number(number));
/// }
/// assert_eq!(card.next_line(), Some(Line::Row(0)));
/// assert_eq!(card.next_line(), None);
/// assert!(!card.check_bingo());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    size: usize,
    number_range: u32,
    /// `size` rows of `size` numbers each, all distinct and in `1..=number_range`.
    grid: Vec<Vec<u32>>,
    /// Same shape as `grid`.
    marked: Vec<Vec<bool>>,
    /// Identifiers (see [`Line::id()`]) of the lines that were already reported.
    lines_announced: BTreeSet<usize>,
}

impl Card {
    /// Creates a card by sampling `size * size` distinct numbers from `1..=number_range`.
    ///
    /// The numbers fill the grid row by row, in the order they were sampled.
    pub fn generate<R: Rng + ?Sized>(
        size: usize,
        number_range: u32,
        rng: &mut R,
    ) -> Result<Self, ConfigurationError> {
        if size == 0 {
            return Err(ConfigurationError::ZeroSize);
        }
        let num_cells = size
            .checked_mul(size)
            .filter(|&num_cells| num_cells <= number_range as usize)
            .ok_or(ConfigurationError::InsufficientNumberRange { size, number_range })?;

        let numbers = rand::seq::index::sample(rng, number_range as usize, num_cells).into_vec();
        let grid = numbers
            .chunks(size)
            .map(|row| row.iter().map(|&idx| idx as u32 + 1).collect())
            .collect();

        Ok(Self {
            size,
            number_range,
            grid,
            marked: vec![vec![false; size]; size],
            lines_announced: BTreeSet::new(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn number_range(&self) -> u32 {
        self.number_range
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.grid
    }

    /// All numbers on the card, row by row.
    pub fn numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.grid.iter().flatten().copied()
    }

    /// Whether the cell at row `i`, column `j` is marked. Out-of-bounds cells are not.
    pub fn is_marked_at(&self, i: usize, j: usize) -> bool {
        self.marked
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .unwrap_or(false)
    }

    /// Checks that the card holds `size * size` distinct numbers within range.
    pub fn validate(&self) -> bool {
        let mut seen = BTreeSet::new();
        self.grid.len() == self.size
            && self.grid.iter().all(|row| row.len() == self.size)
            && self
                .numbers()
                .all(|number| (1..=self.number_range).contains(&number) && seen.insert(number))
    }

    fn position(&self, number: u32) -> Option<(usize, usize)> {
        self.grid.iter().enumerate().find_map(|(i, row)| {
            row.iter()
                .position(|&cell| cell == number)
                .map(|j| (i, j))
        })
    }

    /// Marks the number if it is on the card.
    ///
    /// Returns whether the number was found. Marking a number twice is harmless.
    pub fn mark_number(&mut self, number: u32) -> bool {
        match self.position(number) {
            Some((i, j)) => {
                self.marked[i][j] = true;
                true
            }
            None => false,
        }
    }

    pub fn is_marked(&self, number: u32) -> bool {
        self.position(number)
            .map_or(false, |(i, j)| self.marked[i][j])
    }

    pub fn is_line_complete(&self, line: Line) -> bool {
        match line {
            Line::Row(i) => self
                .marked
                .get(i)
                .map_or(false, |row| row.iter().all(|&m| m)),
            Line::Column(j) => j < self.size && self.marked.iter().all(|row| row[j]),
        }
    }

    /// Announces the first completed line that was not announced before.
    ///
    /// Rows are checked before columns, each in index order. At most one line
    /// is announced per call, so call this until it returns `None` to collect
    /// every line completed by a single mark.
    pub fn next_line(&mut self) -> Option<Line> {
        let size = self.size;
        let line = (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Column))
            .find(|&line| {
                !self.lines_announced.contains(&line.id(size)) && self.is_line_complete(line)
            })?;
        self.lines_announced.insert(line.id(size));
        Some(line)
    }

    /// Like [`Self::next_line()`], but only tells whether a new line was announced.
    pub fn check_line(&mut self) -> bool {
        self.next_line().is_some()
    }

    /// Whether every cell on the card is marked.
    pub fn check_bingo(&self) -> bool {
        self.marked.iter().flatten().all(|&m| m)
    }

    /// The lines announced so far, rows first.
    pub fn announced_lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.lines_announced
            .iter()
            .filter_map(|&id| Line::from_id(id, self.size))
    }
}
