//! The core of a single-player bingo game: a [`Card`] of distinct random
//! numbers, a [`Drawer`] that never repeats a number, and detection of
//! completed lines and full-card bingo.
//!
//! All randomness comes from a generator passed in by the caller.

pub use card::*;
pub use drawer::*;
pub use errors::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod card;
mod drawer;
mod errors;
mod visualization;
