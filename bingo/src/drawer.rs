use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_NUMBER: u32 = 99;

/// Whether a [`Drawer`] still has numbers left.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawerState {
    Active,
    /// Terminal: every number has been drawn.
    Exhausted,
}

/// Draws the numbers `1..=max_number` in random order, each exactly once.
///
/// The pool is never materialized, so memory grows with the number of draws,
/// not with `max_number`.
#[derive(Clone, Debug)]
pub struct Drawer {
    max_number: u32,
    // The pool is the slots 0..remaining. Slot k holds k + 1 unless it is
    // listed here. Together with `drawn`, the pool always partitions 1..=max_number.
    remaining: u32,
    displaced: BTreeMap<u32, u32>,
    drawn: Vec<u32>,
}

impl Drawer {
    pub fn new(max_number: u32) -> Self {
        Self {
            max_number,
            remaining: max_number,
            displaced: BTreeMap::new(),
            drawn: Vec::new(),
        }
    }

    pub fn max_number(&self) -> u32 {
        self.max_number
    }

    pub fn state(&self) -> DrawerState {
        if self.remaining == 0 {
            DrawerState::Exhausted
        } else {
            DrawerState::Active
        }
    }

    /// How many numbers can still be drawn.
    pub fn remaining(&self) -> usize {
        self.remaining as usize
    }

    fn slot(&self, slot: u32) -> u32 {
        self.displaced.get(&slot).copied().unwrap_or(slot + 1)
    }

    /// The numbers that can still be drawn, in no particular order.
    pub fn available(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.remaining).map(|slot| self.slot(slot))
    }

    /// Picks one of the remaining numbers uniformly at random.
    ///
    /// Returns `None` once every number has been drawn.
    pub fn draw_number<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<u32> {
        if self.remaining == 0 {
            return None;
        }
        let idx = rng.gen_range(0..self.remaining);
        let last = self.remaining - 1;
        let number = self.slot(idx);
        // Move the last pooled number into the drawn slot, then shrink the pool
        let last_number = self.slot(last);
        self.displaced.insert(idx, last_number);
        self.displaced.remove(&last);
        self.remaining = last;
        self.drawn.push(number);
        Some(number)
    }

    /// The drawn numbers, in the order they were drawn.
    pub fn drawn_so_far(&self) -> &[u32] {
        &self.drawn
    }
}

impl Default for Drawer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_NUMBER)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use quickcheck::quickcheck;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn draw_all<R: Rng>(drawer: &mut Drawer, rng: &mut R) -> Vec<u32> {
        let mut numbers = Vec::new();
        while let Some(number) = drawer.draw_number(rng) {
            numbers.push(number);
        }
        numbers
    }

    quickcheck! {
        fn pool_and_history_partition_the_range(max_number: u8, num_draws: u8, seed: u64) -> bool {
            let max_number = u32::from(max_number);
            let mut rng = StdRng::seed_from_u64(seed);
            let mut drawer = Drawer::new(max_number);
            for _ in 0..num_draws {
                drawer.draw_number(&mut rng);
            }
            let mut all: Vec<u32> = drawer.available().chain(drawer.drawn_so_far().iter().copied()).collect();
            all.sort_unstable();
            all == (1..=max_number).collect::<Vec<u32>>()
                && drawer.remaining() + drawer.drawn_so_far().len() == max_number as usize
        }
    }

    #[test]
    fn draws_every_number_once() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut drawer = Drawer::default();
        let numbers = draw_all(&mut drawer, &mut rng);
        assert_eq!(numbers.len(), 99);
        let distinct: BTreeSet<u32> = numbers.iter().copied().collect();
        assert_eq!(distinct, (1..=99).collect());
        assert_eq!(drawer.drawn_so_far(), numbers.as_slice());
        assert_eq!(drawer.state(), DrawerState::Exhausted);
    }

    #[test]
    fn exhausted_drawer_stays_exhausted() {
        let mut rng = StepRng::new(0, 1);
        let mut drawer = Drawer::new(3);
        assert_eq!(drawer.state(), DrawerState::Active);
        assert_eq!(draw_all(&mut drawer, &mut rng).len(), 3);
        let history = drawer.drawn_so_far().to_vec();
        for _ in 0..5 {
            assert_eq!(drawer.draw_number(&mut rng), None);
        }
        assert_eq!(drawer.drawn_so_far(), history.as_slice());
        assert_eq!(drawer.remaining(), 0);
    }

    #[test]
    fn empty_range_starts_exhausted() {
        let mut rng = StepRng::new(0, 0);
        let mut drawer = Drawer::new(0);
        assert_eq!(drawer.state(), DrawerState::Exhausted);
        assert_eq!(drawer.draw_number(&mut rng), None);
        assert!(drawer.drawn_so_far().is_empty());
    }

    #[test]
    fn fixed_source_gives_fixed_order() {
        // A generator that always yields zero always picks the first pooled number
        let mut rng = StepRng::new(0, 0);
        let mut drawer = Drawer::new(5);
        assert_eq!(draw_all(&mut drawer, &mut rng), vec![1, 5, 4, 3, 2]);
    }

    #[test]
    fn huge_range_draws_without_building_the_pool() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut drawer = Drawer::new(u32::MAX);
        let numbers: Vec<u32> = (0..100).filter_map(|_| drawer.draw_number(&mut rng)).collect();
        let distinct: BTreeSet<u32> = numbers.iter().copied().collect();
        assert_eq!(distinct.len(), 100);
        assert!(numbers.iter().all(|&n| n >= 1));
        assert_eq!(drawer.remaining(), u32::MAX as usize - 100);
        assert!(drawer.displaced.len() <= 100);
    }

    #[test]
    fn history_keeps_draw_order() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut drawer = Drawer::new(50);
        let first: Vec<u32> = (0..10).filter_map(|_| drawer.draw_number(&mut rng)).collect();
        assert_eq!(drawer.drawn_so_far(), first.as_slice());
        assert_eq!(drawer.remaining(), 40);
    }

    #[test]
    fn same_seed_same_draws() {
        let draws = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            draw_all(&mut Drawer::new(20), &mut rng)
        };
        assert_eq!(draws(17), draws(17));
    }
}
