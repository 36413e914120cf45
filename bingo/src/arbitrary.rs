use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::Card;

/// Valid inputs for [`Card::generate()`], plus a seed for the generator.
#[derive(Clone, Debug)]
pub struct CardParams {
    pub size: usize,
    pub number_range: u32,
    pub seed: u64,
}

impl CardParams {
    pub fn generate(&self) -> Card {
        let mut rng = StdRng::seed_from_u64(self.seed);
        Card::generate(self.size, self.number_range, &mut rng)
            .expect("CardParams always has a sufficient number range")
    }
}

impl quickcheck::Arbitrary for CardParams {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let size = usize::from(u8::arbitrary(g) % 6) + 1;
        // Ensure the range can always fill the card, sometimes exactly
        let slack = if bool::arbitrary(g) {
            0
        } else {
            u32::from(u8::arbitrary(g))
        };
        let number_range = (size * size) as u32 + slack;
        CardParams {
            size,
            number_range,
            seed: u64::arbitrary(g),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let smaller = (self.size > 1).then(|| CardParams {
            size: self.size - 1,
            number_range: self.number_range,
            seed: self.seed,
        });
        Box::new(smaller.into_iter())
    }
}
