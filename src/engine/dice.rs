use rand::{Rng, RngCore, SeedableRng, rngs::StdRng};

/// Source of the combat roll. Seedable for tests, OS-seeded for play.
pub struct Dice {
    rng: Box<dyn RngCore>,
}

impl Dice {
    pub fn new_uniform() -> Dice {
        Dice {
            rng: Box::new(rand::thread_rng()),
        }
    }

    pub fn new_predictable(seed: u64) -> Dice {
        Dice {
            rng: Box::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// roll_percent generates an integer in [1..=100]
    pub fn roll_percent(&mut self) -> u8 {
        self.rng.gen_range(1..=100)
    }
}
