//! Random number generation
//!
//! The engine never calls a global RNG. It draws from a [`RandomSource`]
//! held by the [`GameLoop`](crate::GameLoop), so combat is reproducible
//! with a seeded [`GameRng`] and scriptable with [`ScriptedRng`].

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform draw in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Returns `floor(draw * n)`, i.e. `0..n`.
    ///
    /// Returns 0 if n is 0.
    fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        let value = (self.next_f64() * f64::from(n)).floor() as u32;
        value.min(n - 1)
    }

    /// True when the draw is strictly above `threshold`.
    fn chance_above(&mut self, threshold: f64) -> bool {
        self.next_f64() > threshold
    }

    /// Choose an element uniformly from a slice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.rn2(items.len() as u32) as usize])
        }
    }
}

/// Seeded game RNG backed by ChaCha8.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for GameRng {
    fn next_f64(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    draws: VecDeque<f64>,
}

impl ScriptedRng {
    /// Draws are clamped into `[0, 1)`. An empty script always yields 0.
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws
                .into_iter()
                .map(|d| d.clamp(0.0, 1.0 - f64::EPSILON))
                .collect(),
        }
    }

    /// Every draw returns `draw`.
    pub fn constant(draw: f64) -> Self {
        Self::new([draw])
    }
}

impl RandomSource for ScriptedRng {
    fn next_f64(&mut self) -> f64 {
        match self.draws.pop_front() {
            Some(draw) => {
                self.draws.push_back(draw);
                draw
            }
            None => 0.0,
        }
    }
}
