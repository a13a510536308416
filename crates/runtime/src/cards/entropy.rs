use rand::Rng;

use crate::cards::rarity::{default_pool, Rarity};

/// Source of the independent uniform draws a pack needs.
///
/// Every [`rand::Rng`] is an `Entropy`. Tests implement it directly to script
/// rarities while keeping the rest of the card random.
pub trait Entropy {
    /// Uniform integer in `lo..=hi`.
    fn uniform_int(&mut self, lo: i64, hi: i64) -> i64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn uniform_index(&mut self, len: usize) -> usize;

    fn choice<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.uniform_index(items.len())]
    }

    fn rarity(&mut self) -> Rarity {
        default_pool().draw(self)
    }
}

impl<R: Rng> Entropy for R {
    fn uniform_int(&mut self, lo: i64, hi: i64) -> i64 {
        self.random_range(lo..=hi)
    }

    fn uniform_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}
