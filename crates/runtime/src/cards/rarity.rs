use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::cards::{Entropy, PackError};

/// Card rarity tiers, ordered from least to most valuable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    #[serde(rename = "Super Rare")]
    SuperRare,
    #[serde(rename = "Ultra Rare")]
    UltraRare,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::SuperRare,
        Rarity::UltraRare,
        Rarity::Legendary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::SuperRare => "Super Rare",
            Rarity::UltraRare => "Ultra Rare",
            Rarity::Legendary => "Legendary",
        }
    }

    pub fn is_holographic(&self) -> bool {
        *self >= Rarity::SuperRare
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const RARITY_WEIGHTS: [(Rarity, f64); 5] = [
    (Rarity::Common, 70.0),
    (Rarity::Rare, 20.0),
    (Rarity::SuperRare, 7.0),
    (Rarity::UltraRare, 2.7),
    (Rarity::Legendary, 0.3),
];

/// Pool entries per unit of weight. Weights resolve to 1 / RARITY_SCALE.
pub const RARITY_SCALE: f64 = 10.0;

static DEFAULT_POOL: Lazy<RarityPool> = Lazy::new(|| {
    RarityPool::from_weights(&RARITY_WEIGHTS, RARITY_SCALE)
        .expect("built-in rarity weights are positive")
});

pub(crate) fn default_pool() -> &'static RarityPool {
    &DEFAULT_POOL
}

/// Weighted rarity distribution expanded into a flat pool.
///
/// Each rarity occupies `floor(weight * scale)` slots and a draw picks one
/// slot uniformly.
#[derive(Debug, Clone)]
pub struct RarityPool {
    entries: Vec<Rarity>,
}

impl RarityPool {
    pub fn from_weights(weights: &[(Rarity, f64)], scale: f64) -> Result<Self, PackError> {
        let mut entries = Vec::new();
        for (rarity, weight) in weights {
            let slots = (weight.max(0.0) * scale).floor() as usize;
            entries.extend(std::iter::repeat(*rarity).take(slots));
        }

        if entries.is_empty() {
            return Err(PackError::EmptyRarityPool);
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn slots(&self, rarity: Rarity) -> usize {
        self.entries.iter().filter(|r| **r == rarity).count()
    }

    pub fn draw<E: Entropy + ?Sized>(&self, entropy: &mut E) -> Rarity {
        self.entries[entropy.uniform_index(self.entries.len())]
    }
}

/// Draws a rarity from the built-in weight table.
pub fn sample_rarity<E: Entropy + ?Sized>(entropy: &mut E) -> Rarity {
    entropy.rarity()
}
