use rand::rngs::{StdRng, ThreadRng};
use rand::SeedableRng;

use crate::cards::{make_card, Card, Entropy, PackError, Rarity};

pub const MIN_PACK_SIZE: usize = 3;
pub const MAX_PACK_SIZE: usize = 12;
pub const DEFAULT_PACK_SIZE: usize = 10;

/// Seed for cards forced by the guarantee pass, outside any real index range.
pub const FORCED_CARD_SEED: u32 = 99999;

const GUARANTEED_RARITY: Rarity = Rarity::Rare;
const FORCED_RARITY: Rarity = Rarity::UltraRare;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pack {
    cards: Vec<Card>,
    forced_index: Option<usize>,
}

impl Pack {
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Index of the card replaced by the guarantee pass, if it ran.
    pub fn forced_index(&self) -> Option<usize> {
        self.forced_index
    }

    pub fn best_rarity(&self) -> Option<Rarity> {
        self.cards.iter().map(|c| c.rarity).max()
    }
}

fn meets_guarantee(cards: &[Card]) -> bool {
    cards.iter().any(|c| c.rarity >= GUARANTEED_RARITY)
}

pub struct PackGenerator<E> {
    entropy: E,
}

impl PackGenerator<ThreadRng> {
    pub fn thread_local() -> Self {
        Self::new(rand::rng())
    }
}

impl PackGenerator<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<E: Entropy> PackGenerator<E> {
    pub fn new(entropy: E) -> Self {
        Self { entropy }
    }

    pub fn into_inner(self) -> E {
        self.entropy
    }

    pub fn open_pack(&mut self, size: usize) -> Result<Pack, PackError> {
        if !(MIN_PACK_SIZE..=MAX_PACK_SIZE).contains(&size) {
            return Err(PackError::InvalidSize {
                size,
                min: MIN_PACK_SIZE,
                max: MAX_PACK_SIZE,
            });
        }

        let mut cards = (0..size as u32)
            .map(|seed| make_card(seed, &mut self.entropy))
            .collect::<Vec<_>>();
        let forced_index = self.apply_guarantee(&mut cards);

        Ok(Pack { cards, forced_index })
    }

    /// Replaces one card with a forced Ultra Rare when nothing reached Rare.
    ///
    /// Only the rarity is overridden. `holographic` and `theme` keep the
    /// values synthesized for the replacement's original rarity.
    fn apply_guarantee(&mut self, cards: &mut [Card]) -> Option<usize> {
        if cards.is_empty() || meets_guarantee(cards) {
            return None;
        }

        let index = self.entropy.uniform_index(cards.len());
        let mut forced = make_card(FORCED_CARD_SEED, &mut self.entropy);
        tracing::debug!(
            "[PackGenerator::apply_guarantee] no card reached {}, forcing index {} ({} -> {})",
            GUARANTEED_RARITY, index, forced.rarity, FORCED_RARITY
        );
        forced.rarity = FORCED_RARITY;
        cards[index] = forced;

        Some(index)
    }
}
