mod card;
mod entropy;
mod error;
mod pack;
mod rarity;

pub use card::{Card, CardTheme, make_card, ADJECTIVES, NOUNS, ELEMENTS, CARD_LORE};
pub use entropy::Entropy;
pub use error::PackError;
pub use pack::{Pack, PackGenerator, MIN_PACK_SIZE, MAX_PACK_SIZE, DEFAULT_PACK_SIZE, FORCED_CARD_SEED};
pub use rarity::{Rarity, RarityPool, sample_rarity, RARITY_WEIGHTS, RARITY_SCALE};
