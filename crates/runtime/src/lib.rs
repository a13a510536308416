mod cards;

pub use cards::{
    Card, CardTheme, Entropy, Pack, PackError, PackGenerator, Rarity, RarityPool,
    make_card, sample_rarity,
    ADJECTIVES, NOUNS, ELEMENTS, CARD_LORE,
    RARITY_WEIGHTS, RARITY_SCALE,
    MIN_PACK_SIZE, MAX_PACK_SIZE, DEFAULT_PACK_SIZE, FORCED_CARD_SEED,
};
