use serde::Serialize;

use crate::cards::{sample_rarity, Entropy, Rarity};

pub const ELEMENTS: [&str; 8] = [
    "Aether", "Ember", "Tide", "Gaia", "Umbral", "Lumina", "Chrono", "Arcane",
];

pub const ADJECTIVES: [&str; 14] = [
    "Veiled", "Gilded", "Obsidian", "Celestial", "Crimson", "Iridescent", "Mythic", "Nocturne",
    "Prismatic", "Sovereign", "Eternal", "Radiant", "Duskborn", "Starlit",
];

pub const NOUNS: [&str; 14] = [
    "Seraph", "Warden", "Drake", "Oracle", "Harbinger", "Vanguard", "Matriarch", "Savant",
    "Revenant", "Duelist", "Archon", "Leviathan", "Reclaimer", "Specter",
];

pub const CARD_LORE: &str = "A coveted relic from an adult-leaning arcane saga, crafted for collectors who appreciate elegance over cartoons.";

const STAT_MIN: i64 = 100;
const STAT_MAX: i64 = 4000;
const ID_SUFFIX_MIN: i64 = 1000;
const ID_SUFFIX_MAX: i64 = 9999;

/// Presentation classes for a rarity's card frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardTheme {
    pub frame: &'static str,
    pub glow: &'static str,
    pub foil: &'static str,
}

impl CardTheme {
    pub fn for_rarity(rarity: Rarity) -> Self {
        match rarity {
            Rarity::Common => Self {
                frame: "from-slate-800/80 via-slate-700/60 to-slate-900/80",
                glow: "shadow-slate-400/20",
                foil: "to-slate-400/10",
            },
            Rarity::Rare => Self {
                frame: "from-sky-600/70 via-sky-700/60 to-indigo-800/80",
                glow: "shadow-sky-400/40",
                foil: "to-sky-300/20",
            },
            Rarity::SuperRare => Self {
                frame: "from-emerald-600/70 via-teal-700/60 to-cyan-800/80",
                glow: "shadow-emerald-300/50",
                foil: "to-emerald-300/25",
            },
            Rarity::UltraRare => Self {
                frame: "from-fuchsia-600/70 via-violet-700/60 to-indigo-800/80",
                glow: "shadow-fuchsia-300/60",
                foil: "to-fuchsia-300/30",
            },
            Rarity::Legendary => Self {
                frame: "from-amber-500/80 via-rose-600/70 to-violet-800/80",
                glow: "shadow-amber-300/70",
                foil: "to-amber-300/40",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
    pub element: &'static str,
    pub holographic: bool,
    pub art: String,
    pub theme: CardTheme,
    pub attack: i64,
    pub defense: i64,
    pub lore: &'static str,
}

fn art_url(seed: u32, element: &str) -> String {
    format!("https://picsum.photos/seed/{}-{}/300/450", seed, element.replace(' ', ""))
}

/// Synthesizes one card. `seed` only shapes the id prefix and art URL.
pub fn make_card<E: Entropy + ?Sized>(seed: u32, entropy: &mut E) -> Card {
    let rarity = sample_rarity(entropy);
    let name = format!("{} {}", entropy.choice(&ADJECTIVES), entropy.choice(&NOUNS));
    let element = *entropy.choice(&ELEMENTS);
    let id = format!("{}-{}", seed, entropy.uniform_int(ID_SUFFIX_MIN, ID_SUFFIX_MAX));

    Card {
        id,
        name,
        rarity,
        element,
        holographic: rarity.is_holographic(),
        art: art_url(seed, element),
        theme: CardTheme::for_rarity(rarity),
        attack: entropy.uniform_int(STAT_MIN, STAT_MAX),
        defense: entropy.uniform_int(STAT_MIN, STAT_MAX),
        lore: CARD_LORE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_make_card_fields() {
        let mut rng = StdRng::seed_from_u64(1);
        for seed in 0..200 {
            let card = make_card(seed, &mut rng);

            let (prefix, suffix) = card.id.split_once('-').unwrap();
            assert_eq!(prefix, seed.to_string());
            let suffix: i64 = suffix.parse().unwrap();
            assert!((1000..=9999).contains(&suffix));

            let (adjective, noun) = card.name.split_once(' ').unwrap();
            assert!(ADJECTIVES.contains(&adjective));
            assert!(NOUNS.contains(&noun));
            assert!(ELEMENTS.contains(&card.element));

            assert_eq!(card.art, format!("https://picsum.photos/seed/{}-{}/300/450", seed, card.element));
            assert_eq!(card.holographic, card.rarity.is_holographic());
            assert_eq!(card.theme, CardTheme::for_rarity(card.rarity));
            assert!((100..=4000).contains(&card.attack));
            assert!((100..=4000).contains(&card.defense));
            assert_eq!(card.lore, CARD_LORE);
        }
    }

    #[test]
    fn test_art_url_strips_spaces() {
        assert_eq!(art_url(7, "Deep Tide"), "https://picsum.photos/seed/7-DeepTide/300/450");
    }

    #[test]
    fn test_card_json_shape() {
        let mut rng = StdRng::seed_from_u64(9);
        let value = serde_json::to_value(make_card(4, &mut rng)).unwrap();
        let obj = value.as_object().unwrap();

        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(keys, vec![
            "art", "attack", "defense", "element", "holographic", "id", "lore", "name", "rarity", "theme",
        ]);
        assert!(obj["theme"]["frame"].is_string());
        assert!(obj["theme"]["glow"].is_string());
        assert!(obj["theme"]["foil"].is_string());
        assert!(obj["attack"].is_i64());
    }

    #[test]
    fn test_themes_are_distinct() {
        for (i, a) in Rarity::ALL.iter().enumerate() {
            for b in &Rarity::ALL[i + 1..] {
                assert_ne!(CardTheme::for_rarity(*a), CardTheme::for_rarity(*b));
            }
        }
    }
}
