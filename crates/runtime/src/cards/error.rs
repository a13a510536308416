use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PackError {
    #[error("pack size {size} is out of range, expected {min}..={max}")]
    InvalidSize { size: usize, min: usize, max: usize },

    #[error("rarity weights must sum to a positive number")]
    EmptyRarityPool,
}
