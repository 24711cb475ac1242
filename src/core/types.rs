// src/core/types.rs
use crate::core::modes::Category;

/// Generation settings handed to the engine.
/// `mode` stays a raw string: it feeds the automatic seed and the word-file
/// path exactly as the user typed it, even when it is not a known mode.
#[derive(Debug, Clone)]
pub struct Config {
    pub lang: String,
    pub mode: String,
    /// Explicit seed. `None` (or empty) switches to the automatic
    /// date-based seed.
    pub seed: Option<String>,
}

/// The audit trail of a single word selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordChoice {
    pub category: Category,
    /// The selected word from the category pool.
    pub word: String,
    /// Raw hash computed from the seed, position and category.
    pub hash: u64,
    /// Pool index after the modulo operation (`hash % pool_size`).
    pub index: u64,
    /// Number of words available in this category.
    pub pool_size: usize,
}

/// A generated name together with everything needed to explain it.
#[derive(Debug, Clone)]
pub struct GeneratedName {
    /// The final feature name.
    pub name: String,
    /// The seed used for generation (automatic or user-provided).
    pub seed: String,
    /// The category pattern the mode resolved to.
    pub pattern: &'static [Category],
    /// One record per non-empty category position, in name order.
    pub parts: Vec<WordChoice>,
}
