// src/core/engine.rs
use crate::core::hash::hash_to_u64;
use crate::core::modes::Mode;
use crate::core::types::{Config, GeneratedName, WordChoice};
use crate::words::WordSet;

/// Deterministic feature-name generator.
///
/// Every name is a pure function of the word pools, the configuration and
/// the generation index; the engine holds no other state. The only
/// non-deterministic input is the current calendar date, consulted when no
/// explicit seed is configured.
pub struct NameEngine {
    words: WordSet,
    cfg: Config,
}

impl NameEngine {
    pub fn new(words: WordSet, cfg: Config) -> Self {
        Self { words, cfg }
    }

    /// Produces a single feature name for the given index. Convenience
    /// wrapper around [`NameEngine::generate_explained`].
    ///
    /// The index differentiates names when generating several in one run;
    /// it only takes effect under the automatic seed.
    pub fn generate(&self, index: usize) -> String {
        self.generate_explained(index).name
    }

    /// Produces a feature name together with the full selection audit trail.
    ///
    /// Per position in the mode's pattern: hash `{seed}-{position}-{category}`
    /// down to a u64, reduce it modulo the pool size, and take that word.
    /// Empty pools are skipped, so the part count can be shorter than the
    /// pattern; an entirely empty word set yields an empty name. Generation
    /// itself never fails.
    pub fn generate_explained(&self, index: usize) -> GeneratedName {
        let pattern = Mode::parse(&self.cfg.mode).pattern();
        let seed = self.base_seed(index);

        let mut parts = Vec::with_capacity(pattern.len());
        let mut name_parts = Vec::with_capacity(pattern.len());

        for (i, &category) in pattern.iter().enumerate() {
            let pool = self.words.get(category);
            if pool.is_empty() {
                continue; // Skip empty categories
            }

            // Each position hashes its own key, so the same seed still
            // yields a different word per position.
            let hash = hash_to_u64(&format!("{}-{}-{}", seed, i, category));
            let idx = hash % pool.len() as u64;
            let word = pool[idx as usize].clone();

            name_parts.push(word.clone());
            parts.push(WordChoice {
                category,
                word,
                hash,
                index: idx,
                pool_size: pool.len(),
            });
        }

        GeneratedName {
            name: name_parts.join(" "),
            seed,
            pattern,
            parts,
        }
    }

    /// A non-empty configured seed is used verbatim. Otherwise the seed is
    /// `{lang}-{mode}-{index}-{date}`: reproducible within the same day and
    /// varying by index.
    fn base_seed(&self, index: usize) -> String {
        match &self.cfg.seed {
            Some(seed) if !seed.is_empty() => seed.clone(),
            _ => format!(
                "{}-{}-{}-{}",
                self.cfg.lang,
                self.cfg.mode,
                index,
                chrono::Local::now().format("%Y-%m-%d"),
            ),
        }
    }
}
