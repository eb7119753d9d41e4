//! trisight-lexicon
//!
//! Rule-based text scoring. Pure data and matching — no I/O dependency.
//! Defines trigger vocabularies, scoring modes, and the built-in profiles
//! used to turn free-text clinical notes into metric vectors.

pub mod error;
pub mod matcher;
pub mod profiles;
pub mod scorer;

use scorer::ScoringConfig;

/// Trait implemented by each built-in scoring profile.
pub trait Profile: Send + Sync {
    /// Unique identifier for this profile (e.g., "clinical", "genetic_screen").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Clinical Profile").
    fn name(&self) -> &str;

    /// The validated scoring configuration for this profile.
    fn config(&self) -> &ScoringConfig;
}

/// Return all registered profiles.
pub fn all_profiles() -> Vec<Box<dyn Profile>> {
    vec![
        Box::new(profiles::clinical::Clinical),
        Box::new(profiles::genetic_screen::GeneticScreen),
    ]
}

/// Look up a profile by ID.
pub fn get_profile(id: &str) -> Option<Box<dyn Profile>> {
    all_profiles().into_iter().find(|p| p.id() == id)
}
