use serde::{Deserialize, Serialize};
use ts_rs::TS;

use trisight_core::models::document::Document;
use trisight_core::models::score::{ScoreEntry, ScoreVector};

use crate::error::LexiconError;
use crate::matcher::{Trigger, TriggerSpec};

/// How a category turns trigger matches into a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreMode {
    /// 1 if any trigger matches, else 0.
    Presence,
    /// Number of distinct triggers that matched at least once. Repeated
    /// occurrences of the same trigger do not stack.
    Count,
}

/// Declarative category definition, as supplied by callers or profile data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategorySpec {
    pub id: String,
    pub label: String,
    pub mode: ScoreMode,
    pub triggers: Vec<TriggerSpec>,
}

/// A validated category with compiled triggers.
#[derive(Debug, Clone)]
pub struct Category {
    id: String,
    label: String,
    mode: ScoreMode,
    triggers: Vec<Trigger>,
}

impl Category {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn mode(&self) -> ScoreMode {
        self.mode
    }

    pub fn trigger_count(&self) -> usize {
        self.triggers.len()
    }
}

/// An immutable, validated scoring configuration.
///
/// Built once and shared read-only across any number of scoring calls.
/// Scoring holds no mutable state, so a config can be used from multiple
/// threads without coordination.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    categories: Vec<Category>,
}

impl ScoringConfig {
    /// Validate and compile a configuration.
    ///
    /// Category ids must be unique; every category needs at least one
    /// non-empty trigger; patterns must compile. Failures surface here,
    /// never as a silent zero score later.
    pub fn new(specs: Vec<CategorySpec>) -> Result<Self, LexiconError> {
        if specs.is_empty() {
            return Err(LexiconError::EmptyConfiguration);
        }

        let mut categories: Vec<Category> = Vec::with_capacity(specs.len());
        for spec in &specs {
            if categories.iter().any(|c| c.id == spec.id) {
                return Err(LexiconError::DuplicateCategory(spec.id.clone()));
            }
            if spec.triggers.is_empty() {
                return Err(LexiconError::EmptyCategory(spec.id.clone()));
            }
            let triggers = spec
                .triggers
                .iter()
                .map(|t| Trigger::compile(t, &spec.id))
                .collect::<Result<Vec<_>, _>>()?;
            categories.push(Category {
                id: spec.id.clone(),
                label: spec.label.clone(),
                mode: spec.mode,
                triggers,
            });
        }

        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Score a document against this configuration.
    ///
    /// Pure and deterministic: exactly one entry per category, in
    /// declaration order. An empty document scores zero everywhere.
    pub fn score(&self, doc: &Document) -> ScoreVector {
        let folded = doc.folded();
        let raw = doc.text();

        let entries = self
            .categories
            .iter()
            .map(|category| {
                let matched = category
                    .triggers
                    .iter()
                    .filter(|t| t.matches(raw, &folded))
                    .count() as u32;
                let value = match category.mode {
                    ScoreMode::Presence => u32::from(matched > 0),
                    ScoreMode::Count => matched,
                };
                ScoreEntry {
                    category: category.id.clone(),
                    label: category.label.clone(),
                    value,
                }
            })
            .collect();

        ScoreVector { entries }
    }

    /// The declarative form of this configuration, for listing a profile's
    /// vocabulary to the UI.
    pub fn to_specs(&self) -> Vec<CategorySpec> {
        self.categories
            .iter()
            .map(|category| CategorySpec {
                id: category.id.clone(),
                label: category.label.clone(),
                mode: category.mode,
                triggers: category.triggers.iter().map(Trigger::spec).collect(),
            })
            .collect()
    }
}
