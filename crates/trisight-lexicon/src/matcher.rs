use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::LexiconError;

/// How a trigger is declared in a category specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
#[ts(export)]
pub enum TriggerSpec {
    /// Literal phrase, matched as a case-insensitive substring.
    Literal(String),
    /// Simple alternation regex such as `trisomy\s+21|chromosome\s+21`.
    Pattern(String),
}

impl TriggerSpec {
    pub fn literal(text: &str) -> Self {
        TriggerSpec::Literal(text.to_string())
    }

    pub fn pattern(pattern: &str) -> Self {
        TriggerSpec::Pattern(pattern.to_string())
    }
}

/// A compiled trigger, ready for matching.
#[derive(Debug, Clone)]
pub enum Trigger {
    Literal(String),
    Pattern { source: String, regex: Regex },
}

impl Trigger {
    /// Compile a trigger spec. Literals are folded to lowercase here so the
    /// scorer can match them against the folded document directly.
    pub(crate) fn compile(spec: &TriggerSpec, category: &str) -> Result<Self, LexiconError> {
        match spec {
            TriggerSpec::Literal(text) => {
                let folded = text.trim().to_lowercase();
                if folded.is_empty() {
                    return Err(LexiconError::EmptyTrigger(category.to_string()));
                }
                Ok(Trigger::Literal(folded))
            }
            TriggerSpec::Pattern(pattern) => {
                if pattern.trim().is_empty() {
                    return Err(LexiconError::EmptyTrigger(category.to_string()));
                }
                let regex = RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| LexiconError::InvalidPattern {
                        category: category.to_string(),
                        source,
                    })?;
                Ok(Trigger::Pattern {
                    source: pattern.clone(),
                    regex,
                })
            }
        }
    }

    /// Whether this trigger occurs anywhere in the document.
    ///
    /// `raw` is the original text, `folded` its lowercased copy. Patterns
    /// are compiled case-insensitive and run over the raw text; literals
    /// were folded at compile time and scan the folded text.
    pub(crate) fn matches(&self, raw: &str, folded: &str) -> bool {
        match self {
            Trigger::Literal(needle) => folded.contains(needle.as_str()),
            Trigger::Pattern { regex, .. } => regex.is_match(raw),
        }
    }

    /// Declarative form of this trigger, for serializing a config back
    /// out. Literals come back in their folded form.
    pub fn spec(&self) -> TriggerSpec {
        match self {
            Trigger::Literal(text) => TriggerSpec::Literal(text.clone()),
            Trigger::Pattern { source, .. } => TriggerSpec::Pattern(source.clone()),
        }
    }
}
