//! trisight-reference
//!
//! Static reference metric sets and derived summaries. Pure data — the
//! percentages are published reference figures, not computed results.

pub mod development;
pub mod error;
pub mod gene_panel;
pub mod genetics;
pub mod holistic;
pub mod summary;
