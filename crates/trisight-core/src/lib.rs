//! trisight-core
//!
//! Pure domain types: documents, score vectors, hierarchical metric sets,
//! gene panels. No I/O dependency — this is the shared vocabulary of the
//! Trisight system.

pub mod error;
pub mod models;
