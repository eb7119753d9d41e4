pub mod document;
pub mod gene;
pub mod metric;
pub mod score;
