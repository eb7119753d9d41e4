use trisight_core::models::gene::{GeneExpression, GenePanel};

use crate::error::ReferenceError;

/// Parse the genetics form's two comma-separated fields into a panel.
///
/// `genes` lists gene names, `levels` the matching expression levels as
/// fractions in [0, 1]. Blank segments are ignored, so trailing commas are
/// tolerated; a count mismatch between the two fields is an error.
pub fn parse_gene_panel(genes: &str, levels: &str) -> Result<GenePanel, ReferenceError> {
    let gene_names = split_csv(genes);
    let level_values = split_csv(levels);

    if gene_names.is_empty() {
        return Err(ReferenceError::EmptyPanel);
    }
    if gene_names.len() != level_values.len() {
        return Err(ReferenceError::PanelMismatch {
            genes: gene_names.len(),
            levels: level_values.len(),
        });
    }

    let mut entries = Vec::with_capacity(gene_names.len());
    for (gene, raw) in gene_names.iter().zip(&level_values) {
        let level: f64 = raw.parse().map_err(|_| ReferenceError::UnreadableLevel {
            gene: (*gene).to_string(),
            raw: (*raw).to_string(),
        })?;
        if !(0.0..=1.0).contains(&level) {
            return Err(ReferenceError::LevelOutOfRange {
                gene: (*gene).to_string(),
                level,
            });
        }
        entries.push(GeneExpression {
            gene: (*gene).to_string(),
            level,
        });
    }

    Ok(GenePanel { entries })
}

fn split_csv(input: &str) -> Vec<&str> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
