// ============================================================
// Layer 4 — Label Preprocessor
// ============================================================
// Turns a raw Table into a LabeledTable ready for splitting.
//
// Steps (applied in order):
//   1. Drop the identifier column          (MissingColumn if absent)
//   2. Keep rows whose label is one of the
//      two configured label strings        (MissingColumn if absent)
//   3. Encode positive → 1, negative → 0
//
// Example with the default LabelConfig:
//
//   tweet_id,sentiment,content          sentiment,content
//   1,happiness,a               ──▶     1,a
//   2,sadness,b                         0,b
//   3,neutral,c                         (dropped)
//
// The input table is consumed and a new LabeledTable is built
// row by row; nothing is mutated in place. A result with zero
// rows is valid here, the splitter decides whether it is enough.
//
// Reference: Rust Book §8 (Vectors)
//            Rust Book §13 (Iterators)

use crate::domain::error::IngestError;
use crate::domain::label::LabelConfig;
use crate::domain::table::{LabeledRow, LabeledTable, Table};

pub struct Preprocessor {
    labels: LabelConfig,
}

impl Preprocessor {
    /// Create a Preprocessor for the given columns and label set
    pub fn new(labels: LabelConfig) -> Self {
        Self { labels }
    }

    /// Drop the identifier column, filter to the label set and encode labels.
    pub fn preprocess(&self, table: Table) -> Result<LabeledTable, IngestError> {
        match self.transform(table) {
            Ok(out) => {
                tracing::debug!(
                    "Data preprocessing completed: {} rows kept, {} columns, label column '{}'",
                    out.len(),
                    out.headers().len(),
                    out.label_column(),
                );
                Ok(out)
            }
            Err(e @ IngestError::MissingColumn(_)) => {
                tracing::error!(kind = %e.kind(), "Missing column in the dataset: {}", e);
                Err(e)
            }
            Err(e) => {
                tracing::error!(kind = %e.kind(), "Unexpected error during preprocessing: {}", e);
                Err(e)
            }
        }
    }

    fn transform(&self, table: Table) -> Result<LabeledTable, IngestError> {
        let cfg = &self.labels;
        if cfg.id_column == cfg.label_column {
            return Err(IngestError::Preprocess(format!(
                "identifier and label column are both '{}'",
                cfg.id_column
            )));
        }
        if cfg.positive == cfg.negative {
            return Err(IngestError::Preprocess(format!(
                "positive and negative label are both '{}'",
                cfg.positive
            )));
        }

        // ── Step 1: Drop the identifier column ────────────────────────────────
        let id_idx = table
            .column_index(&cfg.id_column)
            .ok_or_else(|| IngestError::MissingColumn(cfg.id_column.clone()))?;

        let headers: Vec<String> = table
            .headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != id_idx)
            .map(|(_, h)| h.clone())
            .collect();

        // ── Step 2: Locate the label column in the reduced header ────────────
        let label_idx = headers
            .iter()
            .position(|h| *h == cfg.label_column)
            .ok_or_else(|| IngestError::MissingColumn(cfg.label_column.clone()))?;

        let width = table.column_count();
        let total = table.row_count();

        // ── Step 3: Filter and encode, row by row ────────────────────────────
        let mut rows = Vec::with_capacity(total);
        for (line, row) in table.rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(IngestError::Preprocess(format!(
                    "row {} has {} fields, expected {}",
                    line + 1,
                    row.len(),
                    width
                )));
            }

            let mut fields: Vec<String> = row
                .into_iter()
                .enumerate()
                .filter(|(i, _)| *i != id_idx)
                .map(|(_, v)| v)
                .collect();

            let raw_label = fields.remove(label_idx);
            if let Some(label) = cfg.encode(&raw_label) {
                rows.push(LabeledRow { label, fields });
            }
        }

        if rows.is_empty() {
            tracing::warn!(
                "No rows matched labels '{}'/'{}' out of {} rows",
                cfg.positive,
                cfg.negative,
                total
            );
        } else {
            tracing::debug!("Dropped {} rows outside the label set", total - rows.len());
        }

        Ok(LabeledTable::new(headers, label_idx, rows))
    }
}

/// Implement Default so Preprocessor can be created with Preprocessor::default()
impl Default for Preprocessor {
    fn default() -> Self {
        Self::new(LabelConfig::default())
    }
}
