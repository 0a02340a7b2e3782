// ============================================================
// Layer 3 — Tabular Domain Types
// ============================================================
// Two in-memory tables flow through the pipeline:
//
//   Table         — the raw CSV exactly as loaded: a header row
//                   and string fields, one per header
//   LabeledTable  — the preprocessed result: identifier column
//                   gone, label column encoded as BinaryLabel
//
// A LabeledTable keeps the label column at its original position
// in `headers`, while each LabeledRow stores the label separately
// from its other fields. `LabeledTable::record` puts them back
// together in header order for serialisation.
//
// Reference: Rust Book §5 (Structs), §8 (Vectors)

use crate::domain::label::BinaryLabel;

/// A raw dataset: column headers from the first CSV row plus data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows:    Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Index of a column by exact header name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

/// One preprocessed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledRow {
    pub label:  BinaryLabel,
    /// Every non-label field, in header order
    pub fields: Vec<String>,
}

/// A preprocessed dataset whose label column holds only 0 or 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledTable {
    headers:     Vec<String>,
    label_index: usize,
    rows:        Vec<LabeledRow>,
}

impl LabeledTable {
    /// Build a labeled table.
    ///
    /// `label_index` is the position of the label column in `headers`;
    /// callers guarantee it is in range and that every row carries
    /// `headers.len() - 1` fields.
    pub fn new(headers: Vec<String>, label_index: usize, rows: Vec<LabeledRow>) -> Self {
        debug_assert!(label_index < headers.len());
        Self { headers, label_index, rows }
    }

    /// Same columns, different rows. Used to build train/test halves.
    pub fn with_rows(&self, rows: Vec<LabeledRow>) -> Self {
        Self {
            headers:     self.headers.clone(),
            label_index: self.label_index,
            rows,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn label_column(&self) -> &str {
        &self.headers[self.label_index]
    }

    pub fn rows(&self) -> &[LabeledRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<LabeledRow> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// A row's fields in header order, with the label written as 0 or 1.
    pub fn record(&self, row: &LabeledRow) -> Vec<String> {
        let mut out = Vec::with_capacity(row.fields.len() + 1);
        out.extend(row.fields[..self.label_index].iter().cloned());
        out.push(row.label.to_string());
        out.extend(row.fields[self.label_index..].iter().cloned());
        out
    }
}
