//! Table implementation
//!
//! Column-named, row-indexed table of string cells.

use std::fmt::Display;

use crate::error::{Result, WitsmlError};

/// Tabular curve values
///
/// Columns are named by curve mnemonic. Every row carries an index label;
/// the index may be named (e.g. after the index curve uid) or positional.
/// Cells are coerced to strings when they are pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Name of the row index, `None` for a positional index
    index_name: Option<String>,

    /// Column names in order
    columns: Vec<String>,

    /// Row index labels, one per row
    index: Vec<String>,

    /// Row-major cells; every row has `columns.len()` values
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with a positional index
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            index_name: None,
            columns: columns.into_iter().map(Into::into).collect(),
            index: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Create an empty table whose index is named `index_name`
    pub fn with_index<I, S>(index_name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new(columns);
        table.index_name = Some(index_name.into());
        table
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Append a row labelled with its position
    pub fn push_row<I, V>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Display,
    {
        let label = self.index.len().to_string();
        self.push_indexed_row(label, values)
    }

    /// Append a row with an explicit index label
    pub fn push_indexed_row<L, I, V>(&mut self, label: L, values: I) -> Result<()>
    where
        L: Display,
        I: IntoIterator<Item = V>,
        V: Display,
    {
        let row: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
        if row.len() != self.columns.len() {
            return Err(WitsmlError::RowLength {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }

        self.index.push(label.to_string());
        self.rows.push(row);
        Ok(())
    }

    /// Promote a column to the row index
    ///
    /// The column is removed from the column list and its values replace
    /// the current index labels.
    pub fn set_index(&mut self, column: &str) -> Result<()> {
        let position = self
            .column_position(column)
            .ok_or_else(|| WitsmlError::ColumnNotFound(column.to_string()))?;

        let name = self.columns.remove(position);
        self.index = self.rows.iter_mut().map(|row| row.remove(position)).collect();
        self.index_name = Some(name);
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn index_name(&self) -> Option<&str> {
        self.index_name.as_deref()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn index(&self) -> &[String] {
        &self.index
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.column_position(name).is_some()
    }

    fn column_position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows or no columns
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    /// Cells of row `row`, in column order
    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Iterate `(index label, cells)` pairs in row order
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.index
            .iter()
            .zip(self.rows.iter())
            .map(|(label, row)| (label.as_str(), row.as_slice()))
    }

    /// All cells of a named column, in row order
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let position = self.column_position(name)?;
        Some(self.rows.iter().map(|row| row[position].as_str()).collect())
    }

    /// Single cell lookup
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let position = self.column_position(column)?;
        self.rows.get(row).map(|r| r[position].as_str())
    }
}
