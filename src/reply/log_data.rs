//! Log data parsing
//!
//! Rebuilds a [`Table`] from the `logData` block of a `log` reply.

use crate::error::{Result, WitsmlError};
use crate::model::Table;
use crate::xml::XmlNode;

use super::log_element;

/// Parse a `log` reply (`XMLout`) into a table
///
/// Columns come from `mnemonicList` (index curve first), one row per
/// `data` element. Values stay strings; the index column is an ordinary
/// column and the table gets a positional index.
pub fn parse_table(xml: &str) -> Result<Table> {
    let root = XmlNode::parse(xml)?;

    let log_data = log_element(&root)
        .and_then(|log| log.child("logData"))
        .ok_or(WitsmlError::ReplyMissingDataOrMnemonic)?;

    let mnemonic_list = log_data
        .child("mnemonicList")
        .map(XmlNode::text)
        .filter(|list| !list.is_empty())
        .ok_or(WitsmlError::ReplyMissingDataOrMnemonic)?;

    let rows: Vec<&XmlNode> = log_data.children_named("data").collect();
    if rows.is_empty() {
        return Err(WitsmlError::ReplyMissingDataOrMnemonic);
    }

    let columns: Vec<&str> = mnemonic_list.split(',').collect();
    let mut table = Table::new(columns.iter().copied());

    for (row, data) in rows.into_iter().enumerate() {
        let values: Vec<&str> = data.text().split(',').collect();
        table.push_row(values).map_err(|e| match e {
            WitsmlError::RowLength { expected, actual } => {
                WitsmlError::ReplyRowColumnMismatch {
                    row,
                    expected,
                    actual,
                }
            }
            other => other,
        })?;
    }

    tracing::debug!(
        "Parsed log reply into {} rows x {} columns",
        table.len(),
        columns.len()
    );

    Ok(table)
}
