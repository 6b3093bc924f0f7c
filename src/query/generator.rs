//! Log query generator
//!
//! Assembles a [`LogsDocument`] from metadata and an optional table, then
//! serializes it to an XML fragment.

use std::borrow::Cow;

use crate::config::{Config, DocumentSchema};
use crate::error::{Result, WitsmlError};
use crate::model::{CurveInfo, IndexInterval, IndexKind, LogIdentity, Table};

use super::document::{CurveInfoElement, LogDataElement, LogElement, LogsDocument, MeasuredIndex};

/// Inputs of a single generation call
#[derive(Debug, Clone, Copy)]
pub struct LogQuery<'a> {
    identity: &'a LogIdentity,
    curves: &'a [CurveInfo],
    table: Option<&'a Table>,
    interval: Option<&'a IndexInterval>,
    include_curve_info: bool,
}

impl<'a> LogQuery<'a> {
    /// Identity-only query; add curves, a table or an interval as needed
    pub fn new(identity: &'a LogIdentity) -> Self {
        Self {
            identity,
            curves: &[],
            table: None,
            interval: None,
            include_curve_info: true,
        }
    }

    pub fn curves(mut self, curves: &'a [CurveInfo]) -> Self {
        self.curves = curves;
        self
    }

    pub fn table(mut self, table: &'a Table) -> Self {
        self.table = Some(table);
        self
    }

    pub fn interval(mut self, interval: &'a IndexInterval) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Emit `logCurveInfo` entries (default `true`)
    ///
    /// Stores cap query length, so data-only updates usually turn this off.
    pub fn include_curve_info(mut self, include: bool) -> Self {
        self.include_curve_info = include;
        self
    }
}

/// Builds `logs` documents against a fixed [`DocumentSchema`]
#[derive(Debug, Clone, Default)]
pub struct LogQueryGenerator {
    schema: DocumentSchema,
}

impl LogQueryGenerator {
    pub fn new(schema: DocumentSchema) -> Self {
        Self { schema }
    }

    /// Use the schema carried by a client config
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.schema.clone())
    }

    pub fn schema(&self) -> &DocumentSchema {
        &self.schema
    }

    /// Generate the XML fragment for `query`
    ///
    /// Steps:
    /// 1. Identity attributes and names (always)
    /// 2. Without curves, stop: table and interval are ignored
    /// 3. Resolve the single index curve
    /// 4. Curve info, interval bounds, then log data
    pub fn generate(&self, query: &LogQuery<'_>) -> Result<String> {
        let mut log = LogElement::identity(query.identity);

        if !query.curves.is_empty() {
            let index_curve = find_index_curve(query.curves)?;
            log.index_curve = Some(index_curve.uid.as_str());
            log.index_type = Some(index_curve.effective_index_type());

            if query.include_curve_info {
                log.log_curve_info = query.curves.iter().map(CurveInfoElement::from).collect();
            }

            if let Some(interval) = query.interval {
                apply_interval(&mut log, interval, &index_curve.unit);
            }

            if let Some(table) = query.table.filter(|t| !t.is_empty()) {
                log.log_data = Some(build_log_data(query.curves, index_curve, table)?);
            }
        }

        let document = LogsDocument {
            xmlns: self.schema.namespace(),
            version: self.schema.version(),
            log,
        };

        let xml = quick_xml::se::to_string(&document)
            .map_err(|e| WitsmlError::Serialization(e.to_string()))?;

        tracing::debug!(
            "Generated log query for {}/{}/{} ({} curves, {} data rows)",
            query.identity.well_uid,
            query.identity.wellbore_uid,
            query.identity.log_uid,
            document.log.log_curve_info.len(),
            document.log.log_data.as_ref().map_or(0, |d| d.data.len())
        );

        Ok(xml)
    }
}

/// Generate with the default schema
pub fn generate(query: &LogQuery<'_>) -> Result<String> {
    LogQueryGenerator::default().generate(query)
}

/// Locate the single curve flagged as index
fn find_index_curve(curves: &[CurveInfo]) -> Result<&CurveInfo> {
    let mut flagged = curves.iter().filter(|c| c.is_index_curve);

    let index_curve = flagged.next().ok_or(WitsmlError::IndexCurveNotDefined)?;
    if flagged.next().is_some() {
        return Err(WitsmlError::MultipleIndexCurveDefined);
    }

    Ok(index_curve)
}

fn apply_interval<'a>(log: &mut LogElement<'a>, interval: &'a IndexInterval, uom: &'a str) {
    match interval.kind {
        IndexKind::Time => {
            log.start_date_time_index = Some(interval.start.as_str());
            log.end_date_time_index = Some(interval.end.as_str());
        }
        IndexKind::NonTime => {
            log.start_index = Some(MeasuredIndex {
                uom,
                value: &interval.start,
            });
            log.end_index = Some(MeasuredIndex {
                uom,
                value: &interval.end,
            });
        }
    }
}

/// Build the `logData` block
///
/// The caller's table is only cloned when the index curve has to be
/// promoted from a column.
fn build_log_data(
    curves: &[CurveInfo],
    index_curve: &CurveInfo,
    table: &Table,
) -> Result<LogDataElement> {
    // Step 1: Make the index curve the row index
    let table = if table.index_name() == Some(index_curve.uid.as_str()) {
        Cow::Borrowed(table)
    } else {
        if !table.contains_column(&index_curve.uid) {
            return Err(WitsmlError::IndexCurveNotExistInTable);
        }
        let mut owned = table.clone();
        owned.set_index(&index_curve.uid)?;
        Cow::Owned(owned)
    };

    // Step 2: Mnemonics, index first
    let mut mnemonics = Vec::with_capacity(table.columns().len() + 1);
    mnemonics.push(index_curve.mnemonic.as_str());
    mnemonics.extend(table.columns().iter().map(String::as_str));

    // Step 3: Units, one per matching curve
    let mut units = vec![index_curve.unit.as_str()];
    for column in table.columns() {
        units.extend(
            curves
                .iter()
                .filter(|c| &c.mnemonic == column)
                .map(|c| c.unit.as_str()),
        );
    }

    let expected = table.columns().len() + 1;
    if units.len() != expected {
        return Err(WitsmlError::ColumnCountMismatch {
            expected,
            actual: units.len(),
        });
    }

    // Step 4: Data rows, index value first
    let data = table
        .rows()
        .map(|(label, cells)| {
            let mut fields = Vec::with_capacity(cells.len() + 1);
            fields.push(label);
            fields.extend(cells.iter().map(String::as_str));
            fields.join(",")
        })
        .collect();

    Ok(LogDataElement {
        mnemonic_list: mnemonics.join(","),
        unit_list: units.join(","),
        data,
    })
}
