//! Curve Metadata Model
//!
//! Describes a log's curves and identity, plus an optional index interval
//! used to bound queries.
//!
//! ## Index Curve
//! Exactly one [`CurveInfo`] in a curve list is flagged with
//! `is_index_curve`. Its uid names the row index of a [`Table`] and its
//! mnemonic/unit lead the `mnemonicList`/`unitList` of a log data block.

mod table;

pub use table::Table;

use serde::{Deserialize, Serialize};

/// Metadata for a single log curve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveInfo {
    pub uid: String,
    pub mnemonic: String,
    pub unit: String,
    pub description: String,

    /// WITSML `typeLogData` (e.g. `double`, `date time`)
    pub data_type: String,

    /// WITSML `indexType` (e.g. `date time`, `measured depth`); only
    /// meaningful on the index curve
    pub index_type: Option<String>,

    pub is_index_curve: bool,
}

impl CurveInfo {
    /// Create a non-index curve
    pub fn new(
        uid: impl Into<String>,
        mnemonic: impl Into<String>,
        unit: impl Into<String>,
        description: impl Into<String>,
        data_type: impl Into<String>,
    ) -> Self {
        Self {
            uid: uid.into(),
            mnemonic: mnemonic.into(),
            unit: unit.into(),
            description: description.into(),
            data_type: data_type.into(),
            index_type: None,
            is_index_curve: false,
        }
    }

    /// Flag this curve as the index curve
    pub fn as_index(mut self) -> Self {
        self.is_index_curve = true;
        self
    }

    /// Set the declared index type
    pub fn with_index_type(mut self, index_type: impl Into<String>) -> Self {
        self.index_type = Some(index_type.into());
        self
    }

    /// Index type emitted in a query: the declared one, else the data type
    pub fn effective_index_type(&self) -> &str {
        self.index_type.as_deref().unwrap_or(&self.data_type)
    }
}

/// Well, wellbore and log identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogIdentity {
    pub well_uid: String,
    pub well_name: String,
    pub wellbore_uid: String,
    pub wellbore_name: String,
    pub log_uid: String,
    pub log_name: String,
}

impl LogIdentity {
    pub fn new(
        well_uid: impl Into<String>,
        well_name: impl Into<String>,
        wellbore_uid: impl Into<String>,
        wellbore_name: impl Into<String>,
        log_uid: impl Into<String>,
        log_name: impl Into<String>,
    ) -> Self {
        Self {
            well_uid: well_uid.into(),
            well_name: well_name.into(),
            wellbore_uid: wellbore_uid.into(),
            wellbore_name: wellbore_name.into(),
            log_uid: log_uid.into(),
            log_name: log_name.into(),
        }
    }
}

/// How interval bounds are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexKind {
    /// `startDateTimeIndex` / `endDateTimeIndex`
    Time,

    /// `startIndex` / `endIndex` with the index curve unit as `uom`
    NonTime,
}

/// Query-time bounds on the index curve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexInterval {
    pub start: String,
    pub end: String,
    pub kind: IndexKind,
}

impl IndexInterval {
    /// Datetime bounds
    pub fn time(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            kind: IndexKind::Time,
        }
    }

    /// Numeric bounds (depth, elapsed time, ...)
    pub fn non_time(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            kind: IndexKind::NonTime,
        }
    }
}
