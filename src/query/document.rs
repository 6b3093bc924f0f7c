//! Wire document definitions
//!
//! Serde shapes of the `logs` document. Fields renamed with a leading `@`
//! become attributes, `$text` becomes element text, `None` fields and empty
//! lists are left out entirely.

use serde::Serialize;

use crate::model::{CurveInfo, LogIdentity};

/// `<logs xmlns=".." version="..">` root
#[derive(Debug, Serialize)]
#[serde(rename = "logs")]
pub(crate) struct LogsDocument<'a> {
    #[serde(rename = "@xmlns")]
    pub xmlns: &'a str,

    #[serde(rename = "@version")]
    pub version: &'a str,

    pub log: LogElement<'a>,
}

/// Single `<log>` object
#[derive(Debug, Serialize)]
pub(crate) struct LogElement<'a> {
    #[serde(rename = "@uidWell")]
    pub uid_well: &'a str,

    #[serde(rename = "@uidWellbore")]
    pub uid_wellbore: &'a str,

    #[serde(rename = "@uid")]
    pub uid: &'a str,

    #[serde(rename = "nameWell")]
    pub name_well: &'a str,

    #[serde(rename = "nameWellbore")]
    pub name_wellbore: &'a str,

    pub name: &'a str,

    #[serde(rename = "indexCurve", skip_serializing_if = "Option::is_none")]
    pub index_curve: Option<&'a str>,

    #[serde(rename = "indexType", skip_serializing_if = "Option::is_none")]
    pub index_type: Option<&'a str>,

    #[serde(rename = "logCurveInfo", skip_serializing_if = "Vec::is_empty")]
    pub log_curve_info: Vec<CurveInfoElement<'a>>,

    #[serde(rename = "startIndex", skip_serializing_if = "Option::is_none")]
    pub start_index: Option<MeasuredIndex<'a>>,

    #[serde(rename = "endIndex", skip_serializing_if = "Option::is_none")]
    pub end_index: Option<MeasuredIndex<'a>>,

    #[serde(rename = "startDateTimeIndex", skip_serializing_if = "Option::is_none")]
    pub start_date_time_index: Option<&'a str>,

    #[serde(rename = "endDateTimeIndex", skip_serializing_if = "Option::is_none")]
    pub end_date_time_index: Option<&'a str>,

    #[serde(rename = "logData", skip_serializing_if = "Option::is_none")]
    pub log_data: Option<LogDataElement>,
}

impl<'a> LogElement<'a> {
    /// Identity-only log element
    pub fn identity(identity: &'a LogIdentity) -> Self {
        Self {
            uid_well: &identity.well_uid,
            uid_wellbore: &identity.wellbore_uid,
            uid: &identity.log_uid,
            name_well: &identity.well_name,
            name_wellbore: &identity.wellbore_name,
            name: &identity.log_name,
            index_curve: None,
            index_type: None,
            log_curve_info: Vec::new(),
            start_index: None,
            end_index: None,
            start_date_time_index: None,
            end_date_time_index: None,
            log_data: None,
        }
    }
}

/// `<logCurveInfo uid="..">`
#[derive(Debug, Serialize)]
pub(crate) struct CurveInfoElement<'a> {
    #[serde(rename = "@uid")]
    pub uid: &'a str,

    pub mnemonic: &'a str,

    pub unit: &'a str,

    #[serde(rename = "curveDescription")]
    pub curve_description: &'a str,

    #[serde(rename = "typeLogData")]
    pub type_log_data: &'a str,
}

impl<'a> From<&'a CurveInfo> for CurveInfoElement<'a> {
    fn from(curve: &'a CurveInfo) -> Self {
        Self {
            uid: &curve.uid,
            mnemonic: &curve.mnemonic,
            unit: &curve.unit,
            curve_description: &curve.description,
            type_log_data: &curve.data_type,
        }
    }
}

/// Numeric index bound, e.g. `<startIndex uom="m">1200</startIndex>`
#[derive(Debug, Serialize)]
pub(crate) struct MeasuredIndex<'a> {
    #[serde(rename = "@uom")]
    pub uom: &'a str,

    #[serde(rename = "$text")]
    pub value: &'a str,
}

/// `<logData>` block
#[derive(Debug, Serialize)]
pub(crate) struct LogDataElement {
    #[serde(rename = "mnemonicList")]
    pub mnemonic_list: String,

    #[serde(rename = "unitList")]
    pub unit_list: String,

    pub data: Vec<String>,
}
