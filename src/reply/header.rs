//! Log header parsing
//!
//! Curve metadata and identity from a `log` reply.

use crate::error::{Result, WitsmlError};
use crate::model::{CurveInfo, LogIdentity};
use crate::xml::XmlNode;

use super::log_element;

/// Parse the `logCurveInfo` entries of a `log` reply
///
/// A reply without curve info yields an empty list. A curve is flagged as
/// index only when the log declares both `indexCurve` and `indexType` and
/// `indexCurve` names the curve's mnemonic.
pub fn parse_curve_info(xml: &str) -> Result<Vec<CurveInfo>> {
    let root = XmlNode::parse(xml)?;
    let log = log_element(&root).ok_or(WitsmlError::ReplyMissingLog)?;

    let index = log
        .child("indexCurve")
        .zip(log.child("indexType"))
        .map(|(curve, kind)| (curve.text(), kind.text()));

    let curves: Vec<CurveInfo> = log
        .children_named("logCurveInfo")
        .map(|entry| {
            let mut curve = CurveInfo::new(
                entry.attribute("uid").unwrap_or_default(),
                entry.child_text("mnemonic"),
                entry.child_text("unit"),
                entry.child_text("curveDescription"),
                entry.child_text("typeLogData"),
            );

            if let Some((index_curve, index_type)) = index {
                if index_curve == curve.mnemonic {
                    curve.is_index_curve = true;
                    curve.index_type = Some(index_type.to_string());
                }
            }

            curve
        })
        .collect();

    tracing::debug!("Parsed {} curve info entries", curves.len());

    Ok(curves)
}

/// Parse the well/wellbore/log identity of a `log` reply
///
/// Missing attributes or names come back as empty strings.
pub fn parse_identity(xml: &str) -> Result<LogIdentity> {
    let root = XmlNode::parse(xml)?;
    let log = log_element(&root).ok_or(WitsmlError::ReplyMissingLog)?;

    Ok(LogIdentity::new(
        log.attribute("uidWell").unwrap_or_default(),
        log.child_text("nameWell"),
        log.attribute("uidWellbore").unwrap_or_default(),
        log.child_text("nameWellbore"),
        log.attribute("uid").unwrap_or_default(),
        log.child_text("name"),
    ))
}
