//! Reply Parser Module
//!
//! Turns a store's `log` reply (`XMLout`) back into a [`Table`](crate::Table),
//! a curve-metadata list or a [`LogIdentity`](crate::LogIdentity).
//!
//! ## Reply Shape
//! ```text
//! logs
//! └── log (uidWell, uidWellbore, uid)
//!     ├── indexCurve, indexType
//!     ├── logCurveInfo*  (uid, mnemonic, unit, curveDescription, typeLogData)
//!     └── logData
//!         ├── mnemonicList   TIME,DEPTH,HKLA
//!         ├── unitList       s,m,klbf
//!         └── data*          2020-06-30T17:44:33,1200.5,180.2
//! ```
//!
//! Stores send a single `data` or `logCurveInfo` element the same way as
//! many; all repeated elements are read back as lists.

mod header;
mod log_data;

pub use header::{parse_curve_info, parse_identity};
pub use log_data::parse_table;

use crate::xml::XmlNode;

/// First `log` under a `logs` root
fn log_element(root: &XmlNode) -> Option<&XmlNode> {
    if root.name() != "logs" {
        return None;
    }
    root.child("log")
}
