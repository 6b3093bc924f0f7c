//! Query Generator Module
//!
//! Builds WITSML `log` documents (query templates and store payloads) from
//! curve metadata, an optional table and an optional index interval.
//!
//! ## Document Shape
//! ```text
//! <logs xmlns="http://www.witsml.org/schemas/1series" version="1.4.1.1">
//!   <log uidWell=".." uidWellbore=".." uid="..">
//!     <nameWell/> <nameWellbore/> <name/>
//!     <indexCurve/> <indexType/>                    (curves given)
//!     <logCurveInfo uid=".."> .. </logCurveInfo>*   (include_curve_info)
//!     <startIndex uom=".."/> <endIndex uom=".."/>   (non-time interval)
//!     <startDateTimeIndex/> <endDateTimeIndex/>     (time interval)
//!     <logData>                                     (non-empty table)
//!       <mnemonicList>TIME,DEPTH</mnemonicList>
//!       <unitList>s,m</unitList>
//!       <data>..</data>*
//!     </logData>
//!   </log>
//! </logs>
//! ```

mod document;
mod generator;

pub use generator::{generate, LogQuery, LogQueryGenerator};
