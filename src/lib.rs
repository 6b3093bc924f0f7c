//! # witsml-log
//!
//! Mapping between tabular curve data and WITSML 1.4.1.1 `log` documents:
//! - Query/document generation from curve metadata and a table
//! - Reply parsing back into a table or curve metadata
//! - Strict curve/column and index-curve validation
//! - Blocking SOAP client for the WITSML store interface
//!
//! ## Architecture Overview
//!
//! ```text
//!   CurveInfo[] + LogIdentity + Table + IndexInterval
//!                       │
//!                       ▼
//!              ┌─────────────────┐
//!              │ Query Generator │  ──▶  <logs><log>..</log></logs>
//!              └─────────────────┘                │
//!                                                 ▼
//!                                       ┌──────────────────┐
//!                                       │   WitsmlClient   │
//!                                       │ (SOAP Transport) │
//!                                       └────────┬─────────┘
//!                                                │ XMLout
//!                                                ▼
//!              ┌─────────────────┐
//!              │  Reply Parser   │  ──▶  Table / CurveInfo[] / LogIdentity
//!              └─────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use witsml_log::{generate, parse_table, CurveInfo, LogIdentity, LogQuery, Table};
//!
//! let identity = LogIdentity::new("W1", "Well 1", "WB1", "Wellbore 1", "L1", "Log 1");
//! let curves = vec![
//!     CurveInfo::new("TIME", "TIME", "s", "Time", "date time").as_index(),
//!     CurveInfo::new("DEPTH", "DEPTH", "m", "Depth", "double"),
//! ];
//!
//! let mut table = Table::with_index("TIME", ["DEPTH"]);
//! table.push_indexed_row("2020-06-30T17:44:33", [1200.5]).unwrap();
//!
//! let xml = generate(&LogQuery::new(&identity).curves(&curves).table(&table)).unwrap();
//! let parsed = parse_table(&xml).unwrap();
//! assert_eq!(parsed.columns(), ["TIME", "DEPTH"]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod xml;
pub mod query;
pub mod reply;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{WitsmlError, Result};
pub use config::{Config, ConfigBuilder, DocumentSchema, WITSML_NAMESPACE, WITSML_VERSION};
pub use model::{CurveInfo, IndexInterval, IndexKind, LogIdentity, Table};
pub use query::{generate, LogQuery, LogQueryGenerator};
pub use reply::{parse_curve_info, parse_identity, parse_table};
pub use client::{GetReply, ReturnElements, StoreReply, WitsmlClient};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of witsml-log
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
