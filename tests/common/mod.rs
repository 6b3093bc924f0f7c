//! Shared fixtures for the integration tests

#![allow(dead_code)]

use witsml_log::{CurveInfo, LogIdentity, Table};

/// Install a test subscriber honoring `RUST_LOG`; safe to call repeatedly
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn identity() -> LogIdentity {
    LogIdentity::new(
        "WELL_001",
        "WELL 001",
        "WELLBORE_001",
        "WELLBORE 001",
        "LOG_001",
        "LOG 001",
    )
}

/// TIME (index), DEPTH, HKLA
pub fn curves() -> Vec<CurveInfo> {
    vec![
        CurveInfo::new("TIME", "TIME", "s", "Time", "date time").as_index(),
        CurveInfo::new("DEPTH", "DEPTH", "m", "Depth Index", "double"),
        CurveInfo::new("HKLA", "HKLA", "klbf", "Average Hookload", "double"),
    ]
}

pub fn timestamp(row: usize) -> String {
    format!("2020-06-30T17:44:{:02}.000Z", 33 + row)
}

/// `rows` rows with TIME, DEPTH and HKLA as ordinary columns
pub fn table(rows: usize) -> Table {
    let mut table = Table::new(["TIME", "DEPTH", "HKLA"]);
    for row in 0..rows {
        let depth = format!("{:.1}", 1200.0 + row as f64 * 0.5);
        let hookload = format!("{:.1}", 180.0 + row as f64);
        table
            .push_row([timestamp(row), depth, hookload])
            .unwrap();
    }
    table
}

/// A `logs` reply holding the given data block
pub fn reply_with_log_data(log_data: &str) -> String {
    format!(
        r#"<logs xmlns="http://www.witsml.org/schemas/1series" version="1.4.1.1">
  <log uidWell="WELL_001" uidWellbore="WELLBORE_001" uid="LOG_001">
    <nameWell>WELL 001</nameWell>
    <nameWellbore>WELLBORE 001</nameWellbore>
    <name>LOG 001</name>
    {}
  </log>
</logs>"#,
        log_data
    )
}
