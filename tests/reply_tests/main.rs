//! Reply Parser Tests
//!
//! Tests verify:
//! - Table form: columns, rows, single-row replies
//! - Table form errors: missing data, missing mnemonics, short rows
//! - Curve-info form: index detection, single and empty lists
//! - Identity parsing

#[path = "../common/mod.rs"]
mod common;

use witsml_log::{parse_curve_info, parse_identity, parse_table, WitsmlError};

fn data_rows(rows: usize) -> String {
    (0..rows)
        .map(|row| {
            format!(
                "<data>{},{:.1},{:.1}</data>",
                common::timestamp(row),
                1200.0 + row as f64 * 0.5,
                180.0 + row as f64
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn table_reply(rows: usize) -> String {
    common::reply_with_log_data(&format!(
        "<logData><mnemonicList>TIME,DEPTH,HKLA</mnemonicList><unitList>s,m,klbf</unitList>{}</logData>",
        data_rows(rows)
    ))
}

const CURVE_INFO_REPLY: &str = r#"<logs xmlns="http://www.witsml.org/schemas/1series" version="1.4.1.1">
  <log uidWell="WELL_001" uidWellbore="WELLBORE_001" uid="LOG_001">
    <nameWell>WELL 001</nameWell>
    <nameWellbore>WELLBORE 001</nameWellbore>
    <name>LOG 001</name>
    <indexType>date time</indexType>
    <indexCurve>TIME</indexCurve>
    <logCurveInfo uid="TIME">
      <mnemonic>TIME</mnemonic>
      <unit>s</unit>
      <curveDescription>Time</curveDescription>
      <typeLogData>date time</typeLogData>
    </logCurveInfo>
    <logCurveInfo uid="DEPTH">
      <mnemonic>DEPTH</mnemonic>
      <unit>m</unit>
      <curveDescription>Depth Index</curveDescription>
      <typeLogData>double</typeLogData>
    </logCurveInfo>
    <logCurveInfo uid="HKLA">
      <mnemonic>HKLA</mnemonic>
      <unit>klbf</unit>
      <curveDescription>Average Hookload</curveDescription>
      <typeLogData>double</typeLogData>
    </logCurveInfo>
  </log>
</logs>"#;

// =============================================================================
// Table Form Tests
// =============================================================================

#[test]
fn test_reply_data() {
    common::init_tracing();

    let table = parse_table(&table_reply(10)).unwrap();

    assert_eq!(table.shape(), (10, 3));
    assert_eq!(table.columns(), ["TIME", "DEPTH", "HKLA"]);
    assert_eq!(table.index_name(), None);
    assert_eq!(table.value(0, "TIME"), Some("2020-06-30T17:44:33.000Z"));
    assert_eq!(table.value(3, "DEPTH"), Some("1201.5"));
    assert_eq!(table.value(9, "HKLA"), Some("189.0"));
}

#[test]
fn test_reply_single_data_row() {
    let table = parse_table(&table_reply(1)).unwrap();

    assert_eq!(table.shape(), (1, 3));
    assert_eq!(
        table.row(0).unwrap(),
        ["2020-06-30T17:44:33.000Z", "1200.0", "180.0"]
    );
}

#[test]
fn test_reply_without_log_data() {
    let xml = common::reply_with_log_data("");

    assert!(matches!(
        parse_table(&xml),
        Err(WitsmlError::ReplyMissingDataOrMnemonic)
    ));
}

#[test]
fn test_reply_without_mnemonic_list() {
    let xml = common::reply_with_log_data(&format!(
        "<logData><unitList>s,m,klbf</unitList>{}</logData>",
        data_rows(2)
    ));

    assert!(matches!(
        parse_table(&xml),
        Err(WitsmlError::ReplyMissingDataOrMnemonic)
    ));
}

#[test]
fn test_reply_with_empty_mnemonic_list() {
    let xml = common::reply_with_log_data(&format!(
        "<logData><mnemonicList></mnemonicList>{}</logData>",
        data_rows(2)
    ));

    assert!(matches!(
        parse_table(&xml),
        Err(WitsmlError::ReplyMissingDataOrMnemonic)
    ));
}

#[test]
fn test_reply_without_data_rows() {
    let xml = common::reply_with_log_data(
        "<logData><mnemonicList>TIME,DEPTH,HKLA</mnemonicList><unitList>s,m,klbf</unitList></logData>",
    );

    assert!(matches!(
        parse_table(&xml),
        Err(WitsmlError::ReplyMissingDataOrMnemonic)
    ));
}

#[test]
fn test_reply_insufficient_columns() {
    let xml = common::reply_with_log_data(
        "<logData><mnemonicList>TIME,DEPTH,HKLA</mnemonicList>\
         <data>2020-06-30T17:44:33.000Z,1200.0,180.0</data>\
         <data>2020-06-30T17:44:34.000Z,1200.5</data></logData>",
    );

    match parse_table(&xml) {
        Err(WitsmlError::ReplyRowColumnMismatch {
            row,
            expected,
            actual,
        }) => {
            assert_eq!(row, 1);
            assert_eq!(expected, 3);
            assert_eq!(actual, 2);
        }
        other => panic!("Expected ReplyRowColumnMismatch, got {:?}", other),
    }
}

#[test]
fn test_reply_empty_trailing_column_name_kept() {
    let xml = common::reply_with_log_data(
        "<logData><mnemonicList>TIME,DEPTH,</mnemonicList>\
         <data>2020-06-30T17:44:33.000Z,1200.0,</data></logData>",
    );

    let table = parse_table(&xml).unwrap();

    assert_eq!(table.columns(), ["TIME", "DEPTH", ""]);
    assert_eq!(table.value(0, ""), Some(""));
}

#[test]
fn test_reply_not_a_logs_document() {
    let xml = "<wells><well uid=\"WELL_001\"/></wells>";

    assert!(matches!(
        parse_table(xml),
        Err(WitsmlError::ReplyMissingDataOrMnemonic)
    ));
}

#[test]
fn test_reply_malformed_xml() {
    assert!(matches!(parse_table("<logs><log>"), Err(WitsmlError::Xml(_))));
}

// =============================================================================
// Curve Info Form Tests
// =============================================================================

#[test]
fn test_curve_info_with_index() {
    let curves = parse_curve_info(CURVE_INFO_REPLY).unwrap();

    assert_eq!(curves.len(), 3);

    let time = &curves[0];
    assert_eq!(time.uid, "TIME");
    assert_eq!(time.unit, "s");
    assert_eq!(time.data_type, "date time");
    assert!(time.is_index_curve);
    assert_eq!(time.index_type.as_deref(), Some("date time"));

    let hookload = &curves[2];
    assert_eq!(hookload.mnemonic, "HKLA");
    assert_eq!(hookload.description, "Average Hookload");
    assert!(!hookload.is_index_curve);
    assert_eq!(hookload.index_type, None);

    assert_eq!(curves.iter().filter(|c| c.is_index_curve).count(), 1);
}

#[test]
fn test_curve_info_matches_fixture() {
    let curves = parse_curve_info(CURVE_INFO_REPLY).unwrap();
    let expected: Vec<_> = common::curves()
        .into_iter()
        .map(|c| {
            if c.is_index_curve {
                c.with_index_type("date time")
            } else {
                c
            }
        })
        .collect();

    assert_eq!(curves, expected);
}

#[test]
fn test_curve_info_without_index_declaration() {
    let xml = CURVE_INFO_REPLY.replace("<indexType>date time</indexType>", "");

    let curves = parse_curve_info(&xml).unwrap();

    assert_eq!(curves.len(), 3);
    assert!(curves.iter().all(|c| !c.is_index_curve));
}

#[test]
fn test_curve_info_single_entry() {
    let xml = common::reply_with_log_data(
        r#"<indexCurve>DEPTH</indexCurve>
           <indexType>measured depth</indexType>
           <logCurveInfo uid="DEPTH">
             <mnemonic>DEPTH</mnemonic>
             <unit>m</unit>
           </logCurveInfo>"#,
    );

    let curves = parse_curve_info(&xml).unwrap();

    assert_eq!(curves.len(), 1);
    assert!(curves[0].is_index_curve);
    assert_eq!(curves[0].index_type.as_deref(), Some("measured depth"));
    assert_eq!(curves[0].description, "");
    assert_eq!(curves[0].data_type, "");
}

#[test]
fn test_curve_info_empty_list() {
    let curves = parse_curve_info(&common::reply_with_log_data("")).unwrap();
    assert!(curves.is_empty());
}

#[test]
fn test_curve_info_missing_log() {
    let xml = r#"<logs xmlns="http://www.witsml.org/schemas/1series" version="1.4.1.1"/>"#;

    assert!(matches!(parse_curve_info(xml), Err(WitsmlError::ReplyMissingLog)));
}

// =============================================================================
// Identity Tests
// =============================================================================

#[test]
fn test_parse_identity() {
    let identity = parse_identity(CURVE_INFO_REPLY).unwrap();
    assert_eq!(identity, common::identity());
}

#[test]
fn test_parse_identity_missing_log() {
    assert!(matches!(
        parse_identity("<logs/>"),
        Err(WitsmlError::ReplyMissingLog)
    ));
}
