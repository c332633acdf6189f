//! Integration tests for the console table printer

use flowhash::table::Table;

#[test]
fn test_table_printer() {
    let rows = vec![
        vec!["very_very_long_row_one".to_string()],
        vec!["very_very_long_row_two".to_string()],
    ];
    let mut out = Vec::new();
    Table::new(["header_one"]).print(&mut out, &rows).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "HEADER_ONE            \nvery_very_long_row_one\nvery_very_long_row_two\n"
    );
}

#[test]
fn test_table_printer_filter() {
    let rows = vec![
        vec!["very_very_long_row_one".to_string(), "second_column".to_string()],
        vec!["very_very_long_row_two".to_string(), "second_column".to_string()],
    ];
    let table = Table::new(["header_one", "header_two"]).with_filter(["header_two"]);
    assert_eq!(
        table.render(&rows),
        "HEADER_TWO   \nsecond_column\nsecond_column\n"
    );
}

#[test]
fn test_table_printer_filter_wrong_header() {
    let rows = vec![
        vec!["very_very_long_row_one".to_string(), "second_column".to_string()],
        vec!["very_very_long_row_two".to_string(), "second_column".to_string()],
    ];
    let table = Table::new(["header_one", "header_two"]).with_filter(["badheader"]);
    assert_eq!(table.render(&rows), "\n\n\n");
}
