use serde_json::{json, Value};
use tablesmith::{Column, ExportFormat, ExportOptions, Table, TableError};

fn contacts() -> Table {
    let mut table = Table::new().with_columns([
        Column::new("Name").key("name"),
        Column::new("Phone").key("phone").right(),
        Column::new("Internal").key("internal").hidden(true),
    ]);
    table.add_row(["Charlie, Jr.", "555-0100", "x"]);
    table.add_row(["Ann <admin>", "555|0199", "y"]);
    table
}

#[test]
fn test_csv_quotes_fields_with_delimiter() {
    let out = contacts().export(ExportFormat::Csv, &ExportOptions::default()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Name,Phone");
    assert_eq!(lines[1], "\"Charlie, Jr.\",555-0100");
}

#[test]
fn test_csv_tab_delimited_without_header() {
    let opts = ExportOptions::new().delimiter('\t').header(false);
    let out = contacts().export(ExportFormat::Csv, &opts).unwrap();
    assert_eq!(out, "Charlie, Jr.\t555-0100\nAnn <admin>\t555|0199");
}

#[test]
fn test_json_uses_keys_and_skips_hidden() {
    let out = contacts().export_as("json").unwrap();
    let parsed: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        parsed,
        json!([
            {"name": "Charlie, Jr.", "phone": "555-0100"},
            {"name": "Ann <admin>", "phone": "555|0199"}
        ])
    );
    assert!(out.starts_with("[\n  {\n    \"name\""));
}

#[test]
fn test_html_escapes_markup() {
    let out = contacts().export_as("html").unwrap();
    assert!(out.starts_with("<table><thead><tr><th>Name</th><th>Phone</th></tr></thead>"));
    assert!(out.contains("<td>Ann &lt;admin&gt;</td>"));
    assert!(!out.contains("Internal"));
}

#[test]
fn test_markdown_alignment_and_pipes() {
    let out = contacts().export_as("markdown").unwrap();
    assert_eq!(
        out,
        "| Name | Phone |\n\
         | :--- | ---: |\n\
         | Charlie, Jr. | 555-0100 |\n\
         | Ann <admin> | 555\\|0199 |"
    );
}

#[test]
fn test_unknown_format() {
    assert!(matches!(
        contacts().export_as("yaml"),
        Err(TableError::UnknownFormat(_))
    ));
}
