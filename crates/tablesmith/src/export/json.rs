//! JSON array-of-objects output.

use serde_json::{Map, Value};

use super::{cell_at, visible};
use crate::error::Result;
use crate::table::Table;

/// One object per row keyed by column key, pretty-printed with two-space
/// indentation. Values keep their JSON type; a row without a cell for a
/// column leaves that key out.
pub fn to_json(table: &Table) -> Result<String> {
    let columns = visible(table);
    let records: Vec<Map<String, Value>> = table
        .rows()
        .iter()
        .map(|row| {
            columns
                .iter()
                .filter_map(|(i, column)| {
                    cell_at(row, *i).map(|cell| (column.key_name().to_string(), cell.content.clone()))
                })
                .collect()
        })
        .collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::table::Column;

    #[test]
    fn rows_become_keyed_objects() {
        let mut table = Table::new().with_columns([
            Column::new("Name").key("name"),
            Column::new("Age").key("age"),
            Column::new("Secret").hidden(true),
        ]);
        let record = json!({"name": "Ann", "age": 41, "Secret": "x"});
        table.add_row(record.as_object().unwrap().clone());

        let out = to_json(&table).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, json!([{"name": "Ann", "age": 41}]));
        assert!(out.contains("\n    \"name\": \"Ann\""));
    }

    #[test]
    fn key_order_follows_columns() {
        let mut table = Table::new().with_columns(["z", "a"]);
        table.add_row(["1", "2"]);
        let out = to_json(&table).unwrap();
        assert!(out.find("\"z\"").unwrap() < out.find("\"a\"").unwrap());
    }

    #[test]
    fn short_rows_omit_keys() {
        let mut table = Table::new().with_columns(["a", "b"]);
        table.add_row(["only"]);
        let parsed: Value = serde_json::from_str(&to_json(&table).unwrap()).unwrap();
        assert_eq!(parsed, json!([{"a": "only"}]));
    }

    #[test]
    fn empty_table_is_an_empty_array() {
        assert_eq!(to_json(&Table::new()).unwrap(), "[]");
    }
}
