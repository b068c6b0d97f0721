//! CSV and other delimiter-separated output.

use csv::{QuoteStyle, Terminator, WriterBuilder};

use super::{cell_text, visible, ExportOptions};
use crate::error::{Result, TableError};
use crate::table::Table;

/// Writes one line per row, header first unless disabled.
///
/// A field is quoted when it contains the delimiter, the quote character or
/// a line break; quotes inside are doubled. Lines are joined with `\n` and
/// there is no trailing newline.
pub fn to_csv(table: &Table, options: &ExportOptions) -> Result<String> {
    let delimiter = ascii_byte(options.delimiter)?;
    let quote = ascii_byte(options.quote)?;

    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .quote(quote)
        .quote_style(QuoteStyle::Necessary)
        .double_quote(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let columns = visible(table);

    if options.header {
        writer.write_record(columns.iter().map(|(_, c)| c.name.as_str()))?;
    }
    for row in table.rows() {
        writer.write_record(columns.iter().map(|(i, _)| cell_text(row, *i)))?;
    }

    let bytes = writer.into_inner()?;
    let mut out = String::from_utf8(bytes)?;
    if out.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}

fn ascii_byte(c: char) -> Result<u8> {
    if c.is_ascii() {
        Ok(c as u8)
    } else {
        Err(TableError::InvalidDelimiter(c))
    }
}
