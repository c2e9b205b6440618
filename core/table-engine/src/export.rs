//! FILENAME: core/table-engine/src/export.rs
//! CSV export over the filtered/sorted (pre-pagination) record set.
//!
//! Produces text only; handing the blob to a file or download mechanism
//! is the caller's concern. Values are the raw field representations,
//! never a column's display format.

use crate::definition::{ColumnDef, Record};

/// Serializes records to CSV: one header line of column titles, then
/// one line per record with the field values in column order. Fields
/// containing a comma, double quote, or newline are wrapped in double
/// quotes with inner quotes doubled.
pub fn export_csv(records: &[Record], columns: &[ColumnDef]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);

    let header = columns
        .iter()
        .map(|col| escape_field(&col.title))
        .collect::<Vec<_>>()
        .join(",");
    lines.push(header);

    for record in records {
        let line = columns
            .iter()
            .map(|col| escape_field(&record.field_string(&col.key)))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(line);
    }

    lines.join("\n")
}

fn escape_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("name", "Name"),
            ColumnDef::new("role", "Role"),
        ]
    }

    /// Minimal RFC-4180 parser used to round-trip the export output.
    fn parse_csv(text: &str) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        let mut row = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            if in_quotes {
                if c == '"' {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    field.push(c);
                }
            } else {
                match c {
                    '"' => in_quotes = true,
                    ',' => row.push(std::mem::take(&mut field)),
                    '\n' => {
                        row.push(std::mem::take(&mut field));
                        rows.push(std::mem::take(&mut row));
                    }
                    _ => field.push(c),
                }
            }
        }
        row.push(field);
        rows.push(row);
        rows
    }

    #[test]
    fn exports_header_and_rows_with_comma_quoting() {
        let records = vec![
            Record::new("1")
                .with_field("name", "Al,ice")
                .with_field("role", "Admin"),
            Record::new("2")
                .with_field("name", "Bob")
                .with_field("role", "User"),
        ];

        let csv = export_csv(&records, &columns());
        assert_eq!(csv, "Name,Role\n\"Al,ice\",Admin\nBob,User");
    }

    #[test]
    fn inner_quotes_are_doubled() {
        let records = vec![Record::new("1")
            .with_field("name", "The \"Boss\"")
            .with_field("role", "Admin")];
        let csv = export_csv(&records, &columns());
        assert_eq!(csv, "Name,Role\n\"The \"\"Boss\"\"\",Admin");
    }

    #[test]
    fn missing_field_exports_as_empty() {
        let records = vec![Record::new("1").with_field("name", "Alice")];
        let csv = export_csv(&records, &columns());
        assert_eq!(csv, "Name,Role\nAlice,");
    }

    #[test]
    fn empty_record_set_exports_header_only() {
        let csv = export_csv(&[], &columns());
        assert_eq!(csv, "Name,Role");
    }

    #[test]
    fn round_trip_with_commas_quotes_and_newlines() {
        let records = vec![
            Record::new("1")
                .with_field("name", "line1\nline2")
                .with_field("role", "a,b"),
            Record::new("2")
                .with_field("name", "say \"hi\"")
                .with_field("role", "User"),
        ];

        let parsed = parse_csv(&export_csv(&records, &columns()));
        assert_eq!(parsed[0], vec!["Name", "Role"]);
        assert_eq!(parsed[1], vec!["line1\nline2", "a,b"]);
        assert_eq!(parsed[2], vec!["say \"hi\"", "User"]);
    }

    #[test]
    fn exports_raw_values_ignoring_display_format() {
        let columns = vec![
            ColumnDef::new("name", "Name"),
            ColumnDef::new("price", "Price").with_format("currency"),
        ];
        let records = vec![Record::new("1")
            .with_field("name", "Gold")
            .with_field("price", 1825.5)];
        let csv = export_csv(&records, &columns);
        assert_eq!(csv, "Name,Price\nGold,1825.5");
    }
}
