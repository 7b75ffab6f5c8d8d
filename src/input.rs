//! Raw tabular rows as produced by the CSV collaborator.
//!
//! A raw row keeps the original column headers of the source file; headers
//! vary by language and are resolved later through [crate::locale::Locale].

use crate::errors::Result;
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::Path;

/// One CSV line: original column header to raw cell text.
///
/// Ephemeral; consumed by [crate::record] and discarded.
pub type RawRow = HashMap<String, String>;

/// Read all rows from a header-first CSV source.
///
/// A source that cannot be parsed at all is fatal for the load; per-row data
/// quality problems are dealt with later, during record mapping.
pub fn read_rows<R: io::Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: RawRow = result?;
        rows.push(row);
    }
    Ok(rows)
}

/// Read all rows from a CSV file.
pub fn read_rows_path<P: AsRef<Path>>(path: P) -> Result<Vec<RawRow>> {
    let file = File::open(path)?;
    read_rows(io::BufReader::new(file))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rows_keep_original_headers() {
        let data = "ilha,Lat-Long\nSantiago,\"15.1,-23.6\"\n";
        let rows = read_rows(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["ilha"], "Santiago");
        assert_eq!(rows[0]["Lat-Long"], "15.1,-23.6");
    }

    #[test]
    fn short_rows_are_tolerated() {
        let data = "a,b,c\n1,2\n";
        let rows = read_rows(data.as_bytes()).unwrap();
        assert_eq!(rows[0].get("a").map(String::as_str), Some("1"));
        assert_eq!(rows[0].get("c"), None);
    }
}
