use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::ReadError;

/// Raw site row: 4 or 9 text fields.
pub type Row = Vec<String>;

pub fn read_rows(path: &Path) -> Result<Vec<Row>, ReadError> {
    let file = File::open(path).map_err(|source| ReadError::Open {
        path: path.display().to_string(),
        source,
    })?;
    log::info!("Reading site rows from {}", path.display());
    read_rows_from(file)
}

/// Headerless, comma separated. Blank lines are dropped, fields trimmed.
pub fn read_rows_from<R: Read>(input: R) -> Result<Vec<Row>, ReadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.is_empty() {
            continue;
        }
        rows.push(record.iter().map(String::from).collect());
    }
    Ok(rows)
}
