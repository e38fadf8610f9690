//! Dataset file ingest.
//!
//! A headerless CSV with one `t,z` record per line. Blank lines are skipped,
//! lines starting with `#` are comments and fields are trimmed. Any malformed
//! record fails the load; there is no row-level recovery.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::Dataset;
use crate::error::{AppError, EXIT_IO};

/// Load a dataset file.
pub fn read_dataset(path: &Path) -> Result<Dataset, AppError> {
    let file = File::open(path).map_err(|e| AppError::io("open dataset file", path, e))?;
    parse_records(file)
        .map_err(|e| AppError::new(e.exit_code(), format!("{} ({})", e.message(), path.display())))
}

/// Parse dataset file contents.
pub fn parse_dataset(text: &str) -> Result<Dataset, AppError> {
    parse_records(text.as_bytes())
}

fn parse_records<R: Read>(source: R) -> Result<Dataset, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut t = Vec::new();
    let mut z = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| {
            let line = e.position().map_or(0, |p| p.line());
            AppError::new(EXIT_IO, format!("Line {line}: unreadable record: {e}"))
        })?;
        let line = record.position().map_or(0, |p| p.line());

        let (t_value, z_value) = parse_record(&record, line)?;
        t.push(t_value);
        z.push(z_value);
    }

    Dataset::new(t, z)
}

fn parse_record(record: &StringRecord, line: u64) -> Result<(f64, f64), AppError> {
    if record.len() != 2 {
        return Err(AppError::new(
            EXIT_IO,
            format!("Line {line}: expected 2 fields (t,z), found {}", record.len()),
        ));
    }
    Ok((field(record, 0, "t", line)?, field(record, 1, "z", line)?))
}

fn field(record: &StringRecord, idx: usize, name: &str, line: u64) -> Result<f64, AppError> {
    let raw = record.get(idx).unwrap_or("");
    raw.parse::<f64>()
        .map_err(|e| AppError::new(EXIT_IO, format!("Line {line}: invalid {name} '{raw}': {e}")))
}
