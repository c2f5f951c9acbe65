use std::io::{self, Write};

use thiserror::Error;

use super::record::StatusRecord;

const ANNOUNCEMENT: &str = "PIDPI Project initialized successfully!";
const INFO_LABEL: &str = "Project Info:";

#[derive(Debug, Error)]
pub(crate) enum InitError {
    #[error("failed to write status report: {0}")]
    Output(#[from] io::Error),

    #[error("failed to serialize status record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Initialize the project and report it on stdout.
///
/// Prints the announcement line, then `Project Info:` followed by the record
/// as JSON, and returns the record.
///
/// # Panics
///
/// Panics if writing to stdout fails, as `println!` does.
pub fn initialize_project() -> StatusRecord {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match report(&mut out) {
        Ok(record) => record,
        Err(err) => panic!("{err}"),
    }
}

/// Writes both report lines to `out` and returns the record they describe.
pub(crate) fn report<W: Write>(out: &mut W) -> Result<StatusRecord, InitError> {
    writeln!(out, "{ANNOUNCEMENT}")?;

    let record = StatusRecord::capture();
    let serialized = serde_json::to_string(&record)?;
    writeln!(out, "{INFO_LABEL} {serialized}")?;
    out.flush()?;

    tracing::debug!(
        status = %record.status(),
        timestamp = %record.timestamp(),
        version = record.version(),
        "project initialized"
    );

    Ok(record)
}
