// Projection errors. Anything missing from a record at export time is
// fatal; there is no defaulting and no partial-row emission.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("listing {id} is missing expected field '{field}'")]
    MissingField { field: String, id: u64 },

    #[error("unsupported CSV column '{0}' in configuration")]
    UnsupportedColumn(String),
}
