use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read locator file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse locator file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to write spreadsheet: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),

    #[error("No records to save")]
    NoRecords,
}

pub type Result<T> = std::result::Result<T, Error>;
