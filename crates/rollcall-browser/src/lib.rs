mod error;
mod session;
pub mod strategies;

pub use error::{Error, Result};
pub use session::{DirectorySession, PageDiagnostics};
