pub mod error;
pub mod export;
pub mod locators;
pub mod record;

pub use error::{Error, Result};
pub use locators::Locators;
pub use record::{EmployeeRecord, SENTINEL};
