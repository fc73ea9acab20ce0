use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

// The directory page is a third-party web app; every selector below is an
// undocumented detail of its current DOM and can break without notice. They
// live here, as data with overridable defaults, rather than inside the
// extraction code.

/// Shared ancestor of the four fixed-position paths, ported from the
/// recorded absolute path into the rendered page.
const FIXED_PREFIX: &str = "body > div:nth-of-type(1) > div > div:nth-of-type(1) > \
    div:nth-of-type(1) > div:nth-of-type(2) > div > div > div:nth-of-type(2) > \
    div:nth-of-type(1) > div > div:nth-of-type(3) > div > div > div:nth-of-type(2) > \
    div:nth-of-type(1) > div:nth-of-type(1) > div > div:nth-of-type(2) > div > \
    div:nth-of-type(1)";

/// Selector set used by the extraction strategies.
///
/// Defaults match the directory page's current markup. A JSON file with any
/// subset of these keys can be supplied to override them when the page
/// structure changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Locators {
    /// Repeated row containers inside the virtualized list widget
    pub row_container: String,
    /// Element whose presence signals the list has rendered
    pub readiness: String,
    /// Candidate selectors for the name link, tried in order within a row
    pub name: Vec<String>,
    /// Candidate selectors for the job title element
    pub designation: Vec<String>,
    /// Candidate selectors for the email element
    pub email: Vec<String>,
    /// Candidate selectors for the phone element
    pub phone: Vec<String>,
    /// Whole-page absolute paths, one per field
    pub fixed: FixedPaths,
}

/// One hard-coded absolute structural path per field.
///
/// Fragile by construction: any structural change in the page breaks these
/// silently and the affected fields fall back to the sentinel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedPaths {
    pub name: String,
    pub designation: String,
    pub email: String,
    pub phone: String,
}

impl Default for Locators {
    fn default() -> Self {
        Self {
            row_container: "div[class*=\"ReactVirtualized\"] div[role*=\"row\"]".to_string(),
            readiness: "div[class*=\"ReactVirtualized\"] div[role*=\"row\"]".to_string(),
            name: vec![
                "a[class*=\"userName\"]".to_string(),
                "a[data-id*=\"user-name\"]".to_string(),
                "a".to_string(),
            ],
            designation: vec!["div[class*=\"title\"]".to_string()],
            email: vec!["div[data-id=\"employee-email\"]".to_string()],
            phone: vec!["div[data-id=\"employee-phone\"]".to_string()],
            fixed: FixedPaths::default(),
        }
    }
}

impl Default for FixedPaths {
    fn default() -> Self {
        Self {
            name: format!(
                "{} > div:nth-of-type(1) > div > div:nth-of-type(2) > div:nth-of-type(1) > a",
                FIXED_PREFIX
            ),
            designation: format!(
                "{} > div:nth-of-type(1) > div > div:nth-of-type(2) > div:nth-of-type(2) > div > div > div > div",
                FIXED_PREFIX
            ),
            email: format!("{} > div:nth-of-type(2) > div:nth-of-type(1)", FIXED_PREFIX),
            phone: format!("{} > div:nth-of-type(2) > div:nth-of-type(2)", FIXED_PREFIX),
        }
    }
}

impl Locators {
    /// Load selector overrides from a JSON file
    ///
    /// Keys absent from the file keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let locators = serde_json::from_str(&contents)?;
        Ok(locators)
    }
}
