use serde::{Deserialize, Serialize};

/// Placeholder for a field that could not be located on the page.
///
/// Records always carry all four fields; absence is represented by this
/// literal, never by an empty string or a missing key.
pub const SENTINEL: &str = "N/A";

/// A single employee row as discovered on the directory page.
///
/// Records have no identity and are never deduplicated; the order of a
/// `Vec<EmployeeRecord>` is the order the rows were discovered on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub name: String,
    pub designation: String,
    pub email: String,
    pub phone: String,
}

impl EmployeeRecord {
    /// Create a record with every field set to the sentinel
    pub fn new() -> Self {
        Self {
            name: SENTINEL.to_string(),
            designation: SENTINEL.to_string(),
            email: SENTINEL.to_string(),
            phone: SENTINEL.to_string(),
        }
    }

    /// Whether a non-sentinel, non-empty name was found
    pub fn has_name(&self) -> bool {
        !self.name.is_empty() && self.name != SENTINEL
    }

    /// Whether any field holds real data
    pub fn has_any_field(&self) -> bool {
        [&self.name, &self.designation, &self.email, &self.phone]
            .iter()
            .any(|v| !v.is_empty() && v.as_str() != SENTINEL)
    }
}

impl Default for EmployeeRecord {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_all_sentinel() {
        let record = EmployeeRecord::new();
        assert_eq!(record.name, SENTINEL);
        assert_eq!(record.designation, SENTINEL);
        assert_eq!(record.email, SENTINEL);
        assert_eq!(record.phone, SENTINEL);
        assert!(!record.has_name());
        assert!(!record.has_any_field());
    }

    #[test]
    fn test_has_name_requires_non_sentinel_name() {
        let mut record = EmployeeRecord::new();
        record.email = "jane@example.com".to_string();
        assert!(!record.has_name());

        record.name = "Jane Doe".to_string();
        assert!(record.has_name());
    }

    #[test]
    fn test_has_any_field_with_single_field() {
        let mut record = EmployeeRecord::new();
        assert!(!record.has_any_field());

        record.phone = "+1 (555) 010-2233".to_string();
        assert!(record.has_any_field());
    }

    #[test]
    fn test_empty_string_does_not_count_as_data() {
        let mut record = EmployeeRecord::new();
        record.name = String::new();
        assert!(!record.has_name());
        assert!(!record.has_any_field());
    }
}
