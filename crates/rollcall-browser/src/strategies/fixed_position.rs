use super::{element_text, record_from_probes};
use chromiumoxide::Page;
use rollcall_core::{EmployeeRecord, Locators};

/// Look each field up at its hard-coded absolute path against the whole page.
///
/// Produces at most one record, and only when at least one field resolved to
/// real text. Any structural change in the page breaks the paths silently;
/// the affected fields just stay at the sentinel.
pub(super) async fn extract(page: &Page, locators: &Locators) -> Vec<EmployeeRecord> {
    tracing::info!("Trying fixed-position paths...");

    let fixed = &locators.fixed;
    let name = lookup(page, "name", &fixed.name).await;
    let designation = lookup(page, "designation", &fixed.designation).await;
    let email = lookup(page, "email", &fixed.email).await;
    let phone = lookup(page, "phone", &fixed.phone).await;

    match assemble(name, designation, email, phone) {
        Some(record) => vec![record],
        None => Vec::new(),
    }
}

/// Build the single whole-page record; kept only when at least one field
/// resolved to real text
fn assemble(
    name: Option<String>,
    designation: Option<String>,
    email: Option<String>,
    phone: Option<String>,
) -> Option<EmployeeRecord> {
    let record = record_from_probes(name, designation, email, phone);
    record.has_any_field().then_some(record)
}

async fn lookup(page: &Page, field: &str, selector: &str) -> Option<String> {
    match page_text(page, selector).await {
        Some(text) => {
            tracing::info!("Found {}: {}", field, text);
            Some(text)
        }
        None => {
            tracing::info!("Could not find {}", field);
            None
        }
    }
}

async fn page_text(page: &Page, selector: &str) -> Option<String> {
    let element = page.find_element(selector).await.ok()?;
    element_text(&element).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollcall_core::SENTINEL;

    #[test]
    fn test_name_only_yields_record_with_sentinel_fields() {
        let record = assemble(Some("Jane Doe".to_string()), None, None, None).unwrap();
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.designation, SENTINEL);
        assert_eq!(record.email, SENTINEL);
        assert_eq!(record.phone, SENTINEL);
    }

    #[test]
    fn test_all_fields_missing_yields_no_record() {
        assert!(assemble(None, None, None, None).is_none());
    }

    #[test]
    fn test_non_name_field_alone_still_counts() {
        let record = assemble(
            None,
            None,
            Some("jane@example.com".to_string()),
            None,
        )
        .unwrap();
        assert_eq!(record.name, SENTINEL);
        assert_eq!(record.email, "jane@example.com");
    }
}
