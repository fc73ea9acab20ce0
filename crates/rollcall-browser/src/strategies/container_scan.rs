use super::{probe_text, record_from_probes};
use chromiumoxide::Page;
use rollcall_core::{EmployeeRecord, Locators};

/// Scan the virtualized list for repeated row containers and probe each one
/// for the four fields independently.
///
/// The most resilient strategy: a missing field in one row degrades to the
/// sentinel instead of aborting the record, and a broken row is simply
/// skipped. A row only counts if it produced a non-empty name.
pub(super) async fn extract(page: &Page, locators: &Locators) -> Vec<EmployeeRecord> {
    let containers = match page.find_elements(locators.row_container.as_str()).await {
        Ok(containers) => containers,
        Err(e) => {
            tracing::debug!("Container lookup failed: {}", e);
            return Vec::new();
        }
    };

    tracing::info!("Found {} potential employee containers", containers.len());

    let mut records = Vec::new();
    for container in &containers {
        let name = probe_text(container, &locators.name).await;
        let designation = probe_text(container, &locators.designation).await;
        let email = probe_text(container, &locators.email).await;
        let phone = probe_text(container, &locators.phone).await;

        if let Some(record) = assemble(name, designation, email, phone) {
            tracing::info!("Extracted: {}", record.name);
            records.push(record);
        }
    }

    records
}

/// Build a record from the row probes; rows without a name are dropped
fn assemble(
    name: Option<String>,
    designation: Option<String>,
    email: Option<String>,
    phone: Option<String>,
) -> Option<EmployeeRecord> {
    let record = record_from_probes(name, designation, email, phone);
    record.has_name().then_some(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollcall_core::SENTINEL;

    #[test]
    fn test_rows_with_name_and_title_keep_sentinel_contact_fields() {
        let probes = [
            ("Jane Doe", "Estimator"),
            ("John Roe", "Project Manager"),
            ("Ann Poe", "Architect"),
        ];

        let records: Vec<EmployeeRecord> = probes
            .iter()
            .filter_map(|(name, title)| {
                assemble(Some(name.to_string()), Some(title.to_string()), None, None)
            })
            .collect();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name, "Jane Doe");
        assert_eq!(records[0].designation, "Estimator");
        for record in &records {
            assert_eq!(record.email, SENTINEL);
            assert_eq!(record.phone, SENTINEL);
        }
    }

    #[test]
    fn test_row_without_name_is_dropped() {
        let result = assemble(
            None,
            Some("Estimator".to_string()),
            Some("jane@example.com".to_string()),
            None,
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_name_only_row_keeps_sentinels_for_the_rest() {
        let record = assemble(Some("Jane Doe".to_string()), None, None, None).unwrap();
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.designation, SENTINEL);
        assert_eq!(record.email, SENTINEL);
        assert_eq!(record.phone, SENTINEL);
    }
}
