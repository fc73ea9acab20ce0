use chromiumoxide::Page;
use lazy_static::lazy_static;
use regex::Regex;
use rollcall_core::{EmployeeRecord, Locators};
use serde::Deserialize;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap();
    static ref PHONE_RE: Regex = Regex::new(r"[+(]?\d[\d\s().-]{6,}").unwrap();
}

/// Harvest leaf-element texts that look like contact data. Capped so a
/// pathological page cannot flood the log.
const CANDIDATE_HARVEST_JS: &str = r#"
(() => {
    const emails = [];
    const phones = [];
    for (const el of document.querySelectorAll('*')) {
        if (el.children.length > 0) continue;
        const text = (el.textContent || '').trim();
        if (!text) continue;
        if (text.includes('@')) emails.push(text);
        if (text.includes('+1') || text.includes('(')) phones.push(text);
    }
    return { emails: emails.slice(0, 50), phones: phones.slice(0, 50) };
})()
"#;

#[derive(Debug, Default, Deserialize)]
struct Candidates {
    emails: Vec<String>,
    phones: Vec<String>,
}

/// Diagnostic only: logs text that looks like emails or phone numbers so a
/// broken locator set can be debugged, but assembles no records. Always
/// returns an empty sequence.
pub(super) async fn extract(page: &Page, _locators: &Locators) -> Vec<EmployeeRecord> {
    tracing::info!("Trying text pattern matching...");

    let candidates = match page.evaluate(CANDIDATE_HARVEST_JS).await {
        Ok(result) => match result.into_value::<Candidates>() {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::debug!("Pattern scan payload not parseable: {}", e);
                Candidates::default()
            }
        },
        Err(e) => {
            tracing::debug!("Pattern scan failed: {}", e);
            return Vec::new();
        }
    };

    for text in &candidates.emails {
        if EMAIL_RE.is_match(text) {
            tracing::info!("Found potential email: {}", text);
        }
    }
    for text in &candidates.phones {
        if PHONE_RE.is_match(text) {
            tracing::info!("Found potential phone: {}", text);
        }
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern_matches_addresses() {
        assert!(EMAIL_RE.is_match("jane.doe@example.com"));
        assert!(EMAIL_RE.is_match("Contact: j_roe+hr@mail.example.co.uk"));
        assert!(!EMAIL_RE.is_match("twitter @handle"));
        assert!(!EMAIL_RE.is_match("no contact data here"));
    }

    #[test]
    fn test_phone_pattern_matches_numbers() {
        assert!(PHONE_RE.is_match("+1 (555) 010-2233"));
        assert!(PHONE_RE.is_match("(415) 555-0100"));
        assert!(!PHONE_RE.is_match("(see below)"));
        assert!(!PHONE_RE.is_match("Jane Doe"));
    }
}
