mod container_scan;
mod fixed_position;
mod pattern_scan;

use chromiumoxide::{Element, Page};
use futures::FutureExt;
use futures::future::BoxFuture;
use rollcall_core::{EmployeeRecord, Locators};

/// One extraction attempt, named for logging
pub struct Strategy<'a> {
    pub name: &'static str,
    pub run: BoxFuture<'a, Vec<EmployeeRecord>>,
}

/// The fixed priority order: the resilient per-row scan first, the fragile
/// whole-page path lookup second, the diagnostic-only pattern scan last.
pub fn strategy_order<'a>(page: &'a Page, locators: &'a Locators) -> Vec<Strategy<'a>> {
    vec![
        Strategy {
            name: "container scan",
            run: container_scan::extract(page, locators).boxed(),
        },
        Strategy {
            name: "fixed position",
            run: fixed_position::extract(page, locators).boxed(),
        },
        Strategy {
            name: "pattern scan",
            run: pattern_scan::extract(page, locators).boxed(),
        },
    ]
}

/// Evaluate strategies in order; the first non-empty result wins and later
/// strategies are never polled.
pub async fn run_strategies(strategies: Vec<Strategy<'_>>) -> Vec<EmployeeRecord> {
    for strategy in strategies {
        tracing::debug!("Running strategy: {}", strategy.name);
        let records = strategy.run.await;
        if !records.is_empty() {
            tracing::info!(
                "Strategy '{}' produced {} record(s)",
                strategy.name,
                records.len()
            );
            return records;
        }
        tracing::debug!("Strategy '{}' produced no records", strategy.name);
    }
    Vec::new()
}

/// Fill a record from per-field probe results; absent probes stay at the
/// sentinel. Whether the record is kept is the calling strategy's decision.
fn record_from_probes(
    name: Option<String>,
    designation: Option<String>,
    email: Option<String>,
    phone: Option<String>,
) -> EmployeeRecord {
    let mut record = EmployeeRecord::new();
    if let Some(text) = name {
        record.name = text;
    }
    if let Some(text) = designation {
        record.designation = text;
    }
    if let Some(text) = email {
        record.email = text;
    }
    if let Some(text) = phone {
        record.phone = text;
    }
    record
}

/// Trimmed visible text of an element, if it has any
async fn element_text(element: &Element) -> Option<String> {
    let text = element.inner_text().await.ok().flatten()?;
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Try each selector inside `scope` until one yields non-empty text.
///
/// Absence of a field is not an error; the caller substitutes the sentinel.
async fn probe_text(scope: &Element, selectors: &[String]) -> Option<String> {
    for selector in selectors {
        if let Ok(element) = scope.find_element(selector.as_str()).await {
            if let Some(text) = element_text(&element).await {
                return Some(text);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollcall_core::SENTINEL;

    fn named_record(name: &str) -> EmployeeRecord {
        EmployeeRecord {
            name: name.to_string(),
            designation: SENTINEL.to_string(),
            email: SENTINEL.to_string(),
            phone: SENTINEL.to_string(),
        }
    }

    #[tokio::test]
    async fn test_first_non_empty_strategy_wins() {
        let strategies = vec![
            Strategy {
                name: "first",
                run: futures::future::ready(vec![named_record("Jane Doe")]).boxed(),
            },
            Strategy {
                name: "second",
                run: async { panic!("later strategies must not run") }.boxed(),
            },
        ];

        let records = run_strategies(strategies).await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Jane Doe");
    }

    #[tokio::test]
    async fn test_empty_strategy_falls_through() {
        let strategies = vec![
            Strategy {
                name: "first",
                run: futures::future::ready(Vec::new()).boxed(),
            },
            Strategy {
                name: "second",
                run: futures::future::ready(vec![named_record("John Roe")]).boxed(),
            },
        ];

        let records = run_strategies(strategies).await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "John Roe");
    }

    #[tokio::test]
    async fn test_all_strategies_empty_yields_empty_sequence() {
        let strategies = vec![
            Strategy {
                name: "first",
                run: futures::future::ready(Vec::new()).boxed(),
            },
            Strategy {
                name: "second",
                run: futures::future::ready(Vec::new()).boxed(),
            },
        ];

        let records = run_strategies(strategies).await;
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_result_preserves_strategy_record_order() {
        let strategies = vec![Strategy {
            name: "only",
            run: futures::future::ready(vec![
                named_record("First"),
                named_record("Second"),
                named_record("Third"),
            ])
            .boxed(),
        }];

        let records = run_strategies(strategies).await;
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }
}
