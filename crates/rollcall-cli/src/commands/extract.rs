use anyhow::Result;
use chrono::Local;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rollcall_browser::{DirectorySession, strategies};
use rollcall_core::{EmployeeRecord, Locators, export};
use std::path::PathBuf;
use std::time::Duration;

/// The directory page this tool was built for
pub const DEFAULT_URL: &str =
    "https://app.buildingconnected.com/companies/5cf7cd58d8ee170033942880/offices/5cf7cd58d8ee170033942881/employees";

/// Run the whole pipeline: connect, navigate, extract, report, save,
/// disconnect.
///
/// Runtime failures (unreachable debugger, navigation error, nothing
/// extracted, save error) are reported on stdout and the process still exits
/// normally; only argument-level problems produce a nonzero exit.
pub fn execute(
    port: u16,
    url: &url::Url,
    output: Option<PathBuf>,
    locators_path: Option<PathBuf>,
    wait_timeout: u64,
) -> Result<()> {
    tracing::info!("Starting extraction run against {}", url);

    let locators = match locators_path {
        Some(path) => match Locators::from_file(&path) {
            Ok(locators) => {
                println!("📄 Loaded locator overrides from {}", path.display());
                locators
            }
            Err(e) => {
                println!("{} Failed to load locators: {}", style("✗").red(), e);
                return Ok(());
            }
        },
        None => Locators::default(),
    };

    // Create tokio runtime for async operations
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async {
        // Step 1: Attach to the running browser
        println!("🔌 Connecting to browser on port {}...", port);
        let session = match DirectorySession::connect(port).await {
            Ok(session) => {
                println!(
                    "{} Successfully connected to browser debugging session",
                    style("✓").green()
                );
                session
            }
            Err(e) => {
                println!("{} Failed to connect to browser: {}", style("✗").red(), e);
                print_connect_hints(port);
                return Ok(());
            }
        };

        // Step 2: Load the directory page and wait for the list to render
        println!("🌐 Navigating to: {}", url);
        let spinner = wait_spinner();
        let navigated = session
            .navigate(
                url.as_str(),
                &locators.readiness,
                Duration::from_secs(wait_timeout),
            )
            .await;
        spinner.finish_and_clear();

        if let Err(e) = navigated {
            println!("{} Failed to navigate to URL: {}", style("✗").red(), e);
            session.disconnect();
            return Ok(());
        }
        println!("{} Page loaded", style("✓").green());

        // Step 3: Extract employee records
        println!("🔎 Starting data extraction...");
        let records =
            strategies::run_strategies(strategies::strategy_order(session.page(), &locators))
                .await;
        println!(
            "{} Total employees extracted: {}",
            style("✓").green(),
            records.len()
        );

        // Step 4: Report
        print_records(&records);

        // Step 5: Persist
        if records.is_empty() {
            println!(
                "{} No data extracted. Please check the page structure.",
                style("✗").red()
            );
            print_page_diagnostics(&session).await;
        } else {
            let path = output
                .unwrap_or_else(|| PathBuf::from(export::default_filename(Local::now())));
            match export::save_records(&records, &path) {
                Ok(()) => {
                    println!("{} Data saved to: {}", style("✓").green(), path.display());
                    println!(
                        "{} Saved {} employee records",
                        style("✓").green(),
                        records.len()
                    );
                }
                Err(e) => {
                    println!("{} Error saving spreadsheet: {}", style("✗").red(), e);
                }
            }
        }

        // Step 6: Release the automation handle, leaving the browser running
        session.disconnect();
        println!("{} Disconnected from browser session", style("✓").green());

        Ok(())
    });

    // Explicitly shutdown runtime with timeout to prevent hanging on blocking tasks
    runtime.shutdown_timeout(Duration::from_millis(100));

    result
}

fn wait_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message("Waiting for the directory list to render...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

/// Remediation hints for an unreachable debugging endpoint
fn print_connect_hints(port: u16) {
    println!();
    println!("Possible solutions:");
    println!("1. Make sure the browser is running with debugging enabled:");
    println!(
        "   chrome --remote-debugging-port={} --user-data-dir=/tmp/chrome-debug",
        port
    );
    println!("2. Check that nothing else is bound to port {}", port);
    println!("3. Pass --port if the browser uses a different debugging port");
}

/// Human-readable per-record summary; sentinel fields print as-is
fn print_records(records: &[EmployeeRecord]) {
    if records.is_empty() {
        println!("No data extracted");
        return;
    }

    println!();
    println!("{}", "=".repeat(50));
    println!("EXTRACTED EMPLOYEE DATA");
    println!("{}", "=".repeat(50));

    for (i, employee) in records.iter().enumerate() {
        println!();
        println!("Employee {}:", i + 1);
        println!("  Name: {}", employee.name);
        println!("  Designation: {}", employee.designation);
        println!("  Email: {}", employee.email);
        println!("  Phone: {}", employee.phone);
    }
    println!();
}

/// Debugging aid for the nothing-found case
async fn print_page_diagnostics(session: &DirectorySession) {
    println!();
    println!("Looking for potential employee data elements...");
    match session.page_diagnostics().await {
        Ok(diag) => {
            println!("Current page title: {}", diag.title);
            println!("Current URL: {}", diag.url);
            println!("Found {} links on the page", diag.link_count);
            println!("Found {} elements containing '@' symbol", diag.at_sign_count);
            println!("Page contains {} characters of text", diag.body_text_len);
        }
        Err(e) => {
            println!("Error during debugging: {}", e);
        }
    }
}
