use crate::Result;
use chromiumoxide::browser::Browser;
use chromiumoxide::{Element, Page};
use futures::StreamExt;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Interval between presence checks while waiting for an element
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// HTTP endpoint of the remote debugger on localhost
fn debugger_endpoint(debug_port: u16) -> String {
    format!("http://localhost:{}", debug_port)
}

/// A connection to an externally started browser's debugging endpoint.
///
/// The browser process is a caller-managed resource shared with whoever
/// started it; the session never launches it and never terminates it.
pub struct DirectorySession {
    debug_port: u16,
    browser: Browser,
    page: Page,
    handler_task: JoinHandle<()>,
}

/// Snapshot of the current page used when extraction comes back empty
#[derive(Debug)]
pub struct PageDiagnostics {
    pub title: String,
    pub url: String,
    pub link_count: usize,
    pub at_sign_count: usize,
    pub body_text_len: usize,
}

/// Count of elements whose visible text contains an '@'
const AT_SIGN_COUNT_JS: &str = r#"
(() => {
    let count = 0;
    for (const el of document.querySelectorAll('*')) {
        if (el.children.length > 0) continue;
        if ((el.textContent || '').includes('@')) count += 1;
    }
    return count;
})()
"#;

impl DirectorySession {
    /// Attach to a browser already listening for remote debugging on
    /// `debug_port`. A single attempt is made; an unreachable debugger is
    /// reported to the caller, which must not proceed to navigation.
    pub async fn connect(debug_port: u16) -> Result<Self> {
        let endpoint = debugger_endpoint(debug_port);
        tracing::info!("Connecting to browser debugger at {}", endpoint);

        let (browser, mut handler) = Browser::connect(endpoint.as_str()).await?;

        // The handler task must run for any browser command to complete
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    // Some CDP events are not fully parseable; keep going
                    tracing::debug!("CDP handler event error (continuing): {}", e);
                }
            }
        });

        // Give the browser a moment to report its targets
        tokio::time::sleep(Duration::from_millis(500)).await;

        let page = match Self::acquire_page(&browser).await {
            Ok(page) => page,
            Err(e) => {
                handler_task.abort();
                return Err(e);
            }
        };

        tracing::info!("Attached to browser on port {}", debug_port);

        Ok(Self {
            debug_port,
            browser,
            page,
            handler_task,
        })
    }

    /// Reuse the browser's current tab, or open a blank one if none exist
    async fn acquire_page(browser: &Browser) -> Result<Page> {
        if let Some(page) = browser.pages().await?.first() {
            tracing::debug!("Using existing page");
            return Ok(page.clone());
        }
        tracing::debug!("No existing pages, creating new page");
        Ok(browser.new_page("about:blank").await?)
    }

    /// Load `url` in the attached tab, then wait for the directory list to
    /// render by polling for `readiness` up to `wait_timeout`.
    ///
    /// The ceiling expiring is not a failure: the page may simply use
    /// different markup, and extraction still gets its chance.
    pub async fn navigate(
        &self,
        url: &str,
        readiness: &str,
        wait_timeout: Duration,
    ) -> Result<()> {
        self.page.goto(url).await?;
        tracing::info!("Navigated to: {}", url);

        if self.wait_for_element(readiness, wait_timeout).await.is_none() {
            tracing::warn!(
                "Directory list did not render within {}s; extracting anyway",
                wait_timeout.as_secs()
            );
        }

        Ok(())
    }

    /// Poll for the presence of an element matching `selector`.
    ///
    /// Returns `None`, not an error, when the timeout expires.
    pub async fn wait_for_element(&self, selector: &str, timeout: Duration) -> Option<Element> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            if let Ok(element) = self.page.find_element(selector).await {
                return Some(element);
            }
            if tokio::time::Instant::now() >= deadline {
                tracing::warn!("Timeout waiting for element: {}", selector);
                return None;
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// The attached tab
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Collect a few facts about the current page for the
    /// nothing-was-extracted report.
    pub async fn page_diagnostics(&self) -> Result<PageDiagnostics> {
        let title = self.page.get_title().await?.unwrap_or_default();
        let url = self.page.url().await?.unwrap_or_default();
        let link_count = self.page.find_elements("a").await.map(|v| v.len()).unwrap_or(0);
        let at_sign_count = match self.page.evaluate(AT_SIGN_COUNT_JS).await {
            Ok(result) => result.into_value::<usize>().unwrap_or(0),
            Err(_) => 0,
        };
        let body_text_len = match self.page.find_element("body").await {
            Ok(body) => body
                .inner_text()
                .await
                .ok()
                .flatten()
                .map(|text| text.len())
                .unwrap_or(0),
            Err(_) => 0,
        };

        Ok(PageDiagnostics {
            title,
            url,
            link_count,
            at_sign_count,
            body_text_len,
        })
    }

    /// Release the automation handle.
    ///
    /// The remote browser process keeps running; only the local websocket
    /// connection and its event pump go away.
    pub fn disconnect(self) {
        self.handler_task.abort();
        drop(self.browser);
        tracing::info!(
            "Disconnected from browser on port {} (browser left running)",
            self.debug_port
        );
    }
}
