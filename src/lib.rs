//! # pagekit
#![allow(clippy::uninlined_format_args)]
//!
//! Page-object helpers for WebDriver test suites, plus a cleaner for stale
//! report artifacts.
//!
//! The crate wraps an externally managed [`fantoccini`] session with the
//! convenience surface page objects usually re-implement by hand: prefixed
//! locator strings, single-shot element actions, and presence/text checks.
//! Session creation and teardown stay with the caller; a [`Page`] only ever
//! borrows the session.
//!
//! ## Locator strings
//!
//! Actions take a locator string whose prefix picks the strategy:
//!
//! | Prefix         | Strategy                               |
//! |----------------|----------------------------------------|
//! | `//`           | XPath (the whole string is the query)  |
//! | `id=`          | Element id                             |
//! | `name=`        | Element name attribute                 |
//! | `class=`       | CSS class name                         |
//! | `css=`         | CSS selector                           |
//! | `link=`        | Exact anchor text                      |
//! | `partialLink=` | Anchor text substring                  |
//!
//! Anything else is treated as a raw XPath query.
//!
//! ## Usage
//!
//! ```no_run
//! use fantoccini::ClientBuilder;
//! use pagekit::Page;
//!
//! # async fn example() -> anyhow::Result<()> {
//! // Session lifecycle is the caller's: connect, use, close.
//! let client = ClientBuilder::rustls()
//!     .connect("http://localhost:4444")
//!     .await?;
//! client.goto("https://example.com/login").await?;
//!
//! let page = Page::new(client.clone());
//! page.type_text("name=username", "demo", true).await?;
//! page.type_text("id=password", "secret", true).await?;
//! page.click("css=button[type='submit']").await?;
//! assert!(page.is_present("//nav[@class='account']").await?);
//!
//! client.close().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Report cleanup
//!
//! Before a run, drop the previous run's `test-output/` directory and
//! `test-output.zip` archive. Missing artifacts are a no-op and per-entry
//! failures are collected, never fatal:
//!
//! ```no_run
//! let report = pagekit::clean_report_artifacts()?;
//! if !report.is_clean() {
//!     eprintln!("Some report files survived: {:?}", report.warnings);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Failure classification for page actions
pub mod errors;

/// Locator-string parsing and strategy selection
pub mod locator;

/// Page-object base over a WebDriver session
pub mod page;

/// Stale report artifact cleanup
pub mod reports;

pub use errors::HarnessError;
pub use locator::{Selector, Target};
pub use page::Page;
pub use reports::{CleanupReport, REPORT_ARCHIVE, REPORT_DIR, clean_at, clean_report_artifacts};
