use std::time::Duration;

use anyhow::{Context, Result};
use fantoccini::actions::{InputSource, MouseActions, PointerAction};
use fantoccini::elements::Element;
use fantoccini::{Client, Locator};
use tracing::{debug, info, warn};

use crate::errors::HarnessError;
use crate::locator::Target;

/// Fixed settle delay after scrolling an element into view, to let
/// animation and layout finish before the next interaction.
const SCROLL_SETTLE: Duration = Duration::from_secs(2);

/// Page-object base over a live WebDriver session.
///
/// Holds a shared handle to a session whose lifecycle is managed entirely by
/// the caller: `Page` never creates, reconfigures, or closes the session. The
/// `fantoccini::Client` is a cheap clone sharing the underlying connection.
///
/// Every action takes a locator string (see [`Target`] for the recognized
/// prefixes), re-resolves it immediately before use, and performs exactly one
/// interaction. Element handles are never retained across calls.
pub struct Page {
    client: Client,
    scenario: Option<String>,
}

impl Page {
    /// Wrap an externally managed WebDriver session
    pub fn new(client: Client) -> Self {
        Page {
            client,
            scenario: None,
        }
    }

    /// Wrap a session and record the scenario this page belongs to. The label
    /// is construction bookkeeping only; it shows up in logs and nowhere else.
    pub fn with_scenario(client: Client, scenario: impl Into<String>) -> Self {
        let scenario = scenario.into();
        debug!("Page created for scenario '{}'", scenario);
        Page {
            client,
            scenario: Some(scenario),
        }
    }

    /// The underlying session handle
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Scenario label, if one was recorded at construction
    pub fn scenario(&self) -> Option<&str> {
        self.scenario.as_deref()
    }

    /// Resolve a parsed target to an element on the current page
    async fn resolve(&self, target: &Target) -> Result<Element> {
        debug!(
            "Resolving {} locator with value '{}'",
            target.strategy(),
            target.value()
        );
        let selector = target.selector();
        let element = self
            .client
            .find(selector.as_locator())
            .await
            .with_context(|| format!("Element not found: {target}"))?;
        Ok(element)
    }

    /// Find an element by locator string
    pub async fn find(&self, locator: &str) -> Result<Element> {
        self.resolve(&Target::parse(locator)).await
    }

    /// Type text into an input field, optionally clearing it first
    pub async fn type_text(&self, locator: &str, text: &str, clear: bool) -> Result<()> {
        let target = Target::parse(locator);
        let element = self.resolve(&target).await?;

        if clear {
            debug!("Clearing field {}", target);
            element.clear().await?;
        }

        info!("Typing text into {}", target);
        element.send_keys(text).await?;
        Ok(())
    }

    /// Select a dropdown option by its visible label
    pub async fn select_by_label(&self, locator: &str, label: &str) -> Result<()> {
        let target = Target::parse(locator);
        let element = self.resolve(&target).await?;

        info!("Selecting '{}' in {}", label, target);
        element
            .select_by_label(label)
            .await
            .with_context(|| format!("Could not select '{label}' in {target}"))?;
        Ok(())
    }

    /// Click an element
    pub async fn click(&self, locator: &str) -> Result<()> {
        let target = Target::parse(locator);
        let element = self.resolve(&target).await?;

        info!("Clicking {}", target);
        element.click().await?;
        Ok(())
    }

    /// Whether at least one element matches the locator. Zero matches is
    /// `Ok(false)`, never an error; only transport failures propagate.
    pub async fn is_present(&self, locator: &str) -> Result<bool> {
        let target = Target::parse(locator);
        let selector = target.selector();
        let matches = self.client.find_all(selector.as_locator()).await?;
        debug!("{} element(s) match {}", matches.len(), target);
        Ok(!matches.is_empty())
    }

    /// Error unless at least one element matches the locator
    pub async fn assert_present(&self, locator: &str) -> Result<()> {
        if !self.is_present(locator).await? {
            anyhow::bail!("Element not found: {}", Target::parse(locator));
        }
        Ok(())
    }

    /// Read an element's full text content (the `textContent` property, not
    /// just the rendered text)
    pub async fn text(&self, locator: &str) -> Result<String> {
        let target = Target::parse(locator);
        let element = self.resolve(&target).await?;
        let text = element.prop("textContent").await?.unwrap_or_default();
        Ok(text)
    }

    /// Compare an element's text content against an expected value.
    ///
    /// Returns `Ok(true)` on an exact match. A mismatch is an error carrying
    /// both values, not a silent `false`: callers checking only the boolean
    /// still see mismatches fail.
    pub async fn verify_text(&self, locator: &str, expected: &str) -> Result<bool> {
        let target = Target::parse(locator);
        let actual = self.text(locator).await?;

        if actual != expected {
            return Err(HarnessError::TextMismatch {
                locator: target.to_string(),
                expected: expected.to_string(),
                actual,
            }
            .into());
        }
        Ok(true)
    }

    /// Move the pointer over an element
    pub async fn hover(&self, locator: &str) -> Result<()> {
        let target = Target::parse(locator);
        let element = self.resolve(&target).await?;

        info!("Hovering over {}", target);
        let mouse = MouseActions::new("mouse".to_string()).then(PointerAction::MoveToElement {
            element,
            duration: None,
            x: 0,
            y: 0,
        });
        self.client.perform_actions(mouse).await?;
        Ok(())
    }

    /// Scroll an element into view, then wait a fixed delay for layout to
    /// settle. The wait is a plain sleep, not a polled condition.
    pub async fn scroll_into_view(&self, locator: &str) -> Result<()> {
        let target = Target::parse(locator);
        let element = self.resolve(&target).await?;

        debug!("Scrolling {} into view", target);
        self.client
            .execute(
                "arguments[0].scrollIntoView(true);",
                vec![serde_json::to_value(&element)?],
            )
            .await?;
        tokio::time::sleep(SCROLL_SETTLE).await;
        Ok(())
    }

    /// Draw a red border around an element. Failures are logged and
    /// swallowed; a missing or non-highlightable element never fails a run.
    pub async fn highlight(&self, locator: &str) {
        let target = Target::parse(locator);
        if let Err(e) = self.try_highlight(&target).await {
            warn!("Could not highlight {}: {:#}", target, e);
        }
    }

    async fn try_highlight(&self, target: &Target) -> Result<()> {
        let element = self.resolve(target).await?;
        self.client
            .execute(
                "arguments[0].style.border = '3px solid red';",
                vec![serde_json::to_value(&element)?],
            )
            .await?;
        Ok(())
    }

    /// Switch the session's browsing context into the first iframe on the
    /// page. Frame state lives on the session, so all handles see the switch.
    pub async fn enter_first_frame(&self) -> Result<()> {
        debug!("Switching to first iframe");
        self.client
            .clone()
            .enter_frame(Some(0))
            .await
            .context("Could not switch to the first iframe")?;
        Ok(())
    }

    /// Switch the browsing context back to the top-level document
    pub async fn leave_frames(&self) -> Result<()> {
        debug!("Switching back to the top-level document");
        self.client
            .clone()
            .enter_frame(None)
            .await
            .context("Could not switch back to the top-level document")?;
        Ok(())
    }

    /// Click a sub-menu link by its exact visible text
    pub async fn click_menu_link(&self, visible_text: &str) -> Result<()> {
        let query = format!(
            "//ul[@class='sub-menu']//a[text()={}]",
            crate::locator::xpath_string(visible_text)
        );
        let element = self
            .client
            .find(Locator::XPath(&query))
            .await
            .with_context(|| format!("Menu entry not found: {visible_text}"))?;

        info!("Clicking menu entry '{}'", visible_text);
        element.click().await?;
        Ok(())
    }
}
