use std::fmt;

use fantoccini::Locator;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A locator strategy with its extracted value, parsed once from a prefixed
/// locator string.
///
/// The string forms recognized are, in priority order: a leading `//` (XPath),
/// `id=`, `name=`, `class=`, `css=`, `link=`, and `partialLink=`. Anything
/// else is treated as a raw XPath query, which will fail at resolution time if
/// it is not one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", content = "value", rename_all = "camelCase")]
pub enum Target {
    /// XPath query, kept verbatim
    XPath(String),
    /// Element id attribute
    Id(String),
    /// Element name attribute
    Name(String),
    /// Single CSS class name
    ClassName(String),
    /// CSS selector
    Css(String),
    /// Exact visible text of an anchor
    LinkText(String),
    /// Substring of an anchor's visible text
    PartialLinkText(String),
}

impl Target {
    /// Parse a locator string. This never fails: unrecognized prefixes fall
    /// back to XPath interpretation, matching the original page-object
    /// convention. The value is everything after the first `=` of a
    /// recognized prefix, so values may themselves contain `=`.
    pub fn parse(raw: &str) -> Target {
        if raw.starts_with("//") {
            Target::XPath(raw.to_string())
        } else if let Some(value) = raw.strip_prefix("id=") {
            Target::Id(value.to_string())
        } else if let Some(value) = raw.strip_prefix("name=") {
            Target::Name(value.to_string())
        } else if let Some(value) = raw.strip_prefix("class=") {
            Target::ClassName(value.to_string())
        } else if let Some(value) = raw.strip_prefix("css=") {
            Target::Css(value.to_string())
        } else if let Some(value) = raw.strip_prefix("link=") {
            Target::LinkText(value.to_string())
        } else if let Some(value) = raw.strip_prefix("partialLink=") {
            Target::PartialLinkText(value.to_string())
        } else {
            // Could be a typo'd prefix; leave a trace rather than failing fast
            debug!("No recognized locator prefix in '{}', treating as XPath", raw);
            Target::XPath(raw.to_string())
        }
    }

    /// Short name of the selected strategy, for logs
    pub fn strategy(&self) -> &'static str {
        match self {
            Target::XPath(_) => "xpath",
            Target::Id(_) => "id",
            Target::Name(_) => "name",
            Target::ClassName(_) => "class",
            Target::Css(_) => "css",
            Target::LinkText(_) => "link",
            Target::PartialLinkText(_) => "partialLink",
        }
    }

    /// The extracted value portion of the locator
    pub fn value(&self) -> &str {
        match self {
            Target::XPath(v)
            | Target::Id(v)
            | Target::Name(v)
            | Target::ClassName(v)
            | Target::Css(v)
            | Target::LinkText(v)
            | Target::PartialLinkText(v) => v,
        }
    }

    /// Lower this target onto a query the driver natively understands.
    ///
    /// Name, class, and partial-link strategies have no direct WebDriver
    /// locator in fantoccini, so they lower to equivalent CSS or XPath
    /// queries. Quotes in the value are escaped so a `name=` or
    /// `partialLink=` value containing `'` still resolves.
    pub fn selector(&self) -> Selector {
        match self {
            Target::XPath(query) => Selector::XPath(query.clone()),
            Target::Id(id) => Selector::Id(id.clone()),
            Target::Name(name) => Selector::Css(format!("[name='{}']", css_string(name))),
            Target::ClassName(class) => Selector::Css(format!(".{class}")),
            Target::Css(css) => Selector::Css(css.clone()),
            Target::LinkText(text) => Selector::LinkText(text.clone()),
            Target::PartialLinkText(text) => Selector::XPath(format!(
                "//a[contains(normalize-space(.), {})]",
                xpath_string(text)
            )),
        }
    }
}

impl From<&str> for Target {
    fn from(raw: &str) -> Self {
        Target::parse(raw)
    }
}

impl fmt::Display for Target {
    /// Re-emits the prefixed string form (XPath queries print verbatim)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::XPath(query) => write!(f, "{query}"),
            _ => write!(f, "{}={}", self.strategy(), self.value()),
        }
    }
}

/// A driver-native query: one of the four strategies fantoccini speaks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Css(String),
    XPath(String),
    Id(String),
    LinkText(String),
}

impl Selector {
    /// Borrow as a fantoccini locator for a find call
    pub fn as_locator(&self) -> Locator<'_> {
        match self {
            Selector::Css(query) => Locator::Css(query),
            Selector::XPath(query) => Locator::XPath(query),
            Selector::Id(id) => Locator::Id(id),
            Selector::LinkText(text) => Locator::LinkText(text),
        }
    }
}

/// Backslash-escape a value for use inside a single-quoted CSS string
fn css_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Render a value as an XPath 1.0 string literal. XPath has no escape
/// sequence inside literals, so values containing `'` are stitched together
/// with `concat()`.
pub(crate) fn xpath_string(value: &str) -> String {
    if !value.contains('\'') {
        format!("'{value}'")
    } else {
        let parts: Vec<String> = value.split('\'').map(|part| format!("'{part}'")).collect();
        format!("concat({})", parts.join(r#", "'", "#))
    }
}

#[cfg(test)]
#[path = "locator_test.rs"]
mod locator_test;
