use serde::{Deserialize, Serialize};

use crate::core::Theme;
use crate::render::VisualElement;

/// Explicit page-level configuration.
///
/// The page title and theme travel with the page value; nothing is injected
/// through process-wide state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    pub title: String,
    pub theme: Theme,
}

impl PageConfig {
    #[must_use]
    pub fn new(title: impl Into<String>, theme: Theme) -> Self {
        Self {
            title: title.into(),
            theme,
        }
    }
}

/// One narrative block of static text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub body: String,
}

impl SectionText {
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            heading: None,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }
}

/// A page is an ordered interleaving of text and charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageBlock {
    Section(SectionText),
    Chart(VisualElement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub config: PageConfig,
    pub blocks: Vec<PageBlock>,
}

/// Purely structural page assembly: blocks keep their authoring order
/// exactly, with no conditional logic and no failure path.
#[must_use]
pub fn layout_page(config: PageConfig, blocks: Vec<PageBlock>) -> Page {
    Page { config, blocks }
}
