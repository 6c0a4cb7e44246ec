use tracing::debug;

use crate::core::{ChartDescriptor, Dataset};
use crate::error::DashResult;
use crate::page::{layout_page, Page, PageBlock, PageConfig, SectionText};
use crate::render::render_chart;

/// One authored entry, kept in authoring order until the page is rendered.
#[derive(Debug, Clone, PartialEq)]
enum Entry {
    Section(SectionText),
    Chart {
        dataset: Dataset,
        descriptor: ChartDescriptor,
    },
}

/// Facade assembling one dashboard page.
///
/// The engine owns the page configuration and an ordered list of narrative
/// sections and chart descriptors. It holds no render state: calling
/// [`DashboardEngine::render_page`] twice yields equal pages.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardEngine {
    config: PageConfig,
    entries: Vec<Entry>,
}

impl DashboardEngine {
    #[must_use]
    pub fn new(config: PageConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn push_section(&mut self, section: SectionText) {
        self.entries.push(Entry::Section(section));
    }

    pub fn push_chart(&mut self, dataset: Dataset, descriptor: ChartDescriptor) {
        self.entries.push(Entry::Chart {
            dataset,
            descriptor,
        });
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Renders every chart with the page theme and lays the page out in
    /// authoring order.
    ///
    /// Fails fast on the first configuration error: a static mismatch cannot
    /// be retried, so no partial page is produced. Hosts that want a
    /// placeholder policy can call [`render_chart`] per chart instead.
    pub fn render_page(&self) -> DashResult<Page> {
        let mut blocks = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            match entry {
                Entry::Section(section) => blocks.push(PageBlock::Section(section.clone())),
                Entry::Chart {
                    dataset,
                    descriptor,
                } => {
                    let element = render_chart(dataset, descriptor, &self.config.theme)?;
                    blocks.push(PageBlock::Chart(element));
                }
            }
        }

        debug!(
            title = %self.config.title,
            blocks = blocks.len(),
            "page layout complete"
        );
        Ok(layout_page(self.config.clone(), blocks))
    }
}
