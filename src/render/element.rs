use serde::{Deserialize, Serialize};

use crate::core::{ChartKind, Color};
use crate::error::DashResult;
use crate::render::{
    BarPrimitive, MarkerPrimitive, RegionPrimitive, SpokePrimitive, TableGrid, TextPrimitive,
};

/// Backend-agnostic scene for one rendered chart.
///
/// Only the primitive vectors matching the element's kind are populated;
/// the rest stay empty. Elements compare bit-for-bit with `PartialEq`, which
/// is how determinism of the render pipeline is checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualElement {
    pub kind: ChartKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub background: Color,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<MarkerPrimitive>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<RegionPrimitive>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bars: Vec<BarPrimitive>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub spokes: Vec<SpokePrimitive>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<TableGrid>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub texts: Vec<TextPrimitive>,
}

impl VisualElement {
    #[must_use]
    pub fn new(kind: ChartKind, background: Color) -> Self {
        Self {
            kind,
            title: None,
            background,
            markers: Vec::new(),
            regions: Vec::new(),
            bars: Vec::new(),
            spokes: Vec::new(),
            table: None,
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: MarkerPrimitive) -> Self {
        self.markers.push(marker);
        self
    }

    #[must_use]
    pub fn with_region(mut self, region: RegionPrimitive) -> Self {
        self.regions.push(region);
        self
    }

    #[must_use]
    pub fn with_bar(mut self, bar: BarPrimitive) -> Self {
        self.bars.push(bar);
        self
    }

    #[must_use]
    pub fn with_spoke(mut self, spoke: SpokePrimitive) -> Self {
        self.spokes.push(spoke);
        self
    }

    #[must_use]
    pub fn with_table(mut self, table: TableGrid) -> Self {
        self.table = Some(table);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> DashResult<()> {
        self.background.validate()?;
        for marker in &self.markers {
            marker.validate()?;
        }
        for region in &self.regions {
            region.validate()?;
        }
        for bar in &self.bars {
            bar.validate()?;
        }
        for spoke in &self.spokes {
            spoke.validate()?;
        }
        if let Some(table) = &self.table {
            table.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
            && self.regions.is_empty()
            && self.bars.is_empty()
            && self.spokes.is_empty()
            && self.table.is_none()
            && self.texts.is_empty()
    }
}
