use crate::error::DashResult;
use crate::render::{Renderer, VisualElement};

/// No-op renderer used by tests and headless page assembly.
///
/// It still validates every element so configuration defects surface before
/// a real charting backend is attached.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_marker_count: usize,
    pub last_region_count: usize,
    pub last_bar_count: usize,
    pub last_spoke_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, element: &VisualElement) -> DashResult<()> {
        element.validate()?;
        self.last_marker_count = element.markers.len();
        self.last_region_count = element.regions.len();
        self.last_bar_count = element.bars.len();
        self.last_spoke_count = element.spokes.len();
        self.last_text_count = element.texts.len();
        Ok(())
    }
}
