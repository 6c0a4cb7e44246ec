mod bar;
mod bubble;
mod chart;
mod choropleth;
mod element;
mod null_renderer;
mod primitives;
mod radar;
mod scatter_geo;
mod table;

pub use chart::render_chart;
pub use element::VisualElement;
pub use null_renderer::NullRenderer;
pub use primitives::{
    BarPrimitive, MarkerPrimitive, RegionPrimitive, SpokePrimitive, TableGrid, TextPrimitive,
};

use crate::error::DashResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic [`VisualElement`],
/// so drawing code stays isolated from dataset and descriptor logic.
pub trait Renderer {
    fn render(&mut self, element: &VisualElement) -> DashResult<()>;
}

/// Largest value of a bar/radar column, used as the 1.0 mark for extents.
///
/// Columns without a positive maximum (all zero or negative) collapse every
/// extent to zero rather than dividing by a non-positive number.
pub(crate) fn tallest_value(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

pub(crate) fn relative_extent(value: f64, tallest: f64) -> f64 {
    if tallest > 0.0 {
        (value / tallest).clamp(0.0, 1.0)
    } else {
        0.0
    }
}
