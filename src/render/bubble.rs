use crate::core::{Channel, ChartDescriptor, ChartKind, Dataset, LinearScale, Theme};
use crate::error::DashResult;
use crate::render::{MarkerPrimitive, VisualElement};

use super::chart::{channel_numbers, channel_strings};
use super::scatter_geo::color_ramp;

/// Radius range the size column is fit into.
const MIN_RADIUS_PX: f64 = 6.0;
const MAX_RADIUS_PX: f64 = 42.0;

pub(super) fn build(
    dataset: &Dataset,
    descriptor: &ChartDescriptor,
    theme: &Theme,
) -> DashResult<VisualElement> {
    let lats = channel_numbers(dataset, descriptor, Channel::Latitude)?;
    let lons = channel_numbers(dataset, descriptor, Channel::Longitude)?;
    let sizes = channel_numbers(dataset, descriptor, Channel::Size)?;
    let ramp = color_ramp(dataset, descriptor)?;
    let labels = channel_strings(dataset, descriptor, Channel::Label)?;

    // A constant size column cannot be fit; every bubble gets the mid radius.
    let size_scale = LinearScale::from_values(&sizes);

    let mut element = VisualElement::new(ChartKind::Bubble, theme.background);
    for row in 0..dataset.row_count() {
        let radius_px = match size_scale {
            Some(scale) => scale.map_to(sizes[row], (MIN_RADIUS_PX, MAX_RADIUS_PX))?,
            None => (MIN_RADIUS_PX + MAX_RADIUS_PX) / 2.0,
        };
        let color = match &ramp {
            Some((values, scale)) => {
                let t = scale.normalize(values[row])?;
                theme.background.mix(theme.accent, 0.25 + 0.75 * t)
            }
            None => theme.accent,
        };
        let mut marker = MarkerPrimitive::new(lats[row], lons[row], radius_px, color);
        if let Some(labels) = &labels {
            marker = marker.with_label(labels[row].clone());
        }
        element = element.with_marker(marker);
    }

    Ok(element)
}
