use crate::core::{Channel, ChartDescriptor, ChartKind, Dataset, LinearScale, Theme};
use crate::error::DashResult;
use crate::render::{MarkerPrimitive, VisualElement};

use super::chart::{channel_numbers, channel_strings};

/// Fixed divisor turning a raw size-channel count into a marker radius,
/// matching the semantics the source dashboards hardcode per dataset.
pub(super) const MARKER_SIZE_DIVISOR: f64 = 25.0;

/// Radius used when no size channel is mapped.
const DEFAULT_MARKER_RADIUS_PX: f64 = 12.0;

pub(super) fn build(
    dataset: &Dataset,
    descriptor: &ChartDescriptor,
    theme: &Theme,
) -> DashResult<VisualElement> {
    let lats = channel_numbers(dataset, descriptor, Channel::Latitude)?;
    let lons = channel_numbers(dataset, descriptor, Channel::Longitude)?;
    let sizes = if descriptor.channel(Channel::Size).is_some() {
        Some(channel_numbers(dataset, descriptor, Channel::Size)?)
    } else {
        None
    };
    let ramp = color_ramp(dataset, descriptor)?;
    let labels = channel_strings(dataset, descriptor, Channel::Label)?;

    let mut element = VisualElement::new(ChartKind::ScatterGeo, theme.background);
    for row in 0..dataset.row_count() {
        let radius_px = sizes
            .as_ref()
            .map_or(DEFAULT_MARKER_RADIUS_PX, |sizes| {
                sizes[row] / MARKER_SIZE_DIVISOR
            });
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

pub(super) type Ramp = (super::chart::NumericRows, LinearScale);

/// Optional color channel: normalize its column so each marker picks a spot
/// on the background-to-accent ramp. A constant column has no ramp.
pub(super) fn color_ramp(dataset: &Dataset, descriptor: &ChartDescriptor) -> DashResult<Option<Ramp>> {
    if descriptor.channel(Channel::Color).is_none() {
        return Ok(None);
    }
    let values = channel_numbers(dataset, descriptor, Channel::Color)?;
    Ok(LinearScale::from_values(&values).map(|scale| (values, scale)))
}
