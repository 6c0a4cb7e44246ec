use crate::core::{Channel, ChartDescriptor, ChartKind, Dataset, LinearScale, Theme};
use crate::error::{ConfigurationError, DashResult};
use crate::render::{RegionPrimitive, VisualElement};

use super::chart::{channel_numbers, channel_strings};

pub(super) fn build(
    dataset: &Dataset,
    descriptor: &ChartDescriptor,
    theme: &Theme,
) -> DashResult<VisualElement> {
    let locations = channel_strings(dataset, descriptor, Channel::Location)?.ok_or_else(|| {
        ConfigurationError::MissingChannel {
            kind: descriptor.kind.to_string(),
            channel: Channel::Location.to_string(),
        }
    })?;
    let values = channel_numbers(dataset, descriptor, Channel::Value)?;
    let labels = channel_strings(dataset, descriptor, Channel::Label)?;

    // A single-value (or constant) column maps every region to full intensity.
    let scale = LinearScale::from_values(&values);

    let mut element = VisualElement::new(ChartKind::Choropleth, theme.background);
    for row in 0..dataset.row_count() {
        let intensity = match scale {
            Some(scale) => scale.normalize(values[row])?,
            None => 1.0,
        };
        let color = theme.background.mix(theme.accent, intensity);
        let mut region = RegionPrimitive::new(locations[row].clone(), intensity, color);
        if let Some(labels) = &labels {
            region = region.with_label(labels[row].clone());
        }
        element = element.with_region(region);
    }

    Ok(element)
}
