use crate::core::{Channel, ChartDescriptor, ChartKind, Dataset, Theme};
use crate::error::{ConfigurationError, DashResult};
use crate::render::{BarPrimitive, VisualElement};

use super::chart::{channel_numbers, channel_strings};

pub(super) fn build(
    dataset: &Dataset,
    descriptor: &ChartDescriptor,
    theme: &Theme,
) -> DashResult<VisualElement> {
    let categories = channel_strings(dataset, descriptor, Channel::Category)?.ok_or_else(|| {
        ConfigurationError::MissingChannel {
            kind: descriptor.kind.to_string(),
            channel: Channel::Category.to_string(),
        }
    })?;
    let values = channel_numbers(dataset, descriptor, Channel::Value)?;
    let tallest = super::tallest_value(&values);

    let mut element = VisualElement::new(ChartKind::Bar, theme.background);
    for row in 0..dataset.row_count() {
        let extent = super::relative_extent(values[row], tallest);
        element = element.with_bar(BarPrimitive::new(
            categories[row].clone(),
            values[row],
            extent,
            theme.accent,
        ));
    }

    Ok(element)
}
