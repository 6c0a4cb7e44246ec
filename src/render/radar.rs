use crate::core::{Channel, ChartDescriptor, ChartKind, Dataset, Theme};
use crate::error::{ConfigurationError, DashResult};
use crate::render::{SpokePrimitive, VisualElement};

use super::chart::{channel_numbers, channel_strings};

pub(super) fn build(
    dataset: &Dataset,
    descriptor: &ChartDescriptor,
    theme: &Theme,
) -> DashResult<VisualElement> {
    let axes = channel_strings(dataset, descriptor, Channel::Category)?.ok_or_else(|| {
        ConfigurationError::MissingChannel {
            kind: descriptor.kind.to_string(),
            channel: Channel::Category.to_string(),
        }
    })?;
    let values = channel_numbers(dataset, descriptor, Channel::Value)?;
    let longest = super::tallest_value(&values);

    let mut element = VisualElement::new(ChartKind::Radar, theme.background);
    for row in 0..dataset.row_count() {
        let reach = super::relative_extent(values[row], longest);
        element = element.with_spoke(SpokePrimitive::new(
            axes[row].clone(),
            values[row],
            reach,
            theme.accent,
        ));
    }

    Ok(element)
}
