use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{Channel, ChartDescriptor, ChartKind, Dataset, Theme};
use crate::error::{ConfigurationError, DashResult};
use crate::render::{TextPrimitive, VisualElement};

use super::{bar, bubble, choropleth, radar, scatter_geo, table};

/// Row buffer sized for the literal tables this crate is built around.
pub(super) type NumericRows = SmallVec<[f64; 8]>;

/// Renders one chart: validate the configuration triple, then dispatch on
/// the descriptor kind.
///
/// Pure and synchronous. Identical inputs produce identical elements, and a
/// validation failure produces no partial visual.
pub fn render_chart(
    dataset: &Dataset,
    descriptor: &ChartDescriptor,
    theme: &Theme,
) -> DashResult<VisualElement> {
    theme.validate()?;
    descriptor.validate_against(dataset)?;

    debug!(
        kind = %descriptor.kind,
        dataset = dataset.name(),
        rows = dataset.row_count(),
        "rendering chart"
    );

    let mut element = match descriptor.kind {
        ChartKind::ScatterGeo => scatter_geo::build(dataset, descriptor, theme)?,
        ChartKind::Bubble => bubble::build(dataset, descriptor, theme)?,
        ChartKind::Choropleth => choropleth::build(dataset, descriptor, theme)?,
        ChartKind::Radar => radar::build(dataset, descriptor, theme)?,
        ChartKind::Bar => bar::build(dataset, descriptor, theme)?,
        ChartKind::Table => table::build(dataset, theme)?,
    };

    if let Some(title) = &descriptor.title {
        element = element.with_title(title.clone()).with_text(TextPrimitive::new(
            title.clone(),
            theme.font_size_px + 4.0,
            theme.foreground,
        ));
    }

    element.validate()?;
    trace!(
        markers = element.markers.len(),
        regions = element.regions.len(),
        bars = element.bars.len(),
        spokes = element.spokes.len(),
        "chart scene complete"
    );
    Ok(element)
}

/// Numeric cells of the column mapped onto `channel`.
///
/// Callers run after `validate_against`, so failures here indicate a
/// descriptor/dataset pair that was never validated together.
pub(super) fn channel_numbers(
    dataset: &Dataset,
    descriptor: &ChartDescriptor,
    channel: Channel,
) -> DashResult<NumericRows> {
    let column_name = descriptor
        .channel(channel)
        .ok_or_else(|| ConfigurationError::MissingChannel {
            kind: descriptor.kind.to_string(),
            channel: channel.to_string(),
        })?;
    let column = dataset
        .column(column_name)
        .ok_or_else(|| ConfigurationError::MissingColumn {
            kind: descriptor.kind.to_string(),
            column: column_name.to_owned(),
            dataset: dataset.name().to_owned(),
        })?;

    column
        .values()
        .iter()
        .map(|value| {
            value
                .as_f64()
                .ok_or_else(|| ConfigurationError::ColumnTypeMismatch {
                    kind: descriptor.kind.to_string(),
                    channel: channel.to_string(),
                    column: column_name.to_owned(),
                    actual: value.kind().as_str().to_owned(),
                })
        })
        .collect()
}

/// Display strings of the column mapped onto `channel`, or `None` when the
/// channel is not mapped at all.
pub(super) fn channel_strings(
    dataset: &Dataset,
    descriptor: &ChartDescriptor,
    channel: Channel,
) -> DashResult<Option<Vec<String>>> {
    let Some(column_name) = descriptor.channel(channel) else {
        return Ok(None);
    };
    let column = dataset
        .column(column_name)
        .ok_or_else(|| ConfigurationError::MissingColumn {
            kind: descriptor.kind.to_string(),
            column: column_name.to_owned(),
            dataset: dataset.name().to_owned(),
        })?;
    Ok(Some(
        column.values().iter().map(ToString::to_string).collect(),
    ))
}
