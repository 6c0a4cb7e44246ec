use crate::core::{ChartKind, Dataset, Theme};
use crate::error::DashResult;
use crate::render::{TableGrid, VisualElement};

/// Tables show every dataset column in declaration order; there is no
/// channel mapping to resolve.
pub(super) fn build(dataset: &Dataset, theme: &Theme) -> DashResult<VisualElement> {
    let header: Vec<String> = dataset.column_names().map(str::to_owned).collect();
    let rows = (0..dataset.row_count())
        .map(|row| {
            header
                .iter()
                .map(|name| {
                    dataset
                        .column(name)
                        .map(|column| column.values()[row].to_string())
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect();

    let grid = TableGrid {
        header,
        rows,
        header_fill: theme.accent,
        cell_fill: theme.background,
        text_color: theme.foreground,
    };

    Ok(VisualElement::new(ChartKind::Table, theme.background).with_table(grid))
}
