use approx::assert_relative_eq;
use dashboard_rs::core::{Channel, ChartDescriptor, ChartKind, Dataset, Theme};
use dashboard_rs::render::{render_chart, NullRenderer, Renderer};
use dashboard_rs::ConfigurationError;

fn kit_dataset() -> Dataset {
    Dataset::builder("kit_distribution")
        .column("lat", [37.0902, -1.2921, 6.5244])
        .column("lon", [-95.7129, 36.8219, 3.3792])
        .column("region", ["USA", "Kenya", "Nigeria"])
        .column("kits_distributed", [9000i64, 500, 250])
        .build()
        .expect("valid dataset")
}

#[test]
fn scatter_geo_marker_radius_is_proportional_to_size() {
    let dataset = Dataset::builder("kits")
        .column("lat", [37.0902])
        .column("lon", [-95.7129])
        .column("region", ["USA"])
        .column("kits", [9000i64])
        .build()
        .expect("valid dataset");
    let descriptor = ChartDescriptor::new(ChartKind::ScatterGeo)
        .with_channel(Channel::Latitude, "lat")
        .with_channel(Channel::Longitude, "lon")
        .with_channel(Channel::Size, "kits")
        .with_channel(Channel::Label, "region");

    let element = render_chart(&dataset, &descriptor, &Theme::dark()).expect("render");

    assert_eq!(element.kind, ChartKind::ScatterGeo);
    assert_eq!(element.markers.len(), 1);
    assert_relative_eq!(element.markers[0].radius_px, 360.0);
    assert_eq!(element.markers[0].label.as_deref(), Some("USA"));
    assert_eq!(element.background, Theme::dark().background);
}

#[test]
fn scatter_geo_without_size_uses_the_default_radius() {
    let descriptor = ChartDescriptor::new(ChartKind::ScatterGeo)
        .with_channel(Channel::Latitude, "lat")
        .with_channel(Channel::Longitude, "lon");

    let element = render_chart(&kit_dataset(), &descriptor, &Theme::dark()).expect("render");
    assert_eq!(element.markers.len(), 3);
    let radii: Vec<f64> = element.markers.iter().map(|m| m.radius_px).collect();
    assert!(radii.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn zero_size_rows_render_as_zero_radius_markers() {
    let dataset = Dataset::builder("kits")
        .column("lat", [37.0902, -1.2921])
        .column("lon", [-95.7129, 36.8219])
        .column("kits", [0i64, 500])
        .build()
        .expect("valid dataset");
    let descriptor = ChartDescriptor::new(ChartKind::ScatterGeo)
        .with_channel(Channel::Latitude, "lat")
        .with_channel(Channel::Longitude, "lon")
        .with_channel(Channel::Size, "kits");

    let element = render_chart(&dataset, &descriptor, &Theme::dark()).expect("render");
    assert_eq!(element.markers.len(), 2);
    assert_relative_eq!(element.markers[0].radius_px, 0.0);
    assert_relative_eq!(element.markers[1].radius_px, 20.0);
}

#[test]
fn missing_column_produces_no_partial_visual() {
    let descriptor = ChartDescriptor::new(ChartKind::ScatterGeo)
        .with_channel(Channel::Latitude, "lat")
        .with_channel(Channel::Longitude, "lon")
        .with_channel(Channel::Size, "nonexistent");

    let err = render_chart(&kit_dataset(), &descriptor, &Theme::dark())
        .expect_err("missing column must fail");
    assert!(matches!(err, ConfigurationError::MissingColumn { .. }));
}

#[test]
fn render_chart_is_idempotent() {
    let descriptor = ChartDescriptor::new(ChartKind::ScatterGeo)
        .with_title("Kit map")
        .with_channel(Channel::Latitude, "lat")
        .with_channel(Channel::Longitude, "lon")
        .with_channel(Channel::Size, "kits_distributed");

    let first = render_chart(&kit_dataset(), &descriptor, &Theme::dark()).expect("first render");
    let second = render_chart(&kit_dataset(), &descriptor, &Theme::dark()).expect("second render");
    assert_eq!(first, second);
}

#[test]
fn bubble_radii_fit_the_size_column_into_a_fixed_range() {
    let descriptor = ChartDescriptor::new(ChartKind::Bubble)
        .with_channel(Channel::Latitude, "lat")
        .with_channel(Channel::Longitude, "lon")
        .with_channel(Channel::Size, "kits_distributed");

    let element = render_chart(&kit_dataset(), &descriptor, &Theme::dark()).expect("render");
    let radii: Vec<f64> = element.markers.iter().map(|m| m.radius_px).collect();

    // Rows are 9000, 500, 250: the largest hits the top of the range, the
    // smallest the bottom, everything in between stays inside it.
    assert_relative_eq!(radii[0], 42.0);
    assert_relative_eq!(radii[2], 6.0);
    assert!(radii[1] > 6.0 && radii[1] < 42.0);
}

#[test]
fn choropleth_intensity_spans_the_value_column() {
    let dataset = Dataset::builder("inequity")
        .column("ISO", ["USA", "IND", "KOR"])
        .column("Undiagnosed", [70_000i64, 1_400_000, 12_000])
        .build()
        .expect("valid dataset");
    let descriptor = ChartDescriptor::new(ChartKind::Choropleth)
        .with_channel(Channel::Location, "ISO")
        .with_channel(Channel::Value, "Undiagnosed");

    let element = render_chart(&dataset, &descriptor, &Theme::dark()).expect("render");
    assert_eq!(element.regions.len(), 3);
    assert_relative_eq!(element.regions[1].intensity, 1.0);
    assert_relative_eq!(element.regions[2].intensity, 0.0);
    assert!(element.regions[0].intensity > 0.0 && element.regions[0].intensity < 1.0);
    assert_eq!(element.regions[0].location, "USA");
}

#[test]
fn choropleth_with_a_single_row_maps_to_full_intensity() {
    let dataset = Dataset::builder("inequity")
        .column("ISO", ["USA"])
        .column("Undiagnosed", [70_000i64])
        .build()
        .expect("valid dataset");
    let descriptor = ChartDescriptor::new(ChartKind::Choropleth)
        .with_channel(Channel::Location, "ISO")
        .with_channel(Channel::Value, "Undiagnosed");

    let element = render_chart(&dataset, &descriptor, &Theme::dark()).expect("render");
    assert_relative_eq!(element.regions[0].intensity, 1.0);
}

#[test]
fn bar_extents_are_relative_to_the_tallest_bar() {
    let descriptor = ChartDescriptor::new(ChartKind::Bar)
        .with_channel(Channel::Category, "region")
        .with_channel(Channel::Value, "kits_distributed");

    let element = render_chart(&kit_dataset(), &descriptor, &Theme::dark()).expect("render");
    assert_eq!(element.bars.len(), 3);
    assert_relative_eq!(element.bars[0].extent, 1.0);
    assert_relative_eq!(element.bars[1].extent, 500.0 / 9000.0);
    assert_eq!(element.bars[0].label, "USA");
    assert_eq!(element.bars[0].value, 9000.0);
}

#[test]
fn radar_reaches_are_relative_to_the_longest_spoke() {
    let descriptor = ChartDescriptor::new(ChartKind::Radar)
        .with_channel(Channel::Category, "region")
        .with_channel(Channel::Value, "kits_distributed");

    let element = render_chart(&kit_dataset(), &descriptor, &Theme::dark()).expect("render");
    assert_eq!(element.spokes.len(), 3);
    assert_relative_eq!(element.spokes[0].reach, 1.0);
    assert!(element.spokes.iter().all(|s| (0.0..=1.0).contains(&s.reach)));
}

#[test]
fn table_shows_every_column_in_declaration_order() {
    let element = render_chart(
        &kit_dataset(),
        &ChartDescriptor::new(ChartKind::Table),
        &Theme::dark(),
    )
    .expect("render");

    let table = element.table.as_ref().expect("table grid");
    assert_eq!(
        table.header,
        vec!["lat", "lon", "region", "kits_distributed"]
    );
    assert_eq!(table.rows.len(), 3);
    assert_eq!(table.rows[0][2], "USA");
    assert_eq!(table.rows[0][3], "9000");
    assert_eq!(table.header_fill, Theme::dark().accent);
}

#[test]
fn titled_charts_carry_a_themed_text_primitive() {
    let theme = Theme::dark();
    let element = render_chart(
        &kit_dataset(),
        &ChartDescriptor::new(ChartKind::Table).with_title("Global Inequity Pyramid"),
        &theme,
    )
    .expect("render");

    assert_eq!(element.title.as_deref(), Some("Global Inequity Pyramid"));
    assert_eq!(element.texts.len(), 1);
    assert_eq!(element.texts[0].color, theme.foreground);
}

#[test]
fn invalid_theme_fails_before_rendering() {
    let mut theme = Theme::dark();
    theme.font_size_px = 0.0;

    let err = render_chart(&kit_dataset(), &ChartDescriptor::new(ChartKind::Table), &theme)
        .expect_err("invalid theme");
    assert!(matches!(err, ConfigurationError::InvalidTheme(_)));
}

#[test]
fn null_renderer_counts_primitives() {
    let descriptor = ChartDescriptor::new(ChartKind::ScatterGeo)
        .with_channel(Channel::Latitude, "lat")
        .with_channel(Channel::Longitude, "lon");
    let element = render_chart(&kit_dataset(), &descriptor, &Theme::dark()).expect("render");

    let mut renderer = NullRenderer::default();
    renderer.render(&element).expect("null render");
    assert_eq!(renderer.last_marker_count, 3);
    assert_eq!(renderer.last_region_count, 0);
}
