use dashboard_rs::core::{Channel, ChartDescriptor, ChartKind, Dataset, Theme};
use dashboard_rs::page::{layout_page, PageBlock, PageConfig, SectionText};
use dashboard_rs::render::render_chart;
use proptest::prelude::*;

fn bar_dataset(values: &[f64]) -> Dataset {
    let categories: Vec<String> = (0..values.len()).map(|i| format!("row-{i}")).collect();
    Dataset::builder("generated")
        .column("category", categories)
        .column("value", values.to_vec())
        .build()
        .expect("valid generated dataset")
}

proptest! {
    #[test]
    fn bar_extents_stay_normalized(
        values in proptest::collection::vec(0.0f64..1.0e9, 1..8)
    ) {
        let descriptor = ChartDescriptor::new(ChartKind::Bar)
            .with_channel(Channel::Category, "category")
            .with_channel(Channel::Value, "value");

        let element = render_chart(&bar_dataset(&values), &descriptor, &Theme::dark())
            .expect("render");

        prop_assert_eq!(element.bars.len(), values.len());
        for bar in &element.bars {
            prop_assert!((0.0..=1.0).contains(&bar.extent));
        }
    }

    #[test]
    fn render_chart_is_deterministic_for_generated_tables(
        values in proptest::collection::vec(0.0f64..1.0e9, 1..8)
    ) {
        let dataset = bar_dataset(&values);
        let descriptor = ChartDescriptor::new(ChartKind::Radar)
            .with_channel(Channel::Category, "category")
            .with_channel(Channel::Value, "value");

        let first = render_chart(&dataset, &descriptor, &Theme::dark()).expect("first");
        let second = render_chart(&dataset, &descriptor, &Theme::dark()).expect("second");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn choropleth_intensities_stay_normalized(
        values in proptest::collection::vec(0.0f64..1.0e9, 1..8)
    ) {
        let locations: Vec<String> = (0..values.len()).map(|i| format!("LOC{i}")).collect();
        let dataset = Dataset::builder("generated")
            .column("location", locations)
            .column("value", values.clone())
            .build()
            .expect("valid generated dataset");
        let descriptor = ChartDescriptor::new(ChartKind::Choropleth)
            .with_channel(Channel::Location, "location")
            .with_channel(Channel::Value, "value");

        let element = render_chart(&dataset, &descriptor, &Theme::dark()).expect("render");
        for region in &element.regions {
            prop_assert!((0.0..=1.0).contains(&region.intensity));
        }
    }

    #[test]
    fn layout_page_preserves_arbitrary_interleavings(
        pattern in proptest::collection::vec(any::<bool>(), 0..12)
    ) {
        let theme = Theme::dark();
        let dataset = bar_dataset(&[9000.0, 500.0]);
        let descriptor = ChartDescriptor::new(ChartKind::Table);
        let chart = render_chart(&dataset, &descriptor, &theme).expect("render");

        let blocks: Vec<PageBlock> = pattern
            .iter()
            .enumerate()
            .map(|(i, is_text)| {
                if *is_text {
                    PageBlock::Section(SectionText::new(format!("section {i}")))
                } else {
                    PageBlock::Chart(chart.clone())
                }
            })
            .collect();

        let page = layout_page(PageConfig::new("generated", theme), blocks.clone());
        prop_assert_eq!(page.blocks, blocks);
    }
}
