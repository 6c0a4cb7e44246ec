//! Headless assembly of the global-impact dashboard page.
//!
//! Builds the literal datasets, renders the page with the dark theme, and
//! prints the v1 JSON contract so a charting host can pick the scene up.

use dashboard_rs::core::{Channel, ChartDescriptor, ChartKind, Dataset, Theme};
use dashboard_rs::page::{PageConfig, SectionText};
use dashboard_rs::{DashResult, DashboardEngine};

fn main() -> DashResult<()> {
    let _ = dashboard_rs::telemetry::init_default_tracing();

    let kit_map = Dataset::builder("kit_distribution")
        .column("lat", [37.0902, -1.2921, 6.5244, -12.0464, 28.6139])
        .column("lon", [-95.7129, 36.8219, 3.3792, -77.0428, 77.2090])
        .column("region", ["USA", "Kenya", "Nigeria", "Peru", "India"])
        .column("kits_distributed", [9000i64, 500, 250, 450, 1300])
        .column(
            "undiagnosed_cases",
            [120_000i64, 98_000, 1_050_000, 300_000, 1_400_000],
        )
        .build()?;

    let access_table = Dataset::builder("access_levels")
        .column("Country", ["USA", "India", "Nigeria", "Peru", "Kenya"])
        .column("Kits Distributed", [9000i64, 1300, 250, 450, 500])
        .column(
            "Estimated Undiagnosed",
            [120_000i64, 1_400_000, 1_050_000, 300_000, 98_000],
        )
        .column("Access Level", ["High", "Medium", "Low", "Low", "Low"])
        .build()?;

    let inequity = Dataset::builder("diagnostic_inequity")
        .column(
            "Country",
            ["USA", "UK", "India", "Nigeria", "Peru", "Ecuador", "South Korea"],
        )
        .column("ISO", ["USA", "GBR", "IND", "NGA", "PER", "ECU", "KOR"])
        .column(
            "Undiagnosed",
            [70_000i64, 45_000, 1_400_000, 1_050_000, 300_000, 250_000, 12_000],
        )
        .build()?;

    let mut engine = DashboardEngine::new(PageConfig::new(
        "Global Equity & Accessibility Map",
        Theme::dark(),
    ));

    engine.push_section(
        SectionText::new("The future of neurological care, made accessible everywhere.")
            .with_heading("Kits Distributed & Diagnostic Inequity"),
    );
    engine.push_chart(
        kit_map.clone(),
        ChartDescriptor::new(ChartKind::ScatterGeo)
            .with_title("Kits Distributed & Diagnostic Inequity")
            .with_channel(Channel::Latitude, "lat")
            .with_channel(Channel::Longitude, "lon")
            .with_channel(Channel::Size, "kits_distributed")
            .with_channel(Channel::Label, "region"),
    );

    engine.push_section(SectionText::new(
        "Comparative impact and accessibility per country.",
    ));
    engine.push_chart(
        access_table,
        ChartDescriptor::new(ChartKind::Table).with_title("Global Inequity Pyramid (2025)"),
    );

    engine.push_section(SectionText::new(
        "Estimated undiagnosed cases across surveyed countries.",
    ));
    engine.push_chart(
        inequity,
        ChartDescriptor::new(ChartKind::Choropleth)
            .with_title("Diagnostic Inequity Heatmap")
            .with_channel(Channel::Location, "ISO")
            .with_channel(Channel::Value, "Undiagnosed")
            .with_channel(Channel::Label, "Country"),
    );

    engine.push_section(SectionText::new(
        "Kits distributed per region, relative to the largest program.",
    ));
    engine.push_chart(
        kit_map,
        ChartDescriptor::new(ChartKind::Bar)
            .with_title("Kit Distribution by Region")
            .with_channel(Channel::Category, "region")
            .with_channel(Channel::Value, "kits_distributed"),
    );

    engine.push_section(SectionText::new(
        "Sources: CDC (2023), WHO (2022), UNICEF (2024).",
    ));

    let page = engine.render_page()?;
    println!("{}", page.to_json_contract_v1_pretty()?);
    Ok(())
}
