//! The metric charts shown on the charts page.
//!
//! Each chart is registered under a URL slug so that the granularity switch can
//! request the same chart again with a different granularity.

use crate::{
    area_chart::ChartHeight,
    metric_chart::{ChartTheme, Granularity, MetricChartProps, SeriesKey},
};

/// A chart and the slug it is served under.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub slug: &'static str,
    pub props: MetricChartProps,
}

/// A group of charts displayed together on the charts page.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSection {
    pub title: &'static str,
    /// The Tailwind grid classes for laying out the section's charts.
    pub grid_style: &'static str,
    pub entries: Vec<CatalogEntry>,
}

/// All the charts the app can render.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartCatalog {
    sections: Vec<CatalogSection>,
}

impl ChartCatalog {
    pub fn new(sections: Vec<CatalogSection>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[CatalogSection] {
        &self.sections
    }

    /// Find the chart registered under `slug`.
    pub fn find(&self, slug: &str) -> Option<&CatalogEntry> {
        self.sections
            .iter()
            .flat_map(|section| section.entries.iter())
            .find(|entry| entry.slug == slug)
    }

    /// The GTM metric charts.
    pub fn gtm_metrics() -> Self {
        Self::new(vec![
            CatalogSection {
                title: "Overview",
                grid_style: "grid grid-cols-1 lg:grid-cols-2 gap-6",
                entries: vec![
                    entry(
                        "lead-generation",
                        MetricChartProps::new("Lead Generation")
                            .description("Monitor your lead generation performance over time")
                            .series_key(SeriesKey::Value)
                            .change(23.5)
                            .theme(palette(59, 130, 246, "#3b82f6")),
                    ),
                    entry(
                        "conversion-rate",
                        MetricChartProps::new("Conversion Rate")
                            .description("Track your lead-to-customer conversion rate")
                            .series_key(SeriesKey::Conversions)
                            .change(15.8)
                            .theme(palette(16, 185, 129, "#10b981")),
                    ),
                    entry(
                        "website-traffic",
                        MetricChartProps::new("Website Traffic")
                            .description("Monitor website visits from marketing campaigns")
                            .series_key(SeriesKey::Leads)
                            .granularity(Granularity::Weekly)
                            .change(-5.3)
                            .theme(palette(139, 92, 246, "#8b5cf6")),
                    ),
                    entry(
                        "revenue-trend",
                        MetricChartProps::new("Revenue Trend")
                            .description("Track revenue from GTM activities")
                            .series_key(SeriesKey::Value)
                            .granularity(Granularity::Daily)
                            .change(12.7)
                            .theme(palette(249, 115, 22, "#f97316")),
                    ),
                ],
            },
            CatalogSection {
                title: "Custom Configurations",
                grid_style: "grid grid-cols-1 gap-6",
                entries: vec![entry(
                    "campaign-performance",
                    MetricChartProps::new("Campaign Performance")
                        .description("Comprehensive view of all marketing campaign metrics")
                        .series_key(SeriesKey::Value)
                        .granularity(Granularity::Monthly)
                        .height(ChartHeight::Pixels(300))
                        .theme(palette(14, 165, 233, "#0ea5e9")),
                )],
            },
            CatalogSection {
                title: "At a Glance",
                grid_style: "grid grid-cols-1 md:grid-cols-3 gap-6",
                entries: vec![
                    small_weekly_entry(
                        "email-ctr",
                        "Email CTR",
                        SeriesKey::Conversions,
                        palette(236, 72, 153, "#ec4899"),
                    ),
                    small_weekly_entry(
                        "social-engagement",
                        "Social Engagement",
                        SeriesKey::Leads,
                        palette(234, 88, 12, "#ea580c"),
                    ),
                    small_weekly_entry(
                        "ad-impressions",
                        "Ad Impressions",
                        SeriesKey::Value,
                        palette(168, 85, 247, "#a855f7"),
                    ),
                ],
            },
        ])
    }
}

impl Default for ChartCatalog {
    fn default() -> Self {
        Self::gtm_metrics()
    }
}

fn entry(slug: &'static str, props: MetricChartProps) -> CatalogEntry {
    CatalogEntry { slug, props }
}

/// A compact chart fixed to weekly data.
fn small_weekly_entry(
    slug: &'static str,
    title: &str,
    series_key: SeriesKey,
    theme: ChartTheme,
) -> CatalogEntry {
    entry(
        slug,
        MetricChartProps::new(title)
            .series_key(series_key)
            .granularity(Granularity::Weekly)
            .show_granularity_selector(false)
            .height(ChartHeight::Pixels(180))
            .theme(theme),
    )
}

/// A gradient that fades from half to near zero opacity of `(r, g, b)`.
fn palette(r: u8, g: u8, b: u8, stroke_color: &str) -> ChartTheme {
    ChartTheme::new(
        &format!("rgba({r}, {g}, {b}, 0.5)"),
        &format!("rgba({r}, {g}, {b}, 0.05)"),
        stroke_color,
    )
}
