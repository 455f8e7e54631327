//! The metric chart card: owns the selected granularity and resolves it into
//! an [AreaChart].

use maud::{Markup, html};

use crate::{
    area_chart::{AreaChart, ChartConfig, ChartHeight, GradientId, TickFormatter},
    html::{CARD_STYLE, CHIP_ACTIVE_STYLE, CHIP_STYLE},
    metric_chart::{
        ChangeIndicator, DataPoint, Granularity, SeriesKey, Trend, dataset, derive_config,
    },
};

/// The colours used to draw a metric chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartTheme {
    /// The colour at the top of the fill gradient.
    pub gradient_from: String,
    /// The colour at the bottom of the fill gradient.
    pub gradient_to: String,
    /// The colour of the line.
    pub stroke_color: String,
}

impl ChartTheme {
    pub fn new(gradient_from: &str, gradient_to: &str, stroke_color: &str) -> Self {
        Self {
            gradient_from: gradient_from.to_owned(),
            gradient_to: gradient_to.to_owned(),
            stroke_color: stroke_color.to_owned(),
        }
    }
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self::new(
            "rgba(59, 130, 246, 0.5)",
            "rgba(59, 130, 246, 0)",
            "hsl(var(--chart-1))",
        )
    }
}

/// How a metric chart is configured when it is created.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricChartProps {
    pub title: String,
    pub description: Option<String>,
    pub series_key: SeriesKey,
    pub initial_granularity: Granularity,
    /// When false, the granularity is fixed at `initial_granularity` and the
    /// switch is not rendered.
    pub show_granularity_selector: bool,
    pub show_change_indicator: bool,
    pub change: ChangeIndicator,
    pub theme: ChartTheme,
    pub height: ChartHeight,
}

impl MetricChartProps {
    /// Props for a chart titled `title` with every other option at its default.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_owned(),
            description: None,
            series_key: SeriesKey::default(),
            initial_granularity: Granularity::default(),
            show_granularity_selector: true,
            show_change_indicator: true,
            change: ChangeIndicator::default(),
            theme: ChartTheme::default(),
            height: ChartHeight::Pixels(250),
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }

    pub fn series_key(mut self, series_key: SeriesKey) -> Self {
        self.series_key = series_key;
        self
    }

    pub fn granularity(mut self, granularity: Granularity) -> Self {
        self.initial_granularity = granularity;
        self
    }

    pub fn show_granularity_selector(mut self, show: bool) -> Self {
        self.show_granularity_selector = show;
        self
    }

    pub fn show_change_indicator(mut self, show: bool) -> Self {
        self.show_change_indicator = show;
        self
    }

    /// Set the signed percentage shown in the trend badge.
    pub fn change(mut self, percent: f64) -> Self {
        self.change = ChangeIndicator::new(percent);
        self
    }

    pub fn theme(mut self, theme: ChartTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn height(mut self, height: ChartHeight) -> Self {
        self.height = height;
        self
    }
}

/// Everything the renderer needs for the current granularity.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedChart {
    pub dataset: &'static [DataPoint],
    pub series_key: SeriesKey,
    pub axis_key: &'static str,
    pub config: ChartConfig,
}

/// One rendered metric chart.
///
/// The selected granularity is the only state. Everything else is derived
/// from it and the props each time the chart is resolved.
#[derive(Debug, Clone)]
pub struct MetricChart {
    props: MetricChartProps,
    granularity: Granularity,
    gradient_id: GradientId,
}

impl MetricChart {
    pub fn new(props: MetricChartProps) -> Self {
        Self {
            granularity: props.initial_granularity,
            props,
            gradient_id: GradientId::new(),
        }
    }

    /// The currently selected granularity.
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Switch to `granularity`.
    ///
    /// Ignored when the chart was created without a granularity selector.
    pub fn select_granularity(&mut self, granularity: Granularity) {
        if self.props.show_granularity_selector {
            self.granularity = granularity;
        } else {
            tracing::debug!(
                "ignoring granularity {granularity} for chart \"{}\" without a selector",
                self.props.title
            );
        }
    }

    /// Resolve the dataset, axis key and config for the current granularity.
    pub fn resolve(&self) -> ResolvedChart {
        ResolvedChart {
            dataset: dataset(self.granularity),
            series_key: self.props.series_key,
            axis_key: self.granularity.axis_key(),
            config: derive_config(self.props.series_key, &self.props.theme.stroke_color),
        }
    }

    /// Render the chart as a card.
    ///
    /// The granularity switch requests `endpoint` with the selected
    /// granularity in the query string and swaps the returned card in place
    /// of this one.
    pub fn render(&self, endpoint: &str) -> Markup {
        let resolved = self.resolve();
        let theme = &self.props.theme;
        let area_chart = AreaChart::new(
            resolved.dataset,
            resolved.series_key.as_str(),
            resolved.config,
        )
        .axis_key(resolved.axis_key)
        .height(self.props.height)
        .gradient(&theme.gradient_from, &theme.gradient_to)
        .stroke_color(&theme.stroke_color)
        .y_axis_formatter(TickFormatter::Plain);

        html!(
            article
                class=(CARD_STYLE)
                data-granularity=(self.granularity.as_str())
                data-series=(resolved.series_key.as_str())
            {
                div class="px-6 pt-6 pb-2"
                {
                    div class="flex justify-between items-center"
                    {
                        div
                        {
                            h3 class="text-lg font-semibold leading-none tracking-tight"
                            {
                                (self.props.title)
                            }

                            @if let Some(description) = &self.props.description {
                                p class="mt-1.5 text-sm text-gray-500 dark:text-gray-400"
                                {
                                    (description)
                                }
                            }
                        }

                        @if self.props.show_change_indicator {
                            (change_badge(self.props.change))
                        }
                    }

                    @if self.props.show_granularity_selector {
                        (granularity_selector(self.granularity, endpoint))
                    }
                }

                div class="px-6 pb-6"
                {
                    (area_chart.render(&self.gradient_id))

                    p class="mt-2 text-sm text-gray-500 dark:text-gray-400"
                    {
                        (self.granularity.caption())
                    }
                }
            }
        )
    }
}

fn change_badge(change: ChangeIndicator) -> Markup {
    let trend = change.trend();
    let style = match trend {
        Trend::Increase => {
            "flex items-center px-2 py-1 rounded-md text-sm font-medium \
            text-green-600 bg-green-50/60 dark:text-green-400 dark:bg-green-900/30"
        }
        Trend::Decrease => {
            "flex items-center px-2 py-1 rounded-md text-sm font-medium \
            text-red-600 bg-red-50/60 dark:text-red-400 dark:bg-red-900/30"
        }
    };

    html!(
        div class=(style) data-trend=(trend.as_str())
        {
            (trend_icon(trend))
            span { (change.to_string()) }
        }
    )
}

/// Trending up/down icons adapted from https://lucide.dev
fn trend_icon(trend: Trend) -> Markup {
    let (line, arrow) = match trend {
        Trend::Increase => ("22 7 13.5 15.5 8.5 10.5 2 17", "16 7 22 7 22 13"),
        Trend::Decrease => ("22 17 13.5 8.5 8.5 13.5 2 7", "16 17 22 17 22 11"),
    };

    html!(
        svg
            aria-hidden="true"
            class="w-4 h-4 mr-1"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            xmlns="http://www.w3.org/2000/svg"
        {
            polyline points=(line) {}
            polyline points=(arrow) {}
        }
    )
}

fn granularity_selector(selected: Granularity, endpoint: &str) -> Markup {
    html!(
        div class="flex mt-2 space-x-1" role="group" aria-label="Time range"
        {
            @for granularity in Granularity::ALL {
                @let is_selected = granularity == selected;

                button
                    type="button"
                    class=(if is_selected { CHIP_ACTIVE_STYLE } else { CHIP_STYLE })
                    aria-pressed=(if is_selected { "true" } else { "false" })
                    name="granularity"
                    value=(granularity.as_str())
                    hx-get=(format!("{endpoint}?granularity={granularity}"))
                    hx-target="closest article"
                    hx-target-error="#alert-container"
                    hx-swap="outerHTML"
                {
                    (granularity.label())
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use scraper::{ElementRef, Html, Selector};

    use crate::{
        area_chart::ChartHeight,
        metric_chart::{
            ChartTheme, Granularity, MetricChart, MetricChartProps, SeriesKey, dataset,
        },
    };

    const ENDPOINT: &str = "/charts/test-chart";

    fn render(chart: &MetricChart) -> Html {
        Html::parse_fragment(&chart.render(ENDPOINT).into_string())
    }

    fn select<'a>(html: &'a Html, selector: &str) -> Vec<ElementRef<'a>> {
        html.select(&Selector::parse(selector).unwrap()).collect()
    }

    #[track_caller]
    fn assert_text(element: &ElementRef<'_>, want: &str) {
        let text: String = element.text().collect();
        assert_eq!(text.trim(), want);
    }

    #[test]
    fn defaults() {
        let props = MetricChartProps::new("Lead Generation");

        assert_eq!(props.series_key, SeriesKey::Value);
        assert_eq!(props.initial_granularity, Granularity::Monthly);
        assert!(props.show_granularity_selector);
        assert!(props.show_change_indicator);
        assert_eq!(props.change.percent(), 18.2);
        assert_eq!(props.theme, ChartTheme::default());
        assert_eq!(props.height, ChartHeight::Pixels(250));
    }

    #[test]
    fn starts_at_initial_granularity() {
        let chart = MetricChart::new(MetricChartProps::new("Test").granularity(Granularity::Daily));

        assert_eq!(chart.granularity(), Granularity::Daily);
    }

    #[test]
    fn resolves_weekly_conversions() {
        let chart = MetricChart::new(
            MetricChartProps::new("Conversions")
                .series_key(SeriesKey::Conversions)
                .granularity(Granularity::Weekly),
        );

        let resolved = chart.resolve();

        assert_eq!(resolved.dataset.len(), 6);
        assert_eq!(resolved.dataset, dataset(Granularity::Weekly));
        assert_eq!(resolved.axis_key, "week");
        assert_eq!(resolved.config.len(), 1);
        assert_eq!(resolved.config["conversions"].label, "Conversions");
        assert_eq!(chart.granularity().caption(), "Last 6 weeks");
    }

    #[test]
    fn resolving_is_idempotent() {
        let chart = MetricChart::new(MetricChartProps::new("Test").series_key(SeriesKey::Leads));

        assert_eq!(chart.resolve(), chart.resolve());
    }

    #[test]
    fn selecting_granularity_resolves_new_dataset() {
        let mut chart = MetricChart::new(MetricChartProps::new("Test"));

        for granularity in Granularity::ALL {
            chart.select_granularity(granularity);

            let resolved = chart.resolve();
            assert_eq!(chart.granularity(), granularity);
            assert_eq!(resolved.axis_key, granularity.axis_key());
            assert!(std::ptr::eq(resolved.dataset, dataset(granularity)));
        }
    }

    #[test]
    fn switching_granularity_leaves_previous_data_unchanged() {
        let mut chart = MetricChart::new(MetricChartProps::new("Test"));
        let before = chart.resolve();
        let snapshot = before.dataset.to_vec();

        chart.select_granularity(Granularity::Daily);
        let after = chart.resolve();

        assert_eq!(before.dataset, snapshot.as_slice());
        assert_eq!(before.axis_key, "month");
        assert_eq!(after.axis_key, "day");
    }

    #[test]
    fn fixed_granularity_ignores_selection() {
        let mut chart = MetricChart::new(
            MetricChartProps::new("Email CTR")
                .granularity(Granularity::Weekly)
                .show_granularity_selector(false),
        );

        chart.select_granularity(Granularity::Daily);
        chart.select_granularity(Granularity::Monthly);

        assert_eq!(chart.granularity(), Granularity::Weekly);

        let html = render(&chart);
        assert!(select(&html, "button[name='granularity']").is_empty());
    }

    #[test]
    fn renders_title_description_and_caption() {
        let chart = MetricChart::new(
            MetricChartProps::new("Website Traffic")
                .description("Monitor website visits")
                .granularity(Granularity::Daily),
        );

        let html = render(&chart);

        assert_text(&select(&html, "h3")[0], "Website Traffic");
        let paragraphs = select(&html, "p");
        assert_text(&paragraphs[0], "Monitor website visits");
        assert_text(paragraphs.last().unwrap(), "Last 7 days");
    }

    #[test]
    fn omits_missing_description() {
        let chart = MetricChart::new(MetricChartProps::new("Ad Impressions"));

        let html = render(&chart);

        // Only the footer caption remains.
        assert_eq!(select(&html, "p").len(), 1);
    }

    #[test]
    fn negative_change_renders_decrease_badge() {
        let chart = MetricChart::new(MetricChartProps::new("Traffic").change(-5.3));

        let html = render(&chart);

        let badge = &select(&html, "[data-trend]")[0];
        assert_eq!(badge.value().attr("data-trend"), Some("decrease"));
        assert_text(badge, "5.3%");
    }

    #[test]
    fn positive_change_renders_increase_badge() {
        let chart = MetricChart::new(MetricChartProps::new("Leads").change(23.5));

        let html = render(&chart);

        let badge = &select(&html, "[data-trend]")[0];
        assert_eq!(badge.value().attr("data-trend"), Some("increase"));
        assert_text(badge, "23.5%");
    }

    #[test]
    fn change_indicator_can_be_hidden() {
        let chart = MetricChart::new(MetricChartProps::new("Leads").show_change_indicator(false));

        assert!(select(&render(&chart), "[data-trend]").is_empty());
    }

    #[test]
    fn selector_marks_current_granularity_and_targets_endpoint() {
        let chart = MetricChart::new(MetricChartProps::new("Leads").granularity(Granularity::Weekly));

        let html = render(&chart);
        let buttons = select(&html, "button[name='granularity']");

        assert_eq!(buttons.len(), 3);
        for (button, granularity) in buttons.iter().zip(Granularity::ALL) {
            assert_text(button, granularity.label());
            assert_eq!(
                button.value().attr("hx-get"),
                Some(format!("{ENDPOINT}?granularity={granularity}").as_str())
            );
            assert_eq!(
                button.value().attr("aria-pressed"),
                Some(if granularity == Granularity::Weekly { "true" } else { "false" })
            );
        }
    }

    #[test]
    fn re_rendering_an_instance_is_stable() {
        let chart = MetricChart::new(MetricChartProps::new("Leads"));

        assert_eq!(
            chart.render(ENDPOINT).into_string(),
            chart.render(ENDPOINT).into_string()
        );
    }
}
