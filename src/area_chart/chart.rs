use charming::{
    Chart,
    component::{Axis, Grid},
    element::{
        AreaStyle, AxisLabel, AxisLine, AxisPointer, AxisPointerType, AxisTick, AxisType, Color,
        ColorStop, ItemStyle, LineStyle, LineStyleType, SplitLine, Tooltip, Trigger,
    },
    series::Line,
};
use maud::{Markup, PreEscaped, html};

use crate::area_chart::{ChartConfig, ChartHeight, GradientId, Record, TickFormatter};

const DEFAULT_AXIS_KEY: &str = "name";
const DEFAULT_GRADIENT_FROM: &str = "rgba(59, 130, 246, 0.5)";
const DEFAULT_GRADIENT_TO: &str = "rgba(59, 130, 246, 0)";
const STROKE_WIDTH: u32 = 2;

/// A single series, filled area chart.
///
/// The chart plots `series_key` of every record against the category stored
/// under `axis_key`. Records missing either field are drawn as an empty
/// category with a value of zero.
#[derive(Debug, Clone)]
pub struct AreaChart<'a, R> {
    data: &'a [R],
    series_key: String,
    axis_key: String,
    config: ChartConfig,
    stroke_color: Option<String>,
    fill_color: Option<String>,
    gradient_from: String,
    gradient_to: String,
    show_grid: bool,
    x_axis_formatter: Option<TickFormatter>,
    y_axis_formatter: Option<TickFormatter>,
    tooltip_formatter: Option<TickFormatter>,
    height: ChartHeight,
}

impl<'a, R: Record> AreaChart<'a, R> {
    /// Create a chart of `series_key` over `data`, styled by `config`.
    pub fn new(data: &'a [R], series_key: &str, config: ChartConfig) -> Self {
        Self {
            data,
            series_key: series_key.to_owned(),
            axis_key: DEFAULT_AXIS_KEY.to_owned(),
            config,
            stroke_color: None,
            fill_color: None,
            gradient_from: DEFAULT_GRADIENT_FROM.to_owned(),
            gradient_to: DEFAULT_GRADIENT_TO.to_owned(),
            show_grid: true,
            x_axis_formatter: None,
            y_axis_formatter: None,
            tooltip_formatter: None,
            height: ChartHeight::default(),
        }
    }

    /// Set the record field used for the x-axis categories.
    pub fn axis_key(mut self, axis_key: &str) -> Self {
        self.axis_key = axis_key.to_owned();
        self
    }

    /// Override the line colour implied by the config.
    pub fn stroke_color(mut self, color: &str) -> Self {
        self.stroke_color = Some(color.to_owned());
        self
    }

    /// Fill the area with a flat colour instead of the gradient.
    pub fn fill_color(mut self, color: &str) -> Self {
        self.fill_color = Some(color.to_owned());
        self
    }

    /// Set the top and bottom colours of the fill gradient.
    pub fn gradient(mut self, from: &str, to: &str) -> Self {
        self.gradient_from = from.to_owned();
        self.gradient_to = to.to_owned();
        self
    }

    pub fn show_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    pub fn x_axis_formatter(mut self, formatter: TickFormatter) -> Self {
        self.x_axis_formatter = Some(formatter);
        self
    }

    pub fn y_axis_formatter(mut self, formatter: TickFormatter) -> Self {
        self.y_axis_formatter = Some(formatter);
        self
    }

    pub fn tooltip_formatter(mut self, formatter: TickFormatter) -> Self {
        self.tooltip_formatter = Some(formatter);
        self
    }

    pub fn height(mut self, height: ChartHeight) -> Self {
        self.height = height;
        self
    }

    /// The colour of the line: the explicit override, then the config entry
    /// for the series, then the series' CSS variable.
    fn resolved_stroke_color(&self) -> String {
        self.stroke_color
            .clone()
            .or_else(|| {
                self.config
                    .get(&self.series_key)
                    .map(|style| style.color.clone())
            })
            .unwrap_or_else(|| format!("var(--color-{})", self.series_key))
    }

    fn series_label(&self) -> String {
        self.config
            .get(&self.series_key)
            .map(|style| style.label.clone())
            .unwrap_or_else(|| self.series_key.clone())
    }

    fn area_fill(&self) -> Color {
        match &self.fill_color {
            Some(color) => Color::from(color.as_str()),
            None => Color::LinearGradient {
                x: 0.,
                y: 0.,
                x2: 0.,
                y2: 1.,
                color_stops: vec![
                    ColorStop::new(0.05, self.gradient_from.as_str()),
                    ColorStop::new(0.95, self.gradient_to.as_str()),
                ],
            },
        }
    }

    /// Build the ECharts option for the chart.
    ///
    /// Components are added in drawing order: grid, x-axis, y-axis, tooltip
    /// and finally the area series.
    pub fn options(&self) -> Chart {
        let labels: Vec<String> = self
            .data
            .iter()
            .map(|record| record.category(&self.axis_key).unwrap_or_default())
            .collect();
        let values: Vec<f64> = self
            .data
            .iter()
            .map(|record| record.measure(&self.series_key).unwrap_or(0.0))
            .collect();
        let stroke_color = self.resolved_stroke_color();

        let mut x_axis_label = AxisLabel::new();
        if let Some(formatter) = self.x_axis_formatter {
            x_axis_label = x_axis_label.formatter(formatter.to_js());
        }

        let mut y_axis_label = AxisLabel::new();
        if let Some(formatter) = self.y_axis_formatter {
            y_axis_label = y_axis_label.formatter(formatter.to_js());
        }

        let mut tooltip = Tooltip::new()
            .trigger(Trigger::Axis)
            .axis_pointer(AxisPointer::new().type_(AxisPointerType::None));
        if let Some(formatter) = self.tooltip_formatter {
            tooltip = tooltip.value_formatter(formatter.to_js());
        }

        Chart::new()
            .grid(
                Grid::new()
                    .top(10)
                    .right(30)
                    .left(0)
                    .bottom(5)
                    .contain_label(true),
            )
            .x_axis(
                Axis::new()
                    .type_(AxisType::Category)
                    .data(labels)
                    .axis_tick(AxisTick::new().show(false))
                    .axis_line(AxisLine::new().show(false))
                    .split_line(SplitLine::new().show(false))
                    .axis_label(x_axis_label),
            )
            .y_axis(
                Axis::new()
                    .type_(AxisType::Value)
                    .axis_tick(AxisTick::new().show(false))
                    .axis_line(AxisLine::new().show(false))
                    .split_line(
                        SplitLine::new()
                            .show(self.show_grid)
                            .line_style(LineStyle::new().type_(LineStyleType::Dashed)),
                    )
                    .axis_label(y_axis_label),
            )
            .tooltip(tooltip)
            .series(
                Line::new()
                    .name(self.series_label())
                    .smooth(true)
                    .show_symbol(false)
                    .line_style(
                        LineStyle::new()
                            .width(STROKE_WIDTH)
                            .color(stroke_color.as_str()),
                    )
                    .item_style(ItemStyle::new().color(stroke_color.as_str()))
                    .area_style(AreaStyle::new().opacity(1).color(self.area_fill()))
                    .data(values),
            )
    }

    /// Render the chart container and the script that draws the chart into it.
    ///
    /// The same `gradient_id` must be passed on every render of a chart
    /// instance, and different instances on a page must use different ids.
    pub fn render(&self, gradient_id: &GradientId) -> Markup {
        let element_id = gradient_id.element_id();
        let style = format!("width: 100%; height: {};", self.height.css());
        let options = escape_script_text(&self.options().to_string());
        let script = init_script(&element_id, &options);

        html!(
            div class="w-full h-full"
            {
                div id=(element_id) class="w-full" style=(style) {}

                script { (PreEscaped(script)) }
            }
        )
    }
}

/// Stop record labels from closing the script element or opening an HTML
/// comment inside it. Both sequences only occur inside string literals in
/// the option, where `\/` and `\!` read back as `/` and `!`.
fn escape_script_text(text: &str) -> String {
    text.replace("</", "<\\/").replace("<!--", "<\\!--")
}

/// JavaScript that draws `options` into the element `element_id`.
///
/// The script runs immediately when the page has already loaded so that
/// charts swapped in by htmx are drawn too. When htmx cleans up the
/// container the chart, its resize observer and its theme listener are
/// released.
fn init_script(element_id: &str, options: &str) -> String {
    format!(
        r#"(function() {{
            const draw = function() {{
                const chartDom = document.getElementById("{element_id}");
                if (!chartDom) {{
                    return;
                }}

                const existing = echarts.getInstanceByDom(chartDom);
                if (existing) {{
                    existing.dispose();
                }}

                const chart = echarts.init(chartDom);
                const option = {options};
                chart.setOption(option);

                const resizeObserver = new ResizeObserver(function() {{ chart.resize(); }});
                resizeObserver.observe(chartDom);

                const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                const updateTheme = () => {{
                    const isDarkMode = darkModeMediaQuery.matches;
                    chart.setTheme(isDarkMode ? 'dark' : 'default');
                }}
                darkModeMediaQuery.addEventListener('change', updateTheme);
                updateTheme();

                const cleanUp = function(event) {{
                    if (event.target !== chartDom) {{
                        return;
                    }}

                    chartDom.removeEventListener('htmx:beforeCleanupElement', cleanUp);
                    darkModeMediaQuery.removeEventListener('change', updateTheme);
                    resizeObserver.disconnect();
                    chart.dispose();
                }};
                chartDom.addEventListener('htmx:beforeCleanupElement', cleanUp);
            }};

            if (document.readyState === 'loading') {{
                document.addEventListener('DOMContentLoaded', draw);
            }} else {{
                draw();
            }}
        }})();"#
    )
}
