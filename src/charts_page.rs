//! The charts page and the partial responses used by the granularity switch.

use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRef, Path, Query, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HxRequest;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error,
    area_chart::ECHARTS_SCRIPT,
    catalog::{CatalogEntry, CatalogSection, ChartCatalog},
    endpoints::{self, format_endpoint},
    html::{HeadElement, PAGE_CONTAINER_STYLE, base},
    metric_chart::{DataPoint, Granularity, MetricChart, dataset},
    navigation::{NavBar, page_header},
};

/// The state needed for displaying metric charts.
#[derive(Debug, Clone)]
pub struct ChartsState {
    pub catalog: Arc<ChartCatalog>,
}

impl FromRef<AppState> for ChartsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            catalog: state.catalog.clone(),
        }
    }
}

/// The query string sent by the granularity switch.
#[derive(Debug, Default, Deserialize)]
pub struct GranularityQuery {
    pub granularity: Option<Granularity>,
}

/// Display every chart in the catalog.
pub async fn get_charts_page(State(state): State<ChartsState>) -> Response {
    let content = html!(
        (NavBar::new(endpoints::CHARTS_VIEW).into_html())
        (page_header(endpoints::CHARTS_VIEW))

        div class=(PAGE_CONTAINER_STYLE)
        {
            @for section in state.catalog.sections() {
                (section_view(section))
            }
        }
    );

    base("Charts", &chart_head_elements(), &content).into_response()
}

/// Render a single chart, optionally at another granularity.
///
/// htmx requests get just the chart card so that it can replace the card
/// that sent the request. Other requests get a full page with the chart.
pub async fn get_chart(
    State(state): State<ChartsState>,
    Path(chart_id): Path<String>,
    Query(query): Query<GranularityQuery>,
    HxRequest(is_htmx): HxRequest,
) -> Response {
    let Some(entry) = state.catalog.find(&chart_id) else {
        tracing::debug!("Requested unknown chart \"{chart_id}\"");
        let error = Error::UnknownChart(chart_id);

        return if is_htmx {
            error.into_alert_response()
        } else {
            error.into_response()
        };
    };

    let mut chart = MetricChart::new(entry.props.clone());

    if let Some(granularity) = query.granularity {
        chart.select_granularity(granularity);
    }

    tracing::debug!(
        "Rendering chart \"{}\" with {} granularity",
        entry.slug,
        chart.granularity()
    );

    let card = chart_card(entry, &chart);

    if is_htmx {
        return card.into_response();
    }

    let content = html!(
        (NavBar::new(endpoints::CHARTS_VIEW).into_html())
        (page_header(endpoints::CHARTS_VIEW))

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="max-w-3xl" { (card) }
        }
    );

    base(&entry.props.title, &chart_head_elements(), &content).into_response()
}

/// The sample data points for `granularity` as JSON.
pub async fn get_metric_dataset(
    Path(granularity): Path<Granularity>,
) -> Json<&'static [DataPoint]> {
    Json(dataset(granularity))
}

fn chart_head_elements() -> [HeadElement; 1] {
    [HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned())]
}

fn section_view(section: &CatalogSection) -> Markup {
    html!(
        section class="mb-8"
        {
            h2 class="mb-4 text-xl font-semibold" { (section.title) }

            div class=(section.grid_style)
            {
                @for entry in &section.entries {
                    (chart_card(entry, &MetricChart::new(entry.props.clone())))
                }
            }
        }
    )
}

fn chart_card(entry: &CatalogEntry, chart: &MetricChart) -> Markup {
    chart.render(&format_endpoint(endpoints::CHART_VIEW, entry.slug))
}
