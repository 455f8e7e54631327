use maud::{DOCTYPE, Markup, html};

use crate::endpoints;

// Card styles
pub const CARD_STYLE: &str = "glass-card rounded-lg border border-gray-200 \
    bg-white/80 text-gray-900 shadow-sm backdrop-blur dark:border-gray-700 \
    dark:bg-gray-800/80 dark:text-white";

// Granularity switch styles
pub const CHIP_STYLE: &str = "h-7 px-3 rounded-md text-xs font-medium \
    text-gray-600 hover:bg-gray-100 hover:text-gray-900 dark:text-gray-300 \
    dark:hover:bg-gray-700 dark:hover:text-white";

pub const CHIP_ACTIVE_STYLE: &str = "h-7 px-3 rounded-md text-xs font-medium \
    bg-gray-100 text-gray-900 shadow-xs dark:bg-gray-700 dark:text-white";

pub const BUTTON_STYLE: &str = "inline-flex my-4 px-5 py-2.5 rounded text-sm font-medium \
    text-white bg-blue-600 hover:bg-blue-800 focus:ring-4 focus:outline-hidden \
    focus:ring-blue-300 dark:focus:ring-blue-900";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col px-6 py-8 mx-auto max-w-screen-xl lg:py-5 text-gray-900 dark:text-white";

pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
}

pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Pipeline" }

                script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                script src="https://cdn.jsdelivr.net/npm/htmx.org@2.0.8/dist/htmx.min.js" {}
                script src="https://cdn.jsdelivr.net/npm/htmx-ext-response-targets@2.0.4" {}

                style
                {
                    r#"
                    #indicator.htmx-indicator {
                        display: none;
                    }

                    #indicator.htmx-request .htmx-indicator {
                        display: inline;
                    }

                    #indicator.htmx-request.htmx-indicator {
                        display: inline;
                    }

                    /* Keep chart tooltips below the alert container, but above page content. */
                    .echarts-tooltip {
                        z-index: 30 !important;
                    }
                    "#
                }

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptLink(path) => script src=(path) {}
                    }
                }
            }

            body
                hx-ext="response-targets"
                class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)

                // Alert container for out-of-band swaps
                div
                    id="alert-container"
                    class="hidden w-full max-w-md px-4"
                    style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                {}
            }
        }
    }
}

/// A full page explaining an error, with a link back to the charts.
pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Layout adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="py-8 px-4 mx-auto max-w-screen-sm text-center lg:py-16"
        {
            h1 class="mb-4 text-7xl lg:text-9xl font-extrabold tracking-tight text-blue-600 dark:text-blue-500"
            {
                (header)
            }

            p class="mb-4 text-3xl md:text-4xl font-bold tracking-tight text-gray-900 dark:text-white"
            {
                (description)
            }

            p class="mb-4 text-xl md:text-2xl text-gray-700 dark:text-gray-300"
            {
                (fix)
            }

            a href=(endpoints::CHARTS_VIEW) class=(BUTTON_STYLE) { "Back to Charts" }
        }
    );

    base(title, &[], &content)
}

#[cfg(test)]
mod tests {
    use maud::html;
    use scraper::{Html, Selector};

    use super::{HeadElement, base};

    #[test]
    fn base_adds_page_scripts_and_alert_container() {
        let page = base(
            "Charts",
            &[HeadElement::ScriptLink("/static/chart.js".to_owned())],
            &html!(p { "content" }),
        );

        let html = Html::parse_document(&page.into_string());

        assert!(html.errors.is_empty(), "{:?}", html.errors);
        assert_eq!(
            html.select(&Selector::parse("head script[src='/static/chart.js']").unwrap())
                .count(),
            1
        );
        assert_eq!(
            html.select(&Selector::parse("body > #alert-container").unwrap())
                .count(),
            1
        );
        let title: String = html
            .select(&Selector::parse("title").unwrap())
            .next()
            .unwrap()
            .text()
            .collect();
        assert_eq!(title, "Charts - Pipeline");
    }
}
