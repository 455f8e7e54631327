//! This file defines the navigation bar and the page header shown above every page.

use maud::{Markup, html};

use crate::endpoints::{self, format_endpoint};

/// Template for a link in the navigation bar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
struct Link<'a> {
    url: String,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "block py-2 px-3 text-white bg-blue-700 rounded-sm lg:bg-transparent
        lg:text-blue-700 lg:p-0 dark:text-white lg:dark:text-blue-500"
        } else {
            "block py-2 px-3 text-gray-900 rounded-sm hover:bg-gray-100
        lg:hover:bg-transparent lg:border-0 lg:hover:text-blue-700 lg:p-0
        dark:text-white lg:dark:hover:text-blue-500 dark:hover:bg-gray-700
        dark:hover:text-white lg:dark:hover:bg-transparent"
        };

        html!(
            a
                href=(self.url)
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                (self.title)
            }
        )
    }
}

pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
}

impl NavBar<'_> {
    /// Get the navigation bar.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(active_endpoint: &str) -> NavBar<'_> {
        let sample_data = format_endpoint(endpoints::METRICS_API, "monthly");

        let links = vec![
            Link {
                url: endpoints::CHARTS_VIEW.to_owned(),
                title: "Charts",
                is_current: active_endpoint == endpoints::CHARTS_VIEW,
            },
            Link {
                is_current: active_endpoint == sample_data,
                url: sample_data,
                title: "Sample Data",
            },
        ];

        NavBar { links }
    }

    pub fn into_html(self) -> Markup {
        // Template adapted from https://flowbite.com/docs/components/navbar/#default-navbar
        html!(
            nav class="bg-white border-gray-200 dark:bg-gray-900"
            {
                div
                    class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4"
                {
                    a
                        href=(endpoints::ROOT)
                        class="flex items-center space-x-3 rtl:space-x-reverse"
                    {
                        span
                            class="self-center text-2xl font-semibold whitespace-nowrap dark:text-white"
                        {
                            "Pipeline"
                        }
                    }

                    div class="w-full lg:block lg:w-auto"
                    {
                        ul
                            class="font-medium flex flex-col p-4 lg:p-0 mt-4
                            border border-gray-100 rounded bg-gray-50
                            lg:flex-row lg:space-x-8 rtl:space-x-reverse lg:mt-0
                            lg:border-0 lg:bg-white dark:bg-gray-800
                            lg:dark:bg-gray-900 dark:border-gray-700"
                        {
                            @for link in self.links {
                                li { (link.into_html()) }
                            }
                        }
                    }
                }
            }
        )
    }
}

/// The page header with a title derived from `path`.
pub fn page_header(path: &str) -> Markup {
    html!(
        header class="px-6 pt-6 mx-auto max-w-screen-xl"
        {
            h1 class="text-3xl font-bold text-gray-900 dark:text-white"
            {
                (page_title_from_path(path))
            }
        }
    )
}

/// Turn the last segment of `path` into a page title.
///
/// Hyphens become spaces and every word is capitalised, e.g. "/settings/lead-scoring"
/// becomes "Lead Scoring". An empty path is the dashboard.
pub fn page_title_from_path(path: &str) -> String {
    let Some(segment) = path.split('/').rfind(|segment| !segment.is_empty()) else {
        return "Dashboard".to_owned();
    };

    let title = segment
        .split('-')
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ");

    match title.as_str() {
        "Gtm Strategy" => "GTM Strategy".to_owned(),
        "Ai Insights" => "AI Insights".to_owned(),
        _ => title,
    }
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod nav_bar_tests {
    use scraper::{Html, Selector};

    use crate::endpoints;

    use super::{NavBar, page_title_from_path};

    #[test]
    fn marks_active_link() {
        let html = Html::parse_fragment(&NavBar::new(endpoints::CHARTS_VIEW).into_html().into_string());

        let current: Vec<_> = html
            .select(&Selector::parse("a[aria-current='page']").unwrap())
            .collect();

        assert_eq!(current.len(), 1);
        assert_eq!(current[0].value().attr("href"), Some(endpoints::CHARTS_VIEW));
    }

    #[test]
    fn title_from_last_segment() {
        assert_eq!(page_title_from_path("/charts"), "Charts");
        assert_eq!(page_title_from_path("/settings/lead-scoring"), "Lead Scoring");
        assert_eq!(page_title_from_path("/leads/"), "Leads");
    }

    #[test]
    fn title_overrides() {
        assert_eq!(page_title_from_path("/gtm-strategy"), "GTM Strategy");
        assert_eq!(page_title_from_path("/ai-insights"), "AI Insights");
    }

    #[test]
    fn empty_path_is_dashboard() {
        assert_eq!(page_title_from_path("/"), "Dashboard");
        assert_eq!(page_title_from_path(""), "Dashboard");
    }
}
