//! Alert messages shown to users after a failed htmx request.
//!
//! An alert replaces the `#alert-container` element that every page includes
//! at the bottom of the body, so requests that fail should target that element
//! with `hx-target-error` and swap its outer HTML.

use maud::{Markup, html};

/// An alert message to display to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    Error { message: String, details: String },
}

impl Alert {
    pub fn into_html(self) -> Markup {
        let (style, message, details) = match self {
            Alert::Error { message, details } => (
                "p-4 text-sm text-red-800 rounded-lg bg-red-50 \
                dark:bg-gray-800 dark:text-red-400",
                message,
                details,
            ),
        };

        html!(
            div
                id="alert-container"
                class="w-full max-w-md px-4"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                div class=(style) role="alert"
                {
                    span class="font-medium" { (message) }

                    @if !details.is_empty() {
                        " " (details)
                    }

                    button
                        type="button"
                        class="ms-2 font-semibold underline"
                        onclick="this.closest('#alert-container').classList.add('hidden')"
                    {
                        "Dismiss"
                    }
                }
            }
        )
    }
}
