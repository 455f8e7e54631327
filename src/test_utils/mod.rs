pub(crate) mod html;

pub(crate) use html::{assert_valid_html, parse_html_document, parse_html_fragment};
