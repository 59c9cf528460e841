//! Server-rendered markup for the selector page.
//!
//! Every form on the page carries the current selection as hidden
//! `selectedCities` inputs, so the selection lives with the page view and is
//! never held by the server.

use html_escape::{encode_double_quoted_attribute, encode_text};
use shared::{
    domain::{City, Selection},
    protocol::SELECTED_CITIES_FIELD,
};

pub(crate) const EMPTY_SELECTION_TEXT: &str = "No cities selected";

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0}\
.container{max-width:42rem;margin:0 auto;padding:1rem}\
h1{font-size:1.875rem;font-weight:700;margin-bottom:1.5rem;text-align:center}\
h2{font-size:1.25rem;font-weight:600;margin-bottom:.5rem}\
.scroll-area{height:8rem;overflow-y:auto;border:1px solid #ddd;border-radius:.375rem;padding:.5rem;margin-bottom:1.5rem}\
.scroll-area ul{list-style:none;margin:0;padding:0}\
.scroll-area li{display:flex;align-items:center;margin-bottom:.5rem}\
.pin{margin-right:.5rem}\
.placeholder{color:#6b7280;font-style:italic}\
select,button{width:100%;padding:.5rem}\
.save{margin-top:1.5rem}\
.message{margin-top:1rem;color:#16a34a;text-align:center}";

/// Full page: selected panel, city picker, save form, optional confirmation.
pub(crate) fn render_page(catalog: &[City], selection: &Selection, message: Option<&str>) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>City Selector</title>\n");
    html.push_str(&format!("<style>{STYLE}</style>\n"));
    html.push_str("</head>\n<body>\n<main class=\"container\">\n");
    html.push_str("<h1>City Selector</h1>\n");

    html.push_str("<section>\n<h2>Selected Cities</h2>\n<div class=\"scroll-area\">\n");
    html.push_str(&render_selected(selection));
    html.push_str("</div>\n</section>\n");

    html.push_str(&format!(
        "<form method=\"post\" action=\"{}\" class=\"picker\">\n",
        server_api::toggle_route()
    ));
    html.push_str(&hidden_selection_inputs(selection));
    html.push_str("<select name=\"city\" aria-label=\"City\" onchange=\"this.form.submit()\">\n");
    html.push_str("<option value=\"\" selected>Select a city</option>\n");
    for city in catalog {
        html.push_str(&format!(
            "<option value=\"{}\">{}</option>\n",
            encode_double_quoted_attribute(city.as_str()),
            encode_text(city.as_str())
        ));
    }
    html.push_str("</select>\n<noscript><button type=\"submit\">Toggle city</button></noscript>\n");
    html.push_str("</form>\n");

    html.push_str(&format!(
        "<form method=\"post\" action=\"{}\" class=\"save\">\n",
        server_api::index_route()
    ));
    html.push_str(&hidden_selection_inputs(selection));
    html.push_str("<button type=\"submit\">Save Selected Cities</button>\n</form>\n");

    if let Some(message) = message.filter(|m| !m.is_empty()) {
        html.push_str(&format!("<p class=\"message\">{}</p>\n", encode_text(message)));
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

/// The "Selected Cities" panel body, in insertion order.
pub(crate) fn render_selected(selection: &Selection) -> String {
    if selection.is_empty() {
        return format!("<p class=\"placeholder\">{EMPTY_SELECTION_TEXT}</p>\n");
    }

    let mut html = String::from("<ul>\n");
    for city in selection {
        html.push_str(&format!(
            "<li><span class=\"pin\" aria-hidden=\"true\">&#128205;</span><span>{}</span></li>\n",
            encode_text(city.as_str())
        ));
    }
    html.push_str("</ul>\n");
    html
}

fn hidden_selection_inputs(selection: &Selection) -> String {
    selection
        .iter()
        .map(|city| {
            format!(
                "<input type=\"hidden\" name=\"{SELECTED_CITIES_FIELD}\" value=\"{}\">\n",
                encode_double_quoted_attribute(city.as_str())
            )
        })
        .collect()
}
