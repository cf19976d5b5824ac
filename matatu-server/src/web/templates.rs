//! Askama templates for the web frontend.

use askama::Template;
use axum::http::StatusCode;

use crate::domain::Itinerary;

/// Quick picks offered under the destination field.
pub const POPULAR_DESTINATIONS: &[&str] = &[
    "CBD/City Center",
    "Westlands",
    "Karen",
    "Eastleigh",
    "Kasarani",
    "Thika Road Mall",
    "Junction Mall",
    "Sarit Center",
    "Kibera",
    "Ngong",
    "Langata",
    "South C",
];

/// Home page with the search form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub destinations: &'static [&'static str],
}

impl IndexTemplate {
    pub fn new() -> Self {
        Self {
            destinations: POPULAR_DESTINATIONS,
        }
    }
}

impl Default for IndexTemplate {
    fn default() -> Self {
        Self::new()
    }
}

/// Itinerary page.
#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsTemplate {
    pub from: String,
    pub to: String,
    pub itinerary: Itinerary,
}

impl ResultsTemplate {
    pub fn new(from: &str, to: &str, itinerary: Itinerary) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            itinerary,
        }
    }

    /// Route codes for display, e.g. `"14, 46"`.
    pub fn route_list(&self) -> String {
        self.itinerary.routes.join(", ")
    }
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

impl ErrorTemplate {
    /// Page for a failed request. The title comes from the status class.
    pub fn for_status(status: StatusCode, message: &str) -> Self {
        let title = if status.is_server_error() {
            "Something went wrong"
        } else {
            "We couldn't plan that trip"
        };

        Self {
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::minimal_itinerary;

    #[test]
    fn index_has_search_form() {
        let html = IndexTemplate::new().render().unwrap();
        assert!(html.contains(r#"action="/results""#));
        assert!(html.contains("/static/app.js"));
    }

    #[test]
    fn index_offers_popular_destinations() {
        let html = IndexTemplate::new().render().unwrap();
        for dest in ["Westlands", "Junction Mall", "South C"] {
            assert!(html.contains(&format!(r#"data-destination="{dest}""#)), "{dest}");
        }
    }

    #[test]
    fn results_lists_routes_and_steps() {
        let template = ResultsTemplate::new("Westlands", "Karen", minimal_itinerary("Westlands", "Karen"));
        assert_eq!(template.route_list(), "14, 46");

        let html = template.render().unwrap();
        assert!(html.contains("Westlands Stage"));
        assert!(html.contains("14, 46"));
        assert!(html.contains("KSh 30-50"));
        assert!(html.contains("Walk to Westlands Stage"));
    }

    #[test]
    fn error_title_depends_on_status() {
        let page = ErrorTemplate::for_status(StatusCode::BAD_REQUEST, "Missing from or to location");
        assert_eq!(page.title, "We couldn't plan that trip");

        let page = ErrorTemplate::for_status(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert_eq!(page.title, "Something went wrong");
        assert!(page.render().unwrap().contains("boom"));
    }
}
