//! Index page listing the available routes.

use axum::response::Html;

const ROUTES: &[&str] = &[
    "/api/v1.0/stations",
    "/api/v1.0/precipitation",
    "/api/v1.0/tobs",
    "/api/v1.0/temp/&lt;start&gt;",
    "/api/v1.0/temp/&lt;start&gt;/&lt;end&gt;",
];

/// Handle GET / requests
pub async fn home_handler() -> Html<String> {
    let mut body = String::from("Available Routes:<br/>");
    body.push_str(&ROUTES.join("<br/>"));
    Html(body)
}
