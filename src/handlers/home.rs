//! Root endpoint handler.
//!
//! Returns a short HTML page listing the available routes.

use axum::response::Html;

const HOME_PAGE: &str = "Welcome to the Climate App API!<br>\
    Available Routes:<br>\
    /api/v1.0/precipitation<br>\
    /api/v1.0/stations<br>\
    /api/v1.0/tobs<br>\
    /api/v1.0/start/&lt;start&gt;<br>\
    /api/v1.0/end/&lt;start&gt;/&lt;end&gt;<br>\
    Dates are given as YYYY-MM-DD.";

/// Handle GET / requests
pub async fn home_handler() -> Html<&'static str> {
    Html(HOME_PAGE)
}
