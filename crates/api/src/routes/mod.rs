pub mod coverage;
pub mod faqs;
pub mod health;
pub mod leads;
pub mod plans;
pub mod settings;
pub mod testimonials;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /plans                      list (GET)
/// /plans/banners              carousel lineup (GET)
/// /plans/{id}                 get (GET)
///
/// /leads                      capture (POST)
///
/// /coverage-areas             list (GET)
/// /coverage-areas/check       check a postal code (GET ?zipCode=)
///
/// /testimonials               active testimonials (GET)
///
/// /faqs                       active FAQs in order (GET)
///
/// /settings/{key}             get a site setting (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/plans", plans::router())
        .nest("/leads", leads::router())
        .nest("/coverage-areas", coverage::router())
        .nest("/testimonials", testimonials::router())
        .nest("/faqs", faqs::router())
        .nest("/settings", settings::router())
}
