use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// HTML page routes, mounted at the root.
///
/// ```text
/// GET /                       -> landing
/// GET /admin                  -> admin
/// GET /menu/{restaurant_id}   -> menu
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::landing))
        .route("/admin", get(pages::admin))
        .route("/menu/{restaurant_id}", get(pages::menu))
}
