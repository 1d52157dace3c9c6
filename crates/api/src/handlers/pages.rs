//! Handlers for the HTML pages: landing, admin dashboard, customer menu.

use axum::extract::State;
use axum::response::Html;
use serde_json::json;

use crate::error::AppResult;
use crate::extract::Path;
use crate::pages::{ADMIN_TEMPLATE, APP_NAME, LANDING_TEMPLATE, MENU_TEMPLATE};
use crate::state::AppState;

/// GET /
pub async fn landing(State(state): State<AppState>) -> AppResult<Html<String>> {
    let html = state
        .templates
        .render(LANDING_TEMPLATE, &json!({ "app_name": APP_NAME }))?;
    Ok(Html(html))
}

/// GET /admin
pub async fn admin(State(state): State<AppState>) -> AppResult<Html<String>> {
    let html = state
        .templates
        .render(ADMIN_TEMPLATE, &json!({ "app_name": APP_NAME }))?;
    Ok(Html(html))
}

/// GET /menu/{restaurant_id}
///
/// The id is passed through to the page as-is; the page's script fetches
/// the restaurant and reports a missing one itself.
pub async fn menu(
    State(state): State<AppState>,
    Path(restaurant_id): Path<String>,
) -> AppResult<Html<String>> {
    let html = state.templates.render(
        MENU_TEMPLATE,
        &json!({ "app_name": APP_NAME, "restaurant_id": restaurant_id }),
    )?;
    Ok(Html(html))
}
