//! Route definitions for individual menu items.

use axum::routing::get;
use axum::Router;

use crate::handlers::menu_item;
use crate::state::AppState;

/// Menu item routes mounted at `/api/menu-items`.
///
/// ```text
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(menu_item::get_by_id)
            .put(menu_item::update)
            .delete(menu_item::delete),
    )
}
