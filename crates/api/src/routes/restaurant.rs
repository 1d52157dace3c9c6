//! Route definitions for restaurants and their nested resources.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{menu_item, qr_code, restaurant};
use crate::state::AppState;

/// Restaurant routes mounted at `/api/restaurants`.
///
/// ```text
/// GET    /                     -> list
/// POST   /                     -> create
/// GET    /{id}                 -> get_by_id
/// PUT    /{id}                 -> update
/// DELETE /{id}                 -> delete
/// GET    /{id}/menu-items      -> menu_item::list_by_restaurant
/// POST   /{id}/menu-items      -> menu_item::create
/// POST   /{id}/generate-qr     -> qr_code::generate
/// GET    /{id}/qr-code         -> qr_code::get_png
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(restaurant::list).post(restaurant::create))
        .route(
            "/{id}",
            get(restaurant::get_by_id)
                .put(restaurant::update)
                .delete(restaurant::delete),
        )
        .route(
            "/{id}/menu-items",
            get(menu_item::list_by_restaurant).post(menu_item::create),
        )
        .route("/{id}/generate-qr", post(qr_code::generate))
        .route("/{id}/qr-code", get(qr_code::get_png))
}
