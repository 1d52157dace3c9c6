pub mod health;
pub mod menu_item;
pub mod pages;
pub mod restaurant;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /restaurants                                   list, create
/// /restaurants/{id}                              get, update, delete
/// /restaurants/{id}/menu-items                   list (?category=), create
/// /restaurants/{id}/generate-qr                  generate QR code (POST)
/// /restaurants/{id}/qr-code                      QR code PNG (GET)
///
/// /menu-items/{id}                               get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Restaurants, their menu item collections, and QR codes.
        .nest("/restaurants", restaurant::router())
        // Individual menu items.
        .nest("/menu-items", menu_item::router())
}
