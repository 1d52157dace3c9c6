//! Handlers for the menu item resource.
//!
//! Menu items are created and listed under their restaurant
//! (`/restaurants/{restaurant_id}/menu-items`) and addressed directly by id
//! afterwards (`/menu-items/{id}`).

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use restro3d_core::error::CoreError;
use restro3d_core::types::DbId;
use restro3d_db::models::menu_item::{
    CreateMenuItem, MenuItem, UpdateMenuItem, DEFAULT_SCALE_FACTOR,
};
use restro3d_db::repositories::{MenuItemRepo, RestaurantRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{Path, Query};
use crate::form::MultipartForm;
use crate::query::CategoryFilter;
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "MenuItem",
        id,
    })
}

/// POST /api/restaurants/{restaurant_id}/menu-items
///
/// Form fields: `name` and `price` (required), `description`, `category`,
/// `scale_factor` (default 1.0), a required `glb_file` and an optional
/// `image`. Returns 404 if the restaurant does not exist and 400 if the
/// model is not a `.glb` file.
pub async fn create(
    State(state): State<AppState>,
    Path(restaurant_id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<MenuItem>)> {
    let mut form = MultipartForm::collect(multipart).await?;

    if !RestaurantRepo::exists(&state.pool, restaurant_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Restaurant",
            id: restaurant_id,
        }));
    }

    let mut input = CreateMenuItem {
        restaurant_id,
        name: form.required_text("name")?,
        description: form.non_empty_text("description"),
        price: form.required_float("price")?,
        category: form.non_empty_text("category"),
        image_url: None,
        glb_file_url: String::new(),
        scale_factor: form.float("scale_factor")?.unwrap_or(DEFAULT_SCALE_FACTOR),
    };
    input.validate()?;

    let glb_file = form
        .take_file("glb_file")
        .ok_or_else(|| AppError::BadRequest("Missing required file 'glb_file'".into()))?;
    input.glb_file_url = state.uploads.store_glb(&glb_file).await?;

    if let Some(image) = form.take_file("image") {
        input.image_url = Some(state.uploads.store_image(&image).await?);
    }

    let item = MenuItemRepo::create(&state.pool, &input).await?;
    tracing::info!(
        menu_item_id = %item.id,
        restaurant_id = %restaurant_id,
        glb_file_url = %item.glb_file_url,
        "Menu item created"
    );
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/restaurants/{restaurant_id}/menu-items?category=
///
/// Does not check that the restaurant exists; an unknown id yields `[]`.
pub async fn list_by_restaurant(
    State(state): State<AppState>,
    Path(restaurant_id): Path<DbId>,
    Query(filter): Query<CategoryFilter>,
) -> AppResult<Json<Vec<MenuItem>>> {
    let items =
        MenuItemRepo::list_by_restaurant(&state.pool, restaurant_id, filter.as_filter()).await?;
    Ok(Json(items))
}

/// GET /api/menu-items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MenuItem>> {
    let item = MenuItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(item))
}

/// PUT /api/menu-items/{id}
///
/// Partial update over the create fields plus `is_available`. Empty fields
/// count as absent. New `glb_file` / `image` uploads replace the stored
/// URLs; the previous files stay on disk.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<MenuItem>> {
    let mut form = MultipartForm::collect(multipart).await?;

    let mut input = UpdateMenuItem {
        name: form.non_empty_text("name"),
        description: form.non_empty_text("description"),
        price: form.float("price")?,
        category: form.non_empty_text("category"),
        image_url: None,
        glb_file_url: None,
        is_available: form.boolean("is_available")?,
        scale_factor: form.float("scale_factor")?,
    };
    input.validate()?;

    if !MenuItemRepo::exists(&state.pool, id).await? {
        return Err(not_found(id));
    }

    if let Some(glb_file) = form.take_file("glb_file") {
        input.glb_file_url = Some(state.uploads.store_glb(&glb_file).await?);
    }
    if let Some(image) = form.take_file("image") {
        input.image_url = Some(state.uploads.store_image(&image).await?);
    }

    let item = MenuItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(item))
}

/// DELETE /api/menu-items/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !MenuItemRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(menu_item_id = %id, "Menu item deleted");
    Ok(Json(MessageResponse::new("Menu item deleted successfully")))
}
