//! Handlers for the `/restaurants` resource.
//!
//! Create and update accept `multipart/form-data` so a logo image can be
//! uploaded alongside the text fields.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use restro3d_core::error::CoreError;
use restro3d_core::types::DbId;
use restro3d_db::models::restaurant::{CreateRestaurant, Restaurant, UpdateRestaurant};
use restro3d_db::repositories::RestaurantRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{Path, Query};
use crate::form::MultipartForm;
use crate::query::PaginationParams;
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Restaurant",
        id,
    })
}

/// POST /api/restaurants
///
/// Form fields: `name` (required), `description`, `contact_email`,
/// `contact_phone`, `address`, and an optional `logo` file. Empty optional
/// fields are stored as NULL.
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Restaurant>)> {
    let mut form = MultipartForm::collect(multipart).await?;

    let mut input = CreateRestaurant {
        name: form.required_text("name")?,
        description: form.non_empty_text("description"),
        contact_email: form.non_empty_text("contact_email"),
        contact_phone: form.non_empty_text("contact_phone"),
        address: form.non_empty_text("address"),
        logo_url: None,
    };
    input.validate()?;

    if let Some(logo) = form.take_file("logo") {
        input.logo_url = Some(state.uploads.store_image(&logo).await?);
    }

    let restaurant = RestaurantRepo::create(&state.pool, &input).await?;
    tracing::info!(restaurant_id = %restaurant.id, name = %restaurant.name, "Restaurant created");
    Ok((StatusCode::CREATED, Json(restaurant)))
}

/// GET /api/restaurants?skip=&limit=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Restaurant>>> {
    let limit = restro3d_db::clamp_limit(params.limit);
    let offset = restro3d_db::clamp_offset(params.skip);
    let restaurants = RestaurantRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(restaurants))
}

/// GET /api/restaurants/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Restaurant>> {
    let restaurant = RestaurantRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(restaurant))
}

/// PUT /api/restaurants/{id}
///
/// Partial update. Empty text fields count as absent and leave the stored
/// value untouched. A new `logo` replaces the URL.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<Restaurant>> {
    let mut form = MultipartForm::collect(multipart).await?;

    let mut input = UpdateRestaurant {
        name: form.non_empty_text("name"),
        description: form.non_empty_text("description"),
        contact_email: form.non_empty_text("contact_email"),
        contact_phone: form.non_empty_text("contact_phone"),
        address: form.non_empty_text("address"),
        logo_url: None,
    };
    input.validate()?;

    if !RestaurantRepo::exists(&state.pool, id).await? {
        return Err(not_found(id));
    }

    if let Some(logo) = form.take_file("logo") {
        input.logo_url = Some(state.uploads.store_image(&logo).await?);
    }

    let restaurant = RestaurantRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(restaurant))
}

/// DELETE /api/restaurants/{id}
///
/// Hard delete. The restaurant's menu items and files are left in place.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !RestaurantRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(restaurant_id = %id, "Restaurant deleted");
    Ok(Json(MessageResponse::new("Restaurant deleted successfully")))
}
