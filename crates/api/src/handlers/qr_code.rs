//! Handlers for restaurant menu QR codes.
//!
//! A QR code encodes `{BASE_URL}/menu/{restaurant_id}`. It is written to
//! `qr_codes/qr_{restaurant_id}.png` in the upload directory, so generating
//! again replaces the previous image.

use axum::body::Body;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use restro3d_core::error::CoreError;
use restro3d_core::qr;
use restro3d_core::types::DbId;
use restro3d_db::repositories::RestaurantRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::Path;
use crate::state::AppState;

/// Response for a freshly generated QR code.
#[derive(Debug, Serialize)]
pub struct QrCodeResponse {
    pub qr_code_url: String,
    pub menu_url: String,
    pub message: String,
}

fn restaurant_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Restaurant",
        id,
    })
}

/// POST /api/restaurants/{id}/generate-qr
///
/// Renders the menu QR code, stores the PNG, and records its URL on the
/// restaurant.
pub async fn generate(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<QrCodeResponse>> {
    if !RestaurantRepo::exists(&state.pool, id).await? {
        return Err(restaurant_not_found(id));
    }

    let menu_url = qr::menu_url(&state.config.base_url, id);
    let png = qr::render_png(&menu_url)?;
    let qr_code_url = state.uploads.store_qr_code(id, &png).await?;

    RestaurantRepo::set_qr_code_url(&state.pool, id, &qr_code_url)
        .await?
        .ok_or_else(|| restaurant_not_found(id))?;

    tracing::info!(restaurant_id = %id, %menu_url, %qr_code_url, "QR code generated");

    Ok(Json(QrCodeResponse {
        qr_code_url,
        menu_url,
        message: "QR code generated successfully".to_string(),
    }))
}

/// GET /api/restaurants/{id}/qr-code
///
/// Serves the stored PNG. Returns 404 when the restaurant is unknown, when
/// no QR code has been generated, or when the file is missing from disk.
pub async fn get_png(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let restaurant = RestaurantRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| restaurant_not_found(id))?;

    if restaurant.qr_code_url.is_none() {
        return Err(AppError::NotFound("QR code not generated yet".into()));
    }

    let path = state.uploads.qr_code_path(id);
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(restaurant_id = %id, path = %path.display(), "QR code file missing");
            return Err(AppError::NotFound("QR code file not found".into()));
        }
        Err(e) => {
            return Err(AppError::InternalError(format!(
                "Failed to read {}: {e}",
                path.display()
            )));
        }
    };

    Ok(([(header::CONTENT_TYPE, "image/png")], Body::from(bytes)).into_response())
}
