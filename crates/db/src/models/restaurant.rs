//! Restaurant entity model and DTOs.

use restro3d_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `restaurants` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Restaurant {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub logo_url: Option<String>,
    pub qr_code_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new restaurant.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRestaurant {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    #[validate(length(max = 255))]
    pub contact_email: Option<String>,
    #[validate(length(max = 50))]
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub logo_url: Option<String>,
}

/// DTO for updating a restaurant. All fields optional; `None` leaves the
/// column untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateRestaurant {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 255))]
    pub contact_email: Option<String>,
    #[validate(length(max = 50))]
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub logo_url: Option<String>,
}
