//! Menu item entity model and DTOs.

use restro3d_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Default AR scale multiplier for new items.
pub const DEFAULT_SCALE_FACTOR: f64 = 1.0;

/// A row from the `menu_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MenuItem {
    pub id: DbId,
    pub restaurant_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub glb_file_url: String,
    pub is_available: bool,
    /// Multiplier applied to the 3D model when rendered in AR.
    pub scale_factor: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new menu item.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMenuItem {
    pub restaurant_id: DbId,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(length(max = 100))]
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub glb_file_url: String,
    #[validate(range(exclusive_min = 0.0))]
    pub scale_factor: f64,
}

/// DTO for updating a menu item. All fields optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMenuItem {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(length(max = 100))]
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub glb_file_url: Option<String>,
    pub is_available: Option<bool>,
    #[validate(range(exclusive_min = 0.0))]
    pub scale_factor: Option<f64>,
}
