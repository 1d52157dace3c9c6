//! Repository for the `menu_items` table.

use restro3d_core::types::DbId;
use sqlx::PgPool;

use crate::models::menu_item::{CreateMenuItem, MenuItem, UpdateMenuItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, restaurant_id, name, description, price, category, image_url, \
    glb_file_url, is_available, scale_factor, created_at, updated_at";

/// Provides CRUD operations for menu items.
pub struct MenuItemRepo;

impl MenuItemRepo {
    /// Insert a new menu item, returning the created row.
    ///
    /// Does not check that `restaurant_id` exists; callers do that first.
    pub async fn create(pool: &PgPool, input: &CreateMenuItem) -> Result<MenuItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO menu_items
                (restaurant_id, name, description, price, category, image_url, glb_file_url, scale_factor)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MenuItem>(&query)
            .bind(input.restaurant_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.category)
            .bind(&input.image_url)
            .bind(&input.glb_file_url)
            .bind(input.scale_factor)
            .fetch_one(pool)
            .await
    }

    /// Find a menu item by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MenuItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM menu_items WHERE id = $1");
        sqlx::query_as::<_, MenuItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a menu item with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM menu_items WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// List a restaurant's menu items in creation order, optionally restricted
    /// to one category (exact match).
    pub async fn list_by_restaurant(
        pool: &PgPool,
        restaurant_id: DbId,
        category: Option<&str>,
    ) -> Result<Vec<MenuItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM menu_items
             WHERE restaurant_id = $1
               AND ($2::TEXT IS NULL OR category = $2)
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, MenuItem>(&query)
            .bind(restaurant_id)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// Update a menu item. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMenuItem,
    ) -> Result<Option<MenuItem>, sqlx::Error> {
        let query = format!(
            "UPDATE menu_items SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                category = COALESCE($5, category),
                image_url = COALESCE($6, image_url),
                glb_file_url = COALESCE($7, glb_file_url),
                is_available = COALESCE($8, is_available),
                scale_factor = COALESCE($9, scale_factor)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MenuItem>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.category)
            .bind(&input.image_url)
            .bind(&input.glb_file_url)
            .bind(input.is_available)
            .bind(input.scale_factor)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a menu item. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
