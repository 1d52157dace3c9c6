//! Repository for the `restaurants` table.

use restro3d_core::types::DbId;
use sqlx::PgPool;

use crate::models::restaurant::{CreateRestaurant, Restaurant, UpdateRestaurant};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, contact_email, contact_phone, address, \
    logo_url, qr_code_url, is_active, created_at, updated_at";

/// Provides CRUD operations for restaurants.
pub struct RestaurantRepo;

impl RestaurantRepo {
    /// Insert a new restaurant, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRestaurant,
    ) -> Result<Restaurant, sqlx::Error> {
        let query = format!(
            "INSERT INTO restaurants
                (name, description, contact_email, contact_phone, address, logo_url)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.contact_email)
            .bind(&input.contact_phone)
            .bind(&input.address)
            .bind(&input.logo_url)
            .fetch_one(pool)
            .await
    }

    /// Find a restaurant by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Restaurant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM restaurants WHERE id = $1");
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a restaurant with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM restaurants WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// List restaurants in creation order.
    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Restaurant>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM restaurants
             ORDER BY created_at ASC, id ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a restaurant. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRestaurant,
    ) -> Result<Option<Restaurant>, sqlx::Error> {
        let query = format!(
            "UPDATE restaurants SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                contact_email = COALESCE($4, contact_email),
                contact_phone = COALESCE($5, contact_phone),
                address = COALESCE($6, address),
                logo_url = COALESCE($7, logo_url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.contact_email)
            .bind(&input.contact_phone)
            .bind(&input.address)
            .bind(&input.logo_url)
            .fetch_optional(pool)
            .await
    }

    /// Record the public URL of a restaurant's generated QR code.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_qr_code_url(
        pool: &PgPool,
        id: DbId,
        qr_code_url: &str,
    ) -> Result<Option<Restaurant>, sqlx::Error> {
        let query = format!(
            "UPDATE restaurants SET qr_code_url = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(id)
            .bind(qr_code_url)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a restaurant. Menu items referencing it are left in
    /// place. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM restaurants WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
