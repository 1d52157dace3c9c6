//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod menu_item_repo;
pub mod restaurant_repo;

pub use menu_item_repo::MenuItemRepo;
pub use restaurant_repo::RestaurantRepo;
