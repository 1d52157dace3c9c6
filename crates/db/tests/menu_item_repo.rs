//! Integration tests for the menu item repository.

use std::time::Duration;

use restro3d_core::types::DbId;
use restro3d_db::models::menu_item::{CreateMenuItem, UpdateMenuItem, DEFAULT_SCALE_FACTOR};
use restro3d_db::models::restaurant::CreateRestaurant;
use restro3d_db::repositories::{MenuItemRepo, RestaurantRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn setup_restaurant(pool: &PgPool, name: &str) -> DbId {
    RestaurantRepo::create(
        pool,
        &CreateRestaurant {
            name: name.to_string(),
            description: None,
            contact_email: None,
            contact_phone: None,
            address: None,
            logo_url: None,
        },
    )
    .await
    .unwrap()
    .id
}

fn new_item(restaurant_id: DbId, name: &str, category: Option<&str>) -> CreateMenuItem {
    CreateMenuItem {
        restaurant_id,
        name: name.to_string(),
        description: Some("Tasty".to_string()),
        price: 12.0,
        category: category.map(str::to_string),
        image_url: None,
        glb_file_url: format!("/uploads/glb/{name}.glb"),
        scale_factor: DEFAULT_SCALE_FACTOR,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_sets_defaults(pool: PgPool) {
    let restaurant_id = setup_restaurant(&pool, "R").await;
    let item = MenuItemRepo::create(&pool, &new_item(restaurant_id, "Burger", None))
        .await
        .unwrap();

    assert_eq!(item.restaurant_id, restaurant_id);
    assert!(item.is_available, "new items default to available");
    assert_eq!(item.scale_factor, 1.0);
    assert_eq!(item.glb_file_url, "/uploads/glb/Burger.glb");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_filters_by_restaurant_and_category(pool: PgPool) {
    let a = setup_restaurant(&pool, "A").await;
    let b = setup_restaurant(&pool, "B").await;

    MenuItemRepo::create(&pool, &new_item(a, "Soup", Some("Appetizer"))).await.unwrap();
    MenuItemRepo::create(&pool, &new_item(a, "Steak", Some("Main Course"))).await.unwrap();
    MenuItemRepo::create(&pool, &new_item(a, "Bread", None)).await.unwrap();
    MenuItemRepo::create(&pool, &new_item(b, "Cake", Some("Dessert"))).await.unwrap();

    let all_a = MenuItemRepo::list_by_restaurant(&pool, a, None).await.unwrap();
    assert_eq!(all_a.len(), 3);
    assert!(all_a.iter().all(|i| i.restaurant_id == a));

    let mains = MenuItemRepo::list_by_restaurant(&pool, a, Some("Main Course"))
        .await
        .unwrap();
    assert_eq!(mains.len(), 1);
    assert_eq!(mains[0].name, "Steak");

    let none = MenuItemRepo::list_by_restaurant(&pool, a, Some("Dessert"))
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn partial_update_applies_only_given_fields(pool: PgPool) {
    let restaurant_id = setup_restaurant(&pool, "R").await;
    let item = MenuItemRepo::create(&pool, &new_item(restaurant_id, "Taco", Some("Main Course")))
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(5)).await;

    let update = UpdateMenuItem {
        price: Some(7.25),
        is_available: Some(false),
        scale_factor: Some(0.5),
        ..Default::default()
    };
    let updated = MenuItemRepo::update(&pool, item.id, &update)
        .await
        .unwrap()
        .expect("row should be updated");

    assert_eq!(updated.price, 7.25);
    assert!(!updated.is_available);
    assert_eq!(updated.scale_factor, 0.5);
    assert_eq!(updated.name, "Taco");
    assert_eq!(updated.category.as_deref(), Some("Main Course"));
    assert_eq!(updated.glb_file_url, item.glb_file_url);
    assert_eq!(updated.created_at, item.created_at);
    assert!(
        updated.updated_at > item.updated_at,
        "update trigger bumps updated_at"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_replaces_file_urls(pool: PgPool) {
    let restaurant_id = setup_restaurant(&pool, "R").await;
    let item = MenuItemRepo::create(&pool, &new_item(restaurant_id, "Pie", None))
        .await
        .unwrap();

    let update = UpdateMenuItem {
        glb_file_url: Some("/uploads/glb/new.glb".to_string()),
        image_url: Some("/uploads/images/new.png".to_string()),
        ..Default::default()
    };
    let updated = MenuItemRepo::update(&pool, item.id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.glb_file_url, "/uploads/glb/new.glb");
    assert_eq!(updated.image_url.as_deref(), Some("/uploads/images/new.png"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_row(pool: PgPool) {
    let restaurant_id = setup_restaurant(&pool, "R").await;
    let item = MenuItemRepo::create(&pool, &new_item(restaurant_id, "Gone", None))
        .await
        .unwrap();

    assert!(MenuItemRepo::delete(&pool, item.id).await.unwrap());
    assert!(MenuItemRepo::find_by_id(&pool, item.id).await.unwrap().is_none());
    assert!(!MenuItemRepo::exists(&pool, item.id).await.unwrap());
    assert!(!MenuItemRepo::delete(&pool, item.id).await.unwrap());
}
