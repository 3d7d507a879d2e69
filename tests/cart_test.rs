#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{create_test_dir, open_service};
use shopfile::{CreateItemOptions, DocumentId, Item, ShopError, ShopService};

async fn seed_item(service: &ShopService, title: &str, price: f64) -> Item {
    service
        .create_item(CreateItemOptions {
            title: title.to_string(),
            price,
            description: None,
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn test_create_cart_is_empty() {
    let temp = create_test_dir();
    let service = open_service(&temp);

    let cart = service.create_cart().await.unwrap();
    assert!(cart.items.is_empty());
    assert_eq!(cart.total_price, 0.0);

    let fetched = service.get_cart(&cart.id).await.unwrap();
    assert_eq!(fetched, cart);
}

#[tokio::test]
async fn test_get_unknown_cart() {
    let temp = create_test_dir();
    let service = open_service(&temp);

    let result = service.get_cart(&DocumentId::generate()).await;
    assert!(matches!(result, Err(ShopError::CartNotFound(_))));
}

// The canonical end-to-end flow: two items in, one out, cart deleted.
#[tokio::test]
async fn test_full_cart_lifecycle() {
    let temp = create_test_dir();
    let service = open_service(&temp);

    let mug = seed_item(&service, "Mug", 10.0).await;
    let pen = seed_item(&service, "Pen", 2.0).await;
    let cart = service.create_cart().await.unwrap();

    let cart_after_mug = service.add_to_cart(&cart.id, &mug.id).await.unwrap();
    assert_eq!(cart_after_mug.total_price, 10.0);

    let cart_after_pen = service.add_to_cart(&cart.id, &pen.id).await.unwrap();
    assert_eq!(cart_after_pen.total_price, 12.0);

    let cart_after_remove = service.remove_from_cart(&cart.id, &mug.id).await.unwrap();
    assert_eq!(cart_after_remove.items.len(), 1);
    assert_eq!(cart_after_remove.items[0].id, pen.id);
    assert_eq!(cart_after_remove.total_price, 2.0);

    let deletion = service.delete_cart(&cart.id).await.unwrap();
    assert_eq!(deletion.deleted_id, cart.id);
    assert!(deletion.success);

    let result = service.get_cart(&cart.id).await;
    assert!(matches!(result, Err(ShopError::CartNotFound(_))));
}

#[tokio::test]
async fn test_add_snapshots_item_fields() {
    let temp = create_test_dir();
    let service = open_service(&temp);

    let item = service
        .create_item(CreateItemOptions {
            title: "Mug".to_string(),
            price: 10.0,
            description: Some("A sturdy mug.".to_string()),
        })
        .await
        .unwrap();
    let cart = service.create_cart().await.unwrap();

    let updated = service.add_to_cart(&cart.id, &item.id).await.unwrap();
    let entry = &updated.items[0];
    assert_eq!(entry.id, item.id);
    assert_eq!(entry.title, "Mug");
    assert_eq!(entry.description, "A sturdy mug.");
    assert_eq!(entry.price, 10.0);
}

#[tokio::test]
async fn test_add_allows_duplicates() {
    let temp = create_test_dir();
    let service = open_service(&temp);

    let mug = seed_item(&service, "Mug", 10.0).await;
    let cart = service.create_cart().await.unwrap();

    service.add_to_cart(&cart.id, &mug.id).await.unwrap();
    let updated = service.add_to_cart(&cart.id, &mug.id).await.unwrap();

    assert_eq!(updated.items.len(), 2);
    assert_eq!(updated.total_price, 20.0);
}

#[tokio::test]
async fn test_remove_drops_every_duplicate() {
    let temp = create_test_dir();
    let service = open_service(&temp);

    let mug = seed_item(&service, "Mug", 10.0).await;
    let pen = seed_item(&service, "Pen", 2.0).await;
    let cart = service.create_cart().await.unwrap();

    service.add_to_cart(&cart.id, &mug.id).await.unwrap();
    service.add_to_cart(&cart.id, &mug.id).await.unwrap();
    service.add_to_cart(&cart.id, &pen.id).await.unwrap();
    service.add_to_cart(&cart.id, &mug.id).await.unwrap();

    let updated = service.remove_from_cart(&cart.id, &mug.id).await.unwrap();

    assert_eq!(updated.items.len(), 1);
    assert_eq!(updated.items[0].id, pen.id);
    assert_eq!(updated.total_price, 2.0);
}

#[tokio::test]
async fn test_remove_item_not_in_cart_succeeds_unchanged() {
    let temp = create_test_dir();
    let service = open_service(&temp);

    let mug = seed_item(&service, "Mug", 10.0).await;
    let pen = seed_item(&service, "Pen", 2.0).await;
    let cart = service.create_cart().await.unwrap();
    service.add_to_cart(&cart.id, &mug.id).await.unwrap();

    // Pen exists in the catalog but was never added to this cart
    let updated = service.remove_from_cart(&cart.id, &pen.id).await.unwrap();

    assert_eq!(updated.items.len(), 1);
    assert_eq!(updated.items[0].id, mug.id);
    assert_eq!(updated.total_price, 10.0);
}

#[tokio::test]
async fn test_mutations_check_cart_before_item() {
    let temp = create_test_dir();
    let service = open_service(&temp);

    // Neither record exists; the cart error must win
    let cart_id = DocumentId::generate();
    let item_id = DocumentId::generate();

    let add = service.add_to_cart(&cart_id, &item_id).await;
    assert!(matches!(add, Err(ShopError::CartNotFound(_))));

    let remove = service.remove_from_cart(&cart_id, &item_id).await;
    assert!(matches!(remove, Err(ShopError::CartNotFound(_))));
}

#[tokio::test]
async fn test_mutations_require_catalog_item() {
    let temp = create_test_dir();
    let service = open_service(&temp);

    let cart = service.create_cart().await.unwrap();
    let missing = DocumentId::generate();

    let add = service.add_to_cart(&cart.id, &missing).await;
    assert!(matches!(add, Err(ShopError::ItemNotFound(_))));

    let remove = service.remove_from_cart(&cart.id, &missing).await;
    assert!(matches!(remove, Err(ShopError::ItemNotFound(_))));
}

#[tokio::test]
async fn test_deleting_item_leaves_snapshots_intact() {
    let temp = create_test_dir();
    let service = open_service(&temp);

    let mug = seed_item(&service, "Mug", 10.0).await;
    let cart = service.create_cart().await.unwrap();
    service.add_to_cart(&cart.id, &mug.id).await.unwrap();

    let deletion = service.delete_item(&mug.id).await.unwrap();
    assert!(deletion.success);

    // The snapshot is a value copy; the cart is unaffected
    let fetched = service.get_cart(&cart.id).await.unwrap();
    assert_eq!(fetched.items.len(), 1);
    assert_eq!(fetched.items[0].title, "Mug");
    assert_eq!(fetched.total_price, 10.0);

    // But new additions of the deleted item are rejected
    let add = service.add_to_cart(&cart.id, &mug.id).await;
    assert!(matches!(add, Err(ShopError::ItemNotFound(_))));
}

#[tokio::test]
async fn test_delete_unknown_cart() {
    let temp = create_test_dir();
    let service = open_service(&temp);

    let result = service.delete_cart(&DocumentId::generate()).await;
    assert!(matches!(result, Err(ShopError::CartNotFound(_))));
}

#[tokio::test]
async fn test_carts_survive_service_restart() {
    let temp = create_test_dir();

    let (cart_id, mug_id) = {
        let service = open_service(&temp);
        let mug = seed_item(&service, "Mug", 10.0).await;
        let cart = service.create_cart().await.unwrap();
        service.add_to_cart(&cart.id, &mug.id).await.unwrap();
        (cart.id, mug.id)
    };

    let reopened = open_service(&temp);
    let fetched = reopened.get_cart(&cart_id).await.unwrap();
    assert_eq!(fetched.items.len(), 1);
    assert_eq!(fetched.items[0].id, mug_id);
    assert_eq!(fetched.total_price, 10.0);
}
