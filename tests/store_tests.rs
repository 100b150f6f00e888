use sea_orm::EntityTrait;
use sinsane::db::{ChangelogDraft, LoadoutDraft, PostDraft, Store};
use sinsane::entities::users;

async fn test_store() -> Store {
    Store::new("sqlite::memory:")
        .await
        .expect("Failed to open in-memory store")
}

#[tokio::test]
async fn test_passwords_are_stored_hashed() {
    let store = test_store().await;

    let id = store.create_user("reader", "secret1").await.unwrap();

    let row = users::Entity::find_by_id(id)
        .one(&store.conn)
        .await
        .unwrap()
        .unwrap();

    assert_ne!(row.password_hash, "secret1");
    assert!(row.password_hash.starts_with("$argon2"));
    assert!(!row.is_admin);
}

#[tokio::test]
async fn test_credential_verification() {
    let store = test_store().await;
    store.create_user("reader", "secret1").await.unwrap();

    let user = store
        .verify_user_credentials("reader", "secret1")
        .await
        .unwrap();
    assert_eq!(user.map(|u| u.username), Some("reader".to_string()));

    let user = store
        .verify_user_credentials("reader", "wrong")
        .await
        .unwrap();
    assert!(user.is_none());

    let user = store
        .verify_user_credentials("nobody", "secret1")
        .await
        .unwrap();
    assert!(user.is_none());
}

#[tokio::test]
async fn test_migration_seeds_admin() {
    let store = test_store().await;

    let admin = store
        .verify_user_credentials("admin", "password")
        .await
        .unwrap()
        .expect("seeded admin missing");
    assert!(admin.is_admin);
}

#[tokio::test]
async fn test_bulk_delete_reports_matched_rows_only() {
    let store = test_store().await;

    let first = store.create_user("one", "secret1").await.unwrap();
    let second = store.create_user("two", "secret1").await.unwrap();

    let count = store
        .delete_users(&[first, second, 424_242])
        .await
        .unwrap();
    assert_eq!(count, 2);

    assert!(store.get_user_by_id(first).await.unwrap().is_none());
}

#[tokio::test]
async fn test_post_listing_orders_and_filters() {
    let store = test_store().await;

    let drafts = [
        ("old-post", "2026-01-01T00:00:00Z", true),
        ("new-post", "2026-02-01T00:00:00Z", true),
        ("hidden", "2026-03-01T00:00:00Z", false),
    ];

    for (slug, date, published) in drafts {
        store
            .create_post(&PostDraft {
                title: format!("Title {slug}"),
                slug: slug.to_string(),
                description: "desc".to_string(),
                content: "body".to_string(),
                thumbnail: None,
                date: date.to_string(),
                published,
            })
            .await
            .unwrap();
    }

    let published = store.list_posts(true, None).await.unwrap();
    assert_eq!(published.len(), 2);
    // Newest first
    assert_eq!(published[0].slug, "new-post");
    assert_eq!(published[1].slug, "old-post");

    let all = store.list_posts(false, None).await.unwrap();
    assert_eq!(all.len(), 3);

    let hits = store.list_posts(false, Some("Title new")).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].slug, "new-post");
}

#[tokio::test]
async fn test_loadout_screenshots_round_trip() {
    let store = test_store().await;

    let id = store
        .create_loadout_item(&LoadoutDraft {
            weapon_name: "AK-47".to_string(),
            skin_name: "Redline".to_string(),
            category: "Rifle".to_string(),
            side: "T".to_string(),
            description: None,
            float_value: Some("0.16".to_string()),
            stattrak: false,
            screenshots: vec!["skins/img/a.png".to_string()],
        })
        .await
        .unwrap();
    assert!(id > 0);

    let items = store.list_loadout_items().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].screenshots, vec!["skins/img/a.png".to_string()]);
}

#[tokio::test]
async fn test_changelog_updates_preserve_created_at() {
    let store = test_store().await;

    let id = store
        .create_changelog_entry(&ChangelogDraft {
            version: "1.0.0".to_string(),
            date: "2026-01-01".to_string(),
            added: Some("Initial release".to_string()),
            changed: None,
            fixed: None,
            removed: None,
        })
        .await
        .unwrap();

    let before = store.list_changelog().await.unwrap();

    let updated = store
        .update_changelog_entry(
            id,
            &ChangelogDraft {
                version: "1.0.1".to_string(),
                date: "2026-01-02".to_string(),
                added: None,
                changed: Some("Patched things".to_string()),
                fixed: None,
                removed: None,
            },
        )
        .await
        .unwrap();
    assert!(updated);

    let after = store.list_changelog().await.unwrap();
    assert_eq!(after[0].version, "1.0.1");
    assert_eq!(after[0].created_at, before[0].created_at);
}
