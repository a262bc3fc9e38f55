use super::*;

use std::collections::HashSet;

#[tokio::test]
async fn fresh_store_lists_three_seeded_chefs() {
    let store = ChefStore::seeded();
    let chefs = store.list_chefs().await.expect("list");
    let ids: Vec<_> = chefs
        .iter()
        .map(|chef| chef.id.as_ref().expect("id").as_str())
        .collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(chefs[0].name, "Rajesh Kumar");
}

#[tokio::test]
async fn add_chef_appends_with_new_id() {
    let store = ChefStore::seeded();
    let before = store.list_chefs().await.expect("list");

    let id = store
        .add_chef(ChefRecord::named("Test Chef"))
        .await
        .expect("add");

    let after = store.list_chefs().await.expect("list");
    assert_eq!(after.len(), before.len() + 1);
    let last = after.last().expect("last");
    assert_eq!(last.name, "Test Chef");
    assert_eq!(last.id.as_ref(), Some(&id));
    assert!(before.iter().all(|chef| chef.id.as_ref() != Some(&id)));
}

#[tokio::test]
async fn rapid_adds_never_reuse_an_id() {
    let store = ChefStore::empty();
    let mut seen = HashSet::new();
    for n in 0..50 {
        let id = store
            .add_chef(ChefRecord::named(format!("chef {n}")))
            .await
            .expect("add");
        assert!(seen.insert(id), "id issued twice");
    }
    assert_eq!(store.len().await, 50);
}

#[tokio::test]
async fn supplied_id_is_replaced() {
    let store = ChefStore::empty();
    let id = store
        .add_chef(ChefRecord::named("Ana").with_id("1"))
        .await
        .expect("add");
    assert_ne!(id.as_str(), "1");
}

#[tokio::test]
async fn clones_share_the_same_list() {
    let store = ChefStore::empty();
    let handle = store.clone();
    handle
        .add_chef(ChefRecord::named("Shared"))
        .await
        .expect("add");
    assert_eq!(store.len().await, 1);
    assert!(!store.is_empty().await);
    store.health_check().await.expect("health");
}

#[test]
fn id_clock_bumps_when_time_stalls() {
    assert_eq!(next_id_millis(1_000, 0), 1_000);
    assert_eq!(next_id_millis(1_000, 1_000), 1_001);
    assert_eq!(next_id_millis(999, 1_005), 1_006);
}
