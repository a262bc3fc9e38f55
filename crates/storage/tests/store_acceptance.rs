use shared::domain::ChefRecord;
use storage::ChefStore;

#[tokio::test]
async fn adding_a_chef_grows_the_listing_by_exactly_one() {
    let store = ChefStore::seeded();
    let before = store.list_chefs().await.expect("list").len();
    assert_eq!(before, 3);

    let record: ChefRecord =
        serde_json::from_value(serde_json::json!({ "name": "Test Chef" })).expect("record");
    let id = store.add_chef(record).await.expect("add");

    let chefs = store.list_chefs().await.expect("list");
    assert_eq!(chefs.len(), before + 1);
    assert!(chefs
        .iter()
        .any(|chef| chef.name == "Test Chef" && chef.id.as_ref() == Some(&id)));
    assert_eq!(chefs[0].name, "Rajesh Kumar");
}
