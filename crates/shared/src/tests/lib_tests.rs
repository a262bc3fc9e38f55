use crate::{
    domain::{ChefId, ChefRecord},
    error::{ApiError, ErrorCode},
    protocol::{AddChefRequest, FormFields, FormSubmission},
};

#[test]
fn partial_chef_payload_defaults_missing_fields() {
    let record: ChefRecord =
        serde_json::from_value(serde_json::json!({ "name": "Test Chef" })).expect("record");
    assert_eq!(record.name, "Test Chef");
    assert!(record.id.is_none());
    assert!(record.rating.is_none());
    assert!(record.dietary_tags.is_empty());
}

#[test]
fn chef_id_accepts_id_alias_and_serializes_as_chef_id() {
    let record: ChefRecord =
        serde_json::from_value(serde_json::json!({ "id": "42", "name": "Ana" })).expect("record");
    assert_eq!(record.id, Some(ChefId::new("42")));

    let value = serde_json::to_value(&record).expect("json");
    assert_eq!(value["chefId"], "42");
    assert!(value.get("id").is_none());
}

#[test]
fn unknown_chef_fields_survive_a_round_trip() {
    let record: ChefRecord = serde_json::from_value(serde_json::json!({
        "chefId": "7",
        "name": "Ana",
        "yearsExperience": 12
    }))
    .expect("record");
    let value = serde_json::to_value(&record).expect("json");
    assert_eq!(value["yearsExperience"], 12);
}

#[test]
fn camel_case_fields_map_onto_record() {
    let record: ChefRecord = serde_json::from_value(serde_json::json!({
        "chefId": "1",
        "imageUrl": "images/chef1.jpg",
        "dietaryTags": ["Vegan", "Keto"],
        "reviewCount": 45,
        "pricing": [{ "type": "Dinner Service", "price": "$85/hour", "note": "Minimum 2 hours" }],
        "menuOptions": { "Dinner": ["Curry"] }
    }))
    .expect("record");
    assert_eq!(record.image_url.as_deref(), Some("images/chef1.jpg"));
    assert_eq!(record.dietary_line(), "Vegan,Keto");
    assert_eq!(record.review_count, Some(45));
    assert_eq!(record.pricing[0].kind, "Dinner Service");
    assert_eq!(record.menu_options["Dinner"], vec!["Curry".to_string()]);
    assert!(record.extra.is_empty());
}

#[test]
fn null_chef_data_is_treated_as_missing() {
    let request: AddChefRequest =
        serde_json::from_value(serde_json::json!({ "chefData": null })).expect("request");
    assert!(request.chef_data.is_none());

    let request: AddChefRequest = serde_json::from_value(serde_json::json!({})).expect("request");
    assert!(request.chef_data.is_none());
}

#[test]
fn api_error_body_uses_error_key() {
    let value = serde_json::to_value(ApiError::validation("Missing chef data")).expect("json");
    assert_eq!(value["error"], "Missing chef data");
    assert_eq!(value["code"], "validation");
}

#[test]
fn form_submission_defaults_to_general_type() {
    let submission: FormSubmission =
        serde_json::from_value(serde_json::json!({ "data": { "name": "Ana" } })).expect("form");
    assert_eq!(submission.form_type, "general");
    assert_eq!(submission.data["name"], "Ana");
    assert!(matches!(
        ApiError::internal("boom").code,
        ErrorCode::Internal
    ));
}

#[test]
fn null_fields_read_as_empty_values() {
    let record: ChefRecord = serde_json::from_value(serde_json::json!({
        "name": "NoTags",
        "location": null,
        "dietaryTags": null,
        "specialties": null,
        "menuOptions": null,
        "pricing": null,
        "reviews": [{ "reviewer": null, "stars": "★★★★★", "text": "Great" }],
        "rating": null,
        "reviewCount": null
    }))
    .expect("record");
    assert_eq!(record.location, "");
    assert!(record.dietary_tags.is_empty());
    assert!(record.specialties.is_empty());
    assert!(record.menu_options.is_empty());
    assert!(record.pricing.is_empty());
    assert_eq!(record.reviews[0].reviewer, "");
    assert!(record.rating.is_none());
    assert!(record.review_count.is_none());
}

#[test]
fn loose_numbers_are_accepted() {
    let record: ChefRecord = serde_json::from_value(serde_json::json!({
        "chefId": 1700000000000u64,
        "rating": "4.7",
        "reviewCount": 12.0
    }))
    .expect("record");
    assert_eq!(record.id, Some(ChefId::new("1700000000000")));
    assert_eq!(record.rating, Some(4.7));
    assert_eq!(record.review_count, Some(12));

    let record: ChefRecord =
        serde_json::from_value(serde_json::json!({ "reviewCount": -3 })).expect("record");
    assert!(record.review_count.is_none());
}

#[test]
fn chef_id_wins_over_id_and_id_is_kept() {
    let record: ChefRecord =
        serde_json::from_str(r#"{"id":"x","chefId":"y","name":"T"}"#).expect("record");
    assert_eq!(record.id, Some(ChefId::new("y")));
    assert_eq!(record.extra["id"], "x");

    let value = serde_json::to_value(&record).expect("json");
    assert_eq!(value["chefId"], "y");
    assert_eq!(value["id"], "x");
    let again: ChefRecord = serde_json::from_value(value).expect("record");
    assert_eq!(again, record);
}

#[test]
fn repeated_form_field_keeps_last_value() {
    let fields = FormFields::new()
        .with("name", "First")
        .with("email", "a@example.com")
        .with("name", "Second");
    assert_eq!(fields.get("name"), Some("Second"));
    assert!(fields.contains("email"));
    assert_eq!(fields.get("phone"), None);
}
