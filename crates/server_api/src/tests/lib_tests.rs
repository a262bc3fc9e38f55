use super::*;
use crate::mail::RecordingMailer;
use shared::error::ErrorCode;

fn setup() -> (ApiContext, Arc<RecordingMailer>) {
    let mailer = Arc::new(RecordingMailer::new());
    (ApiContext::new(ChefStore::seeded(), mailer.clone()), mailer)
}

#[tokio::test]
async fn public_and_admin_listings_match() {
    let (ctx, _) = setup();
    let public = list_chefs(&ctx).await.expect("public");
    let admin = list_admin_chefs(&ctx).await.expect("admin");
    assert_eq!(public, admin);
    assert_eq!(public.len(), 3);
}

#[tokio::test]
async fn add_chef_without_payload_is_a_validation_error() {
    let (ctx, _) = setup();
    let err = add_chef(&ctx, AddChefRequest::default())
        .await
        .expect_err("should fail");
    assert!(matches!(err.code, ErrorCode::Validation));
    assert_eq!(err.message, "Missing chef data");
    assert_eq!(ctx.store.len().await, 3);
}

#[tokio::test]
async fn add_chef_appends_and_reports_new_id() {
    let (ctx, _) = setup();
    let response = add_chef(
        &ctx,
        AddChefRequest {
            chef_data: Some(ChefRecord::named("Test Chef")),
        },
    )
    .await
    .expect("add");
    assert_eq!(response.message, "Chef added successfully");

    let chefs = list_chefs(&ctx).await.expect("list");
    assert_eq!(chefs.len(), 4);
    assert_eq!(chefs[3].id.as_ref(), Some(&response.chef_id));
}

#[tokio::test]
async fn relay_form_sends_booking_email() {
    let (ctx, mailer) = setup();
    let fields = FormFields::new()
        .with("name", "Priya")
        .with("event-type", "Dinner");
    let response = relay_form(&ctx, &fields).await.expect("relay");
    assert!(response.success);
    assert!(response.submission_id.is_some());

    let sent = mailer.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "New Chef Booking Request from Priya");
}

#[tokio::test]
async fn relay_failure_carries_mailer_reason() {
    let ctx = ApiContext::new(
        ChefStore::seeded(),
        Arc::new(RecordingMailer::failing("connection refused")),
    );
    let err = relay_form(&ctx, &FormFields::new().with("name", "Ana"))
        .await
        .expect_err("should fail");
    assert!(matches!(err.code, ErrorCode::Internal));
    assert_eq!(err.message, "Failed to send email: connection refused");
}

#[tokio::test]
async fn typed_submission_uses_form_type_subject() {
    let (ctx, mailer) = setup();
    let submission: FormSubmission = serde_json::from_value(serde_json::json!({
        "formType": "book-chef",
        "data": { "name": "Ana" }
    }))
    .expect("submission");
    let response = submit_form(&ctx, &submission).await.expect("submit");
    assert_eq!(response.message, "Form submitted successfully");
    assert_eq!(
        mailer.sent().await[0].subject,
        "Chef Requirement - Chef Services"
    );
}
