use super::*;

fn booking_form() -> FormFields {
    FormFields::new()
        .with("name", "Priya")
        .with("email", "priya@example.com")
        .with("phone", "555-0100")
        .with("event-type", "Birthday")
        .with("date-time", "2026-11-01 19:00")
        .with("location", "San Jose")
        .with("guests", "12")
        .with("dietary", "vegan")
        .with("message", "Spicy please")
}

#[test]
fn event_type_field_marks_a_booking() {
    assert_eq!(FormKind::of(&booking_form()), FormKind::Booking);
    assert_eq!(
        FormKind::of(&FormFields::new().with("event-type", "")),
        FormKind::Booking
    );
    assert_eq!(
        FormKind::of(&FormFields::new().with("name", "Ana")),
        FormKind::Contact
    );
}

#[test]
fn booking_email_lists_every_booking_field() {
    let email = compose_relay_email(&booking_form());
    assert_eq!(email.subject, "New Chef Booking Request from Priya");
    assert!(email.body.starts_with("New Booking Request:\n\n"));
    assert!(email.body.contains("Event Type: Birthday\n"));
    assert!(email.body.contains("Date & Time: 2026-11-01 19:00\n"));
    assert!(email.body.contains("Number of Guests: 12\n"));
    assert!(email.body.ends_with("Message: Spicy please\n"));
}

#[test]
fn contact_email_puts_message_on_its_own_line() {
    let fields = FormFields::new()
        .with("email", "x@example.com")
        .with("message", "Hello there");
    let email = compose_relay_email(&fields);
    assert_eq!(email.subject, "New Contact Message from Unknown");
    assert_eq!(
        email.body,
        "New Contact Message:\n\nName: \nEmail: x@example.com\nMessage:\nHello there\n"
    );
}

#[test]
fn submission_subjects_follow_form_type() {
    assert_eq!(submission_subject("book-chef"), "Chef Requirement - Chef Services");
    assert_eq!(
        submission_subject("book-weekly"),
        "Weekly Service Requirement - Chef Services"
    );
    assert_eq!(submission_subject("contact"), "Contact Requirement - Chef Services");
    assert_eq!(submission_subject("newsletter"), "New newsletter Submission");
}

#[test]
fn submission_body_keeps_field_order() {
    let submission: FormSubmission = serde_json::from_value(serde_json::json!({
        "formType": "book-weekly",
        "data": { "name": "Ana", "meals": 5, "notes": null }
    }))
    .expect("submission");
    let email = compose_submission_email(&submission);
    assert_eq!(
        email.body,
        "New book-weekly submission:\n\nname: Ana\nmeals: 5\nnotes: \n"
    );
}
