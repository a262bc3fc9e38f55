use std::fmt::Write as _;

use serde_json::Value;
use shared::protocol::{FormFields, FormSubmission};

use crate::mail::OutboundEmail;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Booking,
    Contact,
}

impl FormKind {
    /// A form carrying an `event-type` field, even an empty one, is a booking.
    pub fn of(fields: &FormFields) -> Self {
        if fields.contains("event-type") {
            Self::Booking
        } else {
            Self::Contact
        }
    }
}

const BOOKING_FIELDS: &[(&str, &str)] = &[
    ("Name", "name"),
    ("Email", "email"),
    ("Phone", "phone"),
    ("Event Type", "event-type"),
    ("Date & Time", "date-time"),
    ("Location", "location"),
    ("Number of Guests", "guests"),
    ("Dietary Preferences", "dietary"),
    ("Message", "message"),
];

pub fn compose_relay_email(fields: &FormFields) -> OutboundEmail {
    let field = |name: &str| fields.get(name).unwrap_or_default();
    let sender = fields.get("name").unwrap_or("Unknown");

    match FormKind::of(fields) {
        FormKind::Booking => {
            let mut body = String::from("New Booking Request:\n\n");
            for (label, name) in BOOKING_FIELDS {
                let _ = writeln!(body, "{label}: {}", field(name));
            }
            OutboundEmail {
                subject: format!("New Chef Booking Request from {sender}"),
                body,
            }
        }
        FormKind::Contact => {
            let mut body = String::from("New Contact Message:\n\n");
            let _ = writeln!(body, "Name: {}", field("name"));
            let _ = writeln!(body, "Email: {}", field("email"));
            let _ = writeln!(body, "Message:\n{}", field("message"));
            OutboundEmail {
                subject: format!("New Contact Message from {sender}"),
                body,
            }
        }
    }
}

pub fn submission_subject(form_type: &str) -> String {
    match form_type {
        "book-chef" => "Chef Requirement - Chef Services".to_string(),
        "book-weekly" => "Weekly Service Requirement - Chef Services".to_string(),
        "contact" => "Contact Requirement - Chef Services".to_string(),
        other => format!("New {other} Submission"),
    }
}

pub fn compose_submission_email(submission: &FormSubmission) -> OutboundEmail {
    let mut body = format!("New {} submission:\n\n", submission.form_type);
    for (key, value) in &submission.data {
        let _ = writeln!(body, "{key}: {}", display_value(value));
    }
    OutboundEmail {
        subject: submission_subject(&submission.form_type),
        body,
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/notify_tests.rs"]
mod tests;
