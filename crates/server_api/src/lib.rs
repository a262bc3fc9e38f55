use std::sync::Arc;

use shared::{
    domain::{ChefRecord, SubmissionId},
    error::ApiError,
    protocol::{
        AddChefRequest, AddChefResponse, FormFields, FormSubmission, FormSubmissionResponse,
        RelayResponse,
    },
};
use storage::ChefStore;
use tracing::{error, info};

pub mod mail;
pub mod notify;

use mail::{MailError, Mailer, OutboundEmail};
use notify::{compose_relay_email, compose_submission_email, FormKind};

#[derive(Clone)]
pub struct ApiContext {
    pub store: ChefStore,
    pub mailer: Arc<dyn Mailer>,
}

impl ApiContext {
    pub fn new(store: ChefStore, mailer: Arc<dyn Mailer>) -> Self {
        Self { store, mailer }
    }
}

pub async fn list_chefs(ctx: &ApiContext) -> Result<Vec<ChefRecord>, ApiError> {
    ctx.store.list_chefs().await.map_err(internal)
}

/// Same data as [`list_chefs`]; the admin listing applies no extra access
/// control or field selection.
pub async fn list_admin_chefs(ctx: &ApiContext) -> Result<Vec<ChefRecord>, ApiError> {
    list_chefs(ctx).await
}

pub async fn add_chef(ctx: &ApiContext, req: AddChefRequest) -> Result<AddChefResponse, ApiError> {
    let Some(record) = req.chef_data else {
        return Err(ApiError::validation("Missing chef data"));
    };
    let chef_id = ctx.store.add_chef(record).await.map_err(internal)?;
    Ok(AddChefResponse {
        message: "Chef added successfully".to_string(),
        chef_id,
    })
}

/// Relays a url-encoded contact or booking form as an email.
pub async fn relay_form(ctx: &ApiContext, fields: &FormFields) -> Result<RelayResponse, ApiError> {
    let submission_id = SubmissionId::generate();
    let kind = FormKind::of(fields);
    let email = compose_relay_email(fields);

    deliver(ctx, &email).await?;
    info!(%submission_id, ?kind, "form relayed");
    Ok(RelayResponse {
        success: true,
        message: Some("Email sent successfully".to_string()),
        error: None,
        submission_id: Some(submission_id),
    })
}

pub async fn submit_form(
    ctx: &ApiContext,
    submission: &FormSubmission,
) -> Result<FormSubmissionResponse, ApiError> {
    let submission_id = SubmissionId::generate();
    let email = compose_submission_email(submission);

    deliver(ctx, &email).await?;
    info!(%submission_id, form_type = %submission.form_type, "form submitted");
    Ok(FormSubmissionResponse {
        message: "Form submitted successfully".to_string(),
        submission_id,
    })
}

async fn deliver(ctx: &ApiContext, email: &OutboundEmail) -> Result<(), ApiError> {
    ctx.mailer.send(email).await.map_err(|e: MailError| {
        error!(error = %e, subject = %email.subject, "failed to send email");
        ApiError::internal(format!("Failed to send email: {e}"))
    })
}

fn internal(err: anyhow::Error) -> ApiError {
    error!(error = %err, "chef store operation failed");
    ApiError::internal("Internal server error")
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
