use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::{
        rejection::JsonRejection, DefaultBodyLimit, Form, FromRequest, Multipart, Request, State,
    },
    http::{header, StatusCode},
    routing::{get, post},
    Json, Router,
};
use server_api::{
    add_chef, list_admin_chefs, list_chefs, mail::SmtpMailer, relay_form, submit_form, ApiContext,
};
use shared::{
    domain::ChefRecord,
    error::{ApiError, ErrorCode},
    protocol::{
        AddChefRequest, AddChefResponse, FormFields, FormSubmission, FormSubmissionResponse,
        RelayResponse,
    },
};
use storage::ChefStore;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;

use app_state::AppState;
use config::load_settings;

type ApiFailure = (StatusCode, Json<ApiError>);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = load_settings()?;
    let mailer = SmtpMailer::new(&settings.mail).context("invalid mail settings")?;
    let store = ChefStore::seeded();
    store.health_check().await?;

    let api = ApiContext::new(store, Arc::new(mailer));
    let app = build_router(Arc::new(AppState { api }), settings.max_body_bytes);

    let addr: SocketAddr = settings
        .server_bind
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.server_bind))?;
    info!(%addr, smtp_host = %settings.mail.smtp_host, "chef api listening");
    info!("endpoints: GET /chefs, GET /admin/chefs, POST /admin/chefs, POST /send-email, POST /forms");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/chefs", get(http_list_chefs))
        .route(
            "/admin/chefs",
            get(http_list_admin_chefs).post(http_add_chef),
        )
        .route(
            "/send-email",
            post(http_send_email).fallback(method_not_allowed),
        )
        .route("/forms", post(http_submit_form))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz(State(state): State<Arc<AppState>>) -> Result<&'static str, ApiFailure> {
    state.api.store.health_check().await.map_err(|e| {
        error!(error = %e, "health check failed");
        failure(ApiError::internal("Internal server error"))
    })?;
    Ok("ok")
}

async fn http_list_chefs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ChefRecord>>, ApiFailure> {
    let chefs = list_chefs(&state.api).await.map_err(failure)?;
    Ok(Json(chefs))
}

async fn http_list_admin_chefs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ChefRecord>>, ApiFailure> {
    let chefs = list_admin_chefs(&state.api).await.map_err(failure)?;
    Ok(Json(chefs))
}

async fn http_add_chef(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AddChefRequest>, JsonRejection>,
) -> Result<Json<AddChefResponse>, ApiFailure> {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(JsonRejection::MissingJsonContentType(_)) => AddChefRequest::default(),
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "rejected chef payload");
            return Err(failure(ApiError::validation(rejection.body_text())));
        }
    };
    let response = add_chef(&state.api, req).await.map_err(failure)?;
    Ok(Json(response))
}

async fn http_send_email(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<RelayResponse>, ApiFailure> {
    let fields = read_form_fields(request).await?;
    let response = relay_form(&state.api, &fields).await.map_err(failure)?;
    Ok(Json(response))
}

async fn http_submit_form(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<FormSubmission>, JsonRejection>,
) -> Result<Json<FormSubmissionResponse>, ApiFailure> {
    let Json(submission) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "rejected form submission");
        failure(ApiError::validation(rejection.body_text()))
    })?;
    let response = submit_form(&state.api, &submission)
        .await
        .map_err(failure)?;
    Ok(Json(response))
}

async fn method_not_allowed() -> ApiFailure {
    failure(ApiError::new(
        ErrorCode::MethodNotAllowed,
        "Method not allowed",
    ))
}

async fn not_found() -> ApiFailure {
    failure(ApiError::not_found("Not found"))
}

/// Reads url-encoded or multipart form bodies. File parts are skipped.
async fn read_form_fields(request: Request) -> Result<FormFields, ApiFailure> {
    let is_multipart = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/form-data"));

    if !is_multipart {
        let Form(fields) = Form::<FormFields>::from_request(request, &())
            .await
            .map_err(|e| failure(ApiError::validation(e.body_text())))?;
        return Ok(fields);
    }

    let mut multipart = Multipart::from_request(request, &())
        .await
        .map_err(|e| failure(ApiError::validation(e.body_text())))?;
    let mut fields = FormFields::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| failure(ApiError::validation(e.body_text())))?
    {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| failure(ApiError::validation(e.body_text())))?;
        fields.0.push((name, value));
    }
    Ok(fields)
}

fn failure(err: ApiError) -> ApiFailure {
    let status = match err.code {
        ErrorCode::Validation => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(err))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
