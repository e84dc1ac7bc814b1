use crate::application::user_service::UserService;
use crate::domain::error::DomainError;
use crate::domain::user::{UserLookup, UserQuery};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, web};
use chrono::Utc;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

pub struct AppState {
    pub users: UserService,
}

// Every API error renders as {"error": "<message>"}
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_msg = self.to_string();

        match self {
            ApiError::BadRequest(_) => warn!(error = %error_msg, status = %status, "Bad request"),
            ApiError::NotFound(_) => warn!(error = %error_msg, status = %status, "Resource not found"),
            ApiError::Internal(_) => error!(error = %error_msg, status = %status, "Internal error"),
        }

        HttpResponse::build(status).json(ErrorResponse { error: error_msg })
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast_ref::<DomainError>() {
            Some(DomainError::UserNotFound) => {
                ApiError::NotFound(DomainError::UserNotFound.to_string())
            }
            Some(DomainError::MissingQuery) => {
                ApiError::BadRequest(DomainError::MissingQuery.to_string())
            }
            Some(DomainError::Storage(msg)) => ApiError::Internal(msg.clone()),
            None => ApiError::Internal(err.to_string()),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    timestamp: String,
}

#[instrument]
pub async fn health_check() -> HttpResponse {
    info!("Health check requested");
    let response = HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    };
    HttpResponse::Ok().json(response)
}

#[instrument(skip(state))]
pub async fn list_users(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let users = state.users.list_users().await?;
    info!(count = users.len(), "Listed users");
    Ok(HttpResponse::Ok().json(users))
}

#[instrument(skip(state, pairs), fields(id, name))]
pub async fn filter_users(
    state: web::Data<AppState>,
    pairs: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, ApiError> {
    let query = UserQuery::from_pairs(pairs.into_inner());
    tracing::Span::current()
        .record("id", query.id())
        .record("name", query.name());
    let lookup = state.users.find_users(&query).await?;
    match &lookup {
        UserLookup::One(user) => info!(user_id = %user.user_id, "User found by id"),
        UserLookup::Many(users) => info!(matches = users.len(), "Users matched by name"),
    }
    Ok(HttpResponse::Ok().json(lookup))
}
