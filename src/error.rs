use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input data.")]
    Validation,
    #[error("Movie with the given ID was not found.")]
    MovieNotFound,
    #[error("No movies found.")]
    NoMoviesFound,
    #[error("A movie with the name '{name}' and release date '{date}' already exists.")]
    DuplicateMovie { name: String, date: String },
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation => StatusCode::BAD_REQUEST,
            AppError::MovieNotFound | AppError::NoMoviesFound => StatusCode::NOT_FOUND,
            AppError::DuplicateMovie { .. } => StatusCode::CONFLICT,
            AppError::Db(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let detail = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
            "Internal server error.".to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
