use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use crate::models::ErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Method not allowed. Only GET requests are supported.")]
    MethodNotAllowed,

    #[error("No players found in the database.")]
    EmptyStore,

    #[error("Search query is required. Use 'q' for general search, or 'name'/'role' for specific search.")]
    MissingQuery,

    #[error("'{term}' is a role, not a player name. Use '?q={term}' or '?role={term}' to search by role.")]
    RoleAsName { term: String },

    #[error("{0}")]
    NoResults(String),

    #[error("Internal server error while processing request.")]
    Encoding(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::EmptyStore | ApiError::NoResults(_) => StatusCode::NOT_FOUND,
            ApiError::MissingQuery | ApiError::RoleAsName { .. } => StatusCode::BAD_REQUEST,
            ApiError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            ApiError::RoleAsName { term } => Some(format!(
                "Try: /api/searchPlayers?q={term} or /api/searchPlayers?role={term}"
            )),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let ApiError::Encoding(err) = &self {
            tracing::error!("Error encoding response to JSON: {}", err);
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
            suggestion: self.suggestion(),
        });

        (status, body).into_response()
    }
}
