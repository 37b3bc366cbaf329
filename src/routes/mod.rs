use axum::{
    handler::Handler,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, MethodRouter},
    Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use crate::error::ApiError;
use crate::store::PlayerStore;

pub mod health;
pub mod players;

/// Build the application router around a player store.
///
/// Every route only answers GET; HEAD, OPTIONS and every other method get a
/// JSON 405.
pub fn router(store: PlayerStore) -> Router {
    Router::new()
        // Root and health
        .route("/", get_only(index))
        .route("/health", get_only(health::health_check))

        // Player endpoints
        .route("/api/players", get_only(players::get_players))
        .route("/api/searchPlayers", get_only(players::search_players))

        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// GET route whose HEAD and fallback both answer 405. Without the explicit
/// HEAD handler axum would serve HEAD through the GET handler.
fn get_only<H, T>(handler: H) -> MethodRouter<PlayerStore>
where
    H: Handler<T, PlayerStore>,
    T: 'static,
{
    get(handler)
        .head(method_not_allowed)
        .fallback(method_not_allowed)
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn index() -> Json<Value> {
    Json(json!({
        "name": "Cricket Players API",
        "version": "v1.0",
    }))
}

/// Serialize `value` into a JSON response with `status`.
///
/// The body is fully encoded before the status line is written, so a
/// serializer failure yields a clean JSON 500 rather than an error body
/// appended to an already-sent 200.
pub fn encode_json<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(bytes) => (
            status,
            [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            bytes,
        )
            .into_response(),
        Err(err) => ApiError::from(err).into_response(),
    }
}
