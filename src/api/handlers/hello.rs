//! Handler for the greeting endpoint.

use axum::extract::State;

use crate::state::AppState;

/// Returns the fixed greeting as plain text.
///
/// # Endpoint
///
/// `GET /api/hello`
pub async fn hello_handler(State(state): State<AppState>) -> &'static str {
    state.greeting_service.greet()
}
