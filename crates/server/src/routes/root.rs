use axum::Json;

use crate::dtos::greeting::GreetingResponse;

/// Greeting returned to every caller, fixed at build time
const GREETING: &str = "Hello, Backend!";

/// Returns the static JSON greeting
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting returned successfully", body = GreetingResponse)
    ),
    tag = ""
)]
pub async fn root() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        message: GREETING.to_string(),
    })
}
