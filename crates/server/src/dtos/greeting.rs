use serde::Serialize;
use utoipa::ToSchema;

/// Body returned by the root endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct GreetingResponse {
    pub message: String,
}
