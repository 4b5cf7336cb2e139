use crate::routes::root;
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(root::root),
    info(
        title = "Greeting API",
        version = "1.0.0",
        description = "Static greeting backend",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
