use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Auth Service API",
        version = "1.0.0",
        description = "Registration and login endpoints backed by a MongoDB user collection. Both endpoints answer with a `{status, ...}` JSON envelope."
    ),
    paths(
        // Auth endpoints
        crate::api::auth::register,
        crate::api::auth::login,

        // Health
        crate::api::health::health_check,
    ),
    components(
        schemas(
            // Auth
            crate::services::user_service::RegisterRequest,
            crate::services::user_service::LoginRequest,
            crate::services::user_service::RegisterResponse,
            crate::services::user_service::LoginResponse,

            // Health
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Auth", description = "User registration and login. No tokens are issued; responses are plain status envelopes."),
        (name = "Health", description = "Health check endpoint for monitoring service status."),
    )
)]
pub struct ApiDoc;
