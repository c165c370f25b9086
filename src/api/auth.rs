use crate::database::MongoDB;
use crate::services::user_service;
use crate::services::user_service::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};
use actix_web::{web, HttpResponse};

#[utoipa::path(
    post,
    path = "/api/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Status envelope; error branch reports a duplicate email", body = RegisterResponse)
    )
)]
pub async fn register(
    db: web::Data<MongoDB>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse {
    log::info!("📝 POST /api/register - email: {}", request.email);

    match user_service::register(&db, &request).await {
        Ok(()) => HttpResponse::Ok().json(RegisterResponse {
            status: "ok".to_string(),
            error: None,
        }),
        Err(e) => {
            // Original detail stays in the log; the client only learns that
            // the email was already taken.
            log::warn!("❌ Registration failed: {} - {}", request.email, e);
            HttpResponse::Ok().json(RegisterResponse {
                status: "error".to_string(),
                error: Some("Duplicate email".to_string()),
            })
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Status envelope; `user` reports whether a record matched", body = LoginResponse)
    )
)]
pub async fn login(db: web::Data<MongoDB>, request: web::Json<LoginRequest>) -> HttpResponse {
    log::info!("🔐 POST /api/login - email: {}", request.email);

    match user_service::login(&db, &request).await {
        Ok(true) => {
            log::info!("✅ Login successful: {}", request.email);
            HttpResponse::Ok().json(LoginResponse {
                status: "ok".to_string(),
                user: true,
            })
        }
        Ok(false) => {
            log::warn!("❌ Login failed: {}", request.email);
            HttpResponse::Ok().json(LoginResponse {
                status: "error".to_string(),
                user: false,
            })
        }
        Err(e) => {
            // No separate error class for login; a store failure reads as a
            // miss to the client.
            log::error!("❌ Login lookup error: {} - {}", request.email, e);
            HttpResponse::Ok().json(LoginResponse {
                status: "error".to_string(),
                user: false,
            })
        }
    }
}
