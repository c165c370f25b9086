//! Client wrappers for the auth API endpoints. Route code stays free of
//! request plumbing; both calls share the JSON helper's timeout policy.

use crate::app_lib::{post_json, AppError};
use crate::features::auth::types::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};

/// Creates a new user record and returns the status envelope.
pub async fn register(request: &RegisterRequest) -> Result<RegisterResponse, AppError> {
    post_json("/api/register", request).await
}

/// Checks the submitted credentials and returns the status envelope.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, AppError> {
    post_json("/api/login", request).await
}
