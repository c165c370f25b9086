use crate::database::MongoDB;
use crate::models::User;
use crate::utils::AppError;
use mongodb::bson::doc;
use serde::{Deserialize, Serialize};

// Request/Response structures
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Status envelope for `/api/register`. `error` is only present on the
/// error branch.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegisterResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Status envelope for `/api/login`. `user` reports whether a matching
/// record was found.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginResponse {
    pub status: String,
    pub user: bool,
}

// User registration: a single insert. Email uniqueness comes from the
// store index, so a duplicate surfaces here as a write error.
pub async fn register(db: &MongoDB, request: &RegisterRequest) -> Result<(), AppError> {
    let collection = db.collection::<User>("users");

    let new_user = User {
        id: None,
        name: request.name.clone(),
        email: request.email.clone(),
        password: request.password.clone(),
    };

    collection
        .insert_one(&new_user)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    log::info!("✅ User registered: {}", request.email);

    Ok(())
}

// User login: exact match on email and password. Returns whether a record
// was found; a miss is not an error.
pub async fn login(db: &MongoDB, request: &LoginRequest) -> Result<bool, AppError> {
    let collection = db.collection::<User>("users");

    let filter = doc! {
        "email": &request.email,
        "password": &request.password,
    };

    let user = collection
        .find_one(filter)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(user.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_response_omits_error_on_ok() {
        let response = RegisterResponse {
            status: "ok".to_string(),
            error: None,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"status":"ok"}"#);
    }

    #[test]
    fn test_register_response_includes_error() {
        let response = RegisterResponse {
            status: "error".to_string(),
            error: Some("Duplicate email".to_string()),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"status":"error","error":"Duplicate email"}"#);
    }

    #[test]
    fn test_login_response_always_carries_user_flag() {
        let response = LoginResponse {
            status: "error".to_string(),
            user: false,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"status":"error","user":false}"#);
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_register_then_login() {
        dotenv::dotenv().ok();

        let db = MongoDB::new("mongodb://localhost:27017/user_auth_test")
            .await
            .unwrap();

        let email = format!(
            "roundtrip-{}@example.com",
            mongodb::bson::oid::ObjectId::new().to_hex()
        );

        let register_request = RegisterRequest {
            name: "Roundtrip".to_string(),
            email: email.clone(),
            password: "secret".to_string(),
        };
        register(&db, &register_request).await.unwrap();

        // Duplicate registration must fail at the store
        let duplicate = register(&db, &register_request).await;
        assert!(duplicate.is_err());

        // Matching credentials
        let found = login(
            &db,
            &LoginRequest {
                email: email.clone(),
                password: "secret".to_string(),
            },
        )
        .await
        .unwrap();
        assert!(found);

        // Wrong password
        let missed = login(
            &db,
            &LoginRequest {
                email,
                password: "wrong".to_string(),
            },
        )
        .await
        .unwrap();
        assert!(!missed);
    }
}
