//! Request and response types for the auth API calls. Both endpoints answer
//! with a `{status, ...}` envelope; the fields here mirror it exactly.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub status: String,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub status: String,
    pub user: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_response_deserialization() {
        let ok: RegisterResponse = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert_eq!(ok.status, "ok");
        assert!(ok.error.is_none());

        let err: RegisterResponse =
            serde_json::from_str(r#"{"status":"error","error":"Duplicate email"}"#).unwrap();
        assert_eq!(err.status, "error");
        assert_eq!(err.error.as_deref(), Some("Duplicate email"));
    }

    #[test]
    fn test_login_response_deserialization() {
        let found: LoginResponse =
            serde_json::from_str(r#"{"status":"ok","user":true}"#).unwrap();
        assert_eq!(found.status, "ok");
        assert!(found.user);

        let missed: LoginResponse =
            serde_json::from_str(r#"{"status":"error","user":false}"#).unwrap();
        assert!(!missed.user);
    }
}
