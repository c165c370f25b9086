use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// User document persisted in the `users` collection. The email is kept
/// unique by a store-level index; the password is stored as received.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_serializes_without_id() {
        let user = User {
            id: None,
            name: "Jo Doe".to_string(),
            email: "jo@example.com".to_string(),
            password: "hunter2".to_string(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("_id"));
        assert!(json.contains("jo@example.com"));

        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, "Jo Doe");
        assert_eq!(back.password, "hunter2");
    }
}
