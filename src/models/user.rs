use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Body of `POST /users`. Absent fields echo back as empty strings.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

/// A user as returned by `POST /users`. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl User {
    pub fn from_request(request: CreateUserRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let request: CreateUserRequest = serde_json::from_str(r#"{"first_name":"Ada"}"#).unwrap();
        assert_eq!(request.first_name, "Ada");
        assert!(request.last_name.is_empty());
        assert!(request.email.is_empty());
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        let result = serde_json::from_str::<CreateUserRequest>(r#"{"first_name":42}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_request_assigns_canonical_uuid() {
        let user = User::from_request(CreateUserRequest {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
        });

        let parsed = Uuid::parse_str(&user.id).unwrap();
        assert_eq!(parsed.to_string(), user.id);
        assert_eq!(user.last_name, "Lovelace");
    }
}
