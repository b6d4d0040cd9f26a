//! Request payloads for the Poke backend.
//!
//! # Design
//! Only request bodies are typed. Responses are returned as
//! `serde_json::Value` because the backend publishes no response contract.
//! Optional fields are skipped when `None`, so they are absent from the JSON
//! rather than sent as `null`.

use serde::{Deserialize, Serialize};

/// Body of `POST /users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateUser {
    pub connection_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Body of `POST /connections/initiate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InitiateConnection {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_config_id: Option<String>,
}

/// Body of `POST /messages`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendMessage {
    pub user_id: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_user_omits_missing_name() {
        let input = CreateUser {
            connection_id: "conn-1".to_string(),
            name: None,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json, serde_json::json!({ "connection_id": "conn-1" }));
    }

    #[test]
    fn initiate_connection_keeps_auth_config_when_present() {
        let input = InitiateConnection {
            user_id: "u1".to_string(),
            auth_config_id: Some("ac_123".to_string()),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["user_id"], "u1");
        assert_eq!(json["auth_config_id"], "ac_123");
    }

    #[test]
    fn send_message_field_names_are_snake_case() {
        let input = SendMessage {
            user_id: "u1".to_string(),
            content: "hello".to_string(),
        };
        let json = serde_json::to_string(&input).unwrap();
        assert_eq!(json, r#"{"user_id":"u1","content":"hello"}"#);
    }
}
