//! Stateless HTTP request builder and response parser for the Poke backend.
//!
//! # Design
//! `PokeClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Every successful body is returned as untyped JSON; every non-2xx status
//! becomes `ApiError::Request` labelled with the operation.

use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::operation::Operation;
use crate::types::{CreateUser, InitiateConnection, SendMessage};

/// Synchronous, stateless client for the Poke backend.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokeClient {
    base_url: String,
}

impl PokeClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_create_user(&self, input: &CreateUser) -> Result<HttpRequest> {
        self.post("/users", input)
    }

    pub fn build_get_user(&self, user_id: &str) -> HttpRequest {
        self.get(&format!("/users/{user_id}"))
    }

    pub fn build_initiate_connection(&self, input: &InitiateConnection) -> Result<HttpRequest> {
        self.post("/connections/initiate", input)
    }

    pub fn build_check_connection_status(&self, connection_id: &str) -> HttpRequest {
        self.get(&format!("/connections/{connection_id}/status"))
    }

    pub fn build_send_message(&self, input: &SendMessage) -> Result<HttpRequest> {
        self.post("/messages", input)
    }

    pub fn build_get_message_response(&self, message_id: &str) -> HttpRequest {
        self.get(&format!("/messages/{message_id}/response"))
    }

    pub fn build_get_user_memory(&self, user_id: &str) -> HttpRequest {
        self.get(&format!("/users/{user_id}/memory"))
    }

    pub fn build_health_check(&self) -> HttpRequest {
        self.get("/health")
    }

    pub fn build_get_user_conversations(&self, user_id: &str) -> HttpRequest {
        self.get(&format!("/users/{user_id}/conversations"))
    }

    pub fn parse_create_user(&self, response: HttpResponse) -> Result<Value> {
        parse_response(Operation::CreateUser, response)
    }

    pub fn parse_get_user(&self, response: HttpResponse) -> Result<Value> {
        parse_response(Operation::GetUser, response)
    }

    pub fn parse_initiate_connection(&self, response: HttpResponse) -> Result<Value> {
        parse_response(Operation::InitiateConnection, response)
    }

    pub fn parse_check_connection_status(&self, response: HttpResponse) -> Result<Value> {
        parse_response(Operation::CheckConnectionStatus, response)
    }

    pub fn parse_send_message(&self, response: HttpResponse) -> Result<Value> {
        parse_response(Operation::SendMessage, response)
    }

    pub fn parse_get_message_response(&self, response: HttpResponse) -> Result<Value> {
        parse_response(Operation::GetMessageResponse, response)
    }

    pub fn parse_get_user_memory(&self, response: HttpResponse) -> Result<Value> {
        parse_response(Operation::GetUserMemory, response)
    }

    pub fn parse_health_check(&self, response: HttpResponse) -> Result<Value> {
        parse_response(Operation::HealthCheck, response)
    }

    pub fn parse_get_user_conversations(&self, response: HttpResponse) -> Result<Value> {
        parse_response(Operation::GetUserConversations, response)
    }

    fn get(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn post<T: Serialize>(&self, path: &str, input: &T) -> Result<HttpRequest> {
        let body = serde_json::to_string(input).map_err(ApiError::Serialization)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}{path}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

/// Check the status and decode the body as JSON.
///
/// Any 2xx is accepted. The error body of a failed response is ignored.
pub fn parse_response(operation: Operation, response: HttpResponse) -> Result<Value> {
    if !response.is_success() {
        return Err(ApiError::Request {
            operation,
            status: response.status,
            status_text: response.status_text,
        });
    }
    serde_json::from_str(&response.body).map_err(ApiError::Deserialization)
}
