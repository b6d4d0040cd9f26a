//! Async execution of `PokeClient` requests over `reqwest`.
//!
//! # Design
//! `ApiClient` pairs a `PokeClient` with a `reqwest::Client` and runs the
//! build → execute → parse sequence for each operation. It holds no mutable
//! state, so one instance (or the process-wide [`default_client`]) can be
//! shared across tasks. Nothing is sent until an operation is awaited.

use std::sync::OnceLock;

use hyper::ext::ReasonPhrase;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use crate::client::PokeClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::operation::Operation;
use crate::types::{CreateUser, InitiateConnection, SendMessage};

#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: PokeClient,
    http: reqwest::Client,
}

impl ApiClient {
    /// Client for `base_url` with the default configuration otherwise.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(ClientConfig::new(base_url))
    }

    /// Client for the base URL resolved from `POKE_API_URL` or the default.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = build_http_client(&config)?;
        Ok(Self::with_http_client(&config.base_url, http))
    }

    /// Use a caller-built `reqwest::Client`, e.g. one with custom TLS or proxy settings.
    pub fn with_http_client(base_url: &str, http: reqwest::Client) -> Self {
        Self {
            inner: PokeClient::new(base_url),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }

    /// The sans-IO builder/parser this client drives.
    pub fn requests(&self) -> &PokeClient {
        &self.inner
    }

    pub async fn create_user(&self, connection_id: &str, name: Option<&str>) -> Result<Value> {
        let input = CreateUser {
            connection_id: connection_id.to_string(),
            name: name.map(str::to_string),
        };
        let request = self.inner.build_create_user(&input)?;
        let response = self.execute(Operation::CreateUser, request).await?;
        self.inner.parse_create_user(response)
    }

    pub async fn get_user(&self, user_id: &str) -> Result<Value> {
        let request = self.inner.build_get_user(user_id);
        let response = self.execute(Operation::GetUser, request).await?;
        self.inner.parse_get_user(response)
    }

    pub async fn initiate_connection(
        &self,
        user_id: &str,
        auth_config_id: Option<&str>,
    ) -> Result<Value> {
        let input = InitiateConnection {
            user_id: user_id.to_string(),
            auth_config_id: auth_config_id.map(str::to_string),
        };
        let request = self.inner.build_initiate_connection(&input)?;
        let response = self.execute(Operation::InitiateConnection, request).await?;
        self.inner.parse_initiate_connection(response)
    }

    pub async fn check_connection_status(&self, connection_id: &str) -> Result<Value> {
        let request = self.inner.build_check_connection_status(connection_id);
        let response = self.execute(Operation::CheckConnectionStatus, request).await?;
        self.inner.parse_check_connection_status(response)
    }

    pub async fn send_message(&self, user_id: &str, content: &str) -> Result<Value> {
        let input = SendMessage {
            user_id: user_id.to_string(),
            content: content.to_string(),
        };
        let request = self.inner.build_send_message(&input)?;
        let response = self.execute(Operation::SendMessage, request).await?;
        self.inner.parse_send_message(response)
    }

    pub async fn get_message_response(&self, message_id: &str) -> Result<Value> {
        let request = self.inner.build_get_message_response(message_id);
        let response = self.execute(Operation::GetMessageResponse, request).await?;
        self.inner.parse_get_message_response(response)
    }

    pub async fn get_user_memory(&self, user_id: &str) -> Result<Value> {
        let request = self.inner.build_get_user_memory(user_id);
        let response = self.execute(Operation::GetUserMemory, request).await?;
        self.inner.parse_get_user_memory(response)
    }

    pub async fn health_check(&self) -> Result<Value> {
        let request = self.inner.build_health_check();
        let response = self.execute(Operation::HealthCheck, request).await?;
        self.inner.parse_health_check(response)
    }

    pub async fn get_user_conversations(&self, user_id: &str) -> Result<Value> {
        let request = self.inner.build_get_user_conversations(user_id);
        let response = self.execute(Operation::GetUserConversations, request).await?;
        self.inner.parse_get_user_conversations(response)
    }

    /// Send one request and collect the response as plain data.
    ///
    /// Non-2xx statuses are returned as `Ok`; only transport failures are errors.
    pub async fn execute(&self, operation: Operation, request: HttpRequest) -> Result<HttpResponse> {
        debug!(%operation, method = request.method.as_str(), url = %request.path, "sending request");

        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };
        let mut builder = self.http.request(method, &request.path);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let reason = response
            .extensions()
            .get::<ReasonPhrase>()
            .map(|reason| reason.as_bytes().to_vec());
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.text().await?;

        let response = HttpResponse {
            status: status.as_u16(),
            status_text: status_text(status, reason.as_deref()),
            headers,
            body,
        };
        if response.is_success() {
            debug!(%operation, status = response.status, "request completed");
        } else {
            warn!(%operation, status = response.status, "backend returned an error status");
        }
        Ok(response)
    }
}

/// Reason phrase as sent by the server, else the standard phrase for the
/// code, else the numeric code itself.
///
/// hyper only records a `ReasonPhrase` when the server's phrase differs from
/// the canonical one.
fn status_text(status: StatusCode, reason: Option<&[u8]>) -> String {
    match reason {
        Some(reason) if !reason.is_empty() => String::from_utf8_lossy(reason).into_owned(),
        _ => status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_u16().to_string()),
    }
}

fn build_http_client(config: &ClientConfig) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

static DEFAULT_CLIENT: OnceLock<ApiClient> = OnceLock::new();

/// Process-wide client configured from the environment, built on first use.
pub fn default_client() -> &'static ApiClient {
    DEFAULT_CLIENT.get_or_init(|| {
        let config = ClientConfig::from_env();
        let http = match build_http_client(&config) {
            Ok(http) => http,
            Err(error) => {
                warn!(%error, "configured HTTP client failed to build, using reqwest defaults");
                reqwest::Client::new()
            }
        };
        ApiClient::with_http_client(&config.base_url, http)
    })
}
