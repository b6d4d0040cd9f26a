use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub connection_id: String,
    pub name: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversationTurn {
    pub message_id: String,
    pub content: String,
    pub response: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserMemory {
    pub user_id: String,
    pub conversation_history: Vec<ConversationTurn>,
}

impl UserMemory {
    fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            conversation_history: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageRecord {
    pub message_id: String,
    pub user_id: String,
    pub status: String,
    pub response: String,
}

#[derive(Deserialize)]
pub struct CreateUser {
    pub connection_id: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct InitiateConnection {
    pub user_id: String,
    #[serde(default)]
    pub auth_config_id: Option<String>,
}

#[derive(Deserialize)]
pub struct SendMessage {
    pub user_id: String,
    pub content: String,
}

#[derive(Default)]
pub struct Store {
    users: HashMap<String, User>,
    memories: HashMap<String, UserMemory>,
    connections: HashMap<String, String>,
    messages: HashMap<String, MessageRecord>,
}

pub type Db = Arc<RwLock<Store>>;

/// Error response in the backend's `{"detail": ...}` shape.
#[derive(Debug)]
pub struct ApiFailure {
    status: StatusCode,
    detail: &'static str,
}

impl ApiFailure {
    fn not_found(detail: &'static str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            detail,
        }
    }

    fn internal(detail: &'static str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail,
        }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/health", get(health_check))
        .route("/users", post(create_user))
        .route("/users/{user_id}", get(get_user))
        .route("/users/{user_id}/memory", get(get_user_memory))
        .route("/users/{user_id}/conversations", get(get_user_conversations))
        .route("/connections/initiate", post(initiate_connection))
        .route("/connections/{connection_id}/status", get(check_connection_status))
        .route("/messages", post(send_message))
        .route("/messages/{message_id}/response", get(get_message_response))
        .with_state(db)
}

/// Router that answers every request, on any path, with `status` and `body`.
pub fn canned_app(status: StatusCode, body: Value) -> Router {
    Router::new().fallback(move || async move { (status, Json(body)) })
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_router(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn create_user(State(db): State<Db>, Json(input): Json<CreateUser>) -> Json<Value> {
    let user = User {
        connection_id: input.connection_id,
        name: input.name,
    };
    info!(user_id = %user.connection_id, "user created");
    let user_id = user.connection_id.clone();
    db.write().await.users.insert(user_id.clone(), user);
    Json(json!({ "user_id": user_id }))
}

async fn get_user(
    State(db): State<Db>,
    Path(user_id): Path<String>,
) -> Result<Json<User>, ApiFailure> {
    let store = db.read().await;
    store
        .users
        .get(&user_id)
        .cloned()
        .map(Json)
        .ok_or(ApiFailure::not_found("User not found"))
}

async fn initiate_connection(
    State(db): State<Db>,
    Json(input): Json<InitiateConnection>,
) -> Json<Value> {
    let connection_id = Uuid::new_v4().to_string();
    let redirect_url = match &input.auth_config_id {
        Some(auth_config_id) => {
            format!("http://localhost/oauth/{auth_config_id}/authorize?connection={connection_id}")
        }
        None => format!("http://localhost/oauth/authorize?connection={connection_id}"),
    };
    info!(user_id = %input.user_id, %connection_id, "connection initiated");
    db.write()
        .await
        .connections
        .insert(connection_id.clone(), input.user_id);
    Json(json!({ "connection_id": connection_id, "redirect_url": redirect_url }))
}

async fn check_connection_status(
    State(db): State<Db>,
    Path(connection_id): Path<String>,
) -> Result<Json<Value>, ApiFailure> {
    let store = db.read().await;
    if !store.connections.contains_key(&connection_id) {
        return Err(ApiFailure::internal("Unable to check connection status"));
    }
    Ok(Json(json!({ "status": "INITIATED", "connection_id": connection_id })))
}

async fn send_message(
    State(db): State<Db>,
    Json(input): Json<SendMessage>,
) -> Result<Json<Value>, ApiFailure> {
    let mut store = db.write().await;
    if !store.users.contains_key(&input.user_id) {
        return Err(ApiFailure::not_found("User not found"));
    }

    let message_id = Uuid::new_v4().to_string();
    let response = format!("Received: {}", input.content);
    store
        .memories
        .entry(input.user_id.clone())
        .or_insert_with(|| UserMemory::new(&input.user_id))
        .conversation_history
        .push(ConversationTurn {
            message_id: message_id.clone(),
            content: input.content,
            response: response.clone(),
        });
    store.messages.insert(
        message_id.clone(),
        MessageRecord {
            message_id: message_id.clone(),
            user_id: input.user_id,
            status: "completed".to_string(),
            response,
        },
    );
    info!(%message_id, "message queued");
    Ok(Json(json!({ "message_id": message_id, "status": "queued" })))
}

async fn get_message_response(
    State(db): State<Db>,
    Path(message_id): Path<String>,
) -> Result<Json<MessageRecord>, ApiFailure> {
    let store = db.read().await;
    store
        .messages
        .get(&message_id)
        .cloned()
        .map(Json)
        .ok_or(ApiFailure::not_found("Message not found"))
}

async fn get_user_memory(State(db): State<Db>, Path(user_id): Path<String>) -> Json<UserMemory> {
    let mut store = db.write().await;
    let memory = store
        .memories
        .entry(user_id.clone())
        .or_insert_with(|| UserMemory::new(&user_id));
    Json(memory.clone())
}

async fn get_user_conversations(
    State(db): State<Db>,
    Path(user_id): Path<String>,
) -> Json<Value> {
    let mut store = db.write().await;
    let memory = store
        .memories
        .entry(user_id.clone())
        .or_insert_with(|| UserMemory::new(&user_id));
    Json(json!({ "conversations": memory.conversation_history }))
}
