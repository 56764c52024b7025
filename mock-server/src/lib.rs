use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftInput {
    pub title: String,
    pub content: String,
    pub mime_type: String,
    pub source: Option<String>,
    pub origin_url: Option<String>,
    pub project_id: Option<String>,
}

/// Create and update bodies arrive as `{"payload": {...}}`.
#[derive(Deserialize)]
pub struct Envelope {
    pub payload: DraftInput,
}

impl Draft {
    fn from_input(id: Uuid, input: DraftInput) -> Self {
        Self {
            id,
            title: input.title,
            content: input.content,
            mime_type: input.mime_type,
            source: input.source,
            origin_url: input.origin_url,
            project_id: input.project_id,
        }
    }
}

pub type Db = Arc<RwLock<HashMap<Uuid, Draft>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/drafts", get(list_drafts).post(create_draft))
        .route(
            "/drafts/{id}",
            get(get_draft).put(update_draft).delete(delete_draft),
        )
        .layer(middleware::from_fn(require_bearer))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Reject requests without a non-empty `Authorization: Bearer` token.
async fn require_bearer(request: Request, next: Next) -> Result<Response, StatusCode> {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .is_some_and(|token| !token.is_empty());
    if !authorized {
        tracing::warn!(path = %request.uri().path(), "rejected unauthenticated request");
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(next.run(request).await)
}

async fn list_drafts(State(db): State<Db>) -> Json<Vec<Draft>> {
    let drafts = db.read().await;
    Json(drafts.values().cloned().collect())
}

async fn create_draft(
    State(db): State<Db>,
    Json(body): Json<Envelope>,
) -> (StatusCode, Json<Draft>) {
    let draft = Draft::from_input(Uuid::new_v4(), body.payload);
    tracing::info!(id = %draft.id, "draft created");
    db.write().await.insert(draft.id, draft.clone());
    (StatusCode::CREATED, Json(draft))
}

async fn get_draft(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Draft>, StatusCode> {
    let drafts = db.read().await;
    drafts.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_draft(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(body): Json<Envelope>,
) -> Result<Json<Draft>, StatusCode> {
    let mut drafts = db.write().await;
    let draft = drafts.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    *draft = Draft::from_input(id, body.payload);
    tracing::info!(%id, "draft updated");
    Ok(Json(draft.clone()))
}

async fn delete_draft(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let mut drafts = db.write().await;
    drafts
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}
