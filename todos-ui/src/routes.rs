//! HTTP route handlers for the todo UI.

use axum::Router;
use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, Json, Redirect};
use axum::routing::{get, post};
use serde::Deserialize;
use tracing::error;

use todos::core::types::Task;

use crate::render;
use crate::state::AppState;

/// Build the page router (HTML surface, post/redirect/get).
pub fn page_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/tasks", post(create_task))
        .route("/tasks/{id}/edit", post(begin_edit))
        .route("/tasks/{id}/update", post(update_task))
        .route("/tasks/{id}/delete", post(delete_task))
}

/// Build the API router (read-only JSON contract).
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/tasks", get(list_tasks))
}

async fn health() -> &'static str {
    "ok"
}

/// Text field shared by the new-task and edit forms. A missing field is an
/// empty string; empty text is valid.
#[derive(Deserialize)]
struct TextForm {
    #[serde(default)]
    text: String,
}

/// GET / - render the task list page.
async fn index(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let session = state.session.read().await;
    render::page(&session).map(Html).map_err(|err| {
        error!(error = %err, "page render failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// GET /api/tasks - the task sequence as JSON.
async fn list_tasks(State(state): State<AppState>) -> Json<Vec<Task>> {
    let session = state.session.read().await;
    Json(session.tasks().to_vec())
}

/// POST /tasks - submit the new-task form.
async fn create_task(State(state): State<AppState>, Form(form): Form<TextForm>) -> Redirect {
    let mut session = state.session.write().await;
    session.set_draft(form.text);
    let summary = session.submit_create();
    drop(session);

    state.broadcast(&summary);
    Redirect::to("/")
}

/// POST /tasks/:id/edit - open the inline edit form for `id`.
async fn begin_edit(State(state): State<AppState>, Path(id): Path<i64>) -> Redirect {
    let mut session = state.session.write().await;
    session.begin_edit(id);
    Redirect::to("/")
}

/// POST /tasks/:id/update - submit the inline edit form.
///
/// The session's editing marker decides the target; the path id only shapes
/// the URL. A marker whose task was deleted falls through as a silent no-op
/// and still closes the form.
async fn update_task(
    State(state): State<AppState>,
    Path(_id): Path<i64>,
    Form(form): Form<TextForm>,
) -> Redirect {
    let mut session = state.session.write().await;
    session.set_edit_text(form.text);
    let summary = session.submit_update();
    drop(session);

    state.broadcast(&summary);
    Redirect::to("/")
}

/// POST /tasks/:id/delete - remove every task with `id`.
async fn delete_task(State(state): State<AppState>, Path(id): Path<i64>) -> Redirect {
    let mut session = state.session.write().await;
    let summary = session.request_delete(id);
    drop(session);

    state.broadcast(&summary);
    Redirect::to("/")
}
