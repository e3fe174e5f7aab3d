pub mod extract;

use crate::AppState;
use crate::domain::Page;
use axum::{
    Form, Json, Router,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use extract::PageTitle;
use serde::Deserialize;

pub fn wiki_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/pages", get(list_pages_handler))
        .route("/view/{title}", get(view_handler))
        .route("/edit/{title}", get(edit_handler))
        .route("/save/{title}", post(save_handler))
}

#[derive(Deserialize)]
pub struct SaveForm {
    // an edit form submitted with no body field means an empty page
    #[serde(default)]
    body: String,
}

// plain 302 with a Location header; axum's Redirect helpers pick 303/307
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

// failures that do get surfaced carry the error text as the body
fn server_error(err: &anyhow::Error) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
}

// default route, unrelated to page operations
async fn root_handler(uri: Uri) -> String {
    format!("Hi there, I love {}!", uri.path().trim_start_matches('/'))
}

async fn view_handler(State(state): State<AppState>, PageTitle(title): PageTitle) -> Response {
    let page = match state.store.load_page(&title).await {
        Ok(Some(page)) => page,

        // nothing behind this title yet, send the client to the edit form
        Ok(None) => return found(&format!("/edit/{title}")),

        // an unreadable page is handled the same way as a missing one
        Err(err) => {
            tracing::warn!("Failed to load page {title}: {err:#}");
            return found(&format!("/edit/{title}"));
        }
    };

    match state.renderer.render_view(&page) {
        Ok(html) => Html(html).into_response(),
        Err(err) => server_error(&err),
    }
}

async fn edit_handler(State(state): State<AppState>, PageTitle(title): PageTitle) -> Response {
    let page = match state.store.load_page(&title).await {
        Ok(Some(page)) => page,

        // new-page case: pre-fill the form with nothing
        Ok(None) => Page::blank(title),

        Err(err) => {
            tracing::warn!("Failed to load page {title}: {err:#}");
            Page::blank(title)
        }
    };

    match state.renderer.render_edit(&page) {
        Ok(html) => Html(html).into_response(),
        Err(err) => server_error(&err),
    }
}

async fn save_handler(
    State(state): State<AppState>,
    PageTitle(title): PageTitle,
    Form(form): Form<SaveForm>,
) -> Response {
    let page = Page::new(title.clone(), form.body);

    match state.store.save_page(&page).await {
        Ok(()) => found(&format!("/view/{title}")),

        // the write failed, report it to the client as-is
        Err(err) => server_error(&err),
    }
}

async fn list_pages_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, StatusCode> {
    let titles = state
        .store
        .list_titles()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(titles))
}
