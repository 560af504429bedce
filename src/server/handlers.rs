//! Route handlers

use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

use super::AppState;
use crate::loaders::{self, LoaderError};

/// Landing page
pub async fn home(State(state): State<AppState>) -> Response {
    page(state.renderer().home(state.config()))
}

/// Post index
pub async fn posts(State(state): State<AppState>) -> Response {
    let posts = loaders::load_posts(state.store()).await;
    page(state.renderer().posts(state.config(), posts))
}

/// Single post by id
pub async fn post(State(state): State<AppState>, Path(post_id): Path<String>) -> Response {
    match loaders::load_post_by_id(state.store(), &post_id).await {
        Ok(post) => page(state.renderer().post(state.config(), post)),
        Err(e) => loader_error(&state, e),
    }
}

/// Article feed from the content service
pub async fn articles(State(state): State<AppState>) -> Response {
    match loaders::load_articles(state.articles()).await {
        Ok(articles) => page(state.renderer().articles(state.config(), &articles)),
        Err(e) => loader_error(&state, e),
    }
}

/// Fallback for unknown paths
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    tracing::debug!("No route for {}", uri.path());
    not_found_page(&state, &format!("Nothing lives at {}.", uri.path()))
}

/// Turn a loader failure into the matching page
fn loader_error(state: &AppState, err: LoaderError) -> Response {
    match err {
        LoaderError::NotFound(id) => {
            tracing::debug!("Post not found: {}", id);
            not_found_page(state, &format!("No post with id \"{}\".", id))
        }
        LoaderError::Upstream(e) => {
            tracing::warn!("Content service failed: {}", e);
            with_status(
                StatusCode::BAD_GATEWAY,
                state
                    .renderer()
                    .error(state.config(), "The content service could not be reached."),
            )
        }
    }
}

fn not_found_page(state: &AppState, message: &str) -> Response {
    with_status(
        StatusCode::NOT_FOUND,
        state.renderer().not_found(state.config(), message),
    )
}

fn page(rendered: anyhow::Result<String>) -> Response {
    with_status(StatusCode::OK, rendered)
}

fn with_status(status: StatusCode, rendered: anyhow::Result<String>) -> Response {
    match rendered {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render page: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
