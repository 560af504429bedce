//! Route loaders
//!
//! Each loader produces the data a view needs before it renders. Absence is
//! reported as [`LoaderError::NotFound`], which the router turns into a 404
//! page. Loaders never retry: a miss is definitive and upstream failures are
//! passed through untouched.

use thiserror::Error;

use crate::content::{Article, ArticleSource, FixtureStore, Post, StoreError, UpstreamError};

/// Outcomes a route has to handle besides success
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl From<StoreError> for LoaderError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => LoaderError::NotFound(id),
        }
    }
}

/// Loader for `/posts/{post_id}`
pub async fn load_post_by_id(
    store: &FixtureStore,
    id: &str,
) -> Result<&'static Post, LoaderError> {
    Ok(store.get_post(id).await?)
}

/// Loader for `/posts`
pub async fn load_posts(store: &FixtureStore) -> &'static [Post] {
    store.list_posts().await
}

/// Loader for `/demo/strapi`
pub async fn load_articles(source: &dyn ArticleSource) -> Result<Vec<Article>, LoaderError> {
    Ok(source.find_articles().await?)
}
