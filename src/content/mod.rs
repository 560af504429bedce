//! Content module - posts, articles, and the sources that serve them

mod article;
pub mod fixtures;
mod post;
pub mod strapi;

pub use article::Article;
pub use fixtures::{FixtureStore, StoreError};
pub use post::Post;
pub use strapi::{ArticleSource, StaticArticles, StrapiClient, UpstreamError};
