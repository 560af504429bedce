//! In-memory fixture store
//!
//! Stands in for a remote post API during development. The seed list is
//! built once and never mutated, so lookups need no synchronization.

use lazy_static::lazy_static;
use std::time::Duration;
use thiserror::Error;

use super::Post;

lazy_static! {
    static ref POSTS: Vec<Post> = vec![
        Post::new("1", "First Post", "This is the first post"),
        Post::new("2", "Second Post", "This is the second post"),
        Post::new("3", "Third Post", "This is the third post"),
    ];
}

/// Lookup failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Post not found: {0}")]
    NotFound(String),
}

/// Read-only view over the fixture posts with simulated latency
#[derive(Debug, Clone, Default)]
pub struct FixtureStore {
    delay: Duration,
}

impl FixtureStore {
    /// Create a store that waits `delay` before answering each call
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// All posts in seed order
    pub async fn list_posts(&self) -> &'static [Post] {
        self.simulate_latency().await;
        POSTS.as_slice()
    }

    /// Find the post whose id equals `id` exactly
    pub async fn get_post(&self, id: &str) -> Result<&'static Post, StoreError> {
        self.simulate_latency().await;
        POSTS
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::time::Instant;

    #[tokio::test]
    async fn test_list_posts_seed_order() {
        let store = FixtureStore::default();
        let posts = store.list_posts().await;

        let summary: Vec<(&str, &str)> = posts
            .iter()
            .map(|p| (p.id.as_str(), p.title.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("1", "First Post"),
                ("2", "Second Post"),
                ("3", "Third Post")
            ]
        );
    }

    #[tokio::test]
    async fn test_get_post_every_fixture() {
        let store = FixtureStore::default();
        for post in store.list_posts().await {
            let found = store.get_post(&post.id).await.unwrap();
            assert_eq!(found, post);
        }
    }

    #[tokio::test]
    async fn test_get_post_missing() {
        let store = FixtureStore::default();
        assert_eq!(
            store.get_post("999").await,
            Err(StoreError::NotFound("999".to_string()))
        );
    }

    #[tokio::test]
    async fn test_get_post_requires_exact_match() {
        let store = FixtureStore::default();
        assert!(store.get_post("").await.is_err());
        assert!(store.get_post(" 1").await.is_err());
        assert!(store.get_post("10").await.is_err());
    }

    #[test]
    fn test_fixture_ids_unique() {
        let ids: HashSet<&str> = POSTS.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), POSTS.len());
    }

    #[tokio::test]
    async fn test_simulated_latency() {
        let store = FixtureStore::new(Duration::from_millis(20));
        let start = Instant::now();
        store.get_post("1").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
