//! Post model

use serde::{Deserialize, Serialize};

/// A blog post served from the fixture set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Identifier used in `/posts/{id}`, unique within the fixture set
    pub id: String,

    /// Post title
    pub title: String,

    /// Plain-text body
    pub body: String,
}

impl Post {
    /// Create a new post
    pub fn new(id: &str, title: &str, body: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post() {
        let post = Post::new("2", "Second Post", "This is the second post");
        assert_eq!(post.id, "2");
        assert_eq!(post.title, "Second Post");
        assert_eq!(post.body, "This is the second post");
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(Post::new("1", "First Post", "body")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "1", "title": "First Post", "body": "body"})
        );
    }
}
