//! Article model as served by the content service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An article record owned by the external content service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub document_id: String,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Article {
    /// Create an article with only the identifier and title set
    pub fn new(document_id: &str, title: &str) -> Self {
        Self {
            document_id: document_id.to_string(),
            title: Some(title.to_string()),
            description: None,
            content: None,
            created_at: None,
        }
    }

    /// Title for display, `Untitled` when missing or blank
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => "Untitled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_service_shape() {
        let json = r#"{
            "id": 7,
            "documentId": "abc123",
            "title": "Hello",
            "description": null,
            "content": "Body text",
            "createdAt": "2025-03-01T12:30:00.000Z",
            "publishedAt": "2025-03-02T08:00:00.000Z"
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.document_id, "abc123");
        assert_eq!(article.title.as_deref(), Some("Hello"));
        assert!(article.description.is_none());
        assert_eq!(article.content.as_deref(), Some("Body text"));
        assert_eq!(
            article.created_at.unwrap().format("%Y-%m-%d").to_string(),
            "2025-03-01"
        );
    }

    #[test]
    fn test_display_title() {
        let mut article = Article::new("x", "Named");
        assert_eq!(article.display_title(), "Named");
        article.title = Some("   ".to_string());
        assert_eq!(article.display_title(), "Untitled");
        article.title = None;
        assert_eq!(article.display_title(), "Untitled");
    }
}
