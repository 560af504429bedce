//! Site views using the Tera template engine
//!
//! Templates are embedded in the binary. Autoescaping stays on for every
//! `.html` template because article text comes from an external service.

use anyhow::Result;
use chrono::Datelike;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::{LinksConfig, SiteConfig};
use crate::content::{Article, Post};
use crate::helpers::{encode_path_segment, is_external, url_for};

/// Fixed header navigation: (title, path)
const MAIN_NAV: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Posts", "/posts"),
    ("Articles", "/demo/strapi"),
];

/// Template renderer with the embedded site views
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all views loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("home.html", include_str!("site/home.html")),
            ("posts.html", include_str!("site/posts.html")),
            ("post.html", include_str!("site/post.html")),
            ("articles.html", include_str!("site/articles.html")),
            ("not_found.html", include_str!("site/not_found.html")),
            ("error.html", include_str!("site/error.html")),
        ])?;

        tera.register_filter("truncate_chars", truncate_chars_filter);
        tera.register_filter("date_format", date_format_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Landing page
    pub fn home(&self, config: &SiteConfig) -> Result<String> {
        let mut context = base_context(config, "/");
        context.insert("hero", &HeroData::from_config(config));
        context.insert("features", &config.marketing.features);
        self.render("home.html", &context)
    }

    /// Post index
    pub fn posts(&self, config: &SiteConfig, posts: &[Post]) -> Result<String> {
        let mut context = base_context(config, "/posts");
        let posts: Vec<PostLink> = posts.iter().map(|p| PostLink::new(config, p)).collect();
        context.insert("posts", &posts);
        self.render("posts.html", &context)
    }

    /// Single post
    pub fn post(&self, config: &SiteConfig, post: &Post) -> Result<String> {
        let mut context = base_context(config, &format!("/posts/{}", post.id));
        context.insert("post", post);
        self.render("post.html", &context)
    }

    /// Article grid, or the empty-state message when there are none
    pub fn articles(&self, config: &SiteConfig, articles: &[Article]) -> Result<String> {
        let mut context = base_context(config, "/demo/strapi");
        let articles: Vec<ArticleData> = articles.iter().map(ArticleData::from).collect();
        context.insert("articles", &articles);
        self.render("articles.html", &context)
    }

    /// 404 page
    pub fn not_found(&self, config: &SiteConfig, message: &str) -> Result<String> {
        let mut context = base_context(config, "");
        context.insert("message", message);
        self.render("not_found.html", &context)
    }

    /// Generic error page
    pub fn error(&self, config: &SiteConfig, message: &str) -> Result<String> {
        let mut context = base_context(config, "");
        context.insert("message", message);
        self.render("error.html", &context)
    }
}

/// Context shared by every page: site info and header navigation
fn base_context(config: &SiteConfig, current_path: &str) -> Context {
    let nav: Vec<NavItem> = MAIN_NAV
        .iter()
        .map(|(title, path)| NavItem {
            title: title.to_string(),
            href: url_for(config, path),
            active: *path == current_path,
        })
        .collect();

    let mut context = Context::new();
    context.insert("site", &SiteData::from_config(config));
    context.insert("nav", &nav);
    context.insert("home_href", &url_for(config, "/"));
    context
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 150,
    };
    let omission = match args.get("omission") {
        Some(val) => tera::try_get_value!("truncate_chars", "omission", String, val),
        None => "...".to_string(),
    };

    if s.chars().count() <= length {
        Ok(tera::Value::String(s))
    } else {
        let truncated: String = s.chars().take(length).collect();
        Ok(tera::Value::String(format!(
            "{}{}",
            truncated.trim_end(),
            omission
        )))
    }
}

/// Tera filter: render an RFC 3339 timestamp as a calendar date
fn date_format_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("date_format", "value", String, value);
    let format = match args.get("format") {
        Some(val) => tera::try_get_value!("date_format", "format", String, val),
        None => "%Y-%m-%d".to_string(),
    };

    match chrono::DateTime::parse_from_rfc3339(&s) {
        Ok(date) => Ok(tera::Value::String(date.format(&format).to_string())),
        // Not a timestamp: show it unchanged
        Err(_) => Ok(tera::Value::String(s)),
    }
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub name: String,
    pub description: String,
    pub year: i32,
    pub links: LinksConfig,
}

impl SiteData {
    fn from_config(config: &SiteConfig) -> Self {
        Self {
            name: config.name.clone(),
            description: config.description.clone(),
            year: chrono::Local::now().year(),
            links: config.links.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub title: String,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroData {
    pub title_lead: String,
    pub title_rest: String,
    pub subtitle: String,
    pub description: String,
    pub actions: Vec<ActionData>,
}

impl HeroData {
    fn from_config(config: &SiteConfig) -> Self {
        let hero = &config.marketing.hero;
        let (lead, rest) = hero
            .title
            .split_once(' ')
            .unwrap_or((hero.title.as_str(), ""));

        Self {
            title_lead: lead.to_string(),
            title_rest: rest.to_string(),
            subtitle: hero.subtitle.clone(),
            description: hero.description.clone(),
            actions: hero
                .actions
                .iter()
                .map(|action| ActionData {
                    text: action.text.clone(),
                    href: if is_external(&action.href) {
                        action.href.clone()
                    } else {
                        url_for(config, &action.href)
                    },
                    variant: action.variant.clone(),
                    external: is_external(&action.href),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionData {
    pub text: String,
    pub href: String,
    pub variant: String,
    pub external: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostLink {
    pub title: String,
    pub href: String,
}

impl PostLink {
    fn new(config: &SiteConfig, post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            href: url_for(config, &format!("posts/{}", encode_path_segment(&post.id))),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ArticleData {
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub created_at: Option<String>,
}

impl From<&Article> for ArticleData {
    fn from(article: &Article) -> Self {
        Self {
            title: article.display_title().to_string(),
            description: article.description.clone().filter(|d| !d.is_empty()),
            content: article.content.clone().filter(|c| !c.is_empty()),
            created_at: article.created_at.map(|d| d.to_rfc3339()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> TemplateRenderer {
        TemplateRenderer::new().unwrap()
    }

    fn posts() -> Vec<Post> {
        vec![
            Post::new("1", "First Post", "This is the first post"),
            Post::new("2", "Second Post", "This is the second post"),
            Post::new("3", "Third Post", "This is the third post"),
        ]
    }

    #[test]
    fn test_home() {
        let html = renderer().home(&SiteConfig::default()).unwrap();
        assert!(html.contains("TANSTACK"));
        assert!(html.contains("START"));
        assert!(html.contains("Powerful Server Functions"));
        assert!(html.contains("Documentation"));
        assert!(html.contains("All rights reserved."));
    }

    #[test]
    fn test_nav_marks_current_page() {
        let html = renderer().posts(&SiteConfig::default(), &posts()).unwrap();
        assert!(html.contains(r#"<a href="/posts" aria-current="page">Posts</a>"#));
        assert!(html.contains(r#"<a href="/">Home</a>"#));
    }

    #[test]
    fn test_posts_links_use_root() {
        let mut config = SiteConfig::default();
        config.root = "/site/".to_string();
        let html = renderer().posts(&config, &posts()).unwrap();
        assert!(html.contains(r#"href="/site/posts/2""#));
        assert!(html.contains("Third Post"));
    }

    #[test]
    fn test_post() {
        let posts = posts();
        let html = renderer().post(&SiteConfig::default(), &posts[1]).unwrap();
        assert!(html.contains("<h3>Second Post</h3>"));
        assert!(html.contains("This is the second post"));
    }

    #[test]
    fn test_articles_empty_state() {
        let html = renderer().articles(&SiteConfig::default(), &[]).unwrap();
        assert!(html.contains("No articles found."));
        assert!(!html.contains("article-grid"));
    }

    #[test]
    fn test_articles_grid() {
        let mut dated = Article::new("a", "Dated");
        dated.description = Some("A description".to_string());
        dated.created_at = Some("2025-03-01T12:30:00Z".parse().unwrap());
        let mut untitled = Article::new("b", "");
        untitled.title = None;
        untitled.content = Some("Some content".to_string());

        let html = renderer()
            .articles(&SiteConfig::default(), &[dated, untitled])
            .unwrap();
        assert!(html.contains("article-grid"));
        assert!(!html.contains("No articles found."));
        assert!(html.contains("Dated"));
        assert!(html.contains("A description"));
        assert!(html.contains("2025-03-01</time>"));
        assert!(html.contains("Untitled"));
        assert!(html.contains("Some content"));
    }

    #[test]
    fn test_article_text_is_escaped() {
        let mut article = Article::new("x", "<script>alert(1)</script>");
        article.content = Some("<b>bold</b>".to_string());
        let html = renderer()
            .articles(&SiteConfig::default(), &[article])
            .unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<b>bold</b>"));
    }

    #[test]
    fn test_not_found_and_error() {
        let renderer = renderer();
        let config = SiteConfig::default();
        let html = renderer.not_found(&config, "No post with id 999").unwrap();
        assert!(html.contains("Not Found"));
        assert!(html.contains("No post with id 999"));

        let html = renderer.error(&config, "Upstream down").unwrap();
        assert!(html.contains("Something went wrong"));
        assert!(html.contains("Upstream down"));
    }

    #[test]
    fn test_truncate_chars_filter() {
        let mut args = HashMap::new();
        args.insert("length".to_string(), tera::Value::from(5));
        let value = truncate_chars_filter(&tera::Value::from("hello world"), &args).unwrap();
        assert_eq!(value, tera::Value::from("hello..."));

        let value = truncate_chars_filter(&tera::Value::from("hi"), &args).unwrap();
        assert_eq!(value, tera::Value::from("hi"));
    }

    #[test]
    fn test_date_format_filter() {
        let args = HashMap::new();
        let value =
            date_format_filter(&tera::Value::from("2024-12-31T23:00:00+00:00"), &args).unwrap();
        assert_eq!(value, tera::Value::from("2024-12-31"));

        let value = date_format_filter(&tera::Value::from("yesterday"), &args).unwrap();
        assert_eq!(value, tera::Value::from("yesterday"));
    }
}
