//! List site content

use anyhow::Result;
use std::io::Write;

use crate::content::{Article, Post};
use crate::helpers::{encode_path_segment, full_url_for};
use crate::loaders;
use crate::Site;

/// List site content by type
pub async fn run(site: &Site, content_type: &str) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let store = site.fixture_store();
            let posts = loaders::load_posts(&store).await;
            write_posts(&mut std::io::stdout().lock(), site, posts)?;
        }
        "article" | "articles" => {
            let source = site.article_source()?;
            let articles = loaders::load_articles(source.as_ref()).await?;
            write_articles(&mut std::io::stdout().lock(), &articles)?;
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, article",
                content_type
            );
        }
    }

    Ok(())
}

fn write_posts<W: Write>(out: &mut W, site: &Site, posts: &[Post]) -> Result<()> {
    writeln!(out, "Posts ({}):", posts.len())?;
    for post in posts {
        let url = full_url_for(
            &site.config,
            &format!("posts/{}", encode_path_segment(&post.id)),
        );
        writeln!(out, "  {} - {} [{}]", post.id, post.title, url)?;
    }
    Ok(())
}

fn write_articles<W: Write>(out: &mut W, articles: &[Article]) -> Result<()> {
    if articles.is_empty() {
        writeln!(out, "No articles found.")?;
        return Ok(());
    }

    writeln!(out, "Articles ({}):", articles.len())?;
    for article in articles {
        match article.created_at {
            Some(date) => writeln!(
                out,
                "  {} - {} [{}]",
                date.format("%Y-%m-%d"),
                article.display_title(),
                article.document_id
            )?,
            None => writeln!(
                out,
                "  {} [{}]",
                article.display_title(),
                article.document_id
            )?,
        }
    }
    Ok(())
}
