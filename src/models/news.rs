use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Categories offered by the news form. The site publishes in Hindi; the
/// labels are stored verbatim rather than mapped to identifiers.
pub const NEWS_CATEGORIES: &[&str] = &[
    "भारत",
    "विदेश",
    "मनोरंजन",
    "खेल",
    "विज्ञान-टेक्नॉलॉजी",
    "सोशल",
    "वीडियो",
    "पॉडकास्ट",
];

pub fn is_news_category(category: &str) -> bool {
    NEWS_CATEGORIES.contains(&category)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct NewsArticle {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub thumbnail_url: String,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub edited_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticleCreate {
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl NewsArticleCreate {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required.".to_string());
        }
        if self.content.trim().is_empty() {
            return Err("Content is required.".to_string());
        }
        if !is_news_category(&self.category) {
            return Err("Category is required.".to_string());
        }
        Ok(())
    }
}
