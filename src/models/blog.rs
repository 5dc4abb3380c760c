use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
    pub thumbnail_url: String,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub edited_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostCreate {
    pub title: String,
    pub content: String,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub images: Vec<String>,
}

fn default_author() -> String {
    "Anonymous".to_string()
}

impl BlogPostCreate {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required.".to_string());
        }
        if self.content.trim().is_empty() {
            return Err("Content is required.".to_string());
        }
        Ok(())
    }

    /// Author falls back to the form's historical default.
    pub fn author_or_default(&self) -> &str {
        let trimmed = self.author.trim();
        if trimmed.is_empty() {
            "Anonymous"
        } else {
            trimmed
        }
    }
}
