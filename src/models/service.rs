use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ServiceOffering {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub picture_url: String,
    pub created_at: DateTime<Utc>,
    pub edited_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceOfferingCreate {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub picture_url: String,
}

impl ServiceOfferingCreate {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required.".to_string());
        }
        if self.description.trim().is_empty() {
            return Err("Description is required.".to_string());
        }
        Ok(())
    }
}
