use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub designation: String,
    pub message: String,
    pub profile_picture_url: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
    pub edited_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialCreate {
    pub name: String,
    pub designation: String,
    pub message: String,
    #[serde(default)]
    pub profile_picture_url: String,
    pub rating: i32,
}

impl TestimonialCreate {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required.".to_string());
        }
        if self.message.trim().is_empty() {
            return Err("Message is required.".to_string());
        }
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(format!(
                "Rating must be between {} and {}.",
                MIN_RATING, MAX_RATING
            ));
        }
        Ok(())
    }
}
