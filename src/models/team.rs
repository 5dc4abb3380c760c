use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Outbound links on a member profile. Flattened into columns of the
/// team_members table; nested again in JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SocialLinks {
    pub linkedin: String,
    pub portfolio: String,
    pub other_links: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TeamMember {
    pub id: Uuid,
    pub name: String,
    pub designation: String,
    pub bio: String,
    pub profile_picture_url: String,
    #[sqlx(flatten)]
    pub social_links: SocialLinks,
    pub skills: Vec<String>,
    pub technologies: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub edited_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMemberCreate {
    pub name: String,
    pub designation: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub profile_picture_url: String,
    #[serde(default)]
    pub social_links: SocialLinks,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl TeamMemberCreate {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required.".to_string());
        }
        if self.designation.trim().is_empty() {
            return Err("Designation is required.".to_string());
        }
        Ok(())
    }
}
