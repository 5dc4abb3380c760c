use sqlx::PgPool;

use crate::models::{TeamMember, TeamMemberCreate};

pub async fn create_team_member(
    pool: &PgPool,
    data: &TeamMemberCreate,
) -> Result<TeamMember, sqlx::Error> {
    sqlx::query_as::<_, TeamMember>(
        r#"
        INSERT INTO team_members
            (name, designation, bio, profile_picture_url,
             linkedin, portfolio, other_links, skills, technologies)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(&data.name)
    .bind(&data.designation)
    .bind(&data.bio)
    .bind(&data.profile_picture_url)
    .bind(&data.social_links.linkedin)
    .bind(&data.social_links.portfolio)
    .bind(&data.social_links.other_links)
    .bind(&data.skills)
    .bind(&data.technologies)
    .fetch_one(pool)
    .await
}

pub async fn list_team_members(pool: &PgPool) -> Result<Vec<TeamMember>, sqlx::Error> {
    sqlx::query_as::<_, TeamMember>(
        r#"
        SELECT *
        FROM team_members
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}
