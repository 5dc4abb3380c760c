use sqlx::PgPool;

use crate::models::{BlogPost, BlogPostCreate};

pub async fn create_blog_post(
    pool: &PgPool,
    data: &BlogPostCreate,
) -> Result<BlogPost, sqlx::Error> {
    sqlx::query_as::<_, BlogPost>(
        r#"
        INSERT INTO blog_posts (title, content, author, tags, thumbnail_url, images)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(&data.title)
    .bind(&data.content)
    .bind(data.author_or_default())
    .bind(&data.tags)
    .bind(&data.thumbnail_url)
    .bind(&data.images)
    .fetch_one(pool)
    .await
}

pub async fn list_blog_posts(pool: &PgPool) -> Result<Vec<BlogPost>, sqlx::Error> {
    sqlx::query_as::<_, BlogPost>(
        r#"
        SELECT *
        FROM blog_posts
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}
