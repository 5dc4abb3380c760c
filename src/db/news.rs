use sqlx::PgPool;

use crate::models::{NewsArticle, NewsArticleCreate};

pub async fn create_news(
    pool: &PgPool,
    data: &NewsArticleCreate,
) -> Result<NewsArticle, sqlx::Error> {
    sqlx::query_as::<_, NewsArticle>(
        r#"
        INSERT INTO news_articles (title, content, category, tags, thumbnail_url, images)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(&data.title)
    .bind(&data.content)
    .bind(&data.category)
    .bind(&data.tags)
    .bind(&data.thumbnail_url)
    .bind(&data.images)
    .fetch_one(pool)
    .await
}

pub async fn list_news(pool: &PgPool) -> Result<Vec<NewsArticle>, sqlx::Error> {
    sqlx::query_as::<_, NewsArticle>(
        r#"
        SELECT *
        FROM news_articles
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}
