use actix_web::{HttpRequest, Responder, get, web};

use newsdesk::common::text::tally_tags;
use newsdesk::db;

use crate::web::helpers::{render, require_admin};
use crate::web::state::AppState;
use crate::web::templates::{AdminDashboardTemplate, TagCount};

#[get("/admin")]
pub async fn admin_dashboard(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    if let Err(resp) = require_admin(&req) {
        return resp;
    }

    let news = db::list_news(&state.pool).await.unwrap_or_default();
    let blogs = db::list_blog_posts(&state.pool).await.unwrap_or_default();

    let news_tags = tally_tags(news.iter().map(|n| n.tags.as_slice()))
        .into_iter()
        .map(|(tag, count)| TagCount { tag, count })
        .collect();
    let blog_tags = tally_tags(blogs.iter().map(|b| b.tags.as_slice()))
        .into_iter()
        .map(|(tag, count)| TagCount { tag, count })
        .collect();

    render(AdminDashboardTemplate {
        news_total: news.len(),
        blog_total: blogs.len(),
        news_tags,
        blog_tags,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(admin_dashboard);
}
