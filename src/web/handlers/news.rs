use actix_web::{HttpRequest, Responder, get, post, web};

use newsdesk::common::pagination::{DEFAULT_PAGE_SIZE, Page};
use newsdesk::common::text::contains_ci;
use newsdesk::db;
use newsdesk::models::{NEWS_CATEGORIES, NewsArticle};

use crate::web::forms::{ListQuery, NewsForm, NoticeQuery};
use crate::web::helpers::{render, require_admin, see_other};
use crate::web::state::AppState;
use crate::web::templates::{AdminListTemplate, Card, NewsFormTemplate};

fn notice_for(query: &NoticeQuery) -> Option<String> {
    match query.notice.as_deref() {
        Some("created") => Some("News added successfully!".to_string()),
        _ => None,
    }
}

#[get("/admin/news/new")]
pub async fn news_form(req: HttpRequest, query: web::Query<NoticeQuery>) -> impl Responder {
    if let Err(resp) = require_admin(&req) {
        return resp;
    }

    render(NewsFormTemplate {
        notice: notice_for(&query),
        error: None,
        form: NewsForm::default(),
        categories: NEWS_CATEGORIES,
    })
}

#[post("/admin/news")]
pub async fn news_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<NewsForm>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req) {
        return resp;
    }

    let form = form.into_inner();
    let data = match form.to_create() {
        Ok(data) => data,
        Err(e) => {
            return render(NewsFormTemplate {
                notice: None,
                error: Some(e),
                form,
                categories: NEWS_CATEGORIES,
            });
        }
    };

    match db::create_news(&state.pool, &data).await {
        Ok(_) => see_other("/admin/news/new?notice=created"),
        Err(e) => {
            log::error!("News create failed: {}", e);
            render(NewsFormTemplate {
                notice: None,
                error: Some(format!("Error submitting form: {e}")),
                form,
                categories: NEWS_CATEGORIES,
            })
        }
    }
}

fn card(article: &NewsArticle) -> Card {
    Card {
        title: article.title.clone(),
        subtitle: article.category.clone(),
        body: article.tags.join(", "),
        meta: article.created_at.format("%Y-%m-%d").to_string(),
    }
}

#[get("/admin/news")]
pub async fn news_list(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req) {
        return resp;
    }

    let q = query.q.clone().unwrap_or_default();
    let articles = db::list_news(&state.pool).await.unwrap_or_default();

    let filtered: Vec<NewsArticle> = articles
        .into_iter()
        .filter(|a| contains_ci(&a.title, &q))
        .collect();

    let page = Page::slice(filtered, query.page.unwrap_or(1), DEFAULT_PAGE_SIZE);

    render(AdminListTemplate {
        heading: "News",
        base_path: "/admin/news",
        query: q,
        cards: page.items.iter().map(card).collect(),
        pager: page.pager(),
        total_items: page.total_items,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(news_form).service(news_create).service(news_list);
}
