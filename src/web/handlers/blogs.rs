use actix_web::{HttpRequest, Responder, get, post, web};

use newsdesk::common::pagination::{DEFAULT_PAGE_SIZE, Page};
use newsdesk::common::text::contains_ci;
use newsdesk::db;
use newsdesk::models::BlogPost;

use crate::web::forms::{BlogForm, ListQuery, NoticeQuery};
use crate::web::helpers::{render, require_admin, see_other};
use crate::web::state::AppState;
use crate::web::templates::{AdminListTemplate, BlogFormTemplate, Card};

fn notice_for(query: &NoticeQuery) -> Option<String> {
    match query.notice.as_deref() {
        Some("created") => Some("Blog added successfully!".to_string()),
        _ => None,
    }
}

#[get("/admin/blogs/new")]
pub async fn blog_form(req: HttpRequest, query: web::Query<NoticeQuery>) -> impl Responder {
    if let Err(resp) = require_admin(&req) {
        return resp;
    }

    render(BlogFormTemplate {
        notice: notice_for(&query),
        error: None,
        form: BlogForm::default(),
    })
}

#[post("/admin/blogs")]
pub async fn blog_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<BlogForm>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req) {
        return resp;
    }

    let form = form.into_inner();
    let data = match form.to_create() {
        Ok(data) => data,
        Err(e) => {
            return render(BlogFormTemplate {
                notice: None,
                error: Some(e),
                form,
            });
        }
    };

    match db::create_blog_post(&state.pool, &data).await {
        Ok(_) => see_other("/admin/blogs/new?notice=created"),
        Err(e) => {
            log::error!("Blog create failed: {}", e);
            render(BlogFormTemplate {
                notice: None,
                error: Some(format!("Error submitting form: {e}")),
                form,
            })
        }
    }
}

fn card(post: &BlogPost) -> Card {
    Card {
        title: post.title.clone(),
        subtitle: post.author.clone(),
        body: post.tags.join(", "),
        meta: post.created_at.format("%Y-%m-%d").to_string(),
    }
}

#[get("/admin/blogs")]
pub async fn blog_list(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req) {
        return resp;
    }

    let q = query.q.clone().unwrap_or_default();
    let posts = db::list_blog_posts(&state.pool).await.unwrap_or_default();

    let filtered: Vec<BlogPost> = posts
        .into_iter()
        .filter(|p| contains_ci(&p.title, &q))
        .collect();

    let page = Page::slice(filtered, query.page.unwrap_or(1), DEFAULT_PAGE_SIZE);

    render(AdminListTemplate {
        heading: "Blogs",
        base_path: "/admin/blogs",
        query: q,
        cards: page.items.iter().map(card).collect(),
        pager: page.pager(),
        total_items: page.total_items,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(blog_form).service(blog_create).service(blog_list);
}
