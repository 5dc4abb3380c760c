use actix_web::{HttpRequest, Responder, get, post, web};

use newsdesk::common::pagination::{DEFAULT_PAGE_SIZE, Page};
use newsdesk::common::text::contains_ci;
use newsdesk::db;
use newsdesk::models::ServiceOffering;

use crate::web::forms::{ListQuery, NoticeQuery, ServiceForm};
use crate::web::helpers::{render, require_admin, see_other};
use crate::web::state::AppState;
use crate::web::templates::{AdminListTemplate, Card, ServiceFormTemplate};

fn notice_for(query: &NoticeQuery) -> Option<String> {
    match query.notice.as_deref() {
        Some("created") => Some("Service added successfully!".to_string()),
        _ => None,
    }
}

#[get("/admin/services/new")]
pub async fn service_form(req: HttpRequest, query: web::Query<NoticeQuery>) -> impl Responder {
    if let Err(resp) = require_admin(&req) {
        return resp;
    }

    render(ServiceFormTemplate {
        notice: notice_for(&query),
        error: None,
        form: ServiceForm::default(),
    })
}

#[post("/admin/services")]
pub async fn service_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<ServiceForm>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req) {
        return resp;
    }

    let form = form.into_inner();
    let data = match form.to_create() {
        Ok(data) => data,
        Err(e) => {
            return render(ServiceFormTemplate {
                notice: None,
                error: Some(e),
                form,
            });
        }
    };

    match db::create_service(&state.pool, &data).await {
        Ok(_) => see_other("/admin/services/new?notice=created"),
        Err(e) => {
            log::error!("Service create failed: {}", e);
            render(ServiceFormTemplate {
                notice: None,
                error: Some(format!("Error submitting form: {e}")),
                form,
            })
        }
    }
}

fn card(service: &ServiceOffering) -> Card {
    Card {
        title: service.title.clone(),
        subtitle: String::new(),
        body: service.description.clone(),
        meta: service.created_at.format("%Y-%m-%d").to_string(),
    }
}

#[get("/admin/services")]
pub async fn service_list(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req) {
        return resp;
    }

    let q = query.q.clone().unwrap_or_default();
    let services = db::list_services(&state.pool).await.unwrap_or_default();

    let filtered: Vec<ServiceOffering> = services
        .into_iter()
        .filter(|s| contains_ci(&s.title, &q))
        .collect();

    let page = Page::slice(filtered, query.page.unwrap_or(1), DEFAULT_PAGE_SIZE);

    render(AdminListTemplate {
        heading: "Services",
        base_path: "/admin/services",
        query: q,
        cards: page.items.iter().map(card).collect(),
        pager: page.pager(),
        total_items: page.total_items,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(service_form)
        .service(service_create)
        .service(service_list);
}
