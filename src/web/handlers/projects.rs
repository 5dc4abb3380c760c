use actix_web::{HttpRequest, Responder, get, post, web};

use newsdesk::common::pagination::{DEFAULT_PAGE_SIZE, Page};
use newsdesk::common::text::contains_ci;
use newsdesk::db;
use newsdesk::models::ProjectAssignment;

use crate::web::forms::{ListQuery, NoticeQuery, ProjectForm};
use crate::web::helpers::{render, require_admin, see_other};
use crate::web::state::AppState;
use crate::web::templates::{AdminListTemplate, Card, ProjectFormTemplate};

fn notice_for(query: &NoticeQuery) -> Option<String> {
    match query.notice.as_deref() {
        Some("created") => Some("Project details added successfully!".to_string()),
        _ => None,
    }
}

#[get("/admin/projects/new")]
pub async fn project_form(req: HttpRequest, query: web::Query<NoticeQuery>) -> impl Responder {
    if let Err(resp) = require_admin(&req) {
        return resp;
    }

    render(ProjectFormTemplate {
        notice: notice_for(&query),
        error: None,
        form: ProjectForm::default(),
    })
}

#[post("/admin/projects")]
pub async fn project_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<ProjectForm>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req) {
        return resp;
    }

    let form = form.into_inner();
    let data = match form.to_create() {
        Ok(data) => data,
        Err(e) => {
            return render(ProjectFormTemplate {
                notice: None,
                error: Some(e),
                form,
            });
        }
    };

    match db::create_project_assignment(&state.pool, &data).await {
        Ok(_) => see_other("/admin/projects/new?notice=created"),
        Err(e) => {
            log::error!("Project assignment create failed: {}", e);
            render(ProjectFormTemplate {
                notice: None,
                error: Some(format!("Error submitting form: {e}")),
                form,
            })
        }
    }
}

fn card(project: &ProjectAssignment) -> Card {
    let meta = match (project.start_date, project.deadline) {
        (Some(start), Some(end)) => format!("{} → {}", start, end),
        (Some(start), None) => format!("Starts {}", start),
        (None, Some(end)) => format!("Due {}", end),
        (None, None) => String::new(),
    };

    Card {
        title: project.project_name.clone(),
        subtitle: project.client_name.clone(),
        body: project.assigned_employees.clone(),
        meta,
    }
}

#[get("/admin/projects")]
pub async fn project_list(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req) {
        return resp;
    }

    let q = query.q.clone().unwrap_or_default();
    let projects = db::list_project_assignments(&state.pool)
        .await
        .unwrap_or_default();

    let filtered: Vec<ProjectAssignment> = projects
        .into_iter()
        .filter(|p| contains_ci(&p.project_name, &q))
        .collect();

    let page = Page::slice(filtered, query.page.unwrap_or(1), DEFAULT_PAGE_SIZE);

    render(AdminListTemplate {
        heading: "Projects",
        base_path: "/admin/projects",
        query: q,
        cards: page.items.iter().map(card).collect(),
        pager: page.pager(),
        total_items: page.total_items,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(project_form)
        .service(project_create)
        .service(project_list);
}
