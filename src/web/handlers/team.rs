use actix_web::{HttpRequest, Responder, get, post, web};

use newsdesk::common::pagination::{DEFAULT_PAGE_SIZE, Page};
use newsdesk::common::text::contains_ci;
use newsdesk::db;
use newsdesk::models::TeamMember;

use crate::web::forms::{ListQuery, NoticeQuery, TeamForm};
use crate::web::helpers::{render, require_admin, see_other};
use crate::web::state::AppState;
use crate::web::templates::{AdminListTemplate, Card, TeamFormTemplate};

fn notice_for(query: &NoticeQuery) -> Option<String> {
    match query.notice.as_deref() {
        Some("created") => Some("Team member added successfully!".to_string()),
        _ => None,
    }
}

#[get("/admin/team/new")]
pub async fn team_form(req: HttpRequest, query: web::Query<NoticeQuery>) -> impl Responder {
    if let Err(resp) = require_admin(&req) {
        return resp;
    }

    render(TeamFormTemplate {
        notice: notice_for(&query),
        error: None,
        form: TeamForm::default(),
    })
}

#[post("/admin/team")]
pub async fn team_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<TeamForm>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req) {
        return resp;
    }

    let form = form.into_inner();
    let data = match form.to_create() {
        Ok(data) => data,
        Err(e) => {
            return render(TeamFormTemplate {
                notice: None,
                error: Some(e),
                form,
            });
        }
    };

    match db::create_team_member(&state.pool, &data).await {
        Ok(_) => see_other("/admin/team/new?notice=created"),
        Err(e) => {
            log::error!("Team member create failed: {}", e);
            render(TeamFormTemplate {
                notice: None,
                error: Some(format!("Error submitting form: {e}")),
                form,
            })
        }
    }
}

fn card(member: &TeamMember) -> Card {
    Card {
        title: member.name.clone(),
        subtitle: member.designation.clone(),
        body: member.skills.join(", "),
        meta: member.created_at.format("%Y-%m-%d").to_string(),
    }
}

#[get("/admin/team")]
pub async fn team_list(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req) {
        return resp;
    }

    let q = query.q.clone().unwrap_or_default();
    let members = db::list_team_members(&state.pool).await.unwrap_or_default();

    let filtered: Vec<TeamMember> = members
        .into_iter()
        .filter(|m| contains_ci(&m.name, &q))
        .collect();

    let page = Page::slice(filtered, query.page.unwrap_or(1), DEFAULT_PAGE_SIZE);

    render(AdminListTemplate {
        heading: "Team",
        base_path: "/admin/team",
        query: q,
        cards: page.items.iter().map(card).collect(),
        pager: page.pager(),
        total_items: page.total_items,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(team_form).service(team_create).service(team_list);
}
