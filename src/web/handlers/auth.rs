use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use std::time::Duration;

use crate::web::forms::{AuthQuery, LoginForm};
use crate::web::helpers::{ADMIN_COOKIE, client_ip, is_authenticated, render, see_other};
use crate::web::state::AppState;
use crate::web::templates::AdminLoginTemplate;

#[get("/")]
pub async fn index(req: HttpRequest) -> impl Responder {
    if is_authenticated(&req) {
        see_other("/admin")
    } else {
        see_other("/admin/login")
    }
}

#[get("/admin/login")]
pub async fn login_form(query: web::Query<AuthQuery>) -> impl Responder {
    let error = query.error.as_deref().map(|code| match code {
        "missing" => "Email and password are required".to_string(),
        "invalid" => "Invalid email or password. Please try again.".to_string(),
        "rate_limit" => "Too many login attempts. Please try again later.".to_string(),
        other => other.to_string(),
    });

    render(AdminLoginTemplate { error })
}

#[post("/admin/login")]
pub async fn login_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<LoginForm>,
) -> impl Responder {
    let ip = client_ip(&req);
    if !state.rate_limiter.check_rate_limit(
        &format!("login:{}", ip),
        5,                        // 5 attempts
        Duration::from_secs(300), // per 5 minutes
    ) {
        return see_other("/admin/login?error=rate_limit");
    }

    let email = form.email.trim();
    let password = form.password.as_str();

    if email.is_empty() || password.is_empty() {
        return see_other("/admin/login?error=missing");
    }

    if !state.credentials.verify(email, password) {
        return see_other("/admin/login?error=invalid");
    }

    let cookie = Cookie::build(ADMIN_COOKIE, "1")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(actix_web::cookie::time::Duration::days(7))
        .finish();

    HttpResponse::SeeOther()
        .cookie(cookie)
        .insert_header(("Location", "/admin"))
        .finish()
}

#[post("/admin/logout")]
pub async fn logout() -> impl Responder {
    let mut cookie = Cookie::build(ADMIN_COOKIE, "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();
    cookie.make_removal();

    HttpResponse::SeeOther()
        .cookie(cookie)
        .insert_header(("Location", "/admin/login"))
        .finish()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(login_form)
        .service(login_submit)
        .service(logout);
}
