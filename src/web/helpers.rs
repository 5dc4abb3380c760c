use actix_web::{HttpRequest, HttpResponse};
use askama::Template;

/// Session cookie set after a successful login. The value is the boolean
/// flag the dashboard has always kept; what changed is that it now travels
/// with the request instead of living in ambient browser storage.
pub const ADMIN_COOKIE: &str = "nd_admin";

pub fn is_authenticated(req: &HttpRequest) -> bool {
    req.cookie(ADMIN_COOKIE)
        .is_some_and(|c| c.value() == "1")
}

/// Gate for every /admin page: unauthenticated requests are redirected to
/// the login form.
pub fn require_admin(req: &HttpRequest) -> Result<(), HttpResponse> {
    if is_authenticated(req) {
        Ok(())
    } else {
        Err(see_other("/admin/login"))
    }
}

pub fn see_other(location: impl Into<String>) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location.into()))
        .finish()
}

pub fn render<T: Template>(t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Template error: {e}")),
    }
}

pub fn client_ip(req: &HttpRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string()
}
