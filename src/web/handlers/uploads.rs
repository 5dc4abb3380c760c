use actix_multipart::Multipart;
use actix_web::{HttpResponse, Responder, post, web};
use futures_util::TryStreamExt as _;
use serde::Serialize;
use uuid::Uuid;

use crate::web::state::AppState;

/// Response for a stored upload. `fileUrl` is what the forms consume;
/// `fileUrls` carries every file when a request uploads several at once.
#[derive(Serialize)]
pub struct UploadResponse {
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    #[serde(rename = "fileUrls")]
    pub file_urls: Vec<String>,
}

fn file_extension(filename: &str) -> Option<String> {
    let ext = std::path::Path::new(filename)
        .extension()?
        .to_str()?
        .to_ascii_lowercase();

    if !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        Some(ext)
    } else {
        None
    }
}

/// Accepts `multipart/form-data` with one or more `file` parts, stores each
/// under the configured upload directory with a fresh uuid name, and
/// returns the public URLs. The original filename only contributes its
/// extension.
#[post("/api/auth/upload")]
pub async fn upload(state: web::Data<AppState>, mut payload: Multipart) -> impl Responder {
    let mut stored: Vec<String> = Vec::new();

    loop {
        let mut field = match payload.try_next().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return HttpResponse::BadRequest()
                    .content_type("text/plain; charset=utf-8")
                    .body(format!("Invalid upload: {e}"));
            }
        };

        if field.name() != Some("file") {
            // Drain the unrelated part so the stream can move on.
            while let Ok(Some(_)) = field.try_next().await {}
            continue;
        }

        let extension = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .and_then(file_extension);

        let mut bytes = web::BytesMut::new();
        loop {
            match field.try_next().await {
                Ok(Some(chunk)) => bytes.extend_from_slice(&chunk),
                Ok(None) => break,
                Err(e) => {
                    return HttpResponse::BadRequest()
                        .content_type("text/plain; charset=utf-8")
                        .body(format!("Invalid upload: {e}"));
                }
            }
        }

        if bytes.is_empty() {
            return HttpResponse::BadRequest()
                .content_type("text/plain; charset=utf-8")
                .body("Empty file upload");
        }

        let stored_name = match extension {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        };

        let path = state.settings.upload_dir.join(&stored_name);
        if let Err(e) = std::fs::write(&path, &bytes) {
            log::error!("Failed to store upload {}: {}", path.display(), e);
            return HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body("Failed to store upload");
        }

        stored.push(state.settings.file_url(&stored_name));
    }

    match stored.first() {
        Some(first) => HttpResponse::Ok().json(UploadResponse {
            file_url: first.clone(),
            file_urls: stored.clone(),
        }),
        None => HttpResponse::BadRequest()
            .content_type("text/plain; charset=utf-8")
            .body("Please select a file to upload."),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(upload);
}
