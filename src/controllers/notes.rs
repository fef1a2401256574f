//! Notes REST API — list and append endpoints over the JSON-file store.
//!
//! Notes are append-only: no update or delete routes exist.

use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::AppState;

/// Upper bound on note text accepted at the boundary
const MAX_TEXT_BYTES: usize = 16 * 1024;

#[derive(Debug, Deserialize)]
struct CreateNoteRequest {
    text: Option<String>,
}

/// List all notes in insertion order
async fn list_notes(data: web::Data<AppState>) -> impl Responder {
    match data.store.list() {
        Ok(notes) => HttpResponse::Ok().json(notes),
        Err(e) => {
            log::error!("[NOTES] Failed to list notes: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to read notes: {}", e)
            }))
        }
    }
}

/// Append a note and return it
async fn add_note(
    data: web::Data<AppState>,
    body: web::Json<CreateNoteRequest>,
) -> impl Responder {
    // Emptiness is judged on the trimmed view, but the caller's string is
    // persisted untouched.
    let text = match body.text.as_deref() {
        Some(t) if !t.trim().is_empty() => t,
        _ => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": "Field 'text' must be a non-empty string"
            }));
        }
    };

    if text.len() > MAX_TEXT_BYTES {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": format!("Note text exceeds {} bytes", MAX_TEXT_BYTES)
        }));
    }

    match data.store.add(text) {
        Ok(note) => HttpResponse::Ok().json(note),
        Err(e) => {
            log::error!("[NOTES] Failed to append note: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to save note: {}", e)
            }))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/notes")
            .route(web::get().to(list_notes))
            .route(web::post().to(add_note)),
    );
}
