//! REST API for simstore.
//!
//! Thin JSON transport over a shared [`VectorStore`]: the store lives in
//! `web::Data` application state and is created once at process start with
//! a fixed dimension and metric. The handlers only translate requests and
//! errors; all invariants are enforced by the core.
//!
//! ## Endpoints
//!
//! - `GET /ping` - Liveness check
//! - `POST /api/store_vector` - Insert or overwrite a vector
//! - `POST /api/search_vector` - K-nearest-neighbor search
//! - `POST /api/clear` - Remove every vector
//!
//! ## Usage
//!
//! ```rust,no_run
//! use actix_web::{web, App, HttpServer};
//! use simstore::{Metric, VectorStore};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let store = web::Data::new(VectorStore::new(128, Metric::Cosine));
//!     HttpServer::new(move || {
//!         App::new()
//!             .app_data(store.clone())
//!             .configure(simstore::server::config)
//!     })
//!     .bind("0.0.0.0:7878")?
//!     .run()
//!     .await
//! }
//! ```

use crate::VectorStore;
use crate::engine::SearchHit;
use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};

/// Result count used when a search request carries no `top_k`.
pub const DEFAULT_TOP_K: usize = 5;

// --- Request structs ---

#[derive(Deserialize)]
struct StoreVectorRequest {
    key: String,
    vector: Vec<f32>,
}

#[derive(Deserialize)]
struct SearchVectorRequest {
    vector: Vec<f32>,
    top_k: Option<usize>,
}

// --- Response structs ---

#[derive(Serialize)]
struct SearchResponse {
    results: Vec<SearchHit>,
}

// --- Handlers ---

async fn ping_handler() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({"message": "pong"}))
}

async fn store_vector_handler(
    store: web::Data<VectorStore>,
    body: web::Json<StoreVectorRequest>,
) -> impl Responder {
    let body = body.into_inner();

    if body.key.is_empty() {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({"error": "Missing key or vector"}));
    }

    match store.insert(body.key, body.vector) {
        Ok(()) => {
            HttpResponse::Ok().json(serde_json::json!({"message": "Vector stored successfully"}))
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({"error": e.to_string()})),
    }
}

async fn search_vector_handler(
    store: web::Data<VectorStore>,
    body: web::Json<SearchVectorRequest>,
) -> impl Responder {
    let k = body.top_k.unwrap_or(DEFAULT_TOP_K);

    match store.search(&body.vector, k) {
        Ok(results) => HttpResponse::Ok().json(SearchResponse { results }),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({"error": e.to_string()})),
    }
}

async fn clear_handler(store: web::Data<VectorStore>) -> impl Responder {
    store.remove_all();
    HttpResponse::Ok().json(serde_json::json!({"message": "Store cleared successfully"}))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/ping").route(web::get().to(ping_handler)))
        .service(web::resource("/api/store_vector").route(web::post().to(store_vector_handler)))
        .service(web::resource("/api/search_vector").route(web::post().to(search_vector_handler)))
        .service(web::resource("/api/clear").route(web::post().to(clear_handler)));
}
