use actix_files::Files;
use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use sitefront::catalog::{FEATURES, LLM_MONITORING_CARDS};
use sitefront::common::config::SiteConfig;

#[derive(Serialize)]
struct Health {
    status: &'static str,
    features: usize,
    integrations: usize,
}

#[get("/healthz")]
pub async fn healthz() -> impl Responder {
    HttpResponse::Ok().json(Health {
        status: "ok",
        features: FEATURES.len(),
        integrations: LLM_MONITORING_CARDS.len(),
    })
}

/// Health check plus the image directories referenced by the catalog.
pub fn configure(cfg: &mut web::ServiceConfig, config: &SiteConfig) {
    cfg.service(healthz)
        .service(Files::new("/img", config.static_dir.join("img")).prefer_utf8(true))
        .service(Files::new("/svgs", config.static_dir.join("svgs")).prefer_utf8(true));
}
