use actix_cors::Cors;
use actix_web::{http::header, web::scope, Scope};
use common::settings::types::Settings;
use web_adapters::goal_routes;

pub fn setup_cors(settings: &Settings) -> Cors {
    if settings.debug {
        Cors::permissive()
    } else {
        Cors::default()
            .allowed_origin(&settings.application.frontend_url)
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_header(header::CONTENT_TYPE)
            .max_age(3600)
    }
}

pub fn get_routes() -> Scope {
    scope("/api").service(health_check).configure(goal_routes)
}

#[actix_web::get("/health-check")]
pub async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json("Application is safe and healthy.")
}
