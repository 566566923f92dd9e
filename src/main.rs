mod api;
mod config;
mod dto;
mod error;
mod models;
mod repository;
mod telemetry;

use std::sync::Arc;

use actix_web::{get, web, App, HttpResponse, HttpServer, Responder, Result};
use anyhow::Context;
use serde::Serialize;

use crate::config::Config;
use crate::repository::database::MongoDbClient;
use crate::repository::TodoStore;

#[derive(Serialize)]
pub struct Response {
    pub message: String,
}

#[get("/health")]
async fn healthcheck() -> impl Responder {
    let response = Response {
        message: "Everything is working fine".to_string(),
    };
    HttpResponse::Ok().json(response)
}

async fn not_found() -> Result<HttpResponse> {
    let response = Response {
        message: "Resource not found".to_string(),
    };
    Ok(HttpResponse::NotFound().json(response))
}

async fn setup(config: &Config) -> anyhow::Result<web::Data<dyn TodoStore>> {
    let todo_db = MongoDbClient::new(config)
        .await
        .context("failed to create MongoDB client")?;
    todo_db.ping().await.context("failed to reach MongoDB")?;
    tracing::info!("Connected to MongoDB!");
    Ok(web::Data::from(Arc::new(todo_db) as Arc<dyn TodoStore>))
}

async fn run() -> anyhow::Result<()> {
    let config = Config::new()?;
    let data = setup(&config).await?;

    tracing::info!(host = %config.host, port = config.port, "starting server");
    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(api::api::config)
            .service(healthcheck)
            .default_service(web::route().to(not_found))
            .wrap(actix_web::middleware::Logger::default())
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?
    .run()
    .await?;
    Ok(())
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_subscriber(env!("CARGO_PKG_NAME"))?;
    if let Err(err) = run().await {
        tracing::error!(error = ?err, "fatal error");
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_healthcheck() {
        let app = test::init_service(App::new().service(healthcheck)).await;
        let req = TestRequest::default().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(StatusCode::OK, resp.status());
    }

    #[actix_web::test]
    async fn test_unknown_route_is_not_found() {
        let app = test::init_service(
            App::new()
                .configure(api::api::config)
                .service(healthcheck)
                .default_service(web::route().to(not_found)),
        )
        .await;
        let req = TestRequest::get().uri("/nowhere").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(StatusCode::NOT_FOUND, resp.status());
        let result: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(result["message"], "Resource not found");
    }
}
