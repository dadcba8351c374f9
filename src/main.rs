//! # VetConnect Backend
//!
//! Entry point for the veterinary-appointment coordination backend.
//! Configures logging, the SQLite pool, middleware and route handling.

// Deeply-nested ntex middleware/service types exceed the default layout
// recursion depth; the compiler directs raising this limit.
#![recursion_limit = "256"]

pub mod api;
pub mod config;
pub mod consts;
pub mod logger;
pub mod models;
pub mod repo;
pub mod rest;
pub mod services;
pub mod utils;

use ntex::web;
use ntex_cors::Cors;

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    logger::setup_simple_logger()?;

    let app_config = &*config::APP_CONFIG;

    // Initialize database connection pool and apply the schema
    let db_pool = utils::setup_sqlite_db_pool().await?;
    repo::schema::apply(&db_pool).await?;

    let sqlite_repo = repo::sqlite::SqlxSqliteRepo { db_pool };
    let identity_mirror = services::identity_mirror::HttpIdentityMirror::from_config(app_config);

    let server_addr = (app_config.web_server_host.clone(), app_config.web_server_port);
    log::info!(
        "starting server on {}:{} (env: {})",
        server_addr.0,
        server_addr.1,
        app_config.env
    );

    web::server(move || {
        web::App::new()
            .wrap(
                Cors::new()
                    .allowed_methods(vec![
                        "GET", "HEAD", "POST", "OPTIONS", "PUT", "PATCH", "DELETE",
                    ])
                    .finish(),
            )
            .wrap(web::middleware::Logger::default())
            .wrap(web::middleware::Compress::default())
            .state(rest::AppState {
                repo: Box::new(sqlite_repo.clone()),
                identity_mirror: Box::new(identity_mirror.clone()),
            })
            .configure(rest::routes::identity)
            .configure(rest::routes::animals)
            .configure(rest::routes::appointments)
            .configure(rest::routes::reviews)
            .configure(rest::routes::favorites)
            .configure(rest::routes::notifications)
            .configure(rest::routes::vets)
    })
    .bind(server_addr)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("server error: {e}"))
}
