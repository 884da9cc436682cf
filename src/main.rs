pub mod api;
pub mod modules;
pub use modules::auth;
pub mod health;
pub mod shared;

// Test helpers module - only compiled with feature flag
#[cfg(feature = "test-helpers")]
mod test_helpers;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::email_verification_repository_postgres::EmailVerificationRepositoryPostgres;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::verification_token_query_postgres::VerificationTokenQueryPostgres;
use crate::auth::application::use_cases::verify_email::{IVerifyEmailUseCase, VerifyEmailUseCase};
use crate::shared::api::custom_json_config;
use crate::shared::config::AppConfig;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub verify_email_use_case: Arc<dyn IVerifyEmailUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()?;

    // 🚨 SAFETY GUARD: Prevent test-helpers in production
    #[cfg(feature = "test-helpers")]
    {
        if config.is_production() {
            anyhow::bail!("test-helpers feature enabled in production environment");
        }
        tracing::warn!(
            "⚠️  Test helper routes are ENABLED for environment: {}",
            config.rust_env
        );
    }

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(config.database.connect_timeout)
        .acquire_timeout(config.database.connect_timeout)
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    let db_arc = Arc::new(conn);

    let verify_email_use_case = VerifyEmailUseCase::new(
        VerificationTokenQueryPostgres::new(Arc::clone(&db_arc)),
        UserQueryPostgres::new(Arc::clone(&db_arc)),
        EmailVerificationRepositoryPostgres::new(Arc::clone(&db_arc)),
    );

    let state = AppState {
        verify_email_use_case: Arc::new(verify_email_use_case),
    };

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        #[allow(unused_mut)]
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            );

        // Conditionally add test routes
        #[cfg(feature = "test-helpers")]
        {
            app = app.configure(test_helpers::configure_routes);
        }

        app
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::verify_email_link_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::verify_email_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
