use actix_web::{web, HttpResponse, Result};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users::ActiveModel as UserActiveModel;
use crate::auth::adapter::outgoing::sea_orm_entity::verification_tokens::ActiveModel as TokenActiveModel;
use crate::auth::application::domain::entities::parse_expiry;

#[derive(Deserialize)]
pub struct SeedUserRequest {
    email: String,
}

#[derive(Serialize)]
pub struct SeedUserResponse {
    id: Uuid,
    email: String,
}

#[derive(Deserialize)]
pub struct SeedTokenRequest {
    email: String,
    token: Option<String>,
    /// RFC 3339 timestamp or `YYYY-MM-DD`
    expires: String,
}

#[derive(Serialize)]
pub struct SeedTokenResponse {
    id: Uuid,
    email: String,
    token: String,
    expires: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    environment: String,
}

/// Create an unverified user
/// POST /test/users
pub async fn seed_user(
    req: web::Json<SeedUserRequest>,
    db: web::Data<Arc<DatabaseConnection>>,
) -> Result<HttpResponse> {
    let user = UserActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(req.email.clone()),
        email_verified: Set(None),
        created_at: NotSet,
        updated_at: NotSet,
    };

    let inserted = user.insert(db.get_ref().as_ref()).await.map_err(|e| {
        actix_web::error::ErrorInternalServerError(format!("Failed to seed user: {}", e))
    })?;

    Ok(HttpResponse::Created().json(SeedUserResponse {
        id: inserted.id,
        email: inserted.email,
    }))
}

/// Create a verification token, random when none is given
/// POST /test/verification-tokens
pub async fn seed_verification_token(
    req: web::Json<SeedTokenRequest>,
    db: web::Data<Arc<DatabaseConnection>>,
) -> Result<HttpResponse> {
    let req = req.into_inner();

    let expires = parse_expiry(&req.expires)
        .map_err(|e| actix_web::error::ErrorBadRequest(e.to_string()))?;
    let token = req.token.unwrap_or_else(|| Uuid::new_v4().to_string());

    tracing::debug!(email = %req.email, %expires, "Seeding verification token");

    let active = TokenActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(req.email),
        token: Set(token),
        expires: Set(expires.fixed_offset()),
    };

    let inserted = active.insert(db.get_ref().as_ref()).await.map_err(|e| {
        actix_web::error::ErrorInternalServerError(format!("Failed to seed token: {}", e))
    })?;

    Ok(HttpResponse::Created().json(SeedTokenResponse {
        id: inserted.id,
        email: inserted.email,
        token: inserted.token,
        expires: inserted.expires.to_rfc3339(),
    }))
}

/// Health check for test helpers
/// GET /test/health
pub async fn health_check() -> Result<HttpResponse> {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Additional safety check
    if env == "production" {
        tracing::error!("🚨 Test helper routes active in production!");
        return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "error",
            "reason": "test-helper-running-in-production"
        })));
    }

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        environment: env,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/test")
            .route("/health", web::get().to(health_check))
            .route("/users", web::post().to(seed_user))
            .route(
                "/verification-tokens",
                web::post().to(seed_verification_token),
            ),
    );
}
