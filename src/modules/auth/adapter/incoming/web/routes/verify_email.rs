use crate::auth::application::domain::entities::EmailVerified;
use crate::auth::application::use_cases::verify_email::{
    VerifyEmailError, EMAIL_VERIFIED_MESSAGE,
};
use crate::shared::api::ActionResponse;
use crate::AppState;
use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

/// Verification request submitted by the client action
#[derive(Deserialize, ToSchema)]
pub struct VerifyEmailRequestDto {
    /// Token taken from the verification link
    #[schema(example = "0b7f3c1e-5c8e-4d8f-9a51-2f7c4b6a9d10")]
    pub token: String,
}

fn into_response(result: Result<EmailVerified, VerifyEmailError>) -> HttpResponse {
    match result {
        Ok(_) => ActionResponse::success(EMAIL_VERIFIED_MESSAGE),
        Err(e @ VerifyEmailError::TokenExpired) => {
            warn!("Email verification rejected: {}", e);
            ActionResponse::bad_request(&e.user_message())
        }
        Err(e @ (VerifyEmailError::TokenNotFound | VerifyEmailError::UserNotFound)) => {
            warn!("Email verification rejected: {}", e);
            ActionResponse::not_found(&e.user_message())
        }
        Err(VerifyEmailError::DatabaseError(msg)) => {
            error!("Email verification failed: {}", msg);
            ActionResponse::internal_error()
        }
    }
}

/// Verify email from link
///
/// Consumes the verification token in the path and marks the matching user's
/// email as verified.
#[utoipa::path(
    get,
    path = "/api/auth/new-verification/{token}",
    tag = "auth",
    params(
        ("token" = String, Path, description = "Verification token from the email link")
    ),
    responses(
        (status = 200, description = "Email verified", body = ActionResponse,
            example = json!({ "success": "Email verified!" })),
        (status = 400, description = "Token has expired", body = ActionResponse,
            example = json!({ "error": "Token has expired!" })),
        (status = 404, description = "Unknown token or no user for its email", body = ActionResponse,
            example = json!({ "error": "Token does not exist!" })),
        (status = 500, description = "Internal server error", body = ActionResponse,
            example = json!({ "error": "Something went wrong!" }))
    )
)]
#[get("/api/auth/new-verification/{token}")]
pub async fn verify_email_link_handler(
    token: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let token = token.into_inner();
    into_response(data.verify_email_use_case.execute(&token).await)
}

/// Verify email from client action
///
/// Same flow as the link endpoint, with the token carried in a JSON body.
#[utoipa::path(
    post,
    path = "/api/auth/new-verification",
    tag = "auth",
    request_body = VerifyEmailRequestDto,
    responses(
        (status = 200, description = "Email verified", body = ActionResponse,
            example = json!({ "success": "Email verified!" })),
        (status = 400, description = "Missing token, malformed body or expired token", body = ActionResponse,
            example = json!({ "error": "Missing token!" })),
        (status = 404, description = "Unknown token or no user for its email", body = ActionResponse,
            example = json!({ "error": "Email does not exist!" })),
        (status = 500, description = "Internal server error", body = ActionResponse,
            example = json!({ "error": "Something went wrong!" }))
    )
)]
#[post("/api/auth/new-verification")]
pub async fn verify_email_handler(
    req: web::Json<VerifyEmailRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    if req.token.trim().is_empty() {
        return ActionResponse::bad_request("Missing token!");
    }

    into_response(data.verify_email_use_case.execute(&req.token).await)
}
