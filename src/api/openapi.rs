use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::VerifyEmailRequestDto;
use crate::shared::api::ActionResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Email Verification API",
        version = "1.0.0",
        description = "Consumes single-use verification tokens and marks user emails as verified",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        crate::auth::adapter::incoming::web::routes::verify_email::verify_email_link_handler,
        crate::auth::adapter::incoming::web::routes::verify_email::verify_email_handler,
    ),
    components(
        schemas(
            ActionResponse,
            VerifyEmailRequestDto
        )
    ),
    tags(
        (name = "auth", description = "Email verification endpoints"),
    )
)]
pub struct ApiDoc;
