use crate::auth::application::use_cases::verify_email::IVerifyEmailUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    verify_email: Option<Arc<dyn IVerifyEmailUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            verify_email: Some(Arc::new(StubVerifyEmailUseCase)),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_verify_email(
        mut self,
        uc: impl IVerifyEmailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.verify_email = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            verify_email_use_case: self
                .verify_email
                .unwrap_or_else(|| Arc::new(StubVerifyEmailUseCase)),
        })
    }
}
