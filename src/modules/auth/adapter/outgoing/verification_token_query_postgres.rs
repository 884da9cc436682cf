use super::sea_orm_entity::verification_tokens::{
    Column as TokenColumn, Entity as TokenEntity, Model as TokenModel,
};
use crate::modules::auth::application::domain::entities::VerificationToken;
use crate::modules::auth::application::ports::outgoing::{
    VerificationTokenQuery, VerificationTokenQueryError,
};
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct VerificationTokenQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VerificationTokenQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_domain(model: TokenModel) -> VerificationToken {
        VerificationToken {
            id: model.id,
            email: model.email,
            token: model.token,
            expires: model.expires.with_timezone(&chrono::Utc),
        }
    }
}

#[async_trait]
impl VerificationTokenQuery for VerificationTokenQueryPostgres {
    async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<VerificationToken>, VerificationTokenQueryError> {
        let found = TokenEntity::find()
            .filter(TokenColumn::Token.eq(token))
            .one(&*self.db)
            .await
            .map_err(|e| VerificationTokenQueryError::DatabaseError(e.to_string()))?;

        Ok(found.map(Self::map_to_domain))
    }
}
