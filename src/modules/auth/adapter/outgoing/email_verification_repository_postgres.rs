use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, TransactionTrait};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::{
    EmailVerificationRepository, EmailVerificationRepositoryError,
};

use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity};
use super::sea_orm_entity::verification_tokens::Entity as TokenEntity;

#[derive(Clone, Debug)]
pub struct EmailVerificationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EmailVerificationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> EmailVerificationRepositoryError {
        EmailVerificationRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl EmailVerificationRepository for EmailVerificationRepositoryPostgres {
    async fn verify_and_consume(
        &self,
        user_id: Uuid,
        email: String,
        verified_at: DateTime<Utc>,
        token_id: Uuid,
    ) -> Result<(), EmailVerificationRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        // Delete first: the row lock serialises concurrent requests for the
        // same token, and the loser sees zero affected rows.
        let deleted = match TokenEntity::delete_by_id(token_id).exec(&txn).await {
            Ok(res) => res,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        if deleted.rows_affected != 1 {
            let _ = txn.rollback().await;
            return Err(EmailVerificationRepositoryError::TokenAlreadyConsumed);
        }

        let updated = match UserEntity::update_many()
            .col_expr(
                UserColumn::EmailVerified,
                Expr::value(verified_at.fixed_offset()),
            )
            .col_expr(UserColumn::Email, Expr::value(email))
            .col_expr(UserColumn::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(UserColumn::Id.eq(user_id))
            .exec(&txn)
            .await
        {
            Ok(res) => res,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        if updated.rows_affected == 0 {
            let _ = txn.rollback().await;
            return Err(EmailVerificationRepositoryError::UserNotFound);
        }

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(())
    }
}
