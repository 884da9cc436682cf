pub mod email_verification_repository_postgres;
pub mod sea_orm_entity;
pub mod user_query_postgres;
pub mod verification_token_query_postgres;
