mod meeting_query_postgres;
mod meeting_repository_postgres;
pub mod sea_orm_entity;

pub use meeting_query_postgres::MeetingQueryPostgres;
pub use meeting_repository_postgres::MeetingRepositoryPostgres;
