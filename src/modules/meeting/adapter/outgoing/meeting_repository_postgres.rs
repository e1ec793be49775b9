use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::meeting::adapter::outgoing::sea_orm_entity::meetings::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::meeting::application::domain::entities::MeetingStatus;
use crate::modules::meeting::application::ports::outgoing::{
    CreateMeetingData, MeetingRecord, MeetingRepository, MeetingRepositoryError,
    UpdateMeetingData,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct MeetingRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MeetingRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MeetingRepository for MeetingRepositoryPostgres {
    async fn create_meeting(
        &self,
        data: CreateMeetingData,
    ) -> Result<MeetingRecord, MeetingRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            organizer_id: Set(data.organizer.into()),
            title: Set(data.title.trim().to_string()),
            description: Set(data.description),
            date: Set(data.date),
            start_time: Set(data.start_time),
            end_time: Set(data.end_time),
            participants: Set(to_json(&data.participants)?),
            status: Set(data.status.as_str().to_string()),
            is_deleted: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_record(result)
    }

    async fn find_active(&self, meeting_id: Uuid) -> Result<MeetingRecord, MeetingRepositoryError> {
        let model = Entity::find_by_id(meeting_id)
            .filter(Column::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(MeetingRepositoryError::NotFound)?;

        model_to_record(model)
    }

    async fn update_meeting(
        &self,
        meeting_id: Uuid,
        data: UpdateMeetingData,
    ) -> Result<MeetingRecord, MeetingRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(title) = data.title {
            model.title = Set(title.trim().to_string());
        }
        if let Some(description) = data.description {
            model.description = Set(description);
        }
        if let Some(date) = data.date {
            model.date = Set(date);
        }
        if let Some(start_time) = data.start_time {
            model.start_time = Set(start_time);
        }
        if let Some(end_time) = data.end_time {
            model.end_time = Set(end_time);
        }
        if let Some(participants) = data.participants {
            model.participants = Set(to_json(&participants)?);
        }
        if let Some(status) = data.status {
            model.status = Set(status.as_str().to_string());
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(meeting_id))
            .filter(Column::IsDeleted.eq(false))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(MeetingRepositoryError::NotFound)?;

        model_to_record(result)
    }

    async fn soft_delete_meeting(&self, meeting_id: Uuid) -> Result<(), MeetingRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::IsDeleted, Expr::value(true))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(meeting_id))
            .filter(Column::IsDeleted.eq(false))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(MeetingRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_record(model: meetings::Model) -> Result<MeetingRecord, MeetingRepositoryError> {
    let status = MeetingStatus::from_str(&model.status)
        .map_err(|e| MeetingRepositoryError::SerializationError(e.to_string()))?;

    Ok(MeetingRecord {
        id: model.id,
        organizer: UserId::from(model.organizer_id),
        title: model.title,
        description: model.description,
        date: model.date,
        start_time: model.start_time,
        end_time: model.end_time,
        participants: from_json(&model.participants)?,
        status,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, MeetingRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| MeetingRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, MeetingRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| MeetingRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> MeetingRepositoryError {
    MeetingRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};

    use crate::tests::support::sql_log::{bound_value, logged_statements, ACTIVE_FILTER};

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn create_test_meeting_data(organizer: Uuid) -> CreateMeetingData {
        CreateMeetingData {
            organizer: UserId::from(organizer),
            title: "Sync".to_string(),
            description: "Weekly".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            start_time: hm(10, 0),
            end_time: hm(11, 0),
            participants: vec![],
            status: MeetingStatus::Scheduled,
        }
    }

    fn create_mock_meeting_model(id: Uuid, organizer_id: Uuid, title: &str) -> meetings::Model {
        let now = Utc::now().fixed_offset();

        meetings::Model {
            id,
            organizer_id,
            title: title.to_string(),
            description: "Weekly".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            start_time: hm(10, 0),
            end_time: hm(11, 0),
            participants: serde_json::json!([]),
            status: "scheduled".to_string(),
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    // ========================================================================
    // create_meeting Tests
    // ========================================================================

    #[tokio::test]
    async fn test_create_meeting_success() {
        let meeting_id = Uuid::new_v4();
        let organizer = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![create_mock_meeting_model(
                meeting_id, organizer, "Sync",
            )]])
            .into_connection();

        let repo = MeetingRepositoryPostgres::new(Arc::new(db));
        let record = repo
            .create_meeting(create_test_meeting_data(organizer))
            .await
            .unwrap();

        assert_eq!(record.id, meeting_id);
        assert_eq!(record.organizer, UserId::from(organizer));
        assert_eq!(record.status, MeetingStatus::Scheduled);
        assert_eq!(record.start_time, hm(10, 0));
    }

    #[tokio::test]
    async fn test_create_meeting_preserves_participant_order() {
        let organizer = Uuid::new_v4();
        let participants = vec![Uuid::new_v4(), Uuid::new_v4()];

        let mut model = create_mock_meeting_model(Uuid::new_v4(), organizer, "Sync");
        model.participants = serde_json::to_value(&participants).unwrap();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let repo = MeetingRepositoryPostgres::new(Arc::new(db));
        let mut data = create_test_meeting_data(organizer);
        data.participants = participants.clone();

        let record = repo.create_meeting(data).await.unwrap();

        assert_eq!(record.participants, participants);
    }

    #[tokio::test]
    async fn test_create_meeting_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection timeout".to_string())])
            .into_connection();

        let repo = MeetingRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .create_meeting(create_test_meeting_data(Uuid::new_v4()))
            .await;

        match result.unwrap_err() {
            MeetingRepositoryError::DatabaseError(msg) => {
                assert!(msg.contains("connection timeout"));
            }
            other => panic!("Expected DatabaseError, got {other:?}"),
        }
    }

    // ========================================================================
    // find_active Tests
    // ========================================================================

    #[tokio::test]
    async fn test_find_active_success() {
        let meeting_id = Uuid::new_v4();
        let organizer = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![create_mock_meeting_model(
                meeting_id, organizer, "Sync",
            )]])
            .into_connection();

        let repo = MeetingRepositoryPostgres::new(Arc::new(db));
        let record = repo.find_active(meeting_id).await.unwrap();

        assert!(record.is_organized_by(UserId::from(organizer)));
    }

    #[tokio::test]
    async fn test_find_active_filters_on_id_and_active_rows() {
        let meeting_id = Uuid::new_v4();

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![create_mock_meeting_model(
                    meeting_id,
                    Uuid::new_v4(),
                    "Sync",
                )]])
                .into_connection(),
        );

        let repo = MeetingRepositoryPostgres::new(db.clone());
        repo.find_active(meeting_id).await.unwrap();
        drop(repo);

        let statements = logged_statements(db);
        assert_eq!(statements.len(), 1);
        assert_eq!(
            bound_value(&statements[0], r#""meetings"."id" = "#),
            Some(Value::from(meeting_id))
        );
        assert_eq!(
            bound_value(&statements[0], ACTIVE_FILTER),
            Some(Value::from(false))
        );
    }

    #[tokio::test]
    async fn test_find_active_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<meetings::Model>::new()])
            .into_connection();

        let repo = MeetingRepositoryPostgres::new(Arc::new(db));
        let result = repo.find_active(Uuid::new_v4()).await;

        assert!(matches!(result, Err(MeetingRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_find_active_unknown_status_is_serialization_error() {
        let mut model = create_mock_meeting_model(Uuid::new_v4(), Uuid::new_v4(), "Sync");
        model.status = "postponed".to_string();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let repo = MeetingRepositoryPostgres::new(Arc::new(db));
        let result = repo.find_active(Uuid::new_v4()).await;

        assert!(matches!(
            result,
            Err(MeetingRepositoryError::SerializationError(_))
        ));
    }

    // ========================================================================
    // update_meeting Tests
    // ========================================================================

    #[tokio::test]
    async fn test_update_meeting_returns_updated_row() {
        let meeting_id = Uuid::new_v4();
        let organizer = Uuid::new_v4();

        let mut model = create_mock_meeting_model(meeting_id, organizer, "Retro");
        model.status = "cancelled".to_string();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let repo = MeetingRepositoryPostgres::new(Arc::new(db));
        let record = repo
            .update_meeting(
                meeting_id,
                UpdateMeetingData {
                    title: Some("Retro".to_string()),
                    status: Some(MeetingStatus::Cancelled),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(record.title, "Retro");
        assert_eq!(record.status, MeetingStatus::Cancelled);
        assert_eq!(record.organizer, UserId::from(organizer));
    }

    #[tokio::test]
    async fn test_update_meeting_writes_only_supplied_fields_on_active_row() {
        let meeting_id = Uuid::new_v4();

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![create_mock_meeting_model(
                    meeting_id,
                    Uuid::new_v4(),
                    "Retro",
                )]])
                .into_connection(),
        );

        let repo = MeetingRepositoryPostgres::new(db.clone());
        repo.update_meeting(
            meeting_id,
            UpdateMeetingData {
                title: Some("  Retro ".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        drop(repo);

        let statements = logged_statements(db);
        assert_eq!(statements.len(), 1);
        let stmt = &statements[0];

        assert!(stmt.sql.starts_with(r#"UPDATE "meetings" SET"#), "{}", stmt.sql);
        assert_eq!(bound_value(stmt, r#""title" = "#), Some(Value::from("Retro")));
        assert!(bound_value(stmt, r#""updated_at" = "#).is_some());
        assert!(!stmt.sql.contains(r#""organizer_id" = "#));
        assert!(!stmt.sql.contains(r#""description" = "#));
        assert_eq!(
            bound_value(stmt, r#""meetings"."id" = "#),
            Some(Value::from(meeting_id))
        );
        assert_eq!(bound_value(stmt, ACTIVE_FILTER), Some(Value::from(false)));
    }

    #[tokio::test]
    async fn test_update_meeting_deleted_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<meetings::Model>::new()])
            .into_connection();

        let repo = MeetingRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .update_meeting(Uuid::new_v4(), UpdateMeetingData::default())
            .await;

        assert!(matches!(result, Err(MeetingRepositoryError::NotFound)));
    }

    // ========================================================================
    // soft_delete_meeting Tests
    // ========================================================================

    #[tokio::test]
    async fn test_soft_delete_meeting_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = MeetingRepositoryPostgres::new(Arc::new(db));

        assert!(repo.soft_delete_meeting(Uuid::new_v4()).await.is_ok());
    }

    #[tokio::test]
    async fn test_soft_delete_meeting_flags_active_row() {
        let meeting_id = Uuid::new_v4();

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results(vec![MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .into_connection(),
        );

        let repo = MeetingRepositoryPostgres::new(db.clone());
        repo.soft_delete_meeting(meeting_id).await.unwrap();
        drop(repo);

        let statements = logged_statements(db);
        assert_eq!(statements.len(), 1);
        let stmt = &statements[0];

        assert!(stmt.sql.starts_with(r#"UPDATE "meetings" SET"#), "{}", stmt.sql);
        assert!(!stmt.sql.contains("DELETE"));
        assert_eq!(bound_value(stmt, r#"SET "is_deleted" = "#), Some(Value::from(true)));
        assert!(bound_value(stmt, r#""updated_at" = "#).is_some());
        assert_eq!(
            bound_value(stmt, r#""meetings"."id" = "#),
            Some(Value::from(meeting_id))
        );
        assert_eq!(bound_value(stmt, ACTIVE_FILTER), Some(Value::from(false)));
    }

    #[tokio::test]
    async fn test_soft_delete_meeting_already_deleted() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = MeetingRepositoryPostgres::new(Arc::new(db));
        let result = repo.soft_delete_meeting(Uuid::new_v4()).await;

        assert!(matches!(result, Err(MeetingRepositoryError::NotFound)));
    }

    // ========================================================================
    // Helper Function Tests
    // ========================================================================

    #[test]
    fn test_from_json_rejects_non_array() {
        let json = serde_json::json!("not an array");
        let result: Result<Vec<Uuid>, _> = from_json(&json);

        assert!(matches!(
            result,
            Err(MeetingRepositoryError::SerializationError(_))
        ));
    }
}
