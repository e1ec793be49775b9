// src/modules/meeting/adapter/outgoing/meeting_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::{HashMap, HashSet};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::meeting::adapter::outgoing::sea_orm_entity::meetings::{self, Column, Entity};
use crate::modules::meeting::application::domain::entities::MeetingStatus;
use crate::modules::meeting::application::ports::outgoing::{
    MeetingListFilter, MeetingQuery, MeetingQueryError, MeetingView, UserSummary,
};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct MeetingQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MeetingQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Loads every user referenced by `meetings` in one round trip.
    async fn load_users(
        &self,
        meetings: &[(meetings::Model, Vec<Uuid>)],
    ) -> Result<HashMap<Uuid, UserSummary>, MeetingQueryError> {
        let ids: HashSet<Uuid> = meetings
            .iter()
            .flat_map(|(m, participants)| {
                std::iter::once(m.organizer_id).chain(participants.iter().copied())
            })
            .collect();

        let users = users::Entity::find()
            .filter(users::Column::Id.is_in(ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(users
            .into_iter()
            .map(|u| {
                (
                    u.id,
                    UserSummary {
                        id: u.id,
                        username: u.username,
                        first_name: u.first_name,
                        last_name: u.last_name,
                    },
                )
            })
            .collect())
    }

    async fn expand(
        &self,
        models: Vec<meetings::Model>,
    ) -> Result<Vec<MeetingView>, MeetingQueryError> {
        if models.is_empty() {
            return Ok(vec![]);
        }

        let decoded = models
            .into_iter()
            .map(|m| {
                let participants: Vec<Uuid> = from_json(&m.participants)?;
                Ok((m, participants))
            })
            .collect::<Result<Vec<_>, MeetingQueryError>>()?;

        let users = self.load_users(&decoded).await?;

        decoded
            .into_iter()
            .map(|(m, participants)| model_to_view(m, participants, &users))
            .collect()
    }
}

#[async_trait]
impl MeetingQuery for MeetingQueryPostgres {
    async fn get_by_id(&self, meeting_id: Uuid) -> Result<MeetingView, MeetingQueryError> {
        let meeting = Entity::find_by_id(meeting_id)
            .filter(Column::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(MeetingQueryError::NotFound)?;

        self.expand(vec![meeting])
            .await?
            .into_iter()
            .next()
            .ok_or(MeetingQueryError::NotFound)
    }

    async fn list(&self, filter: MeetingListFilter) -> Result<Vec<MeetingView>, MeetingQueryError> {
        let mut query = Entity::find().filter(Column::IsDeleted.eq(false));

        if let Some(status) = filter.status {
            query = query.filter(Column::Status.eq(status.as_str()));
        }
        if let Some(start_date) = filter.start_date {
            query = query.filter(Column::Date.gte(start_date));
        }
        if let Some(end_date) = filter.end_date {
            query = query.filter(Column::Date.lte(end_date));
        }

        let meetings = query
            .order_by_asc(Column::Date)
            .order_by_asc(Column::StartTime)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.expand(meetings).await
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Participants without a matching user are dropped; a missing organizer
/// means the foreign key was bypassed and is reported as a store error.
fn model_to_view(
    model: meetings::Model,
    participant_ids: Vec<Uuid>,
    users: &HashMap<Uuid, UserSummary>,
) -> Result<MeetingView, MeetingQueryError> {
    let organizer = users.get(&model.organizer_id).cloned().ok_or_else(|| {
        MeetingQueryError::DatabaseError(format!(
            "organizer {} of meeting {} not found",
            model.organizer_id, model.id
        ))
    })?;

    let participants = participant_ids
        .iter()
        .filter_map(|id| users.get(id).cloned())
        .collect();

    let status = MeetingStatus::from_str(&model.status)
        .map_err(|e| MeetingQueryError::SerializationError(e.to_string()))?;

    Ok(MeetingView {
        id: model.id,
        title: model.title,
        description: model.description,
        date: model.date,
        start_time: model.start_time,
        end_time: model.end_time,
        participants,
        organizer,
        status,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, MeetingQueryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| MeetingQueryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> MeetingQueryError {
    MeetingQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
