use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::meeting::application::domain::entities::MeetingStatus;
use crate::modules::meeting::application::ports::outgoing::{
    CreateMeetingData, MeetingRecord, MeetingView, UserSummary,
};

pub fn user_summary(id: Uuid) -> UserSummary {
    UserSummary {
        id,
        username: format!("user_{}", &id.simple().to_string()[..8]),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
    }
}

/// Stored meeting on 2024-06-01 from 10:00 to 11:00.
pub fn sample_record(id: Uuid, organizer: UserId) -> MeetingRecord {
    sample_record_from(
        id,
        CreateMeetingData {
            organizer,
            title: "Sync".to_string(),
            description: "Weekly".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            participants: vec![],
            status: MeetingStatus::Scheduled,
        },
    )
}

pub fn sample_record_from(id: Uuid, data: CreateMeetingData) -> MeetingRecord {
    let now = Utc.with_ymd_and_hms(2024, 5, 20, 8, 0, 0).unwrap();
    MeetingRecord {
        id,
        organizer: data.organizer,
        title: data.title,
        description: data.description,
        date: data.date,
        start_time: data.start_time,
        end_time: data.end_time,
        participants: data.participants,
        status: data.status,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_view(id: Uuid, organizer: UserId) -> MeetingView {
    let record = sample_record(id, organizer);
    MeetingView {
        id,
        title: record.title,
        description: record.description,
        date: record.date,
        start_time: record.start_time,
        end_time: record.end_time,
        participants: vec![],
        organizer: user_summary(organizer.value()),
        status: record.status,
        created_at: record.created_at,
        updated_at: record.updated_at,
    }
}
