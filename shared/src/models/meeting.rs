//! Meeting Model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Meeting type offered by the scheduling modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingType {
    Standup,
    Review,
    OneOnOne,
}

impl Default for MeetingType {
    fn default() -> Self {
        Self::Standup
    }
}

impl MeetingType {
    /// The human-readable select label
    pub const fn label(&self) -> &'static str {
        match self {
            MeetingType::Standup => "Standup",
            MeetingType::Review => "Review",
            MeetingType::OneOnOne => "One-on-One",
        }
    }
}

/// Scheduled meeting record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: i64,
    /// Employee the meeting is scheduled with
    pub employee_id: i64,
    /// Employee display name at scheduling time
    pub employee_name: String,
    pub meeting_type: MeetingType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Duration in minutes
    pub duration_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creation timestamp (Unix millis)
    pub created_at: i64,
}

/// Meeting draft mirroring the modal inputs; date and time stay optional
/// until validated by the scheduler.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeetingDraft {
    #[serde(default)]
    pub meeting_type: MeetingType,
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    /// Duration in minutes (60 when omitted)
    pub duration_minutes: Option<u32>,
    pub description: Option<String>,
}
