//! Meeting scheduling for directory users
//!
//! Backs the "schedule meeting" modal on the management grid. Meetings
//! are session-scoped records tied to a directory user by id; the
//! console applies visibility rules before anything reaches this store.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Meeting, MeetingDraft, User};
use shared::util::{now_millis, snowflake_id};

/// Session-scoped meeting store.
#[derive(Debug, Clone, Default)]
pub struct MeetingScheduler {
    meetings: Vec<Meeting>,
}

impl MeetingScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    pub fn len(&self) -> usize {
        self.meetings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }

    /// Meetings scheduled with one employee, in creation order
    pub fn meetings_for(&self, employee_id: i64) -> Vec<&Meeting> {
        self.meetings
            .iter()
            .filter(|m| m.employee_id == employee_id)
            .collect()
    }

    /// Validate a modal draft and record the meeting.
    ///
    /// Date and time are the only required inputs; the duration falls
    /// back to 60 minutes like the modal placeholder suggests.
    pub fn schedule(&mut self, employee: &User, draft: MeetingDraft) -> AppResult<Meeting> {
        let (Some(date), Some(time)) = (draft.date, draft.time) else {
            return Err(AppError::with_message(
                ErrorCode::RequiredField,
                "Please select date and time",
            )
            .with_detail("date", draft.date.is_some())
            .with_detail("time", draft.time.is_some()));
        };
        let meeting = Meeting {
            id: snowflake_id(),
            employee_id: employee.id,
            employee_name: employee.name.clone(),
            meeting_type: draft.meeting_type,
            title: draft.title,
            date,
            time,
            duration_minutes: draft.duration_minutes.unwrap_or(60),
            description: draft.description,
            created_at: now_millis(),
        };
        self.meetings.push(meeting.clone());
        Ok(meeting)
    }

    /// Drop a meeting by id and return it
    pub fn cancel(&mut self, id: i64) -> AppResult<Meeting> {
        let pos = self
            .meetings
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::MeetingNotFound,
                    format!("Meeting {} not found", id),
                )
                .with_detail("meeting_id", id)
            })?;
        Ok(self.meetings.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use shared::models::{MeetingType, Role};

    fn employee() -> User {
        User {
            id: 3,
            name: "Mohamed Ali".to_string(),
            role: Role::Employee,
            department: "Sales".to_string(),
            position: "Sales Representative".to_string(),
            email: "mohamed@company.com".to_string(),
            join_date: NaiveDate::from_ymd_opt(2023, 3, 10).unwrap(),
        }
    }

    fn draft(date: Option<(i32, u32, u32)>, time: Option<(u32, u32)>) -> MeetingDraft {
        MeetingDraft {
            date: date.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap()),
            time: time.map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap()),
            ..MeetingDraft::default()
        }
    }

    #[test]
    fn test_schedule_records_meeting() {
        let mut scheduler = MeetingScheduler::new();
        let meeting = scheduler
            .schedule(&employee(), draft(Some((2024, 6, 1)), Some((10, 30))))
            .unwrap();

        assert_eq!(meeting.employee_id, 3);
        assert_eq!(meeting.employee_name, "Mohamed Ali");
        assert_eq!(meeting.meeting_type, MeetingType::Standup);
        assert_eq!(meeting.duration_minutes, 60);
        assert!(meeting.created_at > 0);
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn test_schedule_requires_date_and_time() {
        let mut scheduler = MeetingScheduler::new();

        for (date, time) in [
            (None, None),
            (Some((2024, 6, 1)), None),
            (None, Some((10, 30))),
        ] {
            let err = scheduler.schedule(&employee(), draft(date, time)).unwrap_err();
            assert_eq!(err.code, ErrorCode::RequiredField);
            assert_eq!(err.message, "Please select date and time");
        }
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_schedule_keeps_explicit_duration() {
        let mut scheduler = MeetingScheduler::new();
        let mut payload = draft(Some((2024, 6, 1)), Some((10, 30)));
        payload.meeting_type = MeetingType::OneOnOne;
        payload.duration_minutes = Some(30);
        payload.title = Some("Quarterly check-in".to_string());

        let meeting = scheduler.schedule(&employee(), payload).unwrap();
        assert_eq!(meeting.meeting_type, MeetingType::OneOnOne);
        assert_eq!(meeting.duration_minutes, 30);
        assert_eq!(meeting.title.as_deref(), Some("Quarterly check-in"));
    }

    #[test]
    fn test_meetings_for_filters_by_employee() {
        let mut scheduler = MeetingScheduler::new();
        let first = employee();
        let mut second = employee();
        second.id = 4;
        second.name = "Sara Khaled".to_string();

        scheduler
            .schedule(&first, draft(Some((2024, 6, 1)), Some((10, 0))))
            .unwrap();
        scheduler
            .schedule(&second, draft(Some((2024, 6, 2)), Some((11, 0))))
            .unwrap();
        scheduler
            .schedule(&first, draft(Some((2024, 6, 3)), Some((9, 0))))
            .unwrap();

        let for_first = scheduler.meetings_for(3);
        assert_eq!(for_first.len(), 2);
        assert!(for_first.iter().all(|m| m.employee_name == "Mohamed Ali"));
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = MeetingScheduler::new();
        let meeting = scheduler
            .schedule(&employee(), draft(Some((2024, 6, 1)), Some((10, 0))))
            .unwrap();

        let cancelled = scheduler.cancel(meeting.id).unwrap();
        assert_eq!(cancelled.id, meeting.id);
        assert!(scheduler.is_empty());

        let err = scheduler.cancel(meeting.id).unwrap_err();
        assert_eq!(err.code, ErrorCode::MeetingNotFound);
    }
}
