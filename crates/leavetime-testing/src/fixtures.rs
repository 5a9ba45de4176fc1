use leavetime_types::{BestTrain, CommuteBlock, StatusPayload};

/// Active payload in the newer `commute` schema.
pub fn commute_payload(minutes_until_leave: i64, should_have_left: bool) -> StatusPayload {
    StatusPayload {
        active: true,
        schedule_status: String::new(),
        line: "Piccadilly".to_string(),
        work_start: None,
        best_train: None,
        commute: Some(CommuteBlock {
            minutes_until_leave,
            should_have_left,
            leave_home: "08:12".to_string(),
            target_train: "08:20".to_string(),
            arrival_target: "08:55".to_string(),
        }),
    }
}

/// Active payload in the legacy `best_train` schema.
pub fn legacy_payload(countdown_seconds: i64, countdown_minutes: i64) -> StatusPayload {
    StatusPayload {
        active: true,
        schedule_status: String::new(),
        line: "Piccadilly".to_string(),
        work_start: Some("09:00".to_string()),
        best_train: Some(BestTrain {
            countdown_seconds,
            countdown_minutes,
            train_departs: "08:20".to_string(),
            arrival_at_work: "08:55".to_string(),
        }),
        commute: None,
    }
}

/// Legacy payload where no train arrives in time.
pub fn no_train_payload(work_start: &str) -> StatusPayload {
    StatusPayload {
        active: true,
        schedule_status: String::new(),
        line: "Piccadilly".to_string(),
        work_start: Some(work_start.to_string()),
        best_train: None,
        commute: None,
    }
}

/// Payload outside commute hours.
pub fn inactive_payload(schedule_status: &str) -> StatusPayload {
    StatusPayload {
        active: false,
        schedule_status: schedule_status.to_string(),
        line: String::new(),
        work_start: None,
        best_train: None,
        commute: None,
    }
}

/// Serialize a payload the way the status server would.
pub fn status_body(payload: &StatusPayload) -> String {
    serde_json::to_string(payload).unwrap()
}

/// A body cut off mid-object, as a flaky server might produce.
pub fn truncated_body() -> &'static str {
    r#"{"active": true, "line": "Picc"#
}

/// Valid JSON that violates the payload contract: no `active` field.
pub fn missing_active_body() -> &'static str {
    r#"{"schedule_status": "ok", "line": "Piccadilly"}"#
}
