use crate::helpers::{
    at, get_json_response_body, get_session, shifts_in, toggle, TestApp,
};
use reqwest::StatusCode;
use serde_json::{json, Value};
use shift_request_calendar::{
    domain::{ChangeSource, StoreChange},
    ErrorResponse,
};
use std::sync::{Arc, Mutex};
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_401_without_session(app: &mut TestApp) {
    let response = app
        .post_toggle(&json!({
            "staffId": "1",
            "date": "2025-05-10",
            "timeType": "morning"
        }))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response
            .json::<ErrorResponse>()
            .await
            .expect("Could not deserialize response body to ErrorResponse")
            .error,
        "Missing session"
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_add_then_remove_on_repeated_toggle(app: &mut TestApp) {
    let session_id = get_session(app).await;

    let added = toggle(app, "1", "2025-05-10", "morning").await;
    assert_eq!(added.get("action").unwrap(), "added");
    let shift = added.get("shift").unwrap();
    assert_eq!(shift.get("staffId").unwrap(), "1");
    assert_eq!(shift.get("timeType").unwrap(), "morning");
    assert_eq!(shift.get("status").unwrap(), "requested");
    assert_eq!(shift.get("notes").unwrap(), "午前勤務");
    assert_eq!(
        shift.get("created").and_then(|c| c.get("sessionId")).unwrap(),
        &json!(session_id)
    );
    assert_eq!(shifts_in(app, "2025-05").await.len(), 1);

    let removed = toggle(app, "1", "2025-05-10", "morning").await;
    assert_eq!(removed.get("action").unwrap(), "removed");
    assert_eq!(
        removed
            .get("deletedShift")
            .and_then(|d| d.get("shift"))
            .and_then(|s| s.get("id")),
        shift.get("id")
    );
    assert!(shifts_in(app, "2025-05").await.is_empty());
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_403_after_deadline_for_staff(app: &mut TestApp) {
    get_session(app).await;
    app.clock.set(at(2025, 4, 27));

    let request = json!({
        "staffId": "2",
        "date": "2025-05-10",
        "timeType": "afternoon"
    });

    let response = app.post_toggle(&request).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        response.json::<ErrorResponse>().await.unwrap().error,
        "希望提出期限が過ぎています"
    );

    // June is still open
    let response = app
        .post_toggle(&json!({
            "staffId": "2",
            "date": "2025-06-10",
            "timeType": "afternoon"
        }))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    app.as_admin();
    let response = app.post_toggle(&request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_keep_duplicate_detailed_entries(app: &mut TestApp) {
    get_session(app).await;

    let request = json!({
        "staffId": "3",
        "date": "2025-05-12",
        "timeType": "fullday",
        "notes": "研修のため"
    });

    for _ in 0..2 {
        let response = app.post_shift(&request).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = get_json_response_body(response).await;
        assert_eq!(body.get("notes").unwrap(), "研修のため");
    }
    assert_eq!(shifts_in(app, "2025-05").await.len(), 2);

    // A toggle on the same tuple removes one of them
    let removed = toggle(app, "3", "2025-05-12", "fullday").await;
    assert_eq!(removed.get("action").unwrap(), "removed");
    assert_eq!(shifts_in(app, "2025-05").await.len(), 1);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_for_invalid_detailed_entry(app: &mut TestApp) {
    get_session(app).await;

    let cases = [
        (
            json!({ "staffId": "1", "date": "", "timeType": "morning" }),
            "Date cannot be empty",
        ),
        (
            json!({ "staffId": "1", "date": "2025-05-10", "timeType": "evening" }),
            "Invalid time type: evening",
        ),
        (
            json!({ "staffId": " ", "date": "2025-05-10", "timeType": "morning" }),
            "Staff ID cannot be empty",
        ),
    ];

    for (request, message) in cases {
        let response = app.post_shift(&request).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "Should reject {request}"
        );
        assert_eq!(response.json::<ErrorResponse>().await.unwrap().error, message);
    }
    assert!(shifts_in(app, "2025-05").await.is_empty());
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_404_for_unknown_staff(app: &mut TestApp) {
    get_session(app).await;

    let response = app
        .post_toggle(&json!({
            "staffId": "99",
            "date": "2025-05-10",
            "timeType": "morning"
        }))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_ignore_removal_of_unknown_shift(app: &mut TestApp) {
    get_session(app).await;

    let response = app.delete_shift(&uuid::Uuid::new_v4().to_string()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = get_json_response_body(response).await;
    assert_eq!(body.get("deletedShift"), Some(&Value::Null));

    let response = app.delete_shift("not-a-uuid").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_restore_deleted_shifts_as_admin(app: &mut TestApp) {
    get_session(app).await;

    let added = toggle(app, "1", "2025-05-20", "afternoon").await;
    let shift_id = added["shift"]["id"].as_str().unwrap().to_owned();

    let response = app.delete_shift(&shift_id).await;
    assert_eq!(response.status(), StatusCode::OK);
    let deleted_id = get_json_response_body(response).await["deletedShift"]["id"]
        .as_str()
        .unwrap()
        .to_owned();

    // Deletion history belongs to administrators
    assert_eq!(app.get_deleted_shifts().await.status(), StatusCode::FORBIDDEN);
    let restore = json!({ "deletedShiftId": deleted_id });
    assert_eq!(app.post_restore(&restore).await.status(), StatusCode::FORBIDDEN);

    app.as_admin();
    let history = get_json_response_body(app.get_deleted_shifts().await).await;
    assert_eq!(history["deletedShifts"].as_array().unwrap().len(), 1);

    // The slot is taken again, so the restore conflicts
    app.as_staff();
    let retaken = toggle(app, "1", "2025-05-20", "afternoon").await;
    app.as_admin();
    assert_eq!(app.post_restore(&restore).await.status(), StatusCode::CONFLICT);

    let retaken_id = retaken["shift"]["id"].as_str().unwrap();
    assert_eq!(app.delete_shift(retaken_id).await.status(), StatusCode::OK);

    let response = app.post_restore(&restore).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let restored = get_json_response_body(response).await;
    assert_ne!(restored["id"].as_str().unwrap(), shift_id);
    assert_eq!(restored["date"], "2025-05-20");
    assert_eq!(restored["timeType"], "afternoon");

    let live = shifts_in(app, "2025-05").await;
    assert_eq!(live.len(), 1);
    assert_eq!(live[0]["id"], restored["id"]);

    assert_eq!(app.post_restore(&restore).await.status(), StatusCode::NOT_FOUND);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_publish_changes_to_subscribers(app: &mut TestApp) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let _subscription = app.app_state.change_feed.subscribe(Box::new(
        move |change: &StoreChange| {
            sink.lock().unwrap().push(change.clone());
        },
    ));

    get_session(app).await;
    toggle(app, "2", "2025-05-09", "morning").await;
    toggle(app, "2", "2025-05-09", "morning").await;

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert!(matches!(seen[0], StoreChange::ShiftAdded { .. }));
    assert!(matches!(seen[1], StoreChange::ShiftRemoved { .. }));
}
