use crate::helpers::{at, get_json_response_body, get_session, toggle, TestApp};
use serde_json::{json, Value};
use shift_request_calendar::ErrorResponse;
use test_context::test_context;

fn day<'a>(body: &'a Value, date: &str) -> &'a Value {
    body.get("days")
        .and_then(Value::as_array)
        .expect("No days in response")
        .iter()
        .find(|day| day.get("date") == Some(&json!(date)))
        .unwrap_or_else(|| panic!("{date} is not in the grid"))
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_month_grid(app: &mut TestApp) {
    let schema = json!({
      "$schema": "http://json-schema.org/draft-04/schema#",
      "type": "object",
      "properties": {
        "month": { "type": "string", "pattern": "^[0-9]{4}-[0-9]{2}$" },
        "deadline": { "type": "string" },
        "deadlinePassed": { "type": "boolean" },
        "canSubmit": { "type": "boolean" },
        "days": {
          "type": "array",
          "items": {
            "type": "object",
            "properties": {
              "date": { "type": "string" },
              "isCurrentMonth": { "type": "boolean" },
              "kind": {
                "type": "string",
                "enum": ["holiday", "sunday", "saturday", "weekday"]
              },
              "shifts": { "type": "array" }
            },
            "required": ["date", "isCurrentMonth", "kind", "shifts"]
          }
        }
      },
      "required": ["month", "deadline", "deadlinePassed", "canSubmit", "days"]
    });

    let response = app.get_calendar("2025-05").await;
    assert_eq!(response.status().as_u16(), 200);

    let body = get_json_response_body(response).await;
    assert!(
        jsonschema::is_valid(&schema, &body),
        "response does not match schema: {body}"
    );

    // 2025-05-01 is a Thursday: four leading days from April
    let days = body.get("days").and_then(Value::as_array).unwrap();
    assert_eq!(days.len(), 35);
    assert_eq!(days[0].get("date").unwrap(), "2025-04-27");
    assert_eq!(days[0].get("isCurrentMonth").unwrap(), false);
    assert_eq!(days.last().unwrap().get("date").unwrap(), "2025-05-31");

    assert_eq!(body.get("deadline").unwrap(), "2025-04-26");
    assert_eq!(body.get("canSubmit").unwrap(), true);
    assert_eq!(day(&body, "2025-05-11").get("kind").unwrap(), "sunday");
    assert_eq!(day(&body, "2025-05-17").get("kind").unwrap(), "saturday");
    assert_eq!(day(&body, "2025-05-12").get("kind").unwrap(), "weekday");

    let golden_week = day(&body, "2025-05-05");
    assert_eq!(golden_week.get("kind").unwrap(), "holiday");
    assert_eq!(golden_week.get("name").unwrap(), "こどもの日");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_show_shifts_with_staff_details(app: &mut TestApp) {
    get_session(app).await;
    toggle(app, "1", "2025-05-10", "morning").await;

    let body = get_json_response_body(app.get_calendar("2025-05").await).await;
    let shifts = day(&body, "2025-05-10")
        .get("shifts")
        .and_then(Value::as_array)
        .unwrap();

    assert_eq!(shifts.len(), 1);
    let shift = &shifts[0];
    assert_eq!(shift.get("staffName").unwrap(), "田中 花子");
    assert_eq!(shift.get("color").unwrap(), "#3B82F6");
    assert_eq!(shift.get("label").unwrap(), "午前");
    assert_eq!(shift.get("start").unwrap(), "08:30");
    assert_eq!(shift.get("end").unwrap(), "12:30");
    assert_eq!(shift.get("notes").unwrap(), "午前勤務");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_use_fallback_colour_for_removed_staff(app: &mut TestApp) {
    get_session(app).await;
    toggle(app, "4", "2025-05-14", "fullday").await;

    app.as_admin();
    assert_eq!(app.delete_staff("4").await.status().as_u16(), 200);

    let body = get_json_response_body(app.get_calendar("2025-05").await).await;
    let shift = &day(&body, "2025-05-14").get("shifts").unwrap()[0];
    assert_eq!(shift.get("staffName").unwrap(), "");
    assert_eq!(shift.get("color").unwrap(), "#6B7280");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_for_invalid_month(app: &mut TestApp) {
    for month in ["2025-13", "May 2025", ""] {
        let response = app.get_calendar(month).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Should reject month: {month}"
        );
        assert!(response.json::<ErrorResponse>().await.is_ok());
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_report_deadline_per_role(app: &mut TestApp) {
    let body = get_json_response_body(app.get_deadline("2025-05").await).await;
    assert_eq!(body.get("deadline").unwrap(), "2025-04-26");
    assert_eq!(body.get("deadlinePassed").unwrap(), false);
    assert_eq!(body.get("canSubmit").unwrap(), true);

    // The deadline day itself is still open
    app.clock.set(at(2025, 4, 26));
    let body = get_json_response_body(app.get_deadline("2025-05").await).await;
    assert_eq!(body.get("canSubmit").unwrap(), true);

    app.clock.set(at(2025, 4, 27));
    let body = get_json_response_body(app.get_deadline("2025-05").await).await;
    assert_eq!(body.get("deadlinePassed").unwrap(), true);
    assert_eq!(body.get("canSubmit").unwrap(), false);

    app.as_admin();
    let body = get_json_response_body(app.get_deadline("2025-05").await).await;
    assert_eq!(body.get("deadlinePassed").unwrap(), true);
    assert_eq!(body.get("canSubmit").unwrap(), true);
}
