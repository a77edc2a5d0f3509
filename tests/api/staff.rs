use crate::helpers::{get_json_response_body, get_session, TestApp};
use reqwest::StatusCode;
use serde_json::{json, Value};
use shift_request_calendar::ErrorResponse;
use test_context::test_context;

async fn staff_names(app: &mut TestApp) -> Vec<String> {
    let response = app.get_staff().await;
    assert_eq!(response.status(), StatusCode::OK);

    get_json_response_body(response).await["staff"]
        .as_array()
        .expect("No staff array in response")
        .iter()
        .map(|member| member["name"].as_str().unwrap().to_owned())
        .collect()
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_list_default_roster_ordered_by_name(app: &mut TestApp) {
    let schema = json!({
      "$schema": "http://json-schema.org/draft-04/schema#",
      "type": "object",
      "properties": {
        "staff": {
          "type": "array",
          "items": {
            "type": "object",
            "properties": {
              "id": { "type": "string", "minLength": 1 },
              "name": { "type": "string", "minLength": 1 },
              "color": { "type": "string", "pattern": "^#[0-9A-F]{6}$" }
            },
            "required": ["id", "name", "color"]
          }
        }
      },
      "required": ["staff"]
    });

    let body = get_json_response_body(app.get_staff().await).await;
    assert!(
        jsonschema::is_valid(&schema, &body),
        "response does not match schema: {body}"
    );

    let names = staff_names(app).await;
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names.len(), 4);
    assert_eq!(names, sorted);
    assert!(names.contains(&"田中 花子".to_owned()));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_403_for_staff_role(app: &mut TestApp) {
    get_session(app).await;

    let response = app.post_staff(&json!({ "name": "高橋 次郎" })).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        response.json::<ErrorResponse>().await.unwrap().error,
        "Administrator role required"
    );
    assert_eq!(app.delete_staff("1").await.status(), StatusCode::FORBIDDEN);
    assert_eq!(staff_names(app).await.len(), 4);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_manage_staff_as_admin(app: &mut TestApp) {
    get_session(app).await;
    app.as_admin();

    let response = app
        .post_staff(&json!({ "name": "高橋 次郎", "color": "#8b5cf6" }))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let member: Value = get_json_response_body(response).await;
    let id = member["id"].as_str().unwrap().to_owned();
    assert!(uuid::Uuid::try_parse(&id).is_ok());
    assert_eq!(member["color"], "#8B5CF6");

    let response = app
        .put_staff(&id, &json!({ "name": "高橋 二郎" }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let member = get_json_response_body(response).await;
    assert_eq!(member["name"], "高橋 二郎");
    assert_eq!(member["color"], "#8B5CF6");

    assert!(staff_names(app).await.contains(&"高橋 二郎".to_owned()));

    assert_eq!(app.delete_staff(&id).await.status(), StatusCode::OK);
    assert_eq!(app.delete_staff(&id).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        app.put_staff(&id, &json!({ "name": "x" })).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_409_for_duplicate_id(app: &mut TestApp) {
    get_session(app).await;
    app.as_admin();

    let response = app.post_staff(&json!({ "id": "1", "name": "重複" })).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_for_invalid_input(app: &mut TestApp) {
    get_session(app).await;
    app.as_admin();

    let requests = [
        json!({ "name": "" }),
        json!({ "name": "x".repeat(256) }),
        json!({ "name": "高橋 次郎", "color": "blue" }),
    ];

    for request in requests.iter() {
        let response = app.post_staff(request).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "Should reject {request}"
        );
    }

    let response = app.put_staff("2", &json!({ "color": "#12345" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
