use crate::helpers::{get_json_response_body, TestApp};
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_201_and_set_session_cookie(app: &mut TestApp) {
    let response = app.post_session().await;
    assert_eq!(response.status().as_u16(), 201);

    let session_cookie = response
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("No session cookie found");
    assert!(session_cookie.http_only());

    let cookie_value = session_cookie.value().to_owned();
    let body = get_json_response_body(response).await;
    let session_id = body
        .get("sessionId")
        .and_then(|id| id.as_str())
        .expect("No sessionId in response");

    assert!(uuid::Uuid::try_parse(session_id).is_ok());
    assert_eq!(session_id, cookie_value);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_200_and_keep_existing_session(app: &mut TestApp) {
    let first = get_json_response_body(app.post_session().await).await;

    let response = app.post_session().await;
    assert_eq!(response.status().as_u16(), 200);

    let second = get_json_response_body(response).await;
    assert_eq!(first.get("sessionId"), second.get("sessionId"));
}
