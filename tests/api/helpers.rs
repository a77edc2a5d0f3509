use chrono::{NaiveDate, NaiveDateTime};
use reqwest::{cookie::Jar, Method, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use shift_request_calendar::{
    app_state::AppState,
    domain::{default_roster, Clock, DeadlineGate},
    utils::constants::{test, ROLE_HEADER_NAME},
    Application,
};
use std::sync::{Arc, Mutex};
use test_context::AsyncTestContext;

/// Clock the tests can move between requests.
pub struct TestClock(Mutex<NaiveDateTime>);

impl TestClock {
    pub fn set(&self, now: NaiveDateTime) {
        *self.0.lock().unwrap() = now;
    }
}

impl Clock for TestClock {
    fn now(&self) -> NaiveDateTime {
        *self.0.lock().unwrap()
    }
}

pub fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(10, 0, 0))
        .expect("valid timestamp")
}

pub struct TestApp {
    pub address: String,
    pub clock: Arc<TestClock>,
    pub cookie_jar: Arc<Jar>,
    pub http_client: reqwest::Client,
    pub app_state: AppState,
    /// Sent as the role header when set.
    pub role: Option<&'static str>,
}

impl TestApp {
    pub async fn new() -> Self {
        // Requests for May 2025 are open until 2025-04-26
        let clock = Arc::new(TestClock(Mutex::new(at(2025, 4, 20))));

        let app_state = AppState::in_memory(
            default_roster(),
            clock.clone(),
            DeadlineGate::default(),
        );

        let app = Application::build(app_state.clone(), test::APP_ADDRESS)
            .await
            .expect("Failed to build app");
        let address = format!("http://{}", app.address.clone());

        #[allow(clippy::let_underscore_future)]
        let _ = tokio::spawn(app.run());

        let cookie_jar = Arc::new(Jar::default());
        let http_client = reqwest::Client::builder()
            .cookie_provider(cookie_jar.clone())
            .build()
            .unwrap();

        Self {
            address,
            clock,
            cookie_jar,
            http_client,
            app_state,
            role: None,
        }
    }

    pub fn as_admin(&mut self) {
        self.role = Some("admin");
    }

    pub fn as_staff(&mut self) {
        self.role = Some("staff");
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http_client
            .request(method, format!("{}{}", &self.address, path));
        match self.role {
            Some(role) => builder.header(ROLE_HEADER_NAME, role),
            None => builder,
        }
    }

    async fn send(builder: RequestBuilder) -> Response {
        builder.send().await.expect("Failed to execute request")
    }

    pub async fn post_session(&self) -> Response {
        Self::send(self.request(Method::POST, "/session")).await
    }

    pub async fn get_calendar(&self, month: &str) -> Response {
        Self::send(
            self.request(Method::GET, "/calendar")
                .query(&[("month", month)]),
        )
        .await
    }

    pub async fn get_deadline(&self, month: &str) -> Response {
        Self::send(
            self.request(Method::GET, "/deadline")
                .query(&[("month", month)]),
        )
        .await
    }

    pub async fn get_staff(&self) -> Response {
        Self::send(self.request(Method::GET, "/staff")).await
    }

    pub async fn post_staff<Body>(&self, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        Self::send(self.request(Method::POST, "/staff").json(body)).await
    }

    pub async fn put_staff<Body>(&self, staff_id: &str, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        Self::send(
            self.request(Method::PUT, "/staff")
                .query(&[("staffId", staff_id)])
                .json(body),
        )
        .await
    }

    pub async fn delete_staff(&self, staff_id: &str) -> Response {
        Self::send(
            self.request(Method::DELETE, "/staff")
                .query(&[("staffId", staff_id)]),
        )
        .await
    }

    pub async fn get_shifts(&self, month: &str) -> Response {
        Self::send(
            self.request(Method::GET, "/shifts")
                .query(&[("month", month)]),
        )
        .await
    }

    pub async fn post_shift<Body>(&self, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        Self::send(self.request(Method::POST, "/shifts").json(body)).await
    }

    pub async fn post_toggle<Body>(&self, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        Self::send(self.request(Method::POST, "/shifts/toggle").json(body))
            .await
    }

    pub async fn delete_shift(&self, shift_id: &str) -> Response {
        Self::send(
            self.request(Method::DELETE, "/shifts")
                .query(&[("shiftId", shift_id)]),
        )
        .await
    }

    pub async fn get_deleted_shifts(&self) -> Response {
        Self::send(self.request(Method::GET, "/shifts/deleted")).await
    }

    pub async fn post_restore<Body>(&self, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        Self::send(self.request(Method::POST, "/shifts/restore").json(body))
            .await
    }

    pub async fn get_holidays(&self, month: &str) -> Response {
        Self::send(
            self.request(Method::GET, "/holidays")
                .query(&[("month", month)]),
        )
        .await
    }

    pub async fn post_custom_holiday<Body>(&self, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        Self::send(self.request(Method::POST, "/holidays/custom").json(body))
            .await
    }

    pub async fn delete_custom_holiday(&self, date: &str) -> Response {
        Self::send(
            self.request(Method::DELETE, "/holidays/custom")
                .query(&[("date", date)]),
        )
        .await
    }
}

impl AsyncTestContext for TestApp {
    async fn setup() -> TestApp {
        TestApp::new().await
    }
}

pub async fn get_json_response_body(response: Response) -> Value {
    let body: Value = response
        .json()
        .await
        .expect("failed to parse response body JSON");
    body
}

pub async fn get_session(app: &mut TestApp) -> String {
    let response = app.post_session().await;
    assert_eq!(response.status(), StatusCode::CREATED, "Failed to sign in");

    get_json_response_body(response)
        .await
        .get("sessionId")
        .expect("No sessionId in response")
        .as_str()
        .expect("sessionId is not a string")
        .to_owned()
}

pub async fn toggle(
    app: &mut TestApp,
    staff_id: &str,
    date: &str,
    time_type: &str,
) -> Value {
    let response = app
        .post_toggle(&serde_json::json!({
            "staffId": staff_id,
            "date": date,
            "timeType": time_type
        }))
        .await;

    assert!(
        response.status().is_success(),
        "Toggle failed with {}",
        response.status()
    );
    get_json_response_body(response).await
}

pub async fn shifts_in(app: &mut TestApp, month: &str) -> Vec<Value> {
    let response = app.get_shifts(month).await;
    assert_eq!(response.status(), StatusCode::OK);

    get_json_response_body(response)
        .await
        .get("shifts")
        .and_then(Value::as_array)
        .expect("No shifts array in response")
        .to_owned()
}
