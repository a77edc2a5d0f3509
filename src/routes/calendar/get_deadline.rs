use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{ShiftAPIError, YearMonth},
    utils::session::get_role,
    AppState,
};

#[derive(Deserialize)]
pub struct MonthQueryParams {
    pub month: String,
}

#[tracing::instrument(name = "Get deadline route handler", skip_all)]
pub async fn get_deadline(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<MonthQueryParams>,
) -> Result<(StatusCode, Json<DeadlineResponse>), ShiftAPIError> {
    let role = get_role(&headers)?;
    let month = YearMonth::parse(&params.month)?;
    let now = state.clock.now();
    let gate = state.deadline_gate;

    let response = Json(DeadlineResponse {
        month,
        deadline: gate.deadline(month),
        deadline_passed: gate.is_deadline_passed(now, month),
        can_submit: gate.can_submit(role, now, month),
    });

    Ok((StatusCode::OK, response))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct DeadlineResponse {
    pub month: YearMonth,
    pub deadline: NaiveDate,
    #[serde(rename = "deadlinePassed")]
    pub deadline_passed: bool,
    #[serde(rename = "canSubmit")]
    pub can_submit: bool,
}
