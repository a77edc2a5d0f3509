use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{HolidaySource, ShiftAPIError, YearMonth},
    routes::calendar::MonthQueryParams,
    AppState,
};

#[tracing::instrument(name = "Get holidays route handler", skip_all)]
pub async fn get_holidays(
    State(state): State<AppState>,
    Query(params): Query<MonthQueryParams>,
) -> Result<(StatusCode, Json<Vec<HolidayResponse>>), ShiftAPIError> {
    let month = YearMonth::parse(&params.month)?;

    let registry = state
        .holiday_store
        .read()
        .await
        .get_registry()
        .await
        .map_err(ShiftAPIError::UnexpectedError)?;

    let response = Json(
        registry
            .holidays_in(month)
            .into_iter()
            .map(|(holiday, source)| HolidayResponse {
                date: holiday.date,
                name: holiday.name.as_ref().to_owned(),
                source,
            })
            .collect(),
    );

    Ok((StatusCode::OK, response))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct HolidayResponse {
    pub date: NaiveDate,
    pub name: String,
    pub source: HolidaySource,
}
