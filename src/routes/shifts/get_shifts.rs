use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{Shift, ShiftAPIError, YearMonth},
    routes::calendar::MonthQueryParams,
    AppState,
};

#[tracing::instrument(name = "Get shifts route handler", skip_all)]
pub async fn get_shifts(
    State(state): State<AppState>,
    Query(params): Query<MonthQueryParams>,
) -> Result<(StatusCode, Json<ShiftListResponse>), ShiftAPIError> {
    let month = YearMonth::parse(&params.month)?;

    let shifts = state
        .shift_store
        .read()
        .await
        .get_shifts_between(month.first_day(), month.last_day())
        .await
        .map_err(|e| ShiftAPIError::UnexpectedError(eyre!(e)))?;

    Ok((StatusCode::OK, Json(ShiftListResponse { month, shifts })))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ShiftListResponse {
    pub month: YearMonth,
    pub shifts: Vec<Shift>,
}
