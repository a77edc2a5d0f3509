use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use chrono::NaiveDate;
use color_eyre::eyre::eyre;
use serde::Serialize;

use crate::{
    domain::{
        CalendarGrid, DayCell, Shift, ShiftAPIError, ShiftId, StaffId,
        StaffMember, TimeType, YearMonth, FALLBACK_STAFF_COLOR,
    },
    utils::session::get_role,
    AppState,
};

use super::MonthQueryParams;

/// Month view: the grid for a month with each day's shifts resolved against
/// the staff roster.
#[tracing::instrument(name = "Get calendar route handler", skip_all)]
pub async fn get_calendar(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<MonthQueryParams>,
) -> Result<(StatusCode, Json<CalendarResponse>), ShiftAPIError> {
    let role = get_role(&headers)?;
    let month = YearMonth::parse(&params.month)?;

    let registry = state
        .holiday_store
        .read()
        .await
        .get_registry()
        .await
        .map_err(ShiftAPIError::UnexpectedError)?;
    let grid = CalendarGrid::new(month, &registry);

    let shifts = state
        .shift_store
        .read()
        .await
        .get_shifts_between(grid.start(), month.last_day())
        .await
        .map_err(|e| ShiftAPIError::UnexpectedError(eyre!(e)))?;

    let staff: HashMap<StaffId, StaffMember> = state
        .staff_store
        .read()
        .await
        .get_staff_list()
        .await
        .map_err(|e| ShiftAPIError::UnexpectedError(eyre!(e)))?
        .into_iter()
        .map(|member| (member.id.clone(), member))
        .collect();

    let mut by_date: HashMap<NaiveDate, Vec<CalendarShift>> = HashMap::new();
    for shift in &shifts {
        by_date
            .entry(shift.date)
            .or_default()
            .push(CalendarShift::new(shift, staff.get(&shift.staff_id)));
    }

    let now = state.clock.now();
    let gate = state.deadline_gate;
    let response = Json(CalendarResponse {
        month,
        deadline: gate.deadline(month),
        deadline_passed: gate.is_deadline_passed(now, month),
        can_submit: gate.can_submit(role, now, month),
        days: grid
            .days()
            .map(|cell| CalendarDay {
                shifts: by_date.remove(&cell.date).unwrap_or_default(),
                cell,
            })
            .collect(),
    });

    Ok((StatusCode::OK, response))
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub month: YearMonth,
    pub deadline: NaiveDate,
    #[serde(rename = "deadlinePassed")]
    pub deadline_passed: bool,
    #[serde(rename = "canSubmit")]
    pub can_submit: bool,
    pub days: Vec<CalendarDay>,
}

#[derive(Debug, Serialize)]
pub struct CalendarDay {
    #[serde(flatten)]
    pub cell: DayCell,
    pub shifts: Vec<CalendarShift>,
}

/// A shift as drawn in a day cell. Shifts of removed staff keep their slot
/// but render with the fallback colour and no name.
#[derive(Debug, Serialize)]
pub struct CalendarShift {
    pub id: ShiftId,
    #[serde(rename = "staffId")]
    pub staff_id: StaffId,
    #[serde(rename = "staffName")]
    pub staff_name: String,
    pub color: String,
    #[serde(rename = "timeType")]
    pub time_type: TimeType,
    pub label: &'static str,
    pub start: String,
    pub end: String,
    pub notes: String,
}

impl CalendarShift {
    fn new(shift: &Shift, member: Option<&StaffMember>) -> Self {
        let (start, end) = shift.time_type.hours();
        Self {
            id: shift.id,
            staff_id: shift.staff_id.clone(),
            staff_name: member
                .map(|m| m.name.as_ref().to_owned())
                .unwrap_or_default(),
            color: member
                .map(|m| m.color.as_ref())
                .unwrap_or(FALLBACK_STAFF_COLOR)
                .to_owned(),
            time_type: shift.time_type,
            label: shift.time_type.label(),
            start: start.format("%H:%M").to_string(),
            end: end.format("%H:%M").to_string(),
            notes: shift.notes.clone(),
        }
    }
}
