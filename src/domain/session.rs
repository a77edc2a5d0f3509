//! Calendar screen state and the reducers that move it between UI events.
//!
//! Reducers are pure: they take the current state plus the event and return
//! the next state together with the effects the caller must apply.

use chrono::{NaiveDate, NaiveDateTime};

use super::{
    parse_date, DeadlineGate, Role, ShiftKey, ShiftRequest, StaffId, TimeType,
    YearMonth,
};

pub const ALERT_DEADLINE_PASSED: &str = "希望提出期限が過ぎています";
pub const ALERT_DATE_REQUIRED: &str = "日付を選択してください";

#[derive(Debug, Clone, PartialEq)]
pub struct ShiftDraft {
    pub staff_id: StaffId,
    pub date: String,
    pub time_type: TimeType,
    pub notes: String,
}

impl ShiftDraft {
    pub fn new(staff_id: StaffId) -> Self {
        Self {
            staff_id,
            date: String::new(),
            time_type: TimeType::Morning,
            notes: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarSession {
    pub viewed_month: YearMonth,
    pub role: Role,
    pub quick_mode: bool,
    pub detail_form_open: bool,
    pub draft: ShiftDraft,
    default_staff: StaffId,
}

impl CalendarSession {
    pub fn new(viewed_month: YearMonth, default_staff: StaffId) -> Self {
        Self {
            viewed_month,
            role: Role::Staff,
            quick_mode: false,
            detail_form_open: false,
            draft: ShiftDraft::new(default_staff.clone()),
            default_staff,
        }
    }

    pub fn can_submit(&self, context: &SessionContext) -> bool {
        context
            .gate
            .can_submit(self.role, context.now, self.viewed_month)
    }
}

/// What a reducer needs from the outside world.
#[derive(Debug, Clone, Copy)]
pub struct SessionContext {
    pub now: NaiveDateTime,
    pub gate: DeadlineGate,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    NavigateMonth(i32),
    SwitchRole(Role),
    SetQuickMode(bool),
    SelectStaff(StaffId),
    SelectTimeType(TimeType),
    EditDraftDate(String),
    EditDraftNotes(String),
    OpenDetailForm,
    CloseDetailForm,
    ClickDay(NaiveDate),
    SubmitDetailForm,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ToggleShift(ShiftKey),
    AddShift(ShiftRequest),
    Alert(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: CalendarSession,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn quiet(state: CalendarSession) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    fn with(state: CalendarSession, effect: Effect) -> Self {
        Self {
            state,
            effects: vec![effect],
        }
    }
}

pub fn reduce(
    state: CalendarSession,
    event: SessionEvent,
    context: &SessionContext,
) -> Transition {
    match event {
        SessionEvent::NavigateMonth(direction) => {
            navigate_month(state, direction)
        }
        SessionEvent::SwitchRole(role) => switch_role(state, role),
        SessionEvent::SetQuickMode(enabled) => {
            set_quick_mode(state, enabled, context)
        }
        SessionEvent::SelectStaff(staff_id) => select_staff(state, staff_id),
        SessionEvent::SelectTimeType(time_type) => {
            select_time_type(state, time_type)
        }
        SessionEvent::EditDraftDate(date) => edit_draft_date(state, date),
        SessionEvent::EditDraftNotes(notes) => edit_draft_notes(state, notes),
        SessionEvent::OpenDetailForm => open_detail_form(state, context),
        SessionEvent::CloseDetailForm => close_detail_form(state),
        SessionEvent::ClickDay(date) => click_day(state, date, context),
        SessionEvent::SubmitDetailForm => submit_detail_form(state, context),
    }
}

/// Moves the viewed month; a target outside the supported years is ignored.
pub fn navigate_month(mut state: CalendarSession, direction: i32) -> Transition {
    if let Some(month) = state.viewed_month.offset(direction) {
        state.viewed_month = month;
    }
    Transition::quiet(state)
}

pub fn switch_role(mut state: CalendarSession, role: Role) -> Transition {
    state.role = role;
    Transition::quiet(state)
}

/// Quick mode cannot be switched on while submissions are closed.
pub fn set_quick_mode(
    mut state: CalendarSession,
    enabled: bool,
    context: &SessionContext,
) -> Transition {
    if enabled && !state.can_submit(context) {
        return Transition::quiet(state);
    }
    state.quick_mode = enabled;
    Transition::quiet(state)
}

pub fn select_staff(mut state: CalendarSession, staff_id: StaffId) -> Transition {
    state.draft.staff_id = staff_id;
    Transition::quiet(state)
}

pub fn select_time_type(
    mut state: CalendarSession,
    time_type: TimeType,
) -> Transition {
    state.draft.time_type = time_type;
    Transition::quiet(state)
}

pub fn edit_draft_date(mut state: CalendarSession, date: String) -> Transition {
    state.draft.date = date;
    Transition::quiet(state)
}

pub fn edit_draft_notes(mut state: CalendarSession, notes: String) -> Transition {
    state.draft.notes = notes;
    Transition::quiet(state)
}

pub fn open_detail_form(
    mut state: CalendarSession,
    context: &SessionContext,
) -> Transition {
    if !state.can_submit(context) {
        return Transition::with(
            state,
            Effect::Alert(ALERT_DEADLINE_PASSED.to_owned()),
        );
    }
    state.detail_form_open = true;
    Transition::quiet(state)
}

pub fn close_detail_form(mut state: CalendarSession) -> Transition {
    state.detail_form_open = false;
    Transition::quiet(state)
}

/// Toggles the selected staff member and slot on a day of the viewed month.
/// Clicks outside quick mode or on padding days are ignored.
pub fn click_day(
    state: CalendarSession,
    date: NaiveDate,
    context: &SessionContext,
) -> Transition {
    if !state.quick_mode || !state.viewed_month.contains(date) {
        return Transition::quiet(state);
    }
    if !state.can_submit(context) {
        return Transition::with(
            state,
            Effect::Alert(ALERT_DEADLINE_PASSED.to_owned()),
        );
    }
    let key =
        ShiftKey::new(state.draft.staff_id.clone(), date, state.draft.time_type);
    Transition::with(state, Effect::ToggleShift(key))
}

pub fn submit_detail_form(
    mut state: CalendarSession,
    context: &SessionContext,
) -> Transition {
    if !state.can_submit(context) {
        return Transition::with(
            state,
            Effect::Alert(ALERT_DEADLINE_PASSED.to_owned()),
        );
    }
    if state.draft.date.trim().is_empty() {
        return Transition::with(
            state,
            Effect::Alert(ALERT_DATE_REQUIRED.to_owned()),
        );
    }
    let date = match parse_date(&state.draft.date) {
        Ok(date) => date,
        Err(e) => {
            return Transition::with(state, Effect::Alert(e.as_ref().to_owned()))
        }
    };

    let draft = std::mem::replace(
        &mut state.draft,
        ShiftDraft::new(state.default_staff.clone()),
    );
    state.detail_form_open = false;
    let request = ShiftRequest {
        key: ShiftKey::new(draft.staff_id, date, draft.time_type),
        notes: draft.notes.trim().to_owned(),
    };
    Transition::with(state, Effect::AddShift(request))
}
