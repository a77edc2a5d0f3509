use super::{parse_date, SessionId, StaffId, ValidationError};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id: ShiftId,
    #[serde(rename = "staffId")]
    pub staff_id: StaffId,
    pub date: NaiveDate,
    #[serde(rename = "timeType")]
    pub time_type: TimeType,
    pub notes: String,
    pub status: ShiftStatus,
    pub created: AuditStamp,
}

impl Shift {
    /// A quick-select request: notes are derived from the slot.
    pub fn requested(key: ShiftKey, created: AuditStamp) -> Self {
        let notes = key.time_type.default_notes();
        Self::from_request(ShiftRequest { key, notes }, created)
    }

    pub fn from_request(request: ShiftRequest, created: AuditStamp) -> Self {
        Self {
            id: ShiftId::default(),
            staff_id: request.key.staff_id,
            date: request.key.date,
            time_type: request.key.time_type,
            notes: request.notes,
            status: ShiftStatus::Requested,
            created,
        }
    }

    pub fn key(&self) -> ShiftKey {
        ShiftKey {
            staff_id: self.staff_id.clone(),
            date: self.date,
            time_type: self.time_type,
        }
    }

    pub fn matches(&self, key: &ShiftKey) -> bool {
        self.date == key.date
            && self.staff_id == key.staff_id
            && self.time_type == key.time_type
    }
}

/// The (date, staff, slot) tuple a toggle operates on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShiftKey {
    pub staff_id: StaffId,
    pub date: NaiveDate,
    pub time_type: TimeType,
}

impl ShiftKey {
    pub fn new(staff_id: StaffId, date: NaiveDate, time_type: TimeType) -> Self {
        Self {
            staff_id,
            date,
            time_type,
        }
    }
}

/// A fully specified manual entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftRequest {
    pub key: ShiftKey,
    pub notes: String,
}

impl ShiftRequest {
    /// Validates raw form input; the date is required.
    pub fn parse(
        staff_id: &str,
        date: &str,
        time_type: &str,
        notes: &str,
    ) -> Result<Self, ValidationError> {
        let date = parse_date(date)?;
        Ok(Self {
            key: ShiftKey::new(
                StaffId::parse(staff_id)?,
                date,
                TimeType::from_str(time_type)?,
            ),
            notes: notes.trim().to_owned(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftId(Uuid);

impl ShiftId {
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        let parsed = uuid::Uuid::try_parse(id).map_err(|e| {
            ValidationError::new(format!("Invalid shift ID: {e}"))
        })?;
        Ok(Self(parsed))
    }

    pub fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for ShiftId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl AsRef<Uuid> for ShiftId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftStatus {
    Requested,
}

/// Which session touched a record, and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStamp {
    #[serde(rename = "sessionId")]
    pub session_id: SessionId,
    pub at: NaiveDateTime,
}

impl AuditStamp {
    pub fn new(session_id: SessionId, at: NaiveDateTime) -> Self {
        Self { session_id, at }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TimeType {
    Morning,
    Afternoon,
    #[serde(rename = "fullday")]
    FullDay,
}

impl TimeType {
    pub const ALL: [TimeType; 3] =
        [TimeType::Morning, TimeType::Afternoon, TimeType::FullDay];

    pub fn label(&self) -> &'static str {
        match self {
            TimeType::Morning => "午前",
            TimeType::Afternoon => "午後",
            TimeType::FullDay => "終日",
        }
    }

    pub fn hours(&self) -> (NaiveTime, NaiveTime) {
        let (start, end) = match self {
            TimeType::Morning => ((8, 30), (12, 30)),
            TimeType::Afternoon => ((13, 0), (17, 30)),
            TimeType::FullDay => ((8, 30), (17, 30)),
        };
        (hm(start), hm(end))
    }

    pub fn default_notes(&self) -> String {
        format!("{}勤務", self.label())
    }
}

fn hm((hour, minute): (u32, u32)) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

impl FromStr for TimeType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning" | "Morning" => Ok(TimeType::Morning),
            "afternoon" | "Afternoon" => Ok(TimeType::Afternoon),
            "fullday" | "fullDay" | "FullDay" => Ok(TimeType::FullDay),
            _ => Err(ValidationError::new(format!("Invalid time type: {s}"))),
        }
    }
}

impl fmt::Display for TimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TimeType::Morning => "morning",
                TimeType::Afternoon => "afternoon",
                TimeType::FullDay => "fullday",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeletedShiftId(Uuid);

impl DeletedShiftId {
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        let parsed = uuid::Uuid::try_parse(id).map_err(|e| {
            ValidationError::new(format!("Invalid deleted shift ID: {e}"))
        })?;
        Ok(Self(parsed))
    }
}

impl Default for DeletedShiftId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl AsRef<Uuid> for DeletedShiftId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

/// Snapshot of a removed shift, kept so an administrator can restore it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedShift {
    pub id: DeletedShiftId,
    pub shift: Shift,
    pub deleted: AuditStamp,
}

impl DeletedShift {
    pub fn new(shift: Shift, deleted: AuditStamp) -> Self {
        Self {
            id: DeletedShiftId::default(),
            shift,
            deleted,
        }
    }

    /// Re-creates the shift under a fresh id.
    pub fn restored(&self, restored: AuditStamp) -> Shift {
        Shift {
            id: ShiftId::default(),
            created: restored,
            ..self.shift.clone()
        }
    }
}
