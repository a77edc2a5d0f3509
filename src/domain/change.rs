use chrono::NaiveDate;
use serde::Serialize;

use super::{DeletedShift, DeletedShiftId, Holiday, Shift, StaffId, StaffMember};

/// A mutation that has been applied to one of the stores.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StoreChange {
    ShiftAdded { shift: Shift },
    ShiftRemoved { deleted: DeletedShift },
    ShiftRestored { shift: Shift, from: DeletedShiftId },
    StaffUpserted { member: StaffMember },
    StaffRemoved { id: StaffId },
    HolidayAdded { holiday: Holiday },
    HolidayRemoved { date: NaiveDate },
}

pub type ChangeListener = Box<dyn Fn(&StoreChange) + Send + Sync>;

/// Something that can be observed for store changes.
pub trait ChangeSource {
    fn subscribe(&self, listener: ChangeListener) -> Subscription;
}

/// Keeps a listener attached until it is unsubscribed or dropped.
#[must_use = "dropping a Subscription detaches its listener"]
pub struct Subscription {
    detach: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(detach: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.detach_now();
    }

    fn detach_now(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}
