use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{
    session::SessionContext, Clock, DeadlineGate, HolidayStore, ShiftStore,
    StaffMember, StaffStore,
};
use crate::services::{
    change_feed::ChangeFeed,
    data_stores::{BTreeMapHolidayStore, HashmapShiftStore, HashmapStaffStore},
};

pub type StaffStoreType = Arc<RwLock<dyn StaffStore + Send + Sync>>;
pub type ShiftStoreType = Arc<RwLock<dyn ShiftStore + Send + Sync>>;
pub type HolidayStoreType = Arc<RwLock<dyn HolidayStore + Send + Sync>>;
pub type ClockType = Arc<dyn Clock + Send + Sync>;

#[derive(Clone)]
pub struct AppState {
    pub staff_store: StaffStoreType,
    pub shift_store: ShiftStoreType,
    pub holiday_store: HolidayStoreType,
    pub change_feed: ChangeFeed,
    pub clock: ClockType,
    pub deadline_gate: DeadlineGate,
}

impl AppState {
    pub fn new(
        staff_store: StaffStoreType,
        shift_store: ShiftStoreType,
        holiday_store: HolidayStoreType,
        change_feed: ChangeFeed,
        clock: ClockType,
        deadline_gate: DeadlineGate,
    ) -> Self {
        Self {
            staff_store,
            shift_store,
            holiday_store,
            change_feed,
            clock,
            deadline_gate,
        }
    }

    /// State backed by the in-memory stores, all publishing to one feed.
    pub fn in_memory(
        roster: Vec<StaffMember>,
        clock: ClockType,
        deadline_gate: DeadlineGate,
    ) -> Self {
        let change_feed = ChangeFeed::default();
        Self::new(
            Arc::new(RwLock::new(HashmapStaffStore::with_roster(
                roster,
                change_feed.clone(),
            ))),
            Arc::new(RwLock::new(HashmapShiftStore::new(change_feed.clone()))),
            Arc::new(RwLock::new(BTreeMapHolidayStore::new(
                change_feed.clone(),
            ))),
            change_feed,
            clock,
            deadline_gate,
        )
    }

    pub fn session_context(&self) -> SessionContext {
        SessionContext {
            now: self.clock.now(),
            gate: self.deadline_gate,
        }
    }
}
