pub mod calendar;
pub mod holidays;
pub mod session;
pub mod shifts;
pub mod staff;
