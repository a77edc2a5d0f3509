mod get_calendar;
mod get_deadline;

pub use get_calendar::*;
pub use get_deadline::*;
