mod calendar;
mod change;
mod clock;
mod data_stores;
mod deadline;
mod error;
mod holiday;
mod role;
pub mod session;
mod session_id;
mod shift;
mod staff_color;
mod staff_id;
mod staff_member;
mod staff_name;
mod year_month;

pub use calendar::*;
pub use change::*;
pub use clock::*;
pub use data_stores::*;
pub use deadline::*;
pub use error::*;
pub use holiday::*;
pub use role::*;
pub use session_id::*;
pub use shift::*;
pub use staff_color::*;
pub use staff_id::*;
pub use staff_member::*;
pub use staff_name::*;
pub use year_month::*;
