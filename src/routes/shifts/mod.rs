mod add_shift;
mod get_deleted_shifts;
mod get_shifts;
mod remove_shift;
mod restore_shift;
mod toggle_shift;

pub use add_shift::*;
pub use get_deleted_shifts::*;
pub use get_shifts::*;
pub use remove_shift::*;
pub use restore_shift::*;
pub use toggle_shift::*;
