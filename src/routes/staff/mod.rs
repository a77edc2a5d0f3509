mod add_staff;
mod delete_staff;
mod get_staff_list;
mod update_staff;

pub use add_staff::*;
pub use delete_staff::*;
pub use get_staff_list::*;
pub use update_staff::*;
