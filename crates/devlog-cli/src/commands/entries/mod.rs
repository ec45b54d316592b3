pub mod add;
pub mod list;
pub mod next;
pub mod show;

pub use add::handle_add;
pub use list::handle_list;
pub use next::handle_next;
pub use show::handle_show;
