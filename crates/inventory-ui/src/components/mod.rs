//! Components making up the entity detail view.

mod actions_menu;
mod application_details;
mod edit_name_modal;
mod entity_detail;
mod facts;
mod header;
mod skeleton;

pub use actions_menu::*;
pub use application_details::*;
pub use edit_name_modal::*;
pub use entity_detail::*;
pub use facts::*;
pub use header::*;
pub use skeleton::*;
