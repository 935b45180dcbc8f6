// sidebar model
//
// everything here is independent of the DOM: the webapp crate reads the page, builds these
// types around its elements, and forwards events into them
pub mod config;
pub mod controller;
pub mod dismiss;
pub mod page;
pub mod state;

pub use config::{SidebarConfig, parse_config};
pub use controller::SidebarController;
pub use dismiss::{Click, should_dismiss};
pub use page::{Page, SharedController, attach};
pub use state::{NavEntry, Projection, Sidebar, highlight_entries};
