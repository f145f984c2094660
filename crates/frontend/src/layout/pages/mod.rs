//! Page registry: page key → label, icon, menu group and view.

pub mod registry;

pub use registry::{is_known_page, menu_groups, page_label, render_page, MenuGroup};
