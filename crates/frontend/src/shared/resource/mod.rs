//! Generic CRUD plumbing shared by every resource page.

pub mod api;
pub mod cancel;
pub mod controller;
pub mod page;
pub mod view;

pub use page::resource_list_page;
pub use view::ResourceView;
