pub mod api;
pub mod ui;

/// Route whose permission row gates every report.
pub const REPORTS_ROUTE: &str = "/reportes";
