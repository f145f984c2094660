//! Utilities for date formatting
//!
//! Tables show dates as DD/MM/YYYY; forms and the wire use ISO `YYYY-MM-DD`.

use chrono::NaiveDate;

/// Format a date for display
/// Example: 2024-03-15 -> "15/03/2024"
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Format an optional date, "—" when missing
pub fn format_opt_date(date: &Option<NaiveDate>) -> String {
    date.as_ref().map(format_date).unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(&date), "15/03/2024");
        assert_eq!(format_opt_date(&Some(date)), "15/03/2024");
        assert_eq!(format_opt_date(&None), "—");
    }
}
