//! Statistics reports: server-computed `{labels, data}` series.
//!
//! The client does no aggregation. It only pairs labels with values and
//! works out shares of the total for the table and the pie chart.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    ProductsByCategory,
    MovementsByType,
    RequestsByStatus,
    StockBySite,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        Self::ProductsByCategory,
        Self::MovementsByType,
        Self::RequestsByStatus,
        Self::StockBySite,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::ProductsByCategory => "d400_products_by_category",
            Self::MovementsByType => "d400_movements_by_type",
            Self::RequestsByStatus => "d400_requests_by_status",
            Self::StockBySite => "d400_stock_by_site",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.key() == key)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::ProductsByCategory => "Productos por categoría",
            Self::MovementsByType => "Movimientos por tipo",
            Self::RequestsByStatus => "Solicitudes por estado",
            Self::StockBySite => "Existencias por sitio",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::ProductsByCategory => "/api/estadisticas/productos-por-categoria",
            Self::MovementsByType => "/api/estadisticas/movimientos-por-tipo",
            Self::RequestsByStatus => "/api/estadisticas/solicitudes-por-estado",
            Self::StockBySite => "/api/reporte-inventario",
        }
    }

    pub fn chart(&self) -> ChartKind {
        match self {
            Self::ProductsByCategory | Self::StockBySite => ChartKind::Bar,
            Self::MovementsByType | Self::RequestsByStatus => ChartKind::Pie,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub data: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub label: String,
    pub value: f64,
    /// Share of the total in `[0, 100]`; zero when the total is zero.
    pub percent: f64,
}

/// Pie slice as fractions of a full turn.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub start: f64,
    pub end: f64,
}

impl ChartSeries {
    /// Labels and values paired up; extra entries on either side are dropped.
    pub fn rows(&self) -> Vec<ReportRow> {
        if self.labels.len() != self.data.len() {
            log::warn!(
                "report series length mismatch: {} labels, {} values",
                self.labels.len(),
                self.data.len()
            );
        }
        let total = self.total();
        self.labels
            .iter()
            .zip(self.data.iter())
            .map(|(label, value)| ReportRow {
                label: label.clone(),
                value: *value,
                percent: if total > 0.0 { value / total * 100.0 } else { 0.0 },
            })
            .collect()
    }

    pub fn total(&self) -> f64 {
        self.data.iter().take(self.labels.len()).sum()
    }

    pub fn max_value(&self) -> f64 {
        self.data
            .iter()
            .take(self.labels.len())
            .copied()
            .fold(0.0, f64::max)
    }

    pub fn pie_slices(&self) -> Vec<PieSlice> {
        let mut cursor = 0.0;
        self.rows()
            .into_iter()
            .map(|row| {
                let start = cursor;
                cursor += row.percent / 100.0;
                PieSlice {
                    label: row.label,
                    start,
                    end: cursor,
                }
            })
            .collect()
    }
}

pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rows_carry_shares_of_total() {
        let series: ChartSeries =
            serde_json::from_value(json!({"labels": ["ENTRADA", "SALIDA"], "data": [30, 10]})).unwrap();
        let rows = series.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].percent, 75.0);
        assert_eq!(format_percent(rows[1].percent), "25.0%");
    }

    #[test]
    fn mismatched_lengths_are_truncated() {
        let series = ChartSeries {
            labels: vec!["a".into(), "b".into(), "c".into()],
            data: vec![1.0, 3.0],
        };
        assert_eq!(series.rows().len(), 2);
        assert_eq!(series.total(), 4.0);
        assert_eq!(series.max_value(), 3.0);
    }

    #[test]
    fn zero_total_gives_zero_percent() {
        let series = ChartSeries {
            labels: vec!["a".into()],
            data: vec![0.0],
        };
        assert_eq!(series.rows()[0].percent, 0.0);
    }

    #[test]
    fn pie_slices_cover_the_full_turn() {
        let series = ChartSeries {
            labels: vec!["a".into(), "b".into(), "c".into()],
            data: vec![1.0, 1.0, 2.0],
        };
        let slices = series.pie_slices();
        assert_eq!(slices[0].start, 0.0);
        assert_eq!(slices[1].start, slices[0].end);
        assert!((slices[2].end - 1.0).abs() < 1e-9);
    }

    #[test]
    fn report_keys_are_unique_and_resolvable() {
        for kind in ReportKind::ALL {
            assert_eq!(ReportKind::from_key(kind.key()), Some(kind));
        }
    }
}
