use contracts::dashboards::d400_reports::{ChartSeries, ReportKind};
use contracts::shared::envelope::unwrap_item;

use crate::shared::api_utils::{get_json, ApiError};

/// Fetch the `{labels, data}` series of one report.
pub async fn fetch_report(kind: ReportKind) -> Result<ChartSeries, ApiError> {
    let body = get_json(kind.endpoint()).await?;
    let series: ChartSeries = unwrap_item(body)?;
    log::debug!("{}: {} labels, {} values", kind.key(), series.labels.len(), series.data.len());
    Ok(series)
}
