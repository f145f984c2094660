use contracts::dashboards::d400_reports::{format_percent, ChartKind, ChartSeries, ReportKind};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::charts::{palette_color, BarChart, PieChart};
use crate::dashboards::d400_reports::api;
use crate::dashboards::d400_reports::REPORTS_ROUTE;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::resource::cancel::scoped_token;
use crate::system::permissions::{use_permissions, PermissionGate};

/// One statistics report: chart plus value/percentage table.
#[component]
pub fn ReportDashboard(kind: ReportKind) -> impl IntoView {
    let permissions = use_permissions(REPORTS_ROUTE);

    view! {
        <PermissionGate permissions=permissions>
            {move || view! { <ReportBody kind=kind /> }}
        </PermissionGate>
    }
}

#[component]
fn ReportBody(kind: ReportKind) -> impl IntoView {
    let series = RwSignal::new(ChartSeries::default());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let token = StoredValue::new(scoped_token());

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        let token = token.get_value();
        spawn_local(async move {
            let result = api::fetch_report(kind).await;
            if token.is_cancelled() {
                return;
            }
            match result {
                Ok(data) => series.set(data),
                Err(e) => {
                    log::error!("{}: load failed: {}", kind.key(), e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    load();

    let rows = Memo::new(move |_| series.with(|s| s.rows()));
    let total = Memo::new(move |_| series.with(|s| s.total()));

    view! {
        <div class="page report" data-page=kind.key()>
            <PageHeader title=kind.title()>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load()
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Cargando..." } else { " Actualizar" }}
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                {move || {
                    if rows.with(|r| r.is_empty()) {
                        return (!loading.get()).then(|| view! {
                            <div class="table__empty">"Sin datos para mostrar"</div>
                        }).into_any();
                    }
                    match kind.chart() {
                        ChartKind::Bar => view! { <BarChart series=series /> }.into_any(),
                        ChartKind::Pie => view! { <PieChart series=series /> }.into_any(),
                    }
                }}

                <Table attr:class="report__table">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>""</TableHeaderCell>
                            <TableHeaderCell>"Concepto"</TableHeaderCell>
                            <TableHeaderCell>"Valor"</TableHeaderCell>
                            <TableHeaderCell>"Porcentaje"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || rows.get().into_iter().enumerate().map(|(i, row)| view! {
                            <TableRow>
                                <TableCell>
                                    <span class="chart__swatch" style=format!("background:{}", palette_color(i))></span>
                                </TableCell>
                                <TableCell>{row.label}</TableCell>
                                <TableCell>{row.value.to_string()}</TableCell>
                                <TableCell>{format_percent(row.percent)}</TableCell>
                            </TableRow>
                        }).collect_view()}
                        <TableRow attr:class="report__total">
                            <TableCell>""</TableCell>
                            <TableCell>"Total"</TableCell>
                            <TableCell>{move || total.get().to_string()}</TableCell>
                            <TableCell>{move || if total.get() > 0.0 { format_percent(100.0) } else { format_percent(0.0) }}</TableCell>
                        </TableRow>
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}
