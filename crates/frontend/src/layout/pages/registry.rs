//! Single source of truth for page keys.
//!
//! Entity pages use the resource `KEY` from contracts, reports use the
//! `ReportKind` key.

use contracts::dashboards::d400_reports::ReportKind;
use contracts::domain::a001_area::Area;
use contracts::domain::a002_campus::Campus;
use contracts::domain::a003_site_type::SiteType;
use contracts::domain::a004_site::Site;
use contracts::domain::a005_product_category::ProductCategory;
use contracts::domain::a006_product::Product;
use contracts::domain::a007_inventory::Inventory;
use contracts::domain::a008_movement::Movement;
use contracts::domain::a009_request::Request;
use contracts::domain::a010_request_detail::RequestDetail;
use contracts::domain::a011_material_delivery::MaterialDelivery;
use contracts::domain::a012_training_cohort::TrainingCohort;
use contracts::domain::a013_qualification::Qualification;
use contracts::domain::a014_training_center::TrainingCenter;
use contracts::domain::a015_municipality::Municipality;
use contracts::domain::a016_role::Role;
use contracts::domain::a017_user::User;
use contracts::domain::common::Resource;
use leptos::prelude::*;

use crate::dashboards::d400_reports::ui::ReportDashboard;
use crate::shared::resource::{resource_list_page, ResourceView};

#[derive(Clone, Debug, PartialEq)]
pub struct MenuGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    /// (page key, label, icon)
    pub items: Vec<(&'static str, &'static str, &'static str)>,
}

fn entry<R: ResourceView>(icon: &'static str) -> (&'static str, &'static str, &'static str) {
    (R::KEY, R::TITLE, icon)
}

fn report_entry(kind: ReportKind) -> (&'static str, &'static str, &'static str) {
    let icon = match kind.chart() {
        contracts::dashboards::d400_reports::ChartKind::Bar => "bar-chart",
        contracts::dashboards::d400_reports::ChartKind::Pie => "pie-chart",
    };
    (kind.key(), kind.title(), icon)
}

pub fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "inventory",
            label: "Inventario",
            icon: "inventory",
            items: vec![
                entry::<Inventory>("inventory"),
                entry::<Movement>("truck"),
                entry::<Product>("products"),
                entry::<ProductCategory>("products"),
                entry::<Site>("map-pin"),
                entry::<SiteType>("map-pin"),
            ],
        },
        MenuGroup {
            id: "requests",
            label: "Solicitudes",
            icon: "requests",
            items: vec![
                entry::<Request>("requests"),
                entry::<RequestDetail>("requests"),
                entry::<MaterialDelivery>("truck"),
            ],
        },
        MenuGroup {
            id: "training",
            label: "Formación",
            icon: "graduation",
            items: vec![
                entry::<TrainingCohort>("graduation"),
                entry::<Qualification>("graduation"),
                entry::<TrainingCenter>("building"),
                entry::<Campus>("building"),
                entry::<Area>("building"),
                entry::<Municipality>("map-pin"),
            ],
        },
        MenuGroup {
            id: "admin",
            label: "Administración",
            icon: "shield",
            items: vec![entry::<User>("users"), entry::<Role>("shield")],
        },
        MenuGroup {
            id: "reports",
            label: "Reportes",
            icon: "bar-chart",
            items: ReportKind::ALL.into_iter().map(report_entry).collect(),
        },
    ]
}

pub fn is_known_page(key: &str) -> bool {
    menu_groups().iter().any(|g| g.items.iter().any(|(k, _, _)| *k == key))
}

/// Readable title for a page key; the key itself when unknown.
pub fn page_label(key: &str) -> String {
    menu_groups()
        .into_iter()
        .flat_map(|g| g.items)
        .find(|(k, _, _)| *k == key)
        .map(|(_, label, _)| label.to_string())
        .unwrap_or_else(|| key.to_string())
}

pub fn render_page(key: &str) -> AnyView {
    if let Some(kind) = ReportKind::from_key(key) {
        return view! { <ReportDashboard kind=kind /> }.into_any();
    }

    match key {
        k if k == Area::KEY => resource_list_page::<Area>().into_any(),
        k if k == Campus::KEY => resource_list_page::<Campus>().into_any(),
        k if k == SiteType::KEY => resource_list_page::<SiteType>().into_any(),
        k if k == Site::KEY => resource_list_page::<Site>().into_any(),
        k if k == ProductCategory::KEY => resource_list_page::<ProductCategory>().into_any(),
        k if k == Product::KEY => resource_list_page::<Product>().into_any(),
        k if k == Inventory::KEY => resource_list_page::<Inventory>().into_any(),
        k if k == Movement::KEY => resource_list_page::<Movement>().into_any(),
        k if k == Request::KEY => resource_list_page::<Request>().into_any(),
        k if k == RequestDetail::KEY => resource_list_page::<RequestDetail>().into_any(),
        k if k == MaterialDelivery::KEY => resource_list_page::<MaterialDelivery>().into_any(),
        k if k == TrainingCohort::KEY => resource_list_page::<TrainingCohort>().into_any(),
        k if k == Qualification::KEY => resource_list_page::<Qualification>().into_any(),
        k if k == TrainingCenter::KEY => resource_list_page::<TrainingCenter>().into_any(),
        k if k == Municipality::KEY => resource_list_page::<Municipality>().into_any(),
        k if k == Role::KEY => resource_list_page::<Role>().into_any(),
        k if k == User::KEY => resource_list_page::<User>().into_any(),
        unknown => {
            log::warn!("no page registered for key '{}'", unknown);
            view! {
                <div class="page page--placeholder">
                    <h2>"Página no encontrada"</h2>
                    <p>{format!("No existe la página \"{}\".", unknown)}</p>
                </div>
            }
            .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_menu_key_is_unique() {
        let keys: Vec<_> = menu_groups()
            .into_iter()
            .flat_map(|g| g.items)
            .map(|(k, _, _)| k)
            .collect();
        let unique: HashSet<_> = keys.iter().collect();
        assert_eq!(keys.len(), unique.len());
        assert_eq!(keys.len(), 17 + ReportKind::ALL.len());
    }

    #[test]
    fn labels_come_from_the_registry() {
        assert_eq!(page_label("a016_role"), "Roles");
        assert_eq!(page_label("d400_movements_by_type"), "Movimientos por tipo");
        assert_eq!(page_label("zzz"), "zzz");
        assert!(is_known_page(crate::layout::global_context::DEFAULT_PAGE));
        assert!(!is_known_page("a099_missing"));
    }
}
