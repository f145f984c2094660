use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::list_query::{Searchable, Sortable};
use crate::shared::lookup::{LookupSource, Lookups};
use crate::shared::relation::Related;
use crate::shared::validation::Validate;

/// A backend collection reachable under `ENDPOINT` with list/create/update/delete.
///
/// The entity type is the response row; `Payload` is what create and update
/// send. Wire key renames live in the serde attributes of both types.
pub trait Resource:
    Clone + PartialEq + Serialize + DeserializeOwned + Searchable + Sortable + Send + Sync + 'static
{
    type Payload: Clone + Default + PartialEq + Serialize + Validate + Send + Sync + 'static;

    /// Stable key used for page registry and lookup maps.
    const KEY: &'static str;
    /// Collection path, e.g. `/api/areas`.
    const ENDPOINT: &'static str;
    /// Navigable route the permission matrix is keyed by.
    const ROUTE: &'static str;
    /// Row fields that label this entity inside another entity's select.
    const LABEL_FIELDS: &'static [&'static str];

    fn id(&self) -> i64;

    /// Relation fields paired with the lookup key that labels them.
    fn relations_mut(&mut self) -> Vec<(&'static str, &mut Option<Related>)> {
        Vec::new()
    }

    /// Draft used when the edit form opens.
    fn to_payload(&self) -> Self::Payload;

    fn item_path(id: i64) -> String {
        format!("{}/{}", Self::ENDPOINT, id)
    }

    fn lookup() -> LookupSource {
        LookupSource {
            key: Self::KEY,
            endpoint: Self::ENDPOINT,
            label_fields: Self::LABEL_FIELDS,
        }
    }
}

/// Fills relations that arrived as a bare `{"id": n}` with their lookup
/// label, so search and sort see the same text as the table cell.
pub fn resolve_relation_labels<R: Resource>(items: &mut [R], lookups: &Lookups) {
    for item in items.iter_mut() {
        for (key, related) in item.relations_mut() {
            let Some(related) = related.as_mut() else {
                continue;
            };
            if related.label.as_deref().is_some_and(|l| !l.trim().is_empty()) {
                continue;
            }
            if let Some(label) = lookups.label_for(key, related.id) {
                related.label = Some(label);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_area::Area;
    use crate::domain::a002_campus::Campus;
    use crate::shared::list_query::{filter_list, sort_list, SortDescriptor};
    use crate::shared::lookup::LookupOption;
    use serde_json::json;

    fn campus_lookups() -> Lookups {
        let mut lookups = Lookups::default();
        lookups.insert(
            Campus::KEY,
            vec![
                LookupOption { id: 2, label: "Sede Norte".into() },
                LookupOption { id: 3, label: "Sede Centro".into() },
            ],
        );
        lookups
    }

    #[test]
    fn id_only_relation_is_searchable_by_its_lookup_label() {
        let mut areas: Vec<Area> = serde_json::from_value(json!([
            {"id": 1, "nombre_area": "Bodega", "sede": {"id": 2}},
            {"id": 2, "nombre_area": "Taller", "sede": {"id": 3, "nombre": "Principal"}},
            {"id": 3, "nombre_area": "Oficina", "sede": {"id": 9}}
        ]))
        .unwrap();
        assert!(filter_list(&areas, "norte").is_empty());

        resolve_relation_labels(&mut areas, &campus_lookups());

        let found = filter_list(&areas, "norte");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
        // a label shipped by the backend wins over the lookup
        assert_eq!(areas[1].campus.as_ref().and_then(|c| c.label.as_deref()), Some("Principal"));
        // unknown ids stay unlabelled
        assert_eq!(areas[2].campus.as_ref().and_then(|c| c.label.clone()), None);
    }

    #[test]
    fn resolved_labels_feed_the_relation_sort() {
        let mut areas: Vec<Area> = serde_json::from_value(json!([
            {"id": 1, "nombre_area": "Bodega", "sede": {"id": 2}},
            {"id": 2, "nombre_area": "Taller", "sede": {"id": 3}}
        ]))
        .unwrap();
        resolve_relation_labels(&mut areas, &campus_lookups());

        sort_list(&mut areas, &SortDescriptor::ascending("campus"));
        let ids: Vec<i64> = areas.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
