//! State of one resource list page.
//!
//! Plain data: the page keeps a `ListController` inside an `RwSignal` and
//! re-derives the visible page with [`ListController::view`] on every change.

use contracts::domain::common::resource::resolve_relation_labels;
use contracts::domain::common::Resource;
use contracts::shared::columns::{ColumnDef, VisibleColumns};
use contracts::shared::list_query::{ListQuery, PageView, DEFAULT_PAGE_SIZE};
use contracts::shared::lookup::Lookups;
use contracts::shared::validation::{DraftMode, Validate, ValidationError};

use super::api::ResourceApi;
use crate::shared::api_utils::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Create,
    Edit(i64),
}

impl ModalState {
    pub fn draft_mode(&self) -> DraftMode {
        match self {
            ModalState::Edit(_) => DraftMode::Update,
            _ => DraftMode::Create,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveOp<P> {
    Create(P),
    Update(i64, P),
}

#[derive(Debug, Clone)]
pub struct ListController<R: Resource> {
    pub items: Vec<R>,
    pub query: ListQuery,
    pub columns: VisibleColumns,
    pub draft: R::Payload,
    pub modal: ModalState,
    pub load: LoadState,
    pub form_error: Option<String>,
    pub lookups: Lookups,
}

impl<R: Resource> ListController<R> {
    pub fn new(columns: &[ColumnDef]) -> Self {
        Self {
            items: Vec::new(),
            query: ListQuery::new(DEFAULT_PAGE_SIZE),
            columns: VisibleColumns::from_defs(columns),
            draft: R::Payload::default(),
            modal: ModalState::Closed,
            load: LoadState::Idle,
            form_error: None,
            lookups: Lookups::default(),
        }
    }

    /// filter → sort → paginate over the whole collection.
    pub fn view(&self) -> PageView<R> {
        self.query.apply(&self.items)
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.query.set_filter(filter);
    }

    pub fn toggle_sort(&mut self, column: &str) {
        self.query.toggle_sort(column);
    }

    pub fn set_page(&mut self, page_index: usize) {
        self.query.set_page(page_index);
        let total = self.view().total_count;
        self.query.clamp_page(total);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.query.set_page_size(page_size);
    }

    pub fn toggle_column(&mut self, key: &str) {
        self.columns.toggle(key);
    }

    pub fn open_create(&mut self) {
        self.draft = R::Payload::default();
        self.form_error = None;
        self.modal = ModalState::Create;
    }

    /// False when the row is no longer in the collection.
    pub fn open_edit(&mut self, id: i64) -> bool {
        let Some(item) = self.items.iter().find(|i| i.id() == id) else {
            return false;
        };
        self.draft = item.to_payload();
        self.form_error = None;
        self.modal = ModalState::Edit(id);
        true
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
        self.draft = R::Payload::default();
        self.form_error = None;
    }

    /// Validates the draft locally. On failure the message is kept for the
    /// form and nothing should be sent.
    pub fn prepare_save(&mut self) -> Result<SaveOp<R::Payload>, ValidationError> {
        if let Err(e) = self.draft.validate(self.modal.draft_mode()) {
            self.form_error = Some(e.message.clone());
            return Err(e);
        }
        self.form_error = None;
        Ok(match self.modal {
            ModalState::Edit(id) => SaveOp::Update(id, self.draft.clone()),
            _ => SaveOp::Create(self.draft.clone()),
        })
    }

    pub fn finish_save(&mut self) {
        self.close_modal();
    }

    pub fn fail_save(&mut self, err: &ApiError) {
        self.form_error = Some(err.to_string());
    }

    pub fn begin_load(&mut self) {
        self.load = LoadState::Loading;
    }

    /// On error the previous items stay on screen.
    pub fn finish_load(&mut self, result: Result<Vec<R>, ApiError>) {
        match result {
            Ok(mut items) => {
                resolve_relation_labels(&mut items, &self.lookups);
                self.items = items;
                self.load = LoadState::Loaded;
                let total = self.view().total_count;
                self.query.clamp_page(total);
            }
            Err(e) => {
                log::error!("{}: load failed: {}", R::KEY, e);
                self.load = LoadState::Failed(e.to_string());
            }
        }
    }

    pub fn set_lookups(&mut self, lookups: Lookups) {
        resolve_relation_labels(&mut self.items, &lookups);
        self.lookups = lookups;
    }
}

/// Sends the mutation, then re-fetches the whole collection.
///
/// The outer error is the mutation failing; the inner result is the reload,
/// so a saved record is never reported as unsaved when only the list call fails.
/// Any 2xx counts as saved whatever the response body holds.
pub async fn save_and_reload<R: Resource>(
    api: &dyn ResourceApi<R>,
    op: SaveOp<R::Payload>,
) -> Result<Result<Vec<R>, ApiError>, ApiError> {
    match op {
        SaveOp::Create(payload) => {
            api.create(&payload).await?;
        }
        SaveOp::Update(id, payload) => {
            api.update(id, &payload).await?;
        }
    }
    Ok(api.list().await)
}

pub async fn remove_and_reload<R: Resource>(
    api: &dyn ResourceApi<R>,
    id: i64,
) -> Result<Result<Vec<R>, ApiError>, ApiError> {
    api.delete(id).await?;
    Ok(api.list().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use contracts::domain::a001_area::{Area, AreaDto};
    use contracts::domain::a016_role::Role;
    use contracts::shared::relation::Related;
    use contracts::shared::list_query::SortDirection;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// In-memory backend recording every call it receives.
    struct MemoryBackend<R> {
        rows: RefCell<Vec<R>>,
        calls: RefCell<Vec<String>>,
    }

    impl<R> MemoryBackend<R> {
        fn new(rows: Vec<R>) -> Self {
            Self {
                rows: RefCell::new(rows),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl ResourceApi<Area> for MemoryBackend<Area> {
        async fn list(&self) -> Result<Vec<Area>, ApiError> {
            self.calls.borrow_mut().push("list".into());
            Ok(self.rows.borrow().clone())
        }

        async fn create(&self, payload: &AreaDto) -> Result<(), ApiError> {
            self.calls.borrow_mut().push("create".into());
            let id = self.rows.borrow().iter().map(|a| a.id).max().unwrap_or(0) + 1;
            self.rows.borrow_mut().push(Area {
                id,
                name: payload.name.clone(),
                campus: payload.campus.clone(),
            });
            Ok(())
        }

        async fn update(&self, id: i64, payload: &AreaDto) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(format!("update {id}"));
            let mut rows = self.rows.borrow_mut();
            let row = rows
                .iter_mut()
                .find(|a| a.id == id)
                .ok_or(ApiError::Status {
                    status: 404,
                    message: "El recurso no existe".into(),
                })?;
            row.name = payload.name.clone();
            Ok(())
        }

        async fn delete(&self, id: i64) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(format!("delete {id}"));
            self.rows.borrow_mut().retain(|a| a.id != id);
            Ok(())
        }
    }

    fn area(id: i64, name: &str) -> Area {
        Area {
            id,
            name: name.into(),
            campus: None,
        }
    }

    fn role(id: i64, name: &str) -> Role {
        Role {
            id,
            name: name.into(),
        }
    }

    fn area_controller() -> ListController<Area> {
        ListController::new(&[ColumnDef::new("id", "ID"), ColumnDef::new("name", "Nombre")])
    }

    #[test]
    fn roles_filter_page_and_sort() {
        let mut ctl: ListController<Role> = ListController::new(&[ColumnDef::new("name", "Nombre")]);
        ctl.finish_load(Ok(vec![role(1, "Admin"), role(2, "Almacenista")]));

        ctl.set_filter("alm");
        let ids: Vec<i64> = ctl.view().items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2]);

        ctl.set_filter("");
        ctl.set_page_size(1);
        assert_eq!(ctl.view().total_pages, 2);
        assert_eq!(ctl.view().items[0].id, 1);
        ctl.set_page(1);
        assert_eq!(ctl.view().items[0].id, 2);

        ctl.set_page_size(10);
        ctl.toggle_sort("name");
        ctl.toggle_sort("name");
        assert_eq!(
            ctl.query.sort.as_ref().map(|s| s.direction),
            Some(SortDirection::Descending)
        );
        let names: Vec<String> = ctl.view().items.into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Almacenista", "Admin"]);
    }

    #[test]
    fn empty_area_name_never_reaches_the_backend() {
        let backend = MemoryBackend::new(vec![area(1, "Bodega")]);
        let mut ctl = area_controller();
        ctl.open_create();
        ctl.draft.name = "   ".into();

        let result = ctl.prepare_save();
        assert!(result.is_err());
        assert_eq!(ctl.form_error.as_deref(), Some("El nombre del área es obligatorio"));
        assert_eq!(ctl.modal, ModalState::Create);
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn create_refetches_the_collection() {
        let backend = MemoryBackend::new(vec![area(1, "Bodega")]);
        let mut ctl = area_controller();
        ctl.finish_load(block_on(backend.list()));
        ctl.open_create();
        ctl.draft.name = "Taller".into();

        let op = ctl.prepare_save().unwrap();
        let reloaded = block_on(save_and_reload(&backend, op)).unwrap();
        ctl.finish_load(reloaded);
        ctl.finish_save();

        assert_eq!(backend.calls(), vec!["list", "create", "list"]);
        assert_eq!(ctl.items.len(), 2);
        assert_eq!(ctl.modal, ModalState::Closed);
        assert_eq!(ctl.draft, AreaDto::default());
    }

    #[test]
    fn create_acknowledged_without_entity_closes_the_form() {
        // the backend stores the row but only answers with a status
        let backend = MemoryBackend::new(Vec::new());
        let mut ctl = area_controller();
        ctl.finish_load(block_on(backend.list()));
        ctl.open_create();
        ctl.draft.name = "Taller".into();

        let op = ctl.prepare_save().unwrap();
        match block_on(save_and_reload(&backend, op)) {
            Ok(reloaded) => {
                ctl.finish_load(reloaded);
                ctl.finish_save();
            }
            Err(e) => ctl.fail_save(&e),
        }

        assert_eq!(backend.calls(), vec!["list", "create", "list"]);
        assert_eq!(ctl.form_error, None);
        assert_eq!(ctl.modal, ModalState::Closed);
        assert_eq!(ctl.items[0].name, "Taller");
    }

    #[test]
    fn id_only_relations_take_lookup_labels_in_either_order() {
        let mut campuses = Lookups::default();
        campuses.insert(
            "a002_campus",
            vec![contracts::shared::lookup::LookupOption {
                id: 2,
                label: "Sede Norte".into(),
            }],
        );
        let bodega = Area {
            id: 1,
            name: "Bodega".into(),
            campus: Some(Related::id_only(2)),
        };

        let mut list_first = area_controller();
        list_first.finish_load(Ok(vec![bodega.clone()]));
        list_first.set_lookups(campuses.clone());

        let mut lookups_first = area_controller();
        lookups_first.set_lookups(campuses);
        lookups_first.finish_load(Ok(vec![bodega]));

        for ctl in [&mut list_first, &mut lookups_first] {
            ctl.set_filter("norte");
            assert_eq!(ctl.view().total_count, 1);
            assert_eq!(ctl.items[0].campus, Some(Related::labelled(2, "Sede Norte")));
        }
    }

    #[test]
    fn edit_uses_the_row_as_draft_and_updates_by_id() {
        let backend = MemoryBackend::new(vec![area(1, "Bodega"), area(2, "Taller")]);
        let mut ctl = area_controller();
        ctl.finish_load(block_on(backend.list()));

        assert!(ctl.open_edit(2));
        assert_eq!(ctl.draft.name, "Taller");
        ctl.draft.name = "Taller central".into();

        let op = ctl.prepare_save().unwrap();
        assert!(matches!(op, SaveOp::Update(2, _)));
        ctl.finish_load(block_on(save_and_reload(&backend, op)).unwrap());
        assert_eq!(ctl.items[1].name, "Taller central");
        assert!(!ctl.open_edit(99));
    }

    #[test]
    fn delete_refetches_and_clamps_the_page() {
        let backend = MemoryBackend::new(vec![area(1, "A"), area(2, "B"), area(3, "C")]);
        let mut ctl = area_controller();
        ctl.finish_load(block_on(backend.list()));
        ctl.set_page_size(1);
        ctl.set_page(2);
        assert_eq!(ctl.query.page_index, 2);

        ctl.finish_load(block_on(remove_and_reload(&backend, 3)).unwrap());
        assert_eq!(backend.calls(), vec!["list", "delete 3", "list"]);
        assert_eq!(ctl.query.page_index, 1);
        assert_eq!(ctl.view().items[0].id, 2);
    }

    #[test]
    fn failed_load_keeps_previous_items() {
        let mut ctl = area_controller();
        ctl.finish_load(Ok(vec![area(1, "Bodega")]));
        ctl.begin_load();
        assert!(ctl.is_loading());
        ctl.finish_load(Err(ApiError::Network("offline".into())));

        assert_eq!(ctl.items.len(), 1);
        assert!(matches!(ctl.load, LoadState::Failed(_)));
    }

    #[test]
    fn failed_mutation_keeps_the_modal_open() {
        let backend = MemoryBackend::new(vec![area(1, "Bodega")]);
        let mut ctl = area_controller();
        ctl.finish_load(block_on(backend.list()));
        ctl.modal = ModalState::Edit(7);
        ctl.draft.name = "Fantasma".into();

        let op = ctl.prepare_save().unwrap();
        let err = block_on(save_and_reload(&backend, op)).unwrap_err();
        ctl.fail_save(&err);

        assert_eq!(ctl.modal, ModalState::Edit(7));
        assert_eq!(ctl.form_error.as_deref(), Some("El recurso no existe (HTTP 404)"));
        assert_eq!(ctl.items.len(), 1);
    }

    #[test]
    fn page_past_the_end_is_pulled_back() {
        let mut ctl = area_controller();
        ctl.finish_load(Ok(vec![area(1, "A"), area(2, "B")]));
        ctl.set_page(5);
        assert_eq!(ctl.query.page_index, 0);
    }
}
