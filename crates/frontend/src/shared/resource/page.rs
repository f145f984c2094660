//! Generic list page: table on desktop, cards on mobile, modal form,
//! confirmation before delete. Every resource page is an instance of it.

use contracts::shared::columns::ColumnDef;
use contracts::shared::lookup::Lookups;
use contracts::system::permissions::PermissionMatrix;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api::{fetch_lookups, HttpResource, ResourceApi};
use super::cancel::scoped_token;
use super::controller::{remove_and_reload, save_and_reload, ListController, LoadState, ModalState};
use super::view::ResourceView;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, highlight_matches, SearchInput};
use crate::shared::notify::use_notifications;
use crate::system::permissions::{use_permissions, PermissionGate};

pub fn resource_list_page<R: ResourceView>() -> impl IntoView {
    let permissions = use_permissions(R::ROUTE);

    view! {
        <PermissionGate permissions=permissions>
            {move || {
                let flags = permissions.get_untracked().unwrap_or(PermissionMatrix::DENY_ALL);
                resource_list::<R>(flags)
            }}
        </PermissionGate>
    }
}

fn resource_list<R: ResourceView>(flags: PermissionMatrix) -> impl IntoView {
    let ctl = RwSignal::new(ListController::<R>::new(R::columns()));
    let draft = RwSignal::new(R::Payload::default());
    let saving = RwSignal::new(false);
    let token = StoredValue::new(scoped_token());
    let notify = use_notifications();

    let load_data = move || {
        ctl.update(|c| c.begin_load());
        let token = token.get_value();
        spawn_local(async move {
            let api = HttpResource::<R>::new();
            let (items, lookups) = futures::join!(api.list(), fetch_lookups(R::lookup_sources()));
            if token.is_cancelled() {
                return;
            }
            if let Err(e) = &items {
                notify.error(format!("No se pudo cargar {}: {}", R::TITLE.to_lowercase(), e));
            }
            ctl.update(|c| {
                c.set_lookups(lookups);
                c.finish_load(items);
            });
        });
    };

    Effect::new(move |_| {
        if ctl.with_untracked(|c| c.load == LoadState::Idle) {
            load_data();
        }
    });

    let open_create = move || {
        ctl.update(|c| c.open_create());
        draft.set(ctl.with_untracked(|c| c.draft.clone()));
    };

    let open_edit = move |id: i64| {
        let found = ctl.try_update(|c| c.open_edit(id)).unwrap_or(false);
        if found {
            draft.set(ctl.with_untracked(|c| c.draft.clone()));
        } else {
            notify.error("El registro ya no existe");
        }
    };

    let close_modal = move || {
        ctl.update(|c| c.close_modal());
        draft.set(R::Payload::default());
    };

    let save = move || {
        if saving.get_untracked() {
            return;
        }
        let prepared = ctl.try_update(|c| {
            c.draft = draft.get_untracked();
            c.prepare_save()
        });
        let Some(Ok(op)) = prepared else {
            return;
        };
        saving.set(true);
        let token = token.get_value();
        spawn_local(async move {
            let api = HttpResource::<R>::new();
            let result = save_and_reload(&api, op).await;
            if token.is_cancelled() {
                return;
            }
            saving.set(false);
            match result {
                Ok(reload) => {
                    ctl.update(|c| {
                        c.finish_save();
                        c.finish_load(reload);
                    });
                    draft.set(R::Payload::default());
                    notify.success("Registro guardado");
                }
                Err(e) => {
                    log::error!("{}: save failed: {}", R::KEY, e);
                    ctl.update(|c| c.fail_save(&e));
                    notify.error(e.to_string());
                }
            }
        });
    };

    let request_remove = move |id: i64| {
        let token = token.get_value();
        notify.confirm(
            format!("¿Eliminar {} #{}? Esta acción no se puede deshacer.", R::NOUN, id),
            Callback::new(move |_| {
                let token = token.clone();
                spawn_local(async move {
                    let api = HttpResource::<R>::new();
                    let result = remove_and_reload(&api, id).await;
                    if token.is_cancelled() {
                        return;
                    }
                    match result {
                        Ok(reload) => {
                            ctl.update(|c| c.finish_load(reload));
                            notify.success("Registro eliminado");
                        }
                        Err(e) => {
                            log::error!("{}: delete #{} failed: {}", R::KEY, id, e);
                            notify.error(e.to_string());
                        }
                    }
                });
            }),
        );
    };

    let page_view = Memo::new(move |_| ctl.with(|c| c.view()));
    let sort = Memo::new(move |_| ctl.with(|c| c.query.sort.clone()));
    let filter = Signal::derive(move || ctl.with(|c| c.query.filter.clone()));
    let visible_columns = Memo::new(move |_| {
        ctl.with(|c| c.columns.select(R::columns()).into_iter().copied().collect::<Vec<ColumnDef>>())
    });
    let lookups = Memo::new(move |_| ctl.with(|c| c.lookups.clone()));
    let modal = Memo::new(move |_| ctl.with(|c| c.modal));
    let form_error = Memo::new(move |_| ctl.with(|c| c.form_error.clone()));
    let load_state = Memo::new(move |_| ctl.with(|c| c.load.clone()));
    let loading = Signal::derive(move || load_state.get() == LoadState::Loading);
    let show_columns = RwSignal::new(false);

    let row_actions = move |id: i64| {
        view! {
            <div class="row-actions">
                {flags.can_edit.then(|| view! {
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| open_edit(id)
                        attr:title="Editar"
                    >
                        {icon("edit")}
                    </Button>
                })}
                {flags.can_delete.then(|| view! {
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| request_remove(id)
                        attr:title="Eliminar"
                    >
                        {icon("trash")}
                    </Button>
                })}
            </div>
        }
    };

    view! {
        <div class="page" data-page=R::KEY>
            <PageHeader
                title=R::TITLE
                subtitle=Signal::derive(move || Some(format!("{} registros", page_view.get().total_count)))
            >
                {flags.can_create.then(|| view! {
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_create()>
                        {icon("plus")}
                        " Nuevo"
                    </Button>
                })}
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_data()
                    disabled=loading
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Cargando..." } else { " Actualizar" }}
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || match load_state.get() {
                    LoadState::Failed(msg) => Some(view! { <div class="alert alert--error">{msg}</div> }),
                    _ => None,
                }}

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            <SearchInput
                                value=filter
                                on_change=Callback::new(move |text: String| ctl.update(|c| c.set_filter(text)))
                            />
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || page_view.get().page_index)
                                total_pages=Signal::derive(move || page_view.get().total_pages)
                                total_count=Signal::derive(move || page_view.get().total_count)
                                page_size=Signal::derive(move || ctl.with(|c| c.query.page_size))
                                on_page_change=Callback::new(move |page| ctl.update(|c| c.set_page(page)))
                                on_page_size_change=Callback::new(move |size| ctl.update(|c| c.set_page_size(size)))
                            />
                        </div>
                        <div class="filter-panel-header__right">
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| show_columns.update(|v| *v = !*v)
                                attr:title="Columnas"
                            >
                                {icon("columns")}
                            </Button>
                        </div>
                    </div>

                    <Show when=move || show_columns.get()>
                        <div class="filter-panel-content column-toggles">
                            {R::columns().iter().map(|col| {
                                let key = col.key;
                                view! {
                                    <label class="column-toggle">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || ctl.with(|c| c.columns.is_visible(key))
                                            on:change=move |_| ctl.update(|c| c.toggle_column(key))
                                        />
                                        {col.label}
                                    </label>
                                }
                            }).collect_view()}
                        </div>
                    </Show>
                </div>

                <div class="table-wrapper table-wrapper--desktop">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                {move || visible_columns.get().into_iter().map(|col| {
                                    let key = col.key;
                                    if col.sortable {
                                        view! {
                                            <TableHeaderCell>
                                                <div
                                                    class="table__sortable-header"
                                                    on:click=move |_| ctl.update(|c| c.toggle_sort(key))
                                                >
                                                    {col.label}
                                                    <span class=move || sort.with(|s| get_sort_class(s, key))>
                                                        {move || sort.with(|s| get_sort_indicator(s, key))}
                                                    </span>
                                                </div>
                                            </TableHeaderCell>
                                        }.into_any()
                                    } else {
                                        view! { <TableHeaderCell>{col.label}</TableHeaderCell> }.into_any()
                                    }
                                }).collect_view()}
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let columns = visible_columns.get();
                                let needle = filter.get();
                                lookups.with(|lk| {
                                    page_view.get().items.into_iter().map(|item| {
                                        let id = item.id();
                                        let cells = columns.iter().map(|col| {
                                            let text = item.cell(col.key, lk);
                                            let needle = needle.clone();
                                            view! {
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {highlight_matches(&text, &needle)}
                                                    </TableCellLayout>
                                                </TableCell>
                                            }
                                        }).collect_view();
                                        view! {
                                            <TableRow>
                                                {cells}
                                                <TableCell>{row_actions(id)}</TableCell>
                                            </TableRow>
                                        }
                                    }).collect_view()
                                })
                            }}
                        </TableBody>
                    </Table>
                    {move || (page_view.get().items.is_empty() && !loading.get()).then(|| view! {
                        <div class="table__empty">"No hay registros"</div>
                    })}
                </div>

                <div class="card-list card-list--mobile">
                    {move || {
                        let columns = visible_columns.get();
                        lookups.with(|lk| {
                            page_view.get().items.into_iter().map(|item| {
                                let id = item.id();
                                let fields = columns.iter().map(|col| view! {
                                    <div class="card__field">
                                        <span class="card__label">{col.label}</span>
                                        <span class="card__value">{item.cell(col.key, lk)}</span>
                                    </div>
                                }).collect_view();
                                view! {
                                    <div class="card">
                                        <div class="card__title">{item.card_title()}</div>
                                        {fields}
                                        {row_actions(id)}
                                    </div>
                                }
                            }).collect_view()
                        })
                    }}
                </div>
            </div>

            {move || (modal.get() != ModalState::Closed).then(|| {
                let mode = modal.get_untracked().draft_mode();
                let title = match modal.get_untracked() {
                    ModalState::Edit(id) => format!("Editar {} #{}", R::NOUN, id),
                    _ => format!("Nuevo registro: {}", R::NOUN),
                };
                let lookups: Signal<Lookups> = lookups.into();
                view! {
                    <div class="modal-overlay" on:click=move |_| close_modal()>
                        <div class="modal" on:click=|ev| ev.stop_propagation()>
                            <div class="modal-header">
                                <h2 class="modal-title">{title}</h2>
                                <Button appearance=ButtonAppearance::Subtle on_click=move |_| close_modal()>
                                    {icon("x")}
                                </Button>
                            </div>
                            <div class="modal-body">
                                {move || form_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                                {R::form(draft, lookups, mode, saving.into())}
                            </div>
                            <div class="modal-footer">
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| close_modal()
                                    disabled=Signal::derive(move || saving.get())
                                >
                                    "Cancelar"
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| save()
                                    disabled=Signal::derive(move || saving.get())
                                >
                                    {move || if saving.get() { "Guardando..." } else { "Guardar" }}
                                </Button>
                            </div>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
