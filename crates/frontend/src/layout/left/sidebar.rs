//! Sidebar with collapsible menu groups.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::{menu_groups, MenuGroup};
use crate::shared::icons::icon;
use leptos::prelude::*;

fn group_of(groups: &[MenuGroup], key: &str) -> Option<&'static str> {
    groups
        .iter()
        .find(|g| g.items.iter().any(|(k, _, _)| *k == key))
        .map(|g| g.id)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let groups = menu_groups();

    // The group holding the restored page starts expanded.
    let initial = group_of(&groups, &ctx.active.get_untracked())
        .map(|g| vec![g.to_string()])
        .unwrap_or_default();
    let expanded_groups = RwSignal::new(initial);

    view! {
        <nav class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let gid = group.id.to_string();
                let gid_click = gid.clone();
                let gid_chevron = gid.clone();

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = gid_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.with(|g| g.contains(&gid_chevron))
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.with(|g| g.contains(&gid))>
                            <div class="app-sidebar__children">
                                {group.items.iter().map(|&(key, label, icon_name)| view! {
                                    <div
                                        class="app-sidebar__item"
                                        class:app-sidebar__item--active=move || ctx.active.with(|a| a == key)
                                        style:padding-left="10px"
                                        on:click=move |_| ctx.open_page(key)
                                    >
                                        <div class="app-sidebar__item-content">
                                            {icon(icon_name)}
                                            <span>{label}</span>
                                        </div>
                                    </div>
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_resolve_to_their_menu_group() {
        let groups = menu_groups();
        assert_eq!(group_of(&groups, "a016_role"), Some("admin"));
        assert_eq!(group_of(&groups, "d400_stock_by_site"), Some("reports"));
        assert_eq!(group_of(&groups, "missing"), None);
    }
}
