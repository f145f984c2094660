//! Top bar: sidebar toggle, current page title and the signed-in profile.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::page_label;
use crate::shared::icons::icon;
use crate::system::session::use_session;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();

    let is_sidebar_visible = move || ctx.left_open.get();
    let profile_name = move || {
        session.with(|s| match (&s.profile, s.resolved) {
            (Some(profile), _) => profile.display_name(),
            (None, true) => "Sin sesión".to_string(),
            (None, false) => "...".to_string(),
        })
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Ocultar menú" } else { "Mostrar menú" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Inventario SENA"</span>
                <span class="top-header__page">
                    {icon("chevron-right")}
                    {move || page_label(&ctx.active.get())}
                </span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{profile_name}</span>
                </div>
            </div>
        </div>
    }
}
