use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::render_page;
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            {children()}
        </div>
    }
}

/// Renders the active page; switching pages disposes the previous one.
#[component]
pub fn PageHost() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let active = Memo::new(move |_| ctx.active.get());

    move || render_page(&active.get())
}
