use crate::layout::center::PageHost;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Runs once when the layout is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <PageHost /> }.into_any()
        />
    }
}

/// Every page is reachable; each one checks its own permissions.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <MainLayout /> }
}
