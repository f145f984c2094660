use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::notify::{NotificationHost, NotificationService};
use crate::system::session::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Shared stores for the whole app.
    provide_context(AppGlobalContext::new());
    provide_context(NotificationService::new());

    view! {
        <SessionProvider>
            <AppRoutes />
        </SessionProvider>
        <NotificationHost />
    }
}
