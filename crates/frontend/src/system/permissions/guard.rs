use contracts::system::permissions::PermissionMatrix;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::fetch_permissions;
use crate::shared::icons::icon;
use crate::shared::resource::cancel::scoped_token;
use crate::system::session::use_session;

/// Permission flags of the current role on `route`.
///
/// `None` until the session is known and the lookup has answered.
pub fn use_permissions(route: &'static str) -> Signal<Option<PermissionMatrix>> {
    let session = use_session();
    let matrix = RwSignal::new(None::<PermissionMatrix>);
    let token = scoped_token();

    Effect::new(move |_| {
        let state = session.get();
        if !state.resolved {
            return;
        }
        let role_id = state.role_id();
        let token = token.clone();
        spawn_local(async move {
            let flags = fetch_permissions(route, role_id).await;
            if token.is_cancelled() {
                return;
            }
            log::debug!("permissions for {}: {:?}", route, flags);
            matrix.set(Some(flags));
        });
    });

    matrix.into()
}

#[component]
pub fn AccessDenied() -> impl IntoView {
    view! {
        <div class="access-denied">
            {icon("lock")}
            <h2>"Acceso denegado"</h2>
            <p>"Su rol no tiene permiso para ver esta sección."</p>
        </div>
    }
}

/// Renders `children` only when the role may view `route`.
#[component]
pub fn PermissionGate(
    #[prop(into)] permissions: Signal<Option<PermissionMatrix>>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        {move || match permissions.get() {
            None => view! { <div class="page__loading">"Verificando permisos..."</div> }.into_any(),
            Some(p) if !p.can_view => view! { <AccessDenied /> }.into_any(),
            Some(_) => children().into_any(),
        }}
    }
}
