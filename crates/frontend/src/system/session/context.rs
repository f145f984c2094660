use contracts::system::session::UserProfile;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub profile: Option<UserProfile>,
    /// Set once the cookie (and, when needed, `/api/perfil`) has been read.
    pub resolved: bool,
}

impl SessionState {
    pub fn role_id(&self) -> Option<i64> {
        self.profile.as_ref().and_then(|p| p.effective_role_id())
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let session = RwSignal::new(SessionState::default());

    Effect::new(move |_| {
        spawn_local(async move {
            let profile = api::load_profile().await;
            match &profile {
                Some(p) => log::info!("session for user #{}", p.id),
                None => log::warn!("no session profile, every page will be denied"),
            }
            session.set(SessionState {
                profile,
                resolved: true,
            });
        });
    });

    provide_context(session);

    children()
}

/// Hook to access the session
pub fn use_session() -> RwSignal<SessionState> {
    use_context::<RwSignal<SessionState>>().expect("SessionProvider not found in component tree")
}
