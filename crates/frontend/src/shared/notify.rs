use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use uuid::Uuid;

use crate::shared::icons::icon;

pub const TOAST_LIFETIME_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Info => "toast toast--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone)]
pub struct ConfirmRequest {
    pub message: String,
    pub on_confirm: Callback<()>,
}

/// Toasts and the single confirmation dialog, shared through context.
#[derive(Clone, Copy)]
pub struct NotificationService {
    toasts: RwSignal<Vec<Toast>>,
    pending_confirm: RwSignal<Option<ConfirmRequest>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            pending_confirm: RwSignal::new(None),
        }
    }

    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let toast = Toast {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
        };
        let id = toast.id;
        self.toasts.update(|t| t.push(toast));

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            toasts.try_update(|t| t.retain(|x| x.id != id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(ToastKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(ToastKind::Info, message);
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|t| t.retain(|x| x.id != id));
    }

    /// Replaces any dialog still open; `on_confirm` runs only on "Aceptar".
    pub fn confirm(&self, message: impl Into<String>, on_confirm: Callback<()>) {
        self.pending_confirm.set(Some(ConfirmRequest {
            message: message.into(),
            on_confirm,
        }));
    }

    fn resolve(&self, accepted: bool) {
        let request = self.pending_confirm.get_untracked();
        self.pending_confirm.set(None);
        if let (true, Some(request)) = (accepted, request) {
            request.on_confirm.run(());
        }
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="toast-stack">
            <For
                each=move || service.toasts.get()
                key=|t| t.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button class="toast__close" on:click=move |_| service.dismiss(id) title="Cerrar">
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>

        {move || service.pending_confirm.get().map(|request| view! {
            <div class="modal-overlay" on:click=move |_| service.resolve(false)>
                <div class="modal modal--confirm" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2 class="modal-title">"Confirmar"</h2>
                    </div>
                    <div class="modal-body">
                        <p>{request.message}</p>
                    </div>
                    <div class="modal-footer">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| service.resolve(false)
                        >
                            "Cancelar"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| service.resolve(true)
                        >
                            "Aceptar"
                        </Button>
                    </div>
                </div>
            </div>
        })}
    }
}
