use contracts::domain::a016_role::Role;
use contracts::domain::a017_user::UserDto;
use contracts::domain::common::Resource;
use contracts::shared::lookup::Lookups;
use contracts::shared::validation::{blank_to_none, DraftMode};
use leptos::prelude::*;

use crate::shared::components::form_fields::{RelationSelect, TextField};
use crate::shared::resource::view::lookup_options;

/// On update the password stays empty unless the user types a new one.
pub fn user_form(
    draft: RwSignal<UserDto>,
    lookups: Signal<Lookups>,
    mode: DraftMode,
    disabled: Signal<bool>,
) -> AnyView {
    let password_label = match mode {
        DraftMode::Create => "Contraseña",
        DraftMode::Update => "Nueva contraseña (opcional)",
    };

    view! {
        <div class="form__row">
            <TextField
                label="Nombre"
                required=true
                value=Signal::derive(move || draft.with(|d| d.first_name.clone()))
                on_change=Callback::new(move |v| draft.update(|d| d.first_name = v))
                disabled=disabled
            />
            <TextField
                label="Apellido"
                value=Signal::derive(move || draft.with(|d| d.last_name.clone().unwrap_or_default()))
                on_change=Callback::new(move |v: String| draft.update(|d| d.last_name = blank_to_none(v)))
                disabled=disabled
            />
        </div>
        <TextField
            label="Correo"
            input_type="email"
            required=true
            value=Signal::derive(move || draft.with(|d| d.email.clone()))
            on_change=Callback::new(move |v| draft.update(|d| d.email = v))
            disabled=disabled
        />
        <TextField
            label="Documento"
            value=Signal::derive(move || draft.with(|d| d.document.clone().unwrap_or_default()))
            on_change=Callback::new(move |v: String| draft.update(|d| d.document = blank_to_none(v)))
            disabled=disabled
        />
        <RelationSelect
            label="Rol"
            required=true
            options=lookup_options(lookups, Role::KEY)
            value=Signal::derive(move || draft.with(|d| d.role.clone()))
            on_change=Callback::new(move |v| draft.update(|d| d.role = v))
            disabled=disabled
        />
        <TextField
            label=password_label
            input_type="password"
            required={mode == DraftMode::Create}
            value=Signal::derive(move || draft.with(|d| d.password.clone().unwrap_or_default()))
            on_change=Callback::new(move |v: String| draft.update(|d| d.password = blank_to_none(v)))
            disabled=disabled
        />
    }
    .into_any()
}
