use contracts::domain::a016_role::RoleDto;
use leptos::prelude::*;

use crate::shared::components::form_fields::TextField;

pub fn role_form(draft: RwSignal<RoleDto>, disabled: Signal<bool>) -> AnyView {
    view! {
        <TextField
            label="Nombre"
            required=true
            value=Signal::derive(move || draft.with(|d| d.name.clone()))
            on_change=Callback::new(move |v| draft.update(|d| d.name = v))
            disabled=disabled
        />
    }
    .into_any()
}
