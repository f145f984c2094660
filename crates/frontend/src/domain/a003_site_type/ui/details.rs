use contracts::domain::a003_site_type::SiteTypeDto;
use leptos::prelude::*;

use crate::shared::components::form_fields::TextField;

pub fn site_type_form(draft: RwSignal<SiteTypeDto>, disabled: Signal<bool>) -> AnyView {
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
