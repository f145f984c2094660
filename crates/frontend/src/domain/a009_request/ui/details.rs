use contracts::domain::a009_request::{RequestDto, RequestStatus};
use contracts::domain::a017_user::User;
use contracts::domain::common::Resource;
use contracts::shared::lookup::Lookups;
use leptos::prelude::*;

use crate::shared::components::form_fields::{ChoiceField, DateField, RelationSelect};
use crate::shared::resource::view::lookup_options;

pub fn request_form(draft: RwSignal<RequestDto>, lookups: Signal<Lookups>, disabled: Signal<bool>) -> AnyView {
    let statuses = RequestStatus::ALL.iter().map(|s| (s.as_wire(), s.label())).collect::<Vec<_>>();

    view! {
        <DateField
            label="Fecha de solicitud"
            required=true
            value=Signal::derive(move || draft.with(|d| d.date))
            on_change=Callback::new(move |v| draft.update(|d| d.date = v))
            disabled=disabled
        />
        <ChoiceField
            label="Estado"
            required=true
            options=statuses
            value=Signal::derive(move || draft.with(|d| d.status.as_wire().to_string()))
            on_change=Callback::new(move |v: String| {
                if let Some(status) = RequestStatus::from_wire(&v) {
                    draft.update(|d| d.status = status);
                }
            })
            disabled=disabled
        />
        <RelationSelect
            label="Solicitante"
            required=true
            options=lookup_options(lookups, User::KEY)
            value=Signal::derive(move || draft.with(|d| d.requester.clone()))
            on_change=Callback::new(move |v| draft.update(|d| d.requester = v))
            disabled=disabled
        />
    }
    .into_any()
}
