use contracts::domain::a001_area::Area;
use contracts::domain::a003_site_type::SiteType;
use contracts::domain::a004_site::SiteDto;
use contracts::domain::common::Resource;
use contracts::shared::lookup::Lookups;
use contracts::shared::validation::blank_to_none;
use leptos::prelude::*;

use crate::shared::components::form_fields::{RelationSelect, TextField};
use crate::shared::resource::view::lookup_options;

pub fn site_form(draft: RwSignal<SiteDto>, lookups: Signal<Lookups>, disabled: Signal<bool>) -> AnyView {
    view! {
        <TextField
            label="Nombre"
            required=true
            value=Signal::derive(move || draft.with(|d| d.name.clone()))
            on_change=Callback::new(move |v| draft.update(|d| d.name = v))
            disabled=disabled
        />
        <TextField
            label="Ubicación"
            value=Signal::derive(move || draft.with(|d| d.location.clone().unwrap_or_default()))
            on_change=Callback::new(move |v: String| draft.update(|d| d.location = blank_to_none(v)))
            disabled=disabled
        />
        <RelationSelect
            label="Tipo de sitio"
            required=true
            options=lookup_options(lookups, SiteType::KEY)
            value=Signal::derive(move || draft.with(|d| d.site_type.clone()))
            on_change=Callback::new(move |v| draft.update(|d| d.site_type = v))
            disabled=disabled
        />
        <RelationSelect
            label="Área"
            options=lookup_options(lookups, Area::KEY)
            value=Signal::derive(move || draft.with(|d| d.area.clone()))
            on_change=Callback::new(move |v| draft.update(|d| d.area = v))
            disabled=disabled
        />
    }
    .into_any()
}
