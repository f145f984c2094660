//! Controlled inputs for the resource edit forms.
//!
//! Each field reads from a derived signal and reports edits through a
//! callback, so a whole draft can live in one `RwSignal`.

use chrono::NaiveDate;
use contracts::shared::lookup::LookupOption;
use contracts::shared::relation::Related;
use contracts::shared::serde_helpers::format_date;
use leptos::prelude::*;

#[component]
pub fn TextField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    /// HTML input type, `text` when omitted
    #[prop(optional)]
    input_type: Option<&'static str>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}{required.then_some(" *")}</label>
            <input
                class="form__input"
                type=input_type.unwrap_or("text")
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <textarea
                class="form__input form__input--multiline"
                rows="3"
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
                disabled=move || disabled.get()
            ></textarea>
        </div>
    }
}

/// Integer input; anything that does not parse is reported as `None`.
#[component]
pub fn NumberField(
    label: &'static str,
    #[prop(into)] value: Signal<Option<i64>>,
    on_change: Callback<Option<i64>>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}{required.then_some(" *")}</label>
            <input
                class="form__input"
                type="number"
                step="1"
                prop:value=move || value.get().map(|v| v.to_string()).unwrap_or_default()
                on:input=move |ev| on_change.run(event_target_value(&ev).trim().parse().ok())
                disabled=move || disabled.get()
            />
        </div>
    }
}

/// Native date picker; the browser works in `yyyy-mm-dd`.
#[component]
pub fn DateField(
    label: &'static str,
    #[prop(into)] value: Signal<Option<NaiveDate>>,
    on_change: Callback<Option<NaiveDate>>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}{required.then_some(" *")}</label>
            <input
                class="form__input"
                type="date"
                prop:value=move || value.get().map(|d| format_date(&d)).unwrap_or_default()
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    on_change.run(NaiveDate::parse_from_str(&raw, "%Y-%m-%d").ok());
                }
                disabled=move || disabled.get()
            />
        </div>
    }
}

/// Select over a fixed set of wire values, e.g. movement types.
#[component]
pub fn ChoiceField(
    label: &'static str,
    /// (wire value, visible label)
    options: Vec<(&'static str, &'static str)>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}{required.then_some(" *")}</label>
            <select
                class="form__input"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
                disabled=move || disabled.get()
            >
                <option value="">"Seleccione..."</option>
                {options.into_iter().map(|(wire, text)| view! {
                    <option value=wire selected=move || value.get() == wire>{text}</option>
                }).collect_view()}
            </select>
        </div>
    }
}

/// Select for a foreign key; options come from a lookup list and the
/// picked value is the id-only reference the payload sends.
#[component]
pub fn RelationSelect(
    label: &'static str,
    #[prop(into)] options: Signal<Vec<LookupOption>>,
    #[prop(into)] value: Signal<Option<Related>>,
    on_change: Callback<Option<Related>>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let selected_id = move || value.get().map(|r| r.id);

    view! {
        <div class="form__group">
            <label class="form__label">{label}{required.then_some(" *")}</label>
            <select
                class="form__input"
                prop:value=move || selected_id().map(|id| id.to_string()).unwrap_or_default()
                on:change=move |ev| {
                    let raw = event_target_value(&ev);
                    let picked = raw.parse::<i64>().ok().map(Related::id_only);
                    on_change.run(picked);
                }
                disabled=move || disabled.get()
            >
                <option value="">"Seleccione..."</option>
                {move || options.get().into_iter().map(|opt| {
                    let id = opt.id;
                    view! {
                        <option value=id.to_string() selected=move || selected_id() == Some(id)>
                            {opt.label}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
