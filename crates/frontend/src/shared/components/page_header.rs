use leptos::prelude::*;

/// PageHeader component - title, optional row count badge and action buttons
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Children content (pass empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <span class="page__subtitle">{s}</span>
                })}
            </div>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}
