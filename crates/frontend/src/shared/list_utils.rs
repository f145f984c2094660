//! List UI helpers: search box, sort indicators, match highlighting.
//!
//! The filtering and sorting themselves live in `contracts::shared::list_query`.

use contracts::shared::list_query::{SortDescriptor, SortDirection};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Highlights every case-insensitive occurrence of `filter` inside `text`.
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last = 0;
    for (start, end) in ranges {
        if start > last {
            parts.push(view! { <span>{text[last..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-match">{text[start..end].to_string()}</mark> }.into_any());
        last = end;
    }
    if last < text.len() {
        parts.push(view! { <span>{text[last..].to_string()}</span> }.into_any());
    }
    view! { <>{parts}</> }.into_any()
}

/// Byte ranges of `filter` in `text`, ignoring case.
///
/// Lowercasing may change a character's byte length, so matches are found in
/// the lowercased text and mapped back through the original char boundaries.
/// A match that starts or ends inside one character's lowercase form is skipped.
fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut haystack = String::with_capacity(text.len());
    // original byte offset for each lowercased offset that starts a char's lowercase form
    let mut original_at: Vec<Option<usize>> = Vec::with_capacity(text.len() + 1);
    for (offset, ch) in text.char_indices() {
        let before = haystack.len();
        haystack.extend(ch.to_lowercase());
        original_at.push(Some(offset));
        original_at.resize(original_at.len() + haystack.len() - before - 1, None);
    }
    original_at.push(Some(text.len()));

    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(&needle) {
        let start = from + pos;
        let end = start + needle.len();
        if let (Some(a), Some(b)) = (original_at[start], original_at[end]) {
            ranges.push((a, b));
        }
        from = end;
    }
    ranges
}

/// Search input with debounce and a clear button.
#[component]
pub fn SearchInput(
    /// Current filter (for display)
    #[prop(into)]
    value: Signal<String>,
    /// Receives the debounced filter text
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        // Dropping the previous timeout cancels it.
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button class="search-input__clear" on:click=clear_filter title="Limpiar">
                    {crate::shared::icons::icon("x")}
                </button>
            })}
        </div>
    }
}

/// Sort indicator for a column header.
pub fn get_sort_indicator(sort: &Option<SortDescriptor>, column: &str) -> &'static str {
    match sort {
        Some(s) if s.column == column => match s.direction {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        },
        _ => " ⇅",
    }
}

pub fn get_sort_class(sort: &Option<SortDescriptor>, column: &str) -> &'static str {
    match sort {
        Some(s) if s.column == column => "table__sort-indicator table__sort-indicator--active",
        _ => "table__sort-indicator",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_follows_active_column() {
        let sort = Some(SortDescriptor::descending("name"));
        assert_eq!(get_sort_indicator(&sort, "name"), " ▼");
        assert_eq!(get_sort_indicator(&sort, "id"), " ⇅");
        assert_eq!(get_sort_indicator(&None, "name"), " ⇅");
        assert!(get_sort_class(&sort, "name").ends_with("--active"));
    }

    #[test]
    fn match_ranges_ignore_case() {
        assert_eq!(match_ranges("Bodega BOD", "bod"), vec![(0, 3), (7, 10)]);
        assert!(match_ranges("Bodega", "").is_empty());
        assert!(match_ranges("Bodega", "xyz").is_empty());
    }

    #[test]
    fn match_ranges_follow_chars_whose_lowercase_changes_length() {
        // 'ẞ' (3 bytes) lowercases to 'ß' (2), 'İ' (2) to "i̇" (3)
        let text = "ẞİ bodega";
        let ranges = match_ranges(text, "bodega");
        assert_eq!(ranges, vec![(6, 12)]);
        assert_eq!(&text[6..12], "bodega");

        assert_eq!(match_ranges("CALLE ẞ", "ß"), vec![(6, 9)]);
        // "i" alone covers only part of the lowercase form of 'İ'
        assert!(match_ranges("İ", "i").is_empty());
        for (start, end) in match_ranges("ÁREA área", "área") {
            assert!(text_is_sliceable("ÁREA área", start, end));
        }
    }

    fn text_is_sliceable(text: &str, start: usize, end: usize) -> bool {
        text.is_char_boundary(start) && text.is_char_boundary(end)
    }
}
