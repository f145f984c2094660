use std::collections::HashMap;

use leptos::prelude::*;
use web_sys::window;

use super::pages::is_known_page;

/// Page shown when the URL carries no (or an unknown) `active` key.
pub const DEFAULT_PAGE: &str = "a007_inventory";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<String>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(DEFAULT_PAGE.to_string()),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores the active page from `?active=` and keeps the URL in sync
    /// with later navigation.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        match active_from_search(&search) {
            Some(key) if is_known_page(&key) => self.active.set(key),
            Some(key) => log::warn!("unknown page '{}' in URL, showing {}", key, DEFAULT_PAGE),
            None => {}
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = format!("?{}", active_query(&this.active.get()));
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open_page(&self, key: &str) {
        log::debug!("open page {}", key);
        self.active.set(key.to_string());
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn active_from_search(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").filter(|k| !k.is_empty()).cloned()
}

fn active_query(key: &str) -> String {
    serde_qs::to_string(&HashMap::from([("active", key)])).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_key_is_read_from_query() {
        assert_eq!(active_from_search("?active=a016_role"), Some("a016_role".to_string()));
        assert_eq!(active_from_search("?other=1&active=a001_area"), Some("a001_area".to_string()));
        assert_eq!(active_from_search(""), None);
        assert_eq!(active_from_search("?active="), None);
    }

    #[test]
    fn active_key_round_trips_through_query() {
        let query = active_query("d400_stock_by_site");
        assert_eq!(query, "active=d400_stock_by_site");
        assert_eq!(active_from_search(&format!("?{}", query)).as_deref(), Some("d400_stock_by_site"));
    }
}
