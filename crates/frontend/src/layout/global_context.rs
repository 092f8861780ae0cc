use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use super::tabs::tab_label_for_key;

/// Tab opened when the URL names none
pub const DEFAULT_TAB: &str = "d400_analytics";

const ACTIVE_PARAM: &str = "active";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Open tabs and sidebar state shared by the whole shell
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

/// Tab key carried by a `?active=...` query string
fn active_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get(ACTIVE_PARAM).cloned()
}

/// Query string naming `key` as the active tab
fn query_for(key: &str) -> String {
    let params = HashMap::from([(ACTIVE_PARAM, key)]);
    format!("?{}", serde_qs::to_string(&params).unwrap_or_default())
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Swap the query without adding a history entry
fn replace_search(search: &str) {
    let Some(history) = window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(search)) {
        log::warn!("history.replaceState failed: {:?}", e);
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restore the tab named in the URL, then mirror the active tab into it
    pub fn init_router_integration(&self) {
        match active_from_query(&current_search()) {
            Some(key) if tab_label_for_key(&key).is_some() => self.open_tab(&key),
            Some(unknown) => {
                log::warn!("ignoring unknown tab key '{}' in URL", unknown);
                self.open_tab(DEFAULT_TAB);
            }
            None => self.open_tab(DEFAULT_TAB),
        }

        let active = self.active;
        Effect::new(move |_| {
            let Some(key) = active.get() else {
                return;
            };
            let wanted = query_for(&key);
            if current_search() != wanted {
                replace_search(&wanted);
            }
        });
    }

    /// Focus the tab for `key`, opening it first if needed
    pub fn open_tab(&self, key: &str) {
        let is_open = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !is_open {
            log::debug!("open tab '{}'", key);
            let tab = Tab {
                key: key.to_string(),
                title: tab_label_for_key(key).unwrap_or(key).to_string(),
            };
            self.opened.update(|tabs| tabs.push(tab));
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    /// Close a tab; closing the active one focuses the last remaining tab
    pub fn close_tab(&self, key: &str) {
        log::debug!("close tab '{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        let was_active = self
            .active
            .with_untracked(|active| active.as_deref() == Some(key));
        if was_active {
            let fallback = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(fallback);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_key_read_from_query() {
        assert_eq!(active_from_query("?active=a003_milk_reception"), Some("a003_milk_reception".to_string()));
        assert_eq!(active_from_query("active=a004_sale&x=1"), Some("a004_sale".to_string()));
        assert_eq!(active_from_query(""), None);
    }

    #[test]
    fn query_names_active_tab() {
        assert_eq!(query_for("a007_feed"), "?active=a007_feed");
    }
}
