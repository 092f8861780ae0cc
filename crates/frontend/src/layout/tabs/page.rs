use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;

/// Content of one open tab, hidden while another tab is active
///
/// Pages stay mounted while hidden so switching tabs keeps their state.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let key_for_check = tab_key.clone();
    let is_active = move || tabs_store.active.get().as_deref() == Some(key_for_check.as_str());

    let key_for_cleanup = tab_key.clone();
    on_cleanup(move || log::debug!("tab page '{}' dropped", key_for_cleanup));

    let content = render_tab_content(&tab_key);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}
