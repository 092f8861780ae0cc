use super::tab::Tab as TabComponent;
use crate::layout::global_context::use_app_context;
use leptos::prelude::*;

/// Headers of the open tabs
#[component]
pub fn TabBar() -> impl IntoView {
    let tabs_store = use_app_context();

    view! {
        <div class="tabs-bar">
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab| view! { <TabComponent tab=tab /> }
            />
        </div>
    }
}
