pub mod center;
pub mod global_context;
pub mod left;
pub mod tabs;

use crate::shared::icons::icon;
use crate::shared::toast::Toaster;
use center::TabBar;
use global_context::{use_app_context, Tab as TabData};
use left::Sidebar;
use leptos::prelude::*;
use tabs::TabPage;

/// Application shell
///
/// ```text
/// +----------------------------------+
/// |            top bar               |
/// +----------+-----------------------+
/// | Sidebar  |  tab bar              |
/// |          |  active tab page      |
/// +----------+-----------------------+
/// ```
#[component]
pub fn MainLayout() -> impl IntoView {
    let tabs_store = use_app_context();
    tabs_store.init_router_integration();

    view! {
        <div class="app-layout">
            <header class="top-header">
                <button class="button button--icon" title="Toggle menu" on:click=move |_| tabs_store.toggle_left()>
                    {icon("menu")}
                </button>
                <span class="top-header__title">"DairyOps"</span>
            </header>
            <div class="app-body">
                <aside data-zone="left" class="left">
                    <Sidebar />
                </aside>
                <main data-zone="center" class="app-main">
                    <TabBar />
                    <div class="tab-content">
                        <For
                            each=move || tabs_store.opened.get()
                            key=|tab| tab.key.clone()
                            children=move |tab: TabData| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        />
                    </div>
                </main>
            </div>
            <Toaster />
        </div>
    }
}
