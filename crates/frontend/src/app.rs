use crate::layout::global_context::AppGlobalContext;
use crate::layout::MainLayout;
use crate::shared::toast::ToastService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Tabs and toasts are shared by every page
    provide_context(AppGlobalContext::new());
    provide_context(ToastService::new());

    view! {
        <MainLayout />
    }
}
