pub mod companies;
pub mod purchases;
pub mod types;

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::section_switcher::SectionSwitcher;
use companies::FeedCompanyList;
use leptos::prelude::*;
use purchases::FeedPurchaseList;
use types::FeedTypeList;

const SECTIONS: &[(&str, &str)] = &[
    ("purchases", "Purchases"),
    ("companies", "Companies"),
    ("types", "Feed types"),
];

/// Feed purchases charged to suppliers, with the company and feed type catalogs
#[component]
pub fn FeedPage() -> impl IntoView {
    let active = RwSignal::new("purchases");

    view! {
        <div class="page">
            <PageHeader title="Feed" subtitle="Feed bought for suppliers against their milk balance">
                <SectionSwitcher sections=SECTIONS active=active />
            </PageHeader>
            {move || match active.get() {
                "companies" => view! { <FeedCompanyList /> }.into_any(),
                "types" => view! { <FeedTypeList /> }.into_any(),
                _ => view! { <FeedPurchaseList /> }.into_any(),
            }}
        </div>
    }
}
