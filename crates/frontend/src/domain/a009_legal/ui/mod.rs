pub mod cases;
pub mod consultations;
pub mod documents;
pub mod legal_contracts;

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::section_switcher::SectionSwitcher;
use cases::LegalCaseList;
use consultations::ConsultationList;
use documents::LegalDocumentList;
use legal_contracts::LegalContractList;
use leptos::prelude::*;

const SECTIONS: &[(&str, &str)] = &[
    ("contracts", "Contracts"),
    ("cases", "Cases"),
    ("consultations", "Consultations"),
    ("documents", "Documents"),
];

#[component]
pub fn LegalPage() -> impl IntoView {
    let active = RwSignal::new("contracts");

    view! {
        <div class="page">
            <PageHeader title="Legal" subtitle="Agreements and court matters of the business">
                <SectionSwitcher sections=SECTIONS active=active />
            </PageHeader>
            {move || match active.get() {
                "cases" => view! { <LegalCaseList /> }.into_any(),
                "consultations" => view! { <ConsultationList /> }.into_any(),
                "documents" => view! { <LegalDocumentList /> }.into_any(),
                _ => view! { <LegalContractList /> }.into_any(),
            }}
        </div>
    }
}
