pub mod equipment;
pub mod incidents;
pub mod maintenance;
pub mod vehicles;

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::section_switcher::SectionSwitcher;
use contracts::enums::AssetStatus;
use equipment::EquipmentList;
use incidents::IncidentList;
use leptos::prelude::*;
use maintenance::MaintenanceList;
use vehicles::VehicleList;

const SECTIONS: &[(&str, &str)] = &[
    ("equipment", "Equipment"),
    ("maintenance", "Maintenance"),
    ("incidents", "Incidents"),
    ("vehicles", "Vehicles"),
];

#[component]
pub fn OperationsPage() -> impl IntoView {
    let active = RwSignal::new("equipment");

    view! {
        <div class="page">
            <PageHeader title="Operations" subtitle="Plant equipment and the collection fleet">
                <SectionSwitcher sections=SECTIONS active=active />
            </PageHeader>
            {move || match active.get() {
                "maintenance" => view! { <MaintenanceList /> }.into_any(),
                "incidents" => view! { <IncidentList /> }.into_any(),
                "vehicles" => view! { <VehicleList /> }.into_any(),
                _ => view! { <EquipmentList /> }.into_any(),
            }}
        </div>
    }
}

/// Badge variant of an equipment or vehicle status
fn asset_variant(status: AssetStatus) -> &'static str {
    match status {
        AssetStatus::Active => "success",
        AssetStatus::UnderMaintenance => "warning",
        AssetStatus::Retired => "neutral",
    }
}
