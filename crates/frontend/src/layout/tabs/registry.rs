//! Tab key to page component

use crate::dashboards::d400_analytics::ui::AnalyticsDashboard;
use crate::domain::a001_supplier::ui::list::SupplierList;
use crate::domain::a002_customer::ui::list::CustomerList;
use crate::domain::a003_milk_reception::ui::list::MilkReceptionList;
use crate::domain::a004_sale::ui::list::SaleList;
use crate::domain::a005_payment::ui::list::PaymentList;
use crate::domain::a006_inventory_item::ui::list::InventoryList;
use crate::domain::a007_feed::ui::FeedPage;
use crate::domain::a008_hr::ui::attendance::AttendanceList;
use crate::domain::a008_hr::ui::employees::EmployeeList;
use crate::domain::a009_legal::ui::LegalPage;
use crate::domain::a010_operations::ui::OperationsPage;
use leptos::prelude::*;

/// Render the page for a tab key; unknown keys get a placeholder
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "d400_analytics" => view! { <AnalyticsDashboard /> }.into_any(),
        "a001_supplier" => view! { <SupplierList /> }.into_any(),
        "a002_customer" => view! { <CustomerList /> }.into_any(),
        "a003_milk_reception" => view! { <MilkReceptionList /> }.into_any(),
        "a004_sale" => view! { <SaleList /> }.into_any(),
        "a005_payment" => view! { <PaymentList /> }.into_any(),
        "a006_inventory_item" => view! { <InventoryList /> }.into_any(),
        "a007_feed" => view! { <FeedPage /> }.into_any(),
        "a008_employee" => view! { <EmployeeList /> }.into_any(),
        "a008_attendance" => view! { <AttendanceList /> }.into_any(),
        "a009_legal" => view! { <LegalPage /> }.into_any(),
        "a010_operations" => view! { <OperationsPage /> }.into_any(),
        other => {
            log::warn!("no page registered for tab '{}'", other);
            let message = format!("Unknown page: {}", other);
            view! { <div class="placeholder">{message}</div> }.into_any()
        }
    }
}
