use crate::shared::crud;
use crate::shared::http::ApiError;
use contracts::dashboards::d400_analytics::AnalyticsInput;
use contracts::domain::a001_supplier::Supplier;
use contracts::domain::a002_customer::Customer;
use contracts::domain::a003_milk_reception::MilkReception;
use contracts::domain::a004_sale::Sale;
use contracts::domain::a005_payment::Payment;
use contracts::domain::a008_hr::Attendance;

/// Everything the dashboard aggregates, plus the names for its rankings
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardData {
    pub input: AnalyticsInput,
    pub suppliers: Vec<Supplier>,
    pub customers: Vec<Customer>,
}

/// Fetch all lists in parallel; the first failing request fails the load
pub async fn load_dashboard() -> Result<DashboardData, ApiError> {
    let (receptions, sales, payments, attendance, suppliers, customers) = futures::try_join!(
        crud::fetch_list::<MilkReception>(),
        crud::fetch_list::<Sale>(),
        crud::fetch_list::<Payment>(),
        crud::fetch_list::<Attendance>(),
        crud::fetch_list::<Supplier>(),
        crud::fetch_list::<Customer>(),
    )?;

    Ok(DashboardData {
        input: AnalyticsInput {
            receptions,
            sales,
            payments,
            attendance,
        },
        suppliers,
        customers,
    })
}
