use crate::domain::a003_milk_reception::MilkReception;
use crate::domain::a004_sale::Sale;
use crate::domain::a005_payment::Payment;
use crate::domain::a008_hr::Attendance;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Inclusive day range, either bound optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day in format "YYYY-MM-DD"
    pub from: Option<String>,
    /// Last day in format "YYYY-MM-DD"
    pub to: Option<String>,
}

impl DateRange {
    /// No filtering
    pub fn all() -> Self {
        Self::default()
    }

    /// The `days` days ending with `today` (inclusive)
    pub fn last_days(today: NaiveDate, days: u32) -> Self {
        let span = i64::from(days.max(1)) - 1;
        let from = today - Duration::days(span);
        Self {
            from: Some(from.format("%Y-%m-%d").to_string()),
            to: Some(today.format("%Y-%m-%d").to_string()),
        }
    }

    /// Calendar month containing `day`
    pub fn month_of(day: NaiveDate) -> Self {
        let first = NaiveDate::from_ymd_opt(day.year(), day.month(), 1).unwrap_or(day);
        let next_month = if day.month() == 12 {
            NaiveDate::from_ymd_opt(day.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(day.year(), day.month() + 1, 1)
        };
        let last = next_month.map(|d| d - Duration::days(1)).unwrap_or(day);
        Self {
            from: Some(first.format("%Y-%m-%d").to_string()),
            to: Some(last.format("%Y-%m-%d").to_string()),
        }
    }

    /// Whether the day of `date` falls inside the range
    ///
    /// ISO days compare correctly as strings.
    pub fn contains(&self, date: &str) -> bool {
        let day = super::aggregation::day_key(date);
        let after_from = self
            .from
            .as_deref()
            .filter(|f| !f.is_empty())
            .map_or(true, |f| day.as_str() >= f);
        let before_to = self
            .to
            .as_deref()
            .filter(|t| !t.is_empty())
            .map_or(true, |t| day.as_str() <= t);
        after_from && before_to
    }
}

/// Totals of one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTotal {
    /// Day in format "YYYY-MM-DD"
    pub day: String,
    pub quantity: f64,
    pub amount: f64,
    pub count: usize,
}

/// Totals of one supplier or customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityTotal {
    /// Foreign key, `None` collects records without one
    pub entity_id: Option<i64>,
    pub quantity: f64,
    pub amount: f64,
    pub count: usize,
}

/// Field a ranking is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankBy {
    Quantity,
    Amount,
    Count,
}

/// Liters and money of a list of receptions or sales
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeTotals {
    pub quantity: f64,
    pub amount: f64,
    pub count: usize,
    /// amount / quantity, 0 without volume
    pub average_price: f64,
}

/// Records of one category (payment method, attendance status)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// Category code
    pub category: String,
    /// Display name of the category
    pub label: String,
    pub count: usize,
    /// Sum of amounts where the category carries money, else 0
    pub amount: f64,
}

/// Lists the dashboard fetched from the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsInput {
    pub receptions: Vec<MilkReception>,
    pub sales: Vec<Sale>,
    pub payments: Vec<Payment>,
    pub attendance: Vec<Attendance>,
}

impl AnalyticsInput {
    /// Copy of the input restricted to records dated inside `range`
    pub fn within(&self, range: &DateRange) -> Self {
        Self {
            receptions: self
                .receptions
                .iter()
                .filter(|r| range.contains(&r.date))
                .cloned()
                .collect(),
            sales: self
                .sales
                .iter()
                .filter(|s| range.contains(&s.date))
                .cloned()
                .collect(),
            payments: self
                .payments
                .iter()
                .filter(|p| range.contains(&p.date))
                .cloned()
                .collect(),
            attendance: self
                .attendance
                .iter()
                .filter(|a| range.contains(&a.date))
                .cloned()
                .collect(),
        }
    }
}

/// Ranking sizes and period of a summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsOptions {
    pub top_suppliers: usize,
    pub top_customers: usize,
    pub top_days: usize,
    pub range: DateRange,
}

impl Default for AnalyticsOptions {
    fn default() -> Self {
        Self {
            top_suppliers: 5,
            top_customers: 5,
            top_days: 10,
            range: DateRange::all(),
        }
    }
}

/// Everything the analytics dashboard renders
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub range: DateRange,

    // Milk purchasing
    pub total_received_liters: f64,
    pub total_reception_amount: f64,
    pub average_purchase_price: f64,
    pub reception_count: usize,

    // Sales
    pub total_sold_liters: f64,
    pub total_sales_amount: f64,
    pub average_sale_price: f64,
    pub sale_count: usize,

    // Cash
    pub total_incoming: f64,
    pub total_outgoing: f64,
    pub net_cash_flow: f64,

    // Series and rankings
    pub daily_receptions: Vec<DailyTotal>,
    pub daily_sales: Vec<DailyTotal>,
    pub top_reception_days: Vec<DailyTotal>,
    pub top_suppliers: Vec<EntityTotal>,
    pub top_customers: Vec<EntityTotal>,

    // Breakdowns
    pub payments_by_method: Vec<CategoryCount>,
    pub attendance_by_status: Vec<CategoryCount>,
    /// Attended share of attendance records, in percent
    pub attendance_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let r = DateRange {
            from: Some("2024-03-01".into()),
            to: Some("2024-03-31".into()),
        };
        assert!(r.contains("2024-03-01"));
        assert!(r.contains("2024-03-31T23:59:59Z"));
        assert!(!r.contains("2024-02-29"));
        assert!(!r.contains("2024-04-01"));
        assert!(DateRange::all().contains("1999-01-01"));
    }

    #[test]
    fn range_constructors() {
        assert_eq!(
            DateRange::last_days(day(2024, 3, 10), 7),
            DateRange {
                from: Some("2024-03-04".into()),
                to: Some("2024-03-10".into()),
            }
        );
        assert_eq!(
            DateRange::month_of(day(2024, 2, 14)),
            DateRange {
                from: Some("2024-02-01".into()),
                to: Some("2024-02-29".into()),
            }
        );
        assert_eq!(
            DateRange::month_of(day(2023, 12, 5)).to,
            Some("2023-12-31".to_string())
        );
    }
}
