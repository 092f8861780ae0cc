//! Grouping, ranking and ratios behind the analytics dashboard
//!
//! All functions are pure and order-insensitive: groups live in ordered maps
//! and every float sum adds its terms in sorted order, so the same records
//! in any order produce bit-identical summaries.

use super::dto::{
    AnalyticsInput, AnalyticsOptions, AnalyticsSummary, CategoryCount, DailyTotal, EntityTotal,
    RankBy, VolumeTotals,
};
use crate::domain::a003_milk_reception::MilkReception;
use crate::domain::a004_sale::Sale;
use crate::domain::a005_payment::Payment;
use crate::domain::a008_hr::Attendance;
use crate::enums::{AttendanceStatus, CodedEnum, PaymentDirection, PaymentMethod};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Truncate an ISO date or timestamp to its `YYYY-MM-DD` day
pub fn day_key(date: &str) -> String {
    date.trim()
        .split(['T', ' '])
        .next()
        .unwrap_or_default()
        .to_string()
}

/// `numerator / denominator`, or 0 when the result would not be finite
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        let value = numerator / denominator;
        if value.is_finite() {
            return value;
        }
    }
    0.0
}

/// Sum that does not depend on the order of the terms
fn stable_sum(mut values: Vec<f64>) -> f64 {
    values.sort_by(f64::total_cmp);
    // `Sum` starts from -0.0, which would leak into serialized totals
    values.into_iter().fold(0.0, |acc, v| acc + v)
}

/// Accumulator of one group
#[derive(Default)]
struct Bucket {
    quantities: Vec<f64>,
    amounts: Vec<f64>,
}

impl Bucket {
    fn push(&mut self, quantity: f64, amount: f64) {
        self.quantities.push(quantity);
        self.amounts.push(amount);
    }

    fn count(&self) -> usize {
        self.quantities.len()
    }

    fn into_sums(self) -> (f64, f64, usize) {
        let count = self.count();
        (stable_sum(self.quantities), stable_sum(self.amounts), count)
    }
}

fn group_by_day<'a, T: 'a>(
    records: impl IntoIterator<Item = &'a T>,
    fields: impl Fn(&T) -> (&str, f64, f64),
) -> Vec<DailyTotal> {
    let mut groups: BTreeMap<String, Bucket> = BTreeMap::new();
    for record in records {
        let (date, quantity, amount) = fields(record);
        groups.entry(day_key(date)).or_default().push(quantity, amount);
    }
    groups
        .into_iter()
        .map(|(day, bucket)| {
            let (quantity, amount, count) = bucket.into_sums();
            DailyTotal {
                day,
                quantity,
                amount,
                count,
            }
        })
        .collect()
}

fn group_by_entity<'a, T: 'a>(
    records: impl IntoIterator<Item = &'a T>,
    fields: impl Fn(&T) -> (Option<i64>, f64, f64),
) -> Vec<EntityTotal> {
    let mut groups: BTreeMap<Option<i64>, Bucket> = BTreeMap::new();
    for record in records {
        let (entity_id, quantity, amount) = fields(record);
        groups.entry(entity_id).or_default().push(quantity, amount);
    }
    groups
        .into_iter()
        .map(|(entity_id, bucket)| {
            let (quantity, amount, count) = bucket.into_sums();
            EntityTotal {
                entity_id,
                quantity,
                amount,
                count,
            }
        })
        .collect()
}

// ============================================================================
// By-day series
// ============================================================================

/// Received liters and purchase amount per day, ascending by day
pub fn daily_receptions(receptions: &[MilkReception]) -> Vec<DailyTotal> {
    group_by_day(receptions, |r| {
        (r.date.as_str(), r.quantity_liters, r.total_amount)
    })
}

/// Sold liters and revenue per day, ascending by day
pub fn daily_sales(sales: &[Sale]) -> Vec<DailyTotal> {
    group_by_day(sales, |s| (s.date.as_str(), s.quantity_liters, s.total_amount))
}

// ============================================================================
// By-entity totals and rankings
// ============================================================================

pub fn supplier_totals(receptions: &[MilkReception]) -> Vec<EntityTotal> {
    group_by_entity(receptions, |r| {
        (r.supplier_id, r.quantity_liters, r.total_amount)
    })
}

pub fn customer_totals(sales: &[Sale]) -> Vec<EntityTotal> {
    group_by_entity(sales, |s| (s.customer_id, s.quantity_liters, s.total_amount))
}

fn rank_value(total: &EntityTotal, by: RankBy) -> f64 {
    match by {
        RankBy::Quantity => total.quantity,
        RankBy::Amount => total.amount,
        RankBy::Count => total.count as f64,
    }
}

/// The `n` largest groups by `by`, descending; ties keep ascending entity id
pub fn top_n(mut totals: Vec<EntityTotal>, by: RankBy, n: usize) -> Vec<EntityTotal> {
    totals.sort_by(|a, b| {
        rank_value(b, by)
            .total_cmp(&rank_value(a, by))
            .then_with(|| a.entity_id.cmp(&b.entity_id))
    });
    totals.truncate(n);
    totals
}

/// The `n` busiest days by quantity, descending; ties keep the earlier day first
pub fn top_days(mut days: Vec<DailyTotal>, n: usize) -> Vec<DailyTotal> {
    days.sort_by(|a, b| match b.quantity.total_cmp(&a.quantity) {
        Ordering::Equal => a.day.cmp(&b.day),
        other => other,
    });
    days.truncate(n);
    days
}

// ============================================================================
// By-category counts
// ============================================================================

fn count_by_category<E: CodedEnum, T>(
    records: &[T],
    fields: impl Fn(&T) -> (E, f64),
) -> Vec<CategoryCount> {
    E::all()
        .into_iter()
        .filter_map(|category| {
            let amounts: Vec<f64> = records
                .iter()
                .map(&fields)
                .filter(|(c, _)| *c == category)
                .map(|(_, amount)| amount)
                .collect();
            if amounts.is_empty() {
                return None;
            }
            Some(CategoryCount {
                category: category.code().to_string(),
                label: category.display_name().to_string(),
                count: amounts.len(),
                amount: stable_sum(amounts),
            })
        })
        .collect()
}

/// Payment count and amount per method, in method declaration order
pub fn payments_by_method(payments: &[Payment]) -> Vec<CategoryCount> {
    count_by_category::<PaymentMethod, _>(payments, |p| (p.method, p.amount))
}

/// Attendance records per status, in status declaration order
pub fn attendance_by_status(attendance: &[Attendance]) -> Vec<CategoryCount> {
    count_by_category::<AttendanceStatus, _>(attendance, |a| (a.status, 0.0))
}

// ============================================================================
// Ratios
// ============================================================================

pub fn average_price_per_liter(amount: f64, quantity: f64) -> f64 {
    safe_ratio(amount, quantity)
}

fn volume_totals<T>(items: &[T], volume: impl Fn(&T) -> (f64, f64)) -> VolumeTotals {
    let quantity = stable_sum(items.iter().map(|i| volume(i).0).collect());
    let amount = stable_sum(items.iter().map(|i| volume(i).1).collect());
    VolumeTotals {
        quantity,
        amount,
        count: items.len(),
        average_price: average_price_per_liter(amount, quantity),
    }
}

/// Liters received, amount owed for them and the average purchase price
pub fn reception_totals(receptions: &[MilkReception]) -> VolumeTotals {
    volume_totals(receptions, |r| (r.quantity_liters, r.total_amount))
}

/// Liters sold, revenue and the average sale price
pub fn sale_totals(sales: &[Sale]) -> VolumeTotals {
    volume_totals(sales, |s| (s.quantity_liters, s.total_amount))
}

/// Percentage of attendance records that count as attended
pub fn attendance_rate(attendance: &[Attendance]) -> f64 {
    let attended = attendance.iter().filter(|a| a.status.is_attended()).count();
    safe_ratio(attended as f64 * 100.0, attendance.len() as f64)
}

// ============================================================================
// Summary
// ============================================================================

/// Full dashboard summary of `input` restricted to `options.range`
pub fn summarize(input: &AnalyticsInput, options: &AnalyticsOptions) -> AnalyticsSummary {
    let input = input.within(&options.range);

    let received = reception_totals(&input.receptions);
    let sold = sale_totals(&input.sales);

    let payments_in = |direction: PaymentDirection| {
        stable_sum(
            input
                .payments
                .iter()
                .filter(|p| p.direction == direction)
                .map(|p| p.amount)
                .collect(),
        )
    };
    let total_incoming = payments_in(PaymentDirection::Incoming);
    let total_outgoing = payments_in(PaymentDirection::Outgoing);

    let daily_receptions = daily_receptions(&input.receptions);

    AnalyticsSummary {
        range: options.range.clone(),

        total_received_liters: received.quantity,
        total_reception_amount: received.amount,
        average_purchase_price: received.average_price,
        reception_count: received.count,

        total_sold_liters: sold.quantity,
        total_sales_amount: sold.amount,
        average_sale_price: sold.average_price,
        sale_count: sold.count,

        total_incoming,
        total_outgoing,
        net_cash_flow: total_incoming - total_outgoing,

        top_reception_days: top_days(daily_receptions.clone(), options.top_days),
        daily_receptions,
        daily_sales: daily_sales(&input.sales),
        top_suppliers: top_n(
            supplier_totals(&input.receptions),
            RankBy::Quantity,
            options.top_suppliers,
        ),
        top_customers: top_n(
            customer_totals(&input.sales),
            RankBy::Amount,
            options.top_customers,
        ),

        payments_by_method: payments_by_method(&input.payments),
        attendance_by_status: attendance_by_status(&input.attendance),
        attendance_rate: attendance_rate(&input.attendance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_analytics::DateRange;

    fn reception(supplier: i64, date: &str, liters: f64, price: f64) -> MilkReception {
        MilkReception {
            supplier_id: Some(supplier),
            date: date.to_string(),
            quantity_liters: liters,
            price_per_liter: price,
            total_amount: liters * price,
            ..Default::default()
        }
    }

    fn sale(customer: i64, date: &str, liters: f64, price: f64) -> Sale {
        Sale {
            customer_id: Some(customer),
            date: date.to_string(),
            quantity_liters: liters,
            unit_price: price,
            total_amount: liters * price,
            ..Default::default()
        }
    }

    fn payment(method: PaymentMethod, direction: PaymentDirection, amount: f64) -> Payment {
        Payment {
            date: "2024-05-01".into(),
            amount,
            method,
            direction,
            ..Default::default()
        }
    }

    fn attendance(status: AttendanceStatus) -> Attendance {
        Attendance {
            employee_id: Some(1),
            date: "2024-05-01".into(),
            status,
            ..Default::default()
        }
    }

    fn sample_input() -> AnalyticsInput {
        AnalyticsInput {
            receptions: vec![
                reception(1, "2024-05-01T06:10:00Z", 100.0, 0.45),
                reception(2, "2024-05-01T18:00:00Z", 40.5, 0.50),
                reception(1, "2024-05-02", 80.0, 0.45),
                reception(3, "2024-05-03 07:00:00", 0.1, 0.3),
                reception(4, "2024-05-03", 60.0, 0.47),
                reception(5, "2024-05-04", 12.25, 0.52),
                reception(6, "2024-05-04", 33.0, 0.44),
            ],
            sales: vec![
                sale(10, "2024-05-01", 50.0, 0.9),
                sale(11, "2024-05-02", 20.0, 1.1),
                sale(10, "2024-05-02", 15.0, 0.9),
            ],
            payments: vec![
                payment(PaymentMethod::Cash, PaymentDirection::Incoming, 45.0),
                payment(PaymentMethod::MobileMoney, PaymentDirection::Outgoing, 30.0),
                payment(PaymentMethod::Cash, PaymentDirection::Outgoing, 12.5),
            ],
            attendance: vec![
                attendance(AttendanceStatus::Present),
                attendance(AttendanceStatus::Late),
                attendance(AttendanceStatus::Absent),
                attendance(AttendanceStatus::Present),
            ],
        }
    }

    #[test]
    fn empty_input_yields_zeroes_not_nan() {
        let s = summarize(&AnalyticsInput::default(), &AnalyticsOptions::default());
        assert_eq!(s.total_received_liters, 0.0);
        assert_eq!(s.total_sales_amount, 0.0);
        assert_eq!(s.average_purchase_price, 0.0);
        assert_eq!(s.average_sale_price, 0.0);
        assert_eq!(s.attendance_rate, 0.0);
        assert_eq!(s.net_cash_flow, 0.0);
        assert!(s.daily_receptions.is_empty());
        assert!(s.top_suppliers.is_empty());
        assert!(s.payments_by_method.is_empty());
    }

    #[test]
    fn empty_totals_are_positive_zero() {
        let s = summarize(&AnalyticsInput::default(), &AnalyticsOptions::default());
        assert!(s.total_received_liters.is_sign_positive());
        assert!(s.total_reception_amount.is_sign_positive());
        assert!(s.total_sold_liters.is_sign_positive());
        assert!(s.total_incoming.is_sign_positive());
        assert!(s.net_cash_flow.is_sign_positive());

        let json = serde_json::to_string(&s).unwrap();
        assert!(!json.contains("-0.0"), "{}", json);
    }

    #[test]
    fn volume_totals_of_receptions_and_sales() {
        let receptions = vec![
            reception(1, "2024-05-01", 100.0, 0.5),
            reception(2, "2024-05-01", 300.0, 0.7),
        ];
        let t = reception_totals(&receptions);
        assert_eq!(t.count, 2);
        assert!((t.quantity - 400.0).abs() < 1e-9);
        assert!((t.amount - 260.0).abs() < 1e-9);
        assert!((t.average_price - 0.65).abs() < 1e-9);

        let none = sale_totals(&[]);
        assert_eq!(none, VolumeTotals::default());
    }

    #[test]
    fn ratios_guard_division_by_zero() {
        assert_eq!(safe_ratio(10.0, 0.0), 0.0);
        assert_eq!(safe_ratio(10.0, -2.0), 0.0);
        assert_eq!(safe_ratio(f64::INFINITY, 1.0), 0.0);
        assert_eq!(average_price_per_liter(50.0, 100.0), 0.5);
        assert_eq!(average_price_per_liter(50.0, 0.0), 0.0);
    }

    #[test]
    fn day_key_truncates_timestamps() {
        assert_eq!(day_key("2024-05-01T06:10:00Z"), "2024-05-01");
        assert_eq!(day_key("2024-05-01 06:10:00"), "2024-05-01");
        assert_eq!(day_key(" 2024-05-01 "), "2024-05-01");
        assert_eq!(day_key(""), "");
    }

    #[test]
    fn daily_grouping_is_lossless_and_sorted() {
        let input = sample_input();
        let days = daily_receptions(&input.receptions);
        let names: Vec<&str> = days.iter().map(|d| d.day.as_str()).collect();
        assert_eq!(names, ["2024-05-01", "2024-05-02", "2024-05-03", "2024-05-04"]);

        let grouped: f64 = days.iter().map(|d| d.quantity).sum();
        let ungrouped: f64 = input.receptions.iter().map(|r| r.quantity_liters).sum();
        assert!((grouped - ungrouped).abs() < 1e-9);
        assert_eq!(days.iter().map(|d| d.count).sum::<usize>(), input.receptions.len());
        assert_eq!(days[0].count, 2);
    }

    #[test]
    fn entity_grouping_is_lossless() {
        let mut input = sample_input();
        input.receptions.push(MilkReception {
            supplier_id: None,
            date: "2024-05-05".into(),
            quantity_liters: 7.0,
            ..Default::default()
        });
        let totals = supplier_totals(&input.receptions);
        let grouped: f64 = totals.iter().map(|t| t.quantity).sum();
        let ungrouped: f64 = input.receptions.iter().map(|r| r.quantity_liters).sum();
        assert!((grouped - ungrouped).abs() < 1e-9);
        assert_eq!(totals[0].entity_id, None);
    }

    #[test]
    fn top_n_sorts_descending_and_truncates() {
        let input = sample_input();
        let top = top_n(supplier_totals(&input.receptions), RankBy::Quantity, 5);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].entity_id, Some(1));
        assert_eq!(top[0].quantity, 180.0);
        assert!(top.windows(2).all(|w| w[0].quantity >= w[1].quantity));
        // supplier 3 delivered the least and falls off the list
        assert!(top.iter().all(|t| t.entity_id != Some(3)));

        let few = top_n(customer_totals(&input.sales), RankBy::Amount, 5);
        assert_eq!(few.len(), 2);
        assert_eq!(few[0].entity_id, Some(10));
    }

    #[test]
    fn ranking_ties_use_entity_id() {
        let totals = vec![
            EntityTotal { entity_id: Some(9), quantity: 1.0, amount: 5.0, count: 1 },
            EntityTotal { entity_id: Some(2), quantity: 1.0, amount: 5.0, count: 1 },
            EntityTotal { entity_id: Some(4), quantity: 3.0, amount: 1.0, count: 2 },
        ];
        let by_amount = top_n(totals.clone(), RankBy::Amount, 10);
        let ids: Vec<Option<i64>> = by_amount.iter().map(|t| t.entity_id).collect();
        assert_eq!(ids, [Some(2), Some(9), Some(4)]);
        let by_count = top_n(totals, RankBy::Count, 1);
        assert_eq!(by_count[0].entity_id, Some(4));
    }

    #[test]
    fn top_days_prefers_earlier_day_on_ties() {
        let days = vec![
            DailyTotal { day: "2024-05-02".into(), quantity: 10.0, amount: 0.0, count: 1 },
            DailyTotal { day: "2024-05-01".into(), quantity: 10.0, amount: 0.0, count: 1 },
            DailyTotal { day: "2024-05-03".into(), quantity: 20.0, amount: 0.0, count: 1 },
        ];
        let top = top_days(days, 2);
        assert_eq!(top[0].day, "2024-05-03");
        assert_eq!(top[1].day, "2024-05-01");
    }

    #[test]
    fn category_counts() {
        let input = sample_input();
        let methods = payments_by_method(&input.payments);
        assert_eq!(methods.len(), 2);
        assert_eq!(methods[0].category, "cash");
        assert_eq!(methods[0].count, 2);
        assert_eq!(methods[0].amount, 57.5);
        assert_eq!(methods[1].category, "mobile_money");

        let statuses = attendance_by_status(&input.attendance);
        let codes: Vec<&str> = statuses.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(codes, ["present", "absent", "late"]);
        assert_eq!(statuses[0].count, 2);
    }

    #[test]
    fn summary_totals_and_ratios() {
        let s = summarize(&sample_input(), &AnalyticsOptions::default());
        assert_eq!(s.reception_count, 7);
        assert!((s.total_received_liters - 325.85).abs() < 1e-9);
        assert!((s.average_purchase_price - s.total_reception_amount / s.total_received_liters).abs() < 1e-12);
        assert!((s.total_sold_liters - 85.0).abs() < 1e-9);
        assert!((s.total_sales_amount - 80.5).abs() < 1e-9);
        assert_eq!(s.total_incoming, 45.0);
        assert_eq!(s.total_outgoing, 42.5);
        assert_eq!(s.net_cash_flow, 2.5);
        assert_eq!(s.attendance_rate, 75.0);
        assert_eq!(s.top_suppliers.len(), 5);
        assert_eq!(s.top_reception_days.len(), 4);
        assert_eq!(s.top_reception_days[0].day, "2024-05-01");
    }

    #[test]
    fn summary_respects_range() {
        let options = AnalyticsOptions {
            range: DateRange {
                from: Some("2024-05-02".into()),
                to: Some("2024-05-02".into()),
            },
            ..Default::default()
        };
        let s = summarize(&sample_input(), &options);
        assert_eq!(s.reception_count, 1);
        assert_eq!(s.total_received_liters, 80.0);
        assert_eq!(s.sale_count, 2);
        // payments and attendance are all dated 2024-05-01
        assert_eq!(s.total_incoming, 0.0);
        assert_eq!(s.attendance_rate, 0.0);
        assert_eq!(s.range, options.range);
    }

    #[test]
    fn summary_is_deterministic_and_order_insensitive() {
        let input = sample_input();
        let options = AnalyticsOptions::default();
        let first = summarize(&input, &options);
        assert_eq!(first, summarize(&input, &options));

        let mut shuffled = input.clone();
        shuffled.receptions.reverse();
        shuffled.receptions.rotate_left(3);
        shuffled.sales.reverse();
        shuffled.payments.rotate_left(1);
        shuffled.attendance.reverse();
        assert_eq!(first, summarize(&shuffled, &options));
    }
}
