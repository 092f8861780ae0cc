use crate::dashboards::d400_analytics::api::{self, DashboardData};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::table::{format_liters, format_money, format_number_int, format_percent};
use crate::shared::date_utils::{format_date, today};
use crate::shared::icons::icon;
use crate::shared::list_utils::{display_ref, names_by_id};
use crate::shared::loader::spawn_load;
use crate::shared::toast::use_toast;
use chrono::NaiveDate;
use contracts::dashboards::d400_analytics::{
    summarize, AnalyticsOptions, AnalyticsSummary, CategoryCount, DailyTotal, DateRange,
    EntityTotal,
};
use leptos::prelude::*;
use std::collections::{BTreeMap, HashMap};
use thaw::*;

/// Reporting period picked in the header
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Period {
    Last7Days,
    #[default]
    Last30Days,
    ThisMonth,
    All,
}

impl Period {
    const ALL: [Period; 4] = [
        Period::Last7Days,
        Period::Last30Days,
        Period::ThisMonth,
        Period::All,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Period::Last7Days => "7 days",
            Period::Last30Days => "30 days",
            Period::ThisMonth => "This month",
            Period::All => "All time",
        }
    }

    pub fn range(self, today: NaiveDate) -> DateRange {
        match self {
            Period::Last7Days => DateRange::last_days(today, 7),
            Period::Last30Days => DateRange::last_days(today, 30),
            Period::ThisMonth => DateRange::month_of(today),
            Period::All => DateRange::all(),
        }
    }
}

/// Received and sold volume of one day
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DayRow {
    pub day: String,
    pub received: f64,
    pub purchase_amount: f64,
    pub sold: f64,
    pub sales_amount: f64,
}

/// Receptions and sales merged per day, newest first
pub fn day_rows(receptions: &[DailyTotal], sales: &[DailyTotal]) -> Vec<DayRow> {
    let mut days: BTreeMap<String, DayRow> = BTreeMap::new();
    for r in receptions {
        let row = days.entry(r.day.clone()).or_insert_with(|| DayRow {
            day: r.day.clone(),
            ..Default::default()
        });
        row.received += r.quantity;
        row.purchase_amount += r.amount;
    }
    for s in sales {
        let row = days.entry(s.day.clone()).or_insert_with(|| DayRow {
            day: s.day.clone(),
            ..Default::default()
        });
        row.sold += s.quantity;
        row.sales_amount += s.amount;
    }
    days.into_values().rev().collect()
}

/// Ranking entry with the display name of its supplier or customer
#[derive(Clone, Debug, PartialEq)]
pub struct RankedEntity {
    pub name: String,
    pub total: EntityTotal,
}

pub fn name_ranking(totals: &[EntityTotal], names: &HashMap<i64, String>) -> Vec<RankedEntity> {
    totals
        .iter()
        .map(|t| RankedEntity {
            name: match t.entity_id {
                Some(_) => display_ref(names, t.entity_id),
                None => "Unassigned".to_string(),
            },
            total: t.clone(),
        })
        .collect()
}

/// Busiest reception days, labelled with their date
pub fn day_ranking(days: &[DailyTotal]) -> Vec<RankedEntity> {
    days.iter()
        .map(|d| RankedEntity {
            name: format_date(&d.day),
            total: EntityTotal {
                entity_id: None,
                quantity: d.quantity,
                amount: d.amount,
                count: d.count,
            },
        })
        .collect()
}

#[component]
fn RankingTable(
    title: &'static str,
    rows: Signal<Vec<RankedEntity>>,
    #[prop(default = "Name")] name_header: &'static str,
) -> impl IntoView {
    view! {
        <div class="dashboard__panel">
            <h3 class="dashboard__panel-title">{title}</h3>
            <Show
                when=move || !rows.with(|r| r.is_empty())
                fallback=|| view! { <div class="dashboard__empty">"No data for the period"</div> }
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"#"</TableHeaderCell>
                            <TableHeaderCell>{name_header}</TableHeaderCell>
                            <TableHeaderCell>"Liters"</TableHeaderCell>
                            <TableHeaderCell>"Amount"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            rows.get()
                                .into_iter()
                                .enumerate()
                                .map(|(i, row)| view! {
                                    <TableRow>
                                        <TableCell>{i + 1}</TableCell>
                                        <TableCell><TableCellLayout>{row.name}</TableCellLayout></TableCell>
                                        <TableCell class="text-right">{format_liters(row.total.quantity)}</TableCell>
                                        <TableCell class="text-right">{format_money(row.total.amount)}</TableCell>
                                    </TableRow>
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
            </Show>
        </div>
    }
}

#[component]
fn BreakdownTable(
    title: &'static str,
    rows: Signal<Vec<CategoryCount>>,
    #[prop(optional)] with_amount: bool,
) -> impl IntoView {
    view! {
        <div class="dashboard__panel">
            <h3 class="dashboard__panel-title">{title}</h3>
            <Table>
                <TableBody>
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|c| view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{c.label}</TableCellLayout></TableCell>
                                    <TableCell class="text-right">{format_number_int(c.count as f64)}</TableCell>
                                    {with_amount.then(|| view! {
                                        <TableCell class="text-right">{format_money(c.amount)}</TableCell>
                                    })}
                                </TableRow>
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}

/// Milk intake, sales, cash and staff presence of the selected period
#[component]
pub fn AnalyticsDashboard() -> impl IntoView {
    let toast = use_toast();
    let data = RwSignal::new(DashboardData::default());
    let loading = RwSignal::new(false);
    let period = RwSignal::new(Period::default());

    let fetch = move || {
        spawn_load(
            loading,
            toast,
            api::load_dashboard(),
            move |loaded| data.set(loaded),
            move || data.set(DashboardData::default()),
        );
    };

    fetch();

    let summary = Memo::new(move |_| {
        let options = AnalyticsOptions {
            range: period.get().range(today()),
            ..Default::default()
        };
        data.with(|d| summarize(&d.input, &options))
    });

    let stat = move |f: fn(&AnalyticsSummary) -> String| Signal::derive(move || summary.with(f));

    let days = Signal::derive(move || {
        summary.with(|s| day_rows(&s.daily_receptions, &s.daily_sales))
    });
    let top_suppliers = Signal::derive(move || {
        let names = data.with(|d| names_by_id(&d.suppliers, |s| s.id, |s| s.name.clone()));
        summary.with(|s| name_ranking(&s.top_suppliers, &names))
    });
    let top_customers = Signal::derive(move || {
        let names = data.with(|d| names_by_id(&d.customers, |c| c.id, |c| c.name.clone()));
        summary.with(|s| name_ranking(&s.top_customers, &names))
    });
    let top_days = Signal::derive(move || summary.with(|s| day_ranking(&s.top_reception_days)));
    let by_method = Signal::derive(move || summary.with(|s| s.payments_by_method.clone()));
    let by_status = Signal::derive(move || summary.with(|s| s.attendance_by_status.clone()));

    view! {
        <div class="page dashboard">
            <PageHeader title="Analytics" subtitle="Milk intake, sales and cash flow">
                {Period::ALL
                    .into_iter()
                    .map(|p| view! {
                        <Button
                            size=ButtonSize::Small
                            appearance=move || {
                                if period.get() == p {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Subtle
                                }
                            }
                            on_click=move |_| period.set(p)
                        >
                            {p.label()}
                        </Button>
                    })
                    .collect_view()}
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch() disabled=loading>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Milk received"
                    icon_name="milk"
                    value=stat(|s| format_liters(s.total_received_liters))
                    subtitle=Signal::derive(move || summary.with(|s| format!("{} receptions", s.reception_count)))
                />
                <StatCard label="Purchase cost" icon_name="suppliers" value=stat(|s| format_money(s.total_reception_amount)) />
                <StatCard label="Avg. purchase price" icon_name="analytics" value=stat(|s| format_money(s.average_purchase_price)) />
                <StatCard
                    label="Milk sold"
                    icon_name="sales"
                    value=stat(|s| format_liters(s.total_sold_liters))
                    subtitle=Signal::derive(move || summary.with(|s| format!("{} sales", s.sale_count)))
                />
                <StatCard label="Revenue" icon_name="trending-up" value=stat(|s| format_money(s.total_sales_amount)) />
                <StatCard label="Avg. sale price" icon_name="analytics" value=stat(|s| format_money(s.average_sale_price)) />
                <StatCard label="Incoming" icon_name="payments" value=stat(|s| format_money(s.total_incoming)) />
                <StatCard label="Outgoing" icon_name="payments" value=stat(|s| format_money(s.total_outgoing)) />
                <StatCard
                    label="Net cash flow"
                    icon_name="trending-up"
                    value=stat(|s| format_money(s.net_cash_flow))
                    tone=Signal::derive(move || if summary.with(|s| s.net_cash_flow) < 0.0 { StatTone::Bad } else { StatTone::Good })
                />
                <StatCard label="Attendance rate" icon_name="attendance" value=stat(|s| format_percent(s.attendance_rate)) />
            </div>

            <div class="dashboard__grid">
                <RankingTable title="Top suppliers" rows=top_suppliers />
                <RankingTable title="Top customers" rows=top_customers />
                <RankingTable title="Top reception days" rows=top_days name_header="Day" />
                <BreakdownTable title="Payments by method" rows=by_method with_amount=true />
                <BreakdownTable title="Attendance by status" rows=by_status />
            </div>

            <div class="dashboard__panel">
                <h3 class="dashboard__panel-title">"By day"</h3>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Day"</TableHeaderCell>
                            <TableHeaderCell>"Received"</TableHeaderCell>
                            <TableHeaderCell>"Purchase cost"</TableHeaderCell>
                            <TableHeaderCell>"Sold"</TableHeaderCell>
                            <TableHeaderCell>"Revenue"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || days.get()
                            key=|row| (row.day.clone(), row.received.to_bits(), row.sold.to_bits())
                            children=move |row| view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{format_date(&row.day)}</TableCellLayout></TableCell>
                                    <TableCell class="text-right">{format_liters(row.received)}</TableCell>
                                    <TableCell class="text-right">{format_money(row.purchase_amount)}</TableCell>
                                    <TableCell class="text-right">{format_liters(row.sold)}</TableCell>
                                    <TableCell class="text-right">{format_money(row.sales_amount)}</TableCell>
                                </TableRow>
                            }
                        />
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(day: &str, quantity: f64, amount: f64) -> DailyTotal {
        DailyTotal {
            day: day.into(),
            quantity,
            amount,
            count: 1,
        }
    }

    #[test]
    fn days_merge_receptions_and_sales() {
        let rows = day_rows(
            &[total("2024-07-01", 100.0, 45.0), total("2024-07-02", 80.0, 36.0)],
            &[total("2024-07-02", 50.0, 40.0), total("2024-07-03", 20.0, 16.0)],
        );
        let days: Vec<&str> = rows.iter().map(|r| r.day.as_str()).collect();
        assert_eq!(days, vec!["2024-07-03", "2024-07-02", "2024-07-01"]);
        assert_eq!(rows[1].received, 80.0);
        assert_eq!(rows[1].sold, 50.0);
        assert_eq!(rows[0].received, 0.0);
    }

    #[test]
    fn ranking_names_resolved() {
        let names = HashMap::from([(1, "Green Farm".to_string())]);
        let totals = vec![
            EntityTotal { entity_id: Some(1), quantity: 10.0, amount: 5.0, count: 1 },
            EntityTotal { entity_id: Some(4), quantity: 5.0, amount: 2.0, count: 1 },
            EntityTotal { entity_id: None, quantity: 1.0, amount: 1.0, count: 1 },
        ];
        let ranked = name_ranking(&totals, &names);
        let labels: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(labels, vec!["Green Farm", "#4", "Unassigned"]);
    }

    #[test]
    fn top_days_keep_ranking_order() {
        let ranked = day_ranking(&[
            total("2024-07-02", 300.0, 120.0),
            total("2024-07-01", 100.0, 45.0),
        ]);
        let labels: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(labels, vec!["02.07.2024", "01.07.2024"]);
        assert_eq!(ranked[0].total.quantity, 300.0);
        assert_eq!(ranked[0].total.amount, 120.0);
        assert!(day_ranking(&[]).is_empty());
    }

    #[test]
    fn period_ranges() {
        let day = NaiveDate::from_ymd_opt(2024, 7, 15).unwrap();
        assert_eq!(Period::All.range(day), DateRange::all());
        assert_eq!(Period::Last7Days.range(day).from.as_deref(), Some("2024-07-09"));
        assert_eq!(Period::ThisMonth.range(day).to.as_deref(), Some("2024-07-31"));
    }
}
