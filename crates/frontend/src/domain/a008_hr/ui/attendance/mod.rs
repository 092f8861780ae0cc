mod details;

pub use details::AttendanceDetails;

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::table::format_percent;
use crate::shared::components::ui::{Badge, Input};
use crate::shared::crud;
use crate::shared::date_utils::{format_date, today_iso};
use crate::shared::details::DialogState;
use crate::shared::icons::icon;
use crate::shared::list_utils::{display_ref, names_by_id};
use crate::shared::loader::{delete_with_confirm, spawn_load};
use crate::shared::toast::use_toast;
use contracts::dashboards::d400_analytics::attendance_rate;
use contracts::domain::a008_hr::{Attendance, Employee};
use contracts::enums::{AttendanceStatus, CodedEnum};
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
pub struct AttendanceRow {
    pub attendance: Attendance,
    pub employee: String,
}

fn build_rows(mut records: Vec<Attendance>, employees: &[Employee]) -> Vec<AttendanceRow> {
    let names = names_by_id(employees, |e| e.id, |e| e.full_name.clone());
    records.sort_by(|a, b| b.date.cmp(&a.date).then(a.employee_id.cmp(&b.employee_id)));
    records
        .into_iter()
        .map(|attendance| AttendanceRow {
            employee: display_ref(&names, attendance.employee_id),
            attendance,
        })
        .collect()
}

fn status_variant(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => "success",
        AttendanceStatus::Late => "warning",
        AttendanceStatus::Absent => "error",
        AttendanceStatus::Leave => "neutral",
    }
}

#[component]
pub fn AttendanceList() -> impl IntoView {
    let toast = use_toast();
    let records = RwSignal::new(Vec::<Attendance>::new());
    let employees = RwSignal::new(Vec::<Employee>::new());
    let loading = RwSignal::new(false);
    // Empty date shows every day
    let date = RwSignal::new(today_iso());
    let dialog = RwSignal::new(DialogState::Closed);

    let fetch = move || {
        let day = date.get_untracked();
        spawn_load(
            loading,
            toast,
            async move {
                let params = [("date", day)];
                futures::try_join!(
                    crud::fetch_list_query::<Attendance>(&params),
                    crud::fetch_list::<Employee>(),
                )
            },
            move |(a, e)| {
                records.set(a);
                employees.set(e);
            },
            move || {
                records.set(Vec::new());
                employees.set(Vec::new());
            },
        );
    };

    let handle_delete = move |id: i64| delete_with_confirm::<Attendance>(id, toast, fetch);

    fetch();

    let rows = Memo::new(move |_| employees.with(|e| build_rows(records.get(), e)));
    let rate = Memo::new(move |_| records.with(|r| attendance_rate(r)));
    let absent = Memo::new(move |_| {
        records.with(|r| r.iter().filter(|a| a.status == AttendanceStatus::Absent).count())
    });

    let set_date = Callback::new(move |value: String| {
        date.set(value);
        fetch();
    });

    view! {
        <div class="page">
            <PageHeader title="Attendance" subtitle="Daily presence of the staff">
                <Input input_type="date" value=date on_input=set_date />
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| set_date.run(String::new())>
                    "All dates"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| dialog.set(DialogState::New)>
                    {icon("plus")}
                    " New"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch() disabled=loading>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard label="Records" icon_name="attendance" value=Signal::derive(move || records.with(|r| r.len()).to_string()) />
                <StatCard
                    label="Attendance rate"
                    icon_name="trending-up"
                    value=Signal::derive(move || format_percent(rate.get()))
                    tone=Signal::derive(move || if rate.get() >= 90.0 { StatTone::Good } else { StatTone::Warning })
                />
                <StatCard label="Absent" icon_name="alert" value=Signal::derive(move || absent.get().to_string()) />
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=100.0>"Date"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=200.0>"Employee"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                        <TableHeaderCell min_width=90.0>"Check-in"</TableHeaderCell>
                        <TableHeaderCell min_width=90.0>"Check-out"</TableHeaderCell>
                        <TableHeaderCell min_width=160.0>"Notes"</TableHeaderCell>
                        <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || rows.get()
                        key=|row| (row.attendance.id, row.employee.clone(), row.attendance.status.code())
                        children=move |row| {
                            let a = row.attendance;
                            let id = a.id.unwrap_or_default();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a href="#" class="table__link" on:click=move |e| {
                                                e.prevent_default();
                                                dialog.set(DialogState::Edit(id));
                                            }>
                                                {format_date(&a.date)}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{row.employee}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Badge variant=status_variant(a.status)>{a.status.display_name()}</Badge>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{a.check_in.unwrap_or_default()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{a.check_out.unwrap_or_default()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{a.notes.unwrap_or_default()}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| handle_delete(id)
                                        >
                                            {icon("delete")}
                                        </Button>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>

            <Show when=move || dialog.get().is_open()>
                {move || view! {
                    <AttendanceDetails
                        state=dialog.get()
                        date=date.get_untracked()
                        employees=employees
                        on_saved=Callback::new(move |_| {
                            dialog.set(DialogState::Closed);
                            fetch();
                        })
                        on_close=Callback::new(move |_| dialog.set(DialogState::Closed))
                    />
                }}
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_newest_day_first() {
        let employees = vec![Employee { id: Some(1), full_name: "Ann".into(), ..Default::default() }];
        let records = vec![
            Attendance { id: Some(1), employee_id: Some(1), date: "2024-07-01".into(), ..Default::default() },
            Attendance { id: Some(2), employee_id: Some(2), date: "2024-07-02".into(), ..Default::default() },
        ];
        let rows = build_rows(records, &employees);
        assert_eq!(rows[0].attendance.date, "2024-07-02");
        assert_eq!(rows[0].employee, "#2");
        assert_eq!(rows[1].employee, "Ann");
    }

    #[test]
    fn absent_is_highlighted() {
        assert_eq!(status_variant(AttendanceStatus::Absent), "error");
        assert_eq!(status_variant(AttendanceStatus::Late), "warning");
    }
}
