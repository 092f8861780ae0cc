mod details;

pub use details::EmployeeDetails;

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{format_money, TableCellMoney};
use crate::shared::components::ui::Badge;
use crate::shared::crud;
use crate::shared::date_utils::format_date;
use crate::shared::details::DialogState;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::loader::{delete_with_confirm, spawn_load};
use crate::shared::toast::use_toast;
use contracts::domain::a008_hr::Employee;
use leptos::prelude::*;
use thaw::*;

impl Searchable for Employee {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.full_name.clone(),
            self.position.clone(),
            self.department.clone(),
            self.phone.clone(),
        ]
    }
}

/// Monthly salaries of the active staff
pub fn monthly_payroll(employees: &[Employee]) -> f64 {
    employees
        .iter()
        .filter(|e| e.is_active)
        .map(|e| e.salary)
        .sum()
}

#[component]
pub fn EmployeeList() -> impl IntoView {
    let toast = use_toast();
    let employees = RwSignal::new(Vec::<Employee>::new());
    let loading = RwSignal::new(false);
    let (filter, set_filter) = signal(String::new());
    let dialog = RwSignal::new(DialogState::Closed);

    let fetch = move || {
        spawn_load(
            loading,
            toast,
            crud::fetch_list::<Employee>(),
            move |list| employees.set(list),
            move || employees.set(Vec::new()),
        );
    };

    let handle_delete = move |id: i64| delete_with_confirm::<Employee>(id, toast, fetch);

    fetch();

    let visible = Memo::new(move |_| filter_list(employees.get(), &filter.get()));

    view! {
        <div class="page">
            <PageHeader title="Employees" subtitle="Staff, positions and salaries">
                <SearchInput value=filter on_change=Callback::new(move |v| set_filter.set(v)) />
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
                <StatCard label="Employees" icon_name="employees" value=Signal::derive(move || employees.with(|e| e.len()).to_string()) />
                <StatCard
                    label="Active"
                    icon_name="employees"
                    value=Signal::derive(move || employees.with(|e| e.iter().filter(|x| x.is_active).count()).to_string())
                />
                <StatCard label="Monthly payroll" icon_name="payments" value=Signal::derive(move || format_money(employees.with(|e| monthly_payroll(e)))) />
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=200.0>"Name"</TableHeaderCell>
                        <TableHeaderCell min_width=140.0>"Position"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Department"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Phone"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Hired"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Salary"</TableHeaderCell>
                        <TableHeaderCell min_width=80.0>"Status"</TableHeaderCell>
                        <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || visible.get()
                        key=|e| (e.id, e.full_name.clone(), e.is_active, e.salary.to_bits())
                        children=move |e| {
                            let id = e.id.unwrap_or_default();
                            let hired = e.hire_date.as_deref().map(format_date).unwrap_or_default();
                            let status = if e.is_active {
                                view! { <Badge variant="success">"Active"</Badge> }.into_any()
                            } else {
                                view! { <Badge>"Inactive"</Badge> }.into_any()
                            };
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a href="#" class="table__link" on:click=move |ev| {
                                                ev.prevent_default();
                                                dialog.set(DialogState::Edit(id));
                                            }>
                                                {e.full_name}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{e.position}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{e.department}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{e.phone}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{hired}</TableCellLayout></TableCell>
                                    <TableCellMoney value=e.salary />
                                    <TableCell><TableCellLayout>{status}</TableCellLayout></TableCell>
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
                    <EmployeeDetails
                        state=dialog.get()
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
    fn payroll_counts_active_staff_only() {
        let staff = vec![
            Employee { full_name: "A".into(), salary: 900.0, is_active: true, ..Default::default() },
            Employee { full_name: "B".into(), salary: 700.0, is_active: false, ..Default::default() },
            Employee { full_name: "C".into(), salary: 650.5, is_active: true, ..Default::default() },
        ];
        assert_eq!(monthly_payroll(&staff), 1550.5);
        assert_eq!(monthly_payroll(&[]), 0.0);
    }
}
