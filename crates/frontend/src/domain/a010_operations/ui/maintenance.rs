use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{format_money, TableCellMoney};
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::crud;
use crate::shared::date_utils::{format_date, today_iso};
use crate::shared::details::{DetailsViewModel, DialogState, RecordDialog};
use crate::shared::form::{bind, bind_number, bind_optional_text, bind_ref, ref_options};
use crate::shared::icons::icon;
use crate::shared::list_utils::{display_ref, filter_list, names_by_id, SearchInput, Searchable};
use crate::shared::loader::{delete_with_confirm, spawn_load};
use crate::shared::toast::use_toast;
use contracts::domain::a010_operations::{Equipment, Maintenance};
use leptos::prelude::*;
use std::collections::BTreeMap;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
pub struct MaintenanceRow {
    pub maintenance: Maintenance,
    pub equipment: String,
}

impl Searchable for MaintenanceRow {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.equipment.clone(),
            self.maintenance.maintenance_type.clone(),
            self.maintenance.performed_by.clone(),
        ]
    }
}

fn build_rows(mut records: Vec<Maintenance>, equipment: &[Equipment]) -> Vec<MaintenanceRow> {
    let names = names_by_id(equipment, |e| e.id, |e| e.name.clone());
    records.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    records
        .into_iter()
        .map(|maintenance| MaintenanceRow {
            equipment: display_ref(&names, maintenance.equipment_id),
            maintenance,
        })
        .collect()
}

/// Maintenance spend per equipment id
pub fn cost_by_equipment(records: &[Maintenance]) -> BTreeMap<i64, f64> {
    let mut costs = BTreeMap::new();
    for m in records {
        if let Some(id) = m.equipment_id {
            *costs.entry(id).or_insert(0.0) += m.cost;
        }
    }
    costs
}

#[component]
fn MaintenanceDetails(
    state: DialogState,
    #[prop(into)] equipment: Signal<Vec<Equipment>>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = DetailsViewModel::with_defaults(Maintenance {
        date: today_iso(),
        ..Default::default()
    });
    vm.load(state);
    let form = vm.form;

    let equipment_options = Signal::derive(move || {
        equipment.with(|list| ref_options(list, |e| e.id, |e| e.name.clone(), "Select equipment"))
    });
    let (equipment_id, set_equipment) = bind_ref(form, |f| f.equipment_id, |f, v| f.equipment_id = v);
    let (date, set_date) = bind(form, |f| f.date.clone(), |f, v| f.date = v);
    let (kind, set_kind) = bind(form, |f| f.maintenance_type.clone(), |f, v| f.maintenance_type = v);
    let (cost, set_cost) = bind_number(form, |f| f.cost, |f, v| f.cost = v);
    let (by, set_by) = bind(form, |f| f.performed_by.clone(), |f, v| f.performed_by = v);
    let (notes, set_notes) = bind_optional_text(form, |f| f.notes.clone(), |f, v| f.notes = v);

    view! {
        <RecordDialog vm=vm on_saved=on_saved on_close=on_close>
            <Select label="Equipment" value=equipment_id on_change=set_equipment options=equipment_options required=true />
            <div class="form__row">
                <Input label="Date" input_type="date" value=date on_input=set_date required=true />
                <Input label="Type" value=kind on_input=set_kind placeholder="Inspection, repair..." />
            </div>
            <div class="form__row">
                <Input label="Cost" input_type="number" value=cost on_input=set_cost />
                <Input label="Performed by" value=by on_input=set_by />
            </div>
            <Textarea label="Notes" value=notes on_input=set_notes />
        </RecordDialog>
    }
}

#[component]
pub fn MaintenanceList() -> impl IntoView {
    let toast = use_toast();
    let records = RwSignal::new(Vec::<Maintenance>::new());
    let equipment = RwSignal::new(Vec::<Equipment>::new());
    let loading = RwSignal::new(false);
    let (filter, set_filter) = signal(String::new());
    let dialog = RwSignal::new(DialogState::Closed);

    let fetch = move || {
        spawn_load(
            loading,
            toast,
            async {
                futures::try_join!(
                    crud::fetch_list::<Maintenance>(),
                    crud::fetch_list::<Equipment>(),
                )
            },
            move |(m, e)| {
                records.set(m);
                equipment.set(e);
            },
            move || {
                records.set(Vec::new());
                equipment.set(Vec::new());
            },
        );
    };

    let handle_delete = move |id: i64| delete_with_confirm::<Maintenance>(id, toast, fetch);

    fetch();

    let rows = Memo::new(move |_| {
        let all = equipment.with(|e| build_rows(records.get(), e));
        filter_list(all, &filter.get())
    });
    let costliest = Memo::new(move |_| {
        let costs = records.with(|r| cost_by_equipment(r));
        let names = equipment.with(|e| names_by_id(e, |x| x.id, |x| x.name.clone()));
        costs
            .into_iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, cost)| format!("{} ({})", display_ref(&names, Some(id)), format_money(cost)))
            .unwrap_or_else(|| "—".to_string())
    });

    view! {
        <div class="page__section">
            <div class="page__toolbar">
                <SearchInput value=filter on_change=Callback::new(move |v| set_filter.set(v)) />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| dialog.set(DialogState::New)>
                    {icon("plus")}
                    " New maintenance"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch() disabled=loading>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Maintenance cost"
                    icon_name="payments"
                    value=Signal::derive(move || format_money(records.with(|r| r.iter().map(|m| m.cost).sum::<f64>())))
                />
                <StatCard label="Most expensive" icon_name="operations" value=costliest />
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=100.0>"Date"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=180.0>"Equipment"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Type"</TableHeaderCell>
                        <TableHeaderCell min_width=140.0>"Performed by"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Cost"</TableHeaderCell>
                        <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || rows.get()
                        key=|row| (row.maintenance.id, row.equipment.clone(), row.maintenance.cost.to_bits())
                        children=move |row| {
                            let m = row.maintenance;
                            let id = m.id.unwrap_or_default();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a href="#" class="table__link" on:click=move |e| {
                                                e.prevent_default();
                                                dialog.set(DialogState::Edit(id));
                                            }>
                                                {format_date(&m.date)}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{row.equipment}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{m.maintenance_type}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{m.performed_by}</TableCellLayout></TableCell>
                                    <TableCellMoney value=m.cost />
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
                    <MaintenanceDetails
                        state=dialog.get()
                        equipment=equipment
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
    fn cost_grouped_by_equipment() {
        let records = vec![
            Maintenance { equipment_id: Some(1), cost: 120.0, ..Default::default() },
            Maintenance { equipment_id: Some(2), cost: 40.0, ..Default::default() },
            Maintenance { equipment_id: Some(1), cost: 30.0, ..Default::default() },
            Maintenance { equipment_id: None, cost: 99.0, ..Default::default() },
        ];
        let costs = cost_by_equipment(&records);
        assert_eq!(costs.len(), 2);
        assert_eq!(costs[&1], 150.0);
        assert_eq!(costs[&2], 40.0);
    }
}
