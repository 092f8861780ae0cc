use super::asset_variant;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{format_liters, format_number_with_decimals};
use crate::shared::components::ui::{Badge, Input, Select};
use crate::shared::crud;
use crate::shared::details::{DetailsViewModel, DialogState, RecordDialog};
use crate::shared::form::{bind, bind_enum, bind_number, enum_options};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::loader::{delete_with_confirm, spawn_load};
use crate::shared::toast::use_toast;
use contracts::domain::a010_operations::Vehicle;
use contracts::enums::{AssetStatus, CodedEnum};
use leptos::prelude::*;
use thaw::*;

impl Searchable for Vehicle {
    fn search_fields(&self) -> Vec<String> {
        vec![self.plate_number.clone(), self.model.clone(), self.driver.clone()]
    }
}

/// Tank capacity of the vehicles that can go out on collection
pub fn fleet_capacity(vehicles: &[Vehicle]) -> f64 {
    vehicles
        .iter()
        .filter(|v| v.status == AssetStatus::Active)
        .map(|v| v.capacity_liters)
        .sum()
}

#[component]
fn VehicleDetails(state: DialogState, on_saved: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let vm = DetailsViewModel::<Vehicle>::new();
    vm.load(state);
    let form = vm.form;

    let (plate, set_plate) = bind(form, |f| f.plate_number.clone(), |f, v| f.plate_number = v);
    let (model, set_model) = bind(form, |f| f.model.clone(), |f, v| f.model = v);
    let (driver, set_driver) = bind(form, |f| f.driver.clone(), |f, v| f.driver = v);
    let (capacity, set_capacity) = bind_number(form, |f| f.capacity_liters, |f, v| f.capacity_liters = v);
    let (status, set_status) = bind_enum(form, |f| f.status, |f, v| f.status = v);

    view! {
        <RecordDialog vm=vm on_saved=on_saved on_close=on_close>
            <div class="form__row">
                <Input label="Plate number" value=plate on_input=set_plate required=true />
                <Input label="Model" value=model on_input=set_model />
            </div>
            <Input label="Driver" value=driver on_input=set_driver />
            <div class="form__row">
                <Input label="Tank capacity, L" input_type="number" value=capacity on_input=set_capacity />
                <Select label="Status" value=status on_change=set_status options={enum_options::<AssetStatus>()} />
            </div>
        </RecordDialog>
    }
}

#[component]
pub fn VehicleList() -> impl IntoView {
    let toast = use_toast();
    let vehicles = RwSignal::new(Vec::<Vehicle>::new());
    let loading = RwSignal::new(false);
    let (filter, set_filter) = signal(String::new());
    let dialog = RwSignal::new(DialogState::Closed);

    let fetch = move || {
        spawn_load(
            loading,
            toast,
            crud::fetch_list::<Vehicle>(),
            move |list| vehicles.set(list),
            move || vehicles.set(Vec::new()),
        );
    };

    let handle_delete = move |id: i64| delete_with_confirm::<Vehicle>(id, toast, fetch);

    fetch();

    let visible = Memo::new(move |_| filter_list(vehicles.get(), &filter.get()));

    view! {
        <div class="page__section">
            <div class="page__toolbar">
                <SearchInput value=filter on_change=Callback::new(move |v| set_filter.set(v)) />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| dialog.set(DialogState::New)>
                    {icon("plus")}
                    " New vehicle"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch() disabled=loading>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </div>

            <div class="stat-grid">
                <StatCard label="Vehicles" icon_name="truck" value=Signal::derive(move || vehicles.with(|v| v.len()).to_string()) />
                <StatCard label="Collection capacity" icon_name="milk" value=Signal::derive(move || format_liters(vehicles.with(|v| fleet_capacity(v)))) />
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=140.0>"Plate"</TableHeaderCell>
                        <TableHeaderCell min_width=140.0>"Model"</TableHeaderCell>
                        <TableHeaderCell min_width=160.0>"Driver"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Capacity, L"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Status"</TableHeaderCell>
                        <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || visible.get()
                        key=|v| (v.id, v.plate_number.clone(), v.status.code(), v.capacity_liters.to_bits())
                        children=move |v| {
                            let id = v.id.unwrap_or_default();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a href="#" class="table__link" on:click=move |e| {
                                                e.prevent_default();
                                                dialog.set(DialogState::Edit(id));
                                            }>
                                                {v.plate_number}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{v.model}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{v.driver}</TableCellLayout></TableCell>
                                    <TableCell class="text-right">{format_number_with_decimals(v.capacity_liters, 0)}</TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Badge variant=asset_variant(v.status)>{v.status.display_name()}</Badge>
                                        </TableCellLayout>
                                    </TableCell>
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
                    <VehicleDetails
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
    fn retired_and_serviced_trucks_do_not_collect() {
        let fleet = vec![
            Vehicle { capacity_liters: 3000.0, status: AssetStatus::Active, ..Default::default() },
            Vehicle { capacity_liters: 2000.0, status: AssetStatus::UnderMaintenance, ..Default::default() },
            Vehicle { capacity_liters: 1500.0, status: AssetStatus::Active, ..Default::default() },
            Vehicle { capacity_liters: 5000.0, status: AssetStatus::Retired, ..Default::default() },
        ];
        assert_eq!(fleet_capacity(&fleet), 4500.0);
    }
}
