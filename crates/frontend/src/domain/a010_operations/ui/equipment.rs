use super::asset_variant;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::{Badge, Input, Select};
use crate::shared::crud;
use crate::shared::date_utils::format_date;
use crate::shared::details::{DetailsViewModel, DialogState, RecordDialog};
use crate::shared::form::{bind, bind_enum, bind_optional_text, enum_options};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::loader::{delete_with_confirm, spawn_load};
use crate::shared::toast::use_toast;
use contracts::domain::a010_operations::Equipment;
use contracts::enums::{AssetStatus, CodedEnum};
use leptos::prelude::*;
use thaw::*;

impl Searchable for Equipment {
    fn search_fields(&self) -> Vec<String> {
        vec![self.name.clone(), self.category.clone(), self.serial_number.clone()]
    }
}

#[component]
fn EquipmentDetails(state: DialogState, on_saved: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let vm = DetailsViewModel::<Equipment>::new();
    vm.load(state);
    let form = vm.form;

    let (name, set_name) = bind(form, |f| f.name.clone(), |f, v| f.name = v);
    let (category, set_category) = bind(form, |f| f.category.clone(), |f, v| f.category = v);
    let (serial, set_serial) = bind(form, |f| f.serial_number.clone(), |f, v| f.serial_number = v);
    let (purchased, set_purchased) =
        bind_optional_text(form, |f| f.purchase_date.clone(), |f, v| f.purchase_date = v);
    let (status, set_status) = bind_enum(form, |f| f.status, |f, v| f.status = v);

    view! {
        <RecordDialog vm=vm on_saved=on_saved on_close=on_close>
            <Input label="Name" value=name on_input=set_name required=true />
            <div class="form__row">
                <Input label="Category" value=category on_input=set_category placeholder="Cooling tank, pasteurizer..." />
                <Input label="Serial number" value=serial on_input=set_serial />
            </div>
            <div class="form__row">
                <Input label="Purchase date" input_type="date" value=purchased on_input=set_purchased />
                <Select label="Status" value=status on_change=set_status options={enum_options::<AssetStatus>()} />
            </div>
        </RecordDialog>
    }
}

#[component]
pub fn EquipmentList() -> impl IntoView {
    let toast = use_toast();
    let equipment = RwSignal::new(Vec::<Equipment>::new());
    let loading = RwSignal::new(false);
    let (filter, set_filter) = signal(String::new());
    let dialog = RwSignal::new(DialogState::Closed);

    let fetch = move || {
        spawn_load(
            loading,
            toast,
            crud::fetch_list::<Equipment>(),
            move |list| equipment.set(list),
            move || equipment.set(Vec::new()),
        );
    };

    let handle_delete = move |id: i64| delete_with_confirm::<Equipment>(id, toast, fetch);

    fetch();

    let visible = Memo::new(move |_| filter_list(equipment.get(), &filter.get()));
    let count_with = move |status: AssetStatus| {
        Signal::derive(move || equipment.with(|e| e.iter().filter(|x| x.status == status).count()).to_string())
    };

    view! {
        <div class="page__section">
            <div class="page__toolbar">
                <SearchInput value=filter on_change=Callback::new(move |v| set_filter.set(v)) />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| dialog.set(DialogState::New)>
                    {icon("plus")}
                    " New equipment"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch() disabled=loading>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </div>

            <div class="stat-grid">
                <StatCard label="In service" icon_name="operations" value=count_with(AssetStatus::Active) />
                <StatCard label="Under maintenance" icon_name="alert" value=count_with(AssetStatus::UnderMaintenance) />
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=200.0>"Name"</TableHeaderCell>
                        <TableHeaderCell min_width=130.0>"Category"</TableHeaderCell>
                        <TableHeaderCell min_width=130.0>"Serial number"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Purchased"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Status"</TableHeaderCell>
                        <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || visible.get()
                        key=|e| (e.id, e.name.clone(), e.status.code())
                        children=move |e| {
                            let id = e.id.unwrap_or_default();
                            let purchased = e.purchase_date.as_deref().map(format_date).unwrap_or_default();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a href="#" class="table__link" on:click=move |ev| {
                                                ev.prevent_default();
                                                dialog.set(DialogState::Edit(id));
                                            }>
                                                {e.name}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{e.category}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{e.serial_number}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{purchased}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Badge variant=asset_variant(e.status)>{e.status.display_name()}</Badge>
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
                    <EquipmentDetails
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
