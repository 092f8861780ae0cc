use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{format_money, TableCellMoney};
use crate::shared::components::ui::{Badge, Input, Select};
use crate::shared::crud;
use crate::shared::date_utils::{format_date, today_iso};
use crate::shared::details::{DetailsViewModel, DialogState, RecordDialog};
use crate::shared::form::{bind, bind_enum, bind_number, bind_optional_text, enum_options};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::loader::{delete_with_confirm, spawn_load};
use crate::shared::toast::use_toast;
use contracts::domain::a009_legal::LegalContract;
use contracts::enums::{CodedEnum, ContractStatus};
use leptos::prelude::*;
use thaw::*;

impl Searchable for LegalContract {
    fn search_fields(&self) -> Vec<String> {
        vec![self.title.clone(), self.party.clone(), self.contract_type.clone()]
    }
}

fn status_variant(status: ContractStatus) -> &'static str {
    match status {
        ContractStatus::Active => "success",
        ContractStatus::Draft => "primary",
        ContractStatus::Expired => "warning",
        ContractStatus::Terminated => "error",
    }
}

/// Total value of the contracts currently in force
pub fn active_value(contracts: &[LegalContract]) -> f64 {
    contracts
        .iter()
        .filter(|c| c.status == ContractStatus::Active)
        .map(|c| c.value)
        .sum()
}

#[component]
fn LegalContractDetails(state: DialogState, on_saved: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let vm = DetailsViewModel::with_defaults(LegalContract {
        start_date: today_iso(),
        ..Default::default()
    });
    vm.load(state);
    let form = vm.form;

    let (title, set_title) = bind(form, |f| f.title.clone(), |f, v| f.title = v);
    let (party, set_party) = bind(form, |f| f.party.clone(), |f, v| f.party = v);
    let (kind, set_kind) = bind(form, |f| f.contract_type.clone(), |f, v| f.contract_type = v);
    let (start, set_start) = bind(form, |f| f.start_date.clone(), |f, v| f.start_date = v);
    let (end, set_end) = bind_optional_text(form, |f| f.end_date.clone(), |f, v| f.end_date = v);
    let (value, set_value) = bind_number(form, |f| f.value, |f, v| f.value = v);
    let (status, set_status) = bind_enum(form, |f| f.status, |f, v| f.status = v);

    view! {
        <RecordDialog vm=vm on_saved=on_saved on_close=on_close>
            <Input label="Title" value=title on_input=set_title required=true />
            <div class="form__row">
                <Input label="Party" value=party on_input=set_party required=true />
                <Input label="Type" value=kind on_input=set_kind placeholder="Supply, lease, service..." />
            </div>
            <div class="form__row">
                <Input label="Start date" input_type="date" value=start on_input=set_start required=true />
                <Input label="End date" input_type="date" value=end on_input=set_end />
            </div>
            <div class="form__row">
                <Input label="Value" input_type="number" value=value on_input=set_value />
                <Select label="Status" value=status on_change=set_status options={enum_options::<ContractStatus>()} />
            </div>
        </RecordDialog>
    }
}

#[component]
pub fn LegalContractList() -> impl IntoView {
    let toast = use_toast();
    let contracts = RwSignal::new(Vec::<LegalContract>::new());
    let loading = RwSignal::new(false);
    let (filter, set_filter) = signal(String::new());
    let dialog = RwSignal::new(DialogState::Closed);

    let fetch = move || {
        spawn_load(
            loading,
            toast,
            crud::fetch_list::<LegalContract>(),
            move |list| contracts.set(list),
            move || contracts.set(Vec::new()),
        );
    };

    let handle_delete = move |id: i64| delete_with_confirm::<LegalContract>(id, toast, fetch);

    fetch();

    let visible = Memo::new(move |_| filter_list(contracts.get(), &filter.get()));

    view! {
        <div class="page__section">
            <div class="page__toolbar">
                <SearchInput value=filter on_change=Callback::new(move |v| set_filter.set(v)) />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| dialog.set(DialogState::New)>
                    {icon("plus")}
                    " New contract"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch() disabled=loading>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Active contracts"
                    icon_name="legal"
                    value=Signal::derive(move || {
                        contracts.with(|c| c.iter().filter(|x| x.status == ContractStatus::Active).count()).to_string()
                    })
                />
                <StatCard label="Value in force" icon_name="payments" value=Signal::derive(move || format_money(contracts.with(|c| active_value(c)))) />
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=200.0>"Title"</TableHeaderCell>
                        <TableHeaderCell min_width=150.0>"Party"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Type"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Start"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"End"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Value"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                        <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || visible.get()
                        key=|c| (c.id, c.title.clone(), c.status.code(), c.value.to_bits())
                        children=move |c| {
                            let id = c.id.unwrap_or_default();
                            let end = c.end_date.as_deref().map(format_date).unwrap_or_default();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a href="#" class="table__link" on:click=move |e| {
                                                e.prevent_default();
                                                dialog.set(DialogState::Edit(id));
                                            }>
                                                {c.title}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{c.party}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{c.contract_type}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{format_date(&c.start_date)}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{end}</TableCellLayout></TableCell>
                                    <TableCellMoney value=c.value />
                                    <TableCell>
                                        <TableCellLayout>
                                            <Badge variant=status_variant(c.status)>{c.status.display_name()}</Badge>
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
                    <LegalContractDetails
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
    fn value_in_force_skips_other_statuses() {
        let contracts = vec![
            LegalContract { value: 1000.0, status: ContractStatus::Active, ..Default::default() },
            LegalContract { value: 500.0, status: ContractStatus::Draft, ..Default::default() },
            LegalContract { value: 250.0, status: ContractStatus::Active, ..Default::default() },
        ];
        assert_eq!(active_value(&contracts), 1250.0);
    }
}
