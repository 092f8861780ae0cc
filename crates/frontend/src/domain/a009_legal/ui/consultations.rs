use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{format_money, TableCellMoney};
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::crud;
use crate::shared::date_utils::{format_date, today_iso};
use crate::shared::details::{DetailsViewModel, DialogState, RecordDialog};
use crate::shared::form::{bind, bind_number, bind_optional_text};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::loader::{delete_with_confirm, spawn_load};
use crate::shared::toast::use_toast;
use contracts::domain::a009_legal::LegalConsultation;
use leptos::prelude::*;
use thaw::*;

impl Searchable for LegalConsultation {
    fn search_fields(&self) -> Vec<String> {
        vec![self.subject.clone(), self.lawyer.clone(), self.date.clone()]
    }
}

#[component]
fn ConsultationDetails(state: DialogState, on_saved: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let vm = DetailsViewModel::with_defaults(LegalConsultation {
        date: today_iso(),
        ..Default::default()
    });
    vm.load(state);
    let form = vm.form;

    let (subject, set_subject) = bind(form, |f| f.subject.clone(), |f, v| f.subject = v);
    let (lawyer, set_lawyer) = bind(form, |f| f.lawyer.clone(), |f, v| f.lawyer = v);
    let (date, set_date) = bind(form, |f| f.date.clone(), |f, v| f.date = v);
    let (fee, set_fee) = bind_number(form, |f| f.fee, |f, v| f.fee = v);
    let (notes, set_notes) = bind_optional_text(form, |f| f.notes.clone(), |f, v| f.notes = v);

    view! {
        <RecordDialog vm=vm on_saved=on_saved on_close=on_close>
            <Input label="Subject" value=subject on_input=set_subject required=true />
            <div class="form__row">
                <Input label="Lawyer" value=lawyer on_input=set_lawyer />
                <Input label="Date" input_type="date" value=date on_input=set_date required=true />
                <Input label="Fee" input_type="number" value=fee on_input=set_fee />
            </div>
            <Textarea label="Notes" value=notes on_input=set_notes />
        </RecordDialog>
    }
}

#[component]
pub fn ConsultationList() -> impl IntoView {
    let toast = use_toast();
    let consultations = RwSignal::new(Vec::<LegalConsultation>::new());
    let loading = RwSignal::new(false);
    let (filter, set_filter) = signal(String::new());
    let dialog = RwSignal::new(DialogState::Closed);

    let fetch = move || {
        spawn_load(
            loading,
            toast,
            crud::fetch_list::<LegalConsultation>(),
            move |mut list| {
                list.sort_by(|a, b| b.date.cmp(&a.date));
                consultations.set(list);
            },
            move || consultations.set(Vec::new()),
        );
    };

    let handle_delete = move |id: i64| delete_with_confirm::<LegalConsultation>(id, toast, fetch);

    fetch();

    let visible = Memo::new(move |_| filter_list(consultations.get(), &filter.get()));

    view! {
        <div class="page__section">
            <div class="page__toolbar">
                <SearchInput value=filter on_change=Callback::new(move |v| set_filter.set(v)) />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| dialog.set(DialogState::New)>
                    {icon("plus")}
                    " New consultation"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch() disabled=loading>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </div>

            <div class="stat-grid">
                <StatCard label="Consultations" icon_name="legal" value=Signal::derive(move || consultations.with(|c| c.len()).to_string()) />
                <StatCard
                    label="Fees"
                    icon_name="payments"
                    value=Signal::derive(move || format_money(consultations.with(|c| c.iter().map(|x| x.fee).sum::<f64>())))
                />
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=100.0>"Date"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=220.0>"Subject"</TableHeaderCell>
                        <TableHeaderCell min_width=150.0>"Lawyer"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Fee"</TableHeaderCell>
                        <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || visible.get()
                        key=|c| (c.id, c.subject.clone(), c.fee.to_bits())
                        children=move |c| {
                            let id = c.id.unwrap_or_default();
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{format_date(&c.date)}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a href="#" class="table__link" on:click=move |e| {
                                                e.prevent_default();
                                                dialog.set(DialogState::Edit(id));
                                            }>
                                                {c.subject}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{c.lawyer}</TableCellLayout></TableCell>
                                    <TableCellMoney value=c.fee />
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
                    <ConsultationDetails
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
