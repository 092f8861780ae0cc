use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::ui::{Badge, Input, Select, Textarea};
use crate::shared::crud;
use crate::shared::date_utils::{format_date, today_iso};
use crate::shared::details::{DetailsViewModel, DialogState, RecordDialog};
use crate::shared::form::{bind, bind_enum, bind_optional_text, enum_options};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::loader::{delete_with_confirm, spawn_load};
use crate::shared::toast::use_toast;
use contracts::domain::a009_legal::LegalCase;
use contracts::enums::{CaseStatus, CodedEnum};
use leptos::prelude::*;
use thaw::*;

impl Searchable for LegalCase {
    fn search_fields(&self) -> Vec<String> {
        vec![self.title.clone(), self.case_number.clone(), self.court.clone()]
    }
}

#[component]
fn LegalCaseDetails(state: DialogState, on_saved: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let vm = DetailsViewModel::with_defaults(LegalCase {
        opened_on: today_iso(),
        ..Default::default()
    });
    vm.load(state);
    let form = vm.form;

    let (title, set_title) = bind(form, |f| f.title.clone(), |f, v| f.title = v);
    let (number, set_number) = bind(form, |f| f.case_number.clone(), |f, v| f.case_number = v);
    let (court, set_court) = bind(form, |f| f.court.clone(), |f, v| f.court = v);
    let (opened, set_opened) = bind(form, |f| f.opened_on.clone(), |f, v| f.opened_on = v);
    let (status, set_status) = bind_enum(form, |f| f.status, |f, v| f.status = v);
    let (description, set_description) =
        bind_optional_text(form, |f| f.description.clone(), |f, v| f.description = v);

    view! {
        <RecordDialog vm=vm on_saved=on_saved on_close=on_close>
            <Input label="Title" value=title on_input=set_title required=true />
            <div class="form__row">
                <Input label="Case number" value=number on_input=set_number />
                <Input label="Court" value=court on_input=set_court />
            </div>
            <div class="form__row">
                <Input label="Opened on" input_type="date" value=opened on_input=set_opened required=true />
                <Select label="Status" value=status on_change=set_status options={enum_options::<CaseStatus>()} />
            </div>
            <Textarea label="Description" value=description on_input=set_description />
        </RecordDialog>
    }
}

#[component]
pub fn LegalCaseList() -> impl IntoView {
    let toast = use_toast();
    let cases = RwSignal::new(Vec::<LegalCase>::new());
    let loading = RwSignal::new(false);
    let (filter, set_filter) = signal(String::new());
    let dialog = RwSignal::new(DialogState::Closed);

    let fetch = move || {
        spawn_load(
            loading,
            toast,
            crud::fetch_list::<LegalCase>(),
            move |mut list| {
                list.sort_by(|a, b| b.opened_on.cmp(&a.opened_on));
                cases.set(list);
            },
            move || cases.set(Vec::new()),
        );
    };

    let handle_delete = move |id: i64| delete_with_confirm::<LegalCase>(id, toast, fetch);

    fetch();

    let visible = Memo::new(move |_| filter_list(cases.get(), &filter.get()));
    let open_count = Memo::new(move |_| {
        cases.with(|c| c.iter().filter(|x| x.status != CaseStatus::Closed).count())
    });

    view! {
        <div class="page__section">
            <div class="page__toolbar">
                <SearchInput value=filter on_change=Callback::new(move |v| set_filter.set(v)) />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| dialog.set(DialogState::New)>
                    {icon("plus")}
                    " New case"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch() disabled=loading>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </div>

            <div class="stat-grid">
                <StatCard label="Cases" icon_name="legal" value=Signal::derive(move || cases.with(|c| c.len()).to_string()) />
                <StatCard
                    label="Not closed"
                    icon_name="alert"
                    value=Signal::derive(move || open_count.get().to_string())
                    tone=Signal::derive(move || if open_count.get() > 0 { StatTone::Warning } else { StatTone::Neutral })
                />
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=200.0>"Title"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Number"</TableHeaderCell>
                        <TableHeaderCell min_width=150.0>"Court"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Opened"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                        <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || visible.get()
                        key=|c| (c.id, c.title.clone(), c.status.code())
                        children=move |c| {
                            let id = c.id.unwrap_or_default();
                            let variant = match c.status {
                                CaseStatus::Open => "warning",
                                CaseStatus::InProgress => "primary",
                                CaseStatus::Closed => "neutral",
                            };
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
                                    <TableCell><TableCellLayout>{c.case_number}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{c.court}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{format_date(&c.opened_on)}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Badge variant=variant>{c.status.display_name()}</Badge>
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
                    <LegalCaseDetails
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
