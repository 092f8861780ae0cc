use crate::shared::components::ui::{Input, Textarea};
use crate::shared::crud;
use crate::shared::date_utils::format_date;
use crate::shared::details::{DetailsViewModel, DialogState, RecordDialog};
use crate::shared::form::{bind, bind_optional_text};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::loader::{delete_with_confirm, spawn_load};
use crate::shared::toast::use_toast;
use contracts::domain::a009_legal::LegalDocument;
use leptos::prelude::*;
use thaw::*;

impl Searchable for LegalDocument {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.document_type.clone(),
            self.reference.clone(),
        ]
    }
}

#[component]
fn LegalDocumentDetails(state: DialogState, on_saved: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let vm = DetailsViewModel::<LegalDocument>::new();
    vm.load(state);
    let form = vm.form;

    let (title, set_title) = bind(form, |f| f.title.clone(), |f, v| f.title = v);
    let (kind, set_kind) = bind(form, |f| f.document_type.clone(), |f, v| f.document_type = v);
    let (reference, set_reference) = bind(form, |f| f.reference.clone(), |f, v| f.reference = v);
    let (issued, set_issued) = bind_optional_text(form, |f| f.issued_on.clone(), |f, v| f.issued_on = v);
    let (notes, set_notes) = bind_optional_text(form, |f| f.notes.clone(), |f, v| f.notes = v);

    view! {
        <RecordDialog vm=vm on_saved=on_saved on_close=on_close>
            <Input label="Title" value=title on_input=set_title required=true />
            <div class="form__row">
                <Input label="Type" value=kind on_input=set_kind placeholder="License, certificate, permit..." />
                <Input label="Reference" value=reference on_input=set_reference />
                <Input label="Issued on" input_type="date" value=issued on_input=set_issued />
            </div>
            <Textarea label="Notes" value=notes on_input=set_notes />
        </RecordDialog>
    }
}

#[component]
pub fn LegalDocumentList() -> impl IntoView {
    let toast = use_toast();
    let documents = RwSignal::new(Vec::<LegalDocument>::new());
    let loading = RwSignal::new(false);
    let (filter, set_filter) = signal(String::new());
    let dialog = RwSignal::new(DialogState::Closed);

    let fetch = move || {
        spawn_load(
            loading,
            toast,
            crud::fetch_list::<LegalDocument>(),
            move |list| documents.set(list),
            move || documents.set(Vec::new()),
        );
    };

    let handle_delete = move |id: i64| delete_with_confirm::<LegalDocument>(id, toast, fetch);

    fetch();

    let visible = Memo::new(move |_| filter_list(documents.get(), &filter.get()));

    view! {
        <div class="page__section">
            <div class="page__toolbar">
                <SearchInput value=filter on_change=Callback::new(move |v| set_filter.set(v)) />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| dialog.set(DialogState::New)>
                    {icon("plus")}
                    " New document"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch() disabled=loading>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=220.0>"Title"</TableHeaderCell>
                        <TableHeaderCell min_width=130.0>"Type"</TableHeaderCell>
                        <TableHeaderCell min_width=130.0>"Reference"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Issued"</TableHeaderCell>
                        <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || visible.get()
                        key=|d| (d.id, d.title.clone(), d.reference.clone())
                        children=move |d| {
                            let id = d.id.unwrap_or_default();
                            let issued = d.issued_on.as_deref().map(format_date).unwrap_or_default();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a href="#" class="table__link" on:click=move |e| {
                                                e.prevent_default();
                                                dialog.set(DialogState::Edit(id));
                                            }>
                                                {d.title}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{d.document_type}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{d.reference}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{issued}</TableCellLayout></TableCell>
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
                    <LegalDocumentDetails
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
