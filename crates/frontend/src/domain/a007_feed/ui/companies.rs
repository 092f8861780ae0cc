use crate::shared::components::ui::Input;
use crate::shared::crud;
use crate::shared::details::{DetailsViewModel, DialogState, RecordDialog};
use crate::shared::form::bind;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::loader::{delete_with_confirm, spawn_load};
use crate::shared::toast::use_toast;
use contracts::domain::a007_feed::FeedCompany;
use leptos::prelude::*;
use thaw::*;

impl Searchable for FeedCompany {
    fn search_fields(&self) -> Vec<String> {
        vec![self.name.clone(), self.phone.clone(), self.address.clone()]
    }
}

#[component]
fn FeedCompanyDetails(state: DialogState, on_saved: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let vm = DetailsViewModel::<FeedCompany>::new();
    vm.load(state);
    let form = vm.form;

    let (name, set_name) = bind(form, |f| f.name.clone(), |f, v| f.name = v);
    let (phone, set_phone) = bind(form, |f| f.phone.clone(), |f, v| f.phone = v);
    let (address, set_address) = bind(form, |f| f.address.clone(), |f, v| f.address = v);

    view! {
        <RecordDialog vm=vm on_saved=on_saved on_close=on_close>
            <Input label="Name" value=name on_input=set_name required=true />
            <Input label="Phone" input_type="tel" value=phone on_input=set_phone />
            <Input label="Address" value=address on_input=set_address />
        </RecordDialog>
    }
}

#[component]
pub fn FeedCompanyList() -> impl IntoView {
    let toast = use_toast();
    let companies = RwSignal::new(Vec::<FeedCompany>::new());
    let loading = RwSignal::new(false);
    let (filter, set_filter) = signal(String::new());
    let dialog = RwSignal::new(DialogState::Closed);

    let fetch = move || {
        spawn_load(
            loading,
            toast,
            crud::fetch_list::<FeedCompany>(),
            move |list| companies.set(list),
            move || companies.set(Vec::new()),
        );
    };

    let handle_delete = move |id: i64| delete_with_confirm::<FeedCompany>(id, toast, fetch);

    fetch();

    let visible = Memo::new(move |_| filter_list(companies.get(), &filter.get()));

    view! {
        <div class="page__section">
            <div class="page__toolbar">
                <SearchInput value=filter on_change=Callback::new(move |v| set_filter.set(v)) />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| dialog.set(DialogState::New)>
                    {icon("plus")}
                    " New company"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch() disabled=loading>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=200.0>"Name"</TableHeaderCell>
                        <TableHeaderCell min_width=140.0>"Phone"</TableHeaderCell>
                        <TableHeaderCell min_width=200.0>"Address"</TableHeaderCell>
                        <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || visible.get()
                        key=|c| (c.id, c.name.clone(), c.phone.clone(), c.address.clone())
                        children=move |c| {
                            let id = c.id.unwrap_or_default();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a href="#" class="table__link" on:click=move |e| {
                                                e.prevent_default();
                                                dialog.set(DialogState::Edit(id));
                                            }>
                                                {c.name}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{c.phone}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{c.address}</TableCellLayout></TableCell>
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
                    <FeedCompanyDetails
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
