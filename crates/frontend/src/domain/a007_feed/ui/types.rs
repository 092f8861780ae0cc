use crate::shared::components::table::TableCellMoney;
use crate::shared::components::ui::Input;
use crate::shared::crud;
use crate::shared::details::{DetailsViewModel, DialogState, RecordDialog};
use crate::shared::form::{bind, bind_number};
use crate::shared::icons::icon;
use crate::shared::loader::{delete_with_confirm, spawn_load};
use crate::shared::toast::use_toast;
use contracts::domain::a007_feed::FeedType;
use leptos::prelude::*;
use thaw::*;

#[component]
fn FeedTypeDetails(state: DialogState, on_saved: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let vm = DetailsViewModel::<FeedType>::new();
    vm.load(state);
    let form = vm.form;

    let (name, set_name) = bind(form, |f| f.name.clone(), |f, v| f.name = v);
    let (unit, set_unit) = bind(form, |f| f.unit.clone(), |f, v| f.unit = v);
    let (price, set_price) = bind_number(form, |f| f.default_price, |f, v| f.default_price = v);

    view! {
        <RecordDialog vm=vm on_saved=on_saved on_close=on_close>
            <Input label="Name" value=name on_input=set_name required=true />
            <div class="form__row">
                <Input label="Unit" value=unit on_input=set_unit placeholder="kg, bag, t" />
                <Input label="Default price" input_type="number" value=price on_input=set_price />
            </div>
        </RecordDialog>
    }
}

#[component]
pub fn FeedTypeList() -> impl IntoView {
    let toast = use_toast();
    let feed_types = RwSignal::new(Vec::<FeedType>::new());
    let loading = RwSignal::new(false);
    let dialog = RwSignal::new(DialogState::Closed);

    let fetch = move || {
        spawn_load(
            loading,
            toast,
            crud::fetch_list::<FeedType>(),
            move |mut list| {
                list.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
                feed_types.set(list);
            },
            move || feed_types.set(Vec::new()),
        );
    };

    let handle_delete = move |id: i64| delete_with_confirm::<FeedType>(id, toast, fetch);

    fetch();

    view! {
        <div class="page__section">
            <div class="page__toolbar">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| dialog.set(DialogState::New)>
                    {icon("plus")}
                    " New feed type"
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
                        <TableHeaderCell min_width=80.0>"Unit"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Default price"</TableHeaderCell>
                        <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || feed_types.get()
                        key=|t| (t.id, t.name.clone(), t.unit.clone(), t.default_price.to_bits())
                        children=move |t| {
                            let id = t.id.unwrap_or_default();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a href="#" class="table__link" on:click=move |e| {
                                                e.prevent_default();
                                                dialog.set(DialogState::Edit(id));
                                            }>
                                                {t.name}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{t.unit}</TableCellLayout></TableCell>
                                    <TableCellMoney value=t.default_price />
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
                    <FeedTypeDetails
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
