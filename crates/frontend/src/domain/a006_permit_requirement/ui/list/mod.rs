use contracts::domain::a006_permit_requirement::PermitRequirement;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::list_utils::contains_opt;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[component]
pub fn PermitRequirementList() -> impl IntoView {
    let all_items: RwSignal<Vec<PermitRequirement>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (is_loaded, set_is_loaded) = signal(false);
    let search = RwSignal::new(String::new());
    let (show_create_form, set_show_create_form) = signal(false);
    let editing: RwSignal<Option<PermitRequirement>> = RwSignal::new(None);
    let deleting: RwSignal<Option<PermitRequirement>> = RwSignal::new(None);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match super::super::api::fetch_requirements().await {
                Ok(data) => {
                    all_items.set(data);
                    set_is_loaded.set(true);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to load permit requirements: {}", e)));
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| {
        if !is_loaded.get_untracked() {
            load_data();
        }
    });

    let visible_items = Signal::derive(move || {
        let query = search.get().trim().to_lowercase();
        let mut items = all_items.get();
        if !query.is_empty() {
            items.retain(|r| {
                r.work_type.to_lowercase().contains(&query)
                    || r.required_card_type_name.to_lowercase().contains(&query)
                    || contains_opt(&r.required_training, &query)
            });
        }
        items.sort_by(|a, b| a.work_type.to_lowercase().cmp(&b.work_type.to_lowercase()));
        items
    });

    view! {
        <PageFrame page_id="a006_permit_requirement--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Permit requirements"</h1>
                    <Badge>
                        {move || visible_items.get().len().to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create_form.set(true)
                    >
                        {icon("plus")}
                        " New requirement"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 320px;">
                                <Input
                                    value=search
                                    placeholder="Work type, card type or training..."
                                />
                            </div>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id="a006-permit-requirement-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=160.0>"Work type"</TableHeaderCell>
                                <TableHeaderCell min_width=150.0>"Required card type"</TableHeaderCell>
                                <TableHeaderCell min_width=150.0>"Required training"</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>"Notes"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || visible_items.get()
                                key=|r| r.requirement_id
                                children=move |req| {
                                    let for_edit = req.clone();
                                    let for_delete = req.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{req.work_type.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {req.required_card_type_name.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {req.required_training.clone().unwrap_or_else(|| "-".into())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {req.notes.clone().unwrap_or_else(|| "-".into())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing.set(Some(for_edit.clone()))
                                                    attr:title="Edit"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| deleting.set(Some(for_delete.clone()))
                                                    attr:title="Delete"
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                {move || if show_create_form.get() {
                    view! {
                        <super::details::PermitRequirementForm
                            requirement=None
                            on_close=move || set_show_create_form.set(false)
                            on_saved=move || {
                                set_show_create_form.set(false);
                                load_data();
                            }
                        />
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }}

                {move || editing.get().map(|req| view! {
                    <super::details::PermitRequirementForm
                        requirement=Some(req)
                        on_close=move || editing.set(None)
                        on_saved=move || { editing.set(None); load_data(); }
                    />
                })}

                {move || deleting.get().map(|req| view! {
                    <super::details::DeletePermitRequirementDialog
                        requirement=req
                        on_close=move || deleting.set(None)
                        on_deleted=move || { deleting.set(None); load_data(); }
                    />
                })}
            </div>
        </PageFrame>
    }
}
