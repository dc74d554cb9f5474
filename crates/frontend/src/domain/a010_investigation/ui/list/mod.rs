use contracts::domain::a010_investigation::Investigation;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Select;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_opt, page_count, page_slice};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[derive(Clone, Debug)]
struct InvestigationListState {
    items: Vec<Investigation>,
    search_query: String,
    officer_filter: String,
    status_filter: String, // "", "open", "closed"
    page: usize,
    page_size: usize,
    total_count: usize,
    total_pages: usize,
    is_loaded: bool,
}

impl Default for InvestigationListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            officer_filter: String::new(),
            status_filter: String::new(),
            page: 0,
            page_size: 25,
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

fn recalc_pagination(state: &mut InvestigationListState) {
    state.total_pages = page_count(state.total_count, state.page_size);
    if state.page >= state.total_pages {
        state.page = state.total_pages.saturating_sub(1);
    }
}

fn matches_filters(inv: &Investigation, state: &InvestigationListState) -> bool {
    let query = state.search_query.to_lowercase();
    let matches_search = query.is_empty()
        || inv.hse_officer_name.to_lowercase().contains(&query)
        || contains_opt(&inv.incident_title, &query)
        || contains_opt(&inv.root_cause, &query)
        || contains_opt(&inv.corrective_action, &query)
        || contains_opt(&inv.preventive_action, &query);

    let matches_officer = state.officer_filter.is_empty()
        || inv.hse_officer_id.to_string() == state.officer_filter;

    let matches_status = match state.status_filter.as_str() {
        "open" => !inv.is_closed(),
        "closed" => inv.is_closed(),
        _ => true,
    };

    matches_search && matches_officer && matches_status
}

#[component]
pub fn InvestigationList() -> impl IntoView {
    let state = RwSignal::new(InvestigationListState::default());
    let all_investigations: RwSignal<Vec<Investigation>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (show_create_form, set_show_create_form) = signal(false);
    let editing: RwSignal<Option<Investigation>> = RwSignal::new(None);
    let deleting: RwSignal<Option<Investigation>> = RwSignal::new(None);
    let closing: RwSignal<Option<Investigation>> = RwSignal::new(None);

    let refresh_view = move || {
        let mut data = all_investigations.get_untracked();
        state.update(|s| {
            data.retain(|i| matches_filters(i, s));
            data.sort_by(|a, b| b.investigation_id.cmp(&a.investigation_id));
            s.total_count = data.len();
            recalc_pagination(s);
            s.items = page_slice(&data, s.page, s.page_size);
        });
    };

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match super::super::api::fetch_investigations().await {
                Ok(data) => {
                    all_investigations.set(data);
                    state.update(|s| {
                        s.page = 0;
                        s.is_loaded = true;
                    });
                    refresh_view();
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to load investigations: {}", e)));
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let search_signal = RwSignal::new(String::new());

    let apply_search = move || {
        state.update(|s| {
            s.search_query = search_signal.get_untracked();
            s.page = 0;
        });
        refresh_view();
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.page = page);
        refresh_view();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| {
            s.page_size = size;
            s.page = 0;
        });
        refresh_view();
    };

    // Officers present in the loaded data.
    let officer_options = Signal::derive(move || {
        let mut officers: Vec<(i64, String)> = all_investigations
            .get()
            .iter()
            .map(|i| (i.hse_officer_id, i.hse_officer_name.clone()))
            .collect();
        officers.sort();
        officers.dedup();
        let mut options = vec![(String::new(), "All officers".to_string())];
        options.extend(officers.into_iter().map(|(id, name)| (id.to_string(), name)));
        options
    });

    let status_options = Signal::derive(move || {
        vec![
            (String::new(), "All".to_string()),
            ("open".to_string(), "Open".to_string()),
            ("closed".to_string(), "Closed".to_string()),
        ]
    });

    let truncate_finding = |value: &Option<String>| -> String {
        match value.as_deref() {
            Some(v) if v.chars().count() > 60 => {
                let cut: String = v.chars().take(60).collect();
                format!("{}...", cut)
            }
            Some(v) => v.to_string(),
            None => "-".to_string(),
        }
    };

    view! {
        <PageFrame page_id="a010_investigation--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Investigations"</h1>
                    <Badge>
                        {move || state.get().total_count.to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create_form.set(true)
                    >
                        {icon("plus")}
                        " New investigation"
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
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            <span class="filter-panel__title">"Search & filter"</span>
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || state.get().page)
                                total_pages=Signal::derive(move || state.get().total_pages)
                                total_count=Signal::derive(move || state.get().total_count)
                                page_size=Signal::derive(move || state.get().page_size)
                                on_page_change=Callback::new(go_to_page)
                                on_page_size_change=Callback::new(change_page_size)
                            />
                        </div>
                        <div class="filter-panel-header__right">
                        </div>
                    </div>

                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 300px;">
                                <Input
                                    value=search_signal
                                    placeholder="Officer, incident or findings..."
                                />
                            </div>
                            <Select
                                value=Signal::derive(move || state.get().officer_filter)
                                options=officer_options
                                on_change=Callback::new(move |value: String| {
                                    state.update(|s| { s.officer_filter = value; s.page = 0; });
                                    refresh_view();
                                })
                            />
                            <Select
                                value=Signal::derive(move || state.get().status_filter)
                                options=status_options
                                on_change=Callback::new(move |value: String| {
                                    state.update(|s| { s.status_filter = value; s.page = 0; });
                                    refresh_view();
                                })
                            />
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| apply_search()
                                disabled=Signal::derive(move || loading.get())
                            >
                                "Search"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| {
                                    search_signal.set(String::new());
                                    state.update(|s| {
                                        s.search_query = String::new();
                                        s.officer_filter = String::new();
                                        s.status_filter = String::new();
                                        s.page = 0;
                                    });
                                    refresh_view();
                                }
                            >
                                "Clear"
                            </Button>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id="a010-investigation-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=150.0>"Incident"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"HSE officer"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Root cause"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Corrective action"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Closed"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>
                                </TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|i| i.investigation_id
                                children=move |inv| {
                                    let is_closed = inv.is_closed();
                                    let for_edit = inv.clone();
                                    let for_delete = inv.clone();
                                    let for_close = inv.clone();
                                    let incident_label = inv
                                        .incident_title
                                        .clone()
                                        .unwrap_or_else(|| format!("Incident #{}", inv.incident_id));
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{incident_label}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {inv.hse_officer_name.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {truncate_finding(&inv.root_cause)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {truncate_finding(&inv.corrective_action)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if is_closed {
                                                        view! { <span class="badge badge--success">"Closed"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--warning">"Open"</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {inv.close_date.as_deref().map(format_date).unwrap_or_else(|| "-".into())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                {(!is_closed).then(|| view! {
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| closing.set(Some(for_close.clone()))
                                                        attr:title="Close investigation"
                                                    >
                                                        {icon("check-square")}
                                                    </Button>
                                                })}
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
                        <super::details::CreateInvestigationForm
                            on_close=move || set_show_create_form.set(false)
                            on_created=move || {
                                set_show_create_form.set(false);
                                load_data();
                            }
                        />
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }}

                {move || editing.get().map(|inv| view! {
                    <super::details::EditInvestigationForm
                        investigation=inv
                        on_close=move || editing.set(None)
                        on_saved=move || { editing.set(None); load_data(); }
                    />
                })}

                {move || closing.get().map(|inv| view! {
                    <super::details::CloseInvestigationDialog
                        investigation=inv
                        on_close=move || closing.set(None)
                        on_closed=move || { closing.set(None); load_data(); }
                    />
                })}

                {move || deleting.get().map(|inv| view! {
                    <super::details::DeleteInvestigationDialog
                        investigation=inv
                        on_close=move || deleting.set(None)
                        on_deleted=move || { deleting.set(None); load_data(); }
                    />
                })}
            </div>
        </PageFrame>
    }
}
