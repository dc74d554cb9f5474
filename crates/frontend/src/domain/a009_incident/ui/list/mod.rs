use contracts::domain::a009_incident::{Incident, InvestigationPhase};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    contains_opt, get_sort_class, get_sort_indicator, page_count, page_slice, sort_list, Sortable,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::status_utils::incident_status_variant;

impl Sortable for Incident {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "incident_number" => self.incident_number.cmp(&other.incident_number),
            "user_name" => self
                .user_name
                .to_lowercase()
                .cmp(&other.user_name.to_lowercase()),
            "date" => self.date.cmp(&other.date),
            "category" => self.category.cmp(&other.category),
            "status" => self.status.cmp(&other.status),
            _ => self.incident_number.cmp(&other.incident_number),
        }
    }
}

#[derive(Clone, Debug)]
struct IncidentListState {
    items: Vec<Incident>,
    search_query: String,
    sort_field: String,
    sort_ascending: bool,
    page: usize,
    page_size: usize,
    total_count: usize,
    total_pages: usize,
    is_loaded: bool,
}

impl Default for IncidentListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            sort_field: "date".to_string(),
            sort_ascending: false,
            page: 0,
            page_size: 25,
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

fn recalc_pagination(state: &mut IncidentListState) {
    state.total_pages = page_count(state.total_count, state.page_size);
    if state.page >= state.total_pages {
        state.page = state.total_pages.saturating_sub(1);
    }
}

fn phase_badge(phase: InvestigationPhase) -> (&'static str, &'static str) {
    match phase {
        InvestigationPhase::NotStarted => ("badge badge--neutral", "Not investigated"),
        InvestigationPhase::InProgress => ("badge badge--primary", "Under investigation"),
        InvestigationPhase::Completed => ("badge badge--success", "Completed"),
    }
}

#[component]
pub fn IncidentList() -> impl IntoView {
    let state = RwSignal::new(IncidentListState::default());
    let all_incidents: RwSignal<Vec<Incident>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (show_create_form, set_show_create_form) = signal(false);
    let viewing: RwSignal<Option<Incident>> = RwSignal::new(None);
    let viewing_investigation: RwSignal<Option<Incident>> = RwSignal::new(None);
    let editing: RwSignal<Option<Incident>> = RwSignal::new(None);
    let deleting: RwSignal<Option<Incident>> = RwSignal::new(None);

    let refresh_view = move || {
        let query = state.with_untracked(|s| s.search_query.to_lowercase());
        let mut data = all_incidents.get_untracked();
        if !query.is_empty() {
            data.retain(|i| {
                i.incident_number.to_lowercase().contains(&query)
                    || i.user_name.to_lowercase().contains(&query)
                    || i.category.to_lowercase().contains(&query)
                    || i.status.to_lowercase().contains(&query)
                    || contains_opt(&i.location, &query)
                    || contains_opt(&i.description, &query)
            });
        }
        state.update(|s| {
            sort_list(&mut data, &s.sort_field, s.sort_ascending);
            s.total_count = data.len();
            recalc_pagination(s);
            s.items = page_slice(&data, s.page, s.page_size);
        });
    };

    // The incident list endpoint does not embed investigations, so each
    // row is enriched with its investigation after the base fetch. A
    // missing investigation is not an error.
    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match super::super::api::fetch_incidents().await {
                Ok(mut data) => {
                    for incident in data.iter_mut() {
                        if let Ok(summary) =
                            crate::domain::a010_investigation::api::fetch_investigation_for_incident(
                                incident.incident_id,
                            )
                            .await
                        {
                            incident.investigation = Some(summary);
                        }
                    }
                    all_incidents.set(data);
                    state.update(|s| {
                        s.page = 0;
                        s.is_loaded = true;
                    });
                    refresh_view();
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to load incidents: {}", e)));
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

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
            refresh_view();
        }
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

    let sortable_header = move |field: &'static str, title: &'static str| {
        view! {
            <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort(field)>
                {title}
                <span class=move || state.with(|s| get_sort_class(&s.sort_field, field))>
                    {move || get_sort_indicator(&state.with(|s| s.sort_field.clone()), field, state.with(|s| s.sort_ascending))}
                </span>
            </div>
        }
    };

    view! {
        <PageFrame page_id="a009_incident--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Incident reports"</h1>
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
                        " Report incident"
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
                            <span class="filter-panel__title">"Search"</span>
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
                            <div style="flex: 1; max-width: 320px;">
                                <Input
                                    value=search_signal
                                    placeholder="Number, reporter, category, location..."
                                />
                            </div>
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
                                    state.update(|s| { s.search_query = String::new(); s.page = 0; });
                                    refresh_view();
                                }
                            >
                                "Clear"
                            </Button>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id="a009-incident-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=120.0>
                                    {sortable_header("incident_number", "Number")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=140.0>
                                    {sortable_header("user_name", "Reporter")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=100.0>
                                    {sortable_header("date", "Date")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Location"</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>
                                    {sortable_header("category", "Category")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=110.0>
                                    {sortable_header("status", "Status")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=150.0>"Investigation"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>
                                </TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|i| i.incident_id
                                children=move |incident| {
                                    let for_view = incident.clone();
                                    let for_phase = incident.clone();
                                    let for_edit = incident.clone();
                                    let for_delete = incident.clone();
                                    let status_variant = incident_status_variant(&incident.status);
                                    let (phase_class, phase_text) = phase_badge(incident.investigation_phase());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-weight: 500;">{incident.incident_number.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {incident.user_name.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_date(&incident.date)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {incident.location.clone().unwrap_or_else(|| "-".into())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {incident.category.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=format!("badge badge--{}", status_variant)>
                                                        {incident.status.clone()}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span
                                                        class=phase_class
                                                        style="cursor: pointer;"
                                                        on:click=move |_| viewing_investigation.set(Some(for_phase.clone()))
                                                    >
                                                        {phase_text}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| viewing.set(Some(for_view.clone()))
                                                    attr:title="View"
                                                >
                                                    {icon("eye")}
                                                </Button>
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
                        <super::details::CreateIncidentForm
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

                {move || viewing.get().map(|incident| view! {
                    <super::details::ViewIncidentDialog
                        incident=incident
                        on_close=move || viewing.set(None)
                    />
                })}

                {move || viewing_investigation.get().map(|incident| view! {
                    <super::details::InvestigationSummaryDialog
                        incident=incident
                        on_close=move || viewing_investigation.set(None)
                    />
                })}

                {move || editing.get().map(|incident| view! {
                    <super::details::EditIncidentForm
                        incident=incident
                        on_close=move || editing.set(None)
                        on_saved=move || { editing.set(None); load_data(); }
                    />
                })}

                {move || deleting.get().map(|incident| view! {
                    <super::details::DeleteIncidentDialog
                        incident=incident
                        on_close=move || deleting.set(None)
                        on_deleted=move || { deleting.set(None); load_data(); }
                    />
                })}
            </div>
        </PageFrame>
    }
}
