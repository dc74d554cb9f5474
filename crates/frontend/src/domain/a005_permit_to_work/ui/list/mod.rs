mod state;

use contracts::domain::a005_permit_to_work::PermitDetail;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Select;
use crate::shared::date_utils::{format_date_range, format_datetime, is_after_day, is_on_day, today_iso};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    contains_opt, get_sort_class, get_sort_indicator, page_count, page_slice, sort_list, Sortable,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::status_utils::{permit_status_text, permit_status_variant};
use state::{create_state, DateFilter, PermitListState};

impl Sortable for PermitDetail {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "permit_id" => self.permit_id.cmp(&other.permit_id),
            "user_name" => self
                .user_name
                .to_lowercase()
                .cmp(&other.user_name.to_lowercase()),
            "work_type" => self.work_type.cmp(&other.work_type),
            "start_date" => self.start_date.cmp(&other.start_date),
            "status" => self.status.cmp(&other.status),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => self.permit_id.cmp(&other.permit_id),
        }
    }
}

fn recalc_pagination(state: &mut PermitListState) {
    state.total_pages = page_count(state.total_count, state.page_size);
    if state.page >= state.total_pages {
        state.page = state.total_pages.saturating_sub(1);
    }
}

fn matches_filters(permit: &PermitDetail, state: &PermitListState, today: &str) -> bool {
    let query = state.search_query.to_lowercase();
    let matches_search = query.is_empty()
        || permit.user_name.to_lowercase().contains(&query)
        || permit.work_type.to_lowercase().contains(&query)
        || permit.status.to_lowercase().contains(&query)
        || contains_opt(&permit.location, &query)
        || contains_opt(&permit.required_card_type_name, &query);

    let matches_status = state.status_filter.is_empty()
        || permit.status.eq_ignore_ascii_case(&state.status_filter);

    let matches_date = match state.date_filter {
        DateFilter::All => true,
        DateFilter::Today => is_on_day(&permit.start_date, today),
        DateFilter::Upcoming => is_after_day(&permit.start_date, today),
    };

    matches_search && matches_status && matches_date
}

#[component]
pub fn PermitList() -> impl IntoView {
    let state = create_state();
    let all_permits: RwSignal<Vec<PermitDetail>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (show_create_form, set_show_create_form) = signal(false);
    let viewing_permit: RwSignal<Option<PermitDetail>> = RwSignal::new(None);
    let deleting_permit: RwSignal<Option<PermitDetail>> = RwSignal::new(None);
    let rejecting_permit: RwSignal<Option<PermitDetail>> = RwSignal::new(None);

    let refresh_view = move || {
        let today = today_iso();
        let mut data = all_permits.get_untracked();
        state.update(|s| {
            data.retain(|p| matches_filters(p, s, &today));
            sort_list(&mut data, &s.sort_field, s.sort_ascending);
            s.total_count = data.len();
            recalc_pagination(s);
            s.items = page_slice(&data, s.page, s.page_size);
        });
    };

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match super::super::api::fetch_permits().await {
                Ok(data) => {
                    all_permits.set(data);
                    state.update(|s| {
                        s.page = 0;
                        s.is_loaded = true;
                    });
                    refresh_view();
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to load permits: {}", e)));
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

    let approve = move |permit_id: i64| {
        set_error.set(None);
        spawn_local(async move {
            match super::super::api::approve_permit(permit_id).await {
                Ok(_) => load_data(),
                Err(e) => set_error.set(Some(format!("Failed to approve permit: {}", e))),
            }
        });
    };

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

    let status_options = Signal::derive(move || {
        vec![
            (String::new(), "All statuses".to_string()),
            ("pending".to_string(), "Pending".to_string()),
            ("approved".to_string(), "Approved".to_string()),
            ("rejected".to_string(), "Rejected".to_string()),
        ]
    });

    let date_options = Signal::derive(move || {
        vec![
            ("all".to_string(), "All dates".to_string()),
            ("today".to_string(), "Today".to_string()),
            ("upcoming".to_string(), "Upcoming".to_string()),
        ]
    });

    let date_filter_value = Signal::derive(move || {
        match state.get().date_filter {
            DateFilter::All => "all".to_string(),
            DateFilter::Today => "today".to_string(),
            DateFilter::Upcoming => "upcoming".to_string(),
        }
    });

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
        <PageFrame page_id="a005_permit_to_work--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Work permits"</h1>
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
                        " New permit"
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
                                    placeholder="Applicant, work type, location..."
                                />
                            </div>
                            <Select
                                value=Signal::derive(move || state.get().status_filter)
                                options=status_options
                                on_change=Callback::new(move |value: String| {
                                    state.update(|s| { s.status_filter = value; s.page = 0; });
                                    refresh_view();
                                })
                            />
                            <Select
                                value=date_filter_value
                                options=date_options
                                on_change=Callback::new(move |value: String| {
                                    let filter = match value.as_str() {
                                        "today" => DateFilter::Today,
                                        "upcoming" => DateFilter::Upcoming,
                                        _ => DateFilter::All,
                                    };
                                    state.update(|s| { s.date_filter = filter; s.page = 0; });
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
                                        s.status_filter = String::new();
                                        s.date_filter = DateFilter::All;
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
                    <Table attr:id="a005-permit-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=100.0>
                                    {sortable_header("permit_id", "Permit")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=150.0>
                                    {sortable_header("user_name", "Applicant")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=140.0>
                                    {sortable_header("work_type", "Work type")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Location"</TableHeaderCell>
                                <TableHeaderCell min_width=150.0>
                                    {sortable_header("start_date", "Dates")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=130.0>"Required card"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>
                                    {sortable_header("status", "Status")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=130.0>
                                    {sortable_header("created_at", "Created")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=150.0>
                                </TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|p| p.permit_id
                                children=move |permit| {
                                    let permit_id = permit.permit_id;
                                    let is_pending = permit.is_pending();
                                    let for_view = permit.clone();
                                    let for_delete = permit.clone();
                                    let for_reject = permit.clone();
                                    let status_variant = permit_status_variant(&permit.status);
                                    let status_text = permit_status_text(&permit.status);
                                    let display_number = permit.display_number();
                                    let created = format_datetime(&permit.created_at);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-weight: 500;">{display_number}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {permit.user_name.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {permit.work_type.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {permit.location.clone().unwrap_or_else(|| "-".into())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_date_range(&permit.start_date, &permit.end_date)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {permit.required_card_type_name.clone().unwrap_or_else(|| "None".into())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=format!("badge badge--{}", status_variant)>
                                                        {status_text}
                                                    </span>
                                                    {permit.auto_approved.then(|| view! {
                                                        <span class="table__cell-note">"Auto-approved"</span>
                                                    })}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| viewing_permit.set(Some(for_view.clone()))
                                                    attr:title="Details"
                                                >
                                                    {icon("eye")}
                                                </Button>
                                                {is_pending.then(|| view! {
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| approve(permit_id)
                                                        attr:title="Approve"
                                                    >
                                                        {icon("check-square")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| rejecting_permit.set(Some(for_reject.clone()))
                                                        attr:title="Reject"
                                                    >
                                                        {icon("x")}
                                                    </Button>
                                                })}
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| deleting_permit.set(Some(for_delete.clone()))
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
                        <super::details::PermitCreateForm
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

                {move || viewing_permit.get().map(|permit| view! {
                    <super::details::PermitDetailDialog
                        permit=permit
                        on_close=move || viewing_permit.set(None)
                    />
                })}

                {move || rejecting_permit.get().map(|permit| view! {
                    <super::details::RejectPermitDialog
                        permit=permit
                        on_close=move || rejecting_permit.set(None)
                        on_rejected=move || { rejecting_permit.set(None); load_data(); }
                    />
                })}

                {move || deleting_permit.get().map(|permit| view! {
                    <super::details::DeletePermitDialog
                        permit=permit
                        on_close=move || deleting_permit.set(None)
                        on_deleted=move || { deleting_permit.set(None); load_data(); }
                    />
                })}
            </div>
        </PageFrame>
    }
}
