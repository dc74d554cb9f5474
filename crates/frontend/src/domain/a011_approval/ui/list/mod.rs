mod state;

use contracts::domain::a011_approval::{ApprovalWithPermit, DECISIONS};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

pub use state::ApprovalAction;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Select;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_opt, page_count, page_slice};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::status_utils::decision_variant;
use state::{create_state, ApprovalListState};

fn matches_filters(row: &ApprovalWithPermit, state: &ApprovalListState) -> bool {
    let approval = &row.approval;
    let query = state.search_query.to_lowercase();
    let matches_search = query.is_empty()
        || approval.approver_name.to_lowercase().contains(&query)
        || approval.role.to_lowercase().contains(&query)
        || approval.decision.to_lowercase().contains(&query)
        || approval.permit_id.to_string().contains(&query)
        || approval.approval_id.to_string().contains(&query)
        || contains_opt(&approval.comment, &query)
        || row
            .permit_data
            .as_ref()
            .map(|p| p.work_type.to_lowercase().contains(&query))
            .unwrap_or(false);

    let matches_role =
        state.role_filter.is_empty() || approval.role.eq_ignore_ascii_case(&state.role_filter);
    let matches_decision = state.decision_filter.is_empty()
        || approval.decision.eq_ignore_ascii_case(&state.decision_filter);

    matches_search && matches_role && matches_decision
}

fn recalc_pagination(state: &mut ApprovalListState) {
    state.total_pages = page_count(state.total_count, state.page_size);
    if state.page >= state.total_pages {
        state.page = state.total_pages.saturating_sub(1);
    }
}

#[component]
pub fn ApprovalList() -> impl IntoView {
    let state = create_state();
    let all_approvals: RwSignal<Vec<ApprovalWithPermit>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let action_target: RwSignal<Option<(ApprovalAction, ApprovalWithPermit)>> =
        RwSignal::new(None);
    let editing: RwSignal<Option<ApprovalWithPermit>> = RwSignal::new(None);
    let deleting: RwSignal<Option<ApprovalWithPermit>> = RwSignal::new(None);

    let refresh_view = move || {
        let mut data = all_approvals.get_untracked();
        state.update(|s| {
            data.retain(|a| matches_filters(a, s));
            data.sort_by(|a, b| b.approval.approval_id.cmp(&a.approval.approval_id));
            s.total_count = data.len();
            recalc_pagination(s);
            s.items = page_slice(&data, s.page, s.page_size);
        });
    };

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match super::super::api::fetch_approvals_with_permit().await {
                Ok(data) => {
                    all_approvals.set(data);
                    state.update(|s| {
                        s.page = 0;
                        s.is_loaded = true;
                    });
                    refresh_view();
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to load approvals: {}", e)));
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

    // Roles present in the loaded data.
    let role_options = Signal::derive(move || {
        let mut roles: Vec<String> = all_approvals
            .get()
            .iter()
            .map(|a| a.approval.role.clone())
            .collect();
        roles.sort();
        roles.dedup();
        let mut options = vec![(String::new(), "All roles".to_string())];
        options.extend(roles.into_iter().map(|r| (r.clone(), r)));
        options
    });

    let decision_options = Signal::derive(move || {
        let mut options = vec![(String::new(), "All decisions".to_string())];
        options.extend(DECISIONS.iter().map(|d| (d.to_lowercase(), d.to_string())));
        options
    });

    view! {
        <PageFrame page_id="a011_approval--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Approvals"</h1>
                    <Badge>
                        {move || state.get().total_count.to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
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
                                    placeholder="Approver, permit, decision..."
                                />
                            </div>
                            <Select
                                value=Signal::derive(move || state.get().role_filter)
                                options=role_options
                                on_change=Callback::new(move |value: String| {
                                    state.update(|s| { s.role_filter = value; s.page = 0; });
                                    refresh_view();
                                })
                            />
                            <Select
                                value=Signal::derive(move || state.get().decision_filter)
                                options=decision_options
                                on_change=Callback::new(move |value: String| {
                                    state.update(|s| { s.decision_filter = value; s.page = 0; });
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
                                        s.role_filter = String::new();
                                        s.decision_filter = String::new();
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
                    <Table attr:id="a011-approval-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=60.0>"ID"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Permit"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Approver"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Role"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Decision"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Comment"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Decision date"</TableHeaderCell>
                                <TableHeaderCell min_width=170.0>
                                </TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|a| a.approval.approval_id
                                children=move |row| {
                                    let approval = row.approval.clone();
                                    let permit_label = row
                                        .permit_data
                                        .as_ref()
                                        .map(|p| format!("#{} {}", p.permit_id, p.work_type))
                                        .unwrap_or_else(|| format!("#{}", approval.permit_id));
                                    let variant = decision_variant(&approval.decision);
                                    let for_approve = row.clone();
                                    let for_reject = row.clone();
                                    let for_pending = row.clone();
                                    let for_edit = row.clone();
                                    let for_delete = row.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-weight: 500;">{approval.approval_id}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{permit_label}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{approval.approver_name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{approval.role.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=format!("badge badge--{}", variant)>
                                                        {approval.decision.clone()}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {approval.comment.clone().unwrap_or_else(|| "-".into())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_datetime(&approval.decision_date)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| action_target.set(Some((ApprovalAction::Approve, for_approve.clone())))
                                                    attr:title="Approve"
                                                >
                                                    {icon("check-square")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| action_target.set(Some((ApprovalAction::Reject, for_reject.clone())))
                                                    attr:title="Reject"
                                                >
                                                    {icon("x")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| action_target.set(Some((ApprovalAction::SetPending, for_pending.clone())))
                                                    attr:title="Set pending"
                                                >
                                                    {icon("refresh")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing.set(Some(for_edit.clone()))
                                                    attr:title="Edit decision"
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

                {move || action_target.get().map(|(action, row)| view! {
                    <super::details::DecisionDialog
                        action=action
                        approval=row.approval.clone()
                        on_close=move || action_target.set(None)
                        on_done=move || { action_target.set(None); load_data(); }
                    />
                })}

                {move || editing.get().map(|row| view! {
                    <super::details::EditApprovalDialog
                        approval=row.approval.clone()
                        on_close=move || editing.set(None)
                        on_saved=move || { editing.set(None); load_data(); }
                    />
                })}

                {move || deleting.get().map(|row| view! {
                    <super::details::DeleteApprovalDialog
                        approval=row.approval.clone()
                        on_close=move || deleting.set(None)
                        on_deleted=move || { deleting.set(None); load_data(); }
                    />
                })}
            </div>
        </PageFrame>
    }
}
