mod state;

use contracts::domain::a001_user::{User, USER_ROLES, USER_STATUSES};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Select;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    contains_opt, get_sort_class, get_sort_indicator, page_count, page_slice, sort_list, Sortable,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::status_utils::validity_status_variant;
use state::{create_state, UserListState};

impl Sortable for User {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "user_name" => self
                .user_name
                .to_lowercase()
                .cmp(&other.user_name.to_lowercase()),
            "email" => self
                .email
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .cmp(&other.email.as_deref().unwrap_or("").to_lowercase()),
            "role" => self.role.cmp(&other.role),
            "department" => self.department.cmp(&other.department),
            "status" => self.status.cmp(&other.status),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => self.name.cmp(&other.name),
        }
    }
}

fn recalc_pagination(state: &mut UserListState) {
    state.total_pages = page_count(state.total_count, state.page_size);
    if state.page >= state.total_pages {
        state.page = state.total_pages.saturating_sub(1);
    }
}

fn matches_filters(user: &User, state: &UserListState) -> bool {
    let query = state.search_query.to_lowercase();
    let matches_search = query.is_empty()
        || user.name.to_lowercase().contains(&query)
        || user.user_name.to_lowercase().contains(&query)
        || user.department.to_lowercase().contains(&query)
        || contains_opt(&user.email, &query);

    let matches_role =
        state.role_filter.is_empty() || user.role.eq_ignore_ascii_case(&state.role_filter);
    let matches_status =
        state.status_filter.is_empty() || user.status.eq_ignore_ascii_case(&state.status_filter);
    let matches_department = state.department_filter.is_empty()
        || user.department.eq_ignore_ascii_case(&state.department_filter);

    matches_search && matches_role && matches_status && matches_department
}

#[component]
pub fn UserList() -> impl IntoView {
    let state = create_state();
    let all_users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (show_create_form, set_show_create_form) = signal(false);
    let editing_user: RwSignal<Option<User>> = RwSignal::new(None);
    let deleting_user: RwSignal<Option<User>> = RwSignal::new(None);

    let refresh_view = move || {
        let mut data = all_users.get_untracked();
        state.update(|s| {
            data.retain(|u| matches_filters(u, s));
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
            match super::super::api::fetch_users().await {
                Ok(data) => {
                    all_users.set(data);
                    state.update(|s| {
                        s.page = 0;
                        s.is_loaded = true;
                    });
                    refresh_view();
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to load users: {}", e)));
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

    let clear_filters = move || {
        search_signal.set(String::new());
        state.update(|s| {
            s.search_query = String::new();
            s.role_filter = String::new();
            s.status_filter = String::new();
            s.department_filter = String::new();
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

    // Departments present in the loaded data, for the department filter.
    let department_options = Signal::derive(move || {
        let mut departments: Vec<String> = all_users
            .get()
            .iter()
            .map(|u| u.department.clone())
            .filter(|d| !d.is_empty())
            .collect();
        departments.sort();
        departments.dedup();
        let mut options = vec![(String::new(), "All departments".to_string())];
        options.extend(departments.into_iter().map(|d| (d.clone(), d)));
        options
    });

    let role_options = Signal::derive(move || {
        let mut options = vec![(String::new(), "All roles".to_string())];
        options.extend(USER_ROLES.iter().map(|r| (r.to_string(), r.to_string())));
        options
    });

    let status_options = Signal::derive(move || {
        let mut options = vec![(String::new(), "All statuses".to_string())];
        options.extend(USER_STATUSES.iter().map(|s| (s.to_string(), s.to_string())));
        options
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
        <PageFrame page_id="a001_user--list" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Users"</h1>
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
                        " New user"
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
                                    placeholder="Name, username, email or department..."
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
                                value=Signal::derive(move || state.get().status_filter)
                                options=status_options
                                on_change=Callback::new(move |value: String| {
                                    state.update(|s| { s.status_filter = value; s.page = 0; });
                                    refresh_view();
                                })
                            />
                            <Select
                                value=Signal::derive(move || state.get().department_filter)
                                options=department_options
                                on_change=Callback::new(move |value: String| {
                                    state.update(|s| { s.department_filter = value; s.page = 0; });
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
                                on_click=move |_| clear_filters()
                            >
                                "Clear"
                            </Button>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id="a001-user-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=160.0>
                                    {sortable_header("name", "Name")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=120.0>
                                    {sortable_header("user_name", "Username")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=160.0>
                                    {sortable_header("email", "Email")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=100.0>
                                    {sortable_header("role", "Role")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=120.0>
                                    {sortable_header("department", "Department")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=90.0>
                                    {sortable_header("status", "Status")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=130.0>
                                    {sortable_header("created_at", "Created")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=90.0>
                                </TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|u| u.user_id
                                children=move |user| {
                                    let user_for_edit = user.clone();
                                    let user_for_delete = user.clone();
                                    let created = format_datetime(&user.created_at);
                                    let status_variant = validity_status_variant(&user.status);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{user.name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {user.user_name.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {user.email.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="badge badge--neutral">{user.role.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {user.department.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=format!("badge badge--{}", status_variant)>
                                                        {user.status.clone()}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing_user.set(Some(user_for_edit.clone()))
                                                    attr:title="Edit"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| deleting_user.set(Some(user_for_delete.clone()))
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
                        <super::details::CreateUserForm
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

                {move || editing_user.get().map(|user| view! {
                    <super::details::EditUserForm
                        user=user
                        on_close=move || editing_user.set(None)
                        on_saved=move || { editing_user.set(None); load_data(); }
                    />
                })}

                {move || deleting_user.get().map(|user| view! {
                    <super::details::DeleteUserDialog
                        user=user
                        on_close=move || deleting_user.set(None)
                        on_deleted=move || { deleting_user.set(None); load_data(); }
                    />
                })}
            </div>
        </PageFrame>
    }
}
