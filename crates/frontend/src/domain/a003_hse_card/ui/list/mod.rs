mod state;

use contracts::domain::a003_hse_card::HseCard;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Select;
use crate::shared::date_utils::{days_between, format_date, today_iso};
use crate::shared::files::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    contains_opt, get_sort_class, get_sort_indicator, page_count, page_slice, sort_list, Sortable,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::status_utils::validity_status_variant;
use state::{create_state, HseCardListState};

impl Sortable for HseCard {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "card_number" => self.card_number.cmp(&other.card_number),
            "user_name" => self
                .user_name
                .to_lowercase()
                .cmp(&other.user_name.to_lowercase()),
            "card_type_name" => self.card_type_name.cmp(&other.card_type_name),
            "issued_date" => self.issued_date.cmp(&other.issued_date),
            "expired_date" => self.expired_date.cmp(&other.expired_date),
            "status" => self.status.cmp(&other.status),
            _ => self.card_number.cmp(&other.card_number),
        }
    }
}

impl CsvExportable for HseCard {
    fn headers() -> Vec<&'static str> {
        vec!["Card number", "Holder", "Type", "Issued by", "Issued", "Expires", "Status", "Notes"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.card_number.clone(),
            self.user_name.clone(),
            self.card_type_name.clone(),
            self.issued_by_name.clone(),
            self.issued_date.clone(),
            self.expired_date.clone(),
            self.status.clone(),
            self.notes.clone().unwrap_or_default(),
        ]
    }
}

fn recalc_pagination(state: &mut HseCardListState) {
    state.total_pages = page_count(state.total_count, state.page_size);
    if state.page >= state.total_pages {
        state.page = state.total_pages.saturating_sub(1);
    }
}

fn matches_filters(card: &HseCard, state: &HseCardListState) -> bool {
    let query = state.search_query.to_lowercase();
    let matches_search = query.is_empty()
        || card.card_number.to_lowercase().contains(&query)
        || card.user_name.to_lowercase().contains(&query)
        || card.card_type_name.to_lowercase().contains(&query)
        || contains_opt(&card.notes, &query);

    let matches_status =
        state.status_filter.is_empty() || card.status.eq_ignore_ascii_case(&state.status_filter);
    let matches_type = state.card_type_filter.is_empty()
        || card.card_type_name.eq_ignore_ascii_case(&state.card_type_filter);

    matches_search && matches_status && matches_type
}

/// Expiry marker shown next to the expiry date: expired, or expiring
/// within 30 days.
fn expiry_marker(card: &HseCard, today: &str) -> Option<(&'static str, String)> {
    let days = days_between(today, &card.expired_date)?;
    if days < 0 {
        Some(("badge badge--error", "Expired".to_string()))
    } else if days <= 30 {
        Some(("badge badge--warning", format!("{} d left", days)))
    } else {
        None
    }
}

#[component]
pub fn HseCardList() -> impl IntoView {
    let state = create_state();
    let all_cards: RwSignal<Vec<HseCard>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (show_create_form, set_show_create_form) = signal(false);
    let editing_card: RwSignal<Option<HseCard>> = RwSignal::new(None);
    let deleting_card: RwSignal<Option<HseCard>> = RwSignal::new(None);
    let renewing_card: RwSignal<Option<HseCard>> = RwSignal::new(None);
    let printing_card: RwSignal<Option<HseCard>> = RwSignal::new(None);

    let refresh_view = move || {
        let mut data = all_cards.get_untracked();
        state.update(|s| {
            data.retain(|c| matches_filters(c, s));
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
            match super::super::api::fetch_cards().await {
                Ok(data) => {
                    all_cards.set(data);
                    state.update(|s| {
                        s.page = 0;
                        s.is_loaded = true;
                    });
                    refresh_view();
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to load HSE cards: {}", e)));
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

    let export_csv = move |_| {
        let mut data = all_cards.get_untracked();
        state.with_untracked(|s| {
            data.retain(|c| matches_filters(c, s));
        });
        if let Err(e) = export_to_csv(&data, "hse-cards.csv") {
            set_error.set(Some(e));
        }
    };

    let status_options = Signal::derive(move || {
        let mut statuses: Vec<String> =
            all_cards.get().iter().map(|c| c.status.clone()).collect();
        statuses.sort();
        statuses.dedup();
        let mut options = vec![(String::new(), "All statuses".to_string())];
        options.extend(statuses.into_iter().map(|s| (s.clone(), s)));
        options
    });

    let type_options = Signal::derive(move || {
        let mut types: Vec<String> =
            all_cards.get().iter().map(|c| c.card_type_name.clone()).collect();
        types.sort();
        types.dedup();
        let mut options = vec![(String::new(), "All card types".to_string())];
        options.extend(types.into_iter().map(|t| (t.clone(), t)));
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
        <PageFrame page_id="a003_hse_card--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"HSE cards"</h1>
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
                        " Issue card"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=export_csv
                    >
                        {icon("download")}
                        " Export"
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
                                    placeholder="Card number, holder or type..."
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
                                value=Signal::derive(move || state.get().card_type_filter)
                                options=type_options
                                on_change=Callback::new(move |value: String| {
                                    state.update(|s| { s.card_type_filter = value; s.page = 0; });
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
                                        s.card_type_filter = String::new();
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
                    <Table attr:id="a003-hse-card-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=120.0>
                                    {sortable_header("card_number", "Card number")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=160.0>
                                    {sortable_header("user_name", "Holder")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=130.0>
                                    {sortable_header("card_type_name", "Type")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Issued by"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>
                                    {sortable_header("issued_date", "Issued")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=150.0>
                                    {sortable_header("expired_date", "Expires")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=90.0>
                                    {sortable_header("status", "Status")}
                                </TableHeaderCell>
                                <TableHeaderCell min_width=150.0>
                                </TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|c| c.card_id
                                children=move |card| {
                                    let for_edit = card.clone();
                                    let for_delete = card.clone();
                                    let for_renew = card.clone();
                                    let for_print = card.clone();
                                    let today = today_iso();
                                    let marker = expiry_marker(&card, &today);
                                    let status_variant = validity_status_variant(&card.status);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{card.card_number.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {card.user_name.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {card.card_type_name.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {card.issued_by_name.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_date(&card.issued_date)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_date(&card.expired_date)}
                                                    {marker.map(|(class, text)| view! {
                                                        <span class=class style="margin-left: 6px;">{text}</span>
                                                    })}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=format!("badge badge--{}", status_variant)>
                                                        {card.status.clone()}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| printing_card.set(Some(for_print.clone()))
                                                    attr:title="Print"
                                                >
                                                    {icon("printer")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| renewing_card.set(Some(for_renew.clone()))
                                                    attr:title="Renew"
                                                >
                                                    {icon("refresh")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing_card.set(Some(for_edit.clone()))
                                                    attr:title="Edit"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| deleting_card.set(Some(for_delete.clone()))
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
                        <super::details::CreateCardForm
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

                {move || editing_card.get().map(|card| view! {
                    <super::details::EditCardForm
                        card=card
                        on_close=move || editing_card.set(None)
                        on_saved=move || { editing_card.set(None); load_data(); }
                    />
                })}

                {move || renewing_card.get().map(|card| view! {
                    <super::details::RenewCardDialog
                        card=card
                        on_close=move || renewing_card.set(None)
                        on_renewed=move || { renewing_card.set(None); load_data(); }
                    />
                })}

                {move || deleting_card.get().map(|card| view! {
                    <super::details::DeleteCardDialog
                        card=card
                        on_close=move || deleting_card.set(None)
                        on_deleted=move || { deleting_card.set(None); load_data(); }
                    />
                })}

                {move || printing_card.get().map(|card| view! {
                    <super::print::PrintCardDialog
                        card=card
                        on_close=move || printing_card.set(None)
                    />
                })}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(expired: &str) -> HseCard {
        HseCard {
            card_id: 1,
            user_id: 1,
            user_name: "Budi".into(),
            card_number: "HSE-001".into(),
            card_type_id: 1,
            card_type_name: "Safety".into(),
            issued_by: 2,
            issued_by_name: "Siti".into(),
            issued_date: "2025-01-01".into(),
            expired_date: expired.into(),
            status: "Active".into(),
            notes: None,
        }
    }

    #[test]
    fn expiry_marker_flags_expired_and_expiring() {
        let today = "2025-06-15";
        assert_eq!(
            expiry_marker(&card("2025-06-01"), today).unwrap().1,
            "Expired"
        );
        assert_eq!(
            expiry_marker(&card("2025-06-30"), today).unwrap().1,
            "15 d left"
        );
        assert!(expiry_marker(&card("2026-01-01"), today).is_none());
    }
}
