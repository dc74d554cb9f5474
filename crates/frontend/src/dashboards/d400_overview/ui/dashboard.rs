//! Overview dashboard: headline counts over the main registers plus the
//! cards expiring within the next 30 days.

use contracts::domain::a003_hse_card::HseCard;
use contracts::domain::a005_permit_to_work::PermitDetail;
use contracts::domain::a009_incident::Incident;
use contracts::domain::a004_training::Training;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::date_utils::{days_between, format_date, today_iso};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

fn is_open_incident(incident: &Incident) -> bool {
    !matches!(
        incident.status.to_lowercase().as_str(),
        "resolved" | "closed"
    )
}

fn expires_within(card: &HseCard, today: &str, days: i64) -> bool {
    matches!(days_between(today, &card.expired_date), Some(d) if (0..=days).contains(&d))
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let cards: RwSignal<Option<Vec<HseCard>>> = RwSignal::new(None);
    let trainings: RwSignal<Option<Vec<Training>>> = RwSignal::new(None);
    let permits: RwSignal<Option<Vec<PermitDetail>>> = RwSignal::new(None);
    let incidents: RwSignal<Option<Vec<Incident>>> = RwSignal::new(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loaded, set_is_loaded) = signal(false);

    let load_data = move || {
        set_error.set(None);
        spawn_local(async move {
            match crate::domain::a003_hse_card::api::fetch_cards().await {
                Ok(data) => cards.set(Some(data)),
                Err(e) => set_error.set(Some(e)),
            }
            match crate::domain::a004_training::api::fetch_trainings().await {
                Ok(data) => trainings.set(Some(data)),
                Err(e) => set_error.set(Some(e)),
            }
            match crate::domain::a005_permit_to_work::api::fetch_permits().await {
                Ok(data) => permits.set(Some(data)),
                Err(e) => set_error.set(Some(e)),
            }
            match crate::domain::a009_incident::api::fetch_incidents().await {
                Ok(data) => incidents.set(Some(data)),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    Effect::new(move |_| {
        if !is_loaded.get_untracked() {
            set_is_loaded.set(true);
            load_data();
        }
    });

    let total_cards = Signal::derive(move || cards.get().map(|c| c.len()));
    let expiring_cards = Signal::derive(move || {
        cards.get().map(|c| {
            let today = today_iso();
            c.iter().filter(|card| expires_within(card, &today, 30)).count()
        })
    });
    let valid_trainings = Signal::derive(move || {
        trainings
            .get()
            .map(|t| t.iter().filter(|tr| !tr.status.eq_ignore_ascii_case("expired")).count())
    });
    let pending_permits = Signal::derive(move || {
        permits
            .get()
            .map(|p| p.iter().filter(|permit| permit.is_pending()).count())
    });
    let open_incidents = Signal::derive(move || {
        incidents
            .get()
            .map(|i| i.iter().filter(|inc| is_open_incident(inc)).count())
    });

    let expiring_rows = Signal::derive(move || {
        let today = today_iso();
        let mut rows: Vec<HseCard> = cards
            .get()
            .unwrap_or_default()
            .into_iter()
            .filter(|card| expires_within(card, &today, 30))
            .collect();
        rows.sort_by(|a, b| a.expired_date.cmp(&b.expired_date));
        rows
    });

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="stat-grid">
                    <StatCard
                        label="HSE cards"
                        icon_name="credit-card"
                        value=total_cards
                        tone=Signal::derive(move || StatTone::Neutral)
                        subtitle=Signal::derive(move || {
                            expiring_cards.get().map(|n| format!("{} expiring within 30 days", n))
                        })
                    />
                    <StatCard
                        label="Valid trainings"
                        icon_name="book-open"
                        value=valid_trainings
                        tone=Signal::derive(move || StatTone::Good)
                    />
                    <StatCard
                        label="Permits awaiting approval"
                        icon_name="file-text"
                        value=pending_permits
                        tone=Signal::derive(move || {
                            match pending_permits.get() {
                                Some(n) if n > 0 => StatTone::Warning,
                                _ => StatTone::Neutral,
                            }
                        })
                    />
                    <StatCard
                        label="Open incidents"
                        icon_name="alert-triangle"
                        value=open_incidents
                        tone=Signal::derive(move || {
                            match open_incidents.get() {
                                Some(n) if n > 0 => StatTone::Bad,
                                _ => StatTone::Good,
                            }
                        })
                    />
                </div>

                <h3 class="page__section-title">"Cards expiring soon"</h3>
                {move || {
                    let rows = expiring_rows.get();
                    if rows.is_empty() {
                        view! { <p class="placeholder">"No cards expire within the next 30 days."</p> }.into_any()
                    } else {
                        view! {
                            <div class="table-wrapper">
                                <Table attr:id="d400-expiring-cards-table" attr:style="width: 100%;">
                                    <TableHeader>
                                        <TableRow>
                                            <TableHeaderCell>"Card number"</TableHeaderCell>
                                            <TableHeaderCell>"Holder"</TableHeaderCell>
                                            <TableHeaderCell>"Type"</TableHeaderCell>
                                            <TableHeaderCell>"Expires"</TableHeaderCell>
                                        </TableRow>
                                    </TableHeader>
                                    <TableBody>
                                        {rows.into_iter().map(|card| view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span style="font-weight: 500;">{card.card_number.clone()}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{card.user_name.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{card.card_type_name.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span class="badge badge--warning">{format_date(&card.expired_date)}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }).collect_view()}
                                    </TableBody>
                                </Table>
                            </div>
                        }.into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn incident(status: &str) -> Incident {
        Incident {
            incident_id: 1,
            incident_number: "INC-1".into(),
            user_id: 1,
            user_name: String::new(),
            date: "2025-01-01".into(),
            location: None,
            category: "Near Miss".into(),
            description: None,
            photo_url: None,
            status: status.into(),
            investigation: None,
        }
    }

    #[test]
    fn open_incident_classification() {
        assert!(is_open_incident(&incident("reported")));
        assert!(is_open_incident(&incident("investigating")));
        assert!(!is_open_incident(&incident("Resolved")));
        assert!(!is_open_incident(&incident("closed")));
    }
}
