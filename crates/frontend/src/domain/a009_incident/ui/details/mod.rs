use contracts::domain::a001_user::User;
use contracts::domain::a009_incident::{
    Incident, IncidentCreate, IncidentUpdate, INCIDENT_CATEGORIES,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a009_incident::api;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::ui::{Select, Textarea};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::status_utils::incident_status_variant;

fn category_options() -> Vec<(String, String)> {
    let mut options = vec![(String::new(), "Select category...".to_string())];
    options.extend(
        INCIDENT_CATEGORIES
            .iter()
            .map(|c| (c.to_string(), c.to_string())),
    );
    options
}

fn opt(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}

#[component]
pub fn CreateIncidentForm<F1, F2>(on_close: F1, on_created: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());

    let user_id = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let photo_url = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    spawn_local(async move {
        match crate::domain::a001_user::api::fetch_users().await {
            Ok(data) => users.set(data),
            Err(e) => set_error.set(Some(format!("Failed to load users: {}", e))),
        }
    });

    let on_save = move |_| {
        let dto = IncidentCreate {
            user_id: user_id.get().parse().unwrap_or(0),
            date: date.get(),
            location: opt(location.get()),
            category: category.get(),
            description: opt(description.get()),
            photo_url: opt(photo_url.get()),
        };

        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::create_incident(dto).await {
                Ok(_) => on_created(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to report incident: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <ModalFrame on_close=Callback::new(move |_| on_close())>
            <div class="modal-header">
                <h2 class="modal-title">"Report incident"</h2>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_close()
                >
                    {icon("x")}
                </Button>
            </div>

            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Select
                    label="Reporter *"
                    value=Signal::derive(move || user_id.get())
                    options=Signal::derive(move || {
                        let mut options = vec![(String::new(), "Select reporter...".to_string())];
                        options.extend(users.get().iter().map(|u| (u.user_id.to_string(), u.name.clone())));
                        options
                    })
                    on_change=Callback::new(move |value: String| user_id.set(value))
                />

                <DateInput
                    label="Incident date *"
                    value=Signal::derive(move || date.get())
                    on_change=Callback::new(move |value: String| date.set(value))
                />

                <div class="form__group">
                    <Label>"Location"</Label>
                    <Input value=location disabled=Signal::derive(move || saving.get()) />
                </div>

                <Select
                    label="Category *"
                    value=Signal::derive(move || category.get())
                    options=Signal::derive(category_options)
                    on_change=Callback::new(move |value: String| category.set(value))
                />

                <Textarea
                    label="Description"
                    value=Signal::derive(move || description.get())
                    on_input=Callback::new(move |value: String| description.set(value))
                    placeholder="What happened..."
                />

                <div class="form__group">
                    <Label>"Photo URL"</Label>
                    <Input value=photo_url disabled=Signal::derive(move || saving.get()) />
                </div>
            </div>

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close()
                    disabled=Signal::derive(move || saving.get())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_save
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Saving..." } else { "Report" }}
                </Button>
            </div>
        </ModalFrame>
    }
}

/// Read-only incident view with the photo link and description.
#[component]
pub fn ViewIncidentDialog<F>(incident: Incident, on_close: F) -> impl IntoView
where
    F: Fn() + 'static + Copy + Send + Sync,
{
    let title = format!("Incident {}", incident.incident_number);
    let status_variant = incident_status_variant(&incident.status);

    let detail_row = |label: &'static str, value: String| {
        view! {
            <div class="detail-row">
                <span class="detail-row__label">{label}</span>
                <span class="detail-row__value">{value}</span>
            </div>
        }
    };

    view! {
        <ModalFrame on_close=Callback::new(move |_| on_close()) modal_style="max-width: 560px;".to_string()>
            <div class="modal-header">
                <h2 class="modal-title">{title}</h2>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_close()
                >
                    {icon("x")}
                </Button>
            </div>

            <div class="modal-body">
                <span class=format!("badge badge--{}", status_variant)>{incident.status.clone()}</span>

                {detail_row("Reporter", incident.user_name.clone())}
                {detail_row("Date", format_date(&incident.date))}
                {detail_row("Location", incident.location.clone().unwrap_or_else(|| "-".into()))}
                {detail_row("Category", incident.category.clone())}
                {detail_row(
                    "Description",
                    incident.description.clone().unwrap_or_else(|| "-".into()),
                )}
                {incident.photo_url.clone().map(|url| view! {
                    <div class="detail-row">
                        <span class="detail-row__label">"Photo"</span>
                        <span class="detail-row__value">
                            <a href=url target="_blank" rel="noopener">"Open photo"</a>
                        </span>
                    </div>
                })}
            </div>

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close()
                >
                    "Close"
                </Button>
            </div>
        </ModalFrame>
    }
}

/// Read-only summary of the incident's investigation findings, opened
/// from the phase badge in the list.
#[component]
pub fn InvestigationSummaryDialog<F>(incident: Incident, on_close: F) -> impl IntoView
where
    F: Fn() + 'static + Copy + Send + Sync,
{
    let title = format!("Investigation - {}", incident.incident_number);
    let investigation = incident.investigation.clone();

    let section = |label: &'static str, value: Option<String>| {
        value.map(|v| {
            view! {
                <div class="detail-section">
                    <h4 class="detail-section__title">{label}</h4>
                    <p class="detail-section__body">{v}</p>
                </div>
            }
        })
    };

    view! {
        <ModalFrame on_close=Callback::new(move |_| on_close()) modal_style="max-width: 560px;".to_string()>
            <div class="modal-header">
                <h2 class="modal-title">{title}</h2>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_close()
                >
                    {icon("x")}
                </Button>
            </div>

            <div class="modal-body">
                {match investigation {
                    Some(inv) => {
                        let has_findings = inv.root_cause.is_some()
                            || inv.corrective_action.is_some()
                            || inv.preventive_action.is_some();
                        if has_findings || inv.close_date.is_some() {
                            view! {
                                <div>
                                    {section("Root cause", inv.root_cause)}
                                    {section("Corrective action", inv.corrective_action)}
                                    {section("Preventive action", inv.preventive_action)}
                                    {inv.close_date.map(|d| view! {
                                        <div class="detail-section">
                                            <h4 class="detail-section__title">"Closed on"</h4>
                                            <p class="detail-section__body">{format_date(&d)}</p>
                                        </div>
                                    })}
                                </div>
                            }.into_any()
                        } else {
                            view! {
                                <p class="placeholder">"Investigation opened, no findings recorded yet."</p>
                            }.into_any()
                        }
                    }
                    None => view! {
                        <p class="placeholder">"No investigation recorded for this incident."</p>
                    }.into_any(),
                }}
            </div>

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close()
                >
                    "Close"
                </Button>
            </div>
        </ModalFrame>
    }
}

#[component]
pub fn EditIncidentForm<F1, F2>(incident: Incident, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let incident_id = incident.incident_id;
    let date = RwSignal::new(incident.date.clone());
    let location = RwSignal::new(incident.location.clone().unwrap_or_default());
    let category = RwSignal::new(incident.category.clone());
    let description = RwSignal::new(incident.description.clone().unwrap_or_default());
    let status = RwSignal::new(incident.status.clone());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let title = format!("Edit incident: {}", incident.incident_number);

    let status_options = || {
        ["reported", "investigating", "in progress", "resolved", "closed"]
            .iter()
            .map(|s| (s.to_string(), s.to_string()))
            .collect::<Vec<_>>()
    };

    let on_save = move |_| {
        if category.get().trim().is_empty() {
            set_error.set(Some("Category is required".into()));
            return;
        }

        let dto = IncidentUpdate {
            date: Some(date.get()),
            location: opt(location.get()),
            category: Some(category.get()),
            description: opt(description.get()),
            status: Some(status.get()),
        };

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::update_incident(incident_id, dto).await {
                Ok(_) => on_saved(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to save incident: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <ModalFrame on_close=Callback::new(move |_| on_close())>
            <div class="modal-header">
                <h2 class="modal-title">{title}</h2>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_close()
                >
                    {icon("x")}
                </Button>
            </div>

            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <DateInput
                    label="Incident date"
                    value=Signal::derive(move || date.get())
                    on_change=Callback::new(move |value: String| date.set(value))
                />

                <div class="form__group">
                    <Label>"Location"</Label>
                    <Input value=location disabled=Signal::derive(move || saving.get()) />
                </div>

                <Select
                    label="Category"
                    value=Signal::derive(move || category.get())
                    options=Signal::derive(category_options)
                    on_change=Callback::new(move |value: String| category.set(value))
                />

                <Textarea
                    label="Description"
                    value=Signal::derive(move || description.get())
                    on_input=Callback::new(move |value: String| description.set(value))
                />

                <Select
                    label="Status"
                    value=Signal::derive(move || status.get())
                    options=Signal::derive(status_options)
                    on_change=Callback::new(move |value: String| status.set(value))
                />
            </div>

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close()
                    disabled=Signal::derive(move || saving.get())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_save
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </Button>
            </div>
        </ModalFrame>
    }
}

#[component]
pub fn DeleteIncidentDialog<F1, F2>(
    incident: Incident,
    on_close: F1,
    on_deleted: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let (error, set_error) = signal::<Option<String>>(None);
    let (deleting, set_deleting) = signal(false);

    let incident_id = incident.incident_id;
    let label = incident.incident_number.clone();

    let on_delete = move |_| {
        set_deleting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::delete_incident(incident_id).await {
                Ok(_) => on_deleted(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to delete incident: {}", e)));
                    set_deleting.set(false);
                }
            }
        });
    };

    view! {
        <ModalFrame on_close=Callback::new(move |_| on_close())>
            <div class="modal-header">
                <h2 class="modal-title">"Delete incident"</h2>
            </div>

            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <p>
                    "Delete incident "
                    <strong>{label}</strong>
                    "? Attached investigations are removed as well."
                </p>
            </div>

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close()
                    disabled=Signal::derive(move || deleting.get())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_delete
                    disabled=Signal::derive(move || deleting.get())
                >
                    {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                </Button>
            </div>
        </ModalFrame>
    }
}
