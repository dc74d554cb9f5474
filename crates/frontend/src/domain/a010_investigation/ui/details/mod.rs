use contracts::domain::a010_investigation::{
    HseOfficerOption, IncidentOption, Investigation, InvestigationCreate, InvestigationUpdate,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a010_investigation::api;
use crate::shared::components::ui::{Select, Textarea};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;

fn opt(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}

#[component]
pub fn CreateInvestigationForm<F1, F2>(on_close: F1, on_created: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let incidents: RwSignal<Vec<IncidentOption>> = RwSignal::new(Vec::new());
    let officers: RwSignal<Vec<HseOfficerOption>> = RwSignal::new(Vec::new());

    let incident_id = RwSignal::new(String::new());
    let officer_id = RwSignal::new(String::new());
    let root_cause = RwSignal::new(String::new());
    let corrective_action = RwSignal::new(String::new());
    let preventive_action = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    spawn_local(async move {
        match api::fetch_incident_options().await {
            Ok(data) => incidents.set(data),
            Err(e) => set_error.set(Some(format!("Failed to load incidents: {}", e))),
        }
        match api::fetch_officer_options().await {
            Ok(data) => officers.set(data),
            Err(e) => set_error.set(Some(format!("Failed to load HSE officers: {}", e))),
        }
    });

    let on_save = move |_| {
        let dto = InvestigationCreate {
            incident_id: incident_id.get().parse().unwrap_or(0),
            hse_officer_id: officer_id.get().parse().unwrap_or(0),
            root_cause: opt(root_cause.get()),
            corrective_action: opt(corrective_action.get()),
            preventive_action: opt(preventive_action.get()),
        };

        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::create_investigation(dto).await {
                Ok(_) => on_created(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to create investigation: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <ModalFrame on_close=Callback::new(move |_| on_close())>
            <div class="modal-header">
                <h2 class="modal-title">"New investigation"</h2>
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
                    label="Incident *"
                    value=Signal::derive(move || incident_id.get())
                    options=Signal::derive(move || {
                        let mut options = vec![(String::new(), "Select incident...".to_string())];
                        options.extend(incidents.get().iter().map(|i| {
                            (
                                i.incident_id.to_string(),
                                format!("{} - {}", i.incident_number, i.incident_title),
                            )
                        }));
                        options
                    })
                    on_change=Callback::new(move |value: String| incident_id.set(value))
                />

                <Select
                    label="HSE officer *"
                    value=Signal::derive(move || officer_id.get())
                    options=Signal::derive(move || {
                        let mut options = vec![(String::new(), "Select officer...".to_string())];
                        options.extend(officers.get().iter().map(|o| {
                            (o.hse_officer_id.to_string(), o.name.clone())
                        }));
                        options
                    })
                    on_change=Callback::new(move |value: String| officer_id.set(value))
                />

                <Textarea
                    label="Root cause"
                    value=Signal::derive(move || root_cause.get())
                    on_input=Callback::new(move |value: String| root_cause.set(value))
                />

                <Textarea
                    label="Corrective action"
                    value=Signal::derive(move || corrective_action.get())
                    on_input=Callback::new(move |value: String| corrective_action.set(value))
                />

                <Textarea
                    label="Preventive action"
                    value=Signal::derive(move || preventive_action.get())
                    on_input=Callback::new(move |value: String| preventive_action.set(value))
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
                    {move || if saving.get() { "Saving..." } else { "Open investigation" }}
                </Button>
            </div>
        </ModalFrame>
    }
}

#[component]
pub fn EditInvestigationForm<F1, F2>(
    investigation: Investigation,
    on_close: F1,
    on_saved: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let investigation_id = investigation.investigation_id;
    let root_cause = RwSignal::new(investigation.root_cause.clone().unwrap_or_default());
    let corrective_action =
        RwSignal::new(investigation.corrective_action.clone().unwrap_or_default());
    let preventive_action =
        RwSignal::new(investigation.preventive_action.clone().unwrap_or_default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let title = format!(
        "Edit investigation: {}",
        investigation
            .incident_title
            .clone()
            .unwrap_or_else(|| format!("incident #{}", investigation.incident_id))
    );

    let on_save = move |_| {
        let dto = InvestigationUpdate {
            root_cause: opt(root_cause.get()),
            corrective_action: opt(corrective_action.get()),
            preventive_action: opt(preventive_action.get()),
            close_date: None,
        };

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::update_investigation(investigation_id, dto).await {
                Ok(_) => on_saved(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to save investigation: {}", e)));
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

                <Textarea
                    label="Root cause"
                    value=Signal::derive(move || root_cause.get())
                    on_input=Callback::new(move |value: String| root_cause.set(value))
                />

                <Textarea
                    label="Corrective action"
                    value=Signal::derive(move || corrective_action.get())
                    on_input=Callback::new(move |value: String| corrective_action.set(value))
                />

                <Textarea
                    label="Preventive action"
                    value=Signal::derive(move || preventive_action.get())
                    on_input=Callback::new(move |value: String| preventive_action.set(value))
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
pub fn CloseInvestigationDialog<F1, F2>(
    investigation: Investigation,
    on_close: F1,
    on_closed: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let investigation_id = investigation.investigation_id;
    let label = investigation
        .incident_title
        .clone()
        .unwrap_or_else(|| format!("incident #{}", investigation.incident_id));

    let on_confirm = move |_| {
        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::close_investigation(investigation_id).await {
                Ok(_) => on_closed(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to close investigation: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <ModalFrame on_close=Callback::new(move |_| on_close())>
            <div class="modal-header">
                <h2 class="modal-title">"Close investigation"</h2>
            </div>

            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <p>
                    "Close the investigation for "
                    <strong>{label}</strong>
                    "? The close date is stamped by the server and the record becomes read-only."
                </p>
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
                    on_click=on_confirm
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Closing..." } else { "Close investigation" }}
                </Button>
            </div>
        </ModalFrame>
    }
}

#[component]
pub fn DeleteInvestigationDialog<F1, F2>(
    investigation: Investigation,
    on_close: F1,
    on_deleted: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let (error, set_error) = signal::<Option<String>>(None);
    let (deleting, set_deleting) = signal(false);

    let investigation_id = investigation.investigation_id;
    let label = investigation
        .incident_title
        .clone()
        .unwrap_or_else(|| format!("incident #{}", investigation.incident_id));

    let on_delete = move |_| {
        set_deleting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::delete_investigation(investigation_id).await {
                Ok(_) => on_deleted(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to delete investigation: {}", e)));
                    set_deleting.set(false);
                }
            }
        });
    };

    view! {
        <ModalFrame on_close=Callback::new(move |_| on_close())>
            <div class="modal-header">
                <h2 class="modal-title">"Delete investigation"</h2>
            </div>

            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <p>
                    "Delete the investigation for "
                    <strong>{label}</strong>
                    "? This action cannot be undone."
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
