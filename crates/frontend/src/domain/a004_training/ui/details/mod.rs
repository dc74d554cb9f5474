use contracts::domain::a001_user::User;
use contracts::domain::a004_training::{Training, TrainingCreate, TrainingUpdate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_training::api;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::ui::{Select, Textarea};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;

fn user_options(users: &[User]) -> Vec<(String, String)> {
    let mut options = vec![(String::new(), "Select participant...".to_string())];
    options.extend(users.iter().map(|u| (u.user_id.to_string(), u.name.clone())));
    options
}

fn opt(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}

#[component]
pub fn CreateTrainingForm<F1, F2>(on_close: F1, on_created: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());

    let user_id = RwSignal::new(String::new());
    let training_name = RwSignal::new(String::new());
    let completion_date = RwSignal::new(String::new());
    let expiry_date = RwSignal::new(String::new());
    let certificate_url = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    spawn_local(async move {
        match crate::domain::a001_user::api::fetch_users().await {
            Ok(data) => users.set(data),
            Err(e) => set_error.set(Some(format!("Failed to load users: {}", e))),
        }
    });

    let on_save = move |_| {
        let dto = TrainingCreate {
            user_id: user_id.get().parse().unwrap_or(0),
            training_name: training_name.get(),
            completion_date: completion_date.get(),
            expiry_date: expiry_date.get(),
            certificate_url: opt(certificate_url.get()),
            notes: opt(notes.get()),
        };

        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::create_training(dto).await {
                Ok(_) => on_created(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to create training: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <ModalFrame on_close=Callback::new(move |_| on_close())>
            <div class="modal-header">
                <h2 class="modal-title">"New training"</h2>
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
                    label="Participant *"
                    value=Signal::derive(move || user_id.get())
                    options=Signal::derive(move || user_options(&users.get()))
                    on_change=Callback::new(move |value: String| user_id.set(value))
                />

                <div class="form__group">
                    <Label>"Training name *"</Label>
                    <Input value=training_name disabled=Signal::derive(move || saving.get()) />
                </div>

                <DateInput
                    label="Completion date *"
                    value=Signal::derive(move || completion_date.get())
                    on_change=Callback::new(move |value: String| completion_date.set(value))
                />

                <DateInput
                    label="Expiry date *"
                    value=Signal::derive(move || expiry_date.get())
                    on_change=Callback::new(move |value: String| expiry_date.set(value))
                />

                <div class="form__group">
                    <Label>"Certificate URL"</Label>
                    <Input value=certificate_url disabled=Signal::derive(move || saving.get()) />
                </div>

                <Textarea
                    label="Notes"
                    value=Signal::derive(move || notes.get())
                    on_input=Callback::new(move |value: String| notes.set(value))
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
                    {move || if saving.get() { "Saving..." } else { "Create" }}
                </Button>
            </div>
        </ModalFrame>
    }
}

#[component]
pub fn EditTrainingForm<F1, F2>(training: Training, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let training_id = training.training_id;
    let training_name = RwSignal::new(training.training_name.clone());
    let completion_date = RwSignal::new(training.completion_date.clone());
    let expiry_date = RwSignal::new(training.expiry_date.clone());
    let certificate_url = RwSignal::new(training.certificate_url.clone().unwrap_or_default());
    let status = RwSignal::new(training.status.clone());
    let notes = RwSignal::new(training.notes.clone().unwrap_or_default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let title = format!("Edit training: {}", training.training_name);

    let status_options = || {
        ["Valid", "Expired", "Scheduled"]
            .iter()
            .map(|s| (s.to_string(), s.to_string()))
            .collect::<Vec<_>>()
    };

    let on_save = move |_| {
        if training_name.get().trim().is_empty() {
            set_error.set(Some("Training name is required".into()));
            return;
        }

        let dto = TrainingUpdate {
            user_id: None,
            training_name: Some(training_name.get()),
            completion_date: Some(completion_date.get()),
            expiry_date: Some(expiry_date.get()),
            certificate_url: opt(certificate_url.get()),
            status: Some(status.get()),
            notes: opt(notes.get()),
        };

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::update_training(training_id, dto).await {
                Ok(_) => on_saved(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to save training: {}", e)));
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

                <div class="form__group">
                    <Label>"Training name"</Label>
                    <Input value=training_name disabled=Signal::derive(move || saving.get()) />
                </div>

                <DateInput
                    label="Completion date"
                    value=Signal::derive(move || completion_date.get())
                    on_change=Callback::new(move |value: String| completion_date.set(value))
                />

                <DateInput
                    label="Expiry date"
                    value=Signal::derive(move || expiry_date.get())
                    on_change=Callback::new(move |value: String| expiry_date.set(value))
                />

                <div class="form__group">
                    <Label>"Certificate URL"</Label>
                    <Input value=certificate_url disabled=Signal::derive(move || saving.get()) />
                </div>

                <Select
                    label="Status"
                    value=Signal::derive(move || status.get())
                    options=Signal::derive(status_options)
                    on_change=Callback::new(move |value: String| status.set(value))
                />

                <Textarea
                    label="Notes"
                    value=Signal::derive(move || notes.get())
                    on_input=Callback::new(move |value: String| notes.set(value))
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
pub fn DeleteTrainingDialog<F1, F2>(
    training: Training,
    on_close: F1,
    on_deleted: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let (error, set_error) = signal::<Option<String>>(None);
    let (deleting, set_deleting) = signal(false);

    let training_id = training.training_id;
    let label = format!("{} - {}", training.training_name, training.user_name);

    let on_delete = move |_| {
        set_deleting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::delete_training(training_id).await {
                Ok(_) => on_deleted(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to delete training: {}", e)));
                    set_deleting.set(false);
                }
            }
        });
    };

    view! {
        <ModalFrame on_close=Callback::new(move |_| on_close())>
            <div class="modal-header">
                <h2 class="modal-title">"Delete training"</h2>
            </div>

            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <p>
                    "Delete training record "
                    <strong>{label}</strong>
                    "?"
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
