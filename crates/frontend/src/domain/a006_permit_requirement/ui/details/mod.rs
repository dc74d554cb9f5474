use contracts::domain::a002_card_type::CardType;
use contracts::domain::a006_permit_requirement::{
    PermitRequirement, PermitRequirementCreate, PermitRequirementUpdate,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a006_permit_requirement::api;
use crate::shared::components::ui::{Select, Textarea};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;

fn opt(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}

/// Create/edit form for a permit requirement. Pass `requirement=None`
/// to create.
#[component]
pub fn PermitRequirementForm<F1, F2>(
    requirement: Option<PermitRequirement>,
    on_close: F1,
    on_saved: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let card_types: RwSignal<Vec<CardType>> = RwSignal::new(Vec::new());

    let existing_id = requirement.as_ref().map(|r| r.requirement_id);
    let work_type =
        RwSignal::new(requirement.as_ref().map(|r| r.work_type.clone()).unwrap_or_default());
    let required_card_type_id = RwSignal::new(
        requirement
            .as_ref()
            .map(|r| r.required_card_type_id.to_string())
            .unwrap_or_default(),
    );
    let required_training = RwSignal::new(
        requirement
            .as_ref()
            .and_then(|r| r.required_training.clone())
            .unwrap_or_default(),
    );
    let notes =
        RwSignal::new(requirement.as_ref().and_then(|r| r.notes.clone()).unwrap_or_default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let title = if existing_id.is_some() { "Edit permit requirement" } else { "New permit requirement" };

    spawn_local(async move {
        match crate::domain::a002_card_type::api::fetch_card_types().await {
            Ok(data) => card_types.set(data),
            Err(e) => set_error.set(Some(format!("Failed to load card types: {}", e))),
        }
    });

    let on_save = move |_| {
        set_error.set(None);

        match existing_id {
            Some(id) => {
                if work_type.get().trim().is_empty() {
                    set_error.set(Some("Work type is required".into()));
                    return;
                }
                let dto = PermitRequirementUpdate {
                    work_type: Some(work_type.get()),
                    required_card_type_id: required_card_type_id.get().parse().ok(),
                    required_training: opt(required_training.get()),
                    notes: opt(notes.get()),
                };
                set_saving.set(true);
                spawn_local(async move {
                    match api::update_requirement(id, dto).await {
                        Ok(_) => on_saved(),
                        Err(e) => {
                            set_error.set(Some(format!("Failed to save requirement: {}", e)));
                            set_saving.set(false);
                        }
                    }
                });
            }
            None => {
                let dto = PermitRequirementCreate {
                    work_type: work_type.get(),
                    required_card_type_id: required_card_type_id.get().parse().unwrap_or(0),
                    required_training: opt(required_training.get()),
                    notes: opt(notes.get()),
                };
                if let Err(e) = dto.validate() {
                    set_error.set(Some(e));
                    return;
                }
                set_saving.set(true);
                spawn_local(async move {
                    match api::create_requirement(dto).await {
                        Ok(_) => on_saved(),
                        Err(e) => {
                            set_error.set(Some(format!("Failed to create requirement: {}", e)));
                            set_saving.set(false);
                        }
                    }
                });
            }
        }
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
                    <Label>"Work type *"</Label>
                    <Input
                        value=work_type
                        placeholder="Hot Work, Confined Space..."
                        disabled=Signal::derive(move || saving.get())
                    />
                </div>

                <Select
                    label="Required card type *"
                    value=Signal::derive(move || required_card_type_id.get())
                    options=Signal::derive(move || {
                        let mut options = vec![(String::new(), "Select card type...".to_string())];
                        options.extend(
                            card_types.get().iter().map(|t| (t.card_type_id.to_string(), t.name.clone())),
                        );
                        options
                    })
                    on_change=Callback::new(move |value: String| required_card_type_id.set(value))
                />

                <div class="form__group">
                    <Label>"Required training"</Label>
                    <Input value=required_training disabled=Signal::derive(move || saving.get()) />
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
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </Button>
            </div>
        </ModalFrame>
    }
}

#[component]
pub fn DeletePermitRequirementDialog<F1, F2>(
    requirement: PermitRequirement,
    on_close: F1,
    on_deleted: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let (error, set_error) = signal::<Option<String>>(None);
    let (deleting, set_deleting) = signal(false);

    let id = requirement.requirement_id;
    let label = requirement.work_type.clone();

    let on_delete = move |_| {
        set_deleting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::delete_requirement(id).await {
                Ok(_) => on_deleted(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to delete requirement: {}", e)));
                    set_deleting.set(false);
                }
            }
        });
    };

    view! {
        <ModalFrame on_close=Callback::new(move |_| on_close())>
            <div class="modal-header">
                <h2 class="modal-title">"Delete permit requirement"</h2>
            </div>

            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <p>
                    "Delete the requirement for "
                    <strong>{label}</strong>
                    "? New permits of this work type will no longer auto-check a card."
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
