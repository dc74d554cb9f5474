use contracts::domain::a002_card_type::{CardType, CardTypeCreate, CardTypeUpdate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_card_type::api;
use crate::shared::components::ui::Textarea;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;

/// Create/edit form for a card type. Pass `card_type=None` to create.
#[component]
pub fn CardTypeForm<F1, F2>(
    card_type: Option<CardType>,
    on_close: F1,
    on_saved: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let existing_id = card_type.as_ref().map(|t| t.card_type_id);
    let name = RwSignal::new(card_type.as_ref().map(|t| t.name.clone()).unwrap_or_default());
    let description = RwSignal::new(
        card_type
            .as_ref()
            .and_then(|t| t.description.clone())
            .unwrap_or_default(),
    );
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let title = if existing_id.is_some() { "Edit card type" } else { "New card type" };

    let on_save = move |_| {
        let description_value = {
            let d = description.get();
            if d.trim().is_empty() { None } else { Some(d) }
        };

        set_error.set(None);

        match existing_id {
            Some(id) => {
                let dto = CardTypeUpdate {
                    name: name.get(),
                    description: description_value,
                };
                if let Err(e) = dto.validate() {
                    set_error.set(Some(e));
                    return;
                }
                set_saving.set(true);
                spawn_local(async move {
                    match api::update_card_type(id, dto).await {
                        Ok(_) => on_saved(),
                        Err(e) => {
                            set_error.set(Some(format!("Failed to save card type: {}", e)));
                            set_saving.set(false);
                        }
                    }
                });
            }
            None => {
                let dto = CardTypeCreate {
                    name: name.get(),
                    description: description_value,
                };
                if let Err(e) = dto.validate() {
                    set_error.set(Some(e));
                    return;
                }
                set_saving.set(true);
                spawn_local(async move {
                    match api::create_card_type(dto).await {
                        Ok(_) => on_saved(),
                        Err(e) => {
                            set_error.set(Some(format!("Failed to create card type: {}", e)));
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
                    <Label>"Name *"</Label>
                    <Input value=name disabled=Signal::derive(move || saving.get()) />
                </div>

                <Textarea
                    label="Description"
                    value=Signal::derive(move || description.get())
                    on_input=Callback::new(move |value: String| description.set(value))
                    placeholder="What this card authorizes..."
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
pub fn DeleteCardTypeDialog<F1, F2>(
    card_type: CardType,
    on_close: F1,
    on_deleted: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let (error, set_error) = signal::<Option<String>>(None);
    let (deleting, set_deleting) = signal(false);

    let id = card_type.card_type_id;
    let name = card_type.name.clone();

    let on_delete = move |_| {
        set_deleting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::delete_card_type(id).await {
                Ok(_) => on_deleted(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to delete card type: {}", e)));
                    set_deleting.set(false);
                }
            }
        });
    };

    view! {
        <ModalFrame on_close=Callback::new(move |_| on_close())>
            <div class="modal-header">
                <h2 class="modal-title">"Delete card type"</h2>
            </div>

            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <p>
                    "Delete card type "
                    <strong>{name}</strong>
                    "? Cards referencing it keep their issued data."
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
