use contracts::domain::a001_user::User;
use contracts::domain::a002_card_type::CardType;
use contracts::domain::a003_hse_card::{validate_date_range, HseCard, HseCardCreate, HseCardUpdate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_hse_card::api;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::ui::{Select, Textarea};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;

fn user_options(users: &[User]) -> Vec<(String, String)> {
    let mut options = vec![(String::new(), "Select user...".to_string())];
    options.extend(
        users
            .iter()
            .map(|u| (u.user_id.to_string(), format!("{} ({})", u.name, u.department))),
    );
    options
}

fn card_type_options(types: &[CardType]) -> Vec<(String, String)> {
    let mut options = vec![(String::new(), "Select card type...".to_string())];
    options.extend(types.iter().map(|t| (t.card_type_id.to_string(), t.name.clone())));
    options
}

/// Loads the user and card-type option lists shared by the create and
/// edit forms. Errors land in the caller's error signal.
fn load_references(
    users: RwSignal<Vec<User>>,
    card_types: RwSignal<Vec<CardType>>,
    set_error: WriteSignal<Option<String>>,
) {
    spawn_local(async move {
        match crate::domain::a001_user::api::fetch_users().await {
            Ok(data) => users.set(data),
            Err(e) => set_error.set(Some(format!("Failed to load users: {}", e))),
        }
        match crate::domain::a002_card_type::api::fetch_card_types().await {
            Ok(data) => card_types.set(data),
            Err(e) => set_error.set(Some(format!("Failed to load card types: {}", e))),
        }
    });
}

#[component]
pub fn CreateCardForm<F1, F2>(on_close: F1, on_created: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let card_types: RwSignal<Vec<CardType>> = RwSignal::new(Vec::new());

    let user_id = RwSignal::new(String::new());
    let card_number = RwSignal::new(String::new());
    let card_type_id = RwSignal::new(String::new());
    let issued_by = RwSignal::new(String::new());
    let issued_date = RwSignal::new(String::new());
    let expired_date = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    load_references(users, card_types, set_error);

    let on_save = move |_| {
        let dto = HseCardCreate {
            user_id: user_id.get().parse().unwrap_or(0),
            card_number: card_number.get(),
            card_type_id: card_type_id.get().parse().unwrap_or(0),
            issued_by: issued_by.get().parse().unwrap_or(0),
            issued_date: issued_date.get(),
            expired_date: expired_date.get(),
            notes: {
                let n = notes.get();
                if n.trim().is_empty() { None } else { Some(n) }
            },
        };

        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::create_card(dto).await {
                Ok(_) => on_created(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to issue card: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <ModalFrame on_close=Callback::new(move |_| on_close())>
            <div class="modal-header">
                <h2 class="modal-title">"Issue HSE card"</h2>
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
                    label="Holder *"
                    value=Signal::derive(move || user_id.get())
                    options=Signal::derive(move || user_options(&users.get()))
                    on_change=Callback::new(move |value: String| user_id.set(value))
                />

                <div class="form__group">
                    <Label>"Card number *"</Label>
                    <Input value=card_number disabled=Signal::derive(move || saving.get()) />
                </div>

                <Select
                    label="Card type *"
                    value=Signal::derive(move || card_type_id.get())
                    options=Signal::derive(move || card_type_options(&card_types.get()))
                    on_change=Callback::new(move |value: String| card_type_id.set(value))
                />

                <Select
                    label="Issued by *"
                    value=Signal::derive(move || issued_by.get())
                    options=Signal::derive(move || user_options(&users.get()))
                    on_change=Callback::new(move |value: String| issued_by.set(value))
                />

                <DateInput
                    label="Issued date *"
                    value=Signal::derive(move || issued_date.get())
                    on_change=Callback::new(move |value: String| issued_date.set(value))
                />

                <DateInput
                    label="Expiry date *"
                    value=Signal::derive(move || expired_date.get())
                    on_change=Callback::new(move |value: String| expired_date.set(value))
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
                    {move || if saving.get() { "Saving..." } else { "Issue card" }}
                </Button>
            </div>
        </ModalFrame>
    }
}

#[component]
pub fn EditCardForm<F1, F2>(card: HseCard, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let card_types: RwSignal<Vec<CardType>> = RwSignal::new(Vec::new());

    let card_id = card.card_id;
    let user_id = RwSignal::new(card.user_id.to_string());
    let card_number = RwSignal::new(card.card_number.clone());
    let card_type_id = RwSignal::new(card.card_type_id.to_string());
    let issued_by = RwSignal::new(card.issued_by.to_string());
    let issued_date = RwSignal::new(card.issued_date.clone());
    let expired_date = RwSignal::new(card.expired_date.clone());
    let status = RwSignal::new(card.status.clone());
    let notes = RwSignal::new(card.notes.clone().unwrap_or_default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let title = format!("Edit card: {}", card.card_number);

    load_references(users, card_types, set_error);

    let status_options = || {
        ["Active", "Suspended", "Expired", "Revoked"]
            .iter()
            .map(|s| (s.to_string(), s.to_string()))
            .collect::<Vec<_>>()
    };

    let on_save = move |_| {
        if let Err(e) = validate_date_range(&issued_date.get(), &expired_date.get()) {
            set_error.set(Some(e));
            return;
        }
        if card_number.get().trim().is_empty() {
            set_error.set(Some("Card number is required".into()));
            return;
        }

        let dto = HseCardUpdate {
            user_id: user_id.get().parse().ok(),
            card_number: Some(card_number.get()),
            card_type_id: card_type_id.get().parse().ok(),
            issued_by: issued_by.get().parse().ok(),
            issued_date: Some(issued_date.get()),
            expired_date: Some(expired_date.get()),
            status: Some(status.get()),
            notes: {
                let n = notes.get();
                if n.trim().is_empty() { None } else { Some(n) }
            },
        };

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::update_card(card_id, dto).await {
                Ok(_) => on_saved(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to save card: {}", e)));
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

                <Select
                    label="Holder"
                    value=Signal::derive(move || user_id.get())
                    options=Signal::derive(move || user_options(&users.get()))
                    on_change=Callback::new(move |value: String| user_id.set(value))
                />

                <div class="form__group">
                    <Label>"Card number"</Label>
                    <Input value=card_number disabled=Signal::derive(move || saving.get()) />
                </div>

                <Select
                    label="Card type"
                    value=Signal::derive(move || card_type_id.get())
                    options=Signal::derive(move || card_type_options(&card_types.get()))
                    on_change=Callback::new(move |value: String| card_type_id.set(value))
                />

                <Select
                    label="Issued by"
                    value=Signal::derive(move || issued_by.get())
                    options=Signal::derive(move || user_options(&users.get()))
                    on_change=Callback::new(move |value: String| issued_by.set(value))
                />

                <DateInput
                    label="Issued date"
                    value=Signal::derive(move || issued_date.get())
                    on_change=Callback::new(move |value: String| issued_date.set(value))
                />

                <DateInput
                    label="Expiry date"
                    value=Signal::derive(move || expired_date.get())
                    on_change=Callback::new(move |value: String| expired_date.set(value))
                />

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
pub fn RenewCardDialog<F1, F2>(card: HseCard, on_close: F1, on_renewed: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let card_id = card.card_id;
    let current_expiry = card.expired_date.clone();
    let new_expiry = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let title = format!("Renew card: {}", card.card_number);
    let current_expiry_for_check = current_expiry.clone();

    let on_renew = move |_| {
        let date = new_expiry.get();
        if date.trim().is_empty() {
            set_error.set(Some("New expiry date is required".into()));
            return;
        }
        if date <= current_expiry_for_check {
            set_error.set(Some("New expiry date must be after the current one".into()));
            return;
        }

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::renew_card(card_id, date).await {
                Ok(_) => on_renewed(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to renew card: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <ModalFrame on_close=Callback::new(move |_| on_close())>
            <div class="modal-header">
                <h2 class="modal-title">{title}</h2>
            </div>

            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <p>"Current expiry: " <strong>{current_expiry}</strong></p>

                <DateInput
                    label="New expiry date *"
                    value=Signal::derive(move || new_expiry.get())
                    on_change=Callback::new(move |value: String| new_expiry.set(value))
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
                    on_click=on_renew
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Renewing..." } else { "Renew" }}
                </Button>
            </div>
        </ModalFrame>
    }
}

#[component]
pub fn DeleteCardDialog<F1, F2>(card: HseCard, on_close: F1, on_deleted: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let (error, set_error) = signal::<Option<String>>(None);
    let (deleting, set_deleting) = signal(false);

    let card_id = card.card_id;
    let label = format!("{} ({})", card.card_number, card.user_name);

    let on_delete = move |_| {
        set_deleting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::delete_card(card_id).await {
                Ok(_) => on_deleted(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to delete card: {}", e)));
                    set_deleting.set(false);
                }
            }
        });
    };

    view! {
        <ModalFrame on_close=Callback::new(move |_| on_close())>
            <div class="modal-header">
                <h2 class="modal-title">"Delete HSE card"</h2>
            </div>

            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <p>
                    "Delete card "
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
