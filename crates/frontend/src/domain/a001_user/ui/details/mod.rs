use contracts::domain::a001_user::{User, UserCreate, UserUpdate, USER_ROLES, USER_STATUSES};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_user::api;
use crate::shared::components::ui::Select;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;

fn role_options() -> Vec<(String, String)> {
    let mut options = vec![(String::new(), "Select role...".to_string())];
    options.extend(USER_ROLES.iter().map(|r| (r.to_string(), r.to_string())));
    options
}

#[component]
pub fn CreateUserForm<F1, F2>(on_close: F1, on_created: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let department = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let dto = UserCreate {
            name: name.get(),
            email: email.get(),
            password: password.get(),
            role: role.get(),
            department: department.get(),
        };

        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::create_user(dto).await {
                Ok(_) => on_created(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to create user: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <ModalFrame on_close=Callback::new(move |_| on_close())>
            <div class="modal-header">
                <h2 class="modal-title">"New user"</h2>
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
                    <Label>"Full name *"</Label>
                    <Input value=name disabled=Signal::derive(move || saving.get()) />
                </div>

                <div class="form__group">
                    <Label>"Email *"</Label>
                    <Input
                        value=email
                        input_type=InputType::Email
                        disabled=Signal::derive(move || saving.get())
                    />
                </div>

                <div class="form__group">
                    <Label>"Password *"</Label>
                    <Input
                        value=password
                        input_type=InputType::Password
                        disabled=Signal::derive(move || saving.get())
                    />
                </div>

                <Select
                    label="Role *"
                    value=Signal::derive(move || role.get())
                    options=Signal::derive(role_options)
                    on_change=Callback::new(move |value: String| role.set(value))
                />

                <div class="form__group">
                    <Label>"Department *"</Label>
                    <Input value=department disabled=Signal::derive(move || saving.get()) />
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
                    {move || if saving.get() { "Saving..." } else { "Create user" }}
                </Button>
            </div>
        </ModalFrame>
    }
}

#[component]
pub fn EditUserForm<F1, F2>(user: User, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let name = RwSignal::new(user.name.clone());
    let email = RwSignal::new(user.email.clone().unwrap_or_default());
    let role = RwSignal::new(user.role.clone());
    let department = RwSignal::new(user.department.clone());
    let status = RwSignal::new(user.status.clone());
    // left empty = keep the current password
    let password = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let user_id = user.user_id;
    let title = format!("Edit user: {}", user.user_name);

    let status_options = || {
        USER_STATUSES
            .iter()
            .map(|s| (s.to_string(), s.to_string()))
            .collect::<Vec<_>>()
    };

    let on_save = move |_| {
        let dto = UserUpdate {
            name: Some(name.get()),
            email: Some(email.get()),
            role: Some(role.get()),
            department: Some(department.get()),
            password: {
                let p = password.get();
                if p.trim().is_empty() { None } else { Some(p) }
            },
            status: Some(status.get()),
        };

        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::update_user(user_id, dto).await {
                Ok(_) => on_saved(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to save user: {}", e)));
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
                    <Label>"Full name"</Label>
                    <Input value=name disabled=Signal::derive(move || saving.get()) />
                </div>

                <div class="form__group">
                    <Label>"Email"</Label>
                    <Input
                        value=email
                        input_type=InputType::Email
                        disabled=Signal::derive(move || saving.get())
                    />
                </div>

                <Select
                    label="Role"
                    value=Signal::derive(move || role.get())
                    options=Signal::derive(role_options)
                    on_change=Callback::new(move |value: String| role.set(value))
                />

                <div class="form__group">
                    <Label>"Department"</Label>
                    <Input value=department disabled=Signal::derive(move || saving.get()) />
                </div>

                <Select
                    label="Status"
                    value=Signal::derive(move || status.get())
                    options=Signal::derive(status_options)
                    on_change=Callback::new(move |value: String| status.set(value))
                />

                <div class="form__group">
                    <Label>"New password (leave empty to keep)"</Label>
                    <Input
                        value=password
                        input_type=InputType::Password
                        disabled=Signal::derive(move || saving.get())
                    />
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
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </Button>
            </div>
        </ModalFrame>
    }
}

#[component]
pub fn DeleteUserDialog<F1, F2>(user: User, on_close: F1, on_deleted: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let (error, set_error) = signal::<Option<String>>(None);
    let (deleting, set_deleting) = signal(false);

    let user_id = user.user_id;
    let user_label = format!("{} ({})", user.name, user.user_name);

    let on_delete = move |_| {
        set_deleting.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::delete_user(user_id).await {
                Ok(_) => on_deleted(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to delete user: {}", e)));
                    set_deleting.set(false);
                }
            }
        });
    };

    view! {
        <ModalFrame on_close=Callback::new(move |_| on_close())>
            <div class="modal-header">
                <h2 class="modal-title">"Delete user"</h2>
            </div>

            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <p>
                    "Are you sure you want to delete "
                    <strong>{user_label}</strong>
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
