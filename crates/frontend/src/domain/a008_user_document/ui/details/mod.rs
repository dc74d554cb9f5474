use contracts::domain::a001_user::User;
use contracts::domain::a007_document_requirement::DocumentRequirement;
use contracts::domain::a008_user_document::{UserDocument, UserDocumentForm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

use crate::domain::a008_user_document::api;
use crate::domain::a008_user_document::api::UploadPayload;
use crate::shared::components::ui::Select;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;

/// Upload/replace form for a user document. Pass `document=None` to
/// upload a new one.
#[component]
pub fn DocumentForm<F1, F2>(
    document: Option<UserDocument>,
    requirements: RwSignal<Vec<DocumentRequirement>>,
    on_close: F1,
    on_saved: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());

    let existing_id = document.as_ref().map(|d| d.user_document_id);
    let user_id =
        RwSignal::new(document.as_ref().map(|d| d.user_id.to_string()).unwrap_or_default());
    let requirement_id = RwSignal::new(
        document
            .as_ref()
            .map(|d| d.document_requirement_id.to_string())
            .unwrap_or_default(),
    );
    let file_url = RwSignal::new(String::new());
    // web_sys::File is not Send, keep it out of the reactive arena.
    let selected_file = StoredValue::new_local(None::<web_sys::File>);
    let (selected_file_name, set_selected_file_name) = signal(Option::<String>::None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let title = if existing_id.is_some() { "Replace document" } else { "Upload document" };

    spawn_local(async move {
        match crate::domain::a001_user::api::fetch_users().await {
            Ok(data) => users.set(data),
            Err(e) => set_error.set(Some(format!("Failed to load users: {}", e))),
        }
    });

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        if let Some(input) = input {
            let file = input.files().and_then(|files| files.get(0));
            set_selected_file_name.set(file.as_ref().map(|f| f.name()));
            selected_file.set_value(file);
        }
    };

    let on_save = move |_| {
        let file = selected_file.get_value();
        let form = UserDocumentForm {
            user_id: user_id.get().parse().unwrap_or(0),
            document_requirement_id: requirement_id.get().parse().unwrap_or(0),
            has_file: file.is_some(),
            file_url: file_url.get(),
        };

        if let Err(e) = form.validate(existing_id.is_some()) {
            set_error.set(Some(e));
            return;
        }

        let payload = UploadPayload {
            user_id: form.user_id,
            document_requirement_id: form.document_requirement_id,
            file,
            file_url: {
                let url = file_url.get();
                if url.trim().is_empty() { None } else { Some(url) }
            },
        };

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = match existing_id {
                Some(id) => api::update_document(id, payload).await,
                None => api::create_document(payload).await,
            };
            match result {
                Ok(_) => on_saved(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to save document: {}", e)));
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
                    label="User *"
                    value=Signal::derive(move || user_id.get())
                    options=Signal::derive(move || {
                        let mut options = vec![(String::new(), "Select user...".to_string())];
                        options.extend(users.get().iter().map(|u| (u.user_id.to_string(), u.name.clone())));
                        options
                    })
                    on_change=Callback::new(move |value: String| user_id.set(value))
                />

                <Select
                    label="Document requirement *"
                    value=Signal::derive(move || requirement_id.get())
                    options=Signal::derive(move || {
                        let mut options = vec![(String::new(), "Select requirement...".to_string())];
                        options.extend(requirements.get().iter().map(|r| {
                            (r.document_requirement_id.to_string(), r.name.clone())
                        }));
                        options
                    })
                    on_change=Callback::new(move |value: String| requirement_id.set(value))
                />

                <div class="form__group">
                    <label class="form__label">"File"</label>
                    <input
                        type="file"
                        class="form__input"
                        on:change=handle_file_select
                        disabled=move || saving.get()
                    />
                    {move || selected_file_name.get().map(|name| view! {
                        <span class="form__hint">{format!("Selected: {}", name)}</span>
                    })}
                </div>

                <div class="form__group">
                    <Label>"...or file URL"</Label>
                    <Input
                        value=file_url
                        placeholder="https://files.example/doc.pdf"
                        disabled=Signal::derive(move || saving.get())
                    />
                </div>

                {existing_id.is_some().then(|| view! {
                    <p class="form__hint">"Leave both empty to keep the stored file."</p>
                })}
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
                    {move || if saving.get() { "Uploading..." } else { "Save" }}
                </Button>
            </div>
        </ModalFrame>
    }
}

#[component]
pub fn DeleteDocumentDialog<F1, F2>(
    document: UserDocument,
    on_close: F1,
    on_deleted: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let (error, set_error) = signal::<Option<String>>(None);
    let (deleting, set_deleting) = signal(false);

    let id = document.user_document_id;
    let label = if document.document_name.is_empty() {
        format!("document #{}", id)
    } else {
        document.document_name.clone()
    };

    let on_delete = move |_| {
        set_deleting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::delete_document(id).await {
                Ok(_) => on_deleted(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to delete document: {}", e)));
                    set_deleting.set(false);
                }
            }
        });
    };

    view! {
        <ModalFrame on_close=Callback::new(move |_| on_close())>
            <div class="modal-header">
                <h2 class="modal-title">"Delete document"</h2>
            </div>

            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <p>
                    "Delete "
                    <strong>{label}</strong>
                    "? The stored file is removed from the server."
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
