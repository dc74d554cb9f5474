use contracts::domain::a011_approval::{Approval, ApprovalUpdate, DECISIONS};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::list::ApprovalAction;
use crate::domain::a011_approval::api;
use crate::shared::components::ui::{Select, Textarea};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;

/// Quick-action dialog for approve / reject / set-pending. Approve and
/// reject go through the dedicated PATCH routes; pending is a plain
/// decision update.
#[component]
pub fn DecisionDialog<F1, F2>(
    action: ApprovalAction,
    approval: Approval,
    on_close: F1,
    on_done: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let approval_id = approval.approval_id;
    let comment = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let (title, description, comment_label, button_text) = match action {
        ApprovalAction::Approve => (
            "Approve request",
            "You are about to approve this request.",
            "Comment (optional)",
            "Approve",
        ),
        ApprovalAction::Reject => (
            "Reject request",
            "You are about to reject this request.",
            "Rejection reason",
            "Reject",
        ),
        ApprovalAction::SetPending => (
            "Set to pending",
            "You are about to move this request back to pending.",
            "Note",
            "Set pending",
        ),
    };

    let on_submit = move |_| {
        let comment_value = {
            let c = comment.get();
            if c.trim().is_empty() { None } else { Some(c) }
        };

        if action == ApprovalAction::Reject && comment_value.is_none() {
            set_error.set(Some("A rejection reason is required".into()));
            return;
        }

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = match action {
                ApprovalAction::Approve => api::approve(approval_id, comment_value).await,
                ApprovalAction::Reject => api::reject(approval_id, comment_value).await,
                ApprovalAction::SetPending => {
                    let dto = ApprovalUpdate {
                        decision: "Pending".to_string(),
                        comment: comment_value,
                    };
                    api::update(approval_id, dto).await
                }
            };
            match result {
                Ok(_) => on_done(),
                Err(e) => {
                    set_error.set(Some(e));
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

                <p>{description}</p>

                <Textarea
                    label=comment_label
                    value=Signal::derive(move || comment.get())
                    on_input=Callback::new(move |value: String| comment.set(value))
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
                    on_click=on_submit
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Processing...".to_string() } else { button_text.to_string() }}
                </Button>
            </div>
        </ModalFrame>
    }
}

/// Edit the stored decision and comment directly. The decision date is
/// re-stamped by the backend on change.
#[component]
pub fn EditApprovalDialog<F1, F2>(approval: Approval, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let approval_id = approval.approval_id;
    let decision = RwSignal::new(approval.decision.clone());
    let comment = RwSignal::new(approval.comment.clone().unwrap_or_default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let title = format!("Edit approval #{}", approval_id);

    let decision_options = || {
        DECISIONS
            .iter()
            .map(|d| (d.to_string(), d.to_string()))
            .collect::<Vec<_>>()
    };

    let on_save = move |_| {
        let dto = ApprovalUpdate {
            decision: decision.get(),
            comment: {
                let c = comment.get();
                if c.trim().is_empty() { None } else { Some(c) }
            },
        };

        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::update(approval_id, dto).await {
                Ok(_) => on_saved(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to update approval: {}", e)));
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
                    label="Decision"
                    value=Signal::derive(move || decision.get())
                    options=Signal::derive(decision_options)
                    on_change=Callback::new(move |value: String| decision.set(value))
                />

                <Textarea
                    label="Comment"
                    value=Signal::derive(move || comment.get())
                    on_input=Callback::new(move |value: String| comment.set(value))
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
pub fn DeleteApprovalDialog<F1, F2>(
    approval: Approval,
    on_close: F1,
    on_deleted: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let (error, set_error) = signal::<Option<String>>(None);
    let (deleting, set_deleting) = signal(false);

    let approval_id = approval.approval_id;
    let label = format!("#{} (permit #{})", approval_id, approval.permit_id);

    let on_delete = move |_| {
        set_deleting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::delete(approval_id).await {
                Ok(_) => on_deleted(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to delete approval: {}", e)));
                    set_deleting.set(false);
                }
            }
        });
    };

    view! {
        <ModalFrame on_close=Callback::new(move |_| on_close())>
            <div class="modal-header">
                <h2 class="modal-title">"Delete approval"</h2>
            </div>

            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <p>
                    "Delete approval "
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
