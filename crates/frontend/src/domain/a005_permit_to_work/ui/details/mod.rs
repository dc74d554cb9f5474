use contracts::domain::a001_user::User;
use contracts::domain::a002_card_type::CardType;
use contracts::domain::a005_permit_to_work::{PermitCreate, PermitDetail};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_permit_to_work::api;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::ui::{Select, Textarea};
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::status_utils::{decision_variant, permit_status_text, permit_status_variant};

#[component]
pub fn PermitCreateForm<F1, F2>(on_close: F1, on_created: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let card_types: RwSignal<Vec<CardType>> = RwSignal::new(Vec::new());

    let user_id = RwSignal::new(String::new());
    let work_type = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let required_card_type_id = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

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

    let on_save = move |_| {
        let dto = PermitCreate {
            user_id: user_id.get().parse().unwrap_or(0),
            work_type: work_type.get(),
            location: {
                let l = location.get();
                if l.trim().is_empty() { None } else { Some(l) }
            },
            start_date: start_date.get(),
            end_date: end_date.get(),
            required_card_type_id: required_card_type_id.get().parse().unwrap_or(0),
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
            match api::create_permit(dto).await {
                Ok(_) => on_created(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to create permit: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <ModalFrame on_close=Callback::new(move |_| on_close())>
            <div class="modal-header">
                <h2 class="modal-title">"New work permit"</h2>
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
                    label="Applicant *"
                    value=Signal::derive(move || user_id.get())
                    options=Signal::derive(move || {
                        let mut options = vec![(String::new(), "Select applicant...".to_string())];
                        options.extend(users.get().iter().map(|u| {
                            (u.user_id.to_string(), format!("{} ({})", u.name, u.department))
                        }));
                        options
                    })
                    on_change=Callback::new(move |value: String| user_id.set(value))
                />

                <div class="form__group">
                    <Label>"Work type *"</Label>
                    <Input
                        value=work_type
                        placeholder="Hot Work, Working at Height..."
                        disabled=Signal::derive(move || saving.get())
                    />
                </div>

                <div class="form__group">
                    <Label>"Location"</Label>
                    <Input value=location disabled=Signal::derive(move || saving.get()) />
                </div>

                <DateInput
                    label="Start date *"
                    value=Signal::derive(move || start_date.get())
                    on_change=Callback::new(move |value: String| start_date.set(value))
                />

                <DateInput
                    label="End date *"
                    value=Signal::derive(move || end_date.get())
                    on_change=Callback::new(move |value: String| end_date.set(value))
                />

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
                    {move || if saving.get() { "Saving..." } else { "Submit permit" }}
                </Button>
            </div>
        </ModalFrame>
    }
}

/// Read-only permit detail with the approval chain.
#[component]
pub fn PermitDetailDialog<F>(permit: PermitDetail, on_close: F) -> impl IntoView
where
    F: Fn() + 'static + Copy + Send + Sync,
{
    let title = format!("Permit {}", permit.display_number());
    let status_variant = permit_status_variant(&permit.status);
    let status_text = permit_status_text(&permit.status);
    let approvals = permit.approvals.clone();

    let detail_row = |label: &'static str, value: String| {
        view! {
            <div class="detail-row">
                <span class="detail-row__label">{label}</span>
                <span class="detail-row__value">{value}</span>
            </div>
        }
    };

    view! {
        <ModalFrame on_close=Callback::new(move |_| on_close()) modal_style="max-width: 640px;".to_string()>
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
                <span class=format!("badge badge--{}", status_variant)>{status_text}</span>
                {permit.auto_approved.then(|| {
                    let by = permit.auto_approved_by_name.clone().unwrap_or_else(|| "system".into());
                    let when = permit
                        .auto_approved_date
                        .as_deref()
                        .map(format_datetime)
                        .unwrap_or_else(|| "-".into());
                    view! {
                        <div class="alert alert--info">
                            {format!("Auto-approved by {} on {}", by, when)}
                        </div>
                    }
                })}

                {detail_row("Applicant", permit.user_name.clone())}
                {detail_row("Work type", permit.work_type.clone())}
                {detail_row("Location", permit.location.clone().unwrap_or_else(|| "-".into()))}
                {detail_row("Start", format_date(&permit.start_date))}
                {detail_row("End", format_date(&permit.end_date))}
                {detail_row(
                    "Required card",
                    permit.required_card_type_name.clone().unwrap_or_else(|| "None".into()),
                )}
                {detail_row("Created", format_datetime(&permit.created_at))}
                {detail_row("Notes", permit.notes.clone().unwrap_or_else(|| "-".into()))}

                <h3 class="modal-section-title">"Approval chain"</h3>
                {if approvals.is_empty() {
                    view! { <p class="placeholder">"No approvals recorded."</p> }.into_any()
                } else {
                    view! {
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Approver"</TableHeaderCell>
                                    <TableHeaderCell>"Role"</TableHeaderCell>
                                    <TableHeaderCell>"Decision"</TableHeaderCell>
                                    <TableHeaderCell>"Date"</TableHeaderCell>
                                    <TableHeaderCell>"Comment"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {approvals.into_iter().map(|a| {
                                    let variant = decision_variant(&a.decision);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{a.approver_name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{a.role.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=format!("badge badge--{}", variant)>{a.decision.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_datetime(&a.decision_date)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {a.comment.clone().unwrap_or_else(|| "-".into())}
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()}
                            </TableBody>
                        </Table>
                    }.into_any()
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
pub fn RejectPermitDialog<F1, F2>(
    permit: PermitDetail,
    on_close: F1,
    on_rejected: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let permit_id = permit.permit_id;
    let reason = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let title = format!("Reject permit {}", permit.display_number());

    let on_reject = move |_| {
        let reason_text = reason.get();
        if reason_text.trim().is_empty() {
            set_error.set(Some("A rejection reason is required".into()));
            return;
        }

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::reject_permit(permit_id, reason_text).await {
                Ok(_) => on_rejected(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to reject permit: {}", e)));
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

                <Textarea
                    label="Rejection reason *"
                    value=Signal::derive(move || reason.get())
                    on_input=Callback::new(move |value: String| reason.set(value))
                    placeholder="Why is this permit rejected..."
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
                    on_click=on_reject
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Rejecting..." } else { "Reject" }}
                </Button>
            </div>
        </ModalFrame>
    }
}

#[component]
pub fn DeletePermitDialog<F1, F2>(
    permit: PermitDetail,
    on_close: F1,
    on_deleted: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let (error, set_error) = signal::<Option<String>>(None);
    let (deleting, set_deleting) = signal(false);

    let permit_id = permit.permit_id;
    let label = format!("{} ({})", permit.display_number(), permit.work_type);

    let on_delete = move |_| {
        set_deleting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::delete_permit(permit_id).await {
                Ok(_) => on_deleted(),
                Err(e) => {
                    set_error.set(Some(format!("Failed to delete permit: {}", e)));
                    set_deleting.set(false);
                }
            }
        });
    };

    view! {
        <ModalFrame on_close=Callback::new(move |_| on_close())>
            <div class="modal-header">
                <h2 class="modal-title">"Delete permit"</h2>
            </div>

            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <p>
                    "Delete permit "
                    <strong>{label}</strong>
                    "? Its approval records are removed as well."
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
