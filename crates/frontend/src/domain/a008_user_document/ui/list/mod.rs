use std::collections::HashMap;

use contracts::domain::a007_document_requirement::DocumentRequirement;
use contracts::domain::a008_user_document::UserDocument;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::date_utils::format_date;
use crate::shared::files::download_bytes;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

/// Document row with the requirement name resolved against the
/// requirements list (the list endpoint does not always join it).
#[derive(Clone, Debug)]
pub struct DocumentRow {
    pub document: UserDocument,
    pub requirement_name: String,
}

impl DocumentRow {
    fn from_document(doc: UserDocument, requirements: &HashMap<i64, String>) -> Self {
        let requirement_name = if doc.document_requirement_name.is_empty() {
            requirements
                .get(&doc.document_requirement_id)
                .cloned()
                .unwrap_or_else(|| "Unknown".to_string())
        } else {
            doc.document_requirement_name.clone()
        };
        Self { document: doc, requirement_name }
    }
}

#[component]
pub fn UserDocumentList() -> impl IntoView {
    let all_rows: RwSignal<Vec<DocumentRow>> = RwSignal::new(Vec::new());
    let requirements: RwSignal<Vec<DocumentRequirement>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (is_loaded, set_is_loaded) = signal(false);
    let search = RwSignal::new(String::new());
    let (show_upload_form, set_show_upload_form) = signal(false);
    let editing: RwSignal<Option<UserDocument>> = RwSignal::new(None);
    let deleting: RwSignal<Option<UserDocument>> = RwSignal::new(None);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let reqs = match crate::domain::a007_document_requirement::api::fetch_requirements()
                .await
            {
                Ok(data) => data,
                Err(e) => {
                    set_error.set(Some(format!("Failed to load document requirements: {}", e)));
                    set_loading.set(false);
                    return;
                }
            };
            let req_names: HashMap<i64, String> = reqs
                .iter()
                .map(|r| (r.document_requirement_id, r.name.clone()))
                .collect();
            requirements.set(reqs);

            match super::super::api::fetch_documents().await {
                Ok(data) => {
                    let rows = data
                        .into_iter()
                        .map(|d| DocumentRow::from_document(d, &req_names))
                        .collect();
                    all_rows.set(rows);
                    set_is_loaded.set(true);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to load documents: {}", e)));
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| {
        if !is_loaded.get_untracked() {
            load_data();
        }
    });

    let download = move |doc: UserDocument| {
        set_error.set(None);
        spawn_local(async move {
            let filename = if doc.document_name.is_empty() {
                "document.pdf".to_string()
            } else {
                doc.document_name.clone()
            };
            match super::super::api::download_document(doc.user_document_id).await {
                Ok(bytes) => {
                    if let Err(e) = download_bytes(&bytes, &filename) {
                        set_error.set(Some(e));
                    }
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let visible_rows = Signal::derive(move || {
        let query = search.get().trim().to_lowercase();
        let mut rows = all_rows.get();
        if !query.is_empty() {
            rows.retain(|r| {
                r.document.document_name.to_lowercase().contains(&query)
                    || r.document.user_name.to_lowercase().contains(&query)
                    || r.requirement_name.to_lowercase().contains(&query)
            });
        }
        rows.sort_by(|a, b| b.document.upload_date.cmp(&a.document.upload_date));
        rows
    });

    view! {
        <PageFrame page_id="a008_user_document--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"User documents"</h1>
                    <Badge>
                        {move || visible_rows.get().len().to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_upload_form.set(true)
                    >
                        {icon("plus")}
                        " Upload document"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 320px;">
                                <Input
                                    value=search
                                    placeholder="Document, user or requirement..."
                                />
                            </div>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id="a008-user-document-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=180.0>"Document"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Requirement"</TableHeaderCell>
                                <TableHeaderCell min_width=150.0>"User"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Uploaded"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || visible_rows.get()
                                key=|r| r.document.user_document_id
                                children=move |row| {
                                    let doc = row.document.clone();
                                    let has_file = !doc.file_url.is_empty();
                                    let for_download = doc.clone();
                                    let for_edit = doc.clone();
                                    let for_delete = doc.clone();
                                    let display_name = if doc.document_name.is_empty() {
                                        row.requirement_name.clone()
                                    } else {
                                        doc.document_name.clone()
                                    };
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{display_name}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {row.requirement_name.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {if doc.user_name.is_empty() { "Unknown".to_string() } else { doc.user_name.clone() }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_date(&doc.upload_date)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="badge badge--neutral">{doc.status.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                {has_file.then(|| view! {
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| download(for_download.clone())
                                                        attr:title="Download"
                                                    >
                                                        {icon("download")}
                                                    </Button>
                                                })}
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing.set(Some(for_edit.clone()))
                                                    attr:title="Replace"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| deleting.set(Some(for_delete.clone()))
                                                    attr:title="Delete"
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                {move || if show_upload_form.get() {
                    view! {
                        <super::details::DocumentForm
                            document=None
                            requirements=requirements
                            on_close=move || set_show_upload_form.set(false)
                            on_saved=move || {
                                set_show_upload_form.set(false);
                                load_data();
                            }
                        />
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }}

                {move || editing.get().map(|doc| view! {
                    <super::details::DocumentForm
                        document=Some(doc)
                        requirements=requirements
                        on_close=move || editing.set(None)
                        on_saved=move || { editing.set(None); load_data(); }
                    />
                })}

                {move || deleting.get().map(|doc| view! {
                    <super::details::DeleteDocumentDialog
                        document=doc
                        on_close=move || deleting.set(None)
                        on_deleted=move || { deleting.set(None); load_data(); }
                    />
                })}
            </div>
        </PageFrame>
    }
}
