//! Sidebar component with collapsible menu groups.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "overview",
            label: "Overview",
            icon: "bar-chart",
            items: vec![("d400_overview", tab_label_for_key("d400_overview"), "activity")],
        },
        MenuGroup {
            id: "hse_records",
            label: "HSE records",
            icon: "credit-card",
            items: vec![
                ("a003_hse_card", tab_label_for_key("a003_hse_card"), "credit-card"),
                ("a002_card_type", tab_label_for_key("a002_card_type"), "layers"),
                ("a004_training", tab_label_for_key("a004_training"), "book-open"),
            ],
        },
        MenuGroup {
            id: "permits",
            label: "Permits",
            icon: "file-text",
            items: vec![
                ("a005_permit_to_work", tab_label_for_key("a005_permit_to_work"), "file-text"),
                ("a006_permit_requirement", tab_label_for_key("a006_permit_requirement"), "clipboard"),
                ("a011_approval", tab_label_for_key("a011_approval"), "check-square"),
            ],
        },
        MenuGroup {
            id: "incidents",
            label: "Incidents",
            icon: "alert-triangle",
            items: vec![
                ("a009_incident", tab_label_for_key("a009_incident"), "alert-triangle"),
                ("a010_investigation", tab_label_for_key("a010_investigation"), "check-square"),
            ],
        },
        MenuGroup {
            id: "documents",
            label: "Documents",
            icon: "file",
            items: vec![
                ("a008_user_document", tab_label_for_key("a008_user_document"), "file"),
                ("a007_document_requirement", tab_label_for_key("a007_document_requirement"), "clipboard"),
            ],
        },
        MenuGroup {
            id: "administration",
            label: "Administration",
            icon: "settings",
            items: vec![("a001_user", tab_label_for_key("a001_user"), "users")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // All groups start expanded, the list is short enough.
    let expanded_groups = RwSignal::new(vec![
        "overview".to_string(),
        "hse_records".to_string(),
        "permits".to_string(),
        "incidents".to_string(),
        "documents".to_string(),
        "administration".to_string(),
    ]);

    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                    let group_id = group.id.to_string();
                    let group_id_for_exp = group_id.clone();
                    let group_id_for_click = group_id.clone();

                    view! {
                        <div>
                            <div
                                class="app-sidebar__item app-sidebar__item--group"
                                style:padding-left="12px"
                                on:click=move |_| {
                                    let gid = group_id_for_click.clone();
                                    expanded_groups.update(move |items| {
                                        if let Some(pos) = items.iter().position(|x| x == &gid) {
                                            items.remove(pos);
                                        } else {
                                            items.push(gid);
                                        }
                                    });
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id_for_exp)
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>

                            {
                                let gid_show = group_id.clone();
                                let items_stored = StoredValue::new(group.items.clone());
                                view! {
                                    <Show when=move || expanded_groups.get().contains(&gid_show)>
                                        <div class="app-sidebar__children">
                                            {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                                let item_id = StoredValue::new(id.to_string());
                                                view! {
                                                    <div
                                                        class="app-sidebar__item"
                                                        class:app-sidebar__item--active=move || {
                                                            let iid = item_id.get_value();
                                                            ctx.active.get().as_ref().map(|a| a == &iid).unwrap_or(false)
                                                        }
                                                        style:padding-left="10px"
                                                        on:click=move |_| {
                                                            ctx.open_tab(id, label);
                                                        }
                                                    >
                                                        <div class="app-sidebar__item-content">
                                                            {icon(icon_name)}
                                                            <span>{label}</span>
                                                        </div>
                                                    </div>
                                                }
                                            }).collect_view()}
                                        </div>
                                    </Show>
                                }
                            }
                        </div>
                    }
                }).collect_view()}
        </div>
    }
}
