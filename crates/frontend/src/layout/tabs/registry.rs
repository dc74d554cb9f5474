//! Tab content registry - single source of truth for the tab.key → View
//! mapping. All tab keys are collected here in one place.

use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::domain::a001_user::ui::list::UserList;
use crate::domain::a002_card_type::ui::list::CardTypeList;
use crate::domain::a003_hse_card::ui::list::HseCardList;
use crate::domain::a004_training::ui::list::TrainingList;
use crate::domain::a005_permit_to_work::ui::list::PermitList;
use crate::domain::a006_permit_requirement::ui::list::PermitRequirementList;
use crate::domain::a007_document_requirement::ui::list::DocumentRequirementList;
use crate::domain::a008_user_document::ui::list::UserDocumentList;
use crate::domain::a009_incident::ui::list::IncidentList;
use crate::domain::a010_investigation::ui::list::InvestigationList;
use crate::domain::a011_approval::ui::list::ApprovalList;
use leptos::logging::log;
use leptos::prelude::*;

/// Renders the content of a tab by its key.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        // Dashboards
        "d400_overview" => view! { <OverviewDashboard /> }.into_any(),

        // Domain aggregates
        "a001_user" => view! { <UserList /> }.into_any(),
        "a002_card_type" => view! { <CardTypeList /> }.into_any(),
        "a003_hse_card" => view! { <HseCardList /> }.into_any(),
        "a004_training" => view! { <TrainingList /> }.into_any(),
        "a005_permit_to_work" => view! { <PermitList /> }.into_any(),
        "a006_permit_requirement" => view! { <PermitRequirementList /> }.into_any(),
        "a007_document_requirement" => view! { <DocumentRequirementList /> }.into_any(),
        "a008_user_document" => view! { <UserDocumentList /> }.into_any(),
        "a009_incident" => view! { <IncidentList /> }.into_any(),
        "a010_investigation" => view! { <InvestigationList /> }.into_any(),
        "a011_approval" => view! { <ApprovalList /> }.into_any(),

        _ => {
            log!("⚠️ Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
