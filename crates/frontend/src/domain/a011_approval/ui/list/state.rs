use contracts::domain::a011_approval::ApprovalWithPermit;
use leptos::prelude::*;

/// Quick action selected from the row menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApprovalAction {
    Approve,
    Reject,
    SetPending,
}

#[derive(Clone, Debug)]
pub struct ApprovalListState {
    pub items: Vec<ApprovalWithPermit>,
    pub search_query: String,
    pub role_filter: String,
    pub decision_filter: String,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
}

impl Default for ApprovalListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            role_filter: String::new(),
            decision_filter: String::new(),
            page: 0,
            page_size: 25,
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<ApprovalListState> {
    RwSignal::new(ApprovalListState::default())
}
