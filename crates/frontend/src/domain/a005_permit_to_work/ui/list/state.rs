use contracts::domain::a005_permit_to_work::PermitDetail;
use leptos::prelude::*;

/// Date window filter for the permit list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateFilter {
    All,
    Today,
    Upcoming,
}

#[derive(Clone, Debug)]
pub struct PermitListState {
    pub items: Vec<PermitDetail>,
    pub search_query: String,
    pub status_filter: String,
    pub date_filter: DateFilter,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
}

impl Default for PermitListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            status_filter: String::new(),
            date_filter: DateFilter::All,
            sort_field: "created_at".to_string(),
            sort_ascending: false,
            page: 0,
            page_size: 25,
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<PermitListState> {
    RwSignal::new(PermitListState::default())
}
