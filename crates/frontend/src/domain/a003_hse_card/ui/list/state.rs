use contracts::domain::a003_hse_card::HseCard;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct HseCardListState {
    pub items: Vec<HseCard>,
    pub search_query: String,
    pub status_filter: String,
    pub card_type_filter: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
}

impl Default for HseCardListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            status_filter: String::new(),
            card_type_filter: String::new(),
            sort_field: "card_number".to_string(),
            sort_ascending: true,
            page: 0,
            page_size: 25,
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<HseCardListState> {
    RwSignal::new(HseCardListState::default())
}
