use contracts::domain::a001_user::User;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct UserListState {
    pub items: Vec<User>,
    pub search_query: String,
    pub role_filter: String,
    pub status_filter: String,
    pub department_filter: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
}

impl Default for UserListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            role_filter: String::new(),
            status_filter: String::new(),
            department_filter: String::new(),
            sort_field: "name".to_string(),
            sort_ascending: true,
            page: 0,
            page_size: 25,
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<UserListState> {
    RwSignal::new(UserListState::default())
}
