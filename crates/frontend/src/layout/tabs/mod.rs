pub mod page;
pub mod registry;
pub mod tab_labels;
pub mod tab_strip;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;

/// Tab strip plus one [`TabPage`] per opened tab. Pages stay mounted
/// while their tab is open, only visibility toggles, so list state
/// survives switching tabs.
#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| {
                        view! { <tab_strip::TabHandle tab=tab /> }
                    }
                />
            </div>
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab: TabData| {
                    view! { <TabPage tab=tab tabs_store=tabs_store /> }
                }
            />
        </div>
    }
}
