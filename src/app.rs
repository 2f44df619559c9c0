//! Concern Board App
//!
//! Page layout: title, filter controls, card container.

use leptos::prelude::*;

use crate::components::{ConcernList, FilterBar};
use crate::context::AppContext;
use crate::store::ConcernStore;

pub const TITLE: &str = "Parent Concerns";

#[component]
pub fn App() -> impl IntoView {
    let store = ConcernStore::sample();
    tracing::info!(records = store.len(), "concern board mounted");

    // Provide context to all children
    provide_context(AppContext::new(store));

    view! {
        <div class="app-layout">
            <header class="page-header">
                <h1>{TITLE}</h1>
            </header>

            <main class="main-content">
                <FilterBar />
                <ConcernList />
            </main>
        </div>
    }
}
