use leptos::prelude::*;

/// Placeholder shown in place of cards when nothing matches
#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="empty-state">{message}</div>
    }
}
