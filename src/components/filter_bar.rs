//! Filter Bar Component
//!
//! Stage and severity selectors plus the name search box. Controls only
//! record their values; the list recomputes from them.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::filter::ALL_OPTION;
use crate::models::{Severity, Stage};

pub const STAGE_FILTER_ID: &str = "stageFilter";
pub const SEVERITY_FILTER_ID: &str = "severityFilter";
pub const SEARCH_INPUT_ID: &str = "searchInput";

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();

    let on_stage_change = move |ev: web_sys::Event| {
        if let Err(err) = ctx.select_stage(&event_target_value(&ev)) {
            tracing::warn!(%err, "ignoring stage selection");
        }
    };

    let on_severity_change = move |ev: web_sys::Event| {
        if let Err(err) = ctx.select_severity(&event_target_value(&ev)) {
            tracing::warn!(%err, "ignoring severity selection");
        }
    };

    view! {
        <div class="filters">
            <label class="filter-field">
                <span class="filter-label">"Stage"</span>
                <select id=STAGE_FILTER_ID on:change=on_stage_change>
                    <option value=ALL_OPTION selected=true>"All"</option>
                    {Stage::ALL.into_iter().map(|stage| view! {
                        <option value={stage.label()}>{stage.label()}</option>
                    }).collect_view()}
                </select>
            </label>

            <label class="filter-field">
                <span class="filter-label">"Severity"</span>
                <select id=SEVERITY_FILTER_ID on:change=on_severity_change>
                    <option value=ALL_OPTION selected=true>"All"</option>
                    {Severity::ALL.into_iter().map(|severity| view! {
                        <option value={severity.label()}>{severity.label()}</option>
                    }).collect_view()}
                </select>
            </label>

            <label class="filter-field search-field">
                <span class="filter-label">"Search"</span>
                <input
                    id=SEARCH_INPUT_ID
                    type="search"
                    placeholder="Parent or student name..."
                    autocomplete="off"
                    on:input=move |ev| ctx.set_search(event_target_value(&ev))
                />
            </label>
        </div>
    }
}
