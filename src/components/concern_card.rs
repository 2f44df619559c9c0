//! Concern Card Component
//!
//! One card per concern: names and badges in the header, category and case
//! owner below, comments last.

use leptos::prelude::*;

use crate::render::CardDescriptor;

#[component]
pub fn ConcernCard(card: CardDescriptor) -> impl IntoView {
    let CardDescriptor {
        parent_name,
        student_name,
        stage,
        severity,
        issue_category,
        case_owner_name,
        comments,
        stage_class,
        severity_class,
    } = card;

    view! {
        <article class="concern-card">
            <div class="card-header">
                <div class="names">
                    <div class="name-primary">{parent_name}</div>
                    <div class="name-secondary">"Student: " {student_name}</div>
                </div>
                <div class="badges">
                    <span class={format!("badge {}", stage_class)}>{stage}</span>
                    <span class={format!("badge {}", severity_class)}>{severity}</span>
                </div>
            </div>

            <div class="detail-row">
                <div>
                    <span class="detail-label">"Issue Category:"</span>
                    " "
                    {issue_category}
                </div>
                <div>
                    <span class="detail-label">"TM:"</span>
                    " "
                    {case_owner_name}
                </div>
            </div>

            <div class="comments">{comments}</div>
        </article>
    }
}
