//! Concern List Component
//!
//! The card container. Every change to a filter control rebuilds the
//! criteria, refilters the store and replaces the container contents.

use leptos::prelude::*;

use crate::components::{ConcernCard, EmptyState};
use crate::context::use_app_context;
use crate::filter::filter;
use crate::render::{dispatch, CardDescriptor, ConcernRenderer};

pub const CONTAINER_ID: &str = "concernContainer";

/// Collects Leptos views for one render pass
#[derive(Default)]
struct ViewRenderer {
    views: Vec<AnyView>,
}

impl ViewRenderer {
    fn into_views(self) -> Vec<AnyView> {
        self.views
    }
}

impl ConcernRenderer for ViewRenderer {
    fn clear(&mut self) {
        self.views.clear();
    }

    fn card(&mut self, card: &CardDescriptor) {
        let card = card.clone();
        self.views.push(view! { <ConcernCard card=card /> }.into_any());
    }

    fn empty(&mut self, message: &str) {
        let message = message.to_string();
        self.views.push(view! { <EmptyState message=message /> }.into_any());
    }
}

#[component]
pub fn ConcernList() -> impl IntoView {
    let ctx = use_app_context();

    let cards = move || {
        let criteria = ctx.criteria();
        ctx.concerns.with_value(|store| {
            let matched = filter(store.records(), &criteria);
            let mut renderer = ViewRenderer::default();
            dispatch(&matched, &mut renderer);
            renderer.into_views()
        })
    };

    view! {
        <section id=CONTAINER_ID class="concern-container">
            {cards}
        </section>
    }
}
