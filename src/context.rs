//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::{FilterCriteria, Selection};
use crate::models::{ParseError, Severity, Stage};
use crate::store::ConcernStore;

/// Current values of the three filter controls, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct FilterState {
    pub stage: Selection<Stage>,
    pub severity: Selection<Severity>,
    /// Search text exactly as typed
    pub search: String,
}

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The board's records; never written after mount
    pub concerns: StoredValue<ConcernStore>,
    pub filters: Store<FilterState>,
}

impl AppContext {
    pub fn new(concerns: ConcernStore) -> Self {
        Self {
            concerns: StoredValue::new(concerns),
            filters: Store::new(FilterState::default()),
        }
    }

    /// Fresh criteria from the current control values
    ///
    /// Reading the fields subscribes the calling reactive scope to each control.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(
            self.filters.stage().get(),
            self.filters.severity().get(),
            &self.filters.search().get(),
        )
    }

    /// Store a stage selector value; an unknown value keeps the current selection
    pub fn select_stage(&self, value: &str) -> Result<(), ParseError> {
        let selection = value.parse::<Selection<Stage>>()?;
        *self.filters.stage().write() = selection;
        Ok(())
    }

    /// Store a severity selector value; an unknown value keeps the current selection
    pub fn select_severity(&self, value: &str) -> Result<(), ParseError> {
        let selection = value.parse::<Selection<Severity>>()?;
        *self.filters.severity().write() = selection;
        Ok(())
    }

    pub fn set_search(&self, text: String) {
        *self.filters.search().write() = text;
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
