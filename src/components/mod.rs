//! UI Components
//!
//! Leptos components for the concern board.

mod concern_card;
mod concern_list;
mod empty_state;
mod filter_bar;

pub use concern_card::ConcernCard;
pub use concern_list::ConcernList;
pub use empty_state::EmptyState;
pub use filter_bar::FilterBar;
