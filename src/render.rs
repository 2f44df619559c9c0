//! Render Dispatch
//!
//! Turns a filtered record list into card descriptors (plain data) and
//! feeds them to a renderer. No filtering happens here.

use crate::models::ConcernRecord;

/// Shown instead of cards when nothing matches
pub const EMPTY_MESSAGE: &str = "No concerns match your filters.";

/// Everything a card needs, detached from the record it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDescriptor {
    pub parent_name: String,
    pub student_name: String,
    pub stage: String,
    pub severity: String,
    pub issue_category: String,
    pub case_owner_name: String,
    pub comments: String,
    /// `stage-<value>`
    pub stage_class: String,
    /// `severity-<value>`
    pub severity_class: String,
}

pub fn describe(record: &ConcernRecord) -> CardDescriptor {
    CardDescriptor {
        parent_name: record.parent_name.clone(),
        student_name: record.student_name.clone(),
        stage: record.stage.label().to_string(),
        severity: record.severity.label().to_string(),
        issue_category: record.issue_category.clone(),
        case_owner_name: record.case_owner_name.clone(),
        comments: record.comments.clone(),
        stage_class: record.stage.style_key(),
        severity_class: record.severity.style_key(),
    }
}

/// What the card container should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Empty { message: &'static str },
    Cards(Vec<CardDescriptor>),
}

impl RenderOutcome {
    pub fn from_matches(matched: &[&ConcernRecord]) -> Self {
        if matched.is_empty() {
            RenderOutcome::Empty {
                message: EMPTY_MESSAGE,
            }
        } else {
            RenderOutcome::Cards(matched.iter().map(|record| describe(record)).collect())
        }
    }
}

/// Presentation side of the board
pub trait ConcernRenderer {
    /// Drop everything currently shown
    fn clear(&mut self);
    fn card(&mut self, card: &CardDescriptor);
    fn empty(&mut self, message: &str);
}

/// Replace the renderer's contents with `matched`
pub fn dispatch<R: ConcernRenderer>(matched: &[&ConcernRecord], renderer: &mut R) {
    renderer.clear();
    match RenderOutcome::from_matches(matched) {
        RenderOutcome::Empty { message } => {
            tracing::debug!("rendering empty state");
            renderer.empty(message);
        }
        RenderOutcome::Cards(cards) => {
            tracing::debug!(cards = cards.len(), "rendering concern cards");
            for card in &cards {
                renderer.card(card);
            }
        }
    }
}
