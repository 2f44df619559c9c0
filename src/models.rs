//! Frontend Models
//!
//! Concern records and the closed stage/severity vocabularies.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A control or data value that is not part of a closed vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown stage: {0:?}")]
    UnknownStage(String),

    #[error("unknown severity: {0:?}")]
    UnknownSeverity(String),
}

/// Lifecycle state of a concern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    New,
    InProgress,
    Resolved,
    Escalated,
}

impl Stage {
    /// Every stage, in the order the stage selector lists them
    pub const ALL: [Stage; 4] = [
        Stage::New,
        Stage::InProgress,
        Stage::Resolved,
        Stage::Escalated,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Stage::New => "New",
            Stage::InProgress => "In Progress",
            Stage::Resolved => "Resolved",
            Stage::Escalated => "Escalated",
        }
    }

    /// CSS class for stage badges, e.g. `stage-Escalated`
    pub fn style_key(&self) -> String {
        style_key("stage", self.label())
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Stage {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::ALL
            .into_iter()
            .find(|stage| stage.label() == s)
            .ok_or_else(|| ParseError::UnknownStage(s.to_string()))
    }
}

/// Priority classification of a concern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }

    /// CSS class for severity badges, e.g. `severity-High`
    pub fn style_key(&self) -> String {
        style_key("severity", self.label())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Severity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.label() == s)
            .ok_or_else(|| ParseError::UnknownSeverity(s.to_string()))
    }
}

/// Class names cannot contain spaces, so "In Progress" becomes `stage-In-Progress`
/// rather than the two classes `stage-In` and `Progress`.
fn style_key(prefix: &str, label: &str) -> String {
    format!("{}-{}", prefix, label.replace(' ', "-"))
}

/// One parent-reported concern
#[derive(Debug, Clone, PartialEq)]
pub struct ConcernRecord {
    pub parent_name: String,
    pub student_name: String,
    pub stage: Stage,
    pub severity: Severity,
    pub issue_category: String,
    /// Abbreviated staff identifier of the case owner (TM)
    pub case_owner_name: String,
    pub comments: String,
}

impl ConcernRecord {
    pub fn new(
        parent_name: &str,
        student_name: &str,
        stage: Stage,
        severity: Severity,
        issue_category: &str,
        case_owner_name: &str,
        comments: &str,
    ) -> Self {
        Self {
            parent_name: parent_name.to_string(),
            student_name: student_name.to_string(),
            stage,
            severity,
            issue_category: issue_category.to_string(),
            case_owner_name: case_owner_name.to_string(),
            comments: comments.to_string(),
        }
    }
}
