//! Concern Store
//!
//! The fixed record collection the board shows. Built once at startup and
//! only ever read afterwards.

use crate::models::{ConcernRecord, Severity, Stage};

/// Read-only, ordered collection of concern records
#[derive(Debug, Clone, Default)]
pub struct ConcernStore {
    records: Vec<ConcernRecord>,
}

impl ConcernStore {
    pub fn new(records: Vec<ConcernRecord>) -> Self {
        Self { records }
    }

    /// The built-in board data
    pub fn sample() -> Self {
        Self::new(vec![
            ConcernRecord::new(
                "Maria Gonzalez",
                "Isabella Gonzalez",
                Stage::New,
                Severity::High,
                "Safety",
                "L. Bennett",
                "Concerned about bus drop-off location and supervision after school.",
            ),
            ConcernRecord::new(
                "James Carter",
                "Noah Carter",
                Stage::InProgress,
                Severity::Medium,
                "Academics",
                "A. Patel",
                "Requesting additional reading support and progress updates bi-weekly.",
            ),
            ConcernRecord::new(
                "Priya Desai",
                "Anya Desai",
                Stage::Resolved,
                Severity::Low,
                "Technology",
                "S. Osei",
                "Laptop charging issue resolved after replacement charger provided.",
            ),
            ConcernRecord::new(
                "Robert Chen",
                "Ethan Chen",
                Stage::Escalated,
                Severity::High,
                "Behavior",
                "J. Kim",
                "Repeated classroom disruptions; meeting scheduled with dean next week.",
            ),
            ConcernRecord::new(
                "Alicia Brown",
                "Liam Brown",
                Stage::InProgress,
                Severity::Low,
                "Transportation",
                "R. Lee",
                "Verifying new bus route after recent address change.",
            ),
            ConcernRecord::new(
                "Samuel Johnson",
                "Ava Johnson",
                Stage::New,
                Severity::Medium,
                "Health",
                "K. Nguyen",
                "Parent shared updated allergy plan; needs confirmation it's on file.",
            ),
            ConcernRecord::new(
                "Hannah Kim",
                "Mason Kim",
                Stage::Resolved,
                Severity::Medium,
                "Attendance",
                "C. Rivera",
                "Attendance letter sent and follow-up call completed; attendance improving.",
            ),
            ConcernRecord::new(
                "Erin Walsh",
                "Sophie Walsh",
                Stage::Escalated,
                Severity::High,
                "Academic Placement",
                "D. Flores",
                "Parent requesting acceleration review; forwarded to academic committee.",
            ),
            ConcernRecord::new(
                "Omar Ali",
                "Yusuf Ali",
                Stage::InProgress,
                Severity::Medium,
                "Communication",
                "L. Bennett",
                "Prefers weekly email updates on class activities; establishing cadence.",
            ),
        ])
    }

    pub fn records(&self) -> &[ConcernRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
