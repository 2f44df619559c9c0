//! Concern Filtering
//!
//! Pure narrowing of the record list by stage, severity and name search.

use std::str::FromStr;

use crate::models::{ConcernRecord, ParseError, Severity, Stage};

/// Value of the "All" option in the stage and severity selectors
pub const ALL_OPTION: &str = "All";

/// Selector value: every variant, or exactly one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

impl<T> FromStr for Selection<T>
where
    T: FromStr<Err = ParseError>,
{
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_OPTION {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::Only)
        }
    }
}

/// Criteria for one recomputation of the visible cards
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub stage: Selection<Stage>,
    pub severity: Selection<Severity>,
    /// Trimmed and lowercased at construction
    search: String,
}

impl FilterCriteria {
    pub fn new(stage: Selection<Stage>, severity: Selection<Severity>, search_text: &str) -> Self {
        Self {
            stage,
            severity,
            search: search_text.trim().to_lowercase(),
        }
    }

    /// Normalized search text
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn matches_stage(&self, record: &ConcernRecord) -> bool {
        self.stage.admits(&record.stage)
    }

    pub fn matches_severity(&self, record: &ConcernRecord) -> bool {
        self.severity.admits(&record.severity)
    }

    /// Only parent and student names are searched
    pub fn matches_search(&self, record: &ConcernRecord) -> bool {
        self.search.is_empty()
            || record.parent_name.to_lowercase().contains(&self.search)
            || record.student_name.to_lowercase().contains(&self.search)
    }

    pub fn matches(&self, record: &ConcernRecord) -> bool {
        self.matches_stage(record) && self.matches_severity(record) && self.matches_search(record)
    }
}

/// Records matching `criteria`, in their original order
pub fn filter<'a>(records: &'a [ConcernRecord], criteria: &FilterCriteria) -> Vec<&'a ConcernRecord> {
    let matched: Vec<&ConcernRecord> = records.iter().filter(|r| criteria.matches(r)).collect();
    tracing::debug!(
        stage = ?criteria.stage,
        severity = ?criteria.severity,
        search = criteria.search(),
        matched = matched.len(),
        total = records.len(),
        "filtered concerns"
    );
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ConcernStore;

    fn names(matched: &[&ConcernRecord]) -> Vec<(String, String)> {
        matched
            .iter()
            .map(|r| (r.parent_name.clone(), r.student_name.clone()))
            .collect()
    }

    fn is_subsequence(matched: &[&ConcernRecord], records: &[ConcernRecord]) -> bool {
        let mut rest = records.iter();
        matched.iter().all(|m| rest.any(|r| std::ptr::eq(r, *m)))
    }

    fn stage_selections() -> Vec<Selection<Stage>> {
        std::iter::once(Selection::All)
            .chain(Stage::ALL.into_iter().map(Selection::Only))
            .collect()
    }

    fn severity_selections() -> Vec<Selection<Severity>> {
        std::iter::once(Selection::All)
            .chain(Severity::ALL.into_iter().map(Selection::Only))
            .collect()
    }

    const SEARCHES: &[&str] = &["", "  ", "gonzalez", " Gonzalez ", "KIM", "an", "xyz-nonexistent", "a"];

    #[test]
    fn test_selection_parsing() {
        assert_eq!("All".parse::<Selection<Stage>>(), Ok(Selection::All));
        assert_eq!(
            "In Progress".parse::<Selection<Stage>>(),
            Ok(Selection::Only(Stage::InProgress))
        );
        assert_eq!("High".parse::<Selection<Severity>>(), Ok(Selection::Only(Severity::High)));
        assert_eq!(
            "all".parse::<Selection<Severity>>(),
            Err(ParseError::UnknownSeverity("all".to_string()))
        );
        assert_eq!(Selection::<Stage>::default(), Selection::All);
    }

    #[test]
    fn test_default_criteria_returns_everything() {
        let store = ConcernStore::sample();
        let matched = filter(store.records(), &FilterCriteria::default());
        assert_eq!(matched.len(), store.len());
        assert!(matched.iter().zip(store.records()).all(|(m, r)| std::ptr::eq(*m, r)));
    }

    #[test]
    fn test_escalated_stage() {
        let store = ConcernStore::sample();
        let criteria = FilterCriteria::new(Selection::Only(Stage::Escalated), Selection::All, "");
        let matched = filter(store.records(), &criteria);
        assert_eq!(
            names(&matched),
            vec![
                ("Robert Chen".to_string(), "Ethan Chen".to_string()),
                ("Erin Walsh".to_string(), "Sophie Walsh".to_string()),
            ]
        );
    }

    #[test]
    fn test_stage_filter_matches_tally() {
        let store = ConcernStore::sample();
        for stage in Stage::ALL {
            let criteria = FilterCriteria::new(Selection::Only(stage), Selection::All, "");
            let matched = filter(store.records(), &criteria);
            let tally = store.records().iter().filter(|r| r.stage == stage).count();
            assert_eq!(matched.len(), tally, "stage {stage}");
            assert!(matched.iter().all(|r| r.stage == stage));
        }
    }

    #[test]
    fn test_search_is_trimmed_and_case_insensitive() {
        let store = ConcernStore::sample();
        let criteria = FilterCriteria::new(Selection::All, Selection::All, " gonzalez ");
        assert_eq!(criteria.search(), "gonzalez");

        let matched = filter(store.records(), &criteria);
        assert_eq!(
            names(&matched),
            vec![("Maria Gonzalez".to_string(), "Isabella Gonzalez".to_string())]
        );

        let shouting = FilterCriteria::new(Selection::All, Selection::All, "GONZALEZ");
        assert_eq!(filter(store.records(), &shouting).len(), 1);
    }

    #[test]
    fn test_search_matches_student_name() {
        let store = ConcernStore::sample();
        let criteria = FilterCriteria::new(Selection::All, Selection::All, "sophie");
        let matched = filter(store.records(), &criteria);
        assert_eq!(names(&matched), vec![("Erin Walsh".to_string(), "Sophie Walsh".to_string())]);
    }

    #[test]
    fn test_case_owner_is_not_searched() {
        let store = ConcernStore::sample();
        // "J. Kim" owns the Chen concern
        let criteria = FilterCriteria::new(Selection::All, Selection::All, "kim");
        let matched = filter(store.records(), &criteria);
        assert_eq!(names(&matched), vec![("Hannah Kim".to_string(), "Mason Kim".to_string())]);
    }

    #[test]
    fn test_no_match() {
        let store = ConcernStore::sample();
        let criteria = FilterCriteria::new(Selection::All, Selection::All, "xyz-nonexistent");
        assert!(filter(store.records(), &criteria).is_empty());
    }

    #[test]
    fn test_high_severity_gonzalez() {
        let store = ConcernStore::sample();
        let criteria = FilterCriteria::new(Selection::All, Selection::Only(Severity::High), "gonzalez");
        let matched = filter(store.records(), &criteria);
        assert_eq!(
            names(&matched),
            vec![("Maria Gonzalez".to_string(), "Isabella Gonzalez".to_string())]
        );
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let store = ConcernStore::sample();
        for stage in stage_selections() {
            for severity in severity_selections() {
                for search in SEARCHES {
                    let criteria = FilterCriteria::new(stage, severity, search);
                    let matched = filter(store.records(), &criteria);

                    assert!(is_subsequence(&matched, store.records()));
                    for record in store.records() {
                        let expected = criteria.matches_stage(record)
                            && criteria.matches_severity(record)
                            && criteria.matches_search(record);
                        let included = matched.iter().any(|m| std::ptr::eq(*m, record));
                        assert_eq!(included, expected, "{criteria:?} on {}", record.parent_name);
                    }
                }
            }
        }
    }

    #[test]
    fn test_empty_input() {
        let criteria = FilterCriteria::new(Selection::Only(Stage::New), Selection::All, "maria");
        assert!(filter(&[], &criteria).is_empty());
    }
}
