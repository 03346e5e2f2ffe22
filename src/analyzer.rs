use crate::models::{Candidate, InstructorPicks, PositionStats};
use indexmap::IndexMap;

pub const QA_POSITION: &str = "QA";
pub const MOBILE_POSITION: &str = "Mobile";
pub const WEB_POSITION: &str = "Web";

const QA_STATE: &str = "SC";
const QA_AGE_RANGE: std::ops::RangeInclusive<u32> = 18..=30;
const MOBILE_STATE: &str = "PI";
const MOBILE_AGE_RANGE: std::ops::RangeInclusive<u32> = 30..=40;
const MOBILE_SURNAME_INITIAL: char = 'C';

/// Per-position statistics, iterated in the order positions first appear.
pub type PositionMetrics = IndexMap<String, PositionStats>;

pub struct CandidateAnalyzer<'a> {
    pub candidates: &'a [Candidate],
}

impl<'a> CandidateAnalyzer<'a> {
    pub fn new(candidates: &'a [Candidate]) -> Self {
        Self { candidates }
    }

    pub fn calculate_metrics(&self) -> PositionMetrics {
        let mut positions: PositionMetrics = IndexMap::new();

        // Group by position, keeping the order each position first shows up
        for candidate in self.candidates {
            // First candidate of a position seeds both youngest and oldest
            positions
                .entry(candidate.position.clone())
                .or_insert_with(|| {
                    log::debug!("New position bucket: {}", candidate.position);
                    PositionStats::new(candidate.age)
                })
                .add(candidate.age);
        }

        positions
    }

    /// Scan every candidate; a later match replaces an earlier one.
    pub fn find_instructors(&self) -> InstructorPicks {
        let mut picks = InstructorPicks::default();

        // No early exit: a later match overwrites an earlier one
        for candidate in self.candidates {
            if is_qa_instructor(candidate) {
                log::debug!("QA instructor match: {}", candidate.name);
                picks.qa = Some(candidate.name.clone());
            }

            if is_mobile_instructor(candidate) {
                log::debug!("Mobile instructor match: {}", candidate.name);
                picks.mobile = Some(candidate.name.clone());
            }
        }

        picks
    }
}

fn is_qa_instructor(candidate: &Candidate) -> bool {
    candidate.position == QA_POSITION
        && candidate.state == QA_STATE
        && QA_AGE_RANGE.contains(&candidate.age)
        && is_perfect_square(candidate.age)
        && is_palindrome(&candidate.name)
}

fn is_mobile_instructor(candidate: &Candidate) -> bool {
    candidate.position == MOBILE_POSITION
        && candidate.state == MOBILE_STATE
        && MOBILE_AGE_RANGE.contains(&candidate.age)
        && candidate.age % 2 == 0
        && candidate
            .surname()
            .is_some_and(|surname| surname.starts_with(MOBILE_SURNAME_INITIAL))
}

pub fn is_perfect_square(n: u32) -> bool {
    let root = f64::from(n).sqrt() as u64;
    // the float root can land one off for large n
    (root.saturating_sub(1)..=root + 1).any(|k| k * k == u64::from(n))
}

/// Exact, case-sensitive comparison against the character reversal.
pub fn is_palindrome(text: &str) -> bool {
    text.chars().eq(text.chars().rev())
}
