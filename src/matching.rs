//! Links a job posting to the candidates whose occupations plausibly fit it.
//!
//! A posting's role and education fields are joined into one lowercase match
//! text. A candidate keyword hits when it occurs inside that text, or when
//! any token of the text occurs inside the keyword or contains it. The
//! containment runs both ways, so the keyword `admin` finds a
//! `Systemadministratör` posting and the keyword `systemadministratör` finds
//! an `Admin` posting.

use serde::Serialize;

use crate::models::candidate::{CaseId, Roster};
use crate::models::job::JobPosting;
use crate::text::{normalize, tokenize};

/// Candidates matched to one posting, in roster order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MatchSet {
    ids: Vec<CaseId>,
}

impl MatchSet {
    fn insert(&mut self, id: &CaseId) {
        if !self.contains(id) {
            self.ids.push(id.clone());
        }
    }

    pub fn contains(&self, id: &CaseId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CaseId> {
        self.ids.iter()
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a CaseId;
    type IntoIter = std::slice::Iter<'a, CaseId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

/// Lowercased `role education`, or `None` when both fields are blank.
pub fn match_text(posting: &JobPosting) -> Option<String> {
    let text = normalize(&format!("{} {}", posting.role, posting.education));
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn keyword_hits(keyword: &str, text: &str, tokens: &[&str]) -> bool {
    text.contains(keyword)
        || tokens
            .iter()
            .any(|token| keyword.contains(token) || token.contains(keyword))
}

/// Every candidate in `roster` with at least one occupation keyword that
/// overlaps the posting's role or education.
pub fn find_matches(posting: &JobPosting, roster: &Roster) -> MatchSet {
    let mut matches = MatchSet::default();

    let Some(text) = match_text(posting) else {
        return matches;
    };
    let tokens = tokenize(&text);

    for candidate in roster.candidates() {
        let hit = candidate
            .occupations()
            .iter()
            .any(|keyword| keyword_hits(&normalize(keyword), &text, &tokens));
        if hit {
            matches.insert(candidate.case_id());
        }
    }

    matches
}
