use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::matching::{MatchSet, find_matches};
use crate::models::job::JobPosting;

/// Case number from the external job-seeker register.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseId(pub String);

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CaseId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A job seeker and the occupations they are looking for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateProfile {
    case_id: CaseId,
    occupations: Vec<String>,
}

impl CandidateProfile {
    /// Blank keywords are dropped; at least one must remain.
    pub fn new(
        case_id: impl Into<CaseId>,
        occupations: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, RosterError> {
        let case_id = case_id.into();
        let occupations: Vec<String> = occupations
            .into_iter()
            .map(Into::into)
            .map(|keyword| keyword.trim().to_string())
            .filter(|keyword| !keyword.is_empty())
            .collect();

        if occupations.is_empty() {
            return Err(RosterError::NoOccupations(case_id));
        }

        Ok(Self {
            case_id,
            occupations,
        })
    }

    pub fn case_id(&self) -> &CaseId {
        &self.case_id
    }

    pub fn occupations(&self) -> &[String] {
        &self.occupations
    }
}

#[derive(Debug, Deserialize)]
struct CandidateRecord {
    #[serde(alias = "arendeNummer", alias = "id")]
    case_id: String,
    #[serde(alias = "yrken")]
    occupations: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RosterFile {
    Wrapped { candidates: Vec<CandidateRecord> },
    Bare(Vec<CandidateRecord>),
}

/// The fixed list of job seekers, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    candidates: Vec<CandidateProfile>,
}

impl Roster {
    pub fn new(candidates: Vec<CandidateProfile>) -> Result<Self, RosterError> {
        let mut seen = HashSet::new();
        for candidate in &candidates {
            if !seen.insert(candidate.case_id()) {
                return Err(RosterError::DuplicateCaseId(candidate.case_id().clone()));
            }
        }
        Ok(Self { candidates })
    }

    pub fn from_json(json: &str) -> Result<Self, RosterError> {
        let records = match serde_json::from_str(json)? {
            RosterFile::Wrapped { candidates } => candidates,
            RosterFile::Bare(candidates) => candidates,
        };

        let candidates = records
            .into_iter()
            .map(|record| CandidateProfile::new(CaseId(record.case_id), record.occupations))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(candidates)
    }

    pub fn load(path: &Path) -> Result<Self, RosterError> {
        let json = std::fs::read_to_string(path)?;
        let roster = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            candidates = roster.len(),
            "Loaded candidate roster"
        );
        Ok(roster)
    }

    pub fn candidates(&self) -> &[CandidateProfile] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn matches_for(&self, posting: &JobPosting) -> MatchSet {
        find_matches(posting, self)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid roster JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("candidate {0} has no occupations")]
    NoOccupations(CaseId),

    #[error("candidate {0} appears more than once")]
    DuplicateCaseId(CaseId),
}
