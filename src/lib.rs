//! Job board that cross-references open postings against a roster of job
//! seekers.
//!
//! The core is pure: [`text`] folds and tokenizes, [`matching`] links a
//! posting to candidates, [`search`] filters a snapshot by a query. The
//! [`store`] hands out immutable snapshots for both to read.

pub mod auth;
pub mod config;
pub mod error;
pub mod matching;
pub mod models;
pub mod routes;
pub mod search;
pub mod state;
pub mod store;
pub mod text;

pub use matching::{MatchSet, find_matches};
pub use models::candidate::{CandidateProfile, CaseId, Roster, RosterError};
pub use models::job::{JobId, JobPosting, NewJobPosting, ValidationError};
pub use search::{FilteredView, filter};
pub use store::{JobSnapshot, JobStore};
