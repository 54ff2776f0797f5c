//! Authoritative in-memory list of job postings.
//!
//! Readers take a [`JobSnapshot`] and keep it as long as they like. Writers
//! build a new list and swap it in, so a snapshot never changes underneath
//! the matcher or the search view.

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};

use crate::models::job::{JobId, JobPosting, NewJobPosting, ValidationError};

/// Immutable view of the store, newest posting first.
pub type JobSnapshot = Arc<Vec<JobPosting>>;

#[derive(Debug, Default)]
pub struct JobStore {
    current: RwLock<JobSnapshot>,
}

fn newest_first(postings: &mut [JobPosting]) {
    postings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> JobSnapshot {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn publish(&self, postings: Vec<JobPosting>) {
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::new(postings);
    }

    pub fn get(&self, id: &JobId) -> Option<JobPosting> {
        self.snapshot().iter().find(|job| &job.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// Validate and store a new posting stamped with the current time.
    pub fn add(&self, input: NewJobPosting) -> Result<JobPosting, ValidationError> {
        self.add_at(input, Utc::now())
    }

    pub fn add_at(
        &self,
        input: NewJobPosting,
        created_at: DateTime<Utc>,
    ) -> Result<JobPosting, ValidationError> {
        let posting = JobPosting::from_new(input.validate()?, JobId::new(), created_at);

        let mut guard = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let mut postings = Vec::with_capacity(guard.len() + 1);
        postings.push(posting.clone());
        postings.extend(guard.iter().cloned());
        newest_first(&mut postings);
        *guard = Arc::new(postings);
        drop(guard);

        tracing::info!(job_id = %posting.id, role = %posting.role, "Added job posting");
        Ok(posting)
    }

    pub fn remove(&self, id: &JobId) -> Option<JobPosting> {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let position = guard.iter().position(|job| &job.id == id)?;

        let mut postings: Vec<JobPosting> = guard.iter().cloned().collect();
        let removed = postings.remove(position);
        *guard = Arc::new(postings);
        drop(guard);

        tracing::info!(job_id = %id, "Removed job posting");
        Some(removed)
    }

    /// Replace the whole collection. The first posting seen for an
    /// identifier wins.
    pub fn replace_all(&self, postings: Vec<JobPosting>) {
        let mut seen = HashSet::new();
        let mut postings: Vec<JobPosting> = postings
            .into_iter()
            .filter(|job| seen.insert(job.id))
            .collect();
        newest_first(&mut postings);

        let count = postings.len();
        self.publish(postings);
        tracing::info!(count, "Replaced job collection");
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn input(role: &str) -> NewJobPosting {
        NewJobPosting {
            role: role.to_string(),
            scope: "Heltid".to_string(),
            compensation: "Enligt avtal".to_string(),
            matcher: "Eva".to_string(),
            ..Default::default()
        }
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, hour, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn roles(snapshot: &JobSnapshot) -> Vec<&str> {
        snapshot.iter().map(|job| job.role.as_str()).collect()
    }

    #[test]
    fn snapshot_is_newest_first() {
        let store = JobStore::new();
        store.add_at(input("Kock"), at(9)).expect("valid");
        store.add_at(input("Lärare"), at(12)).expect("valid");
        store.add_at(input("Bagare"), at(10)).expect("valid");

        assert_eq!(roles(&store.snapshot()), ["Lärare", "Bagare", "Kock"]);
    }

    #[test]
    fn same_timestamp_puts_latest_insert_first() {
        let store = JobStore::new();
        store.add_at(input("Kock"), at(9)).expect("valid");
        store.add_at(input("Lärare"), at(9)).expect("valid");
        assert_eq!(roles(&store.snapshot()), ["Lärare", "Kock"]);
    }

    #[test]
    fn add_rejects_invalid_input_without_mutating() {
        let store = JobStore::new();
        let err = store.add(input("  ")).expect_err("role is blank");
        assert!(err.is_missing("role"));
        assert!(store.is_empty());
    }

    #[test]
    fn old_snapshot_is_unaffected_by_mutation() {
        let store = JobStore::new();
        let kock = store.add_at(input("Kock"), at(9)).expect("valid");
        let before = store.snapshot();

        store.add_at(input("Lärare"), at(10)).expect("valid");
        store.remove(&kock.id).expect("present");

        assert_eq!(roles(&before), ["Kock"]);
        assert_eq!(roles(&store.snapshot()), ["Lärare"]);
    }

    #[test]
    fn remove_unknown_id_is_none() {
        let store = JobStore::new();
        store.add(input("Kock")).expect("valid");
        assert!(store.remove(&JobId::new()).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_finds_by_id() {
        let store = JobStore::new();
        let added = store.add(input("Kock")).expect("valid");
        assert_eq!(store.get(&added.id), Some(added));
        assert_eq!(store.get(&JobId::new()), None);
    }

    #[test]
    fn replace_all_dedupes_and_sorts() {
        let store = JobStore::new();
        let id = JobId::new();
        let first = JobPosting::from_new(input("Kock").validate().expect("valid"), id, at(8));
        let duplicate =
            JobPosting::from_new(input("Diskare").validate().expect("valid"), id, at(11));
        let other = JobPosting::from_new(
            input("Lärare").validate().expect("valid"),
            JobId::new(),
            at(10),
        );

        store.replace_all(vec![first, duplicate, other]);
        assert_eq!(roles(&store.snapshot()), ["Lärare", "Kock"]);
    }
}
