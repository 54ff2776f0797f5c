//! Free-text search over a job snapshot.

use crate::models::job::JobPosting;
use crate::text::normalize;

/// Postings that satisfied a query, in their original order.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    query: String,
    postings: Vec<&'a JobPosting>,
    total: usize,
}

impl<'a> FilteredView<'a> {
    pub fn postings(&self) -> &[&'a JobPosting] {
        &self.postings
    }

    /// Size of the collection that was searched.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// The query as given, trimmed.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_filtered(&self) -> bool {
        !self.query.is_empty()
    }
}

fn posting_contains(posting: &JobPosting, needle: &str) -> bool {
    posting
        .text_fields()
        .iter()
        .any(|field| normalize(field).contains(needle))
}

/// Keep postings where any text field contains `query`, ignoring case.
/// A blank query keeps everything. Surrounding whitespace only decides
/// blankness; otherwise it is part of the needle.
pub fn filter<'a>(postings: &'a [JobPosting], query: &str) -> FilteredView<'a> {
    let selected = if query.trim().is_empty() {
        postings.iter().collect()
    } else {
        let needle = normalize(query);
        postings
            .iter()
            .filter(|posting| posting_contains(posting, &needle))
            .collect()
    };

    FilteredView {
        query: query.trim().to_string(),
        postings: selected,
        total: postings.len(),
    }
}
