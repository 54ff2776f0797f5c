use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub Uuid);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// An open position accepted into the store. Never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: JobId,
    pub role: String,
    #[serde(default)]
    pub company: String,
    pub scope: String,
    pub compensation: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub notes: String,
    pub matcher: String,
    pub created_at: DateTime<Utc>,
}

impl JobPosting {
    pub fn from_new(input: NewJobPosting, id: JobId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            role: input.role,
            company: input.company,
            scope: input.scope,
            compensation: input.compensation,
            experience: input.experience,
            education: input.education,
            notes: input.notes,
            matcher: input.matcher,
            created_at,
        }
    }

    /// Every free-text field. Identifier and timestamp are not included.
    pub fn text_fields(&self) -> [&str; 8] {
        [
            &self.role,
            &self.company,
            &self.scope,
            &self.compensation,
            &self.experience,
            &self.education,
            &self.notes,
            &self.matcher,
        ]
    }
}

/// Submitted form input. Accepts the field names of the legacy data files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewJobPosting {
    #[serde(alias = "yrke")]
    pub role: String,
    #[serde(alias = "foretag")]
    pub company: String,
    #[serde(alias = "omfattning")]
    pub scope: String,
    #[serde(alias = "lon")]
    pub compensation: String,
    #[serde(alias = "erfarenhet")]
    pub experience: String,
    #[serde(alias = "utbildning")]
    pub education: String,
    #[serde(alias = "ovrigt")]
    pub notes: String,
    #[serde(alias = "ansvarigMatchare")]
    pub matcher: String,
}

impl NewJobPosting {
    /// Trim every field and check that the required ones are present.
    pub fn validate(self) -> Result<NewJobPosting, ValidationError> {
        let input = NewJobPosting {
            role: self.role.trim().to_string(),
            company: self.company.trim().to_string(),
            scope: self.scope.trim().to_string(),
            compensation: self.compensation.trim().to_string(),
            experience: self.experience.trim().to_string(),
            education: self.education.trim().to_string(),
            notes: self.notes.trim().to_string(),
            matcher: self.matcher.trim().to_string(),
        };

        let missing: Vec<&'static str> = [
            ("role", &input.role),
            ("scope", &input.scope),
            ("compensation", &input.compensation),
            ("matcher", &input.matcher),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(input)
        } else {
            Err(ValidationError { missing })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing required fields: {}", .missing.join(", "))]
pub struct ValidationError {
    pub missing: Vec<&'static str>,
}

impl ValidationError {
    pub fn is_missing(&self, field: &str) -> bool {
        self.missing.iter().any(|name| *name == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> NewJobPosting {
        NewJobPosting {
            role: "  Lärare ".to_string(),
            scope: "Heltid".to_string(),
            compensation: "32 000 kr".to_string(),
            matcher: "Eva".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn validate_trims_fields() {
        let input = complete().validate().expect("valid input");
        assert_eq!(input.role, "Lärare");
        assert_eq!(input.company, "");
    }

    #[test]
    fn validate_reports_every_missing_field() {
        let err = NewJobPosting {
            role: "   ".to_string(),
            compensation: "1".to_string(),
            ..Default::default()
        }
        .validate()
        .expect_err("role, scope and matcher missing");

        assert_eq!(err.missing, vec!["role", "scope", "matcher"]);
        assert!(err.is_missing("scope"));
        assert!(!err.is_missing("compensation"));
        assert_eq!(
            err.to_string(),
            "missing required fields: role, scope, matcher"
        );
    }

    #[test]
    fn legacy_field_names_are_accepted() {
        let input: NewJobPosting = serde_json::from_value(serde_json::json!({
            "yrke": "Kock",
            "foretag": "Krogen",
            "omfattning": "Deltid",
            "lon": "Enligt avtal",
            "utbildning": "Restaurangskola",
            "ansvarigMatchare": "Ali"
        }))
        .expect("deserializes");

        assert_eq!(input.role, "Kock");
        assert_eq!(input.company, "Krogen");
        assert_eq!(input.education, "Restaurangskola");
        assert_eq!(input.matcher, "Ali");
        assert_eq!(input.notes, "");
    }

    #[test]
    fn text_fields_skip_identifier_and_timestamp() {
        let id = JobId::new();
        let posting = JobPosting::from_new(complete(), id, Utc::now());
        let fields = posting.text_fields();
        assert!(fields.contains(&"  Lärare "));
        assert!(!fields.iter().any(|f| f.contains(&id.to_string())));
    }
}
