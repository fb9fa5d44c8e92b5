//! # Records
//!
//! A [`Record`] is one student's attribute set plus the derived average of their
//! grades. It has no behavior beyond keeping that average in step with `grades`.
//!
//! Identity is the [`RecordId`]: two records are equal when their ids are equal,
//! regardless of the other fields.
//!
//! ## Persisted Form
//!
//! Records serialize as plain camelCase JSON objects. `averageGrade` is written for
//! readers of the file but is never trusted on load: deserialization goes through
//! [`StoredRecord`] and recomputes it from `grades`. `address` and `educationType`
//! may be absent in stored data and default to `""` and [`EducationType::Budget`].

use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque, immutable record identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Funding / study mode of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EducationType {
    #[default]
    Budget,
    Contract,
}

impl EducationType {
    pub const ALL: [EducationType; 2] = [EducationType::Budget, EducationType::Contract];

    pub fn label(&self) -> &'static str {
        match self {
            EducationType::Budget => "Budget",
            EducationType::Contract => "Contract",
        }
    }
}

impl fmt::Display for EducationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EducationType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnknownEducationType(wanted.to_string()))
    }
}

/// A validated set of field values, ready to become a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordFields {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub phone: String,
    pub email: String,
    pub birth_date: String,
    pub group: String,
    pub address: String,
    pub education_type: EducationType,
    pub grades: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredRecord")]
pub struct Record {
    id: RecordId,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub phone: String,
    pub email: String,
    pub birth_date: String,
    pub group: String,
    pub address: String,
    pub education_type: EducationType,
    grades: Vec<f64>,
    average_grade: f64,
}

impl Record {
    pub fn new(fields: RecordFields) -> Self {
        Self::with_id(RecordId::new(), fields)
    }

    fn with_id(id: RecordId, fields: RecordFields) -> Self {
        let average_grade = average(&fields.grades);
        Self {
            id,
            last_name: fields.last_name,
            first_name: fields.first_name,
            middle_name: fields.middle_name,
            phone: fields.phone,
            email: fields.email,
            birth_date: fields.birth_date,
            group: fields.group,
            address: fields.address,
            education_type: fields.education_type,
            grades: fields.grades,
            average_grade,
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn grades(&self) -> &[f64] {
        &self.grades
    }

    pub fn average_grade(&self) -> f64 {
        self.average_grade
    }

    /// Average with exactly two decimals, e.g. `"90.00"`.
    pub fn average_display(&self) -> String {
        format!("{:.2}", self.average_grade)
    }

    /// Grades in input order, joined with `", "`.
    pub fn grades_display(&self) -> String {
        self.grades
            .iter()
            .map(|g| g.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// "Last First Middle"
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.last_name, self.first_name, self.middle_name)
    }

    pub fn set_grades(&mut self, grades: Vec<f64>) {
        self.grades = grades;
        self.average_grade = average(&self.grades);
    }

    /// Overwrites every field present in `patch`. The id never changes.
    pub fn apply(&mut self, patch: &RecordPatch) {
        if let Some(v) = &patch.last_name {
            self.last_name = v.clone();
        }
        if let Some(v) = &patch.first_name {
            self.first_name = v.clone();
        }
        if let Some(v) = &patch.middle_name {
            self.middle_name = v.clone();
        }
        if let Some(v) = &patch.phone {
            self.phone = v.clone();
        }
        if let Some(v) = &patch.email {
            self.email = v.clone();
        }
        if let Some(v) = &patch.birth_date {
            self.birth_date = v.clone();
        }
        if let Some(v) = &patch.group {
            self.group = v.clone();
        }
        if let Some(v) = &patch.address {
            self.address = v.clone();
        }
        if let Some(v) = patch.education_type {
            self.education_type = v;
        }
        if let Some(v) = &patch.grades {
            self.set_grades(v.clone());
        }
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Record {}

/// Partial update for a [`Record`]. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordPatch {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub birth_date: Option<String>,
    pub group: Option<String>,
    pub address: Option<String>,
    pub education_type: Option<EducationType>,
    pub grades: Option<Vec<f64>>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        *self == RecordPatch::default()
    }
}

impl From<RecordFields> for RecordPatch {
    fn from(fields: RecordFields) -> Self {
        Self {
            last_name: Some(fields.last_name),
            first_name: Some(fields.first_name),
            middle_name: Some(fields.middle_name),
            phone: Some(fields.phone),
            email: Some(fields.email),
            birth_date: Some(fields.birth_date),
            group: Some(fields.group),
            address: Some(fields.address),
            education_type: Some(fields.education_type),
            grades: Some(fields.grades),
        }
    }
}

/// Arithmetic mean rounded to two decimals; 0 for an empty slice.
pub fn average(grades: &[f64]) -> f64 {
    if grades.is_empty() {
        return 0.0;
    }
    let mean = grades.iter().sum::<f64>() / grades.len() as f64;
    (mean * 100.0).round() / 100.0
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecord {
    id: RecordId,
    last_name: String,
    first_name: String,
    middle_name: String,
    phone: String,
    email: String,
    birth_date: String,
    group: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    education_type: EducationType,
    grades: Vec<f64>,
}

impl From<StoredRecord> for Record {
    fn from(s: StoredRecord) -> Self {
        Record::with_id(
            s.id,
            RecordFields {
                last_name: s.last_name,
                first_name: s.first_name,
                middle_name: s.middle_name,
                phone: s.phone,
                email: s.email,
                birth_date: s.birth_date,
                group: s.group,
                address: s.address,
                education_type: s.education_type,
                grades: s.grades,
            },
        )
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// A complete field set with the given names; contact fields derive from them
    /// so that distinct names give distinct emails.
    pub fn fields(last: &str, first: &str) -> RecordFields {
        RecordFields {
            last_name: last.to_string(),
            first_name: first.to_string(),
            middle_name: "Ivanovych".to_string(),
            phone: "+380501234567".to_string(),
            email: format!("{}.{}@example.com", first, last).to_lowercase(),
            birth_date: "2004-05-17".to_string(),
            group: "KN-21".to_string(),
            address: "Kyiv".to_string(),
            education_type: EducationType::Budget,
            grades: vec![80.0, 90.0, 100.0],
        }
    }

    pub fn record(last: &str, first: &str) -> Record {
        Record::new(fields(last, first))
    }
}
