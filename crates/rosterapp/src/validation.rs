//! Input validation for student records.
//!
//! Hosts collect raw strings into a [`RecordForm`] and call [`validate_form`] before
//! a [`Record`] is constructed. The roster itself never validates; it trusts that
//! whatever reaches it went through here.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. every field is non-empty (after trimming)
//! 2. email shape
//! 3. phone shape (national numbering plan, see [`is_valid_phone`])
//! 4. birth date is a `YYYY-MM-DD` calendar date
//! 5. education type is a known label
//! 6. email is unique in the roster
//! 7. phone is unique in the roster
//! 8. grades parse (see [`parse_grades`])

use crate::model::{EducationType, Record, RecordFields, RecordId};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?3?8?0[0-9]{9}$").expect("phone pattern compiles"));

pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Form fields, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    LastName,
    FirstName,
    MiddleName,
    Phone,
    Email,
    BirthDate,
    Group,
    Address,
    EducationType,
    Grades,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::LastName => "last name",
            Field::FirstName => "first name",
            Field::MiddleName => "middle name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::BirthDate => "birth date",
            Field::Group => "group",
            Field::Address => "address",
            Field::EducationType => "education type",
            Field::Grades => "grades",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a grades string was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum GradesError {
    /// Nothing but whitespace was entered
    Empty,
    /// A token did not parse as a number
    NotANumber(String),
    /// A value fell outside [0, 100]
    OutOfRange(f64),
}

impl fmt::Display for GradesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradesError::Empty => write!(f, "enter at least one grade"),
            GradesError::NotANumber(token) => {
                write!(f, "grades must be numbers, found '{}'", token)
            }
            GradesError::OutOfRange(value) => {
                write!(f, "grades must be between 0 and 100, found {}", value)
            }
        }
    }
}

impl std::error::Error for GradesError {}

/// A discriminated validation failure, reported to the host as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    MissingField(Field),
    InvalidFormat(Field),
    UnknownEducationType(String),
    DuplicateEmail,
    DuplicatePhone,
    InvalidGrades(GradesError),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField(field) => {
                write!(f, "please fill in all fields ({} is empty)", field)
            }
            ValidationError::InvalidFormat(Field::Phone) => {
                write!(f, "enter a valid phone number (for example +380XXXXXXXXX)")
            }
            ValidationError::InvalidFormat(Field::BirthDate) => {
                write!(f, "enter a valid birth date (YYYY-MM-DD)")
            }
            ValidationError::InvalidFormat(field) => write!(f, "enter a valid {}", field),
            ValidationError::UnknownEducationType(value) => {
                let known: Vec<_> = EducationType::ALL.iter().map(|t| t.label()).collect();
                write!(
                    f,
                    "unknown education type '{}' (expected one of: {})",
                    value,
                    known.join(", ")
                )
            }
            ValidationError::DuplicateEmail => {
                write!(f, "a student with this email already exists")
            }
            ValidationError::DuplicatePhone => {
                write!(f, "a student with this phone number already exists")
            }
            ValidationError::InvalidGrades(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<GradesError> for ValidationError {
    fn from(e: GradesError) -> Self {
        ValidationError::InvalidGrades(e)
    }
}

/// Uniqueness lookups validation needs from whatever holds the records.
pub trait UniqueContacts {
    fn is_email_unique(&self, email: &str, exclude: Option<RecordId>) -> bool;
    fn is_phone_unique(&self, phone: &str, exclude: Option<RecordId>) -> bool;
}

/// Raw, unvalidated input as a host collects it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordForm {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub phone: String,
    pub email: String,
    pub birth_date: String,
    pub group: String,
    pub address: String,
    pub education_type: String,
    /// Whitespace-separated scores, e.g. `"85 90 77.5"`
    pub grades: String,
}

impl From<&Record> for RecordForm {
    fn from(r: &Record) -> Self {
        Self {
            last_name: r.last_name.clone(),
            first_name: r.first_name.clone(),
            middle_name: r.middle_name.clone(),
            phone: r.phone.clone(),
            email: r.email.clone(),
            birth_date: r.birth_date.clone(),
            group: r.group.clone(),
            address: r.address.clone(),
            education_type: r.education_type.label().to_string(),
            grades: r
                .grades()
                .iter()
                .map(|g| g.to_string())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

impl RecordForm {
    fn values(&self) -> [(Field, &str); 10] {
        [
            (Field::LastName, self.last_name.trim()),
            (Field::FirstName, self.first_name.trim()),
            (Field::MiddleName, self.middle_name.trim()),
            (Field::Phone, self.phone.trim()),
            (Field::Email, self.email.trim()),
            (Field::BirthDate, self.birth_date.trim()),
            (Field::Group, self.group.trim()),
            (Field::Address, self.address.trim()),
            (Field::EducationType, self.education_type.trim()),
            (Field::Grades, self.grades.trim()),
        ]
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Strips whitespace, dashes and parentheses. Used for shape checks and equality.
pub fn normalize_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect()
}

/// Optional `+`, optional `3`, optional `8`, then `0` and nine digits, once
/// spaces, dashes and parentheses are removed. `+380 (50) 123-45-67` passes.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(&normalize_phone(phone))
}

pub fn is_valid_birth_date(date: &str) -> bool {
    NaiveDate::parse_from_str(date, BIRTH_DATE_FORMAT).is_ok()
}

/// Parses whitespace-separated grades, preserving input order.
pub fn parse_grades(input: &str) -> Result<Vec<f64>, GradesError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(GradesError::Empty);
    }

    input
        .split_whitespace()
        .map(|token| {
            let value: f64 = token
                .parse()
                .map_err(|_| GradesError::NotANumber(token.to_string()))?;
            if !value.is_finite() {
                return Err(GradesError::NotANumber(token.to_string()));
            }
            if !(0.0..=100.0).contains(&value) {
                return Err(GradesError::OutOfRange(value));
            }
            // -0 is stored as 0
            Ok(value + 0.0)
        })
        .collect()
}

/// Validates a form against the shape rules and the existing roster.
///
/// `exclude` is the id of the record being edited, so that it does not collide
/// with its own email and phone.
pub fn validate_form<C: UniqueContacts + ?Sized>(
    form: &RecordForm,
    contacts: &C,
    exclude: Option<RecordId>,
) -> Result<RecordFields, ValidationError> {
    let values = form.values();
    if let Some((field, _)) = values.iter().find(|(_, v)| v.is_empty()) {
        return Err(ValidationError::MissingField(*field));
    }

    let [(_, last_name), (_, first_name), (_, middle_name), (_, phone), (_, email), (_, birth_date), (_, group), (_, address), (_, education_type), (_, grades)] =
        values;

    if !is_valid_email(email) {
        return Err(ValidationError::InvalidFormat(Field::Email));
    }
    if !is_valid_phone(phone) {
        return Err(ValidationError::InvalidFormat(Field::Phone));
    }
    if !is_valid_birth_date(birth_date) {
        return Err(ValidationError::InvalidFormat(Field::BirthDate));
    }
    let education_type: EducationType = education_type.parse()?;

    if !contacts.is_email_unique(email, exclude) {
        return Err(ValidationError::DuplicateEmail);
    }
    if !contacts.is_phone_unique(phone, exclude) {
        return Err(ValidationError::DuplicatePhone);
    }

    let grades = parse_grades(grades)?;

    Ok(RecordFields {
        last_name: last_name.to_string(),
        first_name: first_name.to_string(),
        middle_name: middle_name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        birth_date: birth_date.to_string(),
        group: group.to_string(),
        address: address.to_string(),
        education_type,
        grades,
    })
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// A form that passes every check against an empty roster.
    pub fn valid_form() -> RecordForm {
        RecordForm {
            last_name: "Shevchenko".into(),
            first_name: "Taras".into(),
            middle_name: "Hryhorovych".into(),
            phone: "+380 (50) 123-4567".into(),
            email: "taras@example.com".into(),
            birth_date: "2004-03-09".into(),
            group: "KN-21".into(),
            address: "Kyiv".into(),
            education_type: "Budget".into(),
            grades: "85 90 100".into(),
        }
    }

    /// Contacts that accept everything.
    pub struct NoContacts;

    impl UniqueContacts for NoContacts {
        fn is_email_unique(&self, _email: &str, _exclude: Option<RecordId>) -> bool {
            true
        }

        fn is_phone_unique(&self, _phone: &str, _exclude: Option<RecordId>) -> bool {
            true
        }
    }
}
