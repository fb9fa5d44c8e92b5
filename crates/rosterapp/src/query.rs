//! Searching and sorting over records.
//!
//! Both are pure functions over borrowed records; neither touches the roster's
//! canonical order. Sorting is stable, so records that compare equal keep the
//! order they came in.
//!
//! ## Sort keys
//!
//! A [`SortKey`] is either a single [`SortField`] or the composite
//! [`SortKey::FullName`] (last name, then first name). Hosts that let users pick
//! several fields go through [`SortKey::from_fields`]: the last/first name pair
//! becomes the composite key, any other selection sorts on its first field only.

use crate::error::{Result, RosterError};
use crate::model::Record;
use crate::validation::BIRTH_DATE_FORMAT;
use chrono::NaiveDate;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    LastName,
    FirstName,
    MiddleName,
    Phone,
    Email,
    BirthDate,
    Group,
    Address,
    EducationType,
    AverageGrade,
}

/// Fields a search term is matched against. Grades and the average are excluded.
pub const SEARCH_FIELDS: [SortField; 9] = [
    SortField::LastName,
    SortField::FirstName,
    SortField::MiddleName,
    SortField::Phone,
    SortField::Email,
    SortField::BirthDate,
    SortField::Group,
    SortField::Address,
    SortField::EducationType,
];

impl SortField {
    pub const ALL: [SortField; 10] = [
        SortField::LastName,
        SortField::FirstName,
        SortField::MiddleName,
        SortField::Phone,
        SortField::Email,
        SortField::BirthDate,
        SortField::Group,
        SortField::Address,
        SortField::EducationType,
        SortField::AverageGrade,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SortField::LastName => "lastName",
            SortField::FirstName => "firstName",
            SortField::MiddleName => "middleName",
            SortField::Phone => "phone",
            SortField::Email => "email",
            SortField::BirthDate => "birthDate",
            SortField::Group => "group",
            SortField::Address => "address",
            SortField::EducationType => "educationType",
            SortField::AverageGrade => "averageGrade",
        }
    }

    /// The field as text. `AverageGrade` renders with two decimals.
    pub fn text<'a>(&self, record: &'a Record) -> Cow<'a, str> {
        match self {
            SortField::LastName => Cow::Borrowed(&record.last_name),
            SortField::FirstName => Cow::Borrowed(&record.first_name),
            SortField::MiddleName => Cow::Borrowed(&record.middle_name),
            SortField::Phone => Cow::Borrowed(&record.phone),
            SortField::Email => Cow::Borrowed(&record.email),
            SortField::BirthDate => Cow::Borrowed(&record.birth_date),
            SortField::Group => Cow::Borrowed(&record.group),
            SortField::Address => Cow::Borrowed(&record.address),
            SortField::EducationType => Cow::Borrowed(record.education_type.label()),
            SortField::AverageGrade => Cow::Owned(record.average_display()),
        }
    }

    fn compare(&self, a: &Record, b: &Record) -> Ordering {
        match self {
            SortField::AverageGrade => a.average_grade().total_cmp(&b.average_grade()),
            SortField::BirthDate => parse_date(&a.birth_date).cmp(&parse_date(&b.birth_date)),
            _ => self
                .text(a)
                .to_lowercase()
                .cmp(&self.text(b).to_lowercase()),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortField {
    type Err = RosterError;

    /// Accepts `lastName`, `last_name`, `last-name` and any casing of those.
    fn from_str(s: &str) -> Result<Self> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| field.name().to_lowercase() == wanted)
            .ok_or_else(|| RosterError::Api(format!("Unknown sort field: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("ascending"),
            SortDirection::Descending => f.write_str("descending"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(RosterError::Api(format!("Unknown sort direction: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Field(SortField),
    /// Last name, ties broken by first name
    FullName,
}

impl SortKey {
    /// Resolves a user's field selection into a key.
    ///
    /// Both `LastName` and `FirstName` selected → [`SortKey::FullName`]. Otherwise only
    /// the first selected field is used. An empty selection has no key.
    pub fn from_fields(fields: &[SortField]) -> Option<SortKey> {
        if fields.contains(&SortField::LastName) && fields.contains(&SortField::FirstName) {
            return Some(SortKey::FullName);
        }
        fields.first().map(|f| SortKey::Field(*f))
    }

    fn compare(&self, a: &Record, b: &Record) -> Ordering {
        match self {
            SortKey::Field(field) => field.compare(a, b),
            SortKey::FullName => SortField::LastName
                .compare(a, b)
                .then_with(|| SortField::FirstName.compare(a, b)),
        }
    }
}

impl From<SortField> for SortKey {
    fn from(field: SortField) -> Self {
        SortKey::Field(field)
    }
}

/// Unparseable dates compare equal to each other and before any valid date.
fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), BIRTH_DATE_FORMAT).ok()
}

/// Returns a new, stably sorted sequence.
pub fn sort_records<'a, I>(records: I, key: &SortKey, direction: SortDirection) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut sorted: Vec<&Record> = records.into_iter().collect();
    sorted.sort_by(|a, b| {
        let ord = key.compare(a, b);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    sorted
}

/// `term_lower` must already be lowercased.
pub fn matches_term(record: &Record, term_lower: &str) -> bool {
    SEARCH_FIELDS
        .iter()
        .any(|field| field.text(record).to_lowercase().contains(term_lower))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::record;
    use crate::model::EducationType;

    fn names(records: &[&Record]) -> Vec<String> {
        records
            .iter()
            .map(|r| format!("{}/{}", r.last_name, r.first_name))
            .collect()
    }

    #[test]
    fn full_name_sort_breaks_ties_on_first_name() {
        let records = vec![
            record("Smith", "Bob"),
            record("Smith", "Ann"),
            record("Adams", "Zoe"),
        ];
        let key = SortKey::from_fields(&[SortField::LastName, SortField::FirstName]).unwrap();
        let sorted = sort_records(&records, &key, SortDirection::Ascending);
        assert_eq!(names(&sorted), ["Adams/Zoe", "Smith/Ann", "Smith/Bob"]);

        let sorted = sort_records(&records, &key, SortDirection::Descending);
        assert_eq!(names(&sorted), ["Smith/Bob", "Smith/Ann", "Adams/Zoe"]);
    }

    #[test]
    fn text_sort_ignores_case() {
        let records = vec![record("beta", "A"), record("Alpha", "B"), record("Gamma", "C")];
        let sorted = sort_records(
            &records,
            &SortKey::Field(SortField::LastName),
            SortDirection::Ascending,
        );
        assert_eq!(names(&sorted), ["Alpha/B", "beta/A", "Gamma/C"]);
    }

    #[test]
    fn average_sort_is_numeric() {
        let mut high = record("High", "A");
        high.set_grades(vec![80.0]);
        let mut low = record("Low", "B");
        low.set_grades(vec![9.5]);
        let records = vec![low, high];

        let sorted = sort_records(
            &records,
            &SortKey::Field(SortField::AverageGrade),
            SortDirection::Descending,
        );
        assert_eq!(names(&sorted), ["High/A", "Low/B"]);
    }

    #[test]
    fn birth_date_sort_is_chronological() {
        let mut a = record("A", "A");
        a.birth_date = "2004-12-01".into();
        let mut b = record("B", "B");
        b.birth_date = "1999-01-31".into();
        let mut c = record("C", "C");
        c.birth_date = "2004-02-15".into();
        let records = vec![a, b, c];

        let sorted = sort_records(
            &records,
            &SortKey::Field(SortField::BirthDate),
            SortDirection::Ascending,
        );
        assert_eq!(names(&sorted), ["B/B", "C/C", "A/A"]);
    }

    #[test]
    fn unparseable_birth_dates_sort_before_valid_ones() {
        let mut a = record("A", "A");
        a.birth_date = "2004-12-01".into();
        let mut b = record("B", "B");
        b.birth_date = "not-a-date".into();
        let mut c = record("C", "C");
        c.birth_date = "1999-01-31".into();
        let mut d = record("D", "D");
        d.birth_date = "".into();
        let records = vec![a, b, c, d];
        let key = SortKey::Field(SortField::BirthDate);

        let sorted = sort_records(&records, &key, SortDirection::Ascending);
        assert_eq!(names(&sorted), ["B/B", "D/D", "C/C", "A/A"]);

        // reversed order puts them last, still in canonical order among themselves
        let sorted = sort_records(&records, &key, SortDirection::Descending);
        assert_eq!(names(&sorted), ["A/A", "C/C", "B/B", "D/D"]);
    }

    #[test]
    fn sort_is_stable_in_both_directions() {
        let records = vec![record("Same", "First"), record("Same", "Second")];
        let key = SortKey::Field(SortField::LastName);
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let sorted = sort_records(&records, &key, direction);
            assert_eq!(names(&sorted), ["Same/First", "Same/Second"]);
        }
    }

    #[test]
    fn from_fields_degrades_to_first_field() {
        assert_eq!(SortKey::from_fields(&[]), None);
        assert_eq!(
            SortKey::from_fields(&[SortField::FirstName, SortField::LastName]),
            Some(SortKey::FullName)
        );
        assert_eq!(
            SortKey::from_fields(&[SortField::Group, SortField::AverageGrade]),
            Some(SortKey::Field(SortField::Group))
        );
        assert_eq!(
            SortKey::from_fields(&[SortField::FirstName, SortField::Group]),
            Some(SortKey::Field(SortField::FirstName))
        );
    }

    #[test]
    fn search_covers_text_fields_only() {
        let mut r = record("Smith", "Ann");
        r.education_type = EducationType::Budget;
        r.set_grades(vec![77.0]);
        r.birth_date = "2004-05-17".into();

        assert!(matches_term(&r, "budget"));
        assert!(matches_term(&r, "smi"));
        assert!(matches_term(&r, "2004-05"));
        assert!(!matches_term(&r, "77"));
        assert!(!matches_term(&r, "77.00"));
    }

    #[test]
    fn parses_field_names() {
        assert_eq!("lastName".parse::<SortField>().unwrap(), SortField::LastName);
        assert_eq!("last_name".parse::<SortField>().unwrap(), SortField::LastName);
        assert_eq!(
            "average-grade".parse::<SortField>().unwrap(),
            SortField::AverageGrade
        );
        assert!("grades".parse::<SortField>().is_err());
    }

    #[test]
    fn parses_directions() {
        assert_eq!(
            "asc".parse::<SortDirection>().unwrap(),
            SortDirection::Ascending
        );
        assert_eq!(
            "Descending".parse::<SortDirection>().unwrap(),
            SortDirection::Descending
        );
        assert!("up".parse::<SortDirection>().is_err());
    }
}
