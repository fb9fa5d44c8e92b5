//! Per-session view state: the current search term and sort selection.
//!
//! Sort selection follows the field-button behavior hosts expose: last name and
//! first name toggle independently and may be combined (giving the composite
//! key); picking any other field replaces the whole selection. Nothing is sorted
//! until a direction is chosen as well.

use crate::commands::ListQuery;
use crate::query::{SortDirection, SortField, SortKey};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    search: Option<String>,
    sort_fields: Vec<SortField>,
    direction: Option<SortDirection>,
}

fn is_name_field(field: SortField) -> bool {
    matches!(field, SortField::LastName | SortField::FirstName)
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn sort_fields(&self) -> &[SortField] {
        &self.sort_fields
    }

    pub fn direction(&self) -> Option<SortDirection> {
        self.direction
    }

    /// Sets the search term. Blank terms are refused and leave the state as is.
    pub fn set_search(&mut self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return false;
        }
        self.search = Some(term.to_string());
        true
    }

    pub fn reset_search(&mut self) {
        self.search = None;
    }

    pub fn toggle_sort_field(&mut self, field: SortField) {
        if !is_name_field(field) {
            self.sort_fields = vec![field];
            return;
        }

        if let Some(pos) = self.sort_fields.iter().position(|f| *f == field) {
            self.sort_fields.remove(pos);
        } else if self.sort_fields.iter().any(|f| is_name_field(*f)) {
            self.sort_fields.push(field);
        } else {
            self.sort_fields = vec![field];
        }
    }

    /// Replaces the selection outright, e.g. from a command-line flag.
    pub fn set_sort_fields(&mut self, fields: Vec<SortField>) {
        self.sort_fields = fields;
    }

    pub fn set_direction(&mut self, direction: SortDirection) {
        self.direction = Some(direction);
    }

    pub fn clear_sort(&mut self) {
        self.sort_fields.clear();
        self.direction = None;
    }

    /// The effective sort key, if both fields and a direction are selected.
    pub fn sort_key(&self) -> Option<(SortKey, SortDirection)> {
        let direction = self.direction?;
        SortKey::from_fields(&self.sort_fields).map(|key| (key, direction))
    }

    pub fn query(&self) -> ListQuery {
        ListQuery {
            search: self.search.clone(),
            sort: self.sort_key(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_fields_combine_into_full_name_key() {
        let mut view = ViewState::new();
        view.toggle_sort_field(SortField::LastName);
        view.toggle_sort_field(SortField::FirstName);
        view.set_direction(SortDirection::Ascending);
        assert_eq!(
            view.sort_key(),
            Some((SortKey::FullName, SortDirection::Ascending))
        );
    }

    #[test]
    fn toggling_a_name_field_twice_removes_it() {
        let mut view = ViewState::new();
        view.toggle_sort_field(SortField::LastName);
        view.toggle_sort_field(SortField::FirstName);
        view.toggle_sort_field(SortField::LastName);
        assert_eq!(view.sort_fields(), &[SortField::FirstName]);
    }

    #[test]
    fn other_fields_replace_selection() {
        let mut view = ViewState::new();
        view.toggle_sort_field(SortField::LastName);
        view.toggle_sort_field(SortField::AverageGrade);
        assert_eq!(view.sort_fields(), &[SortField::AverageGrade]);

        view.toggle_sort_field(SortField::FirstName);
        assert_eq!(view.sort_fields(), &[SortField::FirstName]);
    }

    #[test]
    fn no_key_without_direction() {
        let mut view = ViewState::new();
        view.toggle_sort_field(SortField::Group);
        assert_eq!(view.sort_key(), None);
        view.set_direction(SortDirection::Descending);
        assert_eq!(
            view.sort_key(),
            Some((SortKey::Field(SortField::Group), SortDirection::Descending))
        );
        view.clear_sort();
        assert_eq!(view.sort_key(), None);
        assert!(view.sort_fields().is_empty());
    }

    #[test]
    fn blank_search_is_refused() {
        let mut view = ViewState::new();
        assert!(view.set_search(" smith "));
        assert_eq!(view.search_term(), Some("smith"));
        assert!(!view.set_search("   "));
        assert_eq!(view.search_term(), Some("smith"));
        view.reset_search();
        assert_eq!(view.query(), ListQuery::default());
    }
}
