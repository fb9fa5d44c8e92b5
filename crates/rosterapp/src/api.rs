//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for hosts, whatever UI they present.
//!
//! ## Role and Responsibilities
//!
//! - **Owns the session state**: the [`Roster`] and the [`ViewState`] (current
//!   search and sort selection). Hosts hold one `RosterApi` instead of reaching
//!   for globals.
//! - **Normalizes inputs**: display indexes → [`RecordId`]s
//! - **Dispatches** to the matching command and returns `Result<CmdResult>`
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Printing**: no stdout, stderr, or formatting for a terminal
//!
//! ## Generic Over RecordStore
//!
//! `RosterApi<S: RecordStore>` works with any backend:
//! - Production: `RosterApi<FileStore>`
//! - Testing: `RosterApi<InMemoryStore>`

use crate::commands;
use crate::error::{Result, RosterError};
use crate::model::{Record, RecordId};
use crate::query::{SortDirection, SortField};
use crate::roster::Roster;
use crate::store::RecordStore;
use crate::validation::RecordForm;
use crate::view::ViewState;
use std::path::Path;

pub struct RosterApi<S: RecordStore> {
    roster: Roster<S>,
    view: ViewState,
}

impl<S: RecordStore> RosterApi<S> {
    pub fn new(roster: Roster<S>) -> Self {
        Self {
            roster,
            view: ViewState::new(),
        }
    }

    /// Loads the roster from `store` and starts with an empty view.
    pub fn load(store: S) -> Result<Self> {
        Ok(Self::new(Roster::load(store)?))
    }

    pub fn roster(&self) -> &Roster<S> {
        &self.roster
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    /// Validates and adds a record. The view then switches to first-name
    /// ascending so the new entry shows up in a predictable place.
    pub fn create_record(&mut self, form: &RecordForm) -> Result<commands::CmdResult> {
        let result = commands::create::run(&mut self.roster, form)?;
        self.view.set_sort_fields(vec![SortField::FirstName]);
        self.view.set_direction(SortDirection::Ascending);
        Ok(result)
    }

    pub fn update_record(&mut self, index: usize, form: &RecordForm) -> Result<commands::CmdResult> {
        let id = self.resolve_index(index)?;
        commands::update::run(&mut self.roster, id, form)
    }

    pub fn delete_records(&mut self, indexes: &[usize]) -> Result<commands::CmdResult> {
        let mut ids: Vec<RecordId> = Vec::with_capacity(indexes.len());
        for index in indexes {
            let id = self.resolve_index(*index)?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        commands::delete::run(&mut self.roster, &ids)
    }

    /// Lists records with the current search and sort applied.
    pub fn list_records(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.roster, &self.view.query())
    }

    /// Renders the report for the current view; writes it when `output_dir` is given.
    pub fn export_report(&self, output_dir: Option<&Path>) -> Result<commands::CmdResult> {
        commands::export::run(&self.roster, &self.view.query(), output_dir)
    }

    /// Sets the search term; a blank term leaves the view unchanged and warns.
    pub fn search(&mut self, term: &str) -> Result<commands::CmdResult> {
        if !self.view.set_search(term) {
            let mut result = commands::CmdResult::default();
            result.add_message(commands::CmdMessage::warning("Enter text to search for."));
            return Ok(result);
        }
        self.list_records()
    }

    pub fn reset_search(&mut self) -> Result<commands::CmdResult> {
        self.view.reset_search();
        self.list_records()
    }

    pub fn record_at(&self, index: usize) -> Result<&Record> {
        index
            .checked_sub(1)
            .and_then(|i| self.roster.get_all().get(i))
            .ok_or_else(|| RosterError::Api(format!("Index {} not found", index)))
    }

    fn resolve_index(&self, index: usize) -> Result<RecordId> {
        self.record_at(index).map(|r| r.id())
    }

    pub fn config(&self, dir: &Path, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, ListQuery, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::query::SortKey;
    use crate::store::memory::InMemoryStore;
    use crate::validation::fixtures::valid_form;

    fn form(last: &str, first: &str, n: u8) -> RecordForm {
        let mut f = valid_form();
        f.last_name = last.into();
        f.first_name = first.into();
        f.email = format!("{}{}@example.com", first, n).to_lowercase();
        f.phone = format!("+3805012345{:02}", n);
        f
    }

    fn api_with(names: &[(&str, &str)]) -> RosterApi<InMemoryStore> {
        let mut api = RosterApi::load(InMemoryStore::new()).unwrap();
        for (n, (last, first)) in names.iter().enumerate() {
            api.create_record(&form(last, first, n as u8)).unwrap();
        }
        api
    }

    fn listed_names(api: &RosterApi<InMemoryStore>) -> Vec<String> {
        api.list_records()
            .unwrap()
            .listed_records
            .iter()
            .map(|dr| format!("{}/{}", dr.record.last_name, dr.record.first_name))
            .collect()
    }

    #[test]
    fn create_switches_view_to_first_name_ascending() {
        let api = api_with(&[("Smith", "Bob"), ("Adams", "Zoe"), ("Brown", "Ann")]);
        assert_eq!(
            api.view().sort_key(),
            Some((SortKey::Field(SortField::FirstName), SortDirection::Ascending))
        );
        assert_eq!(listed_names(&api), ["Brown/Ann", "Smith/Bob", "Adams/Zoe"]);
    }

    #[test]
    fn search_then_sort_through_view() {
        let mut api = api_with(&[("Smith", "Bob"), ("Smith", "Ann"), ("Adams", "Zoe")]);
        api.view_mut().clear_sort();
        api.view_mut().toggle_sort_field(SortField::LastName);
        api.view_mut().toggle_sort_field(SortField::FirstName);
        api.view_mut().set_direction(SortDirection::Ascending);
        assert_eq!(listed_names(&api), ["Adams/Zoe", "Smith/Ann", "Smith/Bob"]);

        let result = api.search("smith").unwrap();
        assert_eq!(result.listed_records.len(), 2);
        assert_eq!(result.listed_records[0].record.first_name, "Ann");
        assert_eq!(result.listed_records[0].index, 2);

        let result = api.reset_search().unwrap();
        assert_eq!(result.listed_records.len(), 3);
    }

    #[test]
    fn blank_search_warns_and_keeps_view() {
        let mut api = api_with(&[("Smith", "Bob")]);
        let result = api.search("  ").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(api.view().search_term(), None);
    }

    #[test]
    fn update_and_delete_by_display_index() {
        let mut api = api_with(&[("Smith", "Bob"), ("Adams", "Zoe")]);
        let mut edited = RecordForm::from(api.record_at(2).unwrap());
        edited.group = "KN-99".into();
        api.update_record(2, &edited).unwrap();
        assert_eq!(api.record_at(2).unwrap().group, "KN-99");

        api.delete_records(&[1, 1]).unwrap();
        assert_eq!(api.roster().len(), 1);
        assert_eq!(api.record_at(1).unwrap().last_name, "Adams");
    }

    #[test]
    fn bad_indexes_are_errors() {
        let mut api = api_with(&[("Smith", "Bob")]);
        assert!(api.record_at(0).is_err());
        assert!(api.record_at(2).is_err());
        assert!(api.delete_records(&[1, 5]).is_err());
        assert_eq!(api.roster().len(), 1);
    }

    #[test]
    fn export_uses_current_view() {
        let mut api = api_with(&[("Smith", "Bob"), ("Adams", "Zoe")]);
        api.view_mut().set_search("adams");
        let report = api.export_report(None).unwrap().report.unwrap();
        assert!(report.contains("Full name: Adams Zoe"));
        assert!(!report.contains("Smith"));
    }
}
