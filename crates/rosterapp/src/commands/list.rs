use crate::commands::{CmdResult, ListQuery};
use crate::error::Result;
use crate::index::display_view;
use crate::model::Record;
use crate::query::sort_records;
use crate::roster::Roster;
use crate::store::RecordStore;

/// Applies the query: search first, then sort the matches.
pub fn select<'a, S: RecordStore>(roster: &'a Roster<S>, query: &ListQuery) -> Vec<&'a Record> {
    let found = match query.search.as_deref() {
        Some(term) => roster.search(term),
        None => roster.get_all().iter().collect(),
    };
    match &query.sort {
        Some((key, direction)) => sort_records(found, key, *direction),
        None => found,
    }
}

pub fn run<S: RecordStore>(roster: &Roster<S>, query: &ListQuery) -> Result<CmdResult> {
    let selected = select(roster, query);
    Ok(CmdResult::default().with_listed_records(display_view(roster.get_all(), &selected)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{SortDirection, SortField, SortKey};
    use crate::store::memory::fixtures::RosterFixture;

    fn listed(result: &CmdResult) -> Vec<(usize, String)> {
        result
            .listed_records
            .iter()
            .map(|dr| (dr.index, dr.record.last_name.clone()))
            .collect()
    }

    #[test]
    fn lists_canonical_order_by_default() {
        let roster = RosterFixture::new()
            .with_students(&[("Smith", "Bob"), ("Adams", "Zoe")])
            .roster;
        let result = run(&roster, &ListQuery::default()).unwrap();
        assert_eq!(
            listed(&result),
            [(1, "Smith".to_string()), (2, "Adams".to_string())]
        );
    }

    #[test]
    fn sorts_only_the_search_matches() {
        let roster = RosterFixture::new()
            .with_students(&[("Smith", "Bob"), ("Adams", "Zoe"), ("Smithson", "Ann")])
            .roster;
        let query = ListQuery::default()
            .search("smith")
            .sorted(SortKey::Field(SortField::FirstName), SortDirection::Ascending);

        let result = run(&roster, &query).unwrap();
        assert_eq!(
            listed(&result),
            [(3, "Smithson".to_string()), (1, "Smith".to_string())]
        );
    }

    #[test]
    fn empty_search_term_lists_everything() {
        let roster = RosterFixture::new()
            .with_students(&[("Smith", "Bob"), ("Adams", "Zoe")])
            .roster;
        let result = run(&roster, &ListQuery::default().search("")).unwrap();
        assert_eq!(result.listed_records.len(), 2);
    }
}
