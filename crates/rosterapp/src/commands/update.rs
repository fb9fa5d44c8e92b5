use crate::commands::{describe, CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::model::{RecordId, RecordPatch};
use crate::roster::Roster;
use crate::store::RecordStore;
use crate::validation::{validate_form, RecordForm};

/// Validates the edited form (the record's own email and phone don't count as
/// duplicates) and applies it field by field.
///
/// Unlike [`Roster::update`], an unknown id is an error here: hosts always edit a
/// record they just showed, so a miss means their view is stale.
pub fn run<S: RecordStore>(
    roster: &mut Roster<S>,
    id: RecordId,
    form: &RecordForm,
) -> Result<CmdResult> {
    if !roster.contains(id) {
        return Err(RosterError::RecordNotFound(id));
    }

    let fields = validate_form(form, &*roster, Some(id))?;
    roster.update(id, &RecordPatch::from(fields))?;

    let mut result = CmdResult::default();
    if let Some(record) = roster.get(id) {
        result.add_message(CmdMessage::success(format!(
            "Student updated: {}",
            describe(id, record)
        )));
        result.affected_records.push(record.clone());
    }
    Ok(result)
}
