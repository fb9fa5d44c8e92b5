use crate::commands::{describe, CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::model::RecordId;
use crate::roster::Roster;
use crate::store::RecordStore;

/// Removes every record in `ids`. All ids are checked before anything is removed.
pub fn run<S: RecordStore>(roster: &mut Roster<S>, ids: &[RecordId]) -> Result<CmdResult> {
    let records = ids
        .iter()
        .map(|id| roster.get(*id).cloned().ok_or(RosterError::RecordNotFound(*id)))
        .collect::<Result<Vec<_>>>()?;

    let mut result = CmdResult::default();
    for record in records {
        roster.delete(record.id())?;
        result.add_message(CmdMessage::success(format!(
            "Student deleted: {}",
            describe(record.id(), &record)
        )));
        result.affected_records.push(record);
    }
    Ok(result)
}
