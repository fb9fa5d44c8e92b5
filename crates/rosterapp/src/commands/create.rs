use crate::commands::{describe, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::roster::Roster;
use crate::store::RecordStore;
use crate::validation::{validate_form, RecordForm};

pub fn run<S: RecordStore>(roster: &mut Roster<S>, form: &RecordForm) -> Result<CmdResult> {
    let fields = validate_form(form, &*roster, None)?;
    let record = Record::new(fields);
    roster.add(record.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student added: {}",
        describe(record.id(), &record)
    )));
    Ok(result.with_affected_records(vec![record]))
}
