use crate::commands::list::select;
use crate::commands::{CmdMessage, CmdResult, ListQuery};
use crate::error::{Result, RosterError};
use crate::export::{export_as_text, report_filename};
use crate::roster::Roster;
use crate::store::RecordStore;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Renders the report for the queried records. With `output_dir`, also writes it
/// to a timestamped file there.
pub fn run<S: RecordStore>(
    roster: &Roster<S>,
    query: &ListQuery,
    output_dir: Option<&Path>,
) -> Result<CmdResult> {
    let records = select(roster, query);
    let mut result = CmdResult::default();

    if records.is_empty() {
        result.add_message(CmdMessage::info("No records to export."));
        return Ok(result);
    }

    let report = export_as_text(&records);

    if let Some(dir) = output_dir {
        let path = write_report(dir, &report)?;
        info!(path = %path.display(), count = records.len(), "report exported");
        result.add_message(CmdMessage::success(format!(
            "Exported {} record(s) to {}",
            records.len(),
            path.display()
        )));
        result.report_path = Some(path);
    }

    result.report = Some(report);
    Ok(result)
}

fn write_report(dir: &Path, report: &str) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(RosterError::Io)?;
    }
    let path = dir.join(report_filename(Local::now().naive_local()));
    fs::write(&path, report).map_err(RosterError::Io)?;
    Ok(path)
}
