use super::commands::AppContext;
use super::render::{print_config, print_messages, print_records};
use super::setup::{StudentArgs, ViewArgs};
use rosterapp::api::{CmdMessage, ConfigAction};
use rosterapp::error::{Result, RosterError};
use rosterapp::index::parse_index_or_range;
use rosterapp::query::{SortDirection, SortField};
use rosterapp::validation::RecordForm;
use std::path::PathBuf;

pub fn handle_add(ctx: &mut AppContext, fields: StudentArgs) -> Result<()> {
    let form = fields.into_form(RecordForm::default());
    let result = ctx.api.create_record(&form)?;
    print_messages(&result.messages);
    Ok(())
}

pub fn handle_list(ctx: &mut AppContext, view: ViewArgs) -> Result<()> {
    let warnings = apply_view(ctx, &view)?;
    print_messages(&warnings);
    let result = ctx.api.list_records()?;
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

pub fn handle_edit(ctx: &mut AppContext, index: usize, fields: StudentArgs) -> Result<()> {
    if fields.is_empty() {
        return Err(RosterError::Api("Nothing to change: pass at least one field".into()));
    }
    let current = RecordForm::from(ctx.api.record_at(index)?);
    let form = fields.into_form(current);
    let result = ctx.api.update_record(index, &form)?;
    print_messages(&result.messages);
    Ok(())
}

pub fn handle_delete(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let parsed = parse_indexes(&indexes)?;
    let result = ctx.api.delete_records(&parsed)?;
    print_messages(&result.messages);
    Ok(())
}

pub fn handle_export(
    ctx: &mut AppContext,
    view: ViewArgs,
    output: Option<PathBuf>,
    stdout: bool,
) -> Result<()> {
    let warnings = apply_view(ctx, &view)?;
    print_messages(&warnings);

    if stdout {
        let result = ctx.api.export_report(None)?;
        if let Some(report) = &result.report {
            print!("{}", report);
        }
        print_messages(&result.messages);
        return Ok(());
    }

    let dir = output.unwrap_or_else(|| ctx.config.export_dir_or(&ctx.data_dir));
    let result = ctx.api.export_report(Some(&dir))?;
    print_messages(&result.messages);
    Ok(())
}

pub fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(&ctx.data_dir, action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}

/// Pushes `--search` / `--sort` / `--desc` into the session view. A blank search
/// term is ignored with a warning.
fn apply_view(ctx: &mut AppContext, view: &ViewArgs) -> Result<Vec<CmdMessage>> {
    let mut messages = Vec::new();

    if let Some(term) = &view.search {
        if !ctx.api.view_mut().set_search(term) {
            messages.push(CmdMessage::warning("Empty search term ignored."));
        }
    }

    if !view.sort.is_empty() {
        let fields = view
            .sort
            .iter()
            .map(|name| name.parse::<SortField>())
            .collect::<Result<Vec<_>>>()?;
        let direction = if view.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        let state = ctx.api.view_mut();
        state.set_sort_fields(fields);
        state.set_direction(direction);
    }

    Ok(messages)
}

fn parse_indexes(inputs: &[String]) -> Result<Vec<usize>> {
    let mut indexes = Vec::new();
    for input in inputs {
        indexes.extend(parse_index_or_range(input).map_err(RosterError::Api)?);
    }
    Ok(indexes)
}

impl StudentArgs {
    fn is_empty(&self) -> bool {
        [
            &self.last_name,
            &self.first_name,
            &self.middle_name,
            &self.phone,
            &self.email,
            &self.birth_date,
            &self.group,
            &self.address,
            &self.education_type,
            &self.grades,
        ]
        .iter()
        .all(|v| v.is_none())
    }

    /// Overlays the given flags onto `base`; absent flags keep `base`'s value.
    fn into_form(self, base: RecordForm) -> RecordForm {
        RecordForm {
            last_name: self.last_name.unwrap_or(base.last_name),
            first_name: self.first_name.unwrap_or(base.first_name),
            middle_name: self.middle_name.unwrap_or(base.middle_name),
            phone: self.phone.unwrap_or(base.phone),
            email: self.email.unwrap_or(base.email),
            birth_date: self.birth_date.unwrap_or(base.birth_date),
            group: self.group.unwrap_or(base.group),
            address: self.address.unwrap_or(base.address),
            education_type: self.education_type.unwrap_or(base.education_type),
            grades: self.grades.unwrap_or(base.grades),
        }
    }
}
