use colored::*;
use rosterapp::api::{CmdMessage, MessageLevel};
use rosterapp::config::{RosterConfig, CONFIG_KEYS};
use rosterapp::index::DisplayRecord;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 36;
const GROUP_WIDTH: usize = 10;
const PHONE_WIDTH: usize = 15;
const EMAIL_WIDTH: usize = 28;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_records(records: &[DisplayRecord]) {
    if records.is_empty() {
        println!("No students found.");
        return;
    }
    let idx_width = records
        .iter()
        .map(|dr| format!("{}.", dr.index).width())
        .max()
        .unwrap_or(2);

    for dr in records {
        println!("{}", format_row(dr, idx_width));
    }
}

fn format_row(dr: &DisplayRecord, idx_width: usize) -> String {
    let r = &dr.record;
    let idx = pad_to_width(&format!("{}.", dr.index), idx_width);
    format!(
        "{} {} {} {} {} {}",
        idx.yellow(),
        pad_to_width(&r.full_name(), NAME_WIDTH).bold(),
        pad_to_width(&r.group, GROUP_WIDTH),
        pad_to_width(&r.phone, PHONE_WIDTH).dimmed(),
        pad_to_width(&r.email, EMAIL_WIDTH).dimmed(),
        r.average_display()
    )
}

pub fn print_config(config: &RosterConfig) {
    for key in CONFIG_KEYS {
        let value = config.get(key).unwrap_or_default();
        println!("{} = {}", key, value);
    }
}

/// Truncates to `width` columns (ellipsis included) and pads with spaces.
fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
