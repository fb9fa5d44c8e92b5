//! Plain-text roster report.
//!
//! The layout is fixed: one block per record, numbered from 1, always the same
//! field order and separators. Hosts rely on it byte for byte.

use crate::model::Record;
use chrono::NaiveDateTime;
use std::fmt::Write;

const HEADER_RULE: &str = "==========================";
const FOOTER_RULE: &str = "=====================================================";

/// Renders `records` in the given order.
pub fn export_as_text(records: &[&Record]) -> String {
    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        write_block(&mut out, i + 1, record);
    }
    out
}

fn write_block(out: &mut String, number: usize, r: &Record) {
    // Writing into a String cannot fail
    let _ = writeln!(out, "{HEADER_RULE}{number}{HEADER_RULE}");
    let _ = writeln!(out, "Full name: {}", r.full_name());
    let _ = writeln!(out, "Phone number: {}", r.phone);
    let _ = writeln!(out, "Email: {}", r.email);
    let _ = writeln!(out, "Date of birth: {}", r.birth_date);
    let _ = writeln!(out, "Group: {}", r.group);
    let _ = writeln!(out, "Address: {}", r.address);
    let _ = writeln!(out, "Education type: {}", r.education_type);
    let _ = writeln!(out, "Average grade: {}", r.average_display());
    let _ = writeln!(out, "Grades: {}", r.grades_display());
    let _ = writeln!(out, "{FOOTER_RULE}");
    out.push('\n');
}

/// File name for a report generated at `now`, e.g. `students_19-10-2026_14-05.txt`.
pub fn report_filename(now: NaiveDateTime) -> String {
    format!("students_{}.txt", now.format("%d-%m-%Y_%H-%M"))
}
