//! Console output for finished runs.

use std::fmt::Write as _;

use tierdex_core::{CollectionKind, ValidationError};
use tierdex_data::{CompileReport, Progress, TemplateReport};
use tierdex_data::compiler::{ALL_FILE, INDEX_FILE};

/// Print one progress event as soon as the compiler reports it.
pub fn print_progress(event: Progress<'_>) {
    print!("{}", render_progress(event));
}

pub fn print_compile(report: &CompileReport) {
    print!("{}", render_compile(report));
}

pub fn print_templates(report: &TemplateReport) {
    print!("{}", render_templates(report));
}

fn render_progress(event: Progress<'_>) -> String {
    match event {
        Progress::Section(CollectionKind::Class) => "Processing classes...\n".to_string(),
        Progress::Section(CollectionKind::Chain) => "\nProcessing chains...\n".to_string(),
        Progress::File {
            name, difficulties, ..
        } => format!("  {name}: {difficulties} difficulties\n"),
    }
}

fn render_compile(report: &CompileReport) -> String {
    let mut out = String::new();
    let index = &report.index;

    let _ = writeln!(
        out,
        "\n{INDEX_FILE}: {} classes, {} chains, {} total difficulties",
        index.total_classes, index.total_chains, index.total_difficulties
    );
    let _ = writeln!(out, "{ALL_FILE}: {} difficulties", report.total);

    out.push_str(&render_errors(&report.errors));
    out
}

fn render_errors(errors: &[ValidationError]) -> String {
    if errors.is_empty() {
        return "\nNo validation errors. Compiled successfully!\n".to_string();
    }

    let mut out = format!("\n{} validation error(s) found:\n", errors.len());
    for err in errors {
        let _ = writeln!(out, "  {err}");
    }
    out
}

fn render_templates(report: &TemplateReport) -> String {
    let mut out = String::new();
    for path in &report.created {
        let _ = writeln!(out, "  Created: {}", path.display());
    }
    for path in &report.skipped {
        let _ = writeln!(out, "  SKIP (already exists): {}", path.display());
    }
    let _ = writeln!(
        out,
        "\nDone! Created {} template(s), skipped {} existing.",
        report.created.len(),
        report.skipped.len()
    );
    if !report.created.is_empty() {
        out.push_str("Now open each new file and replace the example difficulty with real data.\n");
    }
    out
}
