//! Scaffolding for new class and chain source files.
//!
//! Writes one placeholder file per target that does not exist yet. Existing
//! files are never touched, so running this again is a no-op.

use std::path::{Path, PathBuf};

use tierdex_core::process::PLACEHOLDER_NAME;
use tierdex_core::{Collection, CollectionKind, Difficulty};

use crate::config::{Layout, TemplateTarget};
use crate::error::BuildError;
use crate::loader::{ensure_dir, write_json};

/// Paths created and skipped by one template run, in target order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateReport {
    pub created: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// The entry every template starts with. Compilation drops it.
pub fn placeholder_difficulty() -> Difficulty {
    Difficulty::new(
        PLACEHOLDER_NAME,
        "rbxassetid://0",
        0,
        "A short description of this difficulty goes here.",
    )
}

/// A fresh source collection for `target`.
pub fn template_collection(kind: CollectionKind, target: &TemplateTarget) -> Collection {
    let description = format!("Description of this {} goes here.", kind.label());
    let mut collection = Collection::new(kind, &target.id, &target.name, &description);
    collection.difficulties.push(placeholder_difficulty());
    collection
}

fn scaffold(
    dir: &Path,
    kind: CollectionKind,
    targets: &[TemplateTarget],
    report: &mut TemplateReport,
) -> Result<(), BuildError> {
    ensure_dir(dir)?;

    for target in targets {
        let path = dir.join(format!("{}.json", target.id));
        if path.try_exists()? {
            tracing::debug!(path = %path.display(), "template target exists, skipping");
            report.skipped.push(path);
            continue;
        }
        write_json(&path, &template_collection(kind, target))?;
        tracing::info!(path = %path.display(), "created {} template", kind.label());
        report.created.push(path);
    }
    Ok(())
}

/// Write a template for every class and chain target that has no source
/// file yet.
pub fn generate_templates(
    layout: &Layout,
    classes: &[TemplateTarget],
    chains: &[TemplateTarget],
) -> Result<TemplateReport, BuildError> {
    let mut report = TemplateReport::default();
    scaffold(&layout.classes_dir, CollectionKind::Class, classes, &mut report)?;
    scaffold(&layout.chains_dir, CollectionKind::Chain, chains, &mut report)?;
    Ok(report)
}
