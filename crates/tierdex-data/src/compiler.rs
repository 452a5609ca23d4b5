//! The compile pipeline: sources in `data/`, compiled files in `dist/`.
//!
//! Runs once, sequentially. Class files are processed first, then chain
//! files, and finally `index.json` and `all.json` are written. Validation
//! problems never stop the run; they come back in the [`CompileReport`].

use std::path::Path;

use tierdex_core::{
    AllDifficulties, ChainSummary, ClassSummary, Collection, CollectionKind, Index,
    TaggedDifficulty, ValidationError, process_collection, sort_by_rating,
};

use crate::config::Layout;
use crate::error::BuildError;
use crate::loader::{discover_json_files, ensure_dir, file_name, file_stem, read_json, write_json};

/// Name of the aggregate index written to the output root.
pub const INDEX_FILE: &str = "index.json";

/// Name of the combined, globally sorted difficulty list.
pub const ALL_FILE: &str = "all.json";

/// What a compile run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileReport {
    pub index: Index,
    /// Entries written to `all.json`.
    pub total: usize,
    pub errors: Vec<ValidationError>,
}

impl CompileReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Events reported while a compile runs, in the order they happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<'a> {
    /// Every file of this kind is about to be processed.
    Section(CollectionKind),
    /// One source file was processed and its compiled copy written.
    File {
        kind: CollectionKind,
        name: &'a str,
        difficulties: usize,
    },
}

/// Accumulators for one run.
#[derive(Default)]
struct Compiler {
    combined: Vec<TaggedDifficulty>,
    classes: Vec<ClassSummary>,
    chains: Vec<ChainSummary>,
    errors: Vec<ValidationError>,
}

/// A source file after processing, with its resolved identity.
struct Compiled {
    collection: Collection,
    file: String,
    id: String,
    name: String,
}

impl Compiler {
    fn compile_file(&mut self, path: &Path, kind: CollectionKind) -> Result<Compiled, BuildError> {
        let file = file_name(path);
        let stem = file_stem(path);

        let source: Collection = read_json(path)?;
        let processed = process_collection(source, &file);
        for err in &processed.errors {
            tracing::warn!("{err}");
        }
        self.errors.extend(processed.errors);

        let collection = processed.collection;
        let id = collection.id(kind, &stem);
        let name = collection.display_name(kind, &stem);
        tracing::info!(
            kind = kind.label(),
            name = %name,
            difficulties = collection.difficulties.len(),
            "compiled"
        );

        Ok(Compiled {
            collection,
            file,
            id,
            name,
        })
    }

    fn add_class(
        &mut self,
        path: &Path,
        dist_dir: &Path,
        on_progress: &mut dyn FnMut(Progress<'_>),
    ) -> Result<(), BuildError> {
        let compiled = self.compile_file(path, CollectionKind::Class)?;

        self.combined.extend(
            compiled
                .collection
                .difficulties
                .iter()
                .map(|d| d.tagged(&compiled.id, &compiled.name)),
        );

        write_json(&dist_dir.join(&compiled.file), &compiled.collection)?;
        on_progress(Progress::File {
            kind: CollectionKind::Class,
            name: &compiled.name,
            difficulties: compiled.collection.difficulties.len(),
        });

        self.classes.push(ClassSummary {
            description: compiled.collection.description(),
            difficulty_count: compiled.collection.difficulties.len(),
            class_id: compiled.id,
            class_name: compiled.name,
            file: compiled.file,
        });
        Ok(())
    }

    fn add_chain(
        &mut self,
        path: &Path,
        dist_chains_dir: &Path,
        on_progress: &mut dyn FnMut(Progress<'_>),
    ) -> Result<(), BuildError> {
        let compiled = self.compile_file(path, CollectionKind::Chain)?;

        write_json(&dist_chains_dir.join(&compiled.file), &compiled.collection)?;
        on_progress(Progress::File {
            kind: CollectionKind::Chain,
            name: &compiled.name,
            difficulties: compiled.collection.difficulties.len(),
        });

        self.chains.push(ChainSummary {
            description: compiled.collection.description(),
            difficulty_count: compiled.collection.difficulties.len(),
            chain_id: compiled.id,
            chain_name: compiled.name,
            file: format!("chains/{}", compiled.file),
        });
        Ok(())
    }

    fn finish(mut self, dist_dir: &Path) -> Result<CompileReport, BuildError> {
        sort_by_rating(&mut self.combined);
        let total = self.combined.len();

        let index = Index {
            total_difficulties: total,
            total_classes: self.classes.len(),
            total_chains: self.chains.len(),
            classes: self.classes,
            chains: self.chains,
        };
        write_json(&dist_dir.join(INDEX_FILE), &index)?;
        tracing::info!(
            classes = index.total_classes,
            chains = index.total_chains,
            difficulties = total,
            "wrote {INDEX_FILE}"
        );

        let all = AllDifficulties {
            total,
            difficulties: self.combined,
        };
        write_json(&dist_dir.join(ALL_FILE), &all)?;
        tracing::info!(difficulties = total, "wrote {ALL_FILE}");

        Ok(CompileReport {
            index,
            total,
            errors: self.errors,
        })
    }
}

/// Compile every class and chain under `layout` into its output directory.
///
/// Outputs are overwritten wholesale. The returned report lists every
/// validation problem found; any I/O or parse failure aborts immediately.
pub fn compile(layout: &Layout) -> Result<CompileReport, BuildError> {
    compile_with_progress(layout, |_| {})
}

/// Like [`compile`], calling `on_progress` as each section starts and as
/// each file is written, so a caller can show progress before the run ends.
pub fn compile_with_progress(
    layout: &Layout,
    mut on_progress: impl FnMut(Progress<'_>),
) -> Result<CompileReport, BuildError> {
    let dist_chains_dir = layout.dist_chains_dir();
    ensure_dir(&layout.dist_dir)?;
    ensure_dir(&dist_chains_dir)?;

    let mut compiler = Compiler::default();

    on_progress(Progress::Section(CollectionKind::Class));
    for path in discover_json_files(&layout.classes_dir)? {
        compiler.add_class(&path, &layout.dist_dir, &mut on_progress)?;
    }
    on_progress(Progress::Section(CollectionKind::Chain));
    for path in discover_json_files(&layout.chains_dir)? {
        compiler.add_chain(&path, &dist_chains_dir, &mut on_progress)?;
    }

    compiler.finish(&layout.dist_dir)
}

// ===========================================================================
// Tests
// ===========================================================================
