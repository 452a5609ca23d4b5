//! Filesystem side of the tierdex pipeline: loading source collections,
//! compiling them into `dist/`, scaffolding templates and reading config.

pub mod compiler;
pub mod config;
pub mod error;
pub mod loader;
pub mod templates;

pub use compiler::{CompileReport, Progress, compile, compile_with_progress};
pub use config::{Config, Layout, TemplateTarget};
pub use error::BuildError;
pub use templates::{TemplateReport, generate_templates};
