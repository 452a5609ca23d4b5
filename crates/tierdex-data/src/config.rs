//! Project configuration, read from an optional `tierdex.toml`.
//!
//! Every field is optional. Relative directories resolve against the project
//! root, and command line flags override whatever the file says.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::BuildError;

/// Config file name looked up in the project root.
pub const CONFIG_FILE: &str = "tierdex.toml";

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_DIST_DIR: &str = "dist";

/// Raw contents of `tierdex.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub data_dir: Option<PathBuf>,
    pub dist_dir: Option<PathBuf>,
    #[serde(default)]
    pub templates: TemplatesConfig,
}

/// Template target overrides. An absent list means the built-in list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplatesConfig {
    pub classes: Option<Vec<TemplateTarget>>,
    pub chains: Option<Vec<TemplateTarget>>,
}

/// One class or chain the template generator should scaffold.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TemplateTarget {
    pub id: String,
    pub name: String,
}

impl TemplateTarget {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Where sources are read from and compiled files are written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub classes_dir: PathBuf,
    pub chains_dir: PathBuf,
    pub dist_dir: PathBuf,
}

impl Layout {
    /// `data_dir/classes`, `data_dir/chains` and `dist_dir`.
    pub fn new(data_dir: &Path, dist_dir: &Path) -> Self {
        Self {
            classes_dir: data_dir.join("classes"),
            chains_dir: data_dir.join("chains"),
            dist_dir: dist_dir.to_path_buf(),
        }
    }

    /// Compiled chains live in a subdirectory of the output.
    pub fn dist_chains_dir(&self) -> PathBuf {
        self.dist_dir.join("chains")
    }
}

impl Config {
    /// Load `path`. A missing file yields the default config.
    pub fn load(path: &Path) -> Result<Self, BuildError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| BuildError::Config {
                file: path.to_path_buf(),
                detail: e.to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(BuildError::Config {
                file: path.to_path_buf(),
                detail: e.to_string(),
            }),
        }
    }

    /// Resolve directories against `root`, letting `data_dir` / `dist_dir`
    /// (from the command line) win over the file.
    pub fn layout(&self, root: &Path, data_dir: Option<&Path>, dist_dir: Option<&Path>) -> Layout {
        let data = data_dir
            .or(self.data_dir.as_deref())
            .unwrap_or(Path::new(DEFAULT_DATA_DIR));
        let dist = dist_dir
            .or(self.dist_dir.as_deref())
            .unwrap_or(Path::new(DEFAULT_DIST_DIR));
        Layout::new(&root.join(data), &root.join(dist))
    }

    pub fn class_targets(&self) -> Vec<TemplateTarget> {
        self.templates
            .classes
            .clone()
            .unwrap_or_else(default_class_targets)
    }

    pub fn chain_targets(&self) -> Vec<TemplateTarget> {
        self.templates
            .chains
            .clone()
            .unwrap_or_else(default_chain_targets)
    }
}

/// The built-in class list: negative, 0 through 22 (20 split in A and B),
/// and secret.
pub fn default_class_targets() -> Vec<TemplateTarget> {
    let mut targets = vec![TemplateTarget::new("class_negative", "Class Negative")];
    for n in 0..=19 {
        targets.push(TemplateTarget::new(format!("class_{n}"), format!("Class {n}")));
    }
    targets.push(TemplateTarget::new("class_20a", "Class 20A"));
    targets.push(TemplateTarget::new("class_20b", "Class 20B"));
    targets.push(TemplateTarget::new("class_21", "Class 21"));
    targets.push(TemplateTarget::new("class_22", "Class 22"));
    targets.push(TemplateTarget::new("class_secret", "Class Secret"));
    targets
}

pub fn default_chain_targets() -> Vec<TemplateTarget> {
    vec![
        TemplateTarget::new("excavation_chain", "Excavation Chain"),
        TemplateTarget::new("gar_chain", "Gar Chain"),
        TemplateTarget::new("error_chain", "Error Chain"),
        TemplateTarget::new("death_chain", "Death Chain"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::tests::{cleanup, make_test_dir};
    use std::fs;

    #[test]
    fn default_targets() {
        let classes = default_class_targets();
        assert_eq!(classes.len(), 26);
        assert_eq!(classes[0].id, "class_negative");
        assert_eq!(classes[1], TemplateTarget::new("class_0", "Class 0"));
        assert_eq!(classes[21].id, "class_20a");
        assert_eq!(classes[25], TemplateTarget::new("class_secret", "Class Secret"));

        assert_eq!(default_chain_targets().len(), 4);
    }

    #[test]
    fn missing_file_is_default() {
        let dir = make_test_dir("config_missing");
        let config = Config::load(&dir.join(CONFIG_FILE)).unwrap();
        assert!(config.data_dir.is_none());
        assert_eq!(config.class_targets().len(), 26);

        cleanup(&dir);
    }

    #[test]
    fn load_overrides() {
        let dir = make_test_dir("config_overrides");
        let path = dir.join(CONFIG_FILE);
        fs::write(
            &path,
            r#"
data_dir = "src_data"

[templates]
chains = [{ id = "gar_chain", name = "Gar Chain" }]
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("src_data")));
        assert_eq!(config.chain_targets(), [TemplateTarget::new("gar_chain", "Gar Chain")]);
        assert_eq!(config.class_targets().len(), 26);

        cleanup(&dir);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let dir = make_test_dir("config_unknown");
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, "output = \"x\"\n").unwrap();

        let result = Config::load(&path);
        assert!(matches!(result, Err(BuildError::Config { .. })));

        cleanup(&dir);
    }

    #[test]
    fn layout_precedence() {
        let root = Path::new("/project");
        let config = Config {
            data_dir: Some(PathBuf::from("from_file")),
            ..Default::default()
        };

        let layout = config.layout(root, None, None);
        assert_eq!(layout.classes_dir, Path::new("/project/from_file/classes"));
        assert_eq!(layout.chains_dir, Path::new("/project/from_file/chains"));
        assert_eq!(layout.dist_dir, Path::new("/project/dist"));
        assert_eq!(layout.dist_chains_dir(), Path::new("/project/dist/chains"));

        let layout = config.layout(root, Some(Path::new("cli")), Some(Path::new("/abs/out")));
        assert_eq!(layout.classes_dir, Path::new("/project/cli/classes"));
        assert_eq!(layout.dist_dir, Path::new("/abs/out"));
    }
}
