//! Config stores: resolve a logical document name to a parsed [`Document`].
//!
//! Provides format detection (YAML/RON/TOML/JSON), file discovery, bundled
//! default templates, and the [`ConfigStore`] contract the lifecycle
//! controller loads documents through.

use crate::document::{Document, DocumentError};
use serde_yaml::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur while loading a config document.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// No document with this name exists and no template is bundled for it.
    #[error("required document '{name}' not found in {dir}")]
    MissingRequired { name: String, dir: PathBuf },

    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// Two files with the same base name but different formats exist.
    #[error("conflicting formats: {a} and {b}")]
    ConflictingFormats { a: PathBuf, b: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// The file parsed, but its top level is not a mapping of recipes.
    #[error("invalid document {file}: {source}")]
    InvalidDocument { file: PathBuf, source: DocumentError },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Ron,
    Toml,
    Json,
}

/// Extensions probed by [`find_data_file`], in order.
pub const EXTENSIONS: [&str; 5] = ["yml", "yaml", "ron", "toml", "json"];

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, DataLoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yml" | "yaml") => Ok(Format::Yaml),
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(DataLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

// ===========================================================================
// File discovery
// ===========================================================================

/// Scan a directory for a document with the given base name.
///
/// Returns `Ok(None)` if no file is found, or `Err(ConflictingFormats)` if
/// more than one extension exists for the same base name.
pub fn find_data_file(dir: &Path, base_name: &str) -> Result<Option<PathBuf>, DataLoadError> {
    let mut found: Option<PathBuf> = None;

    for ext in &EXTENSIONS {
        let candidate = dir.join(format!("{base_name}.{ext}"));
        if candidate.exists() {
            if let Some(ref existing) = found {
                return Err(DataLoadError::ConflictingFormats {
                    a: existing.clone(),
                    b: candidate,
                });
            }
            found = Some(candidate);
        }
    }

    Ok(found)
}

// ===========================================================================
// Deserialization
// ===========================================================================

/// Parse document text in the given format. `origin` is only used in errors.
pub fn parse_str(content: &str, format: Format, origin: &Path) -> Result<Document, DataLoadError> {
    let parse_err = |detail: String| DataLoadError::Parse {
        file: origin.to_path_buf(),
        detail,
    };

    let value: Value = if content.trim().is_empty() {
        Value::Null
    } else {
        match format {
            Format::Yaml => serde_yaml::from_str(content).map_err(|e| parse_err(e.to_string()))?,
            Format::Ron => ron::from_str(content).map_err(|e| parse_err(e.to_string()))?,
            Format::Toml => toml::from_str(content).map_err(|e| parse_err(e.to_string()))?,
            Format::Json => serde_json::from_str(content).map_err(|e| parse_err(e.to_string()))?,
        }
    };

    Document::from_value(value).map_err(|source| DataLoadError::InvalidDocument {
        file: origin.to_path_buf(),
        source,
    })
}

/// Read a file and parse it according to its extension.
pub fn read_document(path: &Path) -> Result<Document, DataLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    parse_str(&content, format, path)
}

// ===========================================================================
// Stores
// ===========================================================================

/// Resolves a logical config name (`"crafting"`, `"smelting"`, ...) to a
/// parsed document.
pub trait ConfigStore {
    fn load(&self, name: &str) -> Result<Document, DataLoadError>;
}

impl<S: ConfigStore + ?Sized> ConfigStore for &S {
    fn load(&self, name: &str) -> Result<Document, DataLoadError> {
        (**self).load(name)
    }
}

/// Default documents shipped with the crate, keyed by logical name.
pub const BUNDLED_TEMPLATES: [(&str, &str); 3] = [
    ("crafting", include_str!("../defaults/crafting.yml")),
    ("smelting", include_str!("../defaults/smelting.yml")),
    ("blasting", include_str!("../defaults/blasting.yml")),
];

/// A store backed by a data directory.
///
/// When no file exists for a requested name and a template is registered
/// for it, the template is written to `<name>.yml` first.
#[derive(Debug, Clone)]
pub struct DirConfigStore {
    dir: PathBuf,
    templates: HashMap<String, String>,
}

impl DirConfigStore {
    /// A store with no templates: missing documents are errors.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            templates: HashMap::new(),
        }
    }

    /// A store that falls back to [`BUNDLED_TEMPLATES`].
    pub fn with_bundled_templates(dir: impl Into<PathBuf>) -> Self {
        let mut store = Self::new(dir);
        for (name, content) in BUNDLED_TEMPLATES {
            store = store.with_template(name, content);
        }
        store
    }

    pub fn with_template(mut self, name: &str, content: &str) -> Self {
        self.templates.insert(name.to_string(), content.to_string());
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn write_template(&self, name: &str, content: &str) -> Result<PathBuf, DataLoadError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(format!("{name}.yml"));
        std::fs::write(&path, content)?;
        tracing::info!(path = %path.display(), "created default {name} document");
        Ok(path)
    }
}

impl ConfigStore for DirConfigStore {
    fn load(&self, name: &str) -> Result<Document, DataLoadError> {
        let path = match find_data_file(&self.dir, name)? {
            Some(path) => path,
            None => match self.templates.get(name) {
                Some(template) => self.write_template(name, template)?,
                None => {
                    return Err(DataLoadError::MissingRequired {
                        name: name.to_string(),
                        dir: self.dir.clone(),
                    });
                }
            },
        };
        read_document(&path)
    }
}

/// A store holding documents in memory, for hosts that supply config
/// directly.
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    documents: HashMap<String, (Format, String)>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, format: Format, content: &str) {
        self.documents
            .insert(name.to_string(), (format, content.to_string()));
    }

    pub fn with_yaml(mut self, name: &str, content: &str) -> Self {
        self.insert(name, Format::Yaml, content);
        self
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self, name: &str) -> Result<Document, DataLoadError> {
        let (format, content) =
            self.documents
                .get(name)
                .ok_or_else(|| DataLoadError::MissingRequired {
                    name: name.to_string(),
                    dir: PathBuf::from("<memory>"),
                })?;
        parse_str(content, *format, Path::new(name))
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Create a temporary directory with a unique name for test isolation.
    fn make_test_dir(suffix: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "craftbook_data_test_{suffix}_{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Clean up a test directory.
    fn cleanup(dir: &Path) {
        let _ = fs::remove_dir_all(dir);
    }

    const SMELT_YAML: &str = r#"
iron:
  type: smelting
  ingredient: "minecraft:IRON_ORE"
  result: "minecraft:IRON_INGOT"
  cookingtime: 200
"#;

    // -----------------------------------------------------------------------
    // detect_format
    // -----------------------------------------------------------------------

    #[test]
    fn detect_format_by_extension() {
        assert_eq!(detect_format(Path::new("a.yml")).unwrap(), Format::Yaml);
        assert_eq!(detect_format(Path::new("a.yaml")).unwrap(), Format::Yaml);
        assert_eq!(detect_format(Path::new("a.ron")).unwrap(), Format::Ron);
        assert_eq!(detect_format(Path::new("a.toml")).unwrap(), Format::Toml);
        assert_eq!(detect_format(Path::new("a.json")).unwrap(), Format::Json);
    }

    #[test]
    fn detect_format_unsupported() {
        for name in ["a.txt", "a"] {
            assert!(matches!(
                detect_format(Path::new(name)),
                Err(DataLoadError::UnsupportedFormat { .. })
            ));
        }
    }

    // -----------------------------------------------------------------------
    // find_data_file
    // -----------------------------------------------------------------------

    #[test]
    fn find_data_file_found_and_missing() {
        let dir = make_test_dir("find");
        fs::write(dir.join("smelting.yaml"), SMELT_YAML).unwrap();

        assert_eq!(
            find_data_file(&dir, "smelting").unwrap(),
            Some(dir.join("smelting.yaml"))
        );
        assert_eq!(find_data_file(&dir, "crafting").unwrap(), None);

        cleanup(&dir);
    }

    #[test]
    fn find_data_file_conflict() {
        let dir = make_test_dir("conflict");
        fs::write(dir.join("crafting.yml"), "").unwrap();
        fs::write(dir.join("crafting.json"), "{}").unwrap();

        assert!(matches!(
            find_data_file(&dir, "crafting"),
            Err(DataLoadError::ConflictingFormats { .. })
        ));

        cleanup(&dir);
    }

    // -----------------------------------------------------------------------
    // parse_str
    // -----------------------------------------------------------------------

    #[test]
    fn every_format_yields_the_same_document() {
        let origin = Path::new("smelting");
        let yaml = parse_str(SMELT_YAML, Format::Yaml, origin).unwrap();
        let json = parse_str(
            r#"{"iron": {"type": "smelting", "ingredient": "minecraft:IRON_ORE",
                "result": "minecraft:IRON_INGOT", "cookingtime": 200}}"#,
            Format::Json,
            origin,
        )
        .unwrap();
        let toml = parse_str(
            r#"
[iron]
type = "smelting"
ingredient = "minecraft:IRON_ORE"
result = "minecraft:IRON_INGOT"
cookingtime = 200
"#,
            Format::Toml,
            origin,
        )
        .unwrap();
        let ron = parse_str(
            r#"{"iron": {"type": "smelting", "ingredient": "minecraft:IRON_ORE",
                "result": "minecraft:IRON_INGOT", "cookingtime": 200}}"#,
            Format::Ron,
            origin,
        )
        .unwrap();

        for doc in [&yaml, &json, &toml, &ron] {
            let entry = doc.entries().next().unwrap();
            let section = entry.section().unwrap();
            assert_eq!(entry.name().as_deref(), Some("iron"));
            assert_eq!(section.get_string("type").as_deref(), Some("smelting"));
            assert_eq!(section.get_int("cookingtime"), 200);
        }
    }

    #[test]
    fn parse_error_names_origin() {
        let err = parse_str("a: [unclosed", Format::Yaml, Path::new("crafting.yml")).unwrap_err();
        assert!(matches!(err, DataLoadError::Parse { .. }));
        assert!(err.to_string().contains("crafting.yml"));
    }

    #[test]
    fn whitespace_only_is_empty_document() {
        let doc = parse_str("  \n", Format::Json, Path::new("x")).unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn non_mapping_document_keeps_typed_source() {
        let err = parse_str("[1, 2]", Format::Json, Path::new("x.json")).unwrap_err();
        let DataLoadError::InvalidDocument { file, source } = &err else {
            panic!("expected InvalidDocument, got {err:?}");
        };
        assert_eq!(file, Path::new("x.json"));
        assert!(matches!(source, DocumentError::NotAMapping { kind: "a list" }));
        assert!(std::error::Error::source(&err).is_some());
    }

    // -----------------------------------------------------------------------
    // DirConfigStore
    // -----------------------------------------------------------------------

    #[test]
    fn dir_store_reads_existing_file() {
        let dir = make_test_dir("store_existing");
        fs::write(dir.join("smelting.yml"), SMELT_YAML).unwrap();

        let store = DirConfigStore::with_bundled_templates(&dir);
        let doc = store.load("smelting").unwrap();
        assert_eq!(doc.keys(), vec!["iron"]);

        cleanup(&dir);
    }

    #[test]
    fn dir_store_writes_missing_template() {
        let dir = make_test_dir("store_template");
        let store = DirConfigStore::new(dir.join("nested")).with_template("blasting", SMELT_YAML);

        let doc = store.load("blasting").unwrap();
        assert_eq!(doc.keys(), vec!["iron"]);
        let written = fs::read_to_string(dir.join("nested").join("blasting.yml")).unwrap();
        assert_eq!(written, SMELT_YAML);

        cleanup(&dir);
    }

    #[test]
    fn dir_store_does_not_overwrite_existing_file() {
        let dir = make_test_dir("store_keep");
        fs::write(dir.join("crafting.json"), "{}").unwrap();

        let store = DirConfigStore::with_bundled_templates(&dir);
        assert!(store.load("crafting").unwrap().is_empty());
        assert!(!dir.join("crafting.yml").exists());

        cleanup(&dir);
    }

    #[test]
    fn dir_store_missing_without_template() {
        let dir = make_test_dir("store_missing");
        let store = DirConfigStore::new(&dir);

        let err = store.load("crafting").unwrap_err();
        assert!(matches!(err, DataLoadError::MissingRequired { ref name, .. } if name == "crafting"));

        cleanup(&dir);
    }

    #[test]
    fn bundled_templates_parse() {
        for (name, content) in BUNDLED_TEMPLATES {
            let doc = parse_str(content, Format::Yaml, Path::new(name)).unwrap();
            assert!(!doc.is_empty(), "template {name} should define recipes");
        }
    }

    // -----------------------------------------------------------------------
    // MemoryConfigStore
    // -----------------------------------------------------------------------

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryConfigStore::new().with_yaml("smelting", SMELT_YAML);
        assert_eq!(store.load("smelting").unwrap().len(), 1);
        assert!(matches!(
            store.load("blasting"),
            Err(DataLoadError::MissingRequired { .. })
        ));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let data_err: DataLoadError = io_err.into();
        assert!(matches!(data_err, DataLoadError::Io(_)));
        assert!(format!("{data_err}").contains("file not found"));
    }
}
