// src/content/loader.rs
//! Eager content file loading

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::{Result, ShowcaseError};

/// An as-loaded, unvalidated content payload
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    /// File the record came from
    pub source: PathBuf,
    pub fields: Map<String, Value>,
}

/// Load every content file in `dir` whose extension is listed in
/// `extensions`, ordered by file name.
///
/// Any unreadable or malformed file fails the whole load.
pub fn load_records(dir: &Path, extensions: &[String]) -> Result<Vec<RawRecord>> {
    if !dir.is_dir() {
        return Err(ShowcaseError::ContentDirNotFound(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|source| ShowcaseError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && has_content_extension(&path, extensions) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let records = paths
        .into_iter()
        .map(|path| {
            debug!("Loading content file {}", path.display());
            read_record(&path)
        })
        .collect::<Result<Vec<_>>>()?;

    info!("Loaded {} records from {}", records.len(), dir.display());
    Ok(records)
}

/// Read and parse a single content file
pub fn read_record(path: &Path) -> Result<RawRecord> {
    let content = fs::read_to_string(path).map_err(|source| ShowcaseError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value = parse_content(path, &content)?;
    match value {
        Value::Object(fields) => Ok(RawRecord {
            source: path.to_path_buf(),
            fields,
        }),
        _ => Err(ShowcaseError::NotAnObject(path.to_path_buf())),
    }
}

fn parse_content(path: &Path, content: &str) -> Result<Value> {
    let parse_error = |message: String| ShowcaseError::Parse {
        path: path.to_path_buf(),
        message,
    };

    match extension_of(path).as_deref() {
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))
        }
        _ => serde_json::from_str(content).map_err(|e| parse_error(e.to_string())),
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

fn has_content_extension(path: &Path, extensions: &[String]) -> bool {
    match extension_of(path) {
        Some(ext) => extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext)),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn json_only() -> Vec<String> {
        vec!["json".to_string()]
    }

    #[test]
    fn test_loads_in_file_name_order() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.json"), r#"{"n": 2}"#).unwrap();
        fs::write(tmp.path().join("a.json"), r#"{"n": 1}"#).unwrap();
        fs::write(tmp.path().join("c.json"), r#"{"n": 3}"#).unwrap();

        let records = load_records(tmp.path(), &json_only()).unwrap();
        let names: Vec<_> = records
            .iter()
            .map(|r| r.source.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json", "c.json"]);
        assert_eq!(records[0].fields["n"], 1);
    }

    #[test]
    fn test_ignores_other_extensions_and_directories() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.json"), "{}").unwrap();
        fs::write(tmp.path().join("notes.md"), "# not content").unwrap();
        fs::write(tmp.path().join("README"), "plain").unwrap();
        fs::create_dir(tmp.path().join("nested.json")).unwrap();

        let records = load_records(tmp.path(), &json_only()).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_yaml_records_when_enabled() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.yaml"), "title: From YAML\ntechStack: [Rust]\n").unwrap();

        assert!(load_records(tmp.path(), &json_only()).unwrap().is_empty());

        let records = load_records(tmp.path(), &["json".to_string(), "yaml".to_string()]).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fields["title"], "From YAML");
        assert_eq!(records[0].fields["techStack"][0], "Rust");
    }

    #[test]
    fn test_malformed_file_fails_whole_load() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("good.json"), "{}").unwrap();
        fs::write(tmp.path().join("bad.json"), "{ \"title\": ").unwrap();

        let err = load_records(tmp.path(), &json_only()).unwrap_err();
        match err {
            ShowcaseError::Parse { path, .. } => assert!(path.ends_with("bad.json")),
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_object_payload_is_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("list.json"), "[1, 2, 3]").unwrap();

        let err = load_records(tmp.path(), &json_only()).unwrap_err();
        assert!(matches!(err, ShowcaseError::NotAnObject(_)));
    }

    #[test]
    fn test_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let err = load_records(&tmp.path().join("missing"), &json_only()).unwrap_err();
        assert!(matches!(err, ShowcaseError::ContentDirNotFound(_)));
    }
}
