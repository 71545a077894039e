//! Content location configuration.
//!
//! Configuration sources (highest priority first):
//! 1. Explicit content directory (the CLI `--content` flag)
//! 2. Environment variable `SHOWCASE_CONTENT_DIR`
//! 3. Config file (`.showcase/config.yaml`)
//! 4. Defaults (`./content`, with `projects/` and `skills/` inside)
//!
//! Config file discovery:
//! - Searches the current directory and its parents for `.showcase/config.yaml`
//! - Relative paths in the config file resolve against the directory that
//!   contains `.showcase/`

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, ShowcaseError};

pub const CONFIG_DIR: &str = ".showcase";
pub const CONFIG_FILE: &str = "config.yaml";
pub const CONTENT_DIR_ENV: &str = "SHOWCASE_CONTENT_DIR";

const DEFAULT_CONTENT_DIR: &str = "content";
const DEFAULT_PROJECTS_DIR: &str = "projects";
const DEFAULT_SKILLS_DIR: &str = "skills";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    pub content_dir: Option<String>,
    pub projects_dir: Option<String>,
    pub skills_dir: Option<String>,
    pub extensions: Option<Vec<String>>,
}

/// Resolved configuration with absolute content paths
#[derive(Debug, Clone, PartialEq)]
pub struct ContentConfig {
    /// Root of the content tree
    pub content_dir: PathBuf,
    /// Project records directory, relative to `content_dir`
    pub projects_dir: String,
    /// Skill records directory, relative to `content_dir`
    pub skills_dir: String,
    /// File extensions picked up by the loader, without the leading dot
    pub extensions: Vec<String>,
    /// Path to config file (if one was used)
    pub config_file: Option<PathBuf>,
}

impl ContentConfig {
    /// Configuration rooted at `content_dir` with default layout
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
            projects_dir: DEFAULT_PROJECTS_DIR.to_string(),
            skills_dir: DEFAULT_SKILLS_DIR.to_string(),
            extensions: vec!["json".to_string()],
            config_file: None,
        }
    }

    pub fn projects_path(&self) -> PathBuf {
        self.content_dir.join(&self.projects_dir)
    }

    pub fn skills_path(&self) -> PathBuf {
        self.content_dir.join(&self.skills_dir)
    }

    /// Resolve configuration starting from the current directory.
    pub fn resolve(content_override: Option<PathBuf>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let env_dir = std::env::var_os(CONTENT_DIR_ENV).map(PathBuf::from);
        Self::resolve_from(&cwd, content_override, env_dir)
    }

    /// Resolve configuration with explicit inputs, searching for a config
    /// file from `start` upwards.
    pub fn resolve_from(
        start: &Path,
        content_override: Option<PathBuf>,
        env_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let mut config = Self::new(start.join(DEFAULT_CONTENT_DIR));

        if let Some(path) = find_config_file(start) {
            let file = load_config_file(&path)?;
            // .showcase/config.yaml -> project root
            let base = path
                .parent()
                .and_then(Path::parent)
                .unwrap_or(start)
                .to_path_buf();
            config.apply_file(&file, &base);
            config.config_file = Some(path);
        }

        if let Some(dir) = env_dir.filter(|d| !d.as_os_str().is_empty()) {
            config.content_dir = absolutize(start, dir);
        }

        if let Some(dir) = content_override {
            config.content_dir = absolutize(start, dir);
        }

        Ok(config)
    }

    fn apply_file(&mut self, file: &ConfigFile, base: &Path) {
        if let Some(dir) = &file.content_dir {
            self.content_dir = absolutize(base, PathBuf::from(dir));
        }
        if let Some(dir) = &file.projects_dir {
            self.projects_dir = dir.clone();
        }
        if let Some(dir) = &file.skills_dir {
            self.skills_dir = dir.clone();
        }
        if let Some(extensions) = &file.extensions {
            self.extensions = extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_lowercase())
                .filter(|e| !e.is_empty())
                .collect();
        }
    }
}

fn absolutize(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Find config file by searching `start` and its parents
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_DIR).join(CONFIG_FILE);
        if config_path.is_file() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path).map_err(|source| ShowcaseError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    // An empty file deserializes to unit in YAML, treat it as all defaults
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    serde_yaml::from_str(&content)
        .map_err(|e| ShowcaseError::Config(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(root: &Path, body: &str) {
        let dir = root.join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(CONFIG_FILE), body).unwrap();
    }

    #[test]
    fn test_defaults_without_config_file() {
        let tmp = TempDir::new().unwrap();
        let config = ContentConfig::resolve_from(tmp.path(), None, None).unwrap();

        assert_eq!(config.content_dir, tmp.path().join("content"));
        assert_eq!(config.projects_path(), tmp.path().join("content/projects"));
        assert_eq!(config.skills_path(), tmp.path().join("content/skills"));
        assert_eq!(config.extensions, vec!["json"]);
        assert!(config.config_file.is_none());
    }

    #[test]
    fn test_config_file_found_in_parent() {
        let tmp = TempDir::new().unwrap();
        write_config(
            tmp.path(),
            "content_dir: src/content\nprojects_dir: work\nextensions: [json, .YAML]\n",
        );
        let nested = tmp.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();

        let config = ContentConfig::resolve_from(&nested, None, None).unwrap();

        assert_eq!(config.content_dir, tmp.path().join("src/content"));
        assert_eq!(config.projects_dir, "work");
        assert_eq!(config.skills_dir, "skills");
        assert_eq!(config.extensions, vec!["json", "yaml"]);
        assert!(config.config_file.is_some());
    }

    #[test]
    fn test_env_overrides_file_and_flag_overrides_env() {
        let tmp = TempDir::new().unwrap();
        write_config(tmp.path(), "content_dir: from-file\n");

        let config =
            ContentConfig::resolve_from(tmp.path(), None, Some(PathBuf::from("from-env"))).unwrap();
        assert_eq!(config.content_dir, tmp.path().join("from-env"));

        let config = ContentConfig::resolve_from(
            tmp.path(),
            Some(PathBuf::from("from-flag")),
            Some(PathBuf::from("from-env")),
        )
        .unwrap();
        assert_eq!(config.content_dir, tmp.path().join("from-flag"));
    }

    #[test]
    fn test_empty_config_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        write_config(tmp.path(), "");

        let config = ContentConfig::resolve_from(tmp.path(), None, None).unwrap();
        assert_eq!(config.content_dir, tmp.path().join("content"));
    }

    #[test]
    fn test_malformed_config_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        write_config(tmp.path(), "extensions: {not: [a list\n");

        let err = ContentConfig::resolve_from(tmp.path(), None, None).unwrap_err();
        assert!(matches!(err, ShowcaseError::Config(_)));
    }
}
