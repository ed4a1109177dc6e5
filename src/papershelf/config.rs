use crate::error::{Result, ShelfError};
use crate::paths::PdfLayout;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const PROJECT_CONFIG_DIR: &str = ".papershelf";

pub const DEFAULT_DATA_FILE: &str = "papers.json";
pub const DEFAULT_PDF_DIR: &str = "pdfs";
pub const DEFAULT_PDF_EXT: &str = "pdf";

/// Configuration for papershelf, stored in .papershelf/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Paper collection to load (relative paths resolve against the working directory)
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Directory that derived paper paths point into
    #[serde(default = "default_pdf_dir")]
    pub pdf_dir: String,

    /// Extension of derived paper paths, without the dot
    #[serde(default = "default_pdf_ext")]
    pub pdf_ext: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_pdf_dir() -> String {
    DEFAULT_PDF_DIR.to_string()
}

fn default_pdf_ext() -> String {
    DEFAULT_PDF_EXT.to_string()
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            pdf_dir: default_pdf_dir(),
            pdf_ext: default_pdf_ext(),
        }
    }
}

/// Keys accepted by the `config` command.
pub const CONFIG_KEYS: [&str; 3] = ["data-file", "pdf-dir", "pdf-ext"];

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    pub fn layout(&self) -> PdfLayout {
        PdfLayout::new(&self.pdf_dir, &self.pdf_ext)
    }

    pub fn set_pdf_ext(&mut self, ext: &str) {
        self.pdf_ext = ext.trim_start_matches('.').to_string();
    }

    pub fn set_pdf_dir(&mut self, dir: &str) {
        self.pdf_dir = dir.trim_end_matches('/').to_string();
    }

    pub fn get(&self, key: &str) -> Result<&str> {
        match key {
            "data-file" => Ok(&self.data_file),
            "pdf-dir" => Ok(&self.pdf_dir),
            "pdf-ext" => Ok(&self.pdf_ext),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" if value.is_empty() => {
                Err(ShelfError::Config("data-file cannot be empty".to_string()))
            }
            "data-file" => {
                self.data_file = value.to_string();
                Ok(())
            }
            "pdf-dir" => {
                self.set_pdf_dir(value);
                Ok(())
            }
            "pdf-ext" => {
                self.set_pdf_ext(value);
                Ok(())
            }
            other => Err(unknown_key(other)),
        }
    }
}

fn unknown_key(key: &str) -> ShelfError {
    ShelfError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

/// Picks the directory config is read from and written to.
///
/// A `.papershelf/` directory under `cwd` wins; otherwise the per-user config directory.
pub fn config_dir(cwd: &Path) -> PathBuf {
    let project = cwd.join(PROJECT_CONFIG_DIR);
    if project.exists() {
        return project;
    }
    ProjectDirs::from("com", "papershelf", "papershelf")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or(project)
}
