use super::PaperSource;
use crate::error::{Result, ShelfError};
use crate::model::Paper;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PaperSource for FileSource {
    fn fetch(&self) -> Result<Vec<Paper>> {
        let content = fs::read_to_string(&self.path).map_err(ShelfError::Io)?;
        let papers: Vec<Paper> =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(papers)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_papers_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("papers.json");
        fs::write(
            &path,
            r#"[{"title": "Z", "date": "2024-01-01"}, {"title": "A", "authors": ["X", "Y"]}]"#,
        )
        .unwrap();

        let papers = FileSource::new(&path).fetch().unwrap();
        assert_eq!(papers.len(), 2);
        assert_eq!(papers[0].title, "Z");
        assert_eq!(papers[1].authors, vec!["X", "Y"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileSource::new(dir.path().join("papers.json")).fetch();
        assert!(matches!(result, Err(ShelfError::Io(_))));
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("papers.json");
        fs::write(&path, r#"{"title": "not a list"}"#).unwrap();

        let result = FileSource::new(&path).fetch();
        assert!(matches!(result, Err(ShelfError::Serialization(_))));
    }
}
