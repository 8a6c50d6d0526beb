use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Result of writing one part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// Nothing was written because there is no model for this part
    Skipped,
}

/// A file to be written to disk
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the write rules
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the file content, including the header line if one is set
    pub fn content(&self) -> String {
        match &self.rules.header {
            Some(header) => format!("{}\n\n{}", header, self.content),
            None => self.content.clone(),
        }
    }

    /// Write the file, replacing any previous version
    pub fn write(&self) -> Result<()> {
        write_file(&self.path, &self.content())
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    /// Line written before the content, separated by a blank line.
    pub header: Option<String>,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("test.scad");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_file_write_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.scad");

        fs::write(&path, "original").unwrap();

        File::new(&path, "updated").write().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_file_header_precedes_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("header.scad");

        let file = File::new(&path, "cube(1);\n").with_rules(FileRules {
            header: Some("$fn = 8;".to_string()),
        });
        file.write().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "$fn = 8;\n\ncube(1);\n");
    }
}
