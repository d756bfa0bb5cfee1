use std::fs;
use std::path::{Path, PathBuf};

use super::error::ExportError;
use super::types::ProjectDocument;

/// Files produced by one export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub project: PathBuf,
    pub bom: PathBuf,
}

/// Writes project documents and BOM text into one output folder. Existing
/// files are never overwritten.
pub struct ProjectWriter {
    folder: PathBuf,
}

impl ProjectWriter {
    pub fn new(folder: PathBuf) -> Self {
        ProjectWriter { folder }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn write(
        &self,
        document: &ProjectDocument,
        bom_name: &str,
        bom_lines: &[String],
    ) -> Result<WrittenFiles, ExportError> {
        fs::create_dir_all(&self.folder)?;

        let project = available_path(&self.folder, &document.project.name, "json");
        let json = serde_json::to_string_pretty(document)?;
        fs::write(&project, json)?;
        log::info!("Project written to {}", project.display());

        let bom = available_path(&self.folder, bom_name, "txt");
        fs::write(&bom, bom_lines.join("\n"))?;
        log::info!("Bill of materials written to {}", bom.display());

        Ok(WrittenFiles { project, bom })
    }
}

/// `<folder>/<name>.<ext>`, or the first free `<name>_<n>.<ext>`.
pub fn available_path(folder: &Path, name: &str, ext: &str) -> PathBuf {
    let mut path = folder.join(format!("{}.{}", name, ext));
    let mut counter = 0;
    while path.exists() {
        counter += 1;
        path = folder.join(format!("{}_{}.{}", name, counter, ext));
    }
    path
}
