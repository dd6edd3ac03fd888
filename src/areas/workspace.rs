use crate::areas::database::Database;
use crate::areas::repository::METADATA_DIR;
use crate::artifacts::checkout::migration::{ActionType, Migration};
use crate::artifacts::objects::blob::Blob;
use anyhow::Context;
use bytes::Bytes;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 1] = [METADATA_DIR];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Path of `file` relative to the root, without `.` components
    pub fn relative_path(&self, file: &str) -> PathBuf {
        let path = Path::new(file);
        let path = path.strip_prefix(self.path.as_ref()).unwrap_or(path);

        path.components()
            .filter(|component| !matches!(component, Component::CurDir))
            .collect()
    }

    pub fn parse_blob(&self, path: &Path) -> anyhow::Result<Blob> {
        let data = self.read_file(path)?;
        Ok(Blob::new(data))
    }

    /// Every regular file under the root, relative to it, in path order
    pub fn list_files(&self) -> anyhow::Result<BTreeSet<PathBuf>> {
        let mut files = BTreeSet::new();

        let walker = WalkDir::new(&self.path)
            .min_depth(1)
            .into_iter()
            .filter_entry(|entry| !Self::is_ignored(entry.file_name().to_string_lossy().as_ref()));

        for entry in walker {
            let entry = entry.with_context(|| {
                format!("Unable to list files under {}", self.path.display())
            })?;

            if entry.file_type().is_file() {
                let relative_path = entry
                    .path()
                    .strip_prefix(self.path.as_ref())
                    .with_context(|| format!("Path outside workspace: {}", entry.path().display()))?;
                files.insert(relative_path.to_path_buf());
            }
        }

        Ok(files)
    }

    fn is_ignored(name: &str) -> bool {
        IGNORED_PATHS.contains(&name)
    }

    pub fn file_exists(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_file()
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let full_path = self.path.join(file_path);

        let content = std::fs::read(&full_path)
            .with_context(|| format!("Unable to read file {}", file_path.display()))?;

        Ok(content.into())
    }

    pub fn write_file(&self, file_path: &Path, data: &[u8]) -> anyhow::Result<()> {
        let full_path = self.path.join(file_path);

        if let Some(parent) = full_path.parent() {
            self.make_directory(parent)?;
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&full_path)
            .with_context(|| format!("Failed to open file: {:?}", file_path))?;

        file.write_all(data)
            .with_context(|| format!("Failed to write to file: {:?}", file_path))?;

        Ok(())
    }

    /// Delete a file if present, then any directories it leaves empty
    pub fn remove_file(&self, file_path: &Path) -> anyhow::Result<()> {
        let full_path = self.path.join(file_path);

        if full_path.is_file() {
            std::fs::remove_file(&full_path)
                .with_context(|| format!("Failed to remove file: {:?}", file_path))?;
        }

        let mut dir = full_path.parent();
        while let Some(dir_path) = dir {
            // the directory may already be gone along with the file
            if dir_path == &*self.path
                || !dir_path.is_dir()
                || !Self::is_empty_dir(dir_path)?
            {
                break;
            }
            std::fs::remove_dir(dir_path)
                .with_context(|| format!("Failed to remove directory: {:?}", dir_path))?;
            dir = dir_path.parent();
        }

        Ok(())
    }

    // Deletions go first so that a directory can be replaced by a file of the same name.
    pub fn apply_migration(&self, migration: &Migration, database: &Database) -> anyhow::Result<()> {
        for (file_path, _) in migration.changes(ActionType::Delete) {
            self.remove_file(file_path)?;
        }

        for action in [ActionType::Modify, ActionType::Add] {
            for (file_path, oid) in migration.changes(action) {
                let oid = oid
                    .as_ref()
                    .ok_or_else(|| anyhow::anyhow!("Invalid action and entry combination"))?;
                let blob = database.load_blob(oid)?;

                if self.path.join(file_path).is_dir() {
                    std::fs::remove_dir_all(self.path.join(file_path)).with_context(|| {
                        format!("Failed to remove existing directory: {:?}", file_path)
                    })?;
                }
                self.write_file(file_path, blob.content())?;
            }
        }

        tracing::debug!(
            deleted = migration.changes(ActionType::Delete).len(),
            written = migration.changes(ActionType::Modify).len()
                + migration.changes(ActionType::Add).len(),
            "synchronized working directory"
        );

        Ok(())
    }

    fn is_empty_dir(dir_path: &Path) -> anyhow::Result<bool> {
        Ok(std::fs::read_dir(dir_path)
            .with_context(|| format!("Failed to read directory: {:?}", dir_path))?
            .next()
            .is_none())
    }

    fn make_directory(&self, dir_path: &Path) -> anyhow::Result<()> {
        if let Some(blocking_file) = dir_path
            .ancestors()
            .take_while(|ancestor| *ancestor != &*self.path)
            .find(|ancestor| ancestor.is_file())
        {
            anyhow::bail!(
                "Cannot create directory {}: {} is a file",
                dir_path.display(),
                blocking_file.display()
            );
        }

        if !dir_path.exists() {
            std::fs::create_dir_all(dir_path)
                .with_context(|| format!("Failed to create directory: {:?}", dir_path))?;
        }

        Ok(())
    }
}
