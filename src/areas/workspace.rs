use crate::errors::ResolveError;
use std::path::{Path, PathBuf};

const BACKUP_EXTENSION: &str = "orig";
const TEMP_SUFFIX: &str = "unconflict";

/// File access anchored at the plan's directory.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Absolute paths are kept, relative ones are joined to the workspace root.
    pub fn locate(&self, file_path: &Path) -> PathBuf {
        self.path.join(file_path)
    }

    pub fn read_file(&self, file_path: &Path) -> Result<String, ResolveError> {
        let file_path = self.locate(file_path);

        std::fs::read_to_string(&file_path).map_err(|e| ResolveError::io(file_path, e))
    }

    /// Replaces the file in one step: the content goes to a sibling temporary
    /// file which is then renamed over the target.
    pub fn write_file(&self, file_path: &Path, content: &str) -> Result<(), ResolveError> {
        let target = self.locate(file_path);
        let temp = Self::temp_path(&target)?;

        let written = std::fs::write(&temp, content).and_then(|_| {
            let permissions = std::fs::metadata(&target)?.permissions();
            std::fs::set_permissions(&temp, permissions)?;
            std::fs::rename(&temp, &target)
        });

        if let Err(e) = written {
            let _ = std::fs::remove_file(&temp);
            return Err(ResolveError::io(target, e));
        }

        Ok(())
    }

    /// Copies the file to `<name>.orig` next to it and returns the copy's path.
    pub fn backup_file(&self, file_path: &Path) -> Result<PathBuf, ResolveError> {
        let source = self.locate(file_path);
        let mut backup = source.clone().into_os_string();
        backup.push(".");
        backup.push(BACKUP_EXTENSION);
        let backup = PathBuf::from(backup);

        std::fs::copy(&source, &backup).map_err(|e| ResolveError::io(&backup, e))?;

        Ok(backup)
    }

    fn temp_path(target: &Path) -> Result<PathBuf, ResolveError> {
        let file_name = target.file_name().ok_or_else(|| {
            ResolveError::io(
                target,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
            )
        })?;

        Ok(target.with_file_name(format!(
            ".{}.{TEMP_SUFFIX}",
            file_name.to_string_lossy()
        )))
    }
}
