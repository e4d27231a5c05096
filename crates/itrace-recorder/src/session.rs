use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{Error, Result};

/// Directory holding the files of one trace session.
///
/// Its name is derived from the traced module and the session start time:
/// `<root>/<module-basename>_<module-base-hex>_<millis>/`. It is only
/// created when a file first needs to be written in it.
#[derive(Clone, Debug)]
pub struct SessionDirectory {
    root: PathBuf,
    module_name: String,
    module_base: u64,
    path: Option<PathBuf>,
}

impl SessionDirectory {
    /// Creates the (not yet created) session directory of a module.
    pub fn new(root: impl Into<PathBuf>, module_path: impl AsRef<Path>, module_base: u64) -> Self {
        let module_name = module_path
            .as_ref()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "module".to_owned());

        Self {
            root: root.into(),
            module_name,
            module_base,
            path: None,
        }
    }

    /// Root directory of the session directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Base name of the traced module.
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// Path of the session directory, if it was created.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Name of the session directory for a session started at `millis`
    /// (milliseconds since the Unix epoch).
    pub fn dir_name(&self, millis: u128) -> String {
        format!("{}_{:x}_{millis}", self.module_name, self.module_base)
    }

    /// Returns the session directory, creating it on the first call.
    pub fn ensure(&mut self) -> Result<&Path> {
        if self.path.is_none() {
            let millis = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis();
            let path = self.root.join(self.dir_name(millis));

            fs::create_dir_all(&path).map_err(|e| Error::SessionDirectory(path.clone(), e))?;
            tracing::info!(path = %path.display(), "session directory created");

            self.path = Some(path);
        }

        Ok(self.path.as_deref().unwrap_or(&self.root))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::SessionDirectory;

    #[test]
    fn dir_name() {
        let session = SessionDirectory::new("/data/local/tmp", "/system/lib64/libfoo.so", 0x7f12_3000);
        assert_eq!(session.module_name(), "libfoo.so");
        assert_eq!(session.dir_name(1234), "libfoo.so_7f123000_1234");

        let session = SessionDirectory::new("/tmp", "/", 0x1000);
        assert_eq!(session.dir_name(1), "module_1000_1");
    }

    #[test]
    fn created_once() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let mut session = SessionDirectory::new(tmp.path(), "libfoo.so", 0x1000);
        assert!(session.path().is_none());

        let first = session.ensure().expect("create").to_path_buf();
        let second = session.ensure().expect("create").to_path_buf();

        assert_eq!(first, second);
        assert!(first.is_dir());
        assert_eq!(first.parent(), Some(tmp.path()));
    }

    #[test]
    fn creation_failure() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let file = tmp.path().join("file");
        std::fs::write(&file, b"").expect("write");

        let mut session = SessionDirectory::new(&file, "libfoo.so", 0x1000);
        assert!(session.ensure().is_err());
        assert!(session.path().is_none());
    }
}
