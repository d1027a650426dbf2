use std::path::{Path, PathBuf};

pub trait VersionReader {
    type Info;

    /// Returns `None` when the file cannot be read at all.
    fn read_version(&self, path: &Path) -> Option<Self::Info>;
}

pub trait ConfigProvider {
    fn root_dir(&self) -> &Path;
    fn plist_path(&self) -> PathBuf;
    fn manifest_path(&self) -> PathBuf;
    fn ios_output_key(&self) -> &str;
    fn android_output_key(&self) -> &str;
    fn dry_run(&self) -> bool;
}
