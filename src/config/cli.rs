use crate::config::toml_config::ToolConfig;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::path::{Path, PathBuf};

/// Root directory and file config merged into what a run needs.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    root: PathBuf,
    file: ToolConfig,
    dry_run: bool,
}

impl ResolvedConfig {
    pub fn new(root: PathBuf, file: ToolConfig, dry_run: bool) -> Self {
        Self {
            root,
            file,
            dry_run,
        }
    }

    /// Loads the optional TOML file and validates the result.
    pub fn load(root: PathBuf, config_file: Option<&Path>, dry_run: bool) -> Result<Self> {
        let file = match config_file {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                ToolConfig::from_file(path)?
            }
            None => ToolConfig::default(),
        };
        let resolved = Self::new(root, file, dry_run);
        resolved.validate()?;
        Ok(resolved)
    }

    pub fn tool_config(&self) -> &ToolConfig {
        &self.file
    }
}

#[cfg(feature = "cli")]
impl ResolvedConfig {
    pub fn from_cli(cli: &crate::config::CliConfig) -> Result<Self> {
        let root = cli.root.clone().unwrap_or_else(default_root_dir);
        Self::load(root, cli.config.as_deref(), cli.dry_run)
    }
}

/// Parent of the directory containing the running executable, so a binary
/// installed at `<root>/bin/version-tag` looks at `<root>/ios` and `<root>/android`.
pub fn default_root_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().and_then(Path::parent).map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from(".."))
}

impl ConfigProvider for ResolvedConfig {
    fn root_dir(&self) -> &Path {
        &self.root
    }

    fn plist_path(&self) -> PathBuf {
        self.root.join(&self.file.paths.plist)
    }

    fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.file.paths.manifest)
    }

    fn ios_output_key(&self) -> &str {
        &self.file.outputs.ios_key
    }

    fn android_output_key(&self) -> &str {
        &self.file.outputs.android_key
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

impl Validate for ResolvedConfig {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_path("root", &self.root.to_string_lossy())?;
        self.file.validate()
    }
}
