pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::ResolvedConfig;
pub use config::toml_config::ToolConfig;
pub use core::extract::{read_android_manifest_version, read_plist_version};
pub use core::publish::OutputPublisher;
pub use core::runner::VersionTagRunner;
pub use domain::model::{ManifestVersionInfo, PlistVersionInfo, VersionReport};
pub use utils::error::{Result, VersionTagError};
