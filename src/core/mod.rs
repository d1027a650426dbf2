pub mod extract;
pub mod publish;
pub mod runner;

pub use crate::domain::model::{ManifestVersionInfo, PlistVersionInfo, VersionReport};
pub use crate::domain::ports::{ConfigProvider, VersionReader};
pub use crate::utils::error::Result;
