use crate::utils::error::{Result, VersionTagError};
use crate::utils::validation::{validate_output_key, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_PLIST_PATH: &str = "ios/Info.plist";
pub const DEFAULT_MANIFEST_PATH: &str = "android/AndroidManifest.xml";
pub const DEFAULT_IOS_KEY: &str = "ios_version";
pub const DEFAULT_ANDROID_KEY: &str = "android_version";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub outputs: OutputsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Relative to the project root unless absolute.
    pub plist: String,
    pub manifest: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            plist: DEFAULT_PLIST_PATH.to_string(),
            manifest: DEFAULT_MANIFEST_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputsConfig {
    pub ios_key: String,
    pub android_key: String,
}

impl Default for OutputsConfig {
    fn default() -> Self {
        Self {
            ios_key: DEFAULT_IOS_KEY.to_string(),
            android_key: DEFAULT_ANDROID_KEY.to_string(),
        }
    }
}

impl ToolConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| VersionTagError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| VersionTagError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::LazyLock;

        static ENV_VAR_RE: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures<'_>| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl Validate for ToolConfig {
    fn validate(&self) -> Result<()> {
        validate_path("paths.plist", &self.paths.plist)?;
        validate_path("paths.manifest", &self.paths.manifest)?;
        validate_output_key("outputs.ios_key", &self.outputs.ios_key)?;
        validate_output_key("outputs.android_key", &self.outputs.android_key)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ToolConfig::from_toml_str("").unwrap();

        assert_eq!(config, ToolConfig::default());
        assert_eq!(config.paths.plist, "ios/Info.plist");
        assert_eq!(config.outputs.android_key, "android_version");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = ToolConfig::from_toml_str(
            r#"
[paths]
plist = "apps/mobile/ios/Runner/Info.plist"

[outputs]
android_key = "play_version"
"#,
        )
        .unwrap();

        assert_eq!(config.paths.plist, "apps/mobile/ios/Runner/Info.plist");
        assert_eq!(config.paths.manifest, DEFAULT_MANIFEST_PATH);
        assert_eq!(config.outputs.ios_key, DEFAULT_IOS_KEY);
        assert_eq!(config.outputs.android_key, "play_version");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("VERSION_TAG_TEST_IOS_DIR", "client/ios");

        let config = ToolConfig::from_toml_str(
            r#"
[paths]
plist = "${VERSION_TAG_TEST_IOS_DIR}/Info.plist"
manifest = "${VERSION_TAG_TEST_UNSET_VAR}/AndroidManifest.xml"
"#,
        )
        .unwrap();

        assert_eq!(config.paths.plist, "client/ios/Info.plist");
        assert_eq!(
            config.paths.manifest,
            "${VERSION_TAG_TEST_UNSET_VAR}/AndroidManifest.xml"
        );

        std::env::remove_var("VERSION_TAG_TEST_IOS_DIR");
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = ToolConfig::from_toml_str("[outputs]\nbuild_key = \"ios_build\"\n").unwrap_err();
        assert!(matches!(err, VersionTagError::ConfigError { .. }));
    }

    #[test]
    fn test_invalid_output_key_fails_validation() {
        let config = ToolConfig::from_toml_str("[outputs]\nios_key = \"a=b\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[outputs]\nios_key = \"app_store_version\"\n")
            .unwrap();

        let config = ToolConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.outputs.ios_key, "app_store_version");
    }

    #[test]
    fn test_missing_config_file_is_config_error() {
        let err = ToolConfig::from_file("/nonexistent/version-tag.toml").unwrap_err();
        assert!(matches!(err, VersionTagError::ConfigError { .. }));
    }
}
