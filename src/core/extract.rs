use crate::domain::model::{ManifestVersionInfo, PlistVersionInfo};
use crate::domain::ports::VersionReader;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

pub const PLIST_VERSION_KEY: &str = "CFBundleShortVersionString";
pub const PLIST_BUILD_KEY: &str = "CFBundleVersion";

static PLIST_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| plist_key_pattern(PLIST_VERSION_KEY));
static PLIST_BUILD_RE: LazyLock<Regex> = LazyLock::new(|| plist_key_pattern(PLIST_BUILD_KEY));

static VERSION_NAME_RE: LazyLock<Regex> = LazyLock::new(|| manifest_attr_pattern("versionName"));
static VERSION_CODE_RE: LazyLock<Regex> = LazyLock::new(|| manifest_attr_pattern("versionCode"));

// Lazy match up to the first closing tag; `.` stays on the value's line.
fn plist_key_pattern(key: &str) -> Regex {
    Regex::new(&format!(
        r"<key>{}</key>\s*<string>(.*?)</string>",
        regex::escape(key)
    ))
    .expect("plist key pattern is valid")
}

fn manifest_attr_pattern(attr: &str) -> Regex {
    Regex::new(&format!(r#"android:{}="([^"]+)""#, regex::escape(attr)))
        .expect("manifest attribute pattern is valid")
}

fn first_capture(re: &Regex, content: &str) -> Option<String> {
    re.captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Pulls the marketing version and build number out of plist text.
pub fn parse_plist_version(content: &str) -> PlistVersionInfo {
    PlistVersionInfo {
        version: first_capture(&PLIST_VERSION_RE, content),
        build: first_capture(&PLIST_BUILD_RE, content),
    }
}

/// Pulls `android:versionName` and `android:versionCode` out of manifest text.
pub fn parse_manifest_version(content: &str) -> ManifestVersionInfo {
    ManifestVersionInfo {
        version_name: first_capture(&VERSION_NAME_RE, content),
        version_code: first_capture(&VERSION_CODE_RE, content),
    }
}

/// Reads an `Info.plist`. Any read failure is logged once and collapses to `None`.
pub fn read_plist_version<P: AsRef<Path>>(path: P) -> Option<PlistVersionInfo> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let info = parse_plist_version(&content);
            tracing::debug!("Read plist {}: {:?}", path.display(), info);
            Some(info)
        }
        Err(e) => {
            tracing::error!("Error reading plist file: {} ({})", e, path.display());
            None
        }
    }
}

/// Reads an `AndroidManifest.xml`. Any read failure is logged once and collapses to `None`.
pub fn read_android_manifest_version<P: AsRef<Path>>(path: P) -> Option<ManifestVersionInfo> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let info = parse_manifest_version(&content);
            tracing::debug!("Read manifest {}: {:?}", path.display(), info);
            Some(info)
        }
        Err(e) => {
            tracing::error!(
                "Error reading Android manifest file: {} ({})",
                e,
                path.display()
            );
            None
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlistReader;

impl VersionReader for PlistReader {
    type Info = PlistVersionInfo;

    fn read_version(&self, path: &Path) -> Option<PlistVersionInfo> {
        read_plist_version(path)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestReader;

impl VersionReader for ManifestReader {
    type Info = ManifestVersionInfo;

    fn read_version(&self, path: &Path) -> Option<ManifestVersionInfo> {
        read_android_manifest_version(path)
    }
}
