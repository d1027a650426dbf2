use serde::Serialize;

/// Version fields pulled from an iOS `Info.plist`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlistVersionInfo {
    /// `CFBundleShortVersionString`
    pub version: Option<String>,
    /// `CFBundleVersion`
    pub build: Option<String>,
}

/// Version fields pulled from an `AndroidManifest.xml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ManifestVersionInfo {
    pub version_name: Option<String>,
    pub version_code: Option<String>,
}

/// Everything one run found. `None` means the file could not be read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VersionReport {
    pub ios: Option<PlistVersionInfo>,
    pub android: Option<ManifestVersionInfo>,
}
