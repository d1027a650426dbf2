use mobile_version_tag::{
    read_android_manifest_version, read_plist_version, ManifestVersionInfo, OutputPublisher,
    ResolvedConfig, ToolConfig, VersionTagRunner,
};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_public_readers() {
    let temp_dir = TempDir::new().unwrap();
    let manifest = temp_dir.path().join("AndroidManifest.xml");
    std::fs::write(
        &manifest,
        r#"<manifest android:versionName="2.3.1" android:versionCode="45"></manifest>"#,
    )
    .unwrap();

    assert_eq!(
        read_android_manifest_version(&manifest),
        Some(ManifestVersionInfo {
            version_name: Some("2.3.1".to_string()),
            version_code: Some("45".to_string()),
        })
    );
    assert_eq!(read_plist_version(temp_dir.path().join("Info.plist")), None);
}

#[test]
fn test_runner_report_serializes_to_json() {
    let temp_dir = TempDir::new().unwrap();
    let ios_dir = temp_dir.path().join("ios");
    std::fs::create_dir_all(&ios_dir).unwrap();
    std::fs::write(
        ios_dir.join("Info.plist"),
        "<key>CFBundleShortVersionString</key>\n<string>5.0.0</string>\n<key>CFBundleVersion</key>\n<string>500</string>",
    )
    .unwrap();

    let config = ResolvedConfig::new(
        PathBuf::from(temp_dir.path()),
        ToolConfig::default(),
        false,
    );
    let runner = VersionTagRunner::new(config, OutputPublisher::new(None));

    let mut out = Vec::new();
    let report = runner.run_with_output(&mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "ios_version=5.0.0\n");
    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        serde_json::json!({
            "ios": { "version": "5.0.0", "build": "500" },
            "android": null
        })
    );
}
