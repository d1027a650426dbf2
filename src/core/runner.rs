use crate::core::extract::{ManifestReader, PlistReader};
use crate::core::publish::OutputPublisher;
use crate::domain::model::VersionReport;
use crate::domain::ports::{ConfigProvider, VersionReader};
use crate::utils::error::Result;
use std::io::Write;

pub struct VersionTagRunner<C: ConfigProvider> {
    config: C,
    publisher: OutputPublisher,
}

impl<C: ConfigProvider> VersionTagRunner<C> {
    pub fn new(config: C, publisher: OutputPublisher) -> Self {
        let publisher = publisher.with_dry_run(config.dry_run());
        Self { config, publisher }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn run(&self) -> Result<VersionReport> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(&mut out)
    }

    /// iOS is read and published before Android. Build number and version
    /// code are extracted but not published.
    pub fn run_with_output<W: Write>(&self, out: &mut W) -> Result<VersionReport> {
        tracing::info!("Resolving versions under {}", self.config.root_dir().display());

        let ios = PlistReader.read_version(&self.config.plist_path());
        let android = ManifestReader.read_version(&self.config.manifest_path());

        if let Some(info) = &ios {
            self.publisher
                .publish_to(out, self.config.ios_output_key(), info.version.as_deref())?;
        }

        if let Some(info) = &android {
            self.publisher.publish_to(
                out,
                self.config.android_output_key(),
                info.version_name.as_deref(),
            )?;
        }

        let report = VersionReport { ios, android };
        if tracing::enabled!(tracing::Level::DEBUG) {
            let json = serde_json::to_string(&report)?;
            tracing::debug!("Version report: {}", json);
        }
        Ok(report)
    }
}
