use crate::utils::error::{Result, VersionTagError};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Writes `name=value` lines to the CI output file (when configured) and stdout.
#[derive(Debug, Clone, Default)]
pub struct OutputPublisher {
    sink: Option<PathBuf>,
    dry_run: bool,
}

impl OutputPublisher {
    pub fn new(sink: Option<PathBuf>) -> Self {
        Self {
            sink,
            dry_run: false,
        }
    }

    /// Picks up the append target from `GITHUB_OUTPUT`. An empty value counts as unset.
    pub fn from_env() -> Self {
        let sink = std::env::var_os(GITHUB_OUTPUT_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::new(sink)
    }

    /// In dry-run mode nothing is appended to the sink; stdout still gets the line.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn sink(&self) -> Option<&Path> {
        self.sink.as_deref()
    }

    pub fn publish(&self, name: &str, value: Option<&str>) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.publish_to(&mut out, name, value)
    }

    pub fn publish_to<W: Write>(&self, out: &mut W, name: &str, value: Option<&str>) -> Result<()> {
        let line = format_line(name, value);

        match (&self.sink, self.dry_run) {
            (Some(path), false) => append_line(path, &line)?,
            (Some(path), true) => {
                tracing::info!("Dry run: not writing '{}' to {}", line, path.display());
            }
            (None, _) => tracing::debug!("{} is not set, echoing only", GITHUB_OUTPUT_ENV),
        }

        writeln!(out, "{}", line)?;
        Ok(())
    }
}

/// An absent value is rendered as `null`.
pub fn format_line(name: &str, value: Option<&str>) -> String {
    format!("{}={}", name, value.unwrap_or("null"))
}

fn append_line(path: &Path, line: &str) -> Result<()> {
    let to_output_error = |source| VersionTagError::OutputError {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_output_error)?;
    writeln!(file, "{}", line).map_err(to_output_error)?;
    Ok(())
}
