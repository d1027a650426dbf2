use clap::Parser;
use mobile_version_tag::config::LogFormat;
use mobile_version_tag::utils::logger;
use mobile_version_tag::{CliConfig, OutputPublisher, ResolvedConfig, VersionTagRunner};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(),
    }

    tracing::debug!("CLI config: {:?}", cli);

    let config = match ResolvedConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let publisher = OutputPublisher::from_env();
    match publisher.sink() {
        Some(path) => tracing::info!("Appending outputs to {}", path.display()),
        None => tracing::info!("GITHUB_OUTPUT not set, printing outputs only"),
    }

    // Exit status stays 0 whether or not anything was found; only a failed
    // append to the output file aborts the run.
    let runner = VersionTagRunner::new(config, publisher);
    let report = runner.run()?;

    if report.ios.is_none() && report.android.is_none() {
        tracing::warn!("No version information found");
    }

    Ok(())
}
