use clap::Parser;
use connectivity_probe::utils::{logger, validation::Validate};
use connectivity_probe::{CliConfig, ConnectivityProbe, HttpStatusSource, ProbeError};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config).await {
        tracing::error!("Connectivity probe aborted: {}", e);
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(config: &CliConfig) -> Result<(), ProbeError> {
    let settings = config.settings()?;
    settings.validate()?;

    let source = HttpStatusSource::new()?;
    let probe = ConnectivityProbe::new(source, settings);

    let mut stdout = std::io::stdout().lock();
    let report = probe.run(&mut stdout).await?;

    tracing::info!(
        "Probe of {} finished with status {} ({:?})",
        report.endpoint,
        report.status,
        report.outcome
    );
    Ok(())
}
