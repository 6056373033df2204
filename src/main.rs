use anyhow::{Context, Result};
use pipeline_patterns::cli::Cli;
use pipeline_patterns::core::DemoConfig;
use pipeline_patterns::execution::DemoDriver;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging; stdout is reserved for the demo itself
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    let config = match &cli.config {
        Some(path) => DemoConfig::from_file(path)
            .with_context(|| format!("Failed to load demo config from {}", path))?,
        None => DemoConfig::default(),
    };
    let config = cli.apply_overrides(config);
    config.validate().context("Invalid demo config")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    DemoDriver::new(config)
        .run(&mut out)
        .context("Failed to write demo output")?;

    Ok(())
}
