mod run;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use siteintel_core::OutputFormat;
use tracing_subscriber::EnvFilter;

use crate::run::RunOptions;

#[derive(Debug, Parser)]
#[command(name = "siteintel")]
#[command(about = "Collect Similarweb website profiles and export them as JSON or CSV")]
struct Cli {
    /// File with one domain or URL per line; `#` starts a comment line.
    #[arg(short, long, default_value = "data/inputs.sample.txt")]
    input: PathBuf,

    /// Output file. Defaults to a timestamped file in the configured output directory.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Export format; overrides the settings file.
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// JSON settings file.
    #[arg(short, long, default_value = "config/settings.example.json")]
    settings: PathBuf,

    /// Offline sample profiles, used instead of live fetches.
    #[arg(long, default_value = "data/sample.json")]
    samples: PathBuf,

    /// Resolve domains from offline samples only (default).
    #[arg(long)]
    offline: bool,

    /// Fetch profiles from the live API and ignore offline samples. Wins over `--offline`.
    #[arg(long)]
    online: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Json,
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}

impl Cli {
    fn run_options(&self) -> RunOptions {
        RunOptions {
            input: self.input.clone(),
            output: self.output.clone(),
            format: self.format.map(OutputFormat::from),
            samples: self.samples.clone(),
            online: self.online,
        }
    }
}

fn env_filter(default_level: &str) -> anyhow::Result<EnvFilter> {
    Ok(EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // The log level lives in the settings file, so settings are loaded under a
    // temporary subscriber before the real one is installed.
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(env_filter(siteintel_core::settings::DEFAULT_LOG_LEVEL)?)
        .finish();
    let settings = tracing::subscriber::with_default(bootstrap, || {
        siteintel_core::load_settings_from_env(&cli.settings)
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&settings.runner.log_level)?)
        .init();
    if cli.offline && cli.online {
        tracing::debug!("--online overrides --offline");
    }

    let summary = run::run(&settings, &cli.run_options()).await?;
    println!(
        "Exported {} records to {}",
        summary.record_count,
        summary.output_path.display()
    );

    Ok(())
}
