use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use healthlog::report::{self, Format};
use healthlog::{config::Config, Columns, Metric, Overrides};

#[derive(Parser)]
#[command(name = "healthlog", about = "Daily fitness metrics from a health app log export")]
struct Cli {
    /// Metric to compute.
    #[arg(value_enum)]
    metric: MetricArg,

    /// Structured CSV log export. `-` reads from stdin.
    #[arg(short, long, default_value = "HealthApp_2k.log_structured.csv")]
    input: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Extra config file layered over the defaults and ~/.config/healthlog/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Drop rows with unparseable payloads instead of failing.
    #[arg(long)]
    skip_malformed: bool,

    /// Do not zero the leading step readings of the second day.
    #[arg(long)]
    no_correction: bool,

    /// Log at debug level.
    #[arg(long)]
    debug: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum MetricArg {
    Steps,
    Workouts,
    Calories,
    ActiveTime,
    Altitude,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Steps => Metric::Steps,
            MetricArg::Workouts => Metric::Workouts,
            MetricArg::Calories => Metric::Calories,
            MetricArg::ActiveTime => Metric::ActiveTime,
            MetricArg::Altitude => Metric::Altitude,
        }
    }
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let default_level = if cli.debug { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    match &cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .with_env_filter(filter)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter)
                .init();
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = Config::load(cli.config.as_deref())?;
    let options = healthlog::resolve_options(
        &config,
        Overrides {
            skip_malformed: cli.skip_malformed,
            no_correction: cli.no_correction,
        },
    );

    let mut feed = healthlog::open_feed(&cli.input, Columns::from(&config.input));
    tracing::info!(feed = %feed.name(), "loading log export");
    let raws = feed.load()?;

    let metric = Metric::from(cli.metric);
    let report = healthlog::analyze(raws, metric, &options)?;
    print!("{}", report::render(&report, cli.format, &config.output.time_format)?);
    Ok(())
}
